use serde::Serialize;

use crate::ideas::{IdeaError, IdeaQuery};
use crate::models::idea::Idea;

pub const NICHE_MISSING: &str = "Please enter a niche";
pub const REQUEST_FAILED: &str = "Failed to generate ideas. Please try again.";

/// Everything the page shows: the two inputs, whether a request is in
/// flight, the last error and the last ideas returned.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PageView {
    pub niche: String,
    pub trend: String,
    pub loading: bool,
    pub error: String,
    pub ideas: Vec<Idea>,
}

impl PageView {
    pub fn new(niche: &str, trend: &str) -> Self {
        PageView {
            niche: niche.to_string(),
            trend: trend.to_string(),
            ..PageView::default()
        }
    }

    /// Start a generation. Returns the query to send, or `None` after
    /// recording a local error when the niche is blank.
    pub fn begin(&mut self) -> Option<IdeaQuery> {
        if self.niche.trim().is_empty() {
            self.error = NICHE_MISSING.to_string();
            return None;
        }
        let query = IdeaQuery::new(Some(self.niche.as_str()), Some(self.trend.as_str())).ok()?;
        self.error.clear();
        self.ideas.clear();
        self.loading = true;
        Some(query)
    }

    /// Apply the outcome of the request started by `begin`.
    pub fn finish(&mut self, outcome: Result<Vec<Idea>, IdeaError>) {
        self.loading = false;
        match outcome {
            Ok(ideas) => self.ideas = ideas,
            Err(e) => {
                log::warn!("[page] generation failed: {}", e);
                self.error = REQUEST_FAILED.to_string();
            }
        }
    }

    /// Feature blurbs show only on an idle page with nothing to display.
    pub fn show_features(&self) -> bool {
        self.ideas.is_empty() && !self.loading
    }
}
