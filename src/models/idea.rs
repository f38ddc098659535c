use serde::{Deserialize, Serialize};

pub const MIN_VIRAL_SCORE: u8 = 1;
pub const MAX_VIRAL_SCORE: u8 = 10;

/// One short-video concept. Built per request and never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Idea {
    pub title: String,
    pub hook: String,
    pub script: String,
    pub hashtags: Vec<String>,
    #[serde(rename = "viralScore")]
    pub viral_score: u8,
}

impl Idea {
    /// Check the field-level invariants a decoded idea must hold before it
    /// can be handed to a caller.
    pub fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("title is empty".into());
        }
        if self.hook.trim().is_empty() {
            return Err("hook is empty".into());
        }
        if self.script.trim().is_empty() {
            return Err("script is empty".into());
        }
        if self.hashtags.is_empty() {
            return Err("hashtags is empty".into());
        }
        if self.hashtags.iter().any(|h| h.trim().is_empty()) {
            return Err("hashtags contains an empty entry".into());
        }
        if !(MIN_VIRAL_SCORE..=MAX_VIRAL_SCORE).contains(&self.viral_score) {
            return Err(format!(
                "viralScore {} outside {}..={}",
                self.viral_score, MIN_VIRAL_SCORE, MAX_VIRAL_SCORE
            ));
        }
        Ok(())
    }
}
