pub mod fallback;
pub mod parse;

use std::sync::Arc;

use crate::ai::anthropic::Anthropic;
use crate::ai::{prompts, AiRequest, Completer};
use crate::config::AppConfig;
use crate::models::idea::Idea;

/// Ideas requested per generation, from the model or the fallback.
pub const IDEA_COUNT: usize = 3;

pub const NICHE_REQUIRED: &str = "Niche is required";

// ── Errors ────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum IdeaError {
    /// Caller sent no usable niche.
    Validation(String),
    /// Anything else that went wrong outside the upstream call.
    Internal(String),
}

impl std::fmt::Display for IdeaError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IdeaError::Validation(msg) => write!(f, "validation: {}", msg),
            IdeaError::Internal(msg) => write!(f, "internal: {}", msg),
        }
    }
}

// ── Query ─────────────────────────────────────────────

/// A validated niche plus an optional trend. An empty trend becomes `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct IdeaQuery {
    pub niche: String,
    pub trend: Option<String>,
}

impl IdeaQuery {
    pub fn new(niche: Option<&str>, trend: Option<&str>) -> Result<Self, IdeaError> {
        let niche = match niche {
            Some(n) if !n.is_empty() => n.to_string(),
            _ => return Err(IdeaError::Validation(NICHE_REQUIRED.into())),
        };
        let trend = trend.filter(|t| !t.is_empty()).map(|t| t.to_string());
        Ok(IdeaQuery { niche, trend })
    }
}

// ── Source ────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdeaSource {
    Model,
    Fallback,
}

impl IdeaSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            IdeaSource::Model => "model",
            IdeaSource::Fallback => "fallback",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Generated {
    pub ideas: Vec<Idea>,
    pub source: IdeaSource,
}

// ── Service ───────────────────────────────────────────

/// Chooses between the hosted model and the fallback templates.
///
/// Built once at startup; holds no per-request state.
pub struct IdeaService {
    completer: Option<Arc<dyn Completer>>,
}

impl IdeaService {
    pub fn new(completer: Option<Arc<dyn Completer>>) -> Self {
        IdeaService { completer }
    }

    /// Model mode when the config carries a credential, fallback mode otherwise.
    pub fn from_config(config: &AppConfig) -> Self {
        let completer = Anthropic::from_config(config).map(|a| Arc::new(a) as Arc<dyn Completer>);
        Self::new(completer)
    }

    pub fn is_enabled(&self) -> bool {
        self.completer.is_some()
    }

    pub fn provider(&self) -> Option<(&'static str, String)> {
        self.completer
            .as_ref()
            .map(|c| (c.name(), c.model().to_string()))
    }

    /// Produce ideas for `query`. Blocks on the upstream call when one is made.
    ///
    /// Upstream trouble never escapes: it is logged and the fallback served.
    pub fn generate(&self, query: &IdeaQuery, request_id: &str) -> Generated {
        let trend = query.trend.as_deref();

        let completer = match &self.completer {
            Some(c) => c,
            None => {
                log::info!("[ideas] {} no API key configured; serving fallback", request_id);
                return Self::fallback(query);
            }
        };

        let req = AiRequest {
            system: prompts::ideas_system(),
            prompt: prompts::viral_ideas(&query.niche, trend),
        };

        let resp = match completer.complete(&req) {
            Ok(resp) => resp,
            Err(e) => {
                log::warn!("[ideas] {} {} call failed: {}", request_id, completer.name(), e);
                return Self::fallback(query);
            }
        };

        match parse::decode_ideas(&resp.text) {
            Ok(ideas) => {
                log::info!(
                    "[ideas] {} {} ideas from {} ({})",
                    request_id,
                    ideas.len(),
                    resp.provider,
                    resp.model
                );
                Generated {
                    ideas,
                    source: IdeaSource::Model,
                }
            }
            Err(e) => {
                log::warn!("[ideas] {} unusable {} reply: {}", request_id, resp.provider, e);
                Self::fallback(query)
            }
        }
    }

    fn fallback(query: &IdeaQuery) -> Generated {
        Generated {
            ideas: fallback::ideas(&query.niche, query.trend.as_deref()),
            source: IdeaSource::Fallback,
        }
    }
}
