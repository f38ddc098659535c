pub mod anthropic;
pub mod prompts;

// ── Types ─────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct AiRequest {
    pub system: String,
    pub prompt: String,
}

#[derive(Debug, Clone)]
pub struct AiResponse {
    pub text: String,
    pub provider: String,
    pub model: String,
}

#[derive(Debug)]
pub struct AiError(pub String);

impl std::fmt::Display for AiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ── Provider Seam ─────────────────────────────────────

/// A hosted model that turns one prompt into one free-text reply.
///
/// Implementations block; callers on the async runtime must run them
/// through `spawn_blocking`.
pub trait Completer: Send + Sync {
    fn name(&self) -> &'static str;

    fn model(&self) -> &str;

    fn complete(&self, req: &AiRequest) -> Result<AiResponse, AiError>;
}
