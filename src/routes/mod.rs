pub mod api;
pub mod public;

use rocket::tokio;
use std::sync::Arc;

use crate::ideas::{Generated, IdeaError, IdeaQuery, IdeaService};

/// Run a generation on the blocking pool so the upstream call never stalls
/// the async workers.
pub async fn generate_blocking(
    service: &Arc<IdeaService>,
    query: IdeaQuery,
    request_id: String,
) -> Result<Generated, IdeaError> {
    let service = Arc::clone(service);
    tokio::task::spawn_blocking(move || service.generate(&query, &request_id))
        .await
        .map_err(|e| IdeaError::Internal(format!("generation task failed: {}", e)))
}

pub fn new_request_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
