use rocket::http::{Header, Status};
use rocket::response::{self, Responder};
use rocket::serde::json::{self, Json};
use rocket::{Request, State};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;

use crate::config::AppConfig;
use crate::ideas::{IdeaQuery, IdeaService, IdeaSource, NICHE_REQUIRED};

use super::{generate_blocking, new_request_id};

pub const GENERIC_FAILURE: &str = "Failed to generate ideas";

// ── Request / Response Types ──────────────────────────

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    #[serde(default)]
    pub niche: Option<String>,
    #[serde(default)]
    pub trend: Option<String>,
}

/// JSON body plus the headers that identify the request and where its
/// ideas came from.
pub struct IdeasResponse {
    pub status: Status,
    pub body: Value,
    pub source: Option<IdeaSource>,
    pub request_id: String,
}

impl IdeasResponse {
    fn error(status: Status, message: &str, request_id: String) -> Self {
        IdeasResponse {
            status,
            body: json!({ "error": message }),
            source: None,
            request_id,
        }
    }
}

impl<'r> Responder<'r, 'static> for IdeasResponse {
    fn respond_to(self, req: &'r Request<'_>) -> response::Result<'static> {
        let mut resp = (self.status, Json(self.body)).respond_to(req)?;
        resp.set_header(Header::new("X-Request-Id", self.request_id));
        if let Some(source) = self.source {
            resp.set_header(Header::new("X-Ideas-Source", source.as_str()));
        }
        Ok(resp)
    }
}

// ── Generate ──────────────────────────────────────────

#[post("/generate", data = "<body>")]
pub async fn generate(
    service: &State<Arc<IdeaService>>,
    body: Result<Json<GenerateRequest>, json::Error<'_>>,
) -> IdeasResponse {
    let request_id = new_request_id();

    let body = match body {
        Ok(b) => b.into_inner(),
        Err(e) => {
            log::error!("[api] {} unreadable request body: {:?}", request_id, e);
            return IdeasResponse::error(Status::InternalServerError, GENERIC_FAILURE, request_id);
        }
    };

    let query = match IdeaQuery::new(body.niche.as_deref(), body.trend.as_deref()) {
        Ok(q) => q,
        Err(e) => {
            log::info!("[api] {} rejected: {}", request_id, e);
            return IdeasResponse::error(Status::BadRequest, NICHE_REQUIRED, request_id);
        }
    };

    match generate_blocking(service.inner(), query, request_id.clone()).await {
        Ok(generated) => IdeasResponse {
            status: Status::Ok,
            body: json!({ "ideas": generated.ideas }),
            source: Some(generated.source),
            request_id,
        },
        Err(e) => {
            log::error!("[api] {} error generating ideas: {}", request_id, e);
            IdeasResponse::error(Status::InternalServerError, GENERIC_FAILURE, request_id)
        }
    }
}

// ── Status ────────────────────────────────────────────

#[get("/status")]
pub fn status(service: &State<Arc<IdeaService>>, config: &State<AppConfig>) -> Json<Value> {
    let (provider, model) = service
        .provider()
        .unwrap_or(("anthropic", config.anthropic_model.clone()));
    Json(json!({
        "enabled": service.is_enabled(),
        "provider": provider,
        "model": model,
    }))
}

// ── Catchers ──────────────────────────────────────────

#[catch(404)]
pub fn not_found() -> Json<Value> {
    Json(json!({ "error": "Not found" }))
}

#[catch(500)]
pub fn server_error() -> Json<Value> {
    Json(json!({ "error": GENERIC_FAILURE }))
}

pub fn routes() -> Vec<rocket::Route> {
    routes![generate, status]
}

pub fn catchers() -> Vec<rocket::Catcher> {
    catchers![not_found, server_error]
}
