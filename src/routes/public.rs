use rocket::form::Form;
use rocket::response::content::RawHtml;
use rocket::State;
use rocket_dyn_templates::Template;
use serde_json::json;
use std::sync::Arc;

use crate::ideas::IdeaService;
use crate::render::PageView;

use super::{generate_blocking, new_request_id};

#[derive(Debug, FromForm)]
pub struct IdeaForm {
    #[field(default = String::new())]
    pub niche: String,
    #[field(default = String::new())]
    pub trend: String,
}

fn page(view: &PageView) -> Template {
    Template::render(
        "index",
        json!({
            "view": view,
            "show_features": view.show_features(),
        }),
    )
}

// ── Homepage ───────────────────────────────────────────

#[get("/")]
pub fn homepage() -> Template {
    page(&PageView::default())
}

/// Form submission without JavaScript: same flow as the script, run here.
#[post("/", data = "<form>")]
pub async fn homepage_submit(service: &State<Arc<IdeaService>>, form: Form<IdeaForm>) -> Template {
    let mut view = PageView::new(&form.niche, &form.trend);
    if let Some(query) = view.begin() {
        let outcome = generate_blocking(service.inner(), query, new_request_id())
            .await
            .map(|g| g.ideas);
        view.finish(outcome);
    }
    page(&view)
}

// ── Catchers ───────────────────────────────────────────

#[catch(404)]
pub fn not_found() -> RawHtml<String> {
    RawHtml("<html><body style='font-family:sans-serif;text-align:center;padding:80px'><h1>404</h1><p>Page not found.</p><a href='/'>← Home</a></body></html>".to_string())
}

#[catch(500)]
pub fn server_error() -> RawHtml<String> {
    RawHtml("<html><body style='font-family:sans-serif;text-align:center;padding:80px'><h1>500</h1><p>Internal server error.</p><a href='/'>← Home</a></body></html>".to_string())
}

pub fn routes() -> Vec<rocket::Route> {
    routes![homepage, homepage_submit]
}

pub fn catchers() -> Vec<rocket::Catcher> {
    catchers![not_found, server_error]
}
