#[macro_use]
extern crate rocket;

use rocket::fs::FileServer;
use rocket_dyn_templates::Template;
use std::path::PathBuf;
use std::sync::Arc;

mod ai;
mod boot;
mod config;
mod ideas;
mod models;
mod render;
mod routes;


use config::AppConfig;
use ideas::IdeaService;

/// Assemble the server around an already-built idea service.
pub fn app(config: AppConfig, service: IdeaService) -> rocket::Rocket<rocket::Build> {
    rocket::build()
        .manage(Arc::new(service))
        .manage(config)
        .attach(Template::fairing())
        .mount("/static", FileServer::from("website/static"))
        .mount("/", routes::public::routes())
        .mount("/api", routes::api::routes())
        .register("/", routes::public::catchers())
        .register("/api", routes::api::catchers())
}

#[launch]
fn rocket() -> _ {
    env_logger::init();

    let figment = rocket::Config::figment();
    let config = match AppConfig::from_figment(&figment) {
        Ok(c) => c,
        Err(e) => {
            log::error!("[boot] Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Boot check: templates and static assets must be in place
    let template_dir: PathBuf = figment
        .extract_inner("template_dir")
        .unwrap_or_else(|_| PathBuf::from("templates"));
    boot::run(&template_dir, &config);

    let service = IdeaService::from_config(&config);
    app(config, service)
}
