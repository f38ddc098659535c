use log::{error, info, warn};
use std::path::Path;
use std::process;

use crate::config::AppConfig;

/// Critical template files (relative to the template dir). The page cannot render without these.
const CRITICAL_TEMPLATES: &[&str] = &["index.html.tera"];

/// Static assets the page links to
const STATIC_ASSETS: &[&str] = &["website/static/css/app.css", "website/static/js/app.js"];

/// Outcome of a boot check, kept separate from the exit so it can be tested.
#[derive(Debug, Default, PartialEq)]
pub struct BootReport {
    pub errors: u32,
    pub warnings: u32,
}

/// Check templates and static assets under `template_dir` / `website/static`.
pub fn check(template_dir: &Path, static_assets: &[&str]) -> BootReport {
    let mut report = BootReport::default();

    // ── 1. Critical templates ──────────────────────────
    if !template_dir.is_dir() {
        error!("  MISSING template directory: {}", template_dir.display());
        report.errors += 1;
    } else {
        for file in CRITICAL_TEMPLATES {
            let path = template_dir.join(file);
            if !path.exists() {
                error!("  MISSING critical template: {}", path.display());
                report.errors += 1;
            }
        }
    }

    // ── 2. Static assets ───────────────────────────────
    for file in static_assets {
        if !Path::new(file).exists() {
            warn!("  Missing static asset: {} (page will fall back to plain HTML)", file);
            report.warnings += 1;
        }
    }

    report
}

/// Run all boot checks. Call this before Rocket launches.
/// Aborts if critical files are absent; logs which mode ideas will be served in.
pub fn run(template_dir: &Path, config: &AppConfig) {
    info!("[boot] Shortsmith boot check starting...");

    let mut report = check(template_dir, STATIC_ASSETS);

    if !Path::new("Rocket.toml").exists() {
        warn!("  Rocket.toml not found; using default config");
        report.warnings += 1;
    }

    match config.api_key() {
        Some(_) => info!(
            "[boot] Anthropic key present; ideas come from {}",
            config.anthropic_model
        ),
        None => info!("[boot] No Anthropic key configured; serving fallback ideas only"),
    }

    // ── Summary ─────────────────────────────────────────
    if report.errors > 0 {
        error!(
            "[boot] Boot check FAILED: {} error(s), {} warning(s). Aborting.",
            report.errors, report.warnings
        );
        process::exit(1);
    }

    if report.warnings > 0 {
        warn!(
            "[boot] Boot check passed with {} warning(s). Some features may not work correctly.",
            report.warnings
        );
    } else {
        info!("[boot] Boot check passed. All systems go.");
    }
}
