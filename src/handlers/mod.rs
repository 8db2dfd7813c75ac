use actix_web::web;

pub mod analyze;

/// Register the counting service routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(analyze::analyze_text);
}
