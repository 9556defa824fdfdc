//! HTTP route handlers and shared response helpers.

pub mod applications;

use actix_web::HttpResponse;
use actix_web_flash_messages::Level;
use log::error;
use tera::{Context, Tera};

/// Maps a flash message level onto the alert style used by the templates.
pub fn alert_level_to_str(level: &Level) -> &'static str {
    match level {
        Level::Error => "danger",
        Level::Warning => "warning",
        Level::Success => "success",
        _ => "info",
    }
}

/// 303 redirect to the given location.
pub fn redirect(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header(("Location", location))
        .finish()
}

/// Renders a Tera template, logging and converting failures into a 500.
pub fn render_template(tera: &Tera, name: &str, context: &Context) -> HttpResponse {
    match tera.render(name, context) {
        Ok(body) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(e) => {
            error!("Failed to render template {name}: {e}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
