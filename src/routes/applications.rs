use actix_web::{HttpResponse, Responder, get, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use log::error;
use tera::{Context, Tera};

use crate::dto::applications::ApplicationsQuery;
use crate::repository::http::HttpApplicationRepository;
use crate::routes::{alert_level_to_str, redirect, render_template};
use crate::services::applications as applications_service;

const LIST_ROUTE: &str = "/applications";

#[get("/")]
pub async fn show_index() -> impl Responder {
    redirect(LIST_ROUTE)
}

#[get("/applications")]
pub async fn show_applications(
    params: web::Query<ApplicationsQuery>,
    repo: web::Data<HttpApplicationRepository>,
    tera: web::Data<Tera>,
    flash_messages: IncomingFlashMessages,
) -> impl Responder {
    let query = params.into_inner();
    let had_query = query != ApplicationsQuery::default();

    let page = match applications_service::load_applications_page(repo.get_ref(), query).await {
        Ok(page) => page,
        Err(e) => {
            error!("Failed to load applications: {e}");
            FlashMessage::error("Error searching applications".to_string()).send();
            // Safe reset: drop the filters and land back on the bare list.
            // A bare request that still fails gets an error page rather
            // than a redirect to itself.
            if had_query {
                return redirect(LIST_ROUTE);
            }
            return HttpResponse::InternalServerError().finish();
        }
    };

    let alerts = flash_messages
        .iter()
        .map(|f| (f.content(), alert_level_to_str(&f.level())))
        .collect::<Vec<_>>();

    let mut context = Context::new();
    context.insert("alerts", &alerts);
    context.insert("current_page", "applications");
    context.insert("page", &page);

    render_template(&tera, "applications/index.html", &context)
}

#[get("/applications/export")]
pub async fn export_applications(
    params: web::Query<ApplicationsQuery>,
    repo: web::Data<HttpApplicationRepository>,
) -> impl Responder {
    let query = params.into_inner();
    let back = format!("{LIST_ROUTE}?{}", query.query_string());

    match applications_service::export_applications_csv(repo.get_ref(), query).await {
        Ok((filename, bytes)) => HttpResponse::Ok()
            .content_type("text/csv; charset=utf-8")
            .insert_header((
                "Content-Disposition",
                format!("attachment; filename=\"{filename}\""),
            ))
            .body(bytes),
        Err(e) => {
            error!("Failed to export applications: {e}");
            FlashMessage::error("Error exporting applications".to_string()).send();
            redirect(&back)
        }
    }
}

#[get("/v1/applications")]
pub async fn api_v1_applications(
    params: web::Query<ApplicationsQuery>,
    repo: web::Data<HttpApplicationRepository>,
) -> impl Responder {
    match applications_service::load_applications_page(repo.get_ref(), params.into_inner()).await {
        Ok(page) => HttpResponse::Ok().json(page),
        Err(e) => {
            error!("Failed to list applications: {e}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
