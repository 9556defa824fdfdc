use actix_cors::Cors;
use actix_files::Files;
use actix_web::cookie::Key;
use actix_web::{App, HttpServer, middleware, web};
use actix_web_flash_messages::{FlashMessagesFramework, storage::CookieMessageStore};
use tera::Tera;

use crate::models::config::ServerConfig;
use crate::repository::http::HttpApplicationRepository;
use crate::routes::applications::{
    api_v1_applications, export_applications, show_applications, show_index,
};

pub mod domain;
pub mod dto;
pub mod export;
pub mod models;
pub mod pagination;
pub mod repository;
pub mod routes;
pub mod search;
pub mod services;

/// Builds and runs the Actix-Web HTTP server using the provided configuration.
pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
    // Shared client for the upstream land-registry search service.
    let repo = HttpApplicationRepository::new(server_config.search_api_url.clone());

    // Key and store for flash messages.
    let secret_key = Key::from(server_config.secret.as_bytes());
    let message_store = CookieMessageStore::builder(secret_key).build();
    let message_framework = FlashMessagesFramework::builder(message_store).build();

    let tera = Tera::new(&server_config.templates_dir)
        .map_err(|e| std::io::Error::other(format!("Template parsing error(s): {e}")))?;

    let bind_address = (server_config.address.clone(), server_config.port);

    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .wrap(message_framework.clone())
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .service(Files::new("/assets", "./assets"))
            .service(web::scope("/api").service(api_v1_applications))
            .service(show_index)
            .service(show_applications)
            .service(export_applications)
            .app_data(web::Data::new(tera.clone()))
            .app_data(web::Data::new(repo.clone()))
            .app_data(web::Data::new(server_config.clone()))
    })
    .bind(bind_address)?
    .run()
    .await
}
