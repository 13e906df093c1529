//! HTTP inbound adapter exposing the community REST endpoints.

pub mod assets;
pub mod auth;
pub mod bodies;
pub mod complaints;
pub mod documents;
pub mod error;
pub mod health;
pub mod maintenance;
pub mod meta;
pub mod notices;
pub mod payments;
pub mod reservations;
pub mod schemas;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod validation;

use actix_web::web;

pub use error::ApiResult;

/// Register every community route together with the extractor error
/// handlers. Health probes and docs are mounted separately by the server.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use society_backend::inbound::http::configure;
///
/// let _app = App::new().configure(configure);
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(error::json_error_handler))
        .app_data(web::QueryConfig::default().error_handler(error::query_error_handler))
        .service(meta::banner)
        .service(meta::probe_storage)
        .service(meta::list_collections)
        .service(auth::login)
        .service(maintenance::create_ticket)
        .service(maintenance::list_tickets)
        .service(maintenance::update_ticket_status)
        .service(payments::create_payment)
        .service(payments::list_payments)
        .service(notices::create_notice)
        .service(notices::list_notices)
        .service(assets::create_asset)
        .service(assets::list_assets)
        .service(reservations::create_reservation)
        .service(reservations::list_reservations)
        .service(complaints::create_complaint)
        .service(complaints::list_complaints)
        .service(documents::create_document)
        .service(documents::list_documents);
}
