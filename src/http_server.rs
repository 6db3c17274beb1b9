use actix_cors::Cors;
use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use std::sync::Arc;

use crate::create_payment_intent_handler::{create_payment_intent_handler, method_not_allowed};
use crate::health_check::health_check;
use crate::payment_service::PaymentGateway;

// Server startup function
pub async fn start_http_server(
    gateway: Arc<dyn PaymentGateway>,
    host: &str,
    port: u16,
) -> std::io::Result<()> {
    tracing::info!("Starting HTTP server at {}:{}", host, port);

    HttpServer::new(move || {
        // Configure CORS; the endpoint is called cross-origin by the
        // storefront front-end.
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header()
            .max_age(3600);

        App::new()
            .wrap(Logger::default())
            .wrap(cors)
            .app_data(web::Data::new(gateway.clone()))
            .service(
                web::scope("/api")
                    .service(
                        web::resource("/create-payment-intent")
                            .route(web::post().to(create_payment_intent_handler))
                            .route(web::route().to(method_not_allowed)),
                    )
                    .route("/health", web::get().to(health_check)),
            )
    })
    .bind((host, port))?
    .run()
    .await
}
