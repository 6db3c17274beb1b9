use crate::models::{
    ErrorResponse, PaymentIntentResponse, PaymentRequest, PaymentRequestError,
    MINIMUM_AMOUNT_CENTS,
};
use crate::payment_service::{PaymentGateway, PaymentIntentParams};
use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;

// Handler for creating a payment intent
pub async fn create_payment_intent_handler(
    gateway: web::Data<Arc<dyn PaymentGateway>>,
    body: web::Bytes,
) -> impl Responder {
    tracing::info!("Received HTTP create payment intent request");

    let request = match PaymentRequest::from_body(&body) {
        Ok(request) => request,
        Err(e @ PaymentRequestError::MissingFields) => {
            return HttpResponse::BadRequest().json(ErrorResponse {
                error: e.to_string(),
            });
        }
        Err(PaymentRequestError::InvalidJson(e)) => {
            tracing::error!(error = %e, "Failed to parse payment request body");
            return HttpResponse::InternalServerError().json(ErrorResponse {
                error: format!("An internal server error occurred: {}", e),
            });
        }
    };

    let amount_cents = request.amount_in_cents();
    if amount_cents < MINIMUM_AMOUNT_CENTS {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Amount must be at least $0.50.".to_string(),
        });
    }

    let params = PaymentIntentParams {
        amount_cents,
        receipt_email: request.customer_email,
        description: request.description,
        customer_name: request.customer_name,
    };

    match gateway.create_payment_intent(&params).await {
        Ok(client_secret) => {
            tracing::info!(
                email = %params.receipt_email,
                amount_cents = amount_cents,
                "Successfully created payment intent"
            );
            HttpResponse::Ok().json(PaymentIntentResponse { client_secret })
        }
        Err(e) => {
            tracing::error!(
                error = %e,
                email = %params.receipt_email,
                amount_cents = amount_cents,
                "Failed to create payment intent"
            );
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: format!("An internal server error occurred: {}", e),
            })
        }
    }
}

// Catch-all for non-POST methods on the payment intent resource
pub async fn method_not_allowed() -> impl Responder {
    HttpResponse::MethodNotAllowed()
        .insert_header(("Allow", "POST"))
        .body("Method Not Allowed")
}
