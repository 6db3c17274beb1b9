use std::collections::HashMap;

use anyhow::{Context, Result};
use async_trait::async_trait;
use stripe::{
    Client, CreatePaymentIntent, CreatePaymentIntentAutomaticPaymentMethods, Currency,
    PaymentIntent,
};

/// A validated charge order in the form the gateway expects: integer cents,
/// receipt email, free-text description, and the customer name carried as
/// metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentIntentParams {
    pub amount_cents: i64,
    pub receipt_email: String,
    pub description: String,
    pub customer_name: String,
}

/// Adapter for the external payment provider. Handlers only see this trait,
/// so tests can substitute a stub for the live Stripe client.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Creates a payment intent and returns its client secret.
    async fn create_payment_intent(&self, params: &PaymentIntentParams) -> Result<String>;
}

pub struct StripeGateway {
    client: Client,
}

impl StripeGateway {
    pub fn new(secret_key: String) -> Self {
        Self {
            client: Client::new(secret_key),
        }
    }
}

#[async_trait]
impl PaymentGateway for StripeGateway {
    async fn create_payment_intent(&self, params: &PaymentIntentParams) -> Result<String> {
        // Stripe expects amount in smallest currency unit (e.g., cents)
        let mut create_intent = CreatePaymentIntent::new(params.amount_cents, Currency::USD);
        create_intent.receipt_email = Some(params.receipt_email.as_str());
        create_intent.description = Some(params.description.as_str());
        create_intent.metadata = Some(HashMap::from([(
            "customerName".to_string(),
            params.customer_name.clone(),
        )]));
        create_intent.automatic_payment_methods =
            Some(CreatePaymentIntentAutomaticPaymentMethods {
                enabled: true,
                allow_redirects: None,
            });

        tracing::info!(
            email = %params.receipt_email,
            amount_cents = params.amount_cents,
            "Creating payment intent"
        );

        let intent = PaymentIntent::create(&self.client, create_intent).await?;
        intent
            .client_secret
            .context("payment intent was created without a client secret")
    }
}
