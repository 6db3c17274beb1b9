use serde::Serialize;
use serde_json::Value;

/// Stripe rejects charges below 50 cents for USD.
pub const MINIMUM_AMOUNT_CENTS: i64 = 50;

#[derive(Debug, thiserror::Error)]
pub enum PaymentRequestError {
    #[error("Missing required payment information.")]
    MissingFields,
    #[error(transparent)]
    InvalidJson(#[from] serde_json::Error),
}

// Request and Response models
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentRequest {
    pub amount: f64,
    pub customer_email: String,
    pub customer_name: String,
    pub description: String,
}

impl PaymentRequest {
    /// Parses and validates a raw request body. An empty body is treated as
    /// an empty JSON object; a field that is absent, empty, or of the wrong
    /// type counts as missing. The amount must be a non-zero JSON number.
    pub fn from_body(body: &[u8]) -> Result<Self, PaymentRequestError> {
        let value: Value = if body.is_empty() {
            Value::Object(serde_json::Map::new())
        } else {
            serde_json::from_slice(body)?
        };

        let amount = match value.get("amount") {
            Some(Value::Number(n)) => n.as_f64().ok_or(PaymentRequestError::MissingFields)?,
            _ => return Err(PaymentRequestError::MissingFields),
        };
        if amount == 0.0 {
            return Err(PaymentRequestError::MissingFields);
        }

        Ok(Self {
            amount,
            customer_email: required_string(&value, "customerEmail")?,
            customer_name: required_string(&value, "customerName")?,
            description: required_string(&value, "description")?,
        })
    }

    /// Converts the amount from dollars to cents, rounding half away from
    /// zero to the nearest cent.
    pub fn amount_in_cents(&self) -> i64 {
        (self.amount * 100.0).round() as i64
    }
}

fn required_string(value: &Value, field: &str) -> Result<String, PaymentRequestError> {
    match value.get(field) {
        Some(Value::String(s)) if !s.is_empty() => Ok(s.clone()),
        _ => Err(PaymentRequestError::MissingFields),
    }
}

#[derive(Debug, Serialize)]
pub struct PaymentIntentResponse {
    #[serde(rename = "clientSecret")]
    pub client_secret: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
