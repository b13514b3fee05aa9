use serde::{Serialize, Serializer};

/// Outcome of running payment-intent detection over a message
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IntentResult {
    pub detected: bool,
    #[serde(skip_serializing_if = "Option::is_none", serialize_with = "serialize_opt_amount")]
    pub amount: Option<f64>,
    /// Human-readable summary, sent as `message` on the wire
    #[serde(rename = "message", skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl IntentResult {
    pub fn none() -> Self {
        Self {
            detected: false,
            amount: None,
            note: None,
        }
    }

    pub fn payment(amount: f64) -> Self {
        Self {
            detected: true,
            amount: Some(amount),
            note: Some(format!("Payment of ${} detected", format_amount(amount))),
        }
    }
}

/// Render an amount without a trailing `.0` for whole values (`1900`, `250.5`)
pub fn format_amount(amount: f64) -> String {
    if amount.fract() == 0.0 && amount.abs() < 1e15 {
        format!("{}", amount as i64)
    } else {
        format!("{}", amount)
    }
}

/// Whole amounts go out as JSON integers
pub fn serialize_amount<S: Serializer>(amount: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if amount.fract() == 0.0 && amount.abs() < 1e15 {
        serializer.serialize_i64(*amount as i64)
    } else {
        serializer.serialize_f64(*amount)
    }
}

fn serialize_opt_amount<S: Serializer>(amount: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error> {
    match amount {
        Some(value) => serialize_amount(value, serializer),
        None => serializer.serialize_none(),
    }
}
