//! Payment intent detection - keyword and amount heuristics over free text

use once_cell::sync::Lazy;
use regex_lite::Regex;

use crate::domain::entities::IntentResult;

/// Words that signal the tenant wants to move money
pub const PAYMENT_KEYWORDS: [&str; 5] = ["pay", "payment", "rent", "send", "transfer"];

/// Monthly rent assumed when the tenant mentions rent without an amount
pub const DEFAULT_RENT: f64 = 1900.0;

/// Optional `$`, digit groups with optional `,` thousands separators, optional cents
static AMOUNT_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\$?(\d+(?:,\d{3})*(?:\.\d{2})?)").expect("amount pattern is valid")
});

/// Detects rent payment intent in tenant messages
#[derive(Debug, Clone)]
pub struct IntentDetector {
    default_rent: f64,
}

impl IntentDetector {
    pub fn new(default_rent: f64) -> Self {
        Self { default_rent }
    }

    /// Run detection. Never fails.
    pub fn detect(&self, message: &str) -> IntentResult {
        let lower = message.to_lowercase();
        let has_keyword = PAYMENT_KEYWORDS.iter().any(|k| lower.contains(k));

        // Zero counts as "no amount" and may still fall back to the rent default
        let mut amount = extract_amount(message).filter(|a| *a != 0.0);

        if has_keyword && amount.is_none() && mentions_rent(&lower) {
            amount = Some(self.default_rent);
        }

        match amount {
            Some(value) if has_keyword => IntentResult::payment(value),
            _ => IntentResult::none(),
        }
    }
}

impl Default for IntentDetector {
    fn default() -> Self {
        Self::new(DEFAULT_RENT)
    }
}

/// First currency-like number in the message, group separators stripped
pub fn extract_amount(message: &str) -> Option<f64> {
    let caps = AMOUNT_PATTERN.captures(message)?;
    let digits = caps.get(1)?.as_str().replace(',', "");
    digits.parse::<f64>().ok()
}

// "my rent" and "the rent" both contain "rent"
fn mentions_rent(lower: &str) -> bool {
    lower.contains("rent")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detect(text: &str) -> IntentResult {
        IntentDetector::default().detect(text)
    }

    #[test]
    fn test_pay_my_rent_defaults_to_monthly_rent() {
        let result = detect("I want to pay my rent");
        assert!(result.detected);
        assert_eq!(result.amount, Some(1900.0));
        assert_eq!(result.note.as_deref(), Some("Payment of $1900 detected"));
    }

    #[test]
    fn test_explicit_amount_with_cents() {
        let result = detect("Can you send $250.50 today");
        assert!(result.detected);
        assert_eq!(result.amount, Some(250.50));
    }

    #[test]
    fn test_greeting_is_not_a_payment() {
        assert_eq!(detect("Hello, how are you?"), IntentResult::none());
    }

    #[test]
    fn test_number_without_keyword() {
        assert!(!detect("I have 3 cats and 1,200 fish").detected);
    }

    #[test]
    fn test_thousands_separators_are_stripped() {
        assert_eq!(detect("transfer $1,250.00 please").amount, Some(1250.0));
        assert_eq!(detect("payment of 2,000,000").amount, Some(2_000_000.0));
    }

    #[test]
    fn test_first_number_wins() {
        assert_eq!(detect("pay 100 now and 200 later").amount, Some(100.0));
    }

    #[test]
    fn test_explicit_amount_beats_rent_default() {
        assert_eq!(detect("I can pay $950 of the rent").amount, Some(950.0));
    }

    #[test]
    fn test_zero_falls_through_to_rent_default() {
        assert_eq!(detect("pay $0 toward rent").amount, Some(1900.0));
        assert!(!detect("pay $0").detected);
    }

    #[test]
    fn test_spelled_out_amounts_are_ignored() {
        assert!(!detect("I'll send ten dollars").detected);
    }

    #[test]
    fn test_keyword_match_is_case_insensitive() {
        let result = detect("PAY THE RENT");
        assert!(result.detected);
        assert_eq!(result.amount, Some(1900.0));
    }

    #[test]
    fn test_cents_need_two_digits() {
        assert_eq!(extract_amount("send 12.345"), Some(12.34));
        assert_eq!(extract_amount("send 7.5"), Some(7.0));
        assert_eq!(extract_amount("no digits"), None);
    }

    #[test]
    fn test_custom_default_rent() {
        let detector = IntentDetector::new(2100.0);
        assert_eq!(detector.detect("paying the rent today").amount, Some(2100.0));
    }
}
