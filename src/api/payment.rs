//! `POST /payment`

use serde_json::Value;

use super::envelope::{Accept, ApiError, ApiResult, Outcome};
use super::payload::{has_exactly, str_eq, Payload};
use super::rules::{self, Rule};

/// The payment body must carry exactly these keys
pub const PAYMENT_FIELDS: [&str; 5] = [
    "product_id",
    "name",
    "quantity",
    "account_no",
    "payment_status",
];

pub const PAYMENT_STATUSES: [&str; 3] = ["success", "pending", "failed"];

fn key_set_mismatch(payment: &Payload) -> bool {
    !has_exactly(payment, &PAYMENT_FIELDS)
}

fn is_processable(payment: &Payload) -> bool {
    str_eq(payment, "product_id", "1")
        && PAYMENT_STATUSES
            .iter()
            .any(|status| str_eq(payment, "payment_status", status))
}

fn is_unknown_product(payment: &Payload) -> bool {
    !str_eq(payment, "product_id", "1")
}

/// Anything that survives these rows is product "1" with a status outside
/// [`PAYMENT_STATUSES`] and is rejected by the fallback.
pub const PAYMENT_RULES: &[Rule<Payload>] = &[
    Rule {
        name: "key set mismatch",
        when: key_set_mismatch,
        then: Outcome::Reject(ApiError::InvalidPayment),
    },
    Rule {
        name: "processable payment",
        when: is_processable,
        then: Outcome::Accept(Accept::ok("Payment processed successfully")),
    },
    Rule {
        name: "unknown product",
        when: is_unknown_product,
        then: Outcome::Reject(ApiError::ProductNotFound),
    },
];

pub fn handle_payment(payment: &Payload) -> ApiResult {
    rules::evaluate(PAYMENT_RULES, payment, ApiError::InvalidPayment)
        .with_data(|| Value::Object(payment.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use hyper::StatusCode;
    use serde_json::json;

    fn payment(product_id: &str, status: &str) -> Payload {
        json!({
            "product_id": product_id,
            "name": "Product",
            "quantity": "1",
            "account_no": "1234567890",
            "payment_status": status,
        })
        .as_object()
        .cloned()
        .unwrap()
    }

    #[test]
    fn test_valid_payment_processed() {
        for status in PAYMENT_STATUSES {
            let input = payment("1", status);
            let success = handle_payment(&input).unwrap();
            assert_eq!(success.accept.status, StatusCode::OK);
            assert_eq!(success.accept.token(), "success");
            assert_eq!(success.data, Value::Object(input));
        }
    }

    #[test]
    fn test_extra_key_rejected() {
        let mut input = payment("1", "pending");
        input.insert("coupon".to_string(), json!("FREE"));
        assert_eq!(handle_payment(&input), Err(ApiError::InvalidPayment));
    }

    #[test]
    fn test_missing_key_rejected() {
        for field in PAYMENT_FIELDS {
            let mut input = payment("1", "pending");
            input.remove(field);
            assert_eq!(handle_payment(&input), Err(ApiError::InvalidPayment));
        }
    }

    #[test]
    fn test_key_check_precedes_product_lookup() {
        let mut input = payment("2", "pending");
        input.insert("extra".to_string(), json!(true));
        assert_eq!(handle_payment(&input), Err(ApiError::InvalidPayment));
    }

    #[test]
    fn test_unknown_product_not_found() {
        assert_eq!(
            handle_payment(&payment("2", "pending")),
            Err(ApiError::ProductNotFound)
        );
        // Unknown product wins over an unknown status
        assert_eq!(
            handle_payment(&payment("2", "refunded")),
            Err(ApiError::ProductNotFound)
        );
    }

    #[test]
    fn test_unknown_status_for_known_product_rejected() {
        assert_eq!(
            handle_payment(&payment("1", "refunded")),
            Err(ApiError::InvalidPayment)
        );
        assert_eq!(
            handle_payment(&payment("1", "PENDING")),
            Err(ApiError::InvalidPayment)
        );
    }
}
