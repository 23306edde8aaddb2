//! `POST /order`

use serde_json::Value;

use super::envelope::{Accept, ApiError, ApiResult, Outcome};
use super::payload::{is_truthy, str_eq, Payload};
use super::rules::{self, Rule};

fn missing_field(order: &Payload) -> bool {
    ["id", "name", "quantity"]
        .iter()
        .any(|key| !is_truthy(order, key))
}

fn is_reference_order(order: &Payload) -> bool {
    str_eq(order, "id", "1") && str_eq(order, "name", "Product") && str_eq(order, "quantity", "1")
}

fn is_known_order(order: &Payload) -> bool {
    str_eq(order, "id", "1")
}

/// Checked top to bottom; the exact reference order must win over the
/// looser id match.
pub const ORDER_RULES: &[Rule<Payload>] = &[
    Rule {
        name: "missing field",
        when: missing_field,
        then: Outcome::Reject(ApiError::InvalidInput),
    },
    Rule {
        name: "reference order",
        when: is_reference_order,
        then: Outcome::Accept(Accept::created("Order created")),
    },
    Rule {
        name: "known order",
        when: is_known_order,
        then: Outcome::Accept(Accept::ok("Order modified")),
    },
];

pub fn handle_order(order: &Payload) -> ApiResult {
    rules::evaluate(ORDER_RULES, order, ApiError::OrderNotFound)
        .with_data(|| Value::Object(order.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use hyper::StatusCode;
    use serde_json::json;

    fn order(value: Value) -> Payload {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_missing_or_falsy_fields_rejected() {
        for body in [
            json!({"name": "Product", "quantity": "1"}),
            json!({"id": "1", "quantity": "1"}),
            json!({"id": "1", "name": "Product"}),
            json!({"id": "", "name": "Product", "quantity": "1"}),
            json!({"id": "1", "name": null, "quantity": "1"}),
            json!({"id": "1", "name": "Product", "quantity": 0}),
            json!({}),
        ] {
            assert_eq!(handle_order(&order(body)), Err(ApiError::InvalidInput));
        }
    }

    #[test]
    fn test_reference_order_created() {
        let input = order(json!({"id": "1", "name": "Product", "quantity": "1"}));
        let success = handle_order(&input).unwrap();
        assert_eq!(success.accept.status, StatusCode::CREATED);
        assert_eq!(success.accept.token(), "created");
        assert_eq!(success.accept.message, "Order created");
        assert_eq!(success.data, Value::Object(input));
    }

    #[test]
    fn test_other_values_for_id_one_modified() {
        let input = order(json!({"id": "1", "name": "X", "quantity": "2"}));
        let success = handle_order(&input).unwrap();
        assert_eq!(success.accept.status, StatusCode::OK);
        assert_eq!(success.accept.token(), "success");
        assert_eq!(success.accept.message, "Order modified");
    }

    #[test]
    fn test_extra_fields_fall_to_modified_branch_only_when_values_differ() {
        // Extra fields alone do not disqualify the reference order
        let input = order(json!({"id": "1", "name": "Product", "quantity": "1", "note": "x"}));
        assert_eq!(
            handle_order(&input).unwrap().accept.status,
            StatusCode::CREATED
        );

        // Numeric quantity is not the string "1"
        let input = order(json!({"id": "1", "name": "Product", "quantity": 1}));
        assert_eq!(handle_order(&input).unwrap().accept.status, StatusCode::OK);
    }

    #[test]
    fn test_unknown_id_not_found() {
        let input = order(json!({"id": "9", "name": "Product", "quantity": "1"}));
        assert_eq!(handle_order(&input), Err(ApiError::OrderNotFound));

        let input = order(json!({"id": 1, "name": "Product", "quantity": "1"}));
        assert_eq!(handle_order(&input), Err(ApiError::OrderNotFound));
    }

    #[test]
    fn test_echo_preserves_field_order() {
        let input: Payload =
            serde_json::from_str(r#"{"quantity":"1","name":"Product","id":"1"}"#).unwrap();
        let success = handle_order(&input).unwrap();
        assert_eq!(
            serde_json::to_string(&success.data).unwrap(),
            r#"{"quantity":"1","name":"Product","id":"1"}"#
        );
    }
}
