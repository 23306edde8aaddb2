//! `POST /user`

use serde_json::Value;

use super::envelope::{Accept, ApiError, ApiResult, Success};
use super::payload::{has_all, Payload};

pub const USER_FIELDS: [&str; 3] = ["name", "email", "password"];

pub fn handle_user(user: &Payload) -> ApiResult {
    if !has_all(user, &USER_FIELDS) {
        return Err(ApiError::MissingFields);
    }
    Ok(Success {
        accept: Accept::created("User created successfully"),
        data: Value::Object(user.clone()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use hyper::StatusCode;
    use serde_json::json;

    #[test]
    fn test_missing_password_rejected() {
        let input = json!({"name": "Ann", "email": "ann@example.com"});
        assert_eq!(
            handle_user(input.as_object().unwrap()),
            Err(ApiError::MissingFields)
        );
    }

    #[test]
    fn test_complete_user_created() {
        let input = json!({"name": "Ann", "email": "ann@example.com", "password": "hunter2", "age": 41});
        let success = handle_user(input.as_object().unwrap()).unwrap();
        assert_eq!(success.accept.status, StatusCode::CREATED);
        assert_eq!(success.accept.token(), "created");
        assert_eq!(success.accept.message, "User created successfully");
        assert_eq!(success.data, input);
    }
}
