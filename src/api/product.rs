//! `POST /product`

use serde_json::Value;

use super::envelope::{Accept, ApiError, ApiResult, Success};
use super::payload::{has_all, Payload};

pub const PRODUCT_FIELDS: [&str; 3] = ["name", "description", "price"];

pub fn handle_product(product: &Payload) -> ApiResult {
    if !has_all(product, &PRODUCT_FIELDS) {
        return Err(ApiError::MissingFields);
    }
    Ok(Success {
        accept: Accept::ok("Product created successfully"),
        data: Value::Object(product.clone()),
    })
}
