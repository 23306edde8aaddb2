//! Response envelope and error taxonomy
//!
//! Every JSON answer has the same shape:
//! `{"status": "<code>", "response": "<token>", "message": "<text>", "data": ...}`
//! where `status` duplicates the HTTP status code as a string and `data` is
//! omitted on failures.

use hyper::StatusCode;
use serde::Serialize;
use serde_json::Value;

/// Handler rejection
///
/// The `Display` text is the envelope `message`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// Order payload lacks `id`, `name` or `quantity`
    #[error("Invalid input!, check your input")]
    InvalidInput,
    /// Order id other than "1"
    #[error("Invalid order data, check your id input")]
    OrderNotFound,
    /// Inquiry id outside the catalog
    #[error("Data not found on this server")]
    DataNotFound,
    /// Payment key set mismatch or unknown payment status
    #[error("Invalid payment data, please check your input")]
    InvalidPayment,
    #[error("Product not found")]
    ProductNotFound,
    /// Product or user payload lacks a required key
    #[error("Missing required fields, please check your input")]
    MissingFields,
    /// Body is not a JSON object or array
    #[error("Malformed JSON body")]
    MalformedBody,
    /// No route for the requested path
    #[error("Resource not found")]
    RouteNotFound,
}

impl ApiError {
    pub const fn status(self) -> StatusCode {
        match self {
            Self::InvalidInput | Self::InvalidPayment | Self::MissingFields | Self::MalformedBody => {
                StatusCode::BAD_REQUEST
            }
            Self::OrderNotFound | Self::DataNotFound | Self::ProductNotFound | Self::RouteNotFound => {
                StatusCode::NOT_FOUND
            }
        }
    }

    /// Machine-readable `response` token
    pub const fn token(self) -> &'static str {
        match self {
            Self::InvalidInput | Self::MalformedBody => "bad request",
            Self::InvalidPayment | Self::MissingFields => "INVALID_DATA",
            Self::OrderNotFound | Self::DataNotFound => "DATA_NOT_FOUND",
            Self::ProductNotFound => "PRODUCT_NOT_FOUND",
            Self::RouteNotFound => "NOT_FOUND",
        }
    }
}

/// Successful verdict: status code plus message, data attached later
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Accept {
    pub status: StatusCode,
    pub message: &'static str,
}

impl Accept {
    /// 200 `success`
    pub const fn ok(message: &'static str) -> Self {
        Self {
            status: StatusCode::OK,
            message,
        }
    }

    /// 201 `created`
    pub const fn created(message: &'static str) -> Self {
        Self {
            status: StatusCode::CREATED,
            message,
        }
    }

    pub fn token(self) -> &'static str {
        if self.status == StatusCode::CREATED {
            "created"
        } else {
            "success"
        }
    }
}

/// Result row of a decision table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Accept(Accept),
    Reject(ApiError),
}

impl Outcome {
    /// Attach the response data to an accepting outcome
    pub fn with_data(self, data: impl FnOnce() -> Value) -> ApiResult {
        match self {
            Self::Accept(accept) => Ok(Success {
                accept,
                data: data(),
            }),
            Self::Reject(err) => Err(err),
        }
    }
}

/// Accepted request together with the payload echoed or looked up for it
#[derive(Debug, Clone, PartialEq)]
pub struct Success {
    pub accept: Accept,
    pub data: Value,
}

pub type ApiResult = Result<Success, ApiError>;

/// Serialized response body
#[derive(Debug, Serialize)]
pub struct Envelope<'a> {
    pub status: String,
    pub response: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<&'a Value>,
}

impl<'a> Envelope<'a> {
    /// Build the envelope and the HTTP status it is sent with
    pub fn from_result(result: &'a ApiResult) -> (StatusCode, Self) {
        match result {
            Ok(success) => (success.accept.status, Self::success(success)),
            Err(err) => (err.status(), Self::failure(*err)),
        }
    }

    pub fn success(success: &'a Success) -> Self {
        Self {
            status: success.accept.status.as_u16().to_string(),
            response: success.accept.token(),
            message: success.accept.message.to_string(),
            data: Some(&success.data),
        }
    }

    pub fn failure(err: ApiError) -> Self {
        Self {
            status: err.status().as_u16().to_string(),
            response: err.token(),
            message: err.to_string(),
            data: None,
        }
    }
}
