//! `GET /inquiry` and `GET /inquiry/:id`
//!
//! Serves a fixed five-entry product catalog, either whole or one entry at
//! a time.

use serde::Serialize;
use serde_json::Value;

use super::envelope::{Accept, ApiError, ApiResult, Outcome};
use super::rules::{self, Rule};

/// One catalog entry
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InquiryRecord {
    pub id: &'static str,
    pub name: &'static str,
    pub price: f64,
}

const ENTRIES: [InquiryRecord; 5] = [
    InquiryRecord { id: "1", name: "Product 1", price: 10.99 },
    InquiryRecord { id: "2", name: "Product 2", price: 20.99 },
    InquiryRecord { id: "3", name: "Product 3", price: 30.99 },
    InquiryRecord { id: "4", name: "Product 4", price: 40.99 },
    InquiryRecord { id: "5", name: "Product 5", price: 50.99 },
];

/// Immutable product catalog, built once at startup
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<InquiryRecord>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            entries: ENTRIES.to_vec(),
        }
    }
}

impl Catalog {
    pub fn entries(&self) -> &[InquiryRecord] {
        &self.entries
    }

    pub fn find(&self, id: &str) -> Option<&InquiryRecord> {
        self.entries.iter().find(|entry| entry.id == id)
    }
}

/// Lookup request: the catalog plus the resolved id, if any
pub struct Lookup<'a> {
    pub catalog: &'a Catalog,
    pub id: Option<&'a str>,
}

fn lists_everything(lookup: &Lookup<'_>) -> bool {
    lookup.id.is_none()
}

fn names_catalog_entry(lookup: &Lookup<'_>) -> bool {
    lookup.id.is_some_and(|id| lookup.catalog.find(id).is_some())
}

fn inquiry_rules<'a>() -> [Rule<Lookup<'a>>; 2] {
    [
        Rule {
            name: "whole catalog",
            when: lists_everything,
            then: Outcome::Accept(Accept::ok("Get Inquiry successful")),
        },
        Rule {
            name: "catalog entry",
            when: names_catalog_entry,
            then: Outcome::Accept(Accept::ok("Get Inquiry successful")),
        },
    ]
}

pub fn handle_inquiry(catalog: &Catalog, id: Option<&str>) -> ApiResult {
    let lookup = Lookup { catalog, id };
    rules::evaluate(&inquiry_rules(), &lookup, ApiError::DataNotFound).with_data(|| {
        let data = match id.and_then(|id| catalog.find(id)) {
            Some(entry) => serde_json::to_value(entry),
            None => serde_json::to_value(catalog.entries()),
        };
        data.unwrap_or(Value::Null)
    })
}
