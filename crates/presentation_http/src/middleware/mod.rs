//! HTTP middleware components
//!
//! This module contains request-id propagation and request validation.

pub mod request_id;
pub mod validation;

pub use request_id::{REQUEST_ID_HEADER, RequestId, RequestIdLayer};
pub use validation::{ValidatedJson, ValidatedQuery, ValidationError, not_blank};
