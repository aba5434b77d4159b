//! Schema validation for candidate reported objects
//!
//! Copyright (c) 2025 Trackshift Team
//! Licensed under the Apache-2.0 license

pub mod engine;
pub mod error;

pub use engine::{JsonSchemaEngine, ValidationEngine};
pub use error::ValidationIssue;
