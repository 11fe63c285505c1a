//! Regex Form Server - a server-rendered form validated by configurable patterns.
//!
//! The form has three text fields (title, phone, mail). Each submission is
//! checked field by field against a regular expression, and the form is
//! rendered again with the submitted values, a status icon per field and an
//! error message under every field that failed.
//!
//! # Architecture
//!
//! - **domain**: Fields, submissions, patterns and validation results
//! - **services**: The validator
//! - **render**: HTML rendering of the form
//! - **server**: HTTP/1.1 server and request handlers
//! - **config**: Configuration management from environment variables
//! - **error**: Custom error types for precise error handling
//! - **metrics**: Request and validation counters

pub mod config;
pub mod domain;
pub mod error;
pub mod metrics;
pub mod render;
pub mod server;
pub mod services;

// Re-export commonly used types
pub use config::Config;
pub use domain::{
    FieldResult, FormField, FormPatterns, FormPost, FormSubmission, PatternError, ValidationResult,
};
pub use error::{ConfigError, ServerError};
pub use metrics::{Metrics, MetricsSummary, RequestTimer};
pub use render::{render_form, FormView};
pub use server::FormServer;
pub use services::{validate, FormValidator};
