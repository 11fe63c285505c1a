//! Application service layer.
//!
//! Services hold the form's business logic, kept apart from the HTTP
//! handlers so it can be exercised without a server.

mod validator;

pub use validator::{validate, FormValidator};
