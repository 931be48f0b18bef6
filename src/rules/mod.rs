//! Rule implementations for locdiff.
//!
//! This module contains pure functions that compare the translations of one
//! pass. Each function takes only the specific inputs it needs and returns
//! its own result type; `reconcile` combines them.
//!
//! ## Module Structure
//!
//! - `missing_translation`: Keys present on one side of a locale pair only
//! - `missing_nested`: Nested keys missing from the current locale, grouped by namespace
//! - `missing_parent`: Keys whose parent path is absent in the same locale
//! - `reconcile`: Runs all rules for the current locale

pub mod missing_nested;
pub mod missing_parent;
pub mod missing_translation;
pub mod reconcile;

pub use reconcile::{ReconciliationResult, reconcile};
