//! Repository implementations module.
//!
//! This module contains the implementations of the repository traits:
//! - `local`: In-memory implementation for unit testing and local development
//! - `workbook`: Directory of JSON sheet files, re-read on every call
pub mod local;
pub mod workbook;

pub use local::LocalRepository;
pub use workbook::{SheetNames, WorkbookConfig, WorkbookRepository};
