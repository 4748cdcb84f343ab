//! # Skylark Operations Backend
//!
//! Drone operations coordination over spreadsheet-backed tables.
//!
//! The backend reads a pilot roster, a drone fleet and a mission list from
//! three sheets, interprets short operator commands, and runs two fixed
//! rules over the loaded rows: assignment conflict detection and urgent
//! reassignment suggestion. Results are categorized notices that a
//! dashboard renders as-is.
//!
//! ## Architecture
//!
//! - [`api`]: Public DTOs and notices
//! - [`db`]: Repository traits, backends, factory and table services
//! - [`models`]: Typed Pilot, Drone and Mission records
//! - [`services`]: Command interpreter, conflict checker, reassignment advisor
//! - [`routes`]: Route-specific report types
//! - [`http`]: Axum-based HTTP server and request handlers

// Allow large error types - RepositoryError contains rich context for debugging
#![allow(clippy::result_large_err)]

pub mod api;

pub mod db;
pub mod models;

pub mod routes;

pub mod services;

#[cfg(feature = "http-server")]
pub mod http;
