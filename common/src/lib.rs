//! # Cafe Common
//!
//! Types shared by every member of the workspace.
//!
//! * **[`models`]**: the café record, the normalized city key and the
//!   request-scoped query.
//! * **[`error`]**: the caller-fault errors a query can fail with.
//! * **[`repository`]**: the outbound port the resolver reads cafés through.
//! * **[`config`]**: runtime configuration filled in by the CLI.

pub mod config;
pub mod error;
pub mod models;
pub mod repository;
