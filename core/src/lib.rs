//! # Cafe Core
//!
//! * **[`resolver`]**: validation and filtering behind the `/cafe` endpoint.
//! * **[`catalog`]**: the in-memory [`CafeRepository`](cafe_common::repository::CafeRepository)
//!   and its loaders.
//! * **[`dataset`]**: the built-in dataset.
//! * **[`http`]**: the axum transport.

pub mod catalog;
pub mod dataset;
pub mod http;
pub mod resolver;
