//! Treetracker admin client library
//!
//! Async client and table orchestration for the Treetracker admin REST
//! APIs: paginated, sortable, filterable record tables (captures,
//! earnings) with client-side lookup joins, plus session and
//! permission-gated navigation.

pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod export;
pub mod model;
pub mod nav;
pub mod table;

mod client;

pub use client::*;
