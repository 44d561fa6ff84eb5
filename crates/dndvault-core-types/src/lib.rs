//! Core types shared across D&D Vault facilities
//!
//! This crate provides the small set of types used by both the error and
//! logging facilities of the character diff engine:
//!
//! - **Correlation types**: RequestId, RequestContext
//! - **Schema constants**: Canonical field keys and event names

pub mod correlation;
pub mod schema;

pub use correlation::{RequestContext, RequestId};
