//! Shared types for the organization registration portal
//!
//! Target-independent: compiled into the WASM frontend and tested natively.

pub mod domain;
