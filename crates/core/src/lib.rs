//! ONGO Core - Shared catalog types.
//!
//! This crate provides the types used across all ONGO components:
//! - `api` - JSON API over the in-memory catalog
//! - `storefront` - Server-rendered public site that consumes the API
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no HTTP
//! clients, no storage. Both binaries agree on the wire format by sharing
//! these definitions.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, slugs and prices
//! - [`catalog`] - The four catalog records: categories, products, campaigns, stores

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod types;

pub use catalog::*;
pub use types::*;
