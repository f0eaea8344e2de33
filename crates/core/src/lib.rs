//! Domain primitives shared by the database and API crates.
//!
//! This crate has no database or HTTP dependencies: everything here is pure
//! logic evaluated against values passed in by the caller.

pub mod access;
pub mod catalog;
pub mod error;
pub mod roles;
pub mod types;
