//! Request extractors.
//!
//! - [`session::SessionContext`] -- Builds the caller's [`Session`] from a JWT.
//!
//! [`Session`]: anistream_core::access::Session

pub mod session;
