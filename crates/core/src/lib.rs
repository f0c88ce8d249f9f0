//! Domain types and pure logic shared by every FounderCast crate.
//!
//! Nothing in here touches the database or the network: fingerprinting,
//! the creator catalog, media URL normalization, and input validation are
//! all plain functions so they can be unit-tested in isolation.

pub mod creators;
pub mod error;
pub mod fingerprint;
pub mod hashing;
pub mod media;
pub mod types;
pub mod validation;
