//! Stemma Core Types and Definitions
//!
//! This crate provides the foundational types shared by the Stemma lineage
//! builder and its command-line front end:
//!
//! - **Identifiers**: Revision and edge identifiers ([`identifier`] module)
//! - **Revisions**: Input records and their display payload ([`revision`] module)
//! - **Geometry**: Basic geometric types ([`geometry`] module)

pub mod geometry;
pub mod identifier;
pub mod revision;
