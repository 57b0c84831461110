//! # closer-core
//!
//! Core domain types for the Closer campaign analyst.
//!
//! This crate provides the types shared across all Closer crates:
//! - Entity structs for campaigns, prospects, objections and sales-bible entries
//! - Status enums with state machine transitions
//! - Record identifiers as stored in the record store
//! - Table and column names of the record store schema
//! - Typed decoding of the campaign targeting criteria
//! - Cross-cutting error types

pub mod criteria;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod ids;
pub mod tables;
