//! Wire types for the ICWS connection protocol.
//!
//! This crate contains the serde-serializable types used for communication
//! with an Interaction Center server over HTTP. These types represent the
//! "protocol layer" - the shapes of data as they appear on the wire.
//!
//! # Design Philosophy
//!
//! Types in this crate are:
//! * Pure data: No behavior beyond serialization/deserialization
//! * 1:1 with protocol: Match the server's wire vocabulary exactly
//! * Stable: Changes only when the wire protocol changes
//!
//! Session lifecycle and response classification are built on top of these
//! types in `icws-rs`.

pub mod connection;
pub mod envelope;

pub use connection::*;
pub use envelope::*;
