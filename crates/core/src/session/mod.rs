//! Session lifecycle for the ICWS connection resource.
//!
//! This module centralizes connect-input validation, request descriptor
//! construction, response classification, and the handle produced by a
//! successful connect.

/// Response classification over completed HTTP exchanges.
pub mod classify;
/// Connect/disconnect orchestration over a transport.
pub mod manager;
/// Session handle value types.
pub mod outcome;
/// Request descriptor construction for both operations.
pub mod request;
/// Validated connect input and defaults.
pub mod spec;

/// Validated connect input specification.
pub use spec::{ConnectSpec, Protocol};
/// Session handle and user identity.
pub use outcome::{SessionHandle, SessionUser};
/// Operation tag used by classification and observers.
pub use classify::Operation;
/// Session manager and orchestration service.
pub use manager::SessionManager;
