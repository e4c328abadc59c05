//! Client-side session lifecycle for the ICWS web-services protocol.
//!
//! Two operations - connect (create a session) and disconnect (destroy it) -
//! are built on one shared core: a response classifier that maps the server's
//! HTTP status/body vocabulary onto a closed set of typed outcomes, so calling
//! code can branch on [`SessionError`] variants without re-parsing HTTP.
//!
//! The HTTP transport sits behind the [`Transport`] trait and is invoked
//! exactly once per operation; classification itself is pure and synchronous.
//! Retry policy (for example against [`SessionError::alternate_hosts`]) is a
//! caller concern.

pub mod error;
pub mod observer;
pub mod session;
pub mod transport;

pub use error::{Result, SessionError};
pub use observer::{NullObserver, SessionObserver, TracingObserver};
pub use session::{ConnectSpec, Operation, Protocol, SessionHandle, SessionManager, SessionUser};
pub use transport::{HttpTransport, Method, RequestDescriptor, Transport, TransportResponse};
