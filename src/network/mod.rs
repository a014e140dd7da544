//! Network Module
//!
//! Query sessions over an established stream.
//!
//! ## Architecture
//! - One connection, one outstanding command
//! - Responses framed by `protocol::FrameReader`
//! - Traffic reported to an injected `WireLog`

mod connection;
mod log;

pub use connection::{Connection, SharedConnection};
pub use log::{NoopLog, TracingLog, WireLog};
