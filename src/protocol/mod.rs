//! Protocol Module
//!
//! Defines the line-oriented wire protocol spoken by the query interface.
//!
//! ## Protocol Format
//!
//! ### Command
//! ```text
//! <verb> [key=value ...] [-option ...]\n
//! ```
//!
//! ### Response
//! ```text
//! key=value key=value|key=value ...      (zero or more body lines)
//! error id=<decimal> msg=<escaped>       (status line, always last)
//! ```
//!
//! ### Status Codes
//! - 0: OK
//! - anything else: server-side failure, see `msg`

mod command;
mod escape;
mod frame;
mod status;

pub use command::Command;
pub use escape::{decode, encode};
pub use frame::{
    is_status_line, BufReadTransport, FrameReader, LineTransport, DEFAULT_FRAGMENT_LEN,
    DEFAULT_MAX_RESPONSE_LEN,
};
pub use status::{Status, STATUS_TOKEN};
