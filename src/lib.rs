//! # ts3query
//!
//! Client-side codec for the ServerQuery line protocol:
//! - Response framing with fragment reassembly and status detection
//! - Reversible single-pass value escaping
//! - Schema-driven entity marshaling with selective (partial) updates
//! - `|`-separated entity lists
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     Connection                               │
//! │            (one outstanding command, WireLog)                │
//! └──────────────┬──────────────────────────────┬───────────────┘
//!                │ Command line                 │ raw lines
//!                ▼                              ▼
//!         ┌─────────────┐               ┌─────────────┐
//!         │   Command   │               │ FrameReader │
//!         │  (escaped)  │               │  + Status   │
//!         └──────▲──────┘               └──────┬──────┘
//!                │ attributes                  │ body
//!         ┌──────┴──────────────────────────────▼──────┐
//!         │          Entity Codec / List Parser         │
//!         │        (static Schema per entity kind)      │
//!         └────────────────────┬────────────────────────┘
//!                              ▼
//!                       ┌─────────────┐
//!                       │   Escape    │
//!                       └─────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod protocol;
pub mod entity;
pub mod network;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{QueryError, Result};
pub use config::Config;
pub use entity::{Channel, Entity, Schema, SerializeMode};
pub use network::Connection;
pub use protocol::{Command, Status};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of ts3query
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
