//! Configuration for ts3query connections
//!
//! Centralized configuration with sensible defaults.

/// Main configuration for a query connection
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Framing Configuration
    // -------------------------------------------------------------------------
    /// Max bytes returned by a single physical read. Longer lines arrive as
    /// several fragments and are reassembled by the frame reader.
    pub max_fragment_len: usize,

    /// Max size of an accumulated response body (in bytes)
    pub max_response_len: usize,

    // -------------------------------------------------------------------------
    // Handshake Configuration
    // -------------------------------------------------------------------------
    /// First line the server must send after connecting
    pub handshake_magic: String,

    // -------------------------------------------------------------------------
    // Logging Configuration
    // -------------------------------------------------------------------------
    /// Label attached to wire log events (usually the peer address)
    pub peer_label: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_fragment_len: 4096,
            max_response_len: 16 * 1024 * 1024, // 16 MB
            handshake_magic: "TS3".to_string(),
            peer_label: "unknown".to_string(),
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the max length of a single physical read
    pub fn max_fragment_len(mut self, len: usize) -> Self {
        self.config.max_fragment_len = len.max(1);
        self
    }

    /// Set the max size of a response body (in bytes)
    pub fn max_response_len(mut self, len: usize) -> Self {
        self.config.max_response_len = len;
        self
    }

    /// Set the expected handshake line
    pub fn handshake_magic(mut self, magic: impl Into<String>) -> Self {
        self.config.handshake_magic = magic.into();
        self
    }

    /// Set the label used in log events
    pub fn peer_label(mut self, label: impl Into<String>) -> Self {
        self.config.peer_label = label.into();
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
