//! Query connection
//!
//! Drives request/response round trips over an already-established
//! stream. Dialing, authentication and timeouts belong to the caller.

use std::io::{BufReader, BufWriter, Read, Write};
use std::net::TcpStream;
use std::sync::Arc;

use parking_lot::{Mutex, MutexGuard};

use crate::config::Config;
use crate::entity::{Channel, Entity, SerializeMode};
use crate::error::{QueryError, Result};
use crate::protocol::{BufReadTransport, Command, FrameReader, Status};
use super::log::{TracingLog, WireLog};

/// One query session over a reader/writer pair
///
/// The protocol has no pipelining: every method takes `&mut self`, so only
/// one command is ever outstanding.
pub struct Connection<R, W: Write> {
    /// Response side (buffered, fragment-aware)
    reader: FrameReader<BufReadTransport<BufReader<R>>>,

    /// Command side (buffered, flushed per command)
    writer: BufWriter<W>,

    /// Wire traffic sink
    log: Box<dyn WireLog>,

    config: Config,
}

impl Connection<TcpStream, TcpStream> {
    /// Wrap a connected TCP stream
    ///
    /// The peer address replaces the configured log label.
    pub fn from_tcp(stream: TcpStream, config: Config) -> Result<Self> {
        let peer_addr = stream
            .peer_addr()
            .map(|a| a.to_string())
            .unwrap_or_else(|_| "unknown".to_string());

        // Commands are small; don't let Nagle hold them back
        stream.set_nodelay(true)?;

        let read_stream = stream.try_clone()?;
        let write_stream = stream;

        let config = Config {
            peer_label: peer_addr,
            ..config
        };

        Ok(Self::new(read_stream, write_stream, config))
    }
}

impl<R: Read, W: Write> Connection<R, W> {
    /// Create a connection over the given halves
    ///
    /// Logs through [`TracingLog`] until [`Connection::with_log`] replaces it.
    pub fn new(reader: R, writer: W, config: Config) -> Self {
        let transport =
            BufReadTransport::with_fragment_len(BufReader::new(reader), config.max_fragment_len);
        let reader = FrameReader::new(transport).with_max_response_len(config.max_response_len);

        Self {
            reader,
            writer: BufWriter::new(writer),
            log: Box::new(TracingLog::new(config.peer_label.clone())),
            config,
        }
    }

    /// Replace the wire log
    pub fn with_log(mut self, log: impl WireLog + 'static) -> Self {
        self.log = Box::new(log);
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The underlying writer (everything sent so far has been flushed)
    pub fn writer(&self) -> &W {
        self.writer.get_ref()
    }

    /// Verify the greeting sent right after connecting
    ///
    /// The first line must be the configured magic (`TS3`); the second is
    /// a banner and is discarded.
    pub fn handshake(&mut self) -> Result<()> {
        let magic = self.reader.read_line()?;
        if magic != self.config.handshake_magic {
            return Err(QueryError::Protocol(format!(
                "Not a query server: expected {:?}, got {:?}",
                self.config.handshake_magic, magic
            )));
        }

        let banner = self.reader.read_line()?;
        tracing::debug!(peer = %self.config.peer_label, "Handshake complete: {}", banner);

        Ok(())
    }

    /// Send a command and return the raw body and status
    pub fn send(&mut self, command: &Command) -> Result<(String, Status)> {
        let line = command.to_line()?;
        self.log.command(line.trim_end_matches('\n'));

        self.writer.write_all(line.as_bytes())?;
        self.writer.flush()?;

        let (body, status) = self.reader.read_response()?;
        self.log.response(&body, &status);

        Ok((body, status))
    }

    /// Send a command; a non-zero status becomes [`QueryError::Remote`]
    pub fn execute(&mut self, command: &Command) -> Result<String> {
        let (body, status) = self.send(command)?;
        status.into_result()?;
        Ok(body)
    }

    // =========================================================================
    // Entity Helpers
    // =========================================================================

    /// Execute a command whose body describes a single entity
    pub fn fetch<E: Entity>(&mut self, command: &Command) -> Result<E> {
        let body = self.execute(command)?;
        E::schema().deserialize_new(&body)
    }

    /// Execute a command whose body is a `|`-separated entity list
    pub fn fetch_list<E: Entity>(&mut self, command: &Command) -> Result<Vec<E>> {
        let body = self.execute(command)?;
        E::schema().deserialize_list(&body)
    }

    /// List all channels (`channellist`)
    pub fn channel_list(&mut self) -> Result<Vec<Channel>> {
        self.fetch_list(&Command::new("channellist"))
    }

    /// Fill in the detail fields of `channel` (`channelinfo`)
    ///
    /// `channel` is left untouched unless the whole response applies.
    pub fn channel_info(&mut self, channel: &mut Channel) -> Result<()> {
        let body = self.execute(&Command::new("channelinfo").arg("cid", channel.cid))?;
        Channel::schema().deserialize_atomic(&body, channel)
    }

    /// Push the selected fields of `channel` to the server (`channeledit`)
    pub fn channel_edit(&mut self, channel: &Channel, fields: &[&str]) -> Result<()> {
        let attributes = Channel::schema().serialize(channel, fields, SerializeMode::Edit)?;
        let command = Command::new("channeledit")
            .arg("cid", channel.cid)
            .attributes(attributes);

        self.execute(&command)?;
        Ok(())
    }
}

// =============================================================================
// Shared Access
// =============================================================================

/// A connection shared between threads
///
/// Every round trip holds the lock, so commands from different threads
/// never interleave on the wire.
pub struct SharedConnection<R, W: Write> {
    inner: Arc<Mutex<Connection<R, W>>>,
}

impl<R, W: Write> Clone for SharedConnection<R, W> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<R: Read, W: Write> SharedConnection<R, W> {
    pub fn new(connection: Connection<R, W>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(connection)),
        }
    }

    /// Run `f` with exclusive access to the connection
    pub fn with<T>(&self, f: impl FnOnce(&mut Connection<R, W>) -> T) -> T {
        let mut guard = self.inner.lock();
        f(&mut *guard)
    }

    /// Lock the connection for several round trips
    pub fn lock(&self) -> MutexGuard<'_, Connection<R, W>> {
        self.inner.lock()
    }

    /// Send a command; a non-zero status becomes [`QueryError::Remote`]
    pub fn execute(&self, command: &Command) -> Result<String> {
        self.with(|connection| connection.execute(command))
    }
}
