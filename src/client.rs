//! TCP client for the treasure-hunt checker.
//!
//! Holds the single connection for the whole session and runs the walk loop:
//! send one random command line, flush, block on one reply line, stop on the
//! victory sentinel.

use std::io::{BufRead, BufReader, Write};
use std::net::TcpStream;

use rand::Rng;
use thiserror::Error;
use tracing::debug;

use crate::commands::{self, Command};

/// Errors that can occur when talking to the checker.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Connection to checker failed: {0}")]
    ConnectionFailed(#[source] std::io::Error),

    #[error("Checker closed the connection")]
    ConnectionClosed,

    #[error("I/O error talking to checker: {0}")]
    Io(#[from] std::io::Error),
}

/// A connected session with the checker.
///
/// The stream is owned by the session and released when it drops, on both
/// the victory path and every error path.
#[derive(Debug)]
pub struct CheckerClient {
    reader: BufReader<TcpStream>,
    writer: TcpStream,
}

impl CheckerClient {
    /// Connect to the checker at `addr` (host:port).
    pub fn connect(addr: &str) -> Result<Self, ClientError> {
        let stream = TcpStream::connect(addr).map_err(ClientError::ConnectionFailed)?;
        let reader = BufReader::new(stream.try_clone()?);
        Ok(Self {
            reader,
            writer: stream,
        })
    }

    /// Send one command line and flush so the checker sees it immediately.
    fn send(&mut self, command: Command) -> Result<(), ClientError> {
        debug!("< {}", command.wire());
        self.writer.write_all(command.wire().as_bytes())?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;
        Ok(())
    }

    /// Block until one full reply line arrives.
    fn read_reply(&mut self) -> Result<String, ClientError> {
        let mut line = String::new();
        let bytes_read = self.reader.read_line(&mut line)?;

        if bytes_read == 0 {
            return Err(ClientError::ConnectionClosed);
        }

        debug!("> {}", line.trim_end());
        Ok(line)
    }

    /// Random-walk until the checker announces victory.
    ///
    /// Exactly one reply is read per command sent. The only exit paths are
    /// the victory sentinel (returning the number of moves made) and a
    /// fatal I/O failure.
    pub fn walk<R: Rng + ?Sized>(mut self, rng: &mut R) -> Result<u64, ClientError> {
        let mut moves: u64 = 0;

        loop {
            let command = Command::random(rng);
            self.send(command)?;
            moves += 1;

            let reply = self.read_reply()?;
            if commands::is_victory(&reply) {
                return Ok(moves);
            }
        }
    }
}
