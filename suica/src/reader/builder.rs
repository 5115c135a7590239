// suica-rs/suica/src/reader/builder.rs

use crate::reader::handle::{Reader, Uninitialized};
use crate::transport::Transport;
use crate::{Error, Result};

/// Helper to construct a Reader with optional configuration.
pub struct ReaderBuilder {
    transport: Option<Box<dyn Transport>>,
}

impl ReaderBuilder {
    pub fn new() -> Self {
        Self { transport: None }
    }

    /// Provide an already-created transport instance (e.g. MockTransport)
    pub fn with_transport(mut self, transport: Box<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Consume the builder and return an uninitialized Reader.
    /// Requires a transport to be provided; otherwise returns
    /// ReaderNotFound.
    pub fn build_uninitialized(self) -> Result<Reader<Uninitialized>> {
        match self.transport {
            Some(t) => Ok(Reader::new_with_transport(t)),
            None => Err(Error::ReaderNotFound),
        }
    }
}

impl Default for ReaderBuilder {
    fn default() -> Self {
        Self::new()
    }
}
