// suica-rs/suica/src/reader/handle.rs

use std::marker::PhantomData;
use std::time::{Duration, Instant};

use crate::card::{CardInfo, CardSession};
use crate::protocol::codec;
use crate::protocol::{Command, Response};
use crate::transport::Transport;
use crate::types::SystemCode;
use crate::utils::{DEFAULT_POLL_INTERVAL_MS, bytes_to_hex_spaced};
use crate::{Error, Result};

/// Type-state markers
pub struct Uninitialized;
pub struct Initialized;

/// Reader handle that enforces initialization state at compile time. The
/// handle owns its transport, so exactly one component holds the physical
/// reader at a time and releases it when the handle goes out of scope.
pub struct Reader<State = Uninitialized> {
    transport: Box<dyn Transport>,
    _state: PhantomData<State>,
}

impl Reader<Uninitialized> {
    /// Create a Reader from an existing Transport instance.
    pub fn new_with_transport(transport: Box<dyn Transport>) -> Self {
        Self {
            transport,
            _state: PhantomData,
        }
    }

    /// Initialize the reader (transport-level initiator reset). Returns an
    /// initialized Reader on success.
    pub fn initialize(self) -> Result<Reader<Initialized>> {
        let mut this = self;
        this.transport.reset()?;

        Ok(Reader {
            transport: this.transport,
            _state: PhantomData,
        })
    }
}

impl Reader<Initialized> {
    /// Execute a command and return the parsed Response. One call is
    /// exactly one framed exchange on the wire.
    pub fn execute(&mut self, cmd: Command, timeout_ms: u64) -> Result<Response> {
        let frame = codec::encode_command_frame(&cmd)?;
        log::debug!("send: {}", bytes_to_hex_spaced(&frame));

        self.transport.send(&frame)?;
        let raw_resp = self.transport.receive(timeout_ms)?;
        log::debug!("recv: {}", bytes_to_hex_spaced(&raw_resp));

        codec::decode_response_frame(cmd.command_code(), &raw_resp)
    }

    /// Perform a single polling exchange. `Ok(None)` means no card
    /// answered within the poll interval, which is not an error.
    pub fn poll_once(&mut self, system_code: SystemCode) -> Result<Option<CardInfo>> {
        let cmd = Command::Polling {
            system_code,
            request_code: 1, // ask the card to report its system code
            time_slot: 0,
        };

        match self.execute(cmd, DEFAULT_POLL_INTERVAL_MS) {
            Ok(Response::Polling {
                idm,
                pmm,
                system_code: reported,
            }) => Ok(Some(CardInfo::new(
                idm,
                pmm,
                reported.unwrap_or(system_code),
            ))),
            Ok(_) => Err(Error::PollingFailed),
            Err(Error::Timeout) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Poll until a card is presented or `wait` elapses, then return a
    /// session bound to the selected card.
    ///
    /// The wait is bounded and explicit; callers that want an unbounded
    /// wait must say so with a large duration, and callers that want a
    /// custom loop (progress output, cancellation) drive `poll_once`
    /// themselves.
    pub fn poll(&mut self, system_code: SystemCode, wait: Duration) -> Result<CardSession<'_>> {
        let deadline = Instant::now() + wait;
        loop {
            if let Some(info) = self.poll_once(system_code)? {
                log::debug!("card selected: idm={}", info.idm().to_hex());
                return Ok(CardSession::new(self, info));
            }
            if Instant::now() >= deadline {
                return Err(Error::Timeout);
            }
        }
    }
}
