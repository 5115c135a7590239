// suica-rs/suica/src/transport/traits.rs

use crate::Result;

/// Transport trait abstracts the NFC initiator I/O away from protocol and
/// reader logic.
///
/// Implementations wrap a concrete driver (libnfc, PC/SC, a USB reader).
/// All calls are blocking; the physical layer supports exactly one
/// in-flight exchange, which the `&mut` receivers enforce. A `receive`
/// that elapses without a card answering must return `Error::Timeout`;
/// the polling loop relies on that to mean "no card in the field yet".
pub trait Transport {
    /// Send one framed command to the card
    fn send(&mut self, data: &[u8]) -> Result<()>;

    /// Receive one framed response with a timeout in milliseconds
    fn receive(&mut self, timeout_ms: u64) -> Result<Vec<u8>>;

    /// Perform a transport-level reset (initiator re-init)
    fn reset(&mut self) -> Result<()>;
}
