// suica-rs/suica/src/constants.rs
//! Common protocol constants used across the crate

/// FeliCa block length in bytes, fixed by the card format
pub const FELICA_BLOCK_LEN: usize = 16;

/// Maximum payload length carried by a length-prefixed FeliCa frame.
/// The length byte counts itself, so payloads top out at 254 bytes.
pub const FELICA_MAX_PAYLOAD_LEN: usize = 254;

/// Minimal frame length in bytes: length byte + response/command code
pub const FELICA_MIN_FRAME_LEN: usize = 2;

/// Upper bound on sequential history block indices scanned before the
/// reader gives up waiting for a terminator. Real cards terminate well
/// below this; a transport that never signals termination would otherwise
/// loop forever.
pub const HISTORY_SCAN_LIMIT: u16 = 64;
