// suica-rs/suica/src/protocol/commands/polling.rs

use crate::types::SystemCode;

/// Encode Polling command payload (FeliCa command code 0x00).
///
/// The system code travels big-endian here, unlike the little-endian
/// service codes in block reads. `request_code` 0x01 asks the card to
/// return its system code alongside IDm/PMm.
pub fn encode_polling(system_code: SystemCode, request_code: u8, time_slot: u8) -> Vec<u8> {
    let mut buf = Vec::with_capacity(1 + 2 + 1 + 1);
    buf.push(0x00); // Polling command code
    buf.extend_from_slice(&system_code.to_be_bytes());
    buf.push(request_code);
    buf.push(time_slot);
    buf
}
