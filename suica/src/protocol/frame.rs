// suica-rs/suica/src/protocol/frame.rs

use crate::{Error, Result};

/// FeliCa frame helper. Provides encode/decode of the wire frame used over
/// an NFC initiator transport.
/// Format: [Len(1)] [Payload(n)]
/// Len counts the whole frame including itself; the transport layer below
/// carries its own sync and CRC, so no checksum appears at this level.
pub struct Frame {
    pub payload: Vec<u8>,
}

impl Frame {
    /// Encode a payload into a full length-prefixed frame
    pub fn encode(payload: &[u8]) -> Result<Vec<u8>> {
        if payload.len() > crate::constants::FELICA_MAX_PAYLOAD_LEN {
            return Err(Error::InvalidLength {
                expected: crate::constants::FELICA_MAX_PAYLOAD_LEN,
                actual: payload.len(),
            });
        }

        let mut out = Vec::with_capacity(1 + payload.len());
        out.push((payload.len() + 1) as u8);
        out.extend_from_slice(payload);
        Ok(out)
    }

    /// Decode a full frame and return the payload
    pub fn decode(frame: &[u8]) -> Result<Vec<u8>> {
        // Minimal frame: length byte + command/response code
        if frame.len() < crate::constants::FELICA_MIN_FRAME_LEN {
            return Err(Error::InvalidLength {
                expected: crate::constants::FELICA_MIN_FRAME_LEN,
                actual: frame.len(),
            });
        }

        let len = frame[0] as usize;
        if len != frame.len() {
            return Err(Error::FrameFormat(format!(
                "length byte {} does not match frame length {}",
                len,
                frame.len()
            )));
        }

        Ok(frame[1..].to_vec())
    }
}
