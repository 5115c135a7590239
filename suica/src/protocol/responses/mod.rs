// suica-rs/suica/src/protocol/responses/mod.rs

pub mod polling;
pub mod read;

pub use polling::decode_polling;
pub use read::decode_read;

/// High-level Response enum. Per-command decoders live in
/// `protocol::responses::<name>.rs` and are dispatched here.
#[derive(Debug, Clone)]
pub enum Response {
    Polling {
        idm: crate::types::Idm,
        pmm: crate::types::Pmm,
        /// Present only when the polling request asked for it.
        system_code: Option<crate::types::SystemCode>,
    },
    ReadWithoutEncryption {
        idm: crate::types::Idm,
        status: crate::status::StatusCode,
        /// Empty whenever `status` is not success; the card omits block
        /// data on error responses.
        blocks: Vec<crate::types::BlockData>,
    },
}

impl Response {
    /// Decode a response payload (including response code) for the given
    /// expected command code.
    pub fn decode(expected_cmd: u8, data: &[u8]) -> crate::Result<Self> {
        // Fast-fail: ensure at least a response byte is present and the
        // top-level response code matches the expected (command+1). This
        // central check prevents decoders from needing to perform the very
        // first byte verification themselves and avoids accidental panic
        // on empty slices.
        crate::protocol::parser::ensure_len(data, 1)?;
        let expected_response = expected_cmd.wrapping_add(1);
        crate::protocol::parser::expect_response_code(data, expected_response)?;

        match expected_cmd {
            0x00 => {
                let (idm, pmm, sys) = polling::decode_polling(data)?;
                Ok(Self::Polling {
                    idm,
                    pmm,
                    system_code: sys,
                })
            }
            0x06 => {
                let (idm, status, blocks) = read::decode_read(data)?;
                Ok(Self::ReadWithoutEncryption {
                    idm,
                    status,
                    blocks,
                })
            }
            _ => {
                let actual = data.first().copied().unwrap_or(0);
                Err(crate::Error::UnexpectedResponse {
                    expected: expected_cmd.wrapping_add(1),
                    actual,
                })
            }
        }
    }

    /// Return the response code byte associated with this response variant.
    pub fn response_code(&self) -> u8 {
        match self {
            Response::Polling { .. } => 0x01,
            Response::ReadWithoutEncryption { .. } => 0x07,
        }
    }
}
