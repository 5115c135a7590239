// suica-rs/suica/src/protocol/responses/read.rs

use crate::protocol::parser;
use crate::status::StatusCode;
use crate::types::{BlockData, Idm};
use crate::{Error, Result};

/// Decode ReadWithoutEncryption response payload (response code = 0x07)
/// Layout: response_code(1) + idm(8) + status1(1) + status2(1)
///         [+ block_count(1) + blocks(N*16)]
///
/// The status flags are returned to the caller rather than mapped to an
/// error here: the read loop needs to tell a terminal "no more data"
/// status apart from genuine failures. Block count and data only exist on
/// success responses.
pub fn decode_read(data: &[u8]) -> Result<(Idm, StatusCode, Vec<BlockData>)> {
    const MIN_LEN: usize = 1 + 8 + 1 + 1; // 11
    parser::ensure_len(data, MIN_LEN)?;

    let expected = 0x06u8 + 1;
    parser::expect_response_code(data, expected)?;

    let idm = Idm::from_bytes(parser::array_at(data, 1)?);
    let status = StatusCode::new(parser::byte_at(data, 9)?, parser::byte_at(data, 10)?);

    if !status.is_success() {
        return Ok((idm, status, Vec::new()));
    }

    let block_count = parser::byte_at(data, 11)? as usize;
    let needed_len = 12usize
        .checked_add(block_count.checked_mul(16).ok_or(Error::InvalidLength {
            expected: 0,
            actual: 0,
        })?)
        .ok_or(Error::InvalidLength {
            expected: 0,
            actual: 0,
        })?;

    parser::ensure_len(data, needed_len)?;

    let mut blocks = Vec::with_capacity(block_count);
    for i in 0..block_count {
        let offset = 12 + i * 16;
        blocks.push(BlockData::from_bytes(parser::array_at(data, offset)?));
    }

    Ok((idm, status, blocks))
}
