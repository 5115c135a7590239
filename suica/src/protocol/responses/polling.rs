// suica-rs/suica/src/protocol/responses/polling.rs

use crate::protocol::parser;
use crate::types::{Idm, Pmm, SystemCode};
use crate::Result;

/// Decode a Polling response payload (response code = 0x01)
/// Layout: response_code(1) + idm(8) + pmm(8) [+ request_data(2)]
///
/// The trailing system code is only present when the command's
/// request_code asked for it, so it decodes to an Option.
pub fn decode_polling(data: &[u8]) -> Result<(Idm, Pmm, Option<SystemCode>)> {
    const MIN_LEN: usize = 1 + 8 + 8; // 17
    parser::ensure_len(data, MIN_LEN)?;

    let expected = 0x00u8 + 1;
    parser::expect_response_code(data, expected)?;

    let idm = Idm::from_bytes(parser::array_at(data, 1)?);
    let pmm = Pmm::from_bytes(parser::array_at(data, 9)?);

    let sys = if data.len() >= MIN_LEN + 2 {
        Some(SystemCode::from_be_bytes(parser::array_at(data, 17)?))
    } else {
        None
    };

    Ok((idm, pmm, sys))
}
