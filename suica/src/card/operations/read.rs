// suica-rs/suica/src/card/operations/read.rs

use crate::card::CardSession;
use crate::protocol::{Command, Response};
use crate::types::{BlockData, BlockElement, ServiceCode};
use crate::utils::DEFAULT_READ_TIMEOUT_MS;
use crate::{Error, Result};

/// Read a single block from a card using ReadWithoutEncryption.
pub fn read_block(
    session: &mut CardSession<'_>,
    service: ServiceCode,
    block_index: u16,
) -> Result<BlockData> {
    let cmd = Command::ReadWithoutEncryption {
        idm: *session.idm(),
        service,
        block: BlockElement::new(0, block_index),
    };

    let resp = session.reader.execute(cmd, DEFAULT_READ_TIMEOUT_MS)?;

    match resp {
        Response::ReadWithoutEncryption { status, blocks, .. } => {
            if !status.is_success() {
                return Err(Error::Status(status));
            }
            // The card answered success; a response without block data is
            // a protocol violation, not an empty read.
            blocks.into_iter().next().ok_or(Error::MissingBlock)
        }
        other => Err(Error::UnexpectedResponse {
            expected: 0x07,
            actual: other.response_code(),
        }),
    }
}
