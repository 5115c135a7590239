// suica-rs/suica/src/card/operations/history.rs

use crate::card::CardSession;
use crate::constants::HISTORY_SCAN_LIMIT;
use crate::transaction::Transaction;
use crate::types::ServiceCode;
use crate::{Error, Result};

/// Lazy iterator over the transaction history of one card.
///
/// Blocks are read sequentially from service 0x090F starting at index 0.
/// Two termination signals are accepted, both observed on real hardware
/// depending on firmware: a block whose first byte is zero, and the
/// status pair (0x01, 0xA8) for an out-of-range block. Neither ends the
/// iteration with an error. Any other failure, including a block whose
/// packed date does not decode, is yielded once and ends the iteration:
/// after a bad block the rest of the stream is not to be trusted.
pub struct HistoryReader<'s, 'r> {
    session: &'s mut CardSession<'r>,
    index: u16,
    finished: bool,
}

impl<'s, 'r> HistoryReader<'s, 'r> {
    pub fn new(session: &'s mut CardSession<'r>) -> Self {
        Self {
            session,
            index: 0,
            finished: false,
        }
    }

    /// Next block index to be read.
    pub fn index(&self) -> u16 {
        self.index
    }
}

impl Iterator for HistoryReader<'_, '_> {
    type Item = Result<Transaction>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        if self.index >= HISTORY_SCAN_LIMIT {
            // A healthy card terminates long before this. Stop scanning
            // but flag it: the transport never produced either terminator.
            log::warn!(
                "history scan hit block {} without a terminator; stopping",
                self.index
            );
            self.finished = true;
            return None;
        }

        match self
            .session
            .read_block(ServiceCode::SUICA_HISTORY, self.index)
        {
            Ok(block) => {
                if block.as_bytes()[0] == 0 {
                    // zero-leading sentinel block: end of recorded history
                    self.finished = true;
                    return None;
                }
                self.index += 1;
                match Transaction::decode(block) {
                    Ok(tx) => Some(Ok(tx)),
                    Err(e) => {
                        self.finished = true;
                        Some(Err(e))
                    }
                }
            }
            Err(Error::Status(status)) if status.is_terminal() => {
                // out-of-range status: the other end-of-history signal
                self.finished = true;
                None
            }
            Err(e) => {
                self.finished = true;
                Some(Err(e))
            }
        }
    }
}
