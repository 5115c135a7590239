// suica-rs/suica/src/card/mod.rs

use crate::reader::{Initialized, Reader};
use crate::transaction::Transaction;
use crate::types::{BlockData, Idm, Pmm, ServiceCode, SystemCode};
use crate::Result;

mod info;
pub use info::CardInfo;

pub mod operations;
pub use operations::HistoryReader;

/// One selected card.
///
/// The session borrows the initialized reader for its whole lifetime, so
/// no second session (and no second in-flight exchange) can exist against
/// the same physical reader. Create it with [`Reader::poll`], use it for
/// one read pass, and drop it when the card leaves the field.
pub struct CardSession<'r> {
    reader: &'r mut Reader<Initialized>,
    info: CardInfo,
}

impl<'r> CardSession<'r> {
    pub(crate) fn new(reader: &'r mut Reader<Initialized>, info: CardInfo) -> Self {
        Self { reader, info }
    }

    pub fn idm(&self) -> &Idm {
        self.info.idm()
    }

    pub fn pmm(&self) -> &Pmm {
        self.info.pmm()
    }

    pub fn system_code(&self) -> SystemCode {
        self.info.system_code()
    }

    pub fn info(&self) -> &CardInfo {
        &self.info
    }

    /// Read one 16-byte block from the given service.
    ///
    /// Exactly one protocol exchange per call; no retries, no caching. A
    /// non-success status comes back as `Error::Status` carrying the
    /// (S1, S2) pair.
    pub fn read_block(&mut self, service: ServiceCode, block_index: u16) -> Result<BlockData> {
        operations::read_block(self, service, block_index)
    }

    /// Lazily iterate the card's transaction history, oldest stored block
    /// first. Each call restarts from block 0.
    pub fn history(&mut self) -> HistoryReader<'_, 'r> {
        HistoryReader::new(self)
    }

    /// Drain the whole history into a Vec, stopping at the first error.
    pub fn read_transactions(&mut self) -> Result<Vec<Transaction>> {
        self.history().collect()
    }
}
