// suica-rs/suica/src/prelude.rs

pub use crate::card::{CardInfo, CardSession, HistoryReader};
pub use crate::protocol::{Command, Response};
pub use crate::reader::{Initialized, Reader, ReaderBuilder, Uninitialized};
pub use crate::transaction::Transaction;
pub use crate::{
    BlockData, BlockElement, Error, Idm, Pmm, Result, ServiceCode, StatusCode, SystemCode,
};

// Re-export small utilities for convenience
pub use crate::utils::{bytes_to_hex, bytes_to_hex_spaced, default_read_timeout, ms, parse_hex};
