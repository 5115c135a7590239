// suica-rs/suica/src/error.rs

use crate::status::StatusCode;
use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("reader not found")]
    ReaderNotFound,

    #[error("transport error: {0}")]
    Transport(String),

    #[error("invalid packet length: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    /// Non-success status flags returned by the card. The wrapped
    /// `StatusCode` renders the S1/S2 descriptions.
    #[error("status flag error: {0}")]
    Status(StatusCode),

    #[error("frame format error: {0}")]
    FrameFormat(String),

    #[error("unexpected response code: expected {expected:#04x}, got {actual:#04x}")]
    UnexpectedResponse { expected: u8, actual: u8 },

    #[error("polling failed: no card detected")]
    PollingFailed,

    #[error("operation timed out")]
    Timeout,

    /// A read reported success but carried no block data.
    #[error("read response contained no block data")]
    MissingBlock,

    /// The packed date field of a history block does not form a calendar
    /// date. The card format does not defend against zero month/day, so a
    /// block that produces one is untrustworthy.
    #[error("invalid transaction date: {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: u16, month: u8, day: u8 },
}

pub type Result<T> = std::result::Result<T, Error>;
