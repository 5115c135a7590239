// suica-rs/suica/src/transaction.rs

//! Decoding of raw history blocks into transaction records.
//!
//! Suica stores one usage event per 16-byte block. The packing is bit-exact
//! and has no framing inside the block, so every field offset here is load
//! bearing. Decoded records are plain immutable values with no reference
//! back to the card session.

use crate::types::BlockData;
use crate::{Error, Result};
use chrono::NaiveDate;
use std::fmt;

/// Human label for a terminal/action code, when known.
///
/// The table covers the codes observed in the field; everything else is
/// reported as `None` rather than an error so unknown terminals still
/// import cleanly.
pub fn action_name(action: u8) -> Option<&'static str> {
    match action {
        25 => Some("New card"),
        22 => Some("Train"),
        200 => Some("Vending Machine"),
        _ => None,
    }
}

/// One decoded history record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Transaction {
    raw: BlockData,
    action: u8,
    date: NaiveDate,
    balance: u16,
    serial: u32,
}

impl Transaction {
    /// Decode a raw 16-byte history block.
    ///
    /// Field layout:
    /// - byte 0: action/terminal code
    /// - bytes 4..6: packed date, big-endian, `yyyyyyym mmmddddd`
    ///   (7-bit year offset from 2000, 4-bit month, 5-bit day)
    /// - bytes 10..12: balance, low byte first
    /// - bytes 12..15: 24-bit big-endian transaction serial
    ///
    /// The remaining bytes are region/station detail outside this crate's
    /// scope and are preserved untouched in `raw`.
    pub fn decode(block: BlockData) -> Result<Self> {
        let b = block.as_bytes();

        let action = b[0];
        let date = decode_date(b[4], b[5])?;
        let balance = u16::from_le_bytes([b[10], b[11]]);
        let serial = u32::from(b[12]) << 16 | u32::from(b[13]) << 8 | u32::from(b[14]);

        Ok(Self {
            raw: block,
            action,
            date,
            balance,
            serial,
        })
    }

    /// The original 16 bytes, retained for audit and re-import.
    pub fn raw(&self) -> &BlockData {
        &self.raw
    }

    /// Raw action/terminal code (byte 0 of the block).
    pub fn action(&self) -> u8 {
        self.action
    }

    /// Human label for the action code, if the code is known.
    pub fn action_name(&self) -> Option<&'static str> {
        action_name(self.action)
    }

    /// Transaction date as written by the card.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Card balance after this transaction.
    pub fn balance(&self) -> u16 {
        self.balance
    }

    /// Monotonic 24-bit transaction counter assigned by the card. Unique
    /// per card and used downstream as the record identity.
    pub fn serial(&self) -> u32 {
        self.serial
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.action_name() {
            Some(name) => write!(f, "{}", name)?,
            None => write!(f, "{}", self.action)?,
        }
        write!(f, ", {}, {}, {}", self.date, self.balance, self.serial)
    }
}

/// Unpack the 16-bit date field at block bytes 4..6.
fn decode_date(hi: u8, lo: u8) -> Result<NaiveDate> {
    let x = u16::from_be_bytes([hi, lo]);
    let year = 2000 + (x >> 9);
    let month = ((x >> 5) & 0x0f) as u8;
    let day = (x & 0x1f) as u8;

    NaiveDate::from_ymd_opt(i32::from(year), u32::from(month), u32::from(day)).ok_or(
        Error::InvalidDate { year, month, day },
    )
}
