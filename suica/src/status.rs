// suica-rs/suica/src/status.rs

//! FeliCa status flag classification.
//!
//! Every card command answers with two status bytes (S1, S2). `(0x00,
//! 0x00)` is the only success combination; everything else is classified by
//! lookup. The value type never raises; callers decide what a non-success
//! status means for them.

use std::fmt;

/// The (S1, S2) status flag pair trailing every FeliCa response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatusCode {
    s1: u8,
    s2: u8,
}

impl StatusCode {
    /// Construct from the two raw status bytes.
    pub const fn new(s1: u8, s2: u8) -> Self {
        Self { s1, s2 }
    }

    /// First status byte.
    pub fn s1(&self) -> u8 {
        self.s1
    }

    /// Second status byte.
    pub fn s2(&self) -> u8 {
        self.s2
    }

    /// True iff both flags are zero.
    pub fn is_success(&self) -> bool {
        self.s1 == 0x00 && self.s2 == 0x00
    }

    /// True for the "address out of range" status (S1=0x01, S2=0xA8) some
    /// cards return past the last history block. The history read loop
    /// accepts this as an end-of-data signal rather than an error.
    pub fn is_terminal(&self) -> bool {
        self.s1 == 0x01 && self.s2 == 0xA8
    }

    /// Human-readable rendition combining the S1 and S2 descriptions,
    /// e.g. `[01:A8] "Error (block list)" "Illegal Block Number ..."`.
    pub fn describe(&self) -> String {
        format!(
            "[{:02X}:{:02X}] \"{}\" \"{}\"",
            self.s1,
            self.s2,
            s1_description(self.s1),
            s2_description(self.s2)
        )
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

/// Description for the S1 status byte. Any value other than 0x00/0xFF
/// indicates a block-list-level error.
pub fn s1_description(s1: u8) -> &'static str {
    match s1 {
        0x00 => "Success",
        0xFF => "Error (no block list)",
        _ => "Error (block list)",
    }
}

/// Description for the S2 status byte, per the card error vocabulary.
pub fn s2_description(s2: u8) -> &'static str {
    match s2 {
        // common
        0x00 => "Success",
        0x01 => "Purse data under/overflow",
        0x02 => "Cashback data exceeded",
        0x70 => "Memory error",
        0x71 => "Memory warning",

        // card-specific
        0xA1 => "Illegal Number of Service",
        0xA2 => "Illegal command packet (specified Number of Block",
        0xA3 => "Illegal Block List (specified order of Service",
        0xA4 => "Illegal Service type",
        0xA5 => "Access is not allowed",
        0xA6 => "Illegal Service Code List",
        0xA7 => "Illegal Block List (access mode)",
        0xA8 => "Illegal Block Number (access to the specified data is inhibited",
        0xA9 => "Data write failure",
        0xAA => "Key-change failure",
        0xAB => "Illegal Package Parity or Illegal Package MAC",
        0xAC => "Illegal parameter",
        0xAD => "Service exists already",
        0xAE => "Illegal System Code",
        0xAF => "Too many simulatenous cyclic write operations",
        0xC0 => "Illegal Package Identifier",
        0xC1 => "Discrepancy of parameters inside and outside Package",
        0xC2 => "Command is disabled already",

        _ => "Unknown",
    }
}
