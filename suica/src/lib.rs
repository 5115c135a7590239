// suica-rs/suica/src/lib.rs

//! suica
//!
//! Pure Rust reader for Suica (FeliCa) transit-card transaction history.
#![warn(missing_docs)]

pub mod card;
pub mod constants;
pub mod error;
pub mod prelude;
pub mod protocol;
pub mod reader;
pub mod status;
pub mod test_support;
pub mod transaction;
pub mod transport;
pub mod types;
pub mod utils;

// Re-export common types at crate root so `crate::Error`, `crate::Result`,
// `StatusCode` and the newtypes in `types` are available for consumers and
// for convenient `prelude` re-exports.
pub use crate::error::*;
pub use crate::status::StatusCode;
pub use crate::types::*;

pub use prelude::*;
