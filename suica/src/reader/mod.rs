// suica-rs/suica/src/reader/mod.rs

//! Reader context: the explicitly owned handle to the one physical NFC
//! reader. Acquisition and release are scoped by ownership; dropping the
//! handle releases the transport on every exit path.

pub mod builder;
pub mod handle;

pub use builder::ReaderBuilder;
pub use handle::{Initialized, Reader, Uninitialized};
