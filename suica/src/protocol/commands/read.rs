// suica-rs/suica/src/protocol/commands/read.rs

use crate::types::{BlockElement, Idm, ServiceCode};

/// Encode ReadWithoutEncryption command payload (FeliCa command code 0x06)
/// for a single service and a single block.
pub fn encode_read(idm: Idm, service: ServiceCode, block: BlockElement) -> Vec<u8> {
    let mut buf = Vec::new();
    buf.push(0x06); // ReadWithoutEncryption command code
    buf.extend_from_slice(idm.as_bytes());
    buf.push(1); // service count
    buf.extend_from_slice(&service.to_le_bytes());
    buf.push(1); // block count
    buf.extend_from_slice(&block.encode());
    buf
}
