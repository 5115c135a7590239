// suica-rs/suica/src/protocol/commands/mod.rs

pub mod polling;
pub mod read;

pub use polling::encode_polling;
pub use read::encode_read;

/// High-level Command enum. Only the two commands this crate needs are
/// modeled: card selection and single-service block reads. New commands
/// would be added here with their per-command encoder placed in
/// `protocol::commands::<name>.rs`.
#[derive(Debug, Clone)]
pub enum Command {
    Polling {
        system_code: crate::types::SystemCode,
        request_code: u8,
        time_slot: u8,
    },
    ReadWithoutEncryption {
        idm: crate::types::Idm,
        service: crate::types::ServiceCode,
        block: crate::types::BlockElement,
    },
}

impl Command {
    /// Return the command code as defined by the FeliCa spec.
    pub fn command_code(&self) -> u8 {
        match self {
            Self::Polling { .. } => 0x00,
            Self::ReadWithoutEncryption { .. } => 0x06,
        }
    }

    /// Encode the command into the raw payload (command code + params).
    pub fn encode(&self) -> Vec<u8> {
        match self {
            Self::Polling {
                system_code,
                request_code,
                time_slot,
            } => encode_polling(*system_code, *request_code, *time_slot),
            Self::ReadWithoutEncryption {
                idm,
                service,
                block,
            } => encode_read(*idm, *service, *block),
        }
    }
}
