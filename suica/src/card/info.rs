// suica-rs/suica/src/card/info.rs

use crate::types::{Idm, Pmm, SystemCode};

/// Compact information describing a selected FeliCa card
/// (IDm/PMm/SystemCode). Unlike a session, this carries no reader borrow
/// and can be stored freely.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardInfo {
    idm: Idm,
    pmm: Pmm,
    system_code: SystemCode,
}

impl CardInfo {
    pub fn new(idm: Idm, pmm: Pmm, system_code: SystemCode) -> Self {
        Self {
            idm,
            pmm,
            system_code,
        }
    }

    pub fn idm(&self) -> &Idm {
        &self.idm
    }

    pub fn pmm(&self) -> &Pmm {
        &self.pmm
    }

    pub fn system_code(&self) -> SystemCode {
        self.system_code
    }
}

impl From<&crate::card::CardSession<'_>> for CardInfo {
    fn from(session: &crate::card::CardSession<'_>) -> Self {
        *session.info()
    }
}
