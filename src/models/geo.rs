//! Geo option types shared between the directory client and the selection chain

use serde::{Deserialize, Serialize};

/// One entry of the calling-code directory
///
/// `code` is the two-letter country code, `name` the display name shown in
/// the picker, `calling_code` the international dialing prefix ("+1"). The
/// prefix is the selector: choosing it resolves the owning country. These
/// are transient, fetched fresh from the directory per editing session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CallingCodeOption {
    pub code: String,
    pub name: String,
    pub calling_code: String,
}

impl CallingCodeOption {
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        calling_code: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            calling_code: calling_code.into(),
        }
    }
}
