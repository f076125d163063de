use thiserror::Error;

use crate::compact::CompactString;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClassifyError {
    #[error("Malformed number `{0}`")]
    MalformedNumber(CompactString),
}
