use crate::{input_space, selector, table};

pub type VthGateResult<T> = Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("vthgate_rs: input space: {}", _0)]
    InputSpace(input_space::Error),
    #[error("vthgate_rs: gate table: {}", _0)]
    Table(table::Error),
    #[error("vthgate_rs: {}", _0)]
    Validation(selector::Error),
    #[error("vthgate_rs: gate {gate} takes {expected} inputs but the input space has {actual}")]
    WidthMismatch {
        gate: &'static str,
        expected: usize,
        actual: usize,
    },
}

impl Error {
    /// Whether the error stems from a bad threshold rather than a failure.
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Validation(_))
    }
}
