use crate::pattern::PatternError;
use crate::replace::{InputError, ReplaceOptionsError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReplaceError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Pattern(#[from] PatternError),
    #[error(transparent)]
    Options(#[from] ReplaceOptionsError),
}

pub type ReplaceResult<T> = Result<T, ReplaceError>;
