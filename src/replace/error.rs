use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("source is empty; expected a non-empty string or sequence")]
    Empty,
    #[error("first element of the source sequence is an empty string")]
    LeadingEmptyText,
}

pub type InputResult<T> = Result<T, InputError>;
