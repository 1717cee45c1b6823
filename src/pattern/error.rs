use thiserror::Error;

#[derive(Debug, Error)]
pub enum PatternError {
    #[error("pattern '{pattern}' failed to compile: {source}")]
    InvalidRegex {
        pattern: String,
        #[source]
        source: regex::Error,
    },
    #[error("pattern list is empty; at least one pattern is required")]
    EmptyPatternSet,
    #[error("pattern '{input}' is not in '/source/flags' form")]
    MalformedLiteralForm { input: String },
    /// Raised for any letter other than `g`, `i`, `m`, `s` or `u`, including
    /// the sticky flag `y`.
    #[error("pattern '{input}' has unknown flag '{flag}'")]
    UnknownFlag { input: String, flag: char },
}

pub type PatternResult<T> = Result<T, PatternError>;
