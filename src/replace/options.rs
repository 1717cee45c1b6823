use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplaceOptions {
    /// Maximum number of replacements for the whole call. Matches past the
    /// limit stay literal.
    pub limit: Option<usize>,
    /// Reject empty sources instead of handing them back unchanged.
    pub strict: bool,
    pub literal_ignore_case: bool,
}

impl Default for ReplaceOptions {
    fn default() -> Self {
        Self {
            limit: None,
            strict: false,
            literal_ignore_case: true,
        }
    }
}

impl ReplaceOptions {
    pub fn builder() -> ReplaceOptionsBuilder {
        ReplaceOptionsBuilder::default()
    }

    pub fn validate(&self) -> Result<(), ReplaceOptionsError> {
        if self.limit == Some(0) {
            return Err(ReplaceOptionsError::ZeroLimit);
        }
        Ok(())
    }
}

#[derive(Debug, Default, Clone)]
pub struct ReplaceOptionsBuilder {
    options: ReplaceOptions,
}

impl ReplaceOptionsBuilder {
    pub fn limit(mut self, value: usize) -> Self {
        self.options.limit = Some(value);
        self
    }

    pub fn unlimited(mut self) -> Self {
        self.options.limit = None;
        self
    }

    pub fn strict(mut self, value: bool) -> Self {
        self.options.strict = value;
        self
    }

    pub fn literal_ignore_case(mut self, value: bool) -> Self {
        self.options.literal_ignore_case = value;
        self
    }

    pub fn build(self) -> Result<ReplaceOptions, ReplaceOptionsError> {
        let options = self.options;
        options.validate()?;
        Ok(options)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReplaceOptionsError {
    #[error("limit must be at least 1; omit it to replace every match")]
    ZeroLimit,
}
