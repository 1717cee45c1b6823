mod error;
mod options;
mod replacer;
mod service;

pub use error::{InputError, InputResult};
pub use options::{ReplaceOptions, ReplaceOptionsBuilder, ReplaceOptionsError};
pub use replacer::{Constant, Replacer, ReplacerRef};
pub use service::{replace, replace_with};
