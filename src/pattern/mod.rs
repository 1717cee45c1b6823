mod compiled;
mod error;
mod flags;
mod set;

pub use compiled::MatchPattern;
pub use error::{PatternError, PatternResult};
pub use flags::PatternFlags;
pub use set::{PatternLike, PatternSet, Patterns};
