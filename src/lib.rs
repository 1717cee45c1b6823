//! Split strings at pattern matches and replace each match with an arbitrary
//! value.
//!
//! The result is a flat `Vec<Node<T>>` of literal text and replaced items,
//! the shape a tree renderer expects for mixed children. Feeding a result
//! back in as the source of another call only re-splits its text nodes, so
//! independent passes (links, then mentions, then hashtags) can be chained.
//!
//! ```
//! use string_replace_rs::{Node, replace};
//!
//! let out = replace("Call 555-0199 now", r"555-0199", |m: &str, _: usize, _: usize| {
//!     format!("<strong>{m}</strong>")
//! })
//! .expect("well-formed call");
//!
//! assert_eq!(
//!     out,
//!     vec![
//!         Node::text("Call "),
//!         Node::item("<strong>555-0199</strong>".to_string()),
//!         Node::text(" now"),
//!     ]
//! );
//! ```

pub mod errors;
pub mod pattern;
pub mod replace;
pub mod rules;
pub mod segment;
pub mod types;

pub use errors::{ReplaceError, ReplaceResult};
pub use pattern::{MatchPattern, PatternError, PatternFlags, PatternLike, PatternSet, Patterns};
pub use replace::{
    Constant, InputError, ReplaceOptions, ReplaceOptionsBuilder, ReplaceOptionsError, Replacer,
    replace, replace_with,
};
pub use rules::{Rule, RuleSet};
pub use types::{Node, Source, collect_text};
