#![allow(rustdoc::bare_urls)]
#![doc = include_str!("../README.md")]

mod ast;
mod error;
mod generator;
mod pattern;
mod sink;
mod source;

pub use ast::Node;
pub use error::{Error, ErrorKind};
pub use generator::{Generator, QUEST_PROBABILITY};
pub use pattern::{Pattern, PatternBuilder};
pub use sink::Sink;
pub use source::Entropy;

/// Default number of extra repetitions for `*`, `+` and `{n,}`.
pub const MAX_REPEAT: u32 = 32;

/// Parses `pattern` and returns a random string matching it, using the thread-local RNG.
///
/// ```
/// let s = regex_gen::generate("foo(-(bar|boo))").unwrap();
/// assert!(s == "foo-bar" || s == "foo-boo");
/// ```
pub fn generate(pattern: &str) -> Result<String, Error> {
    let pattern: Pattern = pattern.parse()?;
    pattern.generate(&mut rand::rng())
}
