use crate::{Entropy, Error, Generator, Node, Sink};
use regex_syntax::ParserBuilder;
use std::{fmt, str::FromStr};
use tracing::debug;

/// A parsed regular expression that produces random matching strings.
///
/// # Implementation
/// ## Construction
/// `Pattern` is constructed using `from_str` (or [`PatternBuilder`]) on a regular expression:
/// - `regex_syntax` parses the string into its high-level intermediate representation.
/// - The `Hir` is converted to a [`Node`] tree, keeping only what matters for generation.
///
/// A `Pattern` can also be built from a hand-made [`Node`] with `try_from`, which validates it.
///
/// ## Generation
/// [`Generator`] walks the tree, drawing every choice (alternation branch, repetition count,
/// class member) from an [`Entropy`] source.
///
/// # Example
/// ```
/// use rand::{rngs::StdRng, SeedableRng};
/// use regex_gen::Pattern;
///
/// let pattern: Pattern = "[0-9]{3}-[0-9]{4}".parse().unwrap();
/// let mut rng = StdRng::seed_from_u64(42);
/// let phone: String = pattern.generate(&mut rng).unwrap();
/// assert_eq!(phone.len(), 8);
/// ```
#[derive(Debug, Clone)]
pub struct Pattern {
    root: Node,
    generator: Generator,
}

impl Pattern {
    pub fn builder() -> PatternBuilder {
        PatternBuilder::new()
    }

    /// Returns a string matching the pattern, or the error that stopped generation.
    pub fn generate<S: Sink, E: Entropy + ?Sized>(&self, rng: &mut E) -> Result<S, Error> {
        let mut sink = S::new();
        self.generate_into(&mut sink, rng)?;
        Ok(sink)
    }

    /// Appends a string matching the pattern to `sink`.
    ///
    /// Unlike [`Pattern::generate`], output written before an error is left in `sink`.
    pub fn generate_into<S: Sink, E: Entropy + ?Sized>(
        &self,
        sink: &mut S,
        rng: &mut E,
    ) -> Result<(), Error> {
        self.generator
            .generate(&self.root, sink, rng)
            .inspect_err(|e| debug!(error = %e, written = sink.len(), "generation stopped"))
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    pub fn generator(&self) -> &Generator {
        &self.generator
    }

    /// Replaces the generation settings.
    pub fn with_generator(mut self, generator: Generator) -> Self {
        self.generator = generator;
        self
    }
}

/// Pretty prints the parsed tree.
impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        self.root.fmt(f)
    }
}

impl FromStr for Pattern {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PatternBuilder::new().build(s)
    }
}

impl TryFrom<Node> for Pattern {
    type Error = Error;

    fn try_from(root: Node) -> Result<Self, Self::Error> {
        root.validate()?;
        Ok(Self {
            root,
            generator: Generator::default(),
        })
    }
}

/// Configures parsing and generation of a [`Pattern`].
///
/// ```
/// use regex_gen::Pattern;
///
/// let pattern = Pattern::builder()
///     .unicode(false)
///     .max_repeat(4)
///     .build(r"\w+")
///     .unwrap();
/// let s: String = pattern.generate(&mut rand::rng()).unwrap();
/// assert!((1..=4).contains(&s.len()));
/// assert!(s.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'_'));
/// ```
#[derive(Debug, Clone, Default)]
pub struct PatternBuilder {
    parser: ParserBuilder,
    generator: Generator,
}

impl PatternBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables Unicode classes (`\w`, `\d`, ...) and case folding. On by default.
    pub fn unicode(&mut self, yes: bool) -> &mut Self {
        self.parser.unicode(yes);
        self
    }

    pub fn case_insensitive(&mut self, yes: bool) -> &mut Self {
        self.parser.case_insensitive(yes);
        self
    }

    /// Makes `^` and `$` line anchors instead of text anchors.
    pub fn multi_line(&mut self, yes: bool) -> &mut Self {
        self.parser.multi_line(yes);
        self
    }

    pub fn dot_matches_new_line(&mut self, yes: bool) -> &mut Self {
        self.parser.dot_matches_new_line(yes);
        self
    }

    pub fn nest_limit(&mut self, limit: u32) -> &mut Self {
        self.parser.nest_limit(limit);
        self
    }

    /// See [`Generator::max_repeat`].
    pub fn max_repeat(&mut self, n: u32) -> &mut Self {
        self.generator = self.generator.clone().max_repeat(n);
        self
    }

    /// See [`Generator::max_len`].
    pub fn max_len(&mut self, len: usize) -> &mut Self {
        self.generator = self.generator.clone().max_len(len);
        self
    }

    pub fn build(&self, pattern: &str) -> Result<Pattern, Error> {
        let hir = self.parser.build().parse(pattern)?;
        let root = Node::try_from(&hir)?;
        Ok(Pattern {
            root,
            generator: self.generator.clone(),
        })
    }
}
