use crate::error::{Error, ErrorRepr};
use crate::{Entropy, Node, Sink, MAX_REPEAT};
use tracing::trace;

/// Probability that an optional (`x?`) sub-expression is generated.
pub const QUEST_PROBABILITY: f64 = 0.5;

/// Number of printable ASCII chars, `' '..='~'`.
const PRINTABLE: u64 = 95;

/// Walks a [`Node`] tree, writing a random matching string to a [`Sink`].
///
/// # Implementation
/// The tree is traversed with an explicit stack instead of recursion. Container nodes push
/// their children in reverse so they are popped (and written) in order; a repetition pushes
/// its children once per chosen repetition. Leaves write to the sink as they are popped,
/// which keeps anchors like `(?m)^` aware of everything written before them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generator {
    max_repeat: u32,
    max_len: Option<usize>,
}

impl Default for Generator {
    fn default() -> Self {
        Self {
            max_repeat: MAX_REPEAT,
            max_len: None,
        }
    }
}

impl Generator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of extra repetitions allowed for unbounded repeats.
    /// `x*` repeats `[0, n]` times, `x+` `[1, n]` and `x{m,}` `[m, m + n]`.
    pub fn max_repeat(mut self, n: u32) -> Self {
        self.max_repeat = n;
        self
    }

    /// Fails generation with [`crate::ErrorKind::OutputLimit`] once the sink holds more than
    /// `len` bytes. Nested unbounded repeats multiply, e.g. `((a*)*)*` can write `33^3` chars.
    pub fn max_len(mut self, len: usize) -> Self {
        self.max_len = Some(len);
        self
    }

    /// Returns the configured repeat ceiling.
    pub fn repeat_limit(&self) -> u32 {
        self.max_repeat
    }

    /// Returns the configured output cap, if any.
    pub fn len_limit(&self) -> Option<usize> {
        self.max_len
    }

    /// Appends a random string matching `node` to `sink`.
    ///
    /// On error, whatever was written before the failing node stays in `sink`.
    ///
    /// # Panics
    /// Panics if `node` breaks the invariants checked by [`Node::validate`].
    pub fn generate<S, E>(&self, node: &Node, sink: &mut S, rng: &mut E) -> Result<(), Error>
    where
        S: Sink,
        E: Entropy + ?Sized,
    {
        let mut to_write = vec![node];

        while let Some(node) = to_write.pop() {
            match node {
                Node::NoMatch | Node::EmptyMatch => (),
                Node::Literal(s) => sink.push_str(s),
                Node::CharClass(ranges) => sink.push_char(sample_class(ranges, rng)?),
                Node::AnyCharExclNewline => sink.push_char(printable(rng.below(PRINTABLE)?)),
                Node::AnyChar => {
                    let i = rng.below(PRINTABLE + 1)?;
                    sink.push_char(if i == PRINTABLE { '\n' } else { printable(i) })
                }
                Node::BeginLine => {
                    if !sink.is_empty() {
                        sink.push_char('\n')
                    }
                }
                Node::EndLine => {
                    if sink.is_empty() {
                        return Err(Error(ErrorRepr::AnchorStop("end of line")));
                    }
                    sink.push_char('\n')
                }
                Node::BeginText => return Err(Error(ErrorRepr::AnchorStop("beginning of text"))),
                Node::EndText => return Err(Error(ErrorRepr::AnchorStop("end of text"))),
                Node::WordBoundary => return Err(Error(ErrorRepr::Unsupported("word boundary"))),
                Node::NoWordBoundary => {
                    return Err(Error(ErrorRepr::Unsupported("not word boundary")))
                }
                Node::Capture { children, .. } | Node::Concat(children) => {
                    to_write.extend(children.iter().rev())
                }
                Node::Alternate(children) => {
                    let i = rng.below(children.len() as u64)? as usize;
                    trace!(index = i, of = children.len(), "alternate");
                    to_write.push(&children[i]);
                }
                Node::Star(children) => {
                    repeat(children, 0, self.max_repeat, &mut to_write, rng)?;
                }
                Node::Plus(children) => {
                    repeat(children, 1, self.max_repeat.max(1), &mut to_write, rng)?;
                }
                Node::Repeat { min, max, children } => {
                    let max = max.unwrap_or_else(|| min.saturating_add(self.max_repeat));
                    repeat(children, *min, max, &mut to_write, rng)?;
                }
                Node::Quest(children) => {
                    let b = rng.chance(QUEST_PROBABILITY)?;
                    trace!(chosen = b, "optional");
                    if b {
                        to_write.extend(children.iter().rev());
                    }
                }
            }

            if let Some(max) = self.max_len {
                if sink.len() > max {
                    return Err(Error(ErrorRepr::OutputLimit(max)));
                }
            }
        }
        Ok(())
    }
}

/// Chooses a repetition count in `[lo, hi]` and schedules `children` that many times.
fn repeat<'a, E: Entropy + ?Sized>(
    children: &'a [Node],
    lo: u32,
    hi: u32,
    to_write: &mut Vec<&'a Node>,
    rng: &mut E,
) -> Result<(), Error> {
    let reps = lo as u64 + rng.below(hi as u64 - lo as u64 + 1)?;
    trace!(reps, lo, hi, "repeat");
    for _ in 0..reps {
        to_write.extend(children.iter().rev());
    }
    Ok(())
}

fn printable(i: u64) -> char {
    char::from(b' ' + i as u8)
}

const SURROGATES: u32 = 0xE000 - 0xD800;

/// Number of valid `char`s in `lo..=hi`.
fn width(lo: char, hi: char) -> u64 {
    let w = hi as u64 - lo as u64 + 1;
    if (lo as u32) < 0xD800 && (hi as u32) >= 0xE000 {
        w - SURROGATES as u64
    } else {
        w
    }
}

/// The `offset`th valid `char` counting from `lo`.
fn nth(lo: char, offset: u64) -> char {
    let mut cp = lo as u32 + offset as u32;
    if (lo as u32) < 0xD800 && cp >= 0xD800 {
        cp += SURROGATES;
    }
    char::from_u32(cp).expect("offset within range")
}

/// Returns a char drawn uniformly from the union of `ranges`.
fn sample_class<E: Entropy + ?Sized>(ranges: &[(char, char)], rng: &mut E) -> Result<char, Error> {
    let total: u64 = ranges.iter().map(|(lo, hi)| width(*lo, *hi)).sum();
    let mut r = rng.below(total)?;
    for (lo, hi) in ranges {
        let w = width(*lo, *hi);
        if r < w {
            return Ok(nth(*lo, r));
        }
        r -= w;
    }
    unreachable!("sampled offset outside of class ranges")
}
