//! Tree representation of a parsed pattern.
//!
//! `regex_syntax` does the parsing; its `Hir` is converted into a [`Node`] which
//! only distinguishes what matters for generation.

use crate::error::{Error, ErrorRepr};
use regex_syntax::hir::{Class, Hir, HirKind, Look};
use std::fmt;

/// A parsed pattern, one variant per operator kind.
///
/// Container variants (`Capture`, `Concat`, `Alternate`, `Star`, `Plus`, `Repeat`, `Quest`)
/// hold a non-empty list of children. For repetitions and captures all children are
/// generated in sequence, for `Alternate` exactly one of them is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Matches nothing. Generates nothing.
    NoMatch,
    /// Matches the empty string.
    EmptyMatch,
    /// Matches exactly this (non-empty) text.
    Literal(String),
    /// Matches one char in any of the inclusive `(low, high)` ranges.
    CharClass(Vec<(char, char)>),
    /// `.`
    AnyCharExclNewline,
    /// `(?s).`
    AnyChar,
    /// `(?m)^`
    BeginLine,
    /// `(?m)$`
    EndLine,
    /// `^` or `\A`
    BeginText,
    /// `$` or `\z`
    EndText,
    /// `\b` and the other word assertions.
    WordBoundary,
    /// `\B`
    NoWordBoundary,
    Capture {
        name: Option<Box<str>>,
        children: Vec<Node>,
    },
    Concat(Vec<Node>),
    Alternate(Vec<Node>),
    /// `x*`
    Star(Vec<Node>),
    /// `x+`
    Plus(Vec<Node>),
    /// `x{min,max}`, `max == None` is unbounded.
    Repeat {
        min: u32,
        max: Option<u32>,
        children: Vec<Node>,
    },
    /// `x?`
    Quest(Vec<Node>),
}

impl Node {
    /// Checks the invariants the generator relies on:
    /// - literals and classes are non-empty
    /// - class ranges have `low <= high`
    /// - container nodes have children
    /// - bounded repeats have `min <= max`
    pub fn validate(&self) -> Result<(), Error> {
        let mut to_check = vec![self];
        while let Some(node) = to_check.pop() {
            match node {
                Self::Literal(s) if s.is_empty() => return Err(invalid("empty literal")),
                Self::CharClass(ranges) => {
                    if ranges.is_empty() {
                        return Err(invalid("empty class"));
                    }
                    if let Some((lo, hi)) = ranges.iter().find(|(lo, hi)| lo > hi) {
                        return Err(invalid(format!("class range {:?}-{:?}", lo, hi)));
                    }
                }
                Self::Repeat { min, max: Some(max), .. } if max < min => {
                    return Err(invalid(format!("repeat {{{},{}}}", min, max)));
                }
                _ => (),
            }
            if let Some(children) = node.children() {
                if children.is_empty() {
                    return Err(invalid(format!("{} without children", node.name())));
                }
                to_check.extend(children);
            }
        }
        Ok(())
    }

    /// Returns the sub-expressions of container nodes, `None` for leaves.
    pub fn children(&self) -> Option<&[Node]> {
        match self {
            Self::Capture { children, .. }
            | Self::Concat(children)
            | Self::Alternate(children)
            | Self::Star(children)
            | Self::Plus(children)
            | Self::Repeat { children, .. }
            | Self::Quest(children) => Some(children),
            _ => None,
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Self::NoMatch => "nomatch",
            Self::EmptyMatch => "empty",
            Self::Literal(_) => "literal",
            Self::CharClass(_) => "class",
            Self::AnyCharExclNewline => "dot",
            Self::AnyChar => "any",
            Self::BeginLine => "begin_line",
            Self::EndLine => "end_line",
            Self::BeginText => "begin_text",
            Self::EndText => "end_text",
            Self::WordBoundary => "word_boundary",
            Self::NoWordBoundary => "no_word_boundary",
            Self::Capture { .. } => "capture",
            Self::Concat(_) => "concat",
            Self::Alternate(_) => "or",
            Self::Star(_) => "star",
            Self::Plus(_) => "plus",
            Self::Repeat { .. } => "repeat",
            Self::Quest(_) => "option",
        }
    }
}

fn invalid(msg: impl Into<String>) -> Error {
    Error(ErrorRepr::InvalidNode(msg.into()))
}

const ALL: [(char, char); 1] = [('\0', char::MAX)];
const ALL_BUT_LF: [(char, char); 2] = [('\0', '\x09'), ('\x0B', char::MAX)];
const ALL_BYTES: [(char, char); 1] = [('\0', '\u{FF}')];
const ALL_BYTES_BUT_LF: [(char, char); 2] = [('\0', '\x09'), ('\x0B', '\u{FF}')];

impl TryFrom<&Hir> for Node {
    type Error = Error;

    fn try_from(hir: &Hir) -> Result<Self, Self::Error> {
        Ok(match hir.kind() {
            HirKind::Empty => Self::EmptyMatch,
            HirKind::Literal(lit) => {
                let s = std::str::from_utf8(&lit.0).map_err(|e| Error(ErrorRepr::Utf8(e)))?;
                Self::Literal(s.to_string())
            }
            HirKind::Class(class) => {
                let ranges: Vec<(char, char)> = match class {
                    Class::Unicode(c) => c.ranges().iter().map(|r| (r.start(), r.end())).collect(),
                    Class::Bytes(c) => c
                        .ranges()
                        .iter()
                        .map(|r| (char::from(r.start()), char::from(r.end())))
                        .collect(),
                };
                match ranges.as_slice() {
                    [] => Self::NoMatch,
                    r if r == ALL_BUT_LF || r == ALL_BYTES_BUT_LF => Self::AnyCharExclNewline,
                    r if r == ALL || r == ALL_BYTES => Self::AnyChar,
                    _ => Self::CharClass(ranges),
                }
            }
            HirKind::Look(look) => match look {
                Look::Start => Self::BeginText,
                Look::End => Self::EndText,
                Look::StartLF | Look::StartCRLF => Self::BeginLine,
                Look::EndLF | Look::EndCRLF => Self::EndLine,
                Look::WordAsciiNegate | Look::WordUnicodeNegate => Self::NoWordBoundary,
                _ => Self::WordBoundary,
            },
            HirKind::Repetition(rep) => {
                let children = vec![Self::try_from(&*rep.sub)?];
                match (rep.min, rep.max) {
                    (0, None) => Self::Star(children),
                    (1, None) => Self::Plus(children),
                    (0, Some(1)) => Self::Quest(children),
                    (min, max) => Self::Repeat { min, max, children },
                }
            }
            HirKind::Capture(cap) => Self::Capture {
                name: cap.name.clone(),
                children: vec![Self::try_from(&*cap.sub)?],
            },
            HirKind::Concat(subs) => Self::Concat(try_from_all(subs)?),
            HirKind::Alternation(subs) => Self::Alternate(try_from_all(subs)?),
        })
    }
}

fn try_from_all(subs: &[Hir]) -> Result<Vec<Node>, Error> {
    subs.iter().map(Node::try_from).collect()
}

fn fmt_w_name(name: &str, x: &[Node], f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
    write!(
        f,
        "{}({})",
        name,
        x.iter()
            .map(|x| x.to_string())
            .collect::<Vec<String>>()
            .join(", ")
    )
}

/// Pretty prints the tree, e.g. `concat("foo", capture(or("bar", "boo")))`.
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        match self {
            Self::Literal(s) => write!(f, "{:?}", s)?,
            Self::CharClass(ranges) => {
                write!(f, "[")?;
                for (lo, hi) in ranges {
                    if lo == hi {
                        write!(f, "{}", lo.escape_debug())?;
                    } else {
                        write!(f, "{}-{}", lo.escape_debug(), hi.escape_debug())?;
                    }
                }
                write!(f, "]")?;
            }
            Self::Capture {
                name: Some(name),
                children,
            } => fmt_w_name(&format!("capture<{}>", name), children, f)?,
            Self::Repeat { min, max, children } => {
                fmt_w_name("repeat", children, f)?;
                match max {
                    Some(max) => write!(f, "{{{},{}}}", min, max)?,
                    None => write!(f, "{{{},}}", min)?,
                }
            }
            x => match x.children() {
                Some(children) => fmt_w_name(x.name(), children, f)?,
                None => write!(f, "{}", x.name())?,
            },
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use regex_syntax::Parser;

    fn node(pattern: &str) -> Node {
        let hir = Parser::new().parse(pattern).unwrap();
        Node::try_from(&hir).unwrap()
    }

    fn lit(s: &str) -> Node {
        Node::Literal(s.into())
    }

    #[test]
    fn converts_leaves() {
        assert_eq!(node(""), Node::EmptyMatch);
        assert_eq!(node("abc"), lit("abc"));
        assert_eq!(node("[a-cx]"), Node::CharClass(vec![('a', 'c'), ('x', 'x')]));
        assert_eq!(node(r"[^\x00-\x{10FFFF}]"), Node::NoMatch);
        assert_eq!(node("."), Node::AnyCharExclNewline);
        assert_eq!(node("(?s)."), Node::AnyChar);
        assert_eq!(node("(?-u:[a-c])"), Node::CharClass(vec![('a', 'c')]));
    }

    #[test]
    fn converts_anchors() {
        assert_eq!(node("^"), Node::BeginText);
        assert_eq!(node("$"), Node::EndText);
        assert_eq!(node(r"\A"), Node::BeginText);
        assert_eq!(node(r"\z"), Node::EndText);
        assert_eq!(node("(?m)^"), Node::BeginLine);
        assert_eq!(node("(?m)$"), Node::EndLine);
        assert_eq!(node(r"\b"), Node::WordBoundary);
        assert_eq!(node(r"\B"), Node::NoWordBoundary);
        assert_eq!(node(r"\b{start}"), Node::WordBoundary);
    }

    #[test]
    fn converts_repetitions() {
        let a = || vec![lit("a")];
        assert_eq!(node("a*"), Node::Star(a()));
        assert_eq!(node("a*?"), Node::Star(a()));
        assert_eq!(node("a+"), Node::Plus(a()));
        assert_eq!(node("a?"), Node::Quest(a()));
        assert_eq!(
            node("a{2,4}"),
            Node::Repeat {
                min: 2,
                max: Some(4),
                children: a()
            }
        );
        assert_eq!(
            node("a{3,}"),
            Node::Repeat {
                min: 3,
                max: None,
                children: a()
            }
        );
    }

    #[test]
    fn converts_groups() {
        let n = node("foo(-(bar|boo))");
        let Node::Concat(children) = &n else {
            panic!("expected concat, got {}", n)
        };
        assert_eq!(children[0], lit("foo"));
        assert!(matches!(children[1], Node::Capture { name: None, .. }));

        assert_eq!(
            node("(?P<x>a)"),
            Node::Capture {
                name: Some("x".into()),
                children: vec![lit("a")]
            }
        );
        assert!(matches!(node("ab|cd"), Node::Alternate(_)));
    }

    #[test]
    fn pretty_prints() {
        assert_eq!(node("a{2,4}").to_string(), r#"repeat("a"){2,4}"#);
        assert_eq!(node("[a-c]+").to_string(), "plus([a-c])");
        assert_eq!(node("(?P<x>a)$").to_string(), r#"concat(capture<x>("a"), end_text)"#);
        assert_eq!(node(r"(?:ab)*\b").to_string(), r#"concat(star("ab"), word_boundary)"#);
    }

    #[test]
    fn rejects_malformed() {
        for n in [
            Node::Literal(String::new()),
            Node::CharClass(vec![]),
            Node::CharClass(vec![('z', 'a')]),
            Node::Concat(vec![]),
            Node::Alternate(vec![lit("a"), Node::Quest(vec![])]),
            Node::Repeat {
                min: 4,
                max: Some(2),
                children: vec![lit("a")],
            },
        ] {
            assert_eq!(n.validate().unwrap_err().kind(), crate::ErrorKind::InvalidNode);
        }
        assert!(node("foo(-(bar|boo)){2,}[a-z]?").validate().is_ok());
    }
}
