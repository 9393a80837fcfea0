//! Line-oriented parser for content documents.
//!
//! The supported format is a restricted YAML subset:
//!
//! ```yaml
//! # comment
//! title: "Some Paper"
//! year: 2024
//! authors:
//!   - Ada Lovelace
//!   - 'Grace Hopper'
//! status:
//! ```
//!
//! Every line falls into one of a few classes and the parser is a small state
//! machine over them:
//!
//! | State   | Line class                     | Transition                          |
//! |---------|--------------------------------|-------------------------------------|
//! | scan    | blank or `#` comment           | next line                           |
//! | scan    | `key: value`                   | store text, next line               |
//! | scan    | `key:`, next content is `- x`  | enter list                          |
//! | scan    | `key:`, anything else          | store `""`, next line               |
//! | scan    | unrecognized                   | record as skipped, next line        |
//! | list    | blank                          | next line                           |
//! | list    | `- item`                       | append item, next line              |
//! | list    | anything else                  | store list, back to scan (same line)|
//!
//! Parsing never fails. Malformed lines are dropped; callers that care can
//! use [`parse_document_with_diagnostics`] to see which ones.
//!
//! A comment line inside a list block is "anything else" and ends the list.
//! The list also ends at the first non-dash line regardless of indentation,
//! so a more deeply indented key after a list is read as a new top-level key.

use crate::scalar::parse_scalar;
use crate::value::{Mapping, Value};

const BOM: char = '\u{FEFF}';

/// A line that was ignored because it matched no construct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    /// 1-based line number.
    pub line_number: usize,
    /// The untrimmed line text.
    pub content: String,
}

/// What the parser dropped while reading a document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseDiagnostics {
    skipped: Vec<SkippedLine>,
}

impl ParseDiagnostics {
    /// Number of malformed lines that were skipped.
    pub fn skipped_count(&self) -> usize {
        self.skipped.len()
    }

    /// The skipped lines, in document order.
    pub fn skipped(&self) -> &[SkippedLine] {
        &self.skipped
    }

    /// Whether every non-blank, non-comment line was understood.
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty()
    }
}

/// Parse a document into a [`Mapping`].
///
/// Duplicate keys overwrite earlier ones; keys are case-sensitive.
///
/// # Example
///
/// ```rust
/// use folio_content::parse_document;
///
/// let doc = parse_document("items:\n  - a.yaml\n  - b.yaml\n");
/// assert_eq!(doc.get_string_list("items"), vec!["a.yaml", "b.yaml"]);
/// ```
pub fn parse_document(text: &str) -> Mapping {
    parse_document_with_diagnostics(text).0
}

/// Parse a document and report the lines that were skipped.
///
/// A leading byte order mark is ignored.
pub fn parse_document_with_diagnostics(text: &str) -> (Mapping, ParseDiagnostics) {
    let text = text.strip_prefix(BOM).unwrap_or(text);
    let lines: Vec<&str> = split_lines(text).collect();
    let mut parser = Parser {
        lines: &lines,
        pos: 0,
        mapping: Mapping::new(),
        diagnostics: ParseDiagnostics::default(),
    };
    parser.run();
    (parser.mapping, parser.diagnostics)
}

// ============================================================================
// Line classification
// ============================================================================

/// Class of a line seen while scanning for keys.
#[derive(Debug, PartialEq, Eq)]
enum Line<'a> {
    Blank,
    Entry { key: &'a str, inline: &'a str },
    Unrecognized,
}

/// Class of a line seen inside a list block.
#[derive(Debug, PartialEq, Eq)]
enum ListLine<'a> {
    Blank,
    Dash(&'a str),
    End,
}

fn classify(line: &str) -> Line<'_> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Line::Blank;
    }
    match split_entry(trimmed) {
        Some((key, inline)) => Line::Entry { key, inline },
        None => Line::Unrecognized,
    }
}

fn classify_in_list(line: &str) -> ListLine<'_> {
    if is_blank(line) {
        return ListLine::Blank;
    }
    match dash_content(line) {
        Some(content) => ListLine::Dash(content),
        None => ListLine::End,
    }
}

fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

/// `key:` followed by optional inline text, on an already trimmed line.
fn split_entry(trimmed: &str) -> Option<(&str, &str)> {
    let colon = trimmed.find(':')?;
    let key = &trimmed[..colon];
    if key.is_empty() || !key.bytes().all(is_key_byte) {
        return None;
    }
    Some((key, trimmed[colon + 1..].trim_start()))
}

fn is_key_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b == b'-'
}

/// Leading whitespace, `-`, optional whitespace, then the item text.
fn dash_content(line: &str) -> Option<&str> {
    line.trim_start().strip_prefix('-').map(str::trim_start)
}

fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split('\n').map(|l| l.strip_suffix('\r').unwrap_or(l))
}

// ============================================================================
// State machine
// ============================================================================

struct Parser<'a> {
    lines: &'a [&'a str],
    pos: usize,
    mapping: Mapping,
    diagnostics: ParseDiagnostics,
}

impl Parser<'_> {
    fn run(&mut self) {
        let lines = self.lines;
        while let Some(&line) = lines.get(self.pos) {
            match classify(line) {
                Line::Blank => self.pos += 1,
                Line::Unrecognized => self.skip(line),
                Line::Entry { key, inline } if !inline.is_empty() => {
                    self.mapping.insert(key, parse_scalar(inline));
                    self.pos += 1;
                }
                Line::Entry { key, .. } => {
                    if self.list_follows() {
                        let items = self.read_list();
                        self.mapping.insert(key, Value::List(items));
                    } else {
                        self.mapping.insert(key, "");
                        self.pos += 1;
                    }
                }
            }
        }
    }

    fn skip(&mut self, line: &str) {
        log::debug!("Skipping unrecognized line {}: {line:?}", self.pos + 1);
        self.diagnostics.skipped.push(SkippedLine {
            line_number: self.pos + 1,
            content: line.to_string(),
        });
        self.pos += 1;
    }

    /// Whether the next non-blank line after the current one is a dash item.
    fn list_follows(&self) -> bool {
        self.lines[self.pos + 1..]
            .iter()
            .find(|line| !is_blank(line))
            .is_some_and(|line| dash_content(line).is_some())
    }

    /// Consume the key line and its list block, stopping before the first
    /// line that is neither blank nor a dash item.
    fn read_list(&mut self) -> Vec<String> {
        let mut items = Vec::new();
        let lines = self.lines;
        self.pos += 1;
        while let Some(&line) = lines.get(self.pos) {
            match classify_in_list(line) {
                ListLine::Blank => self.pos += 1,
                ListLine::Dash(content) => {
                    items.push(parse_scalar(content));
                    self.pos += 1;
                }
                ListLine::End => break,
            }
        }
        items
    }
}

// ============================================================================
// Tests
// ============================================================================
