//! Light, line-oriented formatting for AI replies.
//!
//! Each line is classified on its own (header, list item, numbered item,
//! paragraph or spacer) and inline `**bold**` / `` `code` `` spans are picked
//! out in a single left-to-right scan. There is no nesting and nothing spans
//! more than one line.

pub mod html;
pub mod terminal;

use once_cell::sync::Lazy;
use regex::Regex;

static HEADER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\*\*([^*]+)\*\*$").unwrap());
static BULLET: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\s*)\* (.*)$").unwrap());
static NUMBERED: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*(\d+)\. (.*)$").unwrap());
static INLINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*(.+?)\*\*|`([^`]+)`").unwrap());

/// An inline span within a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inline {
    Text(String),
    Bold(String),
    Code(String),
}

/// One formatted line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// A line consisting only of `**text**`.
    Header(String),
    /// `* item` (level 1) or indented `* item` (level 2).
    ListItem { level: u8, content: Vec<Inline> },
    /// `<n>. item`.
    NumberedItem { number: u64, content: Vec<Inline> },
    Paragraph(Vec<Inline>),
    /// A blank line.
    Spacer,
}

/// Split `text` into lines and classify each one.
pub fn format_text(text: &str) -> Vec<Block> {
    text.lines().map(format_line).collect()
}

fn format_line(line: &str) -> Block {
    let line = line.trim_end();
    if line.trim().is_empty() {
        return Block::Spacer;
    }

    if let Some(caps) = HEADER.captures(line.trim_start()) {
        return Block::Header(caps[1].to_string());
    }

    if let Some(caps) = BULLET.captures(line) {
        let level = if caps[1].is_empty() { 1 } else { 2 };
        return Block::ListItem {
            level,
            content: parse_inline(&caps[2]),
        };
    }

    if let Some(caps) = NUMBERED.captures(line) {
        if let Ok(number) = caps[1].parse() {
            return Block::NumberedItem {
                number,
                content: parse_inline(&caps[2]),
            };
        }
    }

    Block::Paragraph(parse_inline(line.trim_start()))
}

/// Replace `**bold**` and `` `code` `` spans; everything else stays text.
pub fn parse_inline(text: &str) -> Vec<Inline> {
    let mut spans = Vec::new();
    let mut last = 0;

    for caps in INLINE.captures_iter(text) {
        let Some(whole) = caps.get(0) else { continue };
        if whole.start() > last {
            spans.push(Inline::Text(text[last..whole.start()].to_string()));
        }

        if let Some(bold) = caps.get(1) {
            spans.push(Inline::Bold(bold.as_str().to_string()));
        } else if let Some(code) = caps.get(2) {
            spans.push(Inline::Code(code.as_str().to_string()));
        }
        last = whole.end();
    }

    if last < text.len() {
        spans.push(Inline::Text(text[last..].to_string()));
    }

    spans
}
