//! ANSI rendering for the terminal front end.

use super::{format_text, Block, Inline};
use colored::Colorize;

/// Format `text` and render it for a terminal, one output line per input line.
pub fn to_terminal(text: &str) -> String {
    format_text(text)
        .iter()
        .map(render_block)
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_block(block: &Block) -> String {
    match block {
        Block::Header(title) => title.bold().underline().to_string(),
        Block::ListItem { level: 1, content } => format!("  • {}", render_inline(content)),
        Block::ListItem { content, .. } => format!("      ◦ {}", render_inline(content)),
        Block::NumberedItem { number, content } => {
            format!("  {}. {}", number, render_inline(content))
        }
        Block::Paragraph(content) => render_inline(content),
        Block::Spacer => String::new(),
    }
}

fn render_inline(spans: &[Inline]) -> String {
    spans
        .iter()
        .map(|span| match span {
            Inline::Text(text) => text.clone(),
            Inline::Bold(text) => text.bold().to_string(),
            Inline::Code(text) => text.cyan().to_string(),
        })
        .collect()
}
