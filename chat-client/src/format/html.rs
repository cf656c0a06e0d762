//! HTML rendering for browser front ends.
//!
//! All reply text goes through askama's HTML escaper.

use super::{format_text, Block, Inline};
use askama::Template;

#[derive(Template)]
#[template(
    source = "{% for span in spans %}{% match span %}{% when Inline::Text with (text) %}{{ text }}{% when Inline::Bold with (text) %}<strong>{{ text }}</strong>{% when Inline::Code with (text) %}<code>{{ text }}</code>{% endmatch %}{% endfor %}",
    ext = "html"
)]
struct InlineTemplate<'a> {
    spans: &'a [Inline],
}

#[derive(Template)]
#[template(source = r#"<h3 class="section-header">{{ title }}</h3>"#, ext = "html")]
struct HeaderTemplate<'a> {
    title: &'a str,
}

#[derive(Template)]
#[template(
    source = r#"<ul class="list-level-{{ level }}"><li>{{ content|safe }}</li></ul>"#,
    ext = "html"
)]
struct ListItemTemplate {
    level: u8,
    content: String,
}

#[derive(Template)]
#[template(
    source = r#"<ol start="{{ number }}"><li>{{ content|safe }}</li></ol>"#,
    ext = "html"
)]
struct NumberedItemTemplate {
    number: u64,
    content: String,
}

#[derive(Template)]
#[template(source = "<p>{{ content|safe }}</p>", ext = "html")]
struct ParagraphTemplate {
    content: String,
}

/// Format `text` and render it as an HTML fragment.
pub fn to_html(text: &str) -> askama::Result<String> {
    render_blocks(&format_text(text))
}

pub fn render_blocks(blocks: &[Block]) -> askama::Result<String> {
    blocks.iter().map(render_block).collect()
}

fn render_block(block: &Block) -> askama::Result<String> {
    match block {
        Block::Header(title) => HeaderTemplate { title }.render(),
        Block::ListItem { level, content } => ListItemTemplate {
            level: *level,
            content: render_inline(content)?,
        }
        .render(),
        Block::NumberedItem { number, content } => NumberedItemTemplate {
            number: *number,
            content: render_inline(content)?,
        }
        .render(),
        Block::Paragraph(content) => ParagraphTemplate {
            content: render_inline(content)?,
        }
        .render(),
        Block::Spacer => Ok("<br>".to_string()),
    }
}

fn render_inline(spans: &[Inline]) -> askama::Result<String> {
    InlineTemplate { spans }.render()
}
