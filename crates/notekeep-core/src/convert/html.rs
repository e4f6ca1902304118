//! HTML rendering of a decoded document, in the shape the editor widget parses

use super::document::{visible_text, Block, ChecklistItem, Document, Inline, Mark};

const EMPTY_LINE: &str = "<p><br></p>";
const DEFAULT_TOGGLE_SUMMARY: &str = "Toggle";

pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Render a document. An empty document renders as a single empty paragraph.
pub fn render_html(doc: &Document) -> String {
    if doc.is_empty() {
        return "<p></p>".to_string();
    }
    render_blocks(&doc.blocks)
}

fn render_blocks(blocks: &[Block]) -> String {
    let mut html = String::new();
    for block in blocks {
        html.push_str(&render_block(block));
    }
    html
}

fn render_block(block: &Block) -> String {
    match block {
        Block::Paragraph { content } => render_paragraph(content),
        Block::Heading { level, content } => {
            format!("<h{0}>{1}</h{0}>", level, render_inlines(content))
        }
        Block::List { ordered, items } => {
            let tag = if *ordered { "ol" } else { "ul" };
            let items: String = items
                .iter()
                .map(|item| format!("<li>{}</li>", render_paragraph(item)))
                .collect();
            format!("<{0}>{1}</{0}>", tag, items)
        }
        Block::Checklist { items } => render_checklist(items),
        Block::Toggle {
            open,
            summary,
            children,
        } => {
            let summary = if visible_text(summary).trim().is_empty() {
                DEFAULT_TOGGLE_SUMMARY.to_string()
            } else {
                render_inlines(summary)
            };
            let inner = if children.is_empty() {
                EMPTY_LINE.to_string()
            } else {
                render_blocks(children)
            };
            let open_attr = if *open { r#" open="open""# } else { "" };
            format!(
                r#"<details data-type="toggleBlock"{}><summary>{}</summary><div data-type="toggleContent">{}</div></details>"#,
                open_attr, summary, inner
            )
        }
        Block::Table { rows } => {
            let rows: String = rows
                .iter()
                .map(|row| {
                    let cells: String = row
                        .iter()
                        .map(|cell| format!("<td><p>{}</p></td>", escape_html(cell)))
                        .collect();
                    format!("<tr>{}</tr>", cells)
                })
                .collect();
            format!("<table><tbody>{}</tbody></table>", rows)
        }
        Block::Other { text } => format!("<p>{}</p>", escape_html(text)),
    }
}

fn render_paragraph(content: &[Inline]) -> String {
    if visible_text(content).trim().is_empty() {
        EMPTY_LINE.to_string()
    } else {
        format!("<p>{}</p>", render_inlines(content))
    }
}

fn render_inlines(content: &[Inline]) -> String {
    content.iter().map(render_inline).collect()
}

fn render_inline(inline: &Inline) -> String {
    let mut html = escape_html(&inline.text);
    for mark in &inline.marks {
        html = match mark {
            Mark::Bold => format!("<strong>{}</strong>", html),
            Mark::Italic => format!("<em>{}</em>", html),
            Mark::Link { href } => format!(r#"<a href="{}">{}</a>"#, escape_html(href), html),
        };
    }
    html
}

fn render_checklist(items: &[ChecklistItem]) -> String {
    let items: String = items
        .iter()
        .map(|item| {
            let checked_attr = if item.checked {
                r#" checked="checked""#
            } else {
                ""
            };
            let text = render_inlines(&item.content);
            let text = if text.is_empty() {
                "<br>".to_string()
            } else {
                text
            };
            let nested = if item.children.is_empty() {
                String::new()
            } else {
                render_checklist(&item.children)
            };
            format!(
                r#"<li data-type="taskItem" data-checked="{}"><label><input type="checkbox"{}><span></span></label><div><p>{}</p>{}</div></li>"#,
                item.checked, checked_attr, text, nested,
            )
        })
        .collect();
    format!(r#"<ul data-type="taskList">{}</ul>"#, items)
}
