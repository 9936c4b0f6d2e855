//! Markdown header sections

use pulldown_cmark::{Event, Parser, Tag};

/// Body text under one heading path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    /// Enclosing headings joined by `" > "`; `None` before the first heading
    pub header: Option<String>,
    /// Plain text with paragraphs separated by blank lines
    pub text: String,
}

/// Split markdown into plain-text sections, one per heading
///
/// Headings with no body text produce no section.
pub fn split_sections(markdown: &str) -> Vec<Section> {
    let mut sections = Vec::new();
    let mut headers: Vec<(u32, String)> = Vec::new();
    let mut heading: Option<(u32, String)> = None;
    let mut text = String::new();

    for event in Parser::new(markdown) {
        match event {
            Event::Start(Tag::Heading(level, ..)) => {
                flush(&mut sections, &headers, &mut text);
                heading = Some((level as u32, String::new()));
            }
            Event::End(Tag::Heading(..)) => {
                if let Some((level, title)) = heading.take() {
                    headers.retain(|(l, _)| *l < level);
                    headers.push((level, title.trim().to_string()));
                }
            }
            Event::Text(t) | Event::Code(t) => match heading.as_mut() {
                Some((_, title)) => title.push_str(&t),
                None => text.push_str(&t),
            },
            Event::SoftBreak | Event::HardBreak => match heading.as_mut() {
                Some((_, title)) => title.push(' '),
                None => text.push('\n'),
            },
            Event::End(Tag::Paragraph) | Event::End(Tag::CodeBlock(_)) => {
                text.push_str("\n\n");
            }
            Event::Start(Tag::Item) => {
                if !text.is_empty() && !text.ends_with('\n') {
                    text.push('\n');
                }
                text.push_str("• ");
            }
            Event::End(Tag::Item) => {
                if !text.ends_with('\n') {
                    text.push('\n');
                }
            }
            Event::End(Tag::List(_)) => {
                text.push('\n');
            }
            _ => {}
        }
    }

    flush(&mut sections, &headers, &mut text);
    sections
}

fn flush(sections: &mut Vec<Section>, headers: &[(u32, String)], text: &mut String) {
    let body = normalize(text);
    text.clear();

    if body.is_empty() {
        return;
    }

    let header = (!headers.is_empty()).then(|| {
        headers
            .iter()
            .map(|(_, title)| title.as_str())
            .collect::<Vec<_>>()
            .join(" > ")
    });

    sections.push(Section { header, text: body });
}

/// Trim every line and collapse runs of blank lines to one
fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut blank_run = 0;

    for line in text.lines().map(str::trim) {
        if line.is_empty() {
            blank_run += 1;
            continue;
        }
        if !out.is_empty() {
            out.push_str(if blank_run > 0 { "\n\n" } else { "\n" });
        }
        out.push_str(line);
        blank_run = 0;
    }

    out
}
