//! Markdown-to-ANSI rendering for assistant replies.
//!
//! Presentation only: renders a borrowed string and never feeds back
//! into the stored message text.

use colored::Colorize;
use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd};

/// Render markdown to a string with ANSI styling for bold, italics,
/// headings, code, and list bullets. Unknown constructs degrade to
/// their plain text.
pub fn render(text: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    let parser = Parser::new_ext(text, options);

    let mut out = String::new();
    let mut strong = false;
    let mut emphasis = false;
    let mut in_heading = false;
    let mut in_code_block = false;
    let mut list_stack: Vec<Option<u64>> = Vec::new();

    for event in parser {
        match event {
            Event::Start(Tag::Paragraph) => {}
            Event::End(TagEnd::Paragraph) => out.push('\n'),
            Event::Start(Tag::Heading { .. }) => in_heading = true,
            Event::End(TagEnd::Heading(_)) => {
                in_heading = false;
                out.push('\n');
            }
            Event::Start(Tag::CodeBlock(_)) => in_code_block = true,
            Event::End(TagEnd::CodeBlock) => {
                in_code_block = false;
                out.push('\n');
            }
            Event::Start(Tag::List(start)) => list_stack.push(start),
            Event::End(TagEnd::List(_)) => {
                list_stack.pop();
            }
            Event::Start(Tag::Item) => match list_stack.last_mut() {
                Some(Some(number)) => {
                    out.push_str(&format!("  {number}. "));
                    *number += 1;
                }
                _ => out.push_str("  - "),
            },
            Event::End(TagEnd::Item) => out.push('\n'),
            Event::Start(Tag::Strong) => strong = true,
            Event::End(TagEnd::Strong) => strong = false,
            Event::Start(Tag::Emphasis) => emphasis = true,
            Event::End(TagEnd::Emphasis) => emphasis = false,
            Event::Text(t) => {
                if in_code_block {
                    for line in t.lines() {
                        out.push_str("    ");
                        out.push_str(&line.yellow().to_string());
                        out.push('\n');
                    }
                } else if in_heading {
                    out.push_str(&t.bold().bright_cyan().to_string());
                } else if strong {
                    out.push_str(&t.bold().to_string());
                } else if emphasis {
                    out.push_str(&t.italic().to_string());
                } else {
                    out.push_str(&t);
                }
            }
            Event::Code(t) => out.push_str(&t.yellow().to_string()),
            Event::SoftBreak | Event::HardBreak => out.push('\n'),
            Event::Rule => out.push_str("----\n"),
            _ => {}
        }
    }

    out.trim_end().to_string()
}
