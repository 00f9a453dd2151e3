// ABOUTME: Issue-description conversion: Jira wiki markup to Markdown to ANSI text
// ABOUTME: Conversion failures abort rendering so no garbled body is ever emitted

use once_cell::sync::Lazy;
use owo_colors::OwoColorize;
use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd};
use regex::Regex;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum MarkupError {
    #[error("description contains unrenderable control characters")]
    InvalidCharacters,

    #[error("unterminated {{{0}}} block in description")]
    UnterminatedBlock(&'static str),
}

/// Convert a raw wiki-markup body into styled terminal text.
///
/// The whole pipeline runs before anything is emitted; an error means no
/// partial output.
pub fn convert_body(raw: &str, use_color: bool) -> Result<String, MarkupError> {
    let markdown = to_markdown(raw)?;
    Ok(render_terminal(&markdown, use_color))
}

static HEADING_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^h([1-6])\.\s+(.*)$").unwrap());
static RULE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^-{4,}\s*$").unwrap());
static CODE_OPEN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\{code(?::([^{}]*))?\}$").unwrap());
static ORDERED_ITEM_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(#+)\s+(.*)$").unwrap());
static BULLET_ITEM_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\*+)\s+(.*)$").unwrap());
static MONOSPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\{\{(.+?)\}\}").unwrap());
static LINK_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[([^|\[\]]+)\|([^\]]+)\]").unwrap());
static BARE_LINK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[((?:https?://|mailto:)[^\]\s]+)\]").unwrap());
static BOLD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*([^*\n]+)\*").unwrap());
static ITALIC_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b_([^_\n]+?)_\b").unwrap());
static STRIKE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(^|\s)-([^\s-][^-\n]*)-(\s|$)").unwrap());

#[derive(Debug, PartialEq)]
enum Block {
    Text,
    Code,
    NoFormat,
    Quote,
}

/// Translate Jira wiki markup into Markdown.
///
/// Handles the constructs Jira descriptions actually use: headings,
/// bold/italic/strikethrough/monospace, links, ordered and bulleted
/// lists (with nesting), rules, `bq.` lines, and `{code}`, `{noformat}`,
/// and `{quote}` blocks. Block markers are recognized on their own line;
/// an unterminated block is an error rather than half-converted output.
pub fn to_markdown(raw: &str) -> Result<String, MarkupError> {
    if raw
        .chars()
        .any(|c| c.is_control() && c != '\n' && c != '\r' && c != '\t')
    {
        return Err(MarkupError::InvalidCharacters);
    }

    let mut out: Vec<String> = Vec::new();
    let mut state = Block::Text;

    for line in raw.lines() {
        let trimmed = line.trim();

        match state {
            Block::Code => {
                if trimmed == "{code}" {
                    out.push("```".to_string());
                    state = Block::Text;
                } else {
                    out.push(line.to_string());
                }
            }
            Block::NoFormat => {
                if trimmed == "{noformat}" {
                    out.push("```".to_string());
                    state = Block::Text;
                } else {
                    out.push(line.to_string());
                }
            }
            Block::Quote => {
                if trimmed == "{quote}" {
                    state = Block::Text;
                } else {
                    out.push(format!("> {}", convert_inline(line)));
                }
            }
            Block::Text => {
                if let Some(caps) = CODE_OPEN_RE.captures(trimmed) {
                    let lang = caps
                        .get(1)
                        .map(|m| m.as_str())
                        .unwrap_or("")
                        .split('|')
                        .next()
                        .unwrap_or("")
                        .trim();
                    out.push(format!("```{}", lang));
                    state = Block::Code;
                } else if trimmed == "{noformat}" {
                    out.push("```".to_string());
                    state = Block::NoFormat;
                } else if trimmed == "{quote}" {
                    state = Block::Quote;
                } else if let Some(caps) = HEADING_RE.captures(trimmed) {
                    let level: usize = caps[1].parse().unwrap_or(1);
                    out.push(format!("{} {}", "#".repeat(level), convert_inline(&caps[2])));
                } else if RULE_RE.is_match(trimmed) {
                    out.push("---".to_string());
                } else if let Some(rest) = trimmed.strip_prefix("bq. ") {
                    out.push(format!("> {}", convert_inline(rest)));
                } else if let Some(caps) = ORDERED_ITEM_RE.captures(trimmed) {
                    let depth = caps[1].len();
                    out.push(format!(
                        "{}1. {}",
                        "   ".repeat(depth - 1),
                        convert_inline(&caps[2])
                    ));
                } else if let Some(caps) = BULLET_ITEM_RE.captures(trimmed) {
                    let depth = caps[1].len();
                    out.push(format!(
                        "{}- {}",
                        "  ".repeat(depth - 1),
                        convert_inline(&caps[2])
                    ));
                } else {
                    out.push(convert_inline(line));
                }
            }
        }
    }

    match state {
        Block::Text => Ok(out.join("\n")),
        Block::Code => Err(MarkupError::UnterminatedBlock("code")),
        Block::NoFormat => Err(MarkupError::UnterminatedBlock("noformat")),
        Block::Quote => Err(MarkupError::UnterminatedBlock("quote")),
    }
}

fn convert_inline(line: &str) -> String {
    let line = MONOSPACE_RE.replace_all(line, "`${1}`");
    let line = LINK_RE.replace_all(&line, "[${1}](${2})");
    let line = BARE_LINK_RE.replace_all(&line, "<${1}>");
    let line = BOLD_RE.replace_all(&line, "**${1}**");
    let line = ITALIC_RE.replace_all(&line, "*${1}*");
    let line = STRIKE_RE.replace_all(&line, "${1}~~${2}~~${3}");
    line.into_owned()
}

/// Render Markdown as styled terminal text by walking pulldown-cmark
/// events. Infallible: anything the parser accepts can be emitted.
pub fn render_terminal(markdown: &str, use_color: bool) -> String {
    let parser = Parser::new_ext(markdown, Options::ENABLE_STRIKETHROUGH);
    let mut writer = TerminalWriter::new(use_color);
    for event in parser {
        writer.event(event);
    }
    writer.finish()
}

struct TerminalWriter {
    out: String,
    use_color: bool,
    heading: bool,
    bold: usize,
    italic: usize,
    strike: usize,
    code_block: bool,
    quote_depth: usize,
    list_stack: Vec<Option<u64>>,
    link_url: Option<String>,
}

impl TerminalWriter {
    fn new(use_color: bool) -> Self {
        Self {
            out: String::new(),
            use_color,
            heading: false,
            bold: 0,
            italic: 0,
            strike: 0,
            code_block: false,
            quote_depth: 0,
            list_stack: Vec::new(),
            link_url: None,
        }
    }

    fn event(&mut self, event: Event<'_>) {
        match event {
            Event::Start(Tag::Paragraph) => {
                if self.list_stack.is_empty() {
                    self.blank_line();
                }
            }
            Event::End(TagEnd::Paragraph) => self.end_line(),
            Event::Start(Tag::Heading { .. }) => {
                self.blank_line();
                self.heading = true;
            }
            Event::End(TagEnd::Heading(_)) => {
                self.heading = false;
                self.end_line();
            }
            Event::Start(Tag::Strong) => self.bold += 1,
            Event::End(TagEnd::Strong) => self.bold = self.bold.saturating_sub(1),
            Event::Start(Tag::Emphasis) => self.italic += 1,
            Event::End(TagEnd::Emphasis) => self.italic = self.italic.saturating_sub(1),
            Event::Start(Tag::Strikethrough) => self.strike += 1,
            Event::End(TagEnd::Strikethrough) => self.strike = self.strike.saturating_sub(1),
            Event::Start(Tag::BlockQuote(_)) => {
                self.blank_line();
                self.quote_depth += 1;
            }
            Event::End(TagEnd::BlockQuote(_)) => {
                self.quote_depth = self.quote_depth.saturating_sub(1);
            }
            Event::Start(Tag::CodeBlock(_)) => {
                self.blank_line();
                self.code_block = true;
            }
            Event::End(TagEnd::CodeBlock) => {
                self.code_block = false;
                self.end_line();
            }
            Event::Start(Tag::List(start)) => {
                if self.list_stack.is_empty() {
                    self.blank_line();
                }
                self.list_stack.push(start);
            }
            Event::End(TagEnd::List(_)) => {
                self.list_stack.pop();
            }
            Event::Start(Tag::Item) => {
                let indent = "  ".repeat(self.list_stack.len().saturating_sub(1));
                let marker = match self.list_stack.last_mut() {
                    Some(Some(n)) => {
                        let marker = format!("{}. ", n);
                        *n += 1;
                        marker
                    }
                    _ => "• ".to_string(),
                };
                self.write_raw(&format!("{}{}", indent, marker));
            }
            Event::End(TagEnd::Item) => self.end_line(),
            Event::Start(Tag::Link { dest_url, .. }) => {
                self.link_url = Some(dest_url.into_string());
            }
            Event::End(TagEnd::Link) => {
                if let Some(url) = self.link_url.take() {
                    let suffix = format!(" ({})", url);
                    let styled = if self.use_color {
                        format!("{}", suffix.dimmed())
                    } else {
                        suffix
                    };
                    self.write_raw(&styled);
                }
            }
            Event::Text(text) => {
                if self.code_block {
                    self.write_code(&text);
                } else {
                    let styled = Self::style(self, &text);
                    self.write_raw(&styled);
                }
            }
            Event::Code(code) => {
                let styled = if self.use_color {
                    format!("{}", code.cyan())
                } else {
                    format!("`{}`", code)
                };
                self.write_raw(&styled);
            }
            Event::SoftBreak | Event::HardBreak => self.end_line(),
            Event::Rule => {
                self.blank_line();
                let rule = "────────";
                let styled = if self.use_color {
                    format!("{}", rule.dimmed())
                } else {
                    rule.to_string()
                };
                self.write_raw(&styled);
                self.end_line();
            }
            Event::Html(text) | Event::InlineHtml(text) => {
                let owned = text.into_string();
                self.write_raw(&owned);
            }
            _ => {}
        }
    }

    fn prefix(&self) -> String {
        let mut prefix = "│ ".repeat(self.quote_depth);
        if self.code_block {
            prefix.push_str("    ");
        }
        prefix
    }

    fn at_line_start(&self) -> bool {
        self.out.is_empty() || self.out.ends_with('\n')
    }

    fn write_raw(&mut self, text: &str) {
        for line in text.split_inclusive('\n') {
            if self.at_line_start() {
                let prefix = self.prefix();
                self.out.push_str(&prefix);
            }
            self.out.push_str(line);
        }
    }

    fn write_code(&mut self, text: &str) {
        for line in text.split_inclusive('\n') {
            let prefix = self.prefix();
            let (content, newline) = match line.strip_suffix('\n') {
                Some(stripped) => (stripped, true),
                None => (line, false),
            };
            let styled = if self.use_color {
                format!("{}", content.dimmed())
            } else {
                content.to_string()
            };
            self.out.push_str(&prefix);
            self.out.push_str(&styled);
            if newline {
                self.out.push('\n');
            }
        }
    }

    fn style(&self, text: &str) -> String {
        if !self.use_color {
            return text.to_string();
        }

        let mut styled = text.to_string();
        if self.heading {
            styled = format!("{}", styled.bold().underline());
        }
        if self.bold > 0 {
            styled = format!("{}", styled.bold());
        }
        if self.italic > 0 {
            styled = format!("{}", styled.italic());
        }
        if self.strike > 0 {
            styled = format!("{}", styled.strikethrough());
        }
        styled
    }

    fn end_line(&mut self) {
        if !self.at_line_start() {
            self.out.push('\n');
        }
    }

    /// Separate blocks by exactly one empty line.
    fn blank_line(&mut self) {
        if self.out.is_empty() {
            return;
        }
        self.end_line();
        if !self.out.ends_with("\n\n") {
            self.out.push('\n');
        }
    }

    fn finish(mut self) -> String {
        self.end_line();
        self.out
    }
}
