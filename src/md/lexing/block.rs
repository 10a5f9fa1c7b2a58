//! Block-level lexer: lines in, block tokens out.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::md::lexing::inline::tokenize_inline;
use crate::md::token::Token;

/// Heading: 1-6 `#` characters, whitespace, then non-empty text.
/// Matched against the untrimmed line, so indented headings stay paragraphs.
static HEADING: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(#{1,6})\s+(.+)$").unwrap());

/// Unordered list marker: `*`, `-`, or `+` followed by whitespace.
static UNORDERED_ITEM: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[*\-+]\s+").unwrap());

/// Ordered list marker: digits, a dot, whitespace, then non-empty text.
static ORDERED_ITEM: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d+)\.\s+(.+)$").unwrap());

/// Accumulation state for an open fenced code block.
#[derive(Debug, Default)]
struct FenceState {
    content: String,
    language: String,
    run: bool,
    tools: Vec<String>,
}

impl FenceState {
    /// Parse the remainder of an opening fence line.
    ///
    /// Two forms: a bare language tag taken verbatim, or the run directive
    /// `run:<language> [tools=<a,b,c>]`. Later `tools=` fields overwrite
    /// earlier ones; empty entries in the comma list are dropped.
    fn open(directive: &str) -> Self {
        let mut state = FenceState::default();
        match directive.strip_prefix("run:") {
            Some(rest) => {
                state.run = true;
                let mut fields = rest.trim().split_whitespace();
                state.language = fields.next().unwrap_or("").to_string();
                for field in fields {
                    if let Some(value) = field.strip_prefix("tools=") {
                        state.tools = value
                            .split(',')
                            .map(str::trim)
                            .filter(|tool| !tool.is_empty())
                            .map(str::to_string)
                            .collect();
                    }
                }
            }
            None => state.language = directive.to_string(),
        }
        state
    }

    fn close(self) -> Token {
        Token::CodeBlock {
            content: self.content,
            language: self.language,
            run: self.run,
            tools: self.tools,
        }
    }
}

/// Scanner state threaded through the line loop.
enum ScanState {
    Normal,
    InCodeBlock(FenceState),
}

/// Tokenize raw markdown into the block-level token sequence.
///
/// Total over all inputs: never fails, performs no I/O. Splitting is on
/// `'\n'`, so a trailing newline contributes a final blank line and thus a
/// trailing [`Token::LineBreak`].
pub fn tokenize(input: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut state = ScanState::Normal;

    for line in input.split('\n') {
        let trimmed = line.trim();

        // Fence lines toggle code-block mode regardless of any other rule.
        if trimmed.starts_with("```") {
            state = match state {
                ScanState::Normal => ScanState::InCodeBlock(FenceState::open(trimmed[3..].trim())),
                ScanState::InCodeBlock(fence) => {
                    // The close line's own remainder is ignored.
                    tokens.push(fence.close());
                    ScanState::Normal
                }
            };
            continue;
        }

        if let ScanState::InCodeBlock(fence) = &mut state {
            fence.content.push_str(line);
            fence.content.push('\n');
            continue;
        }

        tokens.push(classify_line(line, trimmed));
    }

    // An unterminated fence is closed at end of input, not an error.
    if let ScanState::InCodeBlock(fence) = state {
        tokens.push(fence.close());
    }

    tokens
}

/// Classify one line outside of code-block mode. First rule wins.
fn classify_line(line: &str, trimmed: &str) -> Token {
    if trimmed == "---" || trimmed == "***" || trimmed == "___" {
        return Token::HorizontalRule;
    }

    if let Some(caps) = HEADING.captures(line) {
        return Token::Heading {
            level: caps[1].len() as u8,
            content: tokenize_inline(&caps[2]),
        };
    }

    if let Some(rest) = trimmed.strip_prefix("> ") {
        return Token::Blockquote {
            content: tokenize_inline(rest),
        };
    }

    if UNORDERED_ITEM.is_match(trimmed) {
        // Fixed two-character strip: marker plus one separator. A wider
        // separator leaves its extra whitespace in the content.
        let rest = trimmed
            .char_indices()
            .nth(2)
            .map_or("", |(offset, _)| &trimmed[offset..]);
        return Token::UnorderedListItem {
            content: tokenize_inline(rest),
        };
    }

    if let Some(caps) = ORDERED_ITEM.captures(trimmed) {
        // A label too large for u64 falls through to the paragraph rule.
        if let Ok(number) = caps[1].parse::<u64>() {
            return Token::OrderedListItem {
                number,
                content: tokenize_inline(&caps[2]),
            };
        }
    }

    if trimmed.is_empty() {
        return Token::LineBreak;
    }

    Token::Paragraph {
        content: tokenize_inline(line),
    }
}
