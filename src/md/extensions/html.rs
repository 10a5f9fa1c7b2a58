//! HTML rendering extension.
//!
//! The reference consumer of the handler protocol: accumulates an HTML
//! string. Blank lines (`LineBreak` tokens) register no handler and render
//! as nothing.

use crate::md::extension::{Extension, Handler, HandlerError};
use crate::md::parsing::RenderContext;
use crate::md::token::{Token, TokenKind};

/// Renders the token stream to an HTML string accumulator.
pub struct HtmlExtension;

impl HtmlExtension {
    pub fn new() -> Self {
        HtmlExtension
    }
}

impl Default for HtmlExtension {
    fn default() -> Self {
        HtmlExtension::new()
    }
}

impl Extension<String> for HtmlExtension {
    fn name(&self) -> &str {
        "html"
    }

    fn handlers(&self) -> Vec<(TokenKind, Handler<String>)> {
        vec![
            (TokenKind::Heading, heading_handler()),
            (TokenKind::Paragraph, wrap_handler("p")),
            (TokenKind::CodeBlock, code_block_handler()),
            (TokenKind::Blockquote, wrap_handler("blockquote")),
            (TokenKind::HorizontalRule, literal_handler("<hr />")),
            (TokenKind::ListStart, list_start_handler()),
            (TokenKind::ListEnd, list_end_handler()),
            (TokenKind::UnorderedListItem, wrap_handler("li")),
            (TokenKind::OrderedListItem, wrap_handler("li")),
        ]
    }

    fn before_process(
        &mut self,
        context: &mut RenderContext<String>,
        _tokens: &[Token],
    ) -> Result<(), HandlerError> {
        context.accumulator.clear();
        Ok(())
    }
}

fn heading_handler() -> Handler<String> {
    Box::new(|info, context| {
        if let Token::Heading { level, content } = info.token {
            context.accumulator.push_str(&format!(
                "<h{level}>{}</h{level}>",
                render_inline(content)
            ));
        }
        Ok(())
    })
}

/// Handler wrapping the token's inline content in a fixed tag pair.
fn wrap_handler(tag: &'static str) -> Handler<String> {
    Box::new(move |info, context| {
        let inline = info.token.children().map_or_else(String::new, render_inline);
        context
            .accumulator
            .push_str(&format!("<{tag}>{inline}</{tag}>"));
        Ok(())
    })
}

fn literal_handler(html: &'static str) -> Handler<String> {
    Box::new(move |_info, context| {
        context.accumulator.push_str(html);
        Ok(())
    })
}

fn code_block_handler() -> Handler<String> {
    Box::new(|info, context| {
        if let Token::CodeBlock {
            content, language, ..
        } = info.token
        {
            let class = if language.is_empty() {
                String::new()
            } else {
                format!(" class=\"language-{}\"", escape_html(language))
            };
            context.accumulator.push_str(&format!(
                "<pre>\n<code{class}>\n{}\n</code>\n</pre>",
                escape_html(content)
            ));
        }
        Ok(())
    })
}

fn list_start_handler() -> Handler<String> {
    Box::new(|info, context| {
        if let Token::ListStart { list_type } = info.token {
            context.accumulator.push_str(&format!("<{}>", list_type.tag()));
        }
        Ok(())
    })
}

fn list_end_handler() -> Handler<String> {
    Box::new(|info, context| {
        if let Token::ListEnd { list_type, .. } = info.token {
            context
                .accumulator
                .push_str(&format!("</{}>", list_type.tag()));
        }
        Ok(())
    })
}

/// Render a sequence of inline tokens to HTML, recursing into emphasis.
/// Kinds with no inline meaning render as nothing.
pub fn render_inline(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(|token| match token {
            Token::Bold { content } => format!("<strong>{}</strong>", render_inline(content)),
            Token::Italic { content } => format!("<em>{}</em>", render_inline(content)),
            Token::CodeInline { content } => format!("<code>{}</code>", escape_html(content)),
            Token::Link { text, url } => {
                format!("<a href=\"{}\">{}</a>", escape_html(url), escape_html(text))
            }
            Token::Image { alt, url } => {
                format!(
                    "<img src=\"{}\" alt=\"{}\" />",
                    escape_html(url),
                    escape_html(alt)
                )
            }
            Token::Text { content } => escape_html(content),
            _ => String::new(),
        })
        .collect()
}

/// Escape `& < > " '` to their named entities.
///
/// Single pass over the characters, so an already-escaped entity's `&` is
/// escaped exactly once and never re-expanded.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#039;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::md::token::text;

    #[test]
    fn escape_covers_all_five_characters() {
        assert_eq!(escape_html("&<>\"'"), "&amp;&lt;&gt;&quot;&#039;");
    }

    #[test]
    fn escape_never_double_escapes() {
        assert_eq!(escape_html("&amp;"), "&amp;amp;");
    }

    #[test]
    fn inline_rendering_recurses() {
        let tokens = vec![Token::Bold {
            content: vec![
                text("a "),
                Token::Italic {
                    content: vec![text("b")],
                },
            ],
        }];
        assert_eq!(render_inline(&tokens), "<strong>a <em>b</em></strong>");
    }

    #[test]
    fn link_attributes_are_escaped() {
        let tokens = vec![Token::Link {
            text: "a & b".to_string(),
            url: "https://x?a=1&b=\"2\"".to_string(),
        }];
        assert_eq!(
            render_inline(&tokens),
            "<a href=\"https://x?a=1&amp;b=&quot;2&quot;\">a &amp; b</a>"
        );
    }

    #[test]
    fn block_tokens_render_as_nothing_inline() {
        assert_eq!(render_inline(&[Token::HorizontalRule]), "");
    }
}
