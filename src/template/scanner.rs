//! Placeholder scanner using logos
//!
//! Splits a template into literal text and `{name}` tokens. Only names
//! without braces are recognized here; the substitution strategies match
//! stored names literally and do not depend on this grammar.

use logos::Logos;

/// Byte range in template text
pub type Span = std::ops::Range<usize>;

#[derive(Logos, Debug, Clone, PartialEq)]
pub enum Token {
    #[regex(r"\{[^{}]*\}", |lex| {
        let s = lex.slice();
        s[1..s.len() - 1].to_string()
    })]
    Placeholder(String),

    #[regex(r"[^{}]+")]
    Text,

    #[token("{")]
    BraceOpen,
    #[token("}")]
    BraceClose,
}

/// A placeholder token found in a template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder {
    /// Name between the braces
    pub name: String,
    /// Span of the whole token, braces included
    pub span: Span,
}

/// Lex a template into tokens with spans
pub fn lex(input: &str) -> impl Iterator<Item = (Token, Span)> + '_ {
    Token::lexer(input)
        .spanned()
        .filter_map(|(tok, span)| tok.ok().map(|t| (t, span)))
}

/// Collect every placeholder token in template order
pub fn placeholders(template: &str) -> Vec<Placeholder> {
    lex(template)
        .filter_map(|(tok, span)| match tok {
            Token::Placeholder(name) => Some(Placeholder { name, span }),
            _ => None,
        })
        .collect()
}

/// Placeholder token starting exactly at the beginning of `text`
///
/// `offset` is added to the returned span so callers scanning a suffix get
/// positions in the full template.
pub fn placeholder_at(text: &str, offset: usize) -> Option<Placeholder> {
    match Token::lexer(text).spanned().next() {
        Some((Ok(Token::Placeholder(name)), span)) => Some(Placeholder {
            name,
            span: span.start + offset..span.end + offset,
        }),
        _ => None,
    }
}
