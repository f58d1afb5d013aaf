//! Path query parser.
//!
//! Grammar (tokens from [`super::lexer`]):
//!
//! ```text
//! query    = "$"? segment*
//! segment  = "." name_run
//!          | ".." ( name_run | bracket )
//!          | bracket
//! name_run = ( Name | Int | "*" )+
//! bracket  = "[" ( Int | "*" | Quoted ) "]"
//! ```
//!
//! A leading `name_run` without a dot is accepted as the first child.

use std::ops::Range;

use super::error::{QueryError, QueryResult};
use super::lexer::{Token, TokenKind, lex, token_text, unquote};

/// What a single segment accepts from one breadcrumb token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    /// Exact key, from `.key` or `['key']`.
    Key(String),
    /// Dotted name containing `*`; each star spans one or more characters
    /// inside the token. Holds the literal pieces around the stars.
    KeyGlob(Vec<String>),
    /// Bare `*`: any non-empty token.
    AnyKey,
    /// `[N]`, compared as text.
    Index(String),
    /// `[*]`: any all-digit token.
    AnyIndex,
    /// Trailing `..`: any remaining tokens, including none.
    Rest,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    /// Preceded by `..`: zero or more tokens may be skipped before this one.
    pub descendant: bool,
    pub selector: Selector,
    pub span: Range<usize>,
}

/// Parsed path query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathQuery {
    source: String,
    segments: Vec<Segment>,
}

impl PathQuery {
    pub fn parse(source: &str) -> QueryResult<Self> {
        let segments = Parser::new(source).parse()?;
        Ok(Self {
            source: source.to_string(),
            segments,
        })
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }
}

struct Parser<'q> {
    source: &'q str,
    tokens: Vec<Token>,
    pos: usize,
}

impl<'q> Parser<'q> {
    fn new(source: &'q str) -> Self {
        Self {
            source,
            tokens: lex(source),
            pos: 0,
        }
    }

    fn parse(mut self) -> QueryResult<Vec<Segment>> {
        if self.source.trim().is_empty() {
            return Err(QueryError::Empty);
        }

        if self.at(TokenKind::Root) {
            self.pos += 1;
        }

        let mut segments = Vec::new();

        if self.at_name_run() {
            segments.push(self.name_run(false)?);
        }

        while let Some(token) = self.peek().cloned() {
            let segment = match token.kind {
                TokenKind::Dot => {
                    self.pos += 1;
                    if !self.at_name_run() {
                        return Err(self.expected("a key or `*` after `.`", &token));
                    }
                    self.name_run(false)?
                }
                TokenKind::DotDot => {
                    self.pos += 1;
                    if self.at_name_run() {
                        self.name_run(true)?
                    } else if self.at(TokenKind::BracketOpen) {
                        self.bracket(true)?
                    } else if self.peek().is_none() {
                        Segment {
                            descendant: true,
                            selector: Selector::Rest,
                            span: token.span.clone(),
                        }
                    } else {
                        return Err(self.expected("a key, `*` or `[...]` after `..`", &token));
                    }
                }
                TokenKind::BracketOpen => self.bracket(false)?,
                TokenKind::Garbage => {
                    return Err(QueryError::Unterminated { span: token.span });
                }
                _ => {
                    return Err(QueryError::Unexpected {
                        text: token_text(self.source, &token).to_string(),
                        span: token.span,
                    });
                }
            };
            segments.push(segment);
        }

        Ok(segments)
    }

    fn name_run(&mut self, descendant: bool) -> QueryResult<Segment> {
        let start = self.tokens[self.pos].span.start;
        let mut end = start;
        let mut pieces = vec![String::new()];

        while self.at_name_run() {
            let token = &self.tokens[self.pos];
            if token.kind == TokenKind::Star {
                pieces.push(String::new());
            } else if let Some(last) = pieces.last_mut() {
                last.push_str(token_text(self.source, token));
            }
            end = token.span.end;
            self.pos += 1;
        }

        let selector = match pieces.len() {
            1 => Selector::Key(pieces.remove(0)),
            2 if pieces.iter().all(String::is_empty) => Selector::AnyKey,
            _ => Selector::KeyGlob(pieces),
        };

        Ok(Segment {
            descendant,
            selector,
            span: start..end,
        })
    }

    fn bracket(&mut self, descendant: bool) -> QueryResult<Segment> {
        let open = self.tokens[self.pos].clone();
        self.pos += 1;

        let inner = self.peek().cloned();
        let close = self.tokens.get(self.pos + 1).cloned();

        let selector = match (&inner, &close) {
            (Some(inner), Some(close)) if close.kind == TokenKind::BracketClose => {
                let text = token_text(self.source, inner);
                match inner.kind {
                    TokenKind::Int => Some(Selector::Index(text.to_string())),
                    TokenKind::Star => Some(Selector::AnyIndex),
                    TokenKind::Quoted => Some(Selector::Key(unquote(text))),
                    _ => None,
                }
            }
            _ => None,
        };

        if let (Some(selector), Some(close)) = (selector, &close) {
            self.pos += 2;
            return Ok(Segment {
                descendant,
                selector,
                span: open.span.start..close.span.end,
            });
        }

        match inner {
            Some(t) if t.kind == TokenKind::Garbage => {
                return Err(QueryError::Unterminated {
                    span: open.span.start..t.span.end,
                });
            }
            Some(t) if t.kind == TokenKind::BracketClose => {
                return Err(QueryError::Expected {
                    expected: "a key, index or `*` inside `[]`",
                    span: open.span.start..t.span.end,
                });
            }
            None => {
                return Err(QueryError::Expected {
                    expected: "a key, index or `*` after `[`",
                    span: open.span,
                });
            }
            Some(_) if close.is_none() => {
                return Err(QueryError::Expected {
                    expected: "closing `]`",
                    span: open.span.start..self.source.len(),
                });
            }
            Some(_) => {}
        }

        // Report everything up to the matching `]` (or the end) as one selector.
        let end = self.tokens[self.pos..]
            .iter()
            .find(|t| t.kind == TokenKind::BracketClose)
            .map_or(self.source.len(), |t| t.span.end);
        let span = open.span.start..end;
        Err(QueryError::UnsupportedSelector {
            text: self.source[span.clone()].to_string(),
            span,
        })
    }

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn at(&self, kind: TokenKind) -> bool {
        self.peek().is_some_and(|t| t.kind == kind)
    }

    fn at_name_run(&self) -> bool {
        self.peek().is_some_and(|t| {
            matches!(t.kind, TokenKind::Name | TokenKind::Int | TokenKind::Star)
        })
    }

    fn expected(&self, expected: &'static str, after: &Token) -> QueryError {
        let span = match self.peek() {
            Some(next) => next.span.clone(),
            None => after.span.clone(),
        };
        QueryError::Expected { expected, span }
    }
}
