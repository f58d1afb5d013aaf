use std::ops::Range;

/// Malformed or unsupported path query syntax.
///
/// Every variant carries the byte span of the offending text so the
/// diagnostics printer can point at it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
    #[error("empty path query")]
    Empty,

    #[error("unexpected `{text}`")]
    Unexpected { text: String, span: Range<usize> },

    #[error("expected {expected}")]
    Expected {
        expected: &'static str,
        span: Range<usize>,
    },

    #[error("unterminated quoted key")]
    Unterminated { span: Range<usize> },

    #[error("unsupported selector `{text}`: only keys, indices and `*` are allowed in brackets")]
    UnsupportedSelector { text: String, span: Range<usize> },
}

impl QueryError {
    pub fn span(&self) -> Range<usize> {
        match self {
            QueryError::Empty => 0..0,
            QueryError::Unexpected { span, .. }
            | QueryError::Expected { span, .. }
            | QueryError::Unterminated { span }
            | QueryError::UnsupportedSelector { span, .. } => span.clone(),
        }
    }
}

pub type QueryResult<T> = Result<T, QueryError>;
