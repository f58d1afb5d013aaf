//! Rule-file diagnostics.

mod message;
mod printer;


use std::ops::Range;

pub use message::{Diagnostic, Severity};
pub use printer::DiagnosticsPrinter;

/// Problems collected while compiling a rule set.
#[derive(Debug, Clone, Default)]
pub struct Diagnostics {
    messages: Vec<Diagnostic>,
}

#[must_use = "diagnostic not emitted, call .emit()"]
pub struct DiagnosticBuilder<'a> {
    diagnostics: &'a mut Diagnostics,
    message: Diagnostic,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn error(&mut self, msg: impl Into<String>) -> DiagnosticBuilder<'_> {
        self.report(Severity::Error, msg)
    }

    pub fn warning(&mut self, msg: impl Into<String>) -> DiagnosticBuilder<'_> {
        self.report(Severity::Warning, msg)
    }

    pub fn report(&mut self, severity: Severity, msg: impl Into<String>) -> DiagnosticBuilder<'_> {
        DiagnosticBuilder {
            diagnostics: self,
            message: Diagnostic::new(severity, msg),
        }
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.messages.push(diagnostic);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.messages.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn has_errors(&self) -> bool {
        self.messages.iter().any(Diagnostic::is_error)
    }

    pub fn error_count(&self) -> usize {
        self.messages.iter().filter(|d| d.is_error()).count()
    }

    pub fn warning_count(&self) -> usize {
        self.messages.iter().filter(|d| !d.is_error()).count()
    }

    pub fn extend(&mut self, other: Diagnostics) {
        self.messages.extend(other.messages);
    }

    pub fn printer(&self) -> DiagnosticsPrinter<'_> {
        DiagnosticsPrinter::new(self)
    }
}

impl FromIterator<Diagnostic> for Diagnostics {
    fn from_iter<T: IntoIterator<Item = Diagnostic>>(iter: T) -> Self {
        Self {
            messages: iter.into_iter().collect(),
        }
    }
}

impl<'a> DiagnosticBuilder<'a> {
    /// Where in the rule file the problem is, e.g. `rules[2].paths[0]`.
    pub fn origin(mut self, origin: impl Into<String>) -> Self {
        self.message.origin = Some(origin.into());
        self
    }

    /// Offending text and the byte range inside it to underline.
    pub fn source(mut self, text: impl Into<String>, span: Range<usize>) -> Self {
        self.message.source = Some((text.into(), span));
        self
    }

    pub fn emit(self) {
        self.diagnostics.messages.push(self.message);
    }
}
