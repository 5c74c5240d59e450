use crate::{LexerError, ParseError};
use ariadne::{Label, Report, ReportKind, Source};

impl LexerError {
    pub fn pretty_print(&self, input: &str) {
        let report = Report::build(ReportKind::Error, ("REPL", self.span.to_range()))
            .with_message("Lexer Error")
            .with_label(
                Label::new(("REPL", self.span.to_range())).with_message(self.error.to_string()),
            );
        report
            .finish()
            .print(("REPL", Source::from(input)))
            .unwrap();
    }
}

impl ParseError {
    pub fn pretty_print(&self, input: &str) {
        let report = match self {
            ParseError::UnexpectedToken { found, expected } => {
                Report::build(ReportKind::Error, ("REPL", found.span.to_range()))
                    .with_message(format!("Unexpected token: {}", found.kind))
                    .with_label(
                        Label::new(("REPL", found.span.to_range()))
                            .with_message(format!("Expected {expected}")),
                    )
            }
            ParseError::UnexpectedEof(expected) => {
                let idx = input.len();
                Report::build(ReportKind::Error, ("REPL", idx..idx))
                    .with_message("Unexpected EOF")
                    .with_label(Label::new(("REPL", idx..idx)).with_message(expected))
            }
            ParseError::ExpectedListItem(span) => {
                Report::build(ReportKind::Error, ("REPL", span.to_range()))
                    .with_message("Expected list item")
                    .with_label(
                        Label::new(("REPL", span.to_range()))
                            .with_message("This list needs an item here"),
                    )
            }
            ParseError::ExpectedTableItems(span) => {
                Report::build(ReportKind::Error, ("REPL", span.to_range()))
                    .with_message("Expected rule-separated list items")
                    .with_label(
                        Label::new(("REPL", span.to_range()))
                            .with_message("This table needs an item here"),
                    )
            }
            ParseError::LexerError(lex_err) => {
                Report::build(ReportKind::Error, ("REPL", lex_err.span.to_range()))
                    .with_message("Lexer Error")
                    .with_label(
                        Label::new(("REPL", lex_err.span.to_range()))
                            .with_message(lex_err.error.to_string()),
                    )
            }
        };
        report
            .finish()
            .print(("REPL", Source::from(input)))
            .unwrap();
    }
}
