use crate::ast::Exp;
use crate::lexer::{LexerError, Token, TokenKind};
use crate::source::Span;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum ParseError {
    UnexpectedToken { found: Token, expected: String },
    UnexpectedEof(String),
    ExpectedListItem(Span),
    ExpectedTableItems(Span),
    LexerError(LexerError), // Propagated when parsing directly from a string
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::UnexpectedToken { found, expected } => {
                write!(
                    f,
                    "Parse Error: Unexpected token {}, expected {}",
                    found, expected
                )
            }
            ParseError::UnexpectedEof(expected) => {
                write!(f, "Parse Error: Unexpected end of input, expected {}", expected)
            }
            ParseError::ExpectedListItem(span) => {
                write!(f, "Parse Error: Expected list item at {}", span)
            }
            ParseError::ExpectedTableItems(span) => {
                write!(f, "Parse Error: Expected rule-separated list items at {}", span)
            }
            ParseError::LexerError(lex_err) => write!(f, "Lexer Error during parse: {}", lex_err),
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParseError::LexerError(lex_err) => Some(lex_err),
            _ => None,
        }
    }
}

// Allow converting LexerError into ParseError easily
impl From<LexerError> for ParseError {
    fn from(err: LexerError) -> Self {
        ParseError::LexerError(err)
    }
}

// Result type alias for convenience
type ParseResult<T> = Result<T, ParseError>;

// Token kinds that join into a single literal when adjacent. `dN` and
// `weight` keep their raw text, so a stray die prefix or weight inside a
// sentence reproduces the source exactly.
fn is_literal_kind(kind: TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::Name
            | TokenKind::Number
            | TokenKind::Punct
            | TokenKind::Escape
            | TokenKind::White
            | TokenKind::DieNotation
            | TokenKind::Weight
    )
}

// How many times a weight token repeats its item. Frequency tables read
// the leading integer; die tables count faces, so a range `s-t` covers
// `t - s + 1` entries and an isolated number covers one.
fn weight_count(lexeme: &str, die: bool) -> usize {
    let text = lexeme.trim();
    match text.split_once('-') {
        Some((lo, hi)) => {
            let lo: usize = lo.trim().parse().unwrap_or(1);
            if die {
                let hi: usize = hi.trim().parse().unwrap_or(lo);
                hi.saturating_sub(lo) + 1
            } else {
                lo
            }
        }
        None => {
            if die {
                1
            } else {
                text.parse().unwrap_or(1)
            }
        }
    }
}

fn push_weighted(items: &mut Vec<Exp>, exp: Exp, weight: Option<&Token>, die: bool) {
    let count = weight.map_or(1, |token| weight_count(&token.lexeme, die));
    for _ in 1..count {
        items.push(exp.clone());
    }
    if count > 0 {
        items.push(exp);
    }
}

/// Folds a sequence of atoms into a right-leaning `Mix` tree.
fn fold_mix(parts: Vec<Exp>) -> Option<Exp> {
    let mut rest = parts.into_iter().rev();
    let last = rest.next()?;
    Some(rest.fold(last, |acc, part| Exp::mix(part, acc)))
}

pub struct Parser {
    // An eof-terminated token list and a cursor into it.
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Parser { tokens, pos: 0 }
    }

    fn current(&self) -> &Token {
        // The lexer guarantees a final Eof token; the cursor never moves
        // past it.
        &self.tokens[self.pos.min(self.tokens.len().saturating_sub(1))]
    }

    /// True if the current token matches any of the given kinds.
    fn peek(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.current().kind)
    }

    /// Advance over and return the current token iff it matches.
    fn take(&mut self, kind: TokenKind) -> Option<Token> {
        if self.current().kind == kind && kind != TokenKind::Eof {
            let token = self.tokens[self.pos].clone();
            self.pos += 1;
            Some(token)
        } else {
            None
        }
    }

    /// Advance over the next tokens iff they all match in order;
    /// atomically rewinds otherwise.
    fn take_seq(&mut self, kinds: &[TokenKind]) -> Option<Vec<Token>> {
        let start = self.pos;
        let mut taken = Vec::with_capacity(kinds.len());
        for &kind in kinds {
            match self.take(kind) {
                Some(token) => taken.push(token),
                None => {
                    self.pos = start;
                    return None;
                }
            }
        }
        Some(taken)
    }

    fn unexpected(&self, expected: impl Into<String>) -> ParseError {
        let expected = expected.into();
        if self.current().kind == TokenKind::Eof {
            ParseError::UnexpectedEof(expected)
        } else {
            ParseError::UnexpectedToken {
                found: self.current().clone(),
                expected,
            }
        }
    }

    /// Parses the whole token sequence into a list of expressions.
    pub fn parse(mut self) -> ParseResult<Vec<Exp>> {
        let mut expressions = Vec::new();
        loop {
            while self.take(TokenKind::Newline).is_some() {}
            if self.peek(&[TokenKind::Eof]) {
                break;
            }
            expressions.push(self.parse_expression()?);
        }
        Ok(expressions)
    }

    // expression := definition | selection | evalDefinition | evalSelection | mix
    fn parse_expression(&mut self) -> ParseResult<Exp> {
        if let Some(table) = self.parse_table()? {
            return Ok(table);
        }
        if let Some(mut tokens) = self.take_seq(&[TokenKind::Name, TokenKind::Define]) {
            let name = tokens.swap_remove(0).lexeme;
            let items = self.parse_items()?;
            return Ok(Exp::Definition { name, items });
        }
        if let Some(mut tokens) = self.take_seq(&[TokenKind::Name, TokenKind::Select]) {
            let name = tokens.swap_remove(0).lexeme;
            let items = self.parse_items()?;
            return Ok(Exp::Selection { name, items });
        }
        if let Some(mut tokens) = self.take_seq(&[TokenKind::Name, TokenKind::DefEval]) {
            let name = tokens.swap_remove(0).lexeme;
            let items = self.parse_items()?;
            return Ok(Exp::EvaluatingDefinition { name, items });
        }
        if let Some(mut tokens) = self.take_seq(&[TokenKind::Name, TokenKind::SelEval]) {
            let name = tokens.swap_remove(0).lexeme;
            let items = self.parse_items()?;
            return Ok(Exp::EvaluatingSelection { name, items });
        }
        match self.parse_mix(&[], false)? {
            Some(exp) => Ok(exp),
            None => Err(self.unexpected("an expression")),
        }
    }

    // Pipe-separated items of an inline binding. Weights are frequencies
    // here; the die interpretation needs a table header.
    fn parse_items(&mut self) -> ParseResult<Vec<Exp>> {
        let mut items = Vec::new();
        loop {
            let weight = self.take(TokenKind::Weight);
            match self.parse_mix(&[TokenKind::Pipe], false)? {
                Some(exp) => push_weighted(&mut items, exp, weight.as_ref(), false),
                None => return Err(ParseError::ExpectedListItem(self.current().span)),
            }
            if self.take(TokenKind::Pipe).is_none() {
                break;
            }
        }
        self.take(TokenKind::Newline);
        Ok(items)
    }

    // Both table forms: `(dN? name) newline rule newline items`. Returns
    // Ok(None) with the cursor rewound when the header shape is absent.
    fn parse_table(&mut self) -> ParseResult<Option<Exp>> {
        let start = self.pos;
        let die = self.take(TokenKind::DieNotation).is_some();
        let name = match self.take(TokenKind::Name) {
            Some(name) => name,
            None => {
                self.pos = start;
                return Ok(None);
            }
        };
        if self.take(TokenKind::Newline).is_none() {
            self.pos = start;
            return Ok(None);
        }
        if self.take(TokenKind::Rule1).is_some() {
            if self.take(TokenKind::Newline).is_none() {
                self.pos = start;
                return Ok(None);
            }
            let items = self.parse_table1_items(die)?;
            return Ok(Some(Exp::Definition {
                name: name.lexeme,
                items,
            }));
        }
        if self.take(TokenKind::Rule2).is_some() {
            if self.take(TokenKind::Newline).is_none() {
                self.pos = start;
                return Ok(None);
            }
            let items = self.parse_table2_items(die)?;
            return Ok(Some(Exp::Definition {
                name: name.lexeme,
                items,
            }));
        }
        self.pos = start;
        Ok(None)
    }

    // Table 1: one item per line; an empty line or eof ends the table.
    fn parse_table1_items(&mut self, die: bool) -> ParseResult<Vec<Exp>> {
        let mut items = Vec::new();
        loop {
            while self.take(TokenKind::White).is_some() {}
            let weight = self.take(TokenKind::Weight);
            match self.parse_mix(&[], false)? {
                Some(exp) => push_weighted(&mut items, exp, weight.as_ref(), die),
                None => return Err(ParseError::ExpectedListItem(self.current().span)),
            }
            if self.take(TokenKind::Newline).is_none() {
                break; // eof
            }
            if self.peek(&[TokenKind::Eof]) {
                break;
            }
            if self.take(TokenKind::Newline).is_some() {
                break; // empty line ends the table
            }
        }
        Ok(items)
    }

    // Table 2: items span lines and are separated by single rule lines;
    // an empty line or eof ends the table.
    fn parse_table2_items(&mut self, die: bool) -> ParseResult<Vec<Exp>> {
        let mut items = Vec::new();
        loop {
            while self.take(TokenKind::White).is_some() {}
            let weight = self.take(TokenKind::Weight);
            match self.parse_mix(&[TokenKind::Rule1], true)? {
                Some(exp) => push_weighted(&mut items, exp, weight.as_ref(), die),
                None => return Err(ParseError::ExpectedTableItems(self.current().span)),
            }
            if self.take(TokenKind::Rule1).is_none() {
                break; // eof or empty line
            }
            if self.take(TokenKind::Newline).is_none() {
                break; // separator rule at eof
            }
            if self.peek(&[TokenKind::Eof]) {
                break;
            }
            if self.take(TokenKind::Newline).is_some() {
                break; // empty line after the rule ends the table
            }
        }
        Ok(items)
    }

    // mix := atom (literal | reference | draw)*
    //
    // Greedy; stops at any of `stop`, at newlines (unless `multiline`),
    // and at eof. In multiline mode a newline is consumed and replaced by
    // a single-space literal joining the physical lines, unless the next
    // line starts with the terminator or ends the item.
    //
    // Returns Ok(None) when no atom could be consumed; callers decide
    // whether that is an error.
    fn parse_mix(&mut self, stop: &[TokenKind], multiline: bool) -> ParseResult<Option<Exp>> {
        let mut parts = Vec::new();
        loop {
            let kind = self.current().kind;
            if stop.contains(&kind) || kind == TokenKind::Eof {
                break;
            }
            match kind {
                TokenKind::Newline => {
                    if !multiline {
                        break;
                    }
                    self.take(TokenKind::Newline);
                    while self.take(TokenKind::White).is_some() {}
                    let next = self.current().kind;
                    if stop.contains(&next)
                        || next == TokenKind::Newline
                        || next == TokenKind::Eof
                    {
                        break;
                    }
                    parts.push(Exp::literal(" "));
                }
                TokenKind::LParen => {
                    self.take(TokenKind::LParen);
                    let inner = self.parse_delimited(TokenKind::RParen)?;
                    parts.push(Exp::Reference(Box::new(inner)));
                }
                TokenKind::LBrace => {
                    self.take(TokenKind::LBrace);
                    let inner = self.parse_delimited(TokenKind::RBrace)?;
                    parts.push(Exp::Draw(Box::new(inner)));
                }
                kind if is_literal_kind(kind) => {
                    let mut text = String::new();
                    while is_literal_kind(self.current().kind) {
                        text.push_str(&self.tokens[self.pos].lexeme);
                        self.pos += 1;
                    }
                    parts.push(Exp::Literal(text));
                }
                _ => break,
            }
        }
        Ok(fold_mix(parts))
    }

    // The bracketed payload of a reference or draw. Unclosed and empty
    // brackets are rejected.
    fn parse_delimited(&mut self, close: TokenKind) -> ParseResult<Exp> {
        let inner = match self.parse_mix(&[close], false)? {
            Some(exp) => exp,
            None => return Err(self.unexpected(format!("an expression before {}", close))),
        };
        if self.take(close).is_none() {
            return Err(self.unexpected(format!("{}", close)));
        }
        Ok(inner)
    }
}

// Helper to lex and parse a string directly (useful for tests and the REPL)
pub fn parse_str(input: &str) -> ParseResult<Vec<Exp>> {
    let tokens = crate::lexer::tokenize(input)?;
    Parser::new(tokens).parse()
}
