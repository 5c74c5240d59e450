use crate::source::Span;
use std::fmt;

/// The token kinds of the Invocat lexical grammar.
///
/// The scanner tries the rules for these kinds strictly in the order they
/// are declared here and emits the first match. The order is load-bearing:
/// a `Number` is a prefix of a `Weight`, a `Name` could swallow the digits
/// of a `DieNotation` header, and a `Rule1` line shares its first two
/// characters with a `Comment` marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// `d4  ` — die-notation prefix for a table header.
    DieNotation,
    /// `2  ` or `2-5  ` — an item weight, only recognized when followed by
    /// two blanks or one blank and punctuation.
    Weight,
    Number,
    /// Groups of name characters joined by runs of spaces (`dragon murmurings`).
    Name,
    LParen,
    RParen,
    LBrace,
    RBrace,
    Pipe,
    /// `::`
    Define,
    /// `:!`
    DefEval,
    /// `<-`
    Select,
    /// `<!`
    SelEval,
    /// `-- …` to end of line. Never emitted.
    Comment,
    /// A `---` rule line.
    Rule1,
    /// A `===` rule line.
    Rule2,
    /// Backslash-newline line splice. Never emitted.
    Split,
    Newline,
    White,
    Escape,
    Punct,
    Eof,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            TokenKind::DieNotation => "die notation",
            TokenKind::Weight => "weight",
            TokenKind::Number => "number",
            TokenKind::Name => "name",
            TokenKind::LParen => "'('",
            TokenKind::RParen => "')'",
            TokenKind::LBrace => "'{'",
            TokenKind::RBrace => "'}'",
            TokenKind::Pipe => "'|'",
            TokenKind::Define => "'::'",
            TokenKind::DefEval => "':!'",
            TokenKind::Select => "'<-'",
            TokenKind::SelEval => "'<!'",
            TokenKind::Comment => "comment",
            TokenKind::Rule1 => "rule",
            TokenKind::Rule2 => "double rule",
            TokenKind::Split => "line splice",
            TokenKind::Newline => "newline",
            TokenKind::White => "whitespace",
            TokenKind::Escape => "escape",
            TokenKind::Punct => "punctuation",
            TokenKind::Eof => "end of input",
        };
        write!(f, "{}", text)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    /// The matched text after normalization: operators keep only the
    /// operator, newlines keep `\n`, escapes keep the substitute character.
    pub lexeme: String,
    /// 0-based line number of the token's first character.
    pub line: usize,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, line: usize, span: Span) -> Self {
        Token {
            kind,
            lexeme: lexeme.into(),
            line,
            span,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:?})", self.kind, self.lexeme)
    }
}

// --- Lexer Error ---

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexerError {
    pub error: LexerErrorKind,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexerErrorKind {
    /// No rule matched at the cursor. The rule table is intended to be
    /// total over ASCII text, so this only occurs on exotic input.
    NothingMatched,
}

impl fmt::Display for LexerErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LexerErrorKind::NothingMatched => write!(f, "Nothing matched at cursor"),
        }
    }
}

impl fmt::Display for LexerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Lexer Error at {}: {}", self.span, self.error)
    }
}

impl std::error::Error for LexerError {}

// Result type alias for convenience
pub type LexerResult<T> = Result<T, LexerError>;

// --- Character classes ---

// Horizontal whitespace; newlines are their own rule.
fn is_blank(c: char) -> bool {
    c == ' ' || c == '\t'
}

fn is_name_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '_' | '!' | '\'' | '?' | '.' | ',' | ';')
}

// Wider than Unicode's punctuation categories on purpose: ASCII symbols
// like `<`, `=` and `+` must lex as something, or the grammar is not total.
fn is_punct_char(c: char) -> bool {
    !c.is_alphanumeric() && !c.is_whitespace()
}

fn is_vertical_space(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\x0B' | '\x0C' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

// --- Rule matching ---

/// A successful rule match: how many bytes it consumed and, where the rule
/// normalizes its text, the lexeme to store instead of the raw slice.
struct RuleMatch {
    kind: TokenKind,
    len: usize,
    lexeme: Option<String>,
}

impl RuleMatch {
    fn new(kind: TokenKind, len: usize) -> Self {
        RuleMatch {
            kind,
            len,
            lexeme: None,
        }
    }

    fn with_lexeme(kind: TokenKind, len: usize, lexeme: impl Into<String>) -> Self {
        RuleMatch {
            kind,
            len,
            lexeme: Some(lexeme.into()),
        }
    }
}

/// Byte-position cursor used by the individual rule matchers. Each matcher
/// gets a fresh cursor over the unscanned remainder, so a failed rule
/// leaves no state behind.
struct Scan<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Scan<'a> {
    fn new(src: &'a str) -> Self {
        Scan { src, pos: 0 }
    }

    fn peek(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.bump();
            true
        } else {
            false
        }
    }

    fn eat_str(&mut self, expected: &str) -> bool {
        if self.src[self.pos..].starts_with(expected) {
            self.pos += expected.len();
            true
        } else {
            false
        }
    }

    fn eat_while(&mut self, pred: impl Fn(char) -> bool) -> usize {
        let mut count = 0;
        while let Some(c) = self.peek() {
            if !pred(c) {
                break;
            }
            self.bump();
            count += 1;
        }
        count
    }

    // Consume the rest of the physical line, excluding the newline.
    fn eat_line(&mut self) {
        self.eat_while(|c| c != '\n');
    }
}

type Matcher = fn(&str) -> Option<RuleMatch>;

// The rule table. First match wins; see the TokenKind docs for why the
// order cannot be changed.
const RULES: &[Matcher] = &[
    match_die_notation,
    match_weight,
    match_number,
    match_name,
    match_lparen,
    match_rparen,
    match_lbrace,
    match_rbrace,
    match_pipe,
    match_define,
    match_def_eval,
    match_select,
    match_sel_eval,
    match_comment,
    match_rule1,
    match_rule2,
    match_split,
    match_newline,
    match_white,
    match_escape,
    match_punct,
];

// The trailing test shared by die notation and weights: one blank, then
// either a second blank (consumed, along with any blanks after it) or a
// punctuation character (lookahead only). This keeps `1  x` a weight while
// `1 x` stays an ordinary literal.
fn eat_weight_tail(s: &mut Scan) -> bool {
    match s.peek() {
        Some(c) if is_blank(c) => {
            s.bump();
        }
        _ => return false,
    }
    match s.peek() {
        Some(c) if is_blank(c) => {
            s.bump();
            s.eat_while(is_blank);
            true
        }
        Some(c) if is_punct_char(c) => true,
        _ => false,
    }
}

fn match_die_notation(rest: &str) -> Option<RuleMatch> {
    let mut s = Scan::new(rest);
    if !s.eat('d') {
        return None;
    }
    if s.eat_while(|c| c.is_ascii_digit()) == 0 {
        return None;
    }
    if !eat_weight_tail(&mut s) {
        return None;
    }
    Some(RuleMatch::new(TokenKind::DieNotation, s.pos))
}

fn match_weight(rest: &str) -> Option<RuleMatch> {
    let mut s = Scan::new(rest);
    if s.eat_while(|c| c.is_ascii_digit()) == 0 {
        return None;
    }
    let before_range = s.pos;
    if s.eat('-') && s.eat_while(|c| c.is_ascii_digit()) == 0 {
        s.pos = before_range;
    }
    if !eat_weight_tail(&mut s) {
        return None;
    }
    Some(RuleMatch::new(TokenKind::Weight, s.pos))
}

fn match_number(rest: &str) -> Option<RuleMatch> {
    let mut s = Scan::new(rest);
    if s.eat_while(|c| c.is_ascii_digit()) == 0 {
        return None;
    }
    Some(RuleMatch::new(TokenKind::Number, s.pos))
}

fn match_name(rest: &str) -> Option<RuleMatch> {
    let mut s = Scan::new(rest);
    if s.eat_while(is_name_char) == 0 {
        return None;
    }
    // Further groups join across runs of spaces; a run with no group after
    // it belongs to whatever comes next.
    loop {
        let before_spaces = s.pos;
        if s.eat_while(|c| c == ' ') == 0 {
            break;
        }
        if s.eat_while(is_name_char) == 0 {
            s.pos = before_spaces;
            break;
        }
    }
    Some(RuleMatch::new(TokenKind::Name, s.pos))
}

fn match_lparen(rest: &str) -> Option<RuleMatch> {
    rest.starts_with('(')
        .then(|| RuleMatch::new(TokenKind::LParen, 1))
}

fn match_rparen(rest: &str) -> Option<RuleMatch> {
    rest.starts_with(')')
        .then(|| RuleMatch::new(TokenKind::RParen, 1))
}

fn match_lbrace(rest: &str) -> Option<RuleMatch> {
    rest.starts_with('{')
        .then(|| RuleMatch::new(TokenKind::LBrace, 1))
}

fn match_rbrace(rest: &str) -> Option<RuleMatch> {
    rest.starts_with('}')
        .then(|| RuleMatch::new(TokenKind::RBrace, 1))
}

// Operators absorb the blanks around them, so the parser never sees
// whitespace on either side of `|`, `::`, `:!`, `<-` or `<!`.
fn match_operator(rest: &str, operator: &str, kind: TokenKind) -> Option<RuleMatch> {
    let mut s = Scan::new(rest);
    s.eat_while(is_blank);
    if !s.eat_str(operator) {
        return None;
    }
    s.eat_while(is_blank);
    Some(RuleMatch::with_lexeme(kind, s.pos, operator))
}

fn match_pipe(rest: &str) -> Option<RuleMatch> {
    match_operator(rest, "|", TokenKind::Pipe)
}

fn match_define(rest: &str) -> Option<RuleMatch> {
    match_operator(rest, "::", TokenKind::Define)
}

fn match_def_eval(rest: &str) -> Option<RuleMatch> {
    match_operator(rest, ":!", TokenKind::DefEval)
}

fn match_select(rest: &str) -> Option<RuleMatch> {
    match_operator(rest, "<-", TokenKind::Select)
}

fn match_sel_eval(rest: &str) -> Option<RuleMatch> {
    match_operator(rest, "<!", TokenKind::SelEval)
}

// `--` must be followed by at least one blank to count as a comment;
// otherwise the hyphens fall through to later rules.
fn match_comment(rest: &str) -> Option<RuleMatch> {
    let mut s = Scan::new(rest);
    s.eat_while(is_blank);
    if !s.eat_str("--") {
        return None;
    }
    if s.eat_while(is_blank) == 0 {
        return None;
    }
    s.eat_line();
    Some(RuleMatch::new(TokenKind::Comment, s.pos))
}

fn match_rule1(rest: &str) -> Option<RuleMatch> {
    let mut s = Scan::new(rest);
    if s.eat_while(|c| c == '-') < 3 {
        return None;
    }
    s.eat_line();
    Some(RuleMatch::new(TokenKind::Rule1, s.pos))
}

fn match_rule2(rest: &str) -> Option<RuleMatch> {
    let mut s = Scan::new(rest);
    if s.eat_while(|c| c == '=') < 3 {
        return None;
    }
    s.eat_line();
    Some(RuleMatch::new(TokenKind::Rule2, s.pos))
}

// Backslash-newline removes both characters, joining the physical lines.
fn match_split(rest: &str) -> Option<RuleMatch> {
    let mut s = Scan::new(rest);
    if !s.eat('\\') {
        return None;
    }
    match s.peek() {
        Some(c) if is_vertical_space(c) => {
            s.bump();
            Some(RuleMatch::new(TokenKind::Split, s.pos))
        }
        _ => None,
    }
}

fn match_newline(rest: &str) -> Option<RuleMatch> {
    let mut s = Scan::new(rest);
    s.eat_while(is_blank);
    if !s.eat('\n') {
        return None;
    }
    Some(RuleMatch::with_lexeme(TokenKind::Newline, s.pos, "\n"))
}

fn match_white(rest: &str) -> Option<RuleMatch> {
    let mut s = Scan::new(rest);
    if s.eat_while(char::is_whitespace) == 0 {
        return None;
    }
    Some(RuleMatch::new(TokenKind::White, s.pos))
}

fn match_escape(rest: &str) -> Option<RuleMatch> {
    let mut s = Scan::new(rest);
    if !s.eat('\\') {
        return None;
    }
    let substitute = match s.peek()? {
        'n' => '\n',
        't' => '\t',
        'r' => '\r',
        c @ ('(' | ')' | '{' | '}' | '|' | '\\') => c,
        _ => return None,
    };
    s.bump();
    Some(RuleMatch::with_lexeme(
        TokenKind::Escape,
        s.pos,
        substitute.to_string(),
    ))
}

fn match_punct(rest: &str) -> Option<RuleMatch> {
    let c = rest.chars().next()?;
    if is_punct_char(c) {
        Some(RuleMatch::new(TokenKind::Punct, c.len_utf8()))
    } else {
        None
    }
}

/// Scan `input` into tokens, terminated by a single `Eof` token.
///
/// `Comment` and `Split` matches are consumed but never emitted.
pub fn tokenize(input: &str) -> LexerResult<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut pos = 0;
    let mut line = 0;
    while pos < input.len() {
        let rest = &input[pos..];
        let matched = RULES.iter().find_map(|rule| rule(rest));
        let m = match matched {
            Some(m) => m,
            None => {
                let width = rest.chars().next().map(char::len_utf8).unwrap_or(0);
                return Err(LexerError {
                    error: LexerErrorKind::NothingMatched,
                    span: Span::new(pos, pos + width),
                });
            }
        };
        let raw = &rest[..m.len];
        if !matches!(m.kind, TokenKind::Comment | TokenKind::Split) {
            let lexeme = m.lexeme.unwrap_or_else(|| raw.to_string());
            tokens.push(Token::new(m.kind, lexeme, line, Span::new(pos, pos + m.len)));
        }
        line += raw.matches('\n').count();
        // Splices remove a vertical separator that `matches('\n')` may not see.
        if m.kind == TokenKind::Split && !raw.contains('\n') {
            line += 1;
        }
        pos += m.len;
    }
    tokens.push(Token::new(
        TokenKind::Eof,
        "",
        line,
        Span::new(input.len(), input.len()),
    ));
    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    // Helper to compare the (kind, lexeme) sequence of a lex run.
    fn assert_tokens(input: &str, expected: Vec<(TokenKind, &str)>) {
        match tokenize(input) {
            Ok(tokens) => {
                let actual: Vec<(TokenKind, String)> = tokens
                    .iter()
                    .map(|t| (t.kind, t.lexeme.clone()))
                    .collect();
                let expected: Vec<(TokenKind, String)> = expected
                    .into_iter()
                    .map(|(kind, lexeme)| (kind, lexeme.to_string()))
                    .collect();
                assert_eq!(actual, expected, "Input: {:?}", input);
            }
            Err(e) => panic!("Lexing failed for input {:?}: {}", input, e),
        }
    }

    #[test]
    fn test_empty_input() {
        assert_tokens("", vec![(TokenKind::Eof, "")]);
    }

    #[test]
    fn test_whitespace_only_input() {
        assert_tokens("   ", vec![(TokenKind::White, "   "), (TokenKind::Eof, "")]);
    }

    #[test]
    fn test_definition_operators_absorb_whitespace() {
        assert_tokens(
            "x :: moon",
            vec![
                (TokenKind::Name, "x"),
                (TokenKind::Define, "::"),
                (TokenKind::Name, "moon"),
                (TokenKind::Eof, ""),
            ],
        );
        assert_tokens(
            "x::moon",
            vec![
                (TokenKind::Name, "x"),
                (TokenKind::Define, "::"),
                (TokenKind::Name, "moon"),
                (TokenKind::Eof, ""),
            ],
        );
        assert_tokens(
            "color <- a | b",
            vec![
                (TokenKind::Name, "color"),
                (TokenKind::Select, "<-"),
                (TokenKind::Name, "a"),
                (TokenKind::Pipe, "|"),
                (TokenKind::Name, "b"),
                (TokenKind::Eof, ""),
            ],
        );
        assert_tokens(
            "x :! a",
            vec![
                (TokenKind::Name, "x"),
                (TokenKind::DefEval, ":!"),
                (TokenKind::Name, "a"),
                (TokenKind::Eof, ""),
            ],
        );
        assert_tokens(
            "x <! a",
            vec![
                (TokenKind::Name, "x"),
                (TokenKind::SelEval, "<!"),
                (TokenKind::Name, "a"),
                (TokenKind::Eof, ""),
            ],
        );
    }

    #[test]
    fn test_names_join_groups_across_spaces() {
        assert_tokens(
            "dragon murmurings",
            vec![(TokenKind::Name, "dragon murmurings"), (TokenKind::Eof, "")],
        );
        // The trailing space run before the operator is not part of the name.
        assert_tokens(
            "certain color <! x",
            vec![
                (TokenKind::Name, "certain color"),
                (TokenKind::SelEval, "<!"),
                (TokenKind::Name, "x"),
                (TokenKind::Eof, ""),
            ],
        );
    }

    #[test]
    fn test_die_notation_beats_name() {
        // Ordered matching: the die rule wins even though the name rule
        // would match the longer `d4  memory`.
        assert_tokens(
            "d4  memory",
            vec![
                (TokenKind::DieNotation, "d4  "),
                (TokenKind::Name, "memory"),
                (TokenKind::Eof, ""),
            ],
        );
        // Without the two-blank tail it is just a name.
        assert_tokens("d4", vec![(TokenKind::Name, "d4"), (TokenKind::Eof, "")]);
    }

    #[test]
    fn test_weight_requires_two_blanks() {
        assert_tokens(
            "1  x",
            vec![
                (TokenKind::Weight, "1  "),
                (TokenKind::Name, "x"),
                (TokenKind::Eof, ""),
            ],
        );
        assert_tokens(
            "1 x",
            vec![
                (TokenKind::Number, "1"),
                (TokenKind::White, " "),
                (TokenKind::Name, "x"),
                (TokenKind::Eof, ""),
            ],
        );
        assert_tokens(
            "2-5  x",
            vec![
                (TokenKind::Weight, "2-5  "),
                (TokenKind::Name, "x"),
                (TokenKind::Eof, ""),
            ],
        );
    }

    #[test]
    fn test_weight_punctuation_is_lookahead_only() {
        // One blank and punctuation also makes a weight, but the
        // punctuation character survives as its own token.
        assert_tokens(
            "1 -",
            vec![
                (TokenKind::Weight, "1 "),
                (TokenKind::Punct, "-"),
                (TokenKind::Eof, ""),
            ],
        );
    }

    #[test]
    fn test_numbers_in_literal_position() {
        assert_tokens(
            "10 apples",
            vec![
                (TokenKind::Number, "10"),
                (TokenKind::White, " "),
                (TokenKind::Name, "apples"),
                (TokenKind::Eof, ""),
            ],
        );
    }

    #[test]
    fn test_brackets() {
        assert_tokens(
            "(x)",
            vec![
                (TokenKind::LParen, "("),
                (TokenKind::Name, "x"),
                (TokenKind::RParen, ")"),
                (TokenKind::Eof, ""),
            ],
        );
        assert_tokens(
            "{color}",
            vec![
                (TokenKind::LBrace, "{"),
                (TokenKind::Name, "color"),
                (TokenKind::RBrace, "}"),
                (TokenKind::Eof, ""),
            ],
        );
    }

    #[test]
    fn test_comments_are_dropped() {
        assert_tokens("-- a comment", vec![(TokenKind::Eof, "")]);
        assert_tokens(
            "-- a comment\nx",
            vec![
                (TokenKind::Newline, "\n"),
                (TokenKind::Name, "x"),
                (TokenKind::Eof, ""),
            ],
        );
        // Indented comments are comments too.
        assert_tokens("   -- note", vec![(TokenKind::Eof, "")]);
    }

    #[test]
    fn test_two_hyphens_without_blank_are_not_a_comment() {
        assert_tokens(
            "--x",
            vec![
                (TokenKind::Punct, "-"),
                (TokenKind::Punct, "-"),
                (TokenKind::Name, "x"),
                (TokenKind::Eof, ""),
            ],
        );
    }

    #[test]
    fn test_rules() {
        assert_tokens("---", vec![(TokenKind::Rule1, "---"), (TokenKind::Eof, "")]);
        assert_tokens(
            "--------",
            vec![(TokenKind::Rule1, "--------"), (TokenKind::Eof, "")],
        );
        assert_tokens(
            "=== header text",
            vec![(TokenKind::Rule2, "=== header text"), (TokenKind::Eof, "")],
        );
        // A rule line swallows the rest of the line but not the newline.
        assert_tokens(
            "----\nx",
            vec![
                (TokenKind::Rule1, "----"),
                (TokenKind::Newline, "\n"),
                (TokenKind::Name, "x"),
                (TokenKind::Eof, ""),
            ],
        );
    }

    #[test]
    fn test_newline_absorbs_trailing_blanks() {
        assert_tokens(
            "a   \nb",
            vec![
                (TokenKind::Name, "a"),
                (TokenKind::Newline, "\n"),
                (TokenKind::Name, "b"),
                (TokenKind::Eof, ""),
            ],
        );
    }

    #[test]
    fn test_escapes_substitute() {
        assert_tokens(r"\(", vec![(TokenKind::Escape, "("), (TokenKind::Eof, "")]);
        assert_tokens(
            r"a\|b",
            vec![
                (TokenKind::Name, "a"),
                (TokenKind::Escape, "|"),
                (TokenKind::Name, "b"),
                (TokenKind::Eof, ""),
            ],
        );
        assert_tokens(
            r"\n\t\r\\",
            vec![
                (TokenKind::Escape, "\n"),
                (TokenKind::Escape, "\t"),
                (TokenKind::Escape, "\r"),
                (TokenKind::Escape, "\\"),
                (TokenKind::Eof, ""),
            ],
        );
    }

    #[test]
    fn test_split_joins_lines() {
        assert_tokens(
            "a\\\nb",
            vec![
                (TokenKind::Name, "a"),
                (TokenKind::Name, "b"),
                (TokenKind::Eof, ""),
            ],
        );
    }

    #[test]
    fn test_line_numbers() {
        let tokens = tokenize("a\nb\n\nc").unwrap();
        let lines: Vec<(TokenKind, usize)> = tokens.iter().map(|t| (t.kind, t.line)).collect();
        assert_eq!(
            lines,
            vec![
                (TokenKind::Name, 0),
                (TokenKind::Newline, 0),
                (TokenKind::Name, 1),
                (TokenKind::Newline, 1),
                (TokenKind::Newline, 2),
                (TokenKind::Name, 3),
                (TokenKind::Eof, 3),
            ]
        );
    }

    #[test]
    fn test_line_numbers_across_splits() {
        let tokens = tokenize("a\\\nb").unwrap();
        assert_eq!(tokens[1].kind, TokenKind::Name);
        assert_eq!(tokens[1].line, 1);
    }

    #[test]
    fn test_every_lex_ends_with_single_eof() {
        for input in ["", "x :: a | b", "-- only a comment", "a\nb\nc", "((("] {
            let tokens = tokenize(input).unwrap();
            let eofs = tokens
                .iter()
                .filter(|t| t.kind == TokenKind::Eof)
                .count();
            assert_eq!(eofs, 1, "Input: {:?}", input);
            assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::Eof));
        }
    }

    #[test]
    fn test_no_comment_or_split_tokens_emitted() {
        let input = "x :: a -- trailing comment\n-- full line\ny :: b\\\nc";
        let tokens = tokenize(input).unwrap();
        assert!(tokens
            .iter()
            .all(|t| !matches!(t.kind, TokenKind::Comment | TokenKind::Split)));
    }

    #[test]
    fn test_ascii_symbols_lex_as_punctuation() {
        assert_tokens(
            "a = b",
            vec![
                (TokenKind::Name, "a"),
                (TokenKind::White, " "),
                (TokenKind::Punct, "="),
                (TokenKind::White, " "),
                (TokenKind::Name, "b"),
                (TokenKind::Eof, ""),
            ],
        );
    }

    #[test]
    fn test_table_header_shape() {
        assert_tokens(
            "color\n--------\nmazarine",
            vec![
                (TokenKind::Name, "color"),
                (TokenKind::Newline, "\n"),
                (TokenKind::Rule1, "--------"),
                (TokenKind::Newline, "\n"),
                (TokenKind::Name, "mazarine"),
                (TokenKind::Eof, ""),
            ],
        );
    }
}
