//! Token types for the Pseudo lexer.

use std::fmt;

use crate::Span;

/// Reserved words.
///
/// A keyword is lexed exactly like an identifier and then looked up here.
/// `TRUE`, `FALSE` and `NULL` are not keywords: they are global bindings.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Keyword {
    Var,
    And,
    Or,
    Not,
    Mod,
    If,
    Then,
    Elif,
    Else,
    For,
    Each,
    In,
    To,
    Step,
    While,
    Repeat,
    Until,
    Times,
    Fun,
    /// Synonym of `FUN`.
    Procedure,
    End,
    Return,
    Continue,
    Break,
}

impl Keyword {
    pub const ALL: [Keyword; 24] = [
        Keyword::Var,
        Keyword::And,
        Keyword::Or,
        Keyword::Not,
        Keyword::Mod,
        Keyword::If,
        Keyword::Then,
        Keyword::Elif,
        Keyword::Else,
        Keyword::For,
        Keyword::Each,
        Keyword::In,
        Keyword::To,
        Keyword::Step,
        Keyword::While,
        Keyword::Repeat,
        Keyword::Until,
        Keyword::Times,
        Keyword::Fun,
        Keyword::Procedure,
        Keyword::End,
        Keyword::Return,
        Keyword::Continue,
        Keyword::Break,
    ];

    /// Classify an identifier-shaped word.
    pub fn from_word(word: &str) -> Option<Keyword> {
        Keyword::ALL.into_iter().find(|kw| kw.as_str() == word)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Keyword::Var => "VAR",
            Keyword::And => "AND",
            Keyword::Or => "OR",
            Keyword::Not => "NOT",
            Keyword::Mod => "MOD",
            Keyword::If => "IF",
            Keyword::Then => "THEN",
            Keyword::Elif => "ELIF",
            Keyword::Else => "ELSE",
            Keyword::For => "FOR",
            Keyword::Each => "EACH",
            Keyword::In => "IN",
            Keyword::To => "TO",
            Keyword::Step => "STEP",
            Keyword::While => "WHILE",
            Keyword::Repeat => "REPEAT",
            Keyword::Until => "UNTIL",
            Keyword::Times => "TIMES",
            Keyword::Fun => "FUN",
            Keyword::Procedure => "PROCEDURE",
            Keyword::End => "END",
            Keyword::Return => "RETURN",
            Keyword::Continue => "CONTINUE",
            Keyword::Break => "BREAK",
        }
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Token kinds for Pseudo.
///
/// Float literals store bits as u64 so the kind can be `Eq` and `Hash`.
#[derive(Clone, Eq, PartialEq, Hash)]
pub enum TokenKind {
    Int(i64),
    Float(u64),
    Str(String),
    Ident(String),
    Keyword(Keyword),

    Plus,
    Minus,
    Mul,
    Div,
    /// `**` or `^`
    Pow,
    Eq,
    EqEq,
    NotEq,
    Lt,
    Gt,
    LtEq,
    GtEq,
    LParen,
    RParen,
    LBracket,
    RBracket,
    Comma,
    Arrow,

    /// `;` or a line break.
    Newline,
    Eof,
}

impl TokenKind {
    /// Build a float token from its value.
    #[inline]
    pub fn float(value: f64) -> Self {
        TokenKind::Float(value.to_bits())
    }

    #[inline]
    pub fn is_keyword(&self, kw: Keyword) -> bool {
        matches!(self, TokenKind::Keyword(k) if *k == kw)
    }

    /// Human-readable name, used in parse errors and token dumps.
    pub fn display_name(&self) -> &'static str {
        match self {
            TokenKind::Int(_) => "int",
            TokenKind::Float(_) => "float",
            TokenKind::Str(_) => "string",
            TokenKind::Ident(_) => "identifier",
            TokenKind::Keyword(kw) => kw.as_str(),
            TokenKind::Plus => "'+'",
            TokenKind::Minus => "'-'",
            TokenKind::Mul => "'*'",
            TokenKind::Div => "'/'",
            TokenKind::Pow => "'**'",
            TokenKind::Eq => "'='",
            TokenKind::EqEq => "'=='",
            TokenKind::NotEq => "'!='",
            TokenKind::Lt => "'<'",
            TokenKind::Gt => "'>'",
            TokenKind::LtEq => "'<='",
            TokenKind::GtEq => "'>='",
            TokenKind::LParen => "'('",
            TokenKind::RParen => "')'",
            TokenKind::LBracket => "'['",
            TokenKind::RBracket => "']'",
            TokenKind::Comma => "','",
            TokenKind::Arrow => "'->'",
            TokenKind::Newline => "NEWLINE",
            TokenKind::Eof => "end of file",
        }
    }
}

impl fmt::Debug for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Int(n) => write!(f, "INT:{n}"),
            TokenKind::Float(bits) => write!(f, "FLOAT:{:?}", f64::from_bits(*bits)),
            TokenKind::Str(s) => write!(f, "STRING:{s:?}"),
            TokenKind::Ident(name) => write!(f, "IDENTIFIER:{name}"),
            TokenKind::Keyword(kw) => write!(f, "KEYWORD:{kw}"),
            TokenKind::Newline => f.write_str("NEWLINE"),
            TokenKind::Eof => f.write_str("EOF"),
            other => f.write_str(other.display_name().trim_matches('\'')),
        }
    }
}

/// A token with its span in the source.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Token { kind, span }
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {}", self.kind, self.span)
    }
}
