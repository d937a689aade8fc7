//! 词法分析
//!
//! 把表达式切分为带字节区间的记号。空白不会被跳过，而是作为
//! [`Token::Whitespace`] 交给语法分析，由它决定在哪里允许空白。

use logos::Logos;
use std::ops::Range;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,

    /// 数字与小数点组成的最长串，合法性由语法分析检查
    #[regex(r"[0-9.]+")]
    Number,

    // 与 C 的 isspace 相同的字符集
    #[regex(r"[ \t\n\r\x0B\x0C]+")]
    Whitespace,

    /// 无法识别的字符，由 `lex` 填入
    Unknown,
}

impl Token {
    /// 记号的可读名称
    pub fn describe(&self) -> &'static str {
        match self {
            Token::Plus => "'+'",
            Token::Minus => "'-'",
            Token::Star => "'*'",
            Token::Slash => "'/'",
            Token::LParen => "'('",
            Token::RParen => "')'",
            Token::Number => "number",
            Token::Whitespace => "whitespace",
            Token::Unknown => "unknown character",
        }
    }
}

/// 记号及其在源串中的字节区间
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexeme {
    pub token: Token,
    pub span: Range<usize>,
}

impl Lexeme {
    pub fn text<'src>(&self, source: &'src str) -> &'src str {
        &source[self.span.clone()]
    }
}

/// 词法分析入口，不会失败
pub fn lex(source: &str) -> Vec<Lexeme> {
    Token::lexer(source)
        .spanned()
        .map(|(result, span)| Lexeme {
            token: result.unwrap_or(Token::Unknown),
            span,
        })
        .collect()
}
