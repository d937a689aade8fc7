//! 语法分析与求值
//!
//! 递归下降，边解析边求值，不构建语法树：
//!
//! ```text
//! expr   := term (('+' | '-') term)*
//! term   := factor (('*' | '/') factor)*
//! factor := WS* '(' expr ')' | WS* NUMBER
//! ```
//!
//! 只有因子之前的空白会被跳过。

pub mod expressions;

use crate::error::{CalcResult, ParseError};
use crate::lexer::{Lexeme, Token, lex};
use expressions::parse_expr;

pub struct Parser<'src> {
    source: &'src str,
    lexemes: Vec<Lexeme>,
    pub pos: usize,
}

impl<'src> Parser<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            lexemes: lex(source),
            pos: 0,
        }
    }

    /// 解析并求值整个输入，要求输入被完全消耗
    pub fn parse(mut self) -> CalcResult<f64> {
        let value = parse_expr(&mut self)?;
        if !self.is_at_end() {
            return Err(ParseError::UnexpectedTrailingInput {
                pos: self.current_offset(),
            });
        }
        Ok(value)
    }

    pub fn current_token(&self) -> Option<Token> {
        self.lexemes.get(self.pos).map(|lexeme| lexeme.token)
    }

    /// 当前记号的原文，已到末尾时为空串
    pub fn current_text(&self) -> &'src str {
        let source = self.source;
        self.lexemes
            .get(self.pos)
            .map_or("", |lexeme| lexeme.text(source))
    }

    /// 当前记号的起始偏移，已到末尾时为输入长度
    pub fn current_offset(&self) -> usize {
        self.lexemes
            .get(self.pos)
            .map_or(self.source.len(), |lexeme| lexeme.span.start)
    }

    pub fn is_at_end(&self) -> bool {
        self.pos >= self.lexemes.len()
    }

    pub fn advance(&mut self) {
        if !self.is_at_end() {
            self.pos += 1;
        }
    }

    pub fn check(&self, token: Token) -> bool {
        self.current_token() == Some(token)
    }

    pub fn match_token(&mut self, token: Token) -> bool {
        if self.check(token) {
            self.advance();
            true
        } else {
            false
        }
    }

    pub fn skip_whitespace(&mut self) {
        while self.match_token(Token::Whitespace) {}
    }
}

/// 对表达式求值
pub fn parse(input: &str) -> CalcResult<f64> {
    Parser::new(input).parse()
}
