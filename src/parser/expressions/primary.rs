//! 因子解析
//!
//! 处理数字字面量和括号表达式。

use crate::error::{CalcResult, ParseError};
use crate::lexer::Token;
use super::super::Parser;
use super::binary::parse_expr;

/// 解析因子，先跳过前导空白
pub fn parse_factor(parser: &mut Parser) -> CalcResult<f64> {
    parser.skip_whitespace();
    let pos = parser.current_offset();

    match parser.current_token() {
        Some(Token::LParen) => {
            parser.advance(); // 跳过 '('
            let value = parse_expr(parser)?;
            if !parser.match_token(Token::RParen) {
                return Err(ParseError::UnmatchedParenthesis {
                    open: pos,
                    pos: parser.current_offset(),
                });
            }
            Ok(value)
        }
        Some(Token::Number) => {
            let text = parser.current_text();
            parser.advance();
            parse_number(text, pos)
        }
        _ => Err(ParseError::ExpectedNumber { pos }),
    }
}

/// 转换数字串；`.5` 与 `2.` 合法，`.` 与 `1.2.3` 不合法
pub fn parse_number(text: &str, pos: usize) -> CalcResult<f64> {
    text.parse::<f64>().map_err(|_| ParseError::MalformedNumber {
        text: text.to_string(),
        pos,
    })
}
