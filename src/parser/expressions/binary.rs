//! 二元表达式求值
//!
//! 加减与乘除两层，均为左结合。运算符前的空白不会被跳过。

use crate::error::CalcResult;
use crate::lexer::Token;
use super::super::Parser;
use super::primary::parse_factor;

/// 解析加减表达式
pub fn parse_expr(parser: &mut Parser) -> CalcResult<f64> {
    let mut left = parse_term(parser)?;

    loop {
        if parser.match_token(Token::Plus) {
            left += parse_term(parser)?;
        } else if parser.match_token(Token::Minus) {
            left -= parse_term(parser)?;
        } else {
            break;
        }
    }

    Ok(left)
}

/// 解析乘除表达式
pub fn parse_term(parser: &mut Parser) -> CalcResult<f64> {
    let mut left = parse_factor(parser)?;

    loop {
        if parser.match_token(Token::Star) {
            left *= parse_factor(parser)?;
        } else if parser.match_token(Token::Slash) {
            // IEEE-754 除法，除以零得到 inf 或 NaN
            left /= parse_factor(parser)?;
        } else {
            break;
        }
    }

    Ok(left)
}
