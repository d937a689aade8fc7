//! 错误类型
//!
//! 表达式解析失败时返回的错误，以及带源码上下文的错误渲染。

use thiserror::Error;

pub type CalcResult<T> = Result<T, ParseError>;

/// 表达式解析错误
///
/// 每个变体都记录发现错误时的字节偏移 `pos`。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// 因子位置既不是数字也不是 '('
    #[error("Expected number at offset {pos}")]
    ExpectedNumber { pos: usize },

    /// '(' 之后没有对应的 ')'，`open` 为 '(' 的偏移
    #[error("Expected ')' to close '(' opened at offset {open}")]
    UnmatchedParenthesis { open: usize, pos: usize },

    /// 完整表达式之后仍有未消耗的输入
    #[error("Unexpected input at offset {pos}")]
    UnexpectedTrailingInput { pos: usize },

    /// 数字串不是合法的十进制数，例如 `1.2.3`
    #[error("Malformed number '{text}' at offset {pos}")]
    MalformedNumber { text: String, pos: usize },
}

/// 不带位置信息的错误种类，便于匹配
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseErrorKind {
    ExpectedNumber,
    UnmatchedParenthesis,
    UnexpectedTrailingInput,
    MalformedNumber,
}

impl ParseError {
    pub fn kind(&self) -> ParseErrorKind {
        match self {
            ParseError::ExpectedNumber { .. } => ParseErrorKind::ExpectedNumber,
            ParseError::UnmatchedParenthesis { .. } => ParseErrorKind::UnmatchedParenthesis,
            ParseError::UnexpectedTrailingInput { .. } => ParseErrorKind::UnexpectedTrailingInput,
            ParseError::MalformedNumber { .. } => ParseErrorKind::MalformedNumber,
        }
    }

    /// 出错处的字节偏移
    pub fn offset(&self) -> usize {
        match self {
            ParseError::ExpectedNumber { pos }
            | ParseError::UnmatchedParenthesis { pos, .. }
            | ParseError::UnexpectedTrailingInput { pos }
            | ParseError::MalformedNumber { pos, .. } => *pos,
        }
    }
}

/// 渲染错误：错误消息、出错所在行以及指向出错列的 '^'
///
/// ```text
/// error: Expected number at offset 2
///   |
/// 1 | 1+
///   |   ^
/// ```
pub fn render_error(error: &ParseError, source: &str) -> String {
    let mut offset = error.offset().min(source.len());
    while !source.is_char_boundary(offset) {
        offset -= 1;
    }

    let line_start = source[..offset].rfind('\n').map_or(0, |i| i + 1);
    let line_end = source[offset..]
        .find('\n')
        .map_or(source.len(), |i| offset + i);
    let line_no = source[..line_start].matches('\n').count() + 1;
    let column = source[line_start..offset].chars().count();

    let gutter = " ".repeat(line_no.to_string().len());
    let line = source[line_start..line_end].trim_end_matches('\r');

    format!(
        "error: {error}\n{gutter} |\n{line_no} | {line}\n{gutter} | {}^",
        " ".repeat(column)
    )
}
