//! 表达式文本变换
//!
//! 正负号切换只作用于表达式末尾的数字；百分比转换对整个表达式求值。

use crate::error::CalcResult;
use crate::parser::parse;

/// 求值失败时替换显示内容的标记
pub const ERROR_MARKER: &str = "Error";

/// 百分比结果保留的小数位数（随后去掉末尾的 0）
const PERCENT_PRECISION: usize = 10;

fn is_numeral_byte(b: u8) -> bool {
    b.is_ascii_digit() || b == b'.'
}

/// 切换末尾数字的正负号
///
/// 末尾数字前若是一元负号（其前面不是数字）则删除它，否则在数字前插入 '-'。
/// 因此 `3-5` 变为 `3--5`，`3+-5` 变为 `3+5`。
pub fn toggle_sign(expr: &str) -> String {
    // 只有一个 '-' 时视为已是负数开头，不做改动
    if expr.is_empty() || expr == "-" {
        return expr.to_string();
    }

    let bytes = expr.as_bytes();
    let start = bytes
        .iter()
        .rposition(|&b| !is_numeral_byte(b))
        .map_or(0, |i| i + 1);

    let mut result = expr.to_string();
    let unary_minus = start > 0
        && bytes[start - 1] == b'-'
        && (start < 2 || !is_numeral_byte(bytes[start - 2]));

    if unary_minus {
        result.remove(start - 1);
    } else {
        result.insert(start, '-');
    }
    result
}

/// 对整个表达式求值并乘以 100，失败时返回错误
///
/// 空串原样返回。
pub fn try_apply_percent(display: &str) -> CalcResult<String> {
    if display.is_empty() {
        return Ok(String::new());
    }
    let value = parse(display)?;
    Ok(format_fixed(value * 100.0, PERCENT_PRECISION))
}

/// 百分比转换，任何解析错误都把显示内容替换为 [`ERROR_MARKER`]
pub fn apply_percent(display: &str) -> String {
    try_apply_percent(display).unwrap_or_else(|_| ERROR_MARKER.to_string())
}

/// 格式化求值结果
///
/// 使用最短且可无损回读的十进制表示，从不使用科学计数法。
pub fn format_result(value: f64) -> String {
    value.to_string()
}

/// 定点格式化后去掉末尾多余的 0 和小数点
fn format_fixed(value: f64, precision: usize) -> String {
    let text = format!("{value:.precision$}");
    if !text.contains('.') {
        return text;
    }
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}
