//! deskcalc 计算器核心
//!
//! 将中缀算术表达式字符串求值为 `f64`，并提供作用于同一表达式文本的
//! 变换（正负号切换、百分比转换）。
//!
//! ```text
//! 表达式字符串 → 词法分析 → 递归下降求值 → f64 / ParseError
//! ```
//!
//! 界面层只需维护一个显示字符串，参见 [`calculator::Calculator`]。

pub mod calculator;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod transform;

pub use calculator::{Action, Calculator};
pub use error::{CalcResult, ParseError, ParseErrorKind, render_error};
pub use lexer::{Lexeme, Token, lex};
pub use parser::{Parser, parse};
pub use transform::{ERROR_MARKER, apply_percent, format_result, toggle_sign, try_apply_percent};
