//! 表达式解析模块
//!
//! 按优先级拆分为二元运算与因子两个子模块。

mod binary;
mod primary;

pub use binary::*;
pub use primary::*;
