//! 计算器显示模型
//!
//! 界面层持有的显示字符串及作用于它的离散操作。每个按键追加一个字符，
//! 或调用求值器并整体替换显示内容。

use crate::error::ParseError;
use crate::parser::parse;
use crate::transform::{ERROR_MARKER, format_result, toggle_sign, try_apply_percent};

/// 一次用户操作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// 追加数字、小数点、运算符或括号
    Input(char),
    /// '='
    Evaluate,
    /// '%'
    Percent,
    /// '+/-'
    ToggleSign,
    /// 'C'
    Clear,
    /// 'AC'
    AllClear,
    Backspace,
}

impl Action {
    /// 按键字符到操作的映射，未映射的字符返回 `None`
    pub fn from_key(key: char) -> Option<Action> {
        let action = match key {
            '0'..='9' | '.' | '+' | '-' | '*' | '/' | '(' | ')' => Action::Input(key),
            '=' | '\n' | '\r' => Action::Evaluate,
            '%' => Action::Percent,
            '~' => Action::ToggleSign,
            'c' | 'C' => Action::Clear,
            'a' | 'A' => Action::AllClear,
            '\x08' | '\x7f' => Action::Backspace,
            _ => return None,
        };
        Some(action)
    }
}

#[derive(Debug, Clone, Default)]
pub struct Calculator {
    display: String,
    last_error: Option<ParseError>,
}

impl Calculator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn set_display(&mut self, text: impl Into<String>) {
        self.display = text.into();
        self.last_error = None;
    }

    /// 显示内容是否为错误标记
    pub fn is_error(&self) -> bool {
        self.display == ERROR_MARKER
    }

    /// 最近一次失败的求值或百分比转换的错误
    pub fn last_error(&self) -> Option<&ParseError> {
        self.last_error.as_ref()
    }

    pub fn apply(&mut self, action: Action) {
        self.last_error = None;
        match action {
            Action::Input(c) => self.display.push(c),
            Action::Evaluate => self.calculate(),
            Action::Percent => self.percent(),
            Action::ToggleSign => self.display = toggle_sign(&self.display),
            Action::Clear | Action::AllClear => self.display.clear(),
            Action::Backspace => {
                self.display.pop();
            }
        }
    }

    /// 依次处理按键序列，忽略未映射的字符，返回处理的按键数
    pub fn apply_keys(&mut self, keys: &str) -> usize {
        let mut applied = 0;
        for action in keys.chars().filter_map(Action::from_key) {
            self.apply(action);
            applied += 1;
        }
        applied
    }

    fn calculate(&mut self) {
        if self.display.is_empty() {
            return;
        }
        match parse(&self.display) {
            Ok(value) => self.display = format_result(value),
            Err(e) => self.fail(e),
        }
    }

    fn percent(&mut self) {
        match try_apply_percent(&self.display) {
            Ok(text) => self.display = text,
            Err(e) => self.fail(e),
        }
    }

    fn fail(&mut self, error: ParseError) {
        self.display = ERROR_MARKER.to_string();
        self.last_error = Some(error);
    }
}
