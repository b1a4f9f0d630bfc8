use std::io::{self, Write};

/// 菜单文本（固定四个选项，每轮循环前打印）
const MENU: &str = "\n--- To-Do List Menu ---\n\
1. Add a task\n\
2. View tasks\n\
3. Remove a task\n\
4. Exit";

/// 渲染菜单
pub fn render<W: Write>(writer: &mut W) -> io::Result<()> {
    writeln!(writer, "{}", MENU)
}

/// 菜单选项
///
/// 对原始输入行做精确匹配，未识别的输入归入 `Invalid`，
/// 由会话循环提示后重试。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    View,
    Remove,
    Exit,
    Invalid,
}

impl MenuChoice {
    /// 解析用户输入的选择行（不做 trim，带空白视为无效）
    pub fn parse(line: &str) -> Self {
        match line {
            "1" => Self::Add,
            "2" => Self::View,
            "3" => Self::Remove,
            "4" => Self::Exit,
            _ => Self::Invalid,
        }
    }
}
