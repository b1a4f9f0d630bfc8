//! Sprig 统一错误类型定义
//!
//! 使用 `thiserror` 库提供统一的错误处理。可恢复的输入错误
//! （删除序号解析失败 / 越界）的 Display 文本即是发给用户的提示语。

use std::io;
use thiserror::Error;

/// Sprig 错误类型
#[derive(Debug, Error)]
pub enum SprigError {
    /// I/O 错误（终端读写）
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// 删除序号无法解析为整数
    #[error("Invalid input. Please enter a number.")]
    InvalidNumber,

    /// 删除序号超出任务列表范围
    #[error("Invalid task number.")]
    OutOfRange,
}

/// Sprig Result 类型别名
pub type Result<T> = std::result::Result<T, SprigError>;
