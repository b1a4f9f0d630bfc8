//! CLI 模块

use clap::Parser;

/// 命令行入口参数
///
/// 没有子命令：裸 `sprig` 直接进入交互会话，clap 负责
/// `--help` / `--version`。
#[derive(Parser)]
#[command(name = "sprig")]
#[command(version)]
#[command(about = "Menu-driven to-do list for the terminal")]
pub struct Cli {}
