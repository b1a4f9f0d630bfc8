mod app;
mod cli;
mod error;
mod menu;
mod store;

use std::io;

use clap::Parser;

use app::App;
use cli::Cli;

fn main() -> io::Result<()> {
    // 解析命令行参数（处理 --help / --version）
    let _cli = Cli::parse();

    let stdin = io::stdin();
    let stdout = io::stdout();

    // 创建会话并运行主循环；选择 4 正常退出，返回码 0
    let mut app = App::new();
    app.run(&mut stdin.lock(), &mut stdout.lock())
}
