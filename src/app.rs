use std::io::{self, BufRead, Write};

use crate::error::{Result, SprigError};
use crate::menu::{self, MenuChoice};
use crate::store::TaskStore;

/// 会话状态
///
/// 持有任务列表，驱动 菜单渲染 → 读取选择 → 分发 的主循环。
/// 读写端以泛型注入：二进制里是锁定的 stdin/stdout，测试里是内存缓冲。
pub struct App {
    /// 任务列表（仅在本次会话内存活）
    store: TaskStore,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    /// 创建新会话（空任务列表）
    pub fn new() -> Self {
        Self {
            store: TaskStore::new(),
        }
    }

    /// 运行主循环，直到用户选择退出或输入结束
    ///
    /// 可恢复的输入错误在循环内提示并吞掉，只有写端 I/O 错误向外传播。
    pub fn run<R: BufRead, W: Write>(&mut self, reader: &mut R, writer: &mut W) -> io::Result<()> {
        loop {
            menu::render(writer)?;
            write!(writer, "Enter your choice (1-4): ")?;
            writer.flush()?;

            let Some(choice) = read_line(reader)? else {
                break; // EOF，静默结束会话
            };

            match MenuChoice::parse(&choice) {
                MenuChoice::Add => self.add_task(reader, writer)?,
                MenuChoice::View => self.view_tasks(writer)?,
                MenuChoice::Remove => self.remove_task(reader, writer)?,
                MenuChoice::Exit => {
                    writeln!(writer, "Exiting the To-Do List. Goodbye!")?;
                    break;
                }
                MenuChoice::Invalid => {
                    writeln!(writer, "Invalid choice. Please enter a number between 1 and 4.")?;
                }
            }
        }

        Ok(())
    }

    /// 添加任务：读一行文本原样入列（允许空串），回显确认
    fn add_task<R: BufRead, W: Write>(&mut self, reader: &mut R, writer: &mut W) -> io::Result<()> {
        write!(writer, "Enter the task: ")?;
        writer.flush()?;

        let Some(text) = read_line(reader)? else {
            return Ok(());
        };

        writeln!(writer, "Task '{}' added.", text)?;
        self.store.add(text);
        Ok(())
    }

    /// 查看任务：空列表提示，否则按保存顺序编号输出
    fn view_tasks<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writeln!(writer, "\n--- Your Tasks ---")?;

        if self.store.is_empty() {
            writeln!(writer, "You have no tasks.")?;
        } else {
            for (i, task) in self.store.iter().enumerate() {
                writeln!(writer, "{}. {}", i + 1, task)?;
            }
        }
        Ok(())
    }

    /// 删除任务：先展示当前列表，再读序号删除
    ///
    /// 列表为空时不再询问序号；解析失败 / 越界时提示后列表保持不变。
    fn remove_task<R: BufRead, W: Write>(
        &mut self,
        reader: &mut R,
        writer: &mut W,
    ) -> io::Result<()> {
        self.view_tasks(writer)?;

        if self.store.is_empty() {
            return Ok(());
        }

        write!(writer, "Enter the number of the task to remove: ")?;
        writer.flush()?;

        let Some(line) = read_line(reader)? else {
            return Ok(());
        };

        match parse_position(&line).and_then(|pos| self.store.remove(pos)) {
            Ok(removed) => writeln!(writer, "Task '{}' removed.", removed)?,
            Err(e) => writeln!(writer, "{}", e)?,
        }
        Ok(())
    }
}

/// 读取一行输入，去掉行尾换行符；EOF 返回 `None`
fn read_line<R: BufRead>(reader: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    Ok(Some(line))
}

/// 解析删除序号（忽略首尾空白，接受正负号）
fn parse_position(line: &str) -> Result<i64> {
    line.trim()
        .parse::<i64>()
        .map_err(|_| SprigError::InvalidNumber)
}
