// ============================================================================
// LogSimply - 日志核心
// ============================================================================
//
// 文件: src/logger.rs
// 职责: 日志行组装和标准输出写入
// 边界:
//   - ✅ 日志前缀管理
//   - ✅ 日志行格式化
//   - ✅ 单次原子写入标准输出
//   - ❌ 不应包含文件日志写入
//   - ❌ 不应包含级别过滤逻辑
//   - ❌ 不应包含日志内容生成
//   - ❌ 不应包含特定领域逻辑
//
// ============================================================================

use std::fmt::Display;

use crate::constants::DEFAULT_HEADER;
use crate::level::{ansi, Level};

/// 简单的控制台日志器
///
/// 构造后不可变，每个实例持有一个预计算的 `[名称]` 前缀。
/// 多个实例可在多线程中独立使用，无共享可变状态。
#[derive(Debug, Clone)]
pub struct Logger {
    /// 日志器名称
    header: String,
    /// 预计算的 `[名称]` 前缀，避免每次调用重新拼接
    prefix: String,
}

impl Logger {
    /// 创建指定名称的日志器
    pub fn new<S: Into<String>>(header: S) -> Self {
        let header = header.into();
        let prefix = format!("[{}]", header);
        Self { header, prefix }
    }

    /// 日志器名称
    pub fn header(&self) -> &str {
        &self.header
    }

    /// 普通日志 (无颜色)
    pub fn log<S: AsRef<str>>(&self, msg: S) {
        self.write_line(Level::Log, msg.as_ref(), None, &[], &[]);
    }

    /// 成功日志 (绿色)
    pub fn success<S: AsRef<str>>(&self, msg: S) {
        self.write_line(Level::Success, msg.as_ref(), None, &[], &[]);
    }

    /// 警告日志 (黄色)
    pub fn warning<S: AsRef<str>>(&self, msg: S) {
        self.write_line(Level::Warning, msg.as_ref(), None, &[], &[]);
    }

    /// 错误日志 (红色)
    pub fn error<S: AsRef<str>>(&self, msg: S) {
        self.write_line(Level::Error, msg.as_ref(), None, &[], &[]);
    }

    /// 完整形式的日志写入
    ///
    /// 一次调用产生恰好一行输出。整行先组装成字符串再一次性写出，
    /// 写入期间持有 stdout 锁，并发调用不会出现半行交错。
    /// `log!` 等宏展开到这里。
    pub fn write_line(
        &self,
        level: Level,
        msg: &str,
        subheader: Option<&str>,
        args: &[&dyn Display],
        fields: &[(&str, &dyn Display)],
    ) {
        let line = self.render_line(level, msg, subheader, args, fields);
        print!("{}", line);
    }

    /// 组装一行日志 (含颜色、重置码和换行)，不执行写入
    pub fn render_line(
        &self,
        level: Level,
        msg: &str,
        subheader: Option<&str>,
        args: &[&dyn Display],
        fields: &[(&str, &dyn Display)],
    ) -> String {
        let mut line = String::with_capacity(self.prefix.len() + msg.len() + 16);

        // 行首: 颜色 + [名称] + 可选 [子标题] + 空格
        line.push_str(level.color());
        line.push_str(&self.prefix);
        match subheader {
            // 空子标题视为未提供
            Some(sub) if !sub.is_empty() => {
                line.push('[');
                line.push_str(sub);
                line.push(']');
            }
            _ => {}
        }
        line.push(' ');

        // 行体: 消息、位置参数、命名字段，按调用顺序以单个空格连接
        line.push_str(msg);
        for arg in args {
            line.push(' ');
            line.push_str(&arg.to_string());
        }
        for (key, value) in fields {
            line.push_str(" | ");
            line.push_str(key);
            line.push('=');
            line.push_str(&value.to_string());
        }

        line.push_str(ansi::RESET);
        line.push('\n');
        line
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(DEFAULT_HEADER)
    }
}
