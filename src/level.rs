// ============================================================================
// LogSimply - 日志级别与颜色
// ============================================================================
//
// 文件: src/level.rs
// 职责: 日志级别定义和终端颜色映射
// 边界:
//   - ✅ ANSI 颜色代码定义
//   - ✅ 日志级别枚举定义
//   - ✅ 级别到颜色的只读映射
//   - ❌ 不应包含日志格式化逻辑
//   - ❌ 不应包含输出写入逻辑
//   - ❌ 不应包含业务逻辑
//
// ============================================================================

use std::fmt;

/// ANSI 颜色代码
pub mod ansi {
    /// 重置颜色
    pub const RESET: &str = "\x1b[0m";

    /// 前景色
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
}

/// 日志级别
///
/// 映射关系在编译期固定，运行期只读，无需同步。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    /// 普通日志 (无颜色)
    Log,
    /// 成功日志 (绿色)
    Success,
    /// 警告日志 (黄色)
    Warning,
    /// 错误日志 (红色)
    Error,
}

impl Level {
    /// 级别对应的 ANSI 颜色代码
    pub const fn color(self) -> &'static str {
        match self {
            Level::Log => "",
            Level::Success => ansi::GREEN,
            Level::Warning => ansi::YELLOW,
            Level::Error => ansi::RED,
        }
    }

    /// 级别名称
    pub const fn name(self) -> &'static str {
        match self {
            Level::Log => "LOG",
            Level::Success => "SUCCESS",
            Level::Warning => "WARNING",
            Level::Error => "ERROR",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
