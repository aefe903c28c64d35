// ============================================================================
// LogSimply - 库入口
// ============================================================================
//
// 文件: src/lib.rs
// 职责: 模块声明和常用类型导出
// 边界:
//   - ✅ 子模块声明
//   - ✅ 常用类型重新导出
//   - ❌ 不应包含具体实现逻辑
//
// ============================================================================

//! 轻量级 ANSI 控制台日志工具
//!
//! 面向交互式服务开发期的低开销诊断输出: 带级别、带颜色的单行日志,
//! 写入标准输出。每行由 `[名称]` 前缀、可选 `[子标题]`、消息、
//! 位置参数和 `| key=value` 字段组成。
//!
//! ```
//! use logsimply::{success, warning, Logger};
//!
//! let srv = Logger::new("Srv");
//! srv.log("boot OK");
//! success!(srv, ["Net"] "client connected", "192.168.1.42");
//!
//! let auth = Logger::new("Auth");
//! warning!(auth, "passwd retry"; user = "bob", left = 2);
//! ```

pub mod constants;
pub mod level;
pub mod logger;
pub mod macros;

// 重新导出常用类型
pub use constants::DEFAULT_HEADER;
pub use level::{ansi, Level};
pub use logger::Logger;
