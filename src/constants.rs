// ============================================================================
// LogSimply - 常量定义
// ============================================================================
//
// 文件: src/constants.rs
// 职责: 库级常量定义
// 边界:
//   - ✅ 默认值常量定义
//   - ❌ 不应包含动态配置
//   - ❌ 不应包含计算逻辑
//
// ============================================================================

/// 未指定名称时使用的默认日志头
pub const DEFAULT_HEADER: &str = "Default";
