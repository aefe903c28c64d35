// ============================================================================
// LogSimply - 日志宏
// ============================================================================
//
// 文件: src/macros.rs
// 职责: 可变参数日志宏定义
// 边界:
//   - ✅ 四个级别宏的语法定义
//   - ✅ 位置参数和命名字段的展开
//   - ❌ 不应包含格式化实现
//   - ❌ 不应包含输出写入逻辑
//
// ============================================================================
//
// 调用语法 (消息前的 `[..]` 为可选子标题，`;` 之后为命名字段):
//
//   log!(srv, "boot OK");
//   success!(srv, ["Net"] "client connected", "192.168.1.42");
//   warning!(auth, "passwd retry"; user = "bob", left = 2);
//   error!(auth, ["Net"] "timeout"; peer = "192.168.1.42");

/// 宏展开的公共出口，不直接使用
#[doc(hidden)]
#[macro_export]
macro_rules! __logsimply_line {
    ($lg:expr, $level:expr, $sub:expr, $msg:expr,
     [$($arg:expr),*], [$($key:ident = $val:expr),*]) => {
        ($lg).write_line(
            $level,
            ::core::convert::AsRef::<str>::as_ref(&$msg),
            $sub,
            &[$(&$arg as &dyn ::core::fmt::Display),*],
            &[$((::core::stringify!($key), &$val as &dyn ::core::fmt::Display)),*],
        )
    };
}

/// 普通日志宏 (无颜色)
#[macro_export]
macro_rules! log {
    ($lg:expr $(,)?) => {
        $crate::__logsimply_line!($lg, $crate::Level::Log,
            ::core::option::Option::None, "", [], [])
    };
    ($lg:expr, [$sub:expr] $msg:expr $(, $arg:expr)* $(; $($key:ident = $val:expr),+)?) => {
        $crate::__logsimply_line!($lg, $crate::Level::Log,
            ::core::option::Option::Some(::core::convert::AsRef::<str>::as_ref(&$sub)),
            $msg, [$($arg),*], [$($($key = $val),+)?])
    };
    ($lg:expr, $msg:expr $(, $arg:expr)* $(; $($key:ident = $val:expr),+)?) => {
        $crate::__logsimply_line!($lg, $crate::Level::Log,
            ::core::option::Option::None,
            $msg, [$($arg),*], [$($($key = $val),+)?])
    };
}

/// 成功日志宏 (绿色)
#[macro_export]
macro_rules! success {
    ($lg:expr $(,)?) => {
        $crate::__logsimply_line!($lg, $crate::Level::Success,
            ::core::option::Option::None, "", [], [])
    };
    ($lg:expr, [$sub:expr] $msg:expr $(, $arg:expr)* $(; $($key:ident = $val:expr),+)?) => {
        $crate::__logsimply_line!($lg, $crate::Level::Success,
            ::core::option::Option::Some(::core::convert::AsRef::<str>::as_ref(&$sub)),
            $msg, [$($arg),*], [$($($key = $val),+)?])
    };
    ($lg:expr, $msg:expr $(, $arg:expr)* $(; $($key:ident = $val:expr),+)?) => {
        $crate::__logsimply_line!($lg, $crate::Level::Success,
            ::core::option::Option::None,
            $msg, [$($arg),*], [$($($key = $val),+)?])
    };
}

/// 警告日志宏 (黄色)
#[macro_export]
macro_rules! warning {
    ($lg:expr $(,)?) => {
        $crate::__logsimply_line!($lg, $crate::Level::Warning,
            ::core::option::Option::None, "", [], [])
    };
    ($lg:expr, [$sub:expr] $msg:expr $(, $arg:expr)* $(; $($key:ident = $val:expr),+)?) => {
        $crate::__logsimply_line!($lg, $crate::Level::Warning,
            ::core::option::Option::Some(::core::convert::AsRef::<str>::as_ref(&$sub)),
            $msg, [$($arg),*], [$($($key = $val),+)?])
    };
    ($lg:expr, $msg:expr $(, $arg:expr)* $(; $($key:ident = $val:expr),+)?) => {
        $crate::__logsimply_line!($lg, $crate::Level::Warning,
            ::core::option::Option::None,
            $msg, [$($arg),*], [$($($key = $val),+)?])
    };
}

/// 错误日志宏 (红色)
#[macro_export]
macro_rules! error {
    ($lg:expr $(,)?) => {
        $crate::__logsimply_line!($lg, $crate::Level::Error,
            ::core::option::Option::None, "", [], [])
    };
    ($lg:expr, [$sub:expr] $msg:expr $(, $arg:expr)* $(; $($key:ident = $val:expr),+)?) => {
        $crate::__logsimply_line!($lg, $crate::Level::Error,
            ::core::option::Option::Some(::core::convert::AsRef::<str>::as_ref(&$sub)),
            $msg, [$($arg),*], [$($($key = $val),+)?])
    };
    ($lg:expr, $msg:expr $(, $arg:expr)* $(; $($key:ident = $val:expr),+)?) => {
        $crate::__logsimply_line!($lg, $crate::Level::Error,
            ::core::option::Option::None,
            $msg, [$($arg),*], [$($($key = $val),+)?])
    };
}
