use std::cell::RefCell;
use std::fmt::Display;

use logsimply::{error, log, success, warning, Level, Logger};

/// 捕获日志行的测试替身，与 `Logger::write_line` 同签名，
/// 宏展开对其同样适用。
struct Capture {
    inner: Logger,
    lines: RefCell<Vec<String>>,
}

impl Capture {
    fn new(header: &str) -> Self {
        Self {
            inner: Logger::new(header),
            lines: RefCell::new(Vec::new()),
        }
    }

    fn write_line(
        &self,
        level: Level,
        msg: &str,
        subheader: Option<&str>,
        args: &[&dyn Display],
        fields: &[(&str, &dyn Display)],
    ) {
        let line = self.inner.render_line(level, msg, subheader, args, fields);
        self.lines.borrow_mut().push(line);
    }

    fn single_line(&self) -> String {
        let lines = self.lines.borrow();
        assert_eq!(lines.len(), 1);
        lines[0].clone()
    }
}

#[test]
fn test_scenario_plain_log() {
    let srv = Capture::new("Srv");
    log!(srv, "boot OK");
    assert_eq!(srv.single_line(), "[Srv] boot OK\x1b[0m\n");
}

#[test]
fn test_scenario_success_with_subheader_and_arg() {
    let srv = Capture::new("Srv");
    success!(srv, ["Net"] "client connected", "192.168.1.42");
    assert_eq!(
        srv.single_line(),
        "\x1b[32m[Srv][Net] client connected 192.168.1.42\x1b[0m\n"
    );
}

#[test]
fn test_scenario_warning_with_fields() {
    let auth = Capture::new("Auth");
    warning!(auth, "passwd retry"; user = "bob", left = 2);
    assert_eq!(
        auth.single_line(),
        "\x1b[33m[Auth] passwd retry | user=bob | left=2\x1b[0m\n"
    );
}

#[test]
fn test_scenario_error_with_fields() {
    let auth = Capture::new("Auth");
    error!(auth, "account lock"; user = "eve", reason = "too many retries");
    assert_eq!(
        auth.single_line(),
        "\x1b[31m[Auth] account lock | user=eve | reason=too many retries\x1b[0m\n"
    );
}

#[test]
fn test_subheader_with_positional_args() {
    let srv = Capture::new("Srv");
    warning!(srv, ["Net"] "latency", 240, "ms");
    assert_eq!(srv.single_line(), "\x1b[33m[Srv][Net] latency 240 ms\x1b[0m\n");
}

#[test]
fn test_subheader_with_fields() {
    let srv = Capture::new("Srv");
    error!(srv, ["Net"] "timeout"; peer = "192.168.1.42");
    assert_eq!(
        srv.single_line(),
        "\x1b[31m[Srv][Net] timeout | peer=192.168.1.42\x1b[0m\n"
    );
}

#[test]
fn test_bare_macro_logs_empty_message() {
    let srv = Capture::new("Srv");
    log!(srv);
    assert_eq!(srv.single_line(), "[Srv] \x1b[0m\n");
}

#[test]
fn test_mixed_arg_types() {
    let srv = Capture::new("Srv");
    log!(srv, "stats", 1, 2.5, true; pid = 42);
    assert_eq!(srv.single_line(), "[Srv] stats 1 2.5 true | pid=42\x1b[0m\n");
}

#[test]
fn test_every_line_starts_with_color_and_prefix() {
    for (level, color) in [
        (Level::Log, ""),
        (Level::Success, "\x1b[32m"),
        (Level::Warning, "\x1b[33m"),
        (Level::Error, "\x1b[31m"),
    ] {
        let logger = Logger::new("N");
        let line = logger.render_line(level, "msg", None, &[], &[]);
        assert!(line.starts_with(&format!("{}[N]", color)));
    }
}

#[test]
fn test_every_line_ends_with_reset_and_newline() {
    for level in [Level::Log, Level::Success, Level::Warning, Level::Error] {
        let logger = Logger::new("N");
        let line = logger.render_line(level, "msg", None, &[&1], &[("k", &"v")]);
        assert!(line.ends_with("\x1b[0m\n"));
        // 行内无多余换行
        assert_eq!(line.matches('\n').count(), 1);
    }
}

#[test]
fn test_identical_calls_render_identical_lines() {
    let auth = Capture::new("Auth");
    warning!(auth, "passwd retry"; user = "bob", left = 2);
    warning!(auth, "passwd retry"; user = "bob", left = 2);
    let lines = auth.lines.borrow();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], lines[1]);
}

#[test]
fn test_methods_message_only_fast_path() {
    // 便捷方法与完整形式渲染一致
    let logger = Logger::new("Srv");
    assert_eq!(
        logger.render_line(Level::Success, "up", None, &[], &[]),
        "\x1b[32m[Srv] up\x1b[0m\n"
    );
}

#[test]
fn test_default_logger_header() {
    let logger = Logger::default();
    assert_eq!(
        logger.render_line(Level::Log, "hi", None, &[], &[]),
        "[Default] hi\x1b[0m\n"
    );
}

#[test]
fn test_string_subheader_expression() {
    let srv = Capture::new("Srv");
    let section = String::from("Net");
    success!(srv, [section] "up");
    assert_eq!(srv.single_line(), "\x1b[32m[Srv][Net] up\x1b[0m\n");
}
