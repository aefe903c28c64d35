// ============================================================================
// LogSimply - 示例与基准驱动
// ============================================================================
//
// 文件: src/main.rs
// 职责: 示例输出展示和简单基准测试
// 边界:
//   - ✅ 命令行参数定义和解析
//   - ✅ 示例用例输出
//   - ✅ 重复执行计时
//   - ❌ 不应包含日志实现逻辑
//
// ============================================================================

use std::time::Instant;

use clap::Parser;

use logsimply::{error, log, success, warning, Logger};

/// LogSimply - Lightweight ANSI console logger
#[derive(Debug, Parser)]
#[command(name = "logsimply-demo")]
#[command(about = "Showcase and benchmark driver for the logsimply logger")]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Cli {
    /// 重复执行用例集的次数 (计时基准，0 表示跳过)
    #[arg(short, long, default_value_t = 0)]
    repeat: u64,

    /// 跳过示例输出
    #[arg(long)]
    no_examples: bool,
}

/// 固定用例集 (每次调用输出 8 行)
fn run_cases() {
    let srv = Logger::new("Srv");
    log!(srv, "boot OK");
    success!(srv, ["Net"] "client connected", "192.168.1.42");
    warning!(srv, ["Net"] "latency", 240, "ms");
    error!(srv, ["Net"] "timeout"; peer = "192.168.1.42");

    let auth = Logger::new("Auth");
    log!(auth, "login"; user = "alice");
    success!(auth, "jwt issued"; user = "alice");
    warning!(auth, "passwd retry"; user = "bob", left = 2);
    error!(auth, "account lock"; user = "eve", reason = "too many retries");
}

fn main() {
    let cli = Cli::parse();

    if !cli.no_examples {
        println!("\n== Examples ==\n");
        run_cases();
    }

    if cli.repeat > 0 {
        let start = Instant::now();
        for _ in 0..cli.repeat {
            run_cases();
        }
        let duration = start.elapsed();
        println!(
            "\n== Benchmark: {} lines in {:.3?} ==",
            cli.repeat * 8,
            duration
        );
    }
}
