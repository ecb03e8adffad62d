use tracing_subscriber::{EnvFilter, fmt};

/// 初始化日志系统
///
/// 支持通过 RUST_LOG 环境变量控制日志级别
/// 默认级别: postgen=warn，`--verbose` 时为 postgen=debug
///
/// 日志写到 stderr，stdout 只留给生成摘要。
///
/// 示例:
/// - RUST_LOG=postgen=trace postgen generate
pub fn init_logger(verbose: bool) {
    let default_directive = if verbose {
        "postgen=debug"
    } else {
        "postgen=warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .init();

    tracing::debug!("Logger initialized");
}
