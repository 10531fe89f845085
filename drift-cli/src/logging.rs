//! CLI 日志系统初始化
//!
//! 基于 `tracing-subscriber` 输出，库代码的显式 logger 通过 `TracingSink` 桥接进来。

use clap::ValueEnum;
use drift_api::{log_level, LogLevel};
use drift_log::{Logger, TracingSink};
use std::io;
use std::sync::Arc;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{filter::Targets, fmt, layer::SubscriberExt, util::SubscriberInitExt, Layer};

/// 日志输出格式
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// 彩色格式化（开发使用）
    Pretty,
    /// 紧凑格式
    #[default]
    Compact,
    /// JSON 格式（工具集成）
    Json,
}

/// 将配置的日志级别映射为 `tracing` 过滤器
pub fn level_filter(level: LogLevel) -> LevelFilter {
    match level {
        LogLevel::Trace => LevelFilter::TRACE,
        LogLevel::Debug => LevelFilter::DEBUG,
        LogLevel::Info => LevelFilter::INFO,
        LogLevel::Warn => LevelFilter::WARN,
        LogLevel::Error => LevelFilter::ERROR,
        LogLevel::Silent => LevelFilter::OFF,
    }
}

/// 安装订阅者，返回桥接到它的库 logger
///
/// 日志写到 stderr，stdout 留给 token 输出。
pub fn init(level: LogLevel, format: LogFormat) -> Arc<Logger> {
    let targets = Targets::new()
        .with_default(LevelFilter::OFF)
        .with_target("drift", level_filter(level));

    let layer = create_format_layer(format, io::stderr).with_filter(targets);
    // 已有全局订阅者时（例如测试里）保留原来的
    let _ = tracing_subscriber::registry().with(layer).try_init();

    Logger::new(log_level(level)).with_sink(TracingSink)
}

/// Create formatter layer based on format
fn create_format_layer<W, F>(
    format: LogFormat,
    make_writer: F,
) -> Box<dyn Layer<tracing_subscriber::Registry> + Send + Sync>
where
    W: io::Write + 'static,
    F: Fn() -> W + Send + Sync + 'static,
{
    match format {
        LogFormat::Pretty => fmt::layer()
            .pretty()
            .with_target(true)
            .with_timer(fmt::time::time())
            .with_writer(make_writer)
            .boxed(),
        LogFormat::Compact => fmt::layer()
            .compact()
            .with_target(false)
            .without_time()
            .with_writer(make_writer)
            .boxed(),
        LogFormat::Json => fmt::layer()
            .json()
            .with_target(true)
            .with_timer(fmt::time::time())
            .with_writer(make_writer)
            .boxed(),
    }
}
