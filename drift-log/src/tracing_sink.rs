//! 转发到 `tracing` 的 sink
//!
//! CLI 用 `tracing-subscriber` 决定输出格式与过滤，库代码仍只依赖显式 logger。

use crate::logger::LogSink;
use crate::record::{Level, Record};

/// 将每条记录作为 `tracing` 事件重新发出
///
/// `tracing` 的 target 必须是编译期常量，所以统一使用 `drift`，
/// 原始模块路径放在 `module` 字段里。
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn write(&self, record: &Record) {
        let module = record.target;
        let message = record.message.as_str();
        match record.level {
            Level::Trace => tracing::trace!(target: "drift", module, "{}", message),
            Level::Debug => tracing::debug!(target: "drift", module, "{}", message),
            Level::Info => tracing::info!(target: "drift", module, "{}", message),
            Level::Warn => tracing::warn!(target: "drift", module, "{}", message),
            Level::Error => tracing::error!(target: "drift", module, "{}", message),
            Level::Off => {}
        }
    }
}
