//! 日志器实现

use crate::record::{Level, Record};
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::{Arc, Mutex};

/// 日志输出目标 trait
pub trait LogSink: Send + Sync {
    /// 写入日志记录
    fn write(&self, record: &Record);
}

/// 日志器配置和状态
pub struct Logger {
    /// 当前日志级别（原子存储）
    level: AtomicU8,
    /// 输出目标列表
    sinks: Mutex<Vec<Box<dyn LogSink>>>,
}

impl Logger {
    /// 创建新的日志器
    pub fn new(level: Level) -> Arc<Self> {
        Arc::new(Logger {
            level: AtomicU8::new(level as u8),
            sinks: Mutex::new(Vec::new()),
        })
    }

    /// 添加输出目标
    pub fn with_sink<S: LogSink + 'static>(self: Arc<Self>, sink: S) -> Arc<Self> {
        self.add_sink(sink);
        self
    }

    /// 添加输出目标（共享引用版本）
    pub fn add_sink<S: LogSink + 'static>(&self, sink: S) {
        if let Ok(mut sinks) = self.sinks.lock() {
            sinks.push(Box::new(sink));
        }
    }

    /// 动态设置日志级别
    pub fn set_level(&self, level: Level) {
        self.level.store(level as u8, Ordering::Relaxed);
    }

    /// 获取当前日志级别
    pub fn level(&self) -> Level {
        Level::from_u8(self.level.load(Ordering::Relaxed)).unwrap_or(Level::Info)
    }

    /// 检查指定级别是否启用
    pub fn is_enabled(&self, level: Level) -> bool {
        level != Level::Off && level >= self.level()
    }

    /// 记录日志（宏的落点）
    #[inline(never)]
    pub fn log(&self, level: Level, target: &'static str, message: impl Into<String>) {
        if !self.is_enabled(level) {
            return;
        }

        let record = Record::new(level, target, message);
        if let Ok(sinks) = self.sinks.lock() {
            for sink in sinks.iter() {
                sink.write(&record);
            }
        }
    }

    /// 创建禁用日志的 no-op 日志器（库代码的默认值）
    pub fn noop() -> Arc<Self> {
        Self::new(Level::Off)
    }
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sink_count = self.sinks.lock().map(|s| s.len()).unwrap_or(0);
        f.debug_struct("Logger")
            .field("level", &self.level())
            .field("sinks", &sink_count)
            .finish()
    }
}

// 为 Arc<Logger> 实现 LogSink，支持链式日志器
impl LogSink for Arc<Logger> {
    fn write(&self, record: &Record) {
        self.log(record.level, record.target, record.message.clone());
    }
}

#[cfg(feature = "stderr")]
/// 标准错误 sink
pub struct StderrSink;

#[cfg(feature = "stderr")]
impl LogSink for StderrSink {
    fn write(&self, record: &Record) {
        eprintln!("{}", record.format());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LogRingBuffer;

    #[test]
    fn test_logger_creation() {
        let logger = Logger::new(Level::Debug);
        assert_eq!(logger.level(), Level::Debug);
        assert!(logger.is_enabled(Level::Debug));
        assert!(!logger.is_enabled(Level::Trace));
    }

    #[test]
    fn test_level_change() {
        let logger = Logger::new(Level::Info);
        assert!(!logger.is_enabled(Level::Debug));

        logger.set_level(Level::Debug);
        assert!(logger.is_enabled(Level::Debug));
    }

    #[test]
    fn test_noop_logger_drops_everything() {
        let logger = Logger::noop();
        assert!(!logger.is_enabled(Level::Error));
        // Off 本身不是可记录的级别
        assert!(!Logger::new(Level::Trace).is_enabled(Level::Off));
    }

    #[test]
    fn test_log_with_ring_buffer() {
        let ring = LogRingBuffer::new(100);
        let logger = Logger::new(Level::Debug).with_sink(ring.clone());

        logger.log(Level::Info, "test", "hello world");

        let records = ring.dump_records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].message, "hello world");
    }

    #[test]
    fn test_log_disabled_level() {
        let ring = LogRingBuffer::new(100);
        let logger = Logger::new(Level::Warn).with_sink(ring.clone());

        logger.log(Level::Debug, "test", "should not appear");
        assert_eq!(ring.len(), 0);

        logger.log(Level::Warn, "test", "should appear");
        assert_eq!(ring.len(), 1);
    }

    #[test]
    fn test_chained_logger() {
        let ring = LogRingBuffer::new(10);
        let inner = Logger::new(Level::Trace).with_sink(ring.clone());
        let outer = Logger::new(Level::Info).with_sink(inner);

        outer.log(Level::Debug, "test", "filtered by outer");
        outer.log(Level::Error, "test", "forwarded");

        let records = ring.dump_records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].message, "forwarded");
    }

    #[test]
    fn test_debug_format() {
        let logger = Logger::new(Level::Warn).with_sink(LogRingBuffer::new(1));
        let text = format!("{:?}", logger);
        assert!(text.contains("Warn"));
        assert!(text.contains("sinks: 1"));
    }
}
