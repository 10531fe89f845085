//! drift-log - 结构化日志系统
//!
//! 为 Drift 扫描器设计的日志系统，特点：
//! - **显式传递**：无全局 logger，库代码通过 `Arc<Logger>` 接收日志器
//! - **惰性格式化**：级别未启用时不格式化消息
//! - **可捕获**：环形缓冲区保留最后 N 条日志，测试中用于断言
//! - **可桥接**：`tracing` feature 下将记录转发到 `tracing` 订阅者
//!
//! # 快速开始
//!
//! ```
//! use drift_log::{debug, Level, LogRingBuffer, Logger};
//!
//! let ring = LogRingBuffer::new(100);
//! let logger = Logger::new(Level::Debug).with_sink(ring.clone());
//! debug!(logger, "scanned {} tokens", 3);
//! assert_eq!(ring.len(), 1);
//! ```

mod logger;
mod macros;
mod record;
mod ring_buffer;

#[cfg(feature = "tracing")]
mod tracing_sink;

pub use logger::{LogSink, Logger};
pub use record::{Level, Record};
pub use ring_buffer::{LogRingBuffer, RingBufferStats};

#[cfg(feature = "stderr")]
pub use logger::StderrSink;

#[cfg(feature = "tracing")]
pub use tracing_sink::TracingSink;

// 宏通过 #[macro_export] 自动导出到 crate 根：
// trace!, debug!, info!, warn!, error!
