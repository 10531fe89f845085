//! 日志专用环形缓冲区

use crate::logger::LogSink;
use crate::record::Record;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// 环形缓冲区统计信息
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RingBufferStats {
    /// 当前记录数
    pub record_count: usize,
    /// 因缓冲区满而丢弃的记录数
    pub dropped_count: usize,
    /// 缓冲区容量
    pub capacity: usize,
}

/// 日志环形缓冲区
///
/// 当缓冲区满时，新记录会覆盖最旧的记录（FIFO）
pub struct LogRingBuffer {
    inner: Mutex<VecDeque<Record>>,
    capacity: usize,
    dropped: AtomicUsize,
}

impl LogRingBuffer {
    /// 创建新的环形缓冲区
    pub fn new(capacity: usize) -> Arc<Self> {
        Arc::new(LogRingBuffer {
            inner: Mutex::new(VecDeque::with_capacity(capacity)),
            capacity,
            dropped: AtomicUsize::new(0),
        })
    }

    /// 写入记录（满了则覆盖旧数据）
    fn push(&self, record: Record) {
        if self.capacity == 0 {
            self.dropped.fetch_add(1, Ordering::Relaxed);
            return;
        }
        if let Ok(mut inner) = self.inner.lock() {
            if inner.len() >= self.capacity {
                inner.pop_front();
                self.dropped.fetch_add(1, Ordering::Relaxed);
            }
            inner.push_back(record);
        }
    }

    /// 获取当前所有记录（按时间顺序）
    pub fn dump_records(&self) -> Vec<Record> {
        self.inner
            .lock()
            .map(|inner| inner.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// 将日志转储到字符串
    pub fn dump(&self) -> String {
        self.dump_records()
            .iter()
            .map(Record::format)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// 清空缓冲区
    pub fn clear(&self) {
        if let Ok(mut inner) = self.inner.lock() {
            inner.clear();
        }
        self.dropped.store(0, Ordering::Relaxed);
    }

    /// 获取统计信息
    pub fn stats(&self) -> RingBufferStats {
        RingBufferStats {
            record_count: self.len(),
            dropped_count: self.dropped_count(),
            capacity: self.capacity,
        }
    }

    /// 获取当前记录数
    pub fn len(&self) -> usize {
        self.inner.lock().map(|inner| inner.len()).unwrap_or(0)
    }

    /// 检查是否为空
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// 获取容量
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// 获取已丢弃的记录数
    pub fn dropped_count(&self) -> usize {
        self.dropped.load(Ordering::Relaxed)
    }
}

impl LogSink for Arc<LogRingBuffer> {
    fn write(&self, record: &Record) {
        self.push(record.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Level, Logger};

    #[test]
    fn test_ring_buffer_overwrites_oldest() {
        let ring = LogRingBuffer::new(2);
        let logger = Logger::new(Level::Trace).with_sink(ring.clone());

        logger.log(Level::Info, "test", "first");
        logger.log(Level::Info, "test", "second");
        logger.log(Level::Info, "test", "third");

        let messages: Vec<String> = ring.dump_records().into_iter().map(|r| r.message).collect();
        assert_eq!(messages, vec!["second", "third"]);
        assert_eq!(ring.dropped_count(), 1);
    }

    #[test]
    fn test_ring_buffer_stats_and_clear() {
        let ring = LogRingBuffer::new(8);
        let logger = Logger::new(Level::Trace).with_sink(ring.clone());
        logger.log(Level::Debug, "test", "a");
        logger.log(Level::Debug, "test", "b");

        assert_eq!(
            ring.stats(),
            RingBufferStats {
                record_count: 2,
                dropped_count: 0,
                capacity: 8,
            }
        );

        ring.clear();
        assert!(ring.is_empty());
        assert_eq!(ring.capacity(), 8);
    }

    #[test]
    fn test_zero_capacity_drops() {
        let ring = LogRingBuffer::new(0);
        let logger = Logger::new(Level::Trace).with_sink(ring.clone());
        logger.log(Level::Error, "test", "lost");
        assert!(ring.is_empty());
        assert_eq!(ring.dropped_count(), 1);
    }

    #[test]
    fn test_dump_joins_lines() {
        let ring = LogRingBuffer::new(8);
        let logger = Logger::new(Level::Trace).with_sink(ring.clone());
        logger.log(Level::Info, "drift::scan", "one");
        logger.log(Level::Warn, "drift::scan", "two");

        let dump = ring.dump();
        let lines: Vec<&str> = dump.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("INFO drift::scan: one"));
        assert!(lines[1].ends_with("WARN drift::scan: two"));
    }
}
