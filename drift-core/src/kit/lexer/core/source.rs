//! 源缓冲区
//!
//! 构造时一次性把字节解码为码点序列，之后只读。
//! 同时记录每个换行符的码点偏移，`seek` 用二分查找恢复行号。

use crate::kit::lexer::error::{ScanError, ScanResult};

/// 已解码的源文本
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SourceBuffer {
    runes: Vec<char>,
    /// 所有 `'\n'` 的码点偏移，升序
    newlines: Vec<usize>,
}

impl SourceBuffer {
    /// 从字符串构造
    pub fn new(text: &str) -> Self {
        let runes: Vec<char> = text.chars().collect();
        let newlines = runes
            .iter()
            .enumerate()
            .filter_map(|(i, &c)| (c == '\n').then_some(i))
            .collect();
        Self { runes, newlines }
    }

    /// 从字节构造，非法 UTF-8 返回首个非法序列的字节偏移
    pub fn from_bytes(bytes: &[u8]) -> ScanResult<Self> {
        let text = std::str::from_utf8(bytes).map_err(|e| ScanError::Decode {
            byte_offset: e.valid_up_to(),
        })?;
        Ok(Self::new(text))
    }

    /// 码点数
    pub fn len(&self) -> usize {
        self.runes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.runes.is_empty()
    }

    /// 指定偏移处的码点
    pub fn get(&self, offset: usize) -> Option<char> {
        self.runes.get(offset).copied()
    }

    /// `[start, start + count)` 区间内实际存在的码点
    pub fn window(&self, start: usize, count: usize) -> &[char] {
        let start = start.min(self.runes.len());
        let end = start.saturating_add(count).min(self.runes.len());
        &self.runes[start..end]
    }

    pub fn runes(&self) -> &[char] {
        &self.runes
    }

    /// 整个缓冲区的换行数
    pub fn newline_count(&self) -> usize {
        self.newlines.len()
    }

    /// 消费了前 `offset` 个码点之后所在的行号（超出末尾按末尾计算）
    pub fn line_at(&self, offset: usize) -> usize {
        self.newlines.partition_point(|&nl| nl < offset) + 1
    }
}
