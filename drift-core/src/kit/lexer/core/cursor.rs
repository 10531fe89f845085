//! 码点游标
//!
//! 在 [`SourceBuffer`] 上前进、预读和定位。流末尾用 `None` 表示，
//! 不占用码点取值空间。

use super::position::SourcePosition;
use super::source::SourceBuffer;
use crate::kit::lexer::error::{ScanError, ScanResult};
use drift_config::SeekStrategy;

/// 预读结果
///
/// 剩余码点不足时只包含实际存在的部分，`is_eof()` 为真；
/// 非空的部分结果仍然是可用数据。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lookahead<'a> {
    runes: &'a [char],
    requested: usize,
}

impl<'a> Lookahead<'a> {
    pub fn runes(&self) -> &'a [char] {
        self.runes
    }

    pub fn first(&self) -> Option<char> {
        self.runes.first().copied()
    }

    pub fn len(&self) -> usize {
        self.runes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.runes.is_empty()
    }

    /// 是否在凑满请求数量之前遇到了流末尾
    pub fn is_eof(&self) -> bool {
        self.runes.len() < self.requested
    }

    pub fn to_text(&self) -> String {
        self.runes.iter().collect()
    }
}

/// 码点游标
#[derive(Debug, Clone)]
pub struct Cursor {
    source: SourceBuffer,
    position: SourcePosition,
    strategy: SeekStrategy,
}

impl Cursor {
    pub fn new(source: SourceBuffer) -> Self {
        Self::with_strategy(source, SeekStrategy::default())
    }

    pub fn with_strategy(source: SourceBuffer, strategy: SeekStrategy) -> Self {
        Self {
            source,
            position: SourcePosition::start(),
            strategy,
        }
    }

    pub fn source(&self) -> &SourceBuffer {
        &self.source
    }

    pub fn position(&self) -> SourcePosition {
        self.position
    }

    pub fn offset(&self) -> usize {
        self.position.offset
    }

    pub fn line(&self) -> usize {
        self.position.line
    }

    pub fn strategy(&self) -> SeekStrategy {
        self.strategy
    }

    pub fn is_eof(&self) -> bool {
        self.position.offset >= self.source.len()
    }

    /// 消费一个码点
    ///
    /// 读到换行时行号加一。到达末尾后反复调用都返回 `None`，状态不再变化。
    pub fn advance(&mut self) -> Option<char> {
        let c = self.source.get(self.position.offset)?;
        self.position.advance(c);
        Some(c)
    }

    /// 当前码点（不消费）
    pub fn current(&self) -> Option<char> {
        self.source.get(self.position.offset)
    }

    /// 预读接下来的 `count` 个码点，不移动游标
    ///
    /// `count == 0` 返回 [`ScanError::InvalidPeek`]。
    pub fn peek(&self, count: usize) -> ScanResult<Lookahead<'_>> {
        if count < 1 {
            return Err(ScanError::InvalidPeek { requested: count });
        }
        Ok(Lookahead {
            runes: self.source.window(self.position.offset, count),
            requested: count,
        })
    }

    /// 定位到绝对码点偏移
    ///
    /// 负偏移报错且不改变状态；超出末尾则停在末尾，行号为全文换行数加一。
    pub fn seek(&mut self, offset: i64) -> ScanResult<()> {
        if offset < 0 {
            return Err(ScanError::NegativeSeek { offset });
        }
        let target = usize::try_from(offset)
            .unwrap_or(usize::MAX)
            .min(self.source.len());

        self.position = match self.strategy {
            SeekStrategy::LineIndex => SourcePosition::new(target, self.source.line_at(target)),
            SeekStrategy::Replay => self.replay(target),
        };
        Ok(())
    }

    /// 从头重放到 `target`
    fn replay(&self, target: usize) -> SourcePosition {
        let mut position = SourcePosition::start();
        for &c in &self.source.runes()[..target] {
            position.advance(c);
        }
        position
    }
}
