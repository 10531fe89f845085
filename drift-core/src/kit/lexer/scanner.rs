//! 变更日志扫描器
//!
//! 在 [`Cursor`] 之上组合三个片段扫描器（空白、ident、注释），
//! 以及跳过空白和注释、只产出 ident 的分词循环。

use super::classify::{comment_style, is_ident, is_whitespace, CommentStyle};
use super::core::{Cursor, Lookahead, SourceBuffer, SourcePosition};
use super::error::{ScanError, ScanResult};
use super::token::{Token, TokenKind};
use drift_config::{Phase, ScannerConfig};
use drift_log::{debug, trace, warn, Logger};
use std::iter::FusedIterator;
use std::sync::Arc;

/// 分类判断所需的预读长度
const LOOKAHEAD: usize = 2;

const TARGET: &str = Phase::Scan.target();

/// 变更日志扫描器
///
/// 持有已解码的缓冲区和游标，单一所有者使用。
#[derive(Debug)]
pub struct Scanner {
    cursor: Cursor,
    logger: Arc<Logger>,
}

impl Scanner {
    /// 以默认配置从字节构造
    pub fn new(bytes: &[u8]) -> ScanResult<Self> {
        Self::with_config(bytes, ScannerConfig::default(), Logger::noop())
    }

    /// 从字节构造，非法 UTF-8 立即报错
    pub fn with_config(
        bytes: &[u8],
        config: ScannerConfig,
        logger: Arc<Logger>,
    ) -> ScanResult<Self> {
        let source = match SourceBuffer::from_bytes(bytes) {
            Ok(source) => source,
            Err(e) => {
                warn!(logger, target: TARGET, "Rejected input: {}", e);
                return Err(e);
            }
        };
        Ok(Self::from_source(source, config, logger))
    }

    /// 从已知合法的文本构造
    pub fn from_text(text: &str) -> Self {
        Self::from_source(
            SourceBuffer::new(text),
            ScannerConfig::default(),
            Logger::noop(),
        )
    }

    pub fn from_source(source: SourceBuffer, config: ScannerConfig, logger: Arc<Logger>) -> Self {
        debug!(
            logger,
            target: TARGET,
            "Scanner created: {} runes, {} lines, seek strategy {:?}",
            source.len(),
            source.newline_count() + 1,
            config.seek_strategy
        );
        Self {
            cursor: Cursor::with_strategy(source, config.seek_strategy),
            logger,
        }
    }

    pub fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    pub fn position(&self) -> SourcePosition {
        self.cursor.position()
    }

    pub fn offset(&self) -> usize {
        self.cursor.offset()
    }

    pub fn line(&self) -> usize {
        self.cursor.line()
    }

    // ==================== 游标操作 ====================

    /// 消费一个码点，流末尾返回 `None`
    pub fn advance(&mut self) -> Option<char> {
        self.cursor.advance()
    }

    /// 非破坏性预读
    pub fn peek(&self, count: usize) -> ScanResult<Lookahead<'_>> {
        self.cursor.peek(count).inspect_err(|e| {
            warn!(self.logger, target: TARGET, "Rejected peek: {}", e);
        })
    }

    /// 定位到绝对码点偏移
    pub fn seek(&mut self, offset: i64) -> ScanResult<()> {
        match self.cursor.seek(offset) {
            Ok(()) => {
                debug!(
                    self.logger,
                    target: TARGET,
                    "Seek to {} landed at {}",
                    offset,
                    self.cursor.position()
                );
                Ok(())
            }
            Err(e) => {
                warn!(self.logger, target: TARGET, "Rejected seek: {}", e);
                Err(e)
            }
        }
    }

    /// 分类用的两码点窗口
    fn window(&self) -> &[char] {
        self.cursor.source().window(self.cursor.offset(), LOOKAHEAD)
    }

    // ==================== 片段扫描器 ====================

    /// 消费连续空白
    pub fn scan_for_whitespace(&mut self) -> Token {
        let start = self.cursor.position();
        let mut text = String::new();
        while let Some(c) = self.cursor.current().filter(|&c| is_whitespace(c)) {
            self.cursor.advance();
            text.push(c);
        }
        self.finish(TokenKind::Whitespace, text, start)
    }

    /// 消费连续 ident 字符，遇到注释起始即停止
    ///
    /// 每消费一个码点前都重新检查两码点窗口，所以 `foo--bar` 只得到 `foo`。
    pub fn scan_for_ident(&mut self) -> Token {
        let start = self.cursor.position();
        let mut text = String::new();
        loop {
            let window = self.window();
            let c = match window.first() {
                Some(&c) if is_ident(c) && comment_style(window).is_none() => c,
                _ => break,
            };
            self.cursor.advance();
            text.push(c);
        }
        self.finish(TokenKind::Ident, text, start)
    }

    /// 消费一个注释
    ///
    /// - 行注释（`//`、`--`）停在换行符之前，换行不属于注释
    /// - 块注释消费到最后两个码点为 `*/` 为止（含起始标记），未闭合则到流末尾
    ///
    /// 当前位置不是注释起始时返回空注释。
    pub fn scan_for_comment(&mut self) -> Token {
        let start = self.cursor.position();
        let text = match comment_style(self.window()) {
            Some(style) if style.is_line() => self.consume_line_comment(),
            Some(CommentStyle::Block) => self.consume_block_comment(),
            _ => String::new(),
        };
        self.finish(TokenKind::Comment, text, start)
    }

    fn consume_line_comment(&mut self) -> String {
        let mut text = String::new();
        while let Some(c) = self.cursor.current().filter(|&c| c != '\n') {
            self.cursor.advance();
            text.push(c);
        }
        text
    }

    fn consume_block_comment(&mut self) -> String {
        let mut text = String::with_capacity(4);
        // 起始的 `/*`
        for _ in 0..LOOKAHEAD {
            if let Some(c) = self.cursor.advance() {
                text.push(c);
            }
        }
        // 只看最后消费的两个码点，起始的 `*` 也算在内：`/*/` 是完整注释
        let mut prev = text.chars().last();
        while let Some(c) = self.cursor.advance() {
            text.push(c);
            if prev == Some('*') && c == '/' {
                return text;
            }
            prev = Some(c);
        }
        trace!(
            self.logger,
            target: TARGET,
            "Unterminated block comment ran to end of input"
        );
        text
    }

    fn finish(&self, kind: TokenKind, text: String, start: SourcePosition) -> Token {
        trace!(
            self.logger,
            target: TARGET,
            "Scanned {} at {} ({} runes)",
            kind,
            start,
            self.cursor.offset() - start.offset
        );
        Token::new(kind, text, start)
    }

    // ==================== 分词循环 ====================

    /// 是否还有未消费的码点（不报错）
    pub fn has_more_tokens(&self) -> bool {
        !self.cursor.is_eof()
    }

    /// 下一个 ident
    ///
    /// 跳过空白和注释；流末尾返回 `Ok(None)`，不是错误。
    pub fn next_token(&mut self) -> ScanResult<Option<Token>> {
        loop {
            let lookahead = self.peek(LOOKAHEAD)?;
            let Some(first) = lookahead.first() else {
                trace!(
                    self.logger,
                    target: TARGET,
                    "End of input at {}",
                    self.cursor.position()
                );
                return Ok(None);
            };

            if is_whitespace(first) {
                self.scan_for_whitespace();
                continue;
            }
            if comment_style(lookahead.runes()).is_some() {
                self.scan_for_comment();
                continue;
            }

            let token = self.scan_for_ident();
            debug!(self.logger, target: TARGET, "Token {}", token);
            return Ok(Some(token));
        }
    }

    /// 下一个片段（包括空白和注释）
    ///
    /// 依次产出的片段首尾相接，拼接后恰好还原从当前位置到末尾的文本。
    pub fn next_segment(&mut self) -> Option<Token> {
        let window = self.window();
        let first = *window.first()?;
        let token = if is_whitespace(first) {
            self.scan_for_whitespace()
        } else if comment_style(window).is_some() {
            self.scan_for_comment()
        } else {
            self.scan_for_ident()
        };
        debug!(self.logger, target: TARGET, "Segment {}", token);
        Some(token)
    }

    /// 以迭代器形式产出 ident
    pub fn tokens(&mut self) -> Tokens<'_> {
        Tokens {
            scanner: self,
            done: false,
        }
    }

    /// 以迭代器形式产出全部片段
    pub fn segments(&mut self) -> Segments<'_> {
        Segments { scanner: self }
    }
}

/// [`Scanner::tokens`] 返回的迭代器，出错后不再产出
#[derive(Debug)]
pub struct Tokens<'a> {
    scanner: &'a mut Scanner,
    done: bool,
}

impl Iterator for Tokens<'_> {
    type Item = Result<Token, ScanError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.scanner.next_token() {
            Ok(Some(token)) => Some(Ok(token)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

impl FusedIterator for Tokens<'_> {}

/// [`Scanner::segments`] 返回的迭代器
#[derive(Debug)]
pub struct Segments<'a> {
    scanner: &'a mut Scanner,
}

impl Iterator for Segments<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        self.scanner.next_segment()
    }
}

impl FusedIterator for Segments<'_> {}
