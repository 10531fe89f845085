//! Token 类型定义

use super::core::SourcePosition;
use serde::Serialize;
use std::fmt;

/// 片段类别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenKind {
    Whitespace,
    Comment,
    Ident,
}

impl TokenKind {
    pub fn as_str(self) -> &'static str {
        match self {
            TokenKind::Whitespace => "WHITESPACE",
            TokenKind::Comment => "COMMENT",
            TokenKind::Ident => "IDENT",
        }
    }

    /// 空白和注释，分词循环会跳过
    pub fn is_trivia(self) -> bool {
        !matches!(self, TokenKind::Ident)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 带位置的片段
///
/// `position` 是扫描开始前的游标位置。文本为空是合法结果，
/// 表示此处没有该类别的片段。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    #[serde(flatten)]
    pub position: SourcePosition,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, position: SourcePosition) -> Self {
        Self {
            kind,
            text: text.into(),
            position,
        }
    }

    pub fn offset(&self) -> usize {
        self.position.offset
    }

    pub fn line(&self) -> usize {
        self.position.line
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// 码点数（不是字节数）
    pub fn rune_count(&self) -> usize {
        self.text.chars().count()
    }

    pub fn runes(&self) -> Vec<char> {
        self.text.chars().collect()
    }

    /// 片段之后的码点偏移
    pub fn end_offset(&self) -> usize {
        self.position.offset + self.rune_count()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {:?}", self.position, self.kind, self.text)
    }
}
