//! Drift 变更日志词法扫描器
//!
//! 把变更日志文本切分为三类片段：
//! - 空白（空格、制表符、回车、换行）
//! - 注释（`//`、`--` 行注释，`/* */` 块注释）
//! - ident（其余任意非空白的最长连续段）
//!
//! 设计要点：
//! - 位置以码点计数（不是字节），行号 1-based
//! - 预读不移动游标，`seek` 后行号与内容保持一致
//! - 分词循环跳过空白和注释，只产出 ident

pub mod classify;
pub mod core;
pub mod error;
pub mod scanner;
pub mod token;

pub use classify::{comment_style, is_comment_start, is_ident, is_whitespace, CommentStyle};
pub use self::core::{Cursor, Lookahead, SourceBuffer, SourcePosition};
pub use error::{ScanError, ScanResult};
pub use scanner::{Scanner, Segments, Tokens};
pub use token::{Token, TokenKind};
