//! 测试辅助工具
//!
//! 提供端到端测试的辅助函数

#![allow(dead_code)]

use drift::{scan_file, MemoryFileSystem, RunConfig, ScanOutput, Token, TokenKind};
use drift_log::{Level, LogRingBuffer, Logger};
use std::sync::Arc;

/// 放在内存文件系统里的示例变更日志
pub const CHANGELOG_PATH: &str = "/db/changelog.sql";

pub const CHANGELOG: &str = "\
--liquibase formatted sql

--+changeset alice:1
CREATE TABLE users (
    id INT PRIMARY KEY, -- surrogate key
    name VARCHAR(64)
);
--rollback DROP TABLE users;

/* seed data
   for local runs */
INSERT INTO users VALUES (1, '风雷');
";

/// 只含示例变更日志的文件系统
pub fn changelog_fs() -> MemoryFileSystem {
    MemoryFileSystem::with_files([(CHANGELOG_PATH, CHANGELOG.as_bytes().to_vec())])
}

/// 带环形缓冲区捕获的 logger
pub fn capturing_logger(level: Level) -> (Arc<Logger>, Arc<LogRingBuffer>) {
    let ring = LogRingBuffer::new(1024);
    let logger = Logger::new(level).with_sink(ring.clone());
    (logger, ring)
}

/// 扫描示例变更日志
pub fn scan_changelog(config: &RunConfig) -> ScanOutput {
    scan_file(CHANGELOG_PATH, &changelog_fs(), config).expect("sample changelog scans")
}

/// token 文本
pub fn texts(tokens: &[Token]) -> Vec<&str> {
    tokens.iter().map(|t| t.text.as_str()).collect()
}

/// 指定类别的 token 文本
pub fn texts_of(tokens: &[Token], kind: TokenKind) -> Vec<&str> {
    tokens
        .iter()
        .filter(|t| t.kind == kind)
        .map(|t| t.text.as_str())
        .collect()
}
