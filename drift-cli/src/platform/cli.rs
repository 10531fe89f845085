//! CLI 格式化输出
//!
//! token 列表的文本/JSON 渲染，以及命令行友好的错误显示。

use clap::ValueEnum;
use drift_api::{DriftError, ScanOutput, Token};
use std::fmt::Write as _;

/// token 输出格式
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// 每行一个 token：`line:offset  KIND  "text"`
    #[default]
    Text,
    /// `{kind, offset, line, text}` 数组
    Json,
}

/// 文本格式
pub fn render_text(tokens: &[Token]) -> String {
    let mut out = String::new();
    for token in tokens {
        // String 的 fmt::Write 不会失败
        let _ = writeln!(
            out,
            "{}:{}  {}  {:?}",
            token.line(),
            token.offset(),
            token.kind,
            token.text
        );
    }
    out
}

/// JSON 格式
pub fn render_json(tokens: &[Token]) -> Result<String, DriftError> {
    serde_json::to_string_pretty(tokens)
        .map_err(|e| DriftError::Config(format!("failed to serialize tokens: {}", e)))
}

/// 把扫描结果写到 stdout
pub fn print_tokens(output: &ScanOutput, format: OutputFormat) -> Result<(), DriftError> {
    match format {
        OutputFormat::Text => print!("{}", render_text(&output.tokens)),
        OutputFormat::Json => println!("{}", render_json(&output.tokens)?),
    }
    Ok(())
}

/// 打印错误到 stderr
pub fn print_error(e: &DriftError) {
    let report = e.to_report();
    eprintln!("{}", report);
    if let Some(offset) = report.byte_offset {
        eprintln!("  --> byte {}", offset);
    }
}
