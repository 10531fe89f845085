//! 平台相关的输出

mod cli;

pub use cli::{print_error, print_tokens, render_json, render_text, OutputFormat};
