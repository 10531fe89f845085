//! 扫描器底层：源缓冲区、位置与游标

mod cursor;
mod position;
mod source;

pub use cursor::{Cursor, Lookahead};
pub use position::SourcePosition;
pub use source::SourceBuffer;
