//! 通用构件

pub mod lexer;
