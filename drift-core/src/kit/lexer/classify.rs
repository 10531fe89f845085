//! 码点分类谓词
//!
//! 纯函数，不依赖游标状态。注释起始需要两个码点的预读。

/// 空白：空格、制表符、回车、换行
#[inline]
pub fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n')
}

/// ident 字符：除空白外的任意码点（数字、标点、各种文字）
///
/// 流末尾由调用方以 `None` 表达，不会进入这里。
#[inline]
pub fn is_ident(c: char) -> bool {
    !is_whitespace(c)
}

/// 注释风格
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentStyle {
    /// `// ...`
    Line,
    /// `-- ...`
    Sql,
    /// `/* ... */`
    Block,
}

impl CommentStyle {
    /// 是否到行尾为止
    pub fn is_line(self) -> bool {
        matches!(self, CommentStyle::Line | CommentStyle::Sql)
    }

    /// 起始标记
    pub fn opener(self) -> &'static str {
        match self {
            CommentStyle::Line => "//",
            CommentStyle::Sql => "--",
            CommentStyle::Block => "/*",
        }
    }
}

/// 识别预读窗口开头的注释起始
///
/// 窗口不足两个码点时一律返回 `None`：末尾孤立的 `/` 或 `-` 是 ident 内容。
pub fn comment_style(lookahead: &[char]) -> Option<CommentStyle> {
    match lookahead {
        ['/', '/', ..] => Some(CommentStyle::Line),
        ['/', '*', ..] => Some(CommentStyle::Block),
        ['-', '-', ..] => Some(CommentStyle::Sql),
        _ => None,
    }
}

#[inline]
pub fn is_comment_start(lookahead: &[char]) -> bool {
    comment_style(lookahead).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitespace() {
        for c in [' ', '\t', '\r', '\n'] {
            assert!(is_whitespace(c));
            assert!(!is_ident(c));
        }
        // 其他 Unicode 空白不算
        assert!(!is_whitespace('\u{00A0}'));
        assert!(!is_whitespace('\u{3000}'));
    }

    #[test]
    fn test_ident() {
        for c in ['a', '0', ';', '-', '/', '风', 'é', '\u{00A0}'] {
            assert!(is_ident(c), "{c:?} should be ident");
        }
    }

    #[test]
    fn test_comment_openers() {
        assert_eq!(comment_style(&['/', '/']), Some(CommentStyle::Line));
        assert_eq!(comment_style(&['-', '-', 'x']), Some(CommentStyle::Sql));
        assert_eq!(comment_style(&['/', '*']), Some(CommentStyle::Block));
        assert!(!is_comment_start(&['/', '-']));
        assert!(!is_comment_start(&['*', '/']));
        assert!(!is_comment_start(&['-', '/']));
    }

    #[test]
    fn test_single_rune_is_never_comment() {
        assert!(!is_comment_start(&['/']));
        assert!(!is_comment_start(&['-']));
        assert!(!is_comment_start(&[]));
    }

    #[test]
    fn test_style_helpers() {
        assert!(CommentStyle::Line.is_line());
        assert!(CommentStyle::Sql.is_line());
        assert!(!CommentStyle::Block.is_line());
        assert_eq!(CommentStyle::Sql.opener(), "--");
    }
}
