//! 日志宏实现
//!
//! 每个级别宏都有两种写法：
//! - `debug!(logger, "fmt", args..)`：target 为调用处的模块路径
//! - `debug!(logger, target: "drift::scan", "fmt", args..)`：显式 target

/// 记录 Trace 级别日志
#[macro_export]
macro_rules! trace {
    ($logger:expr, target: $target:expr, $($arg:tt)+) => {
        $crate::__log!($logger, $crate::Level::Trace, $target, $($arg)+)
    };
    ($logger:expr, $($arg:tt)+) => {
        $crate::__log!($logger, $crate::Level::Trace, ::std::module_path!(), $($arg)+)
    };
}

/// 记录 Debug 级别日志
#[macro_export]
macro_rules! debug {
    ($logger:expr, target: $target:expr, $($arg:tt)+) => {
        $crate::__log!($logger, $crate::Level::Debug, $target, $($arg)+)
    };
    ($logger:expr, $($arg:tt)+) => {
        $crate::__log!($logger, $crate::Level::Debug, ::std::module_path!(), $($arg)+)
    };
}

/// 记录 Info 级别日志
#[macro_export]
macro_rules! info {
    ($logger:expr, target: $target:expr, $($arg:tt)+) => {
        $crate::__log!($logger, $crate::Level::Info, $target, $($arg)+)
    };
    ($logger:expr, $($arg:tt)+) => {
        $crate::__log!($logger, $crate::Level::Info, ::std::module_path!(), $($arg)+)
    };
}

/// 记录 Warn 级别日志
#[macro_export]
macro_rules! warn {
    ($logger:expr, target: $target:expr, $($arg:tt)+) => {
        $crate::__log!($logger, $crate::Level::Warn, $target, $($arg)+)
    };
    ($logger:expr, $($arg:tt)+) => {
        $crate::__log!($logger, $crate::Level::Warn, ::std::module_path!(), $($arg)+)
    };
}

/// 记录 Error 级别日志
#[macro_export]
macro_rules! error {
    ($logger:expr, target: $target:expr, $($arg:tt)+) => {
        $crate::__log!($logger, $crate::Level::Error, $target, $($arg)+)
    };
    ($logger:expr, $($arg:tt)+) => {
        $crate::__log!($logger, $crate::Level::Error, ::std::module_path!(), $($arg)+)
    };
}

/// 级别宏的共同落点，不属于公开接口
#[doc(hidden)]
#[macro_export]
macro_rules! __log {
    ($logger:expr, $level:expr, $target:expr, $($arg:tt)+) => {{
        let logger = &$logger;
        // 级别未启用时不格式化
        if logger.is_enabled($level) {
            logger.log($level, $target, ::std::format!($($arg)+));
        }
    }};
}
