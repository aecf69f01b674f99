/// Logs a line at the given severity through the process-wide logger.
///
/// ```
/// use linelog::Severity;
///
/// linelog::log!(Severity::Warn, "retrying in {} ms", 250);
/// ```
#[macro_export]
macro_rules! log {
    ($severity:expr, $template:expr $(, $arg:expr)* $(,)?) => {
        $crate::log($severity, $template, &[$(&$arg as &dyn ::std::fmt::Display),*])
    };
}

#[macro_export]
macro_rules! trace {
    ($($arg:tt)+) => {
        $crate::log!($crate::Severity::Trace, $($arg)+)
    };
}

#[macro_export]
macro_rules! debug {
    ($($arg:tt)+) => {
        $crate::log!($crate::Severity::Debug, $($arg)+)
    };
}

#[macro_export]
macro_rules! info {
    ($($arg:tt)+) => {
        $crate::log!($crate::Severity::Info, $($arg)+)
    };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)+) => {
        $crate::log!($crate::Severity::Warn, $($arg)+)
    };
}

#[macro_export]
macro_rules! error {
    ($($arg:tt)+) => {
        $crate::log!($crate::Severity::Error, $($arg)+)
    };
}

#[macro_export]
macro_rules! fatal {
    ($($arg:tt)+) => {
        $crate::log!($crate::Severity::Fatal, $($arg)+)
    };
}
