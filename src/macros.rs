//! Formatting macros for ergonomic log output.
//!
//! Every macro takes `format!`-style arguments. Prefix them with
//! `logger =>` to target a specific [`Logger`](crate::Logger); without it
//! the process-wide default instance is used.
//!
//! # Examples
//!
//! ```
//! use flg::prelude::*;
//! use flg::{logf, logln};
//!
//! let sink = MemorySink::new();
//! let logger = Logger::builder().sink(sink.clone()).no_timestamp().build();
//!
//! let port = 8080;
//! logf!(logger => "listening on {}", port).unwrap();
//! logln!(logger => ", ready").unwrap();
//!
//! assert_eq!(sink.contents_string(), "listening on 8080, ready\n");
//! ```

/// Write a formatted message as-is.
///
/// # Examples
///
/// ```
/// # use flg::prelude::*;
/// # let logger = Logger::builder().sink(MemorySink::new()).build();
/// use flg::logf;
/// logf!(logger => "Error code: {}\n", 500).unwrap();
/// ```
#[macro_export]
macro_rules! logf {
    ($logger:expr => $($arg:tt)+) => {
        $logger.print(::std::format_args!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::global::print(::std::format_args!($($arg)+))
    };
}

/// Write a formatted message, adding a trailing newline if it has none.
///
/// # Examples
///
/// ```
/// # use flg::prelude::*;
/// # let logger = Logger::builder().sink(MemorySink::new()).build();
/// use flg::logln;
/// logln!(logger => "Processing {} items", 100).unwrap();
/// ```
#[macro_export]
macro_rules! logln {
    ($logger:expr => $($arg:tt)+) => {
        $logger.println(::std::format_args!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::global::println(::std::format_args!($($arg)+))
    };
}

/// Write a formatted message, then exit the process with status 1.
///
/// ```no_run
/// use flg::fatalf;
/// fatalf!("cannot bind port {}", 80);
/// ```
#[macro_export]
macro_rules! fatalf {
    ($logger:expr => $($arg:tt)+) => {
        $logger.fatal(::std::format_args!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::global::fatal(::std::format_args!($($arg)+))
    };
}

/// [`fatalf!`] with a guaranteed trailing newline.
#[macro_export]
macro_rules! fatalln {
    ($logger:expr => $($arg:tt)+) => {
        $logger.fatalln(::std::format_args!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::global::fatalln(::std::format_args!($($arg)+))
    };
}

/// Write a formatted message, then panic with it as the payload.
///
/// ```should_panic
/// use flg::panicf;
/// panicf!("invariant broken: {}", "queue empty");
/// ```
#[macro_export]
macro_rules! panicf {
    ($logger:expr => $($arg:tt)+) => {
        $logger.panic(::std::format_args!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::global::panic(::std::format_args!($($arg)+))
    };
}

/// [`panicf!`] with a guaranteed trailing newline.
#[macro_export]
macro_rules! panicln {
    ($logger:expr => $($arg:tt)+) => {
        $logger.panicln(::std::format_args!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::global::panicln(::std::format_args!($($arg)+))
    };
}

#[cfg(test)]
mod tests {
    use crate::core::{Logger, MemorySink};

    fn captured() -> (Logger, MemorySink) {
        let sink = MemorySink::new();
        let logger = Logger::builder().sink(sink.clone()).no_timestamp().build();
        (logger, sink)
    }

    #[test]
    fn test_logf_macro() {
        let (logger, sink) = captured();
        logf!(logger => "Test message").expect("logf");
        logf!(logger => " formatted: {}", 42).expect("logf");
        assert_eq!(sink.contents_string(), "Test message formatted: 42");
    }

    #[test]
    fn test_logf_inline_capture() {
        let (logger, sink) = captured();
        let items = 3;
        logf!(logger => "{items} items").expect("logf");
        assert_eq!(sink.contents_string(), "3 items");
    }

    #[test]
    fn test_logln_macro() {
        let (logger, sink) = captured();
        logln!(logger => "Count: {}", 5).expect("logln");
        logln!(logger => "already terminated\n").expect("logln");
        assert_eq!(sink.contents_string(), "Count: 5\nalready terminated\n");
    }

    #[test]
    fn test_logger_by_reference() {
        let (logger, sink) = captured();
        let logger_ref = &logger;
        logf!(logger_ref => "via ref").expect("logf");
        assert_eq!(sink.contents_string(), "via ref");
    }

    #[test]
    fn test_panicf_macro() {
        let (logger, sink) = captured();
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            panicf!(logger => "failure: {}", "system");
        }));

        let payload = result.unwrap_err();
        assert_eq!(
            payload.downcast_ref::<String>().map(String::as_str),
            Some("failure: system")
        );
        assert_eq!(sink.contents_string(), "failure: system");
    }

    #[test]
    fn test_panicln_macro() {
        let (logger, sink) = captured();
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            panicln!(logger => "code {}", 7);
        }));

        assert!(result.is_err());
        assert_eq!(sink.contents_string(), "code 7\n");
    }
}
