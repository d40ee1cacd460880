// This file is part of fixed-storage-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Internal logging shim.
//!
//! With the `log` feature, `trace!` forwards to [`log::trace!`]. Without it,
//! the arguments are type-checked and discarded.

#[cfg(feature = "log")]
macro_rules! trace {
    ($($arg:tt)+) => {
        ::log::trace!($($arg)+)
    };
}

#[cfg(not(feature = "log"))]
macro_rules! trace {
    ($($arg:tt)+) => {
        if false {
            let _ = ::core::format_args!($($arg)+);
        }
    };
}

pub(crate) use trace;

#[cfg(all(test, feature = "log"))]
mod tests {
    use crate::StackStorage;
    use log::{Level, LevelFilter, Log, Metadata, Record};
    use std::{string::String, sync::Mutex, vec::Vec};

    struct Capture(Mutex<Vec<String>>);

    impl Log for Capture {
        fn enabled(&self, metadata: &Metadata<'_>) -> bool {
            metadata.level() <= Level::Trace
        }
        fn log(&self, record: &Record<'_>) {
            if let Ok(mut lines) = self.0.lock() {
                lines.push(std::format!("{}", record.args()));
            }
        }
        fn flush(&self) {}
    }

    static CAPTURE: Capture = Capture(Mutex::new(Vec::new()));

    #[test]
    fn test_records_reach_the_log_facade() {
        let _ = log::set_logger(&CAPTURE);
        log::set_max_level(LevelFilter::Trace);

        let mut storage: StackStorage<u8, 3> = StackStorage::new();
        let mut v = storage.as_vec();
        v.extend([1, 2, 3]);
        v.clear();

        let lines = CAPTURE.0.lock().map(|l| l.clone()).unwrap_or_default();
        assert!(lines.iter().any(|l| l == "fixed vec view over 3 slots"));
        assert!(lines.iter().any(|l| l == "destroying 3 trailing elements"));
    }
}
