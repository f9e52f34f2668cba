//! Reporting sinks - where failed checks end up

use std::fmt;
use std::panic::Location;
use std::sync::atomic::{AtomicUsize, Ordering};

use parking_lot::Mutex;

/// The test context a check reports its failures to.
///
/// Implementations decide what "fail now" means. [`Panicking`] halts the
/// current test case, [`Recorder`] only remembers the failure.
pub trait Sink {
    /// Report a failure with a ready-made message.
    #[track_caller]
    fn fail_now(&self, message: &str);

    /// Report a failure from pre-compiled format arguments.
    #[track_caller]
    fn fail_now_fmt(&self, args: fmt::Arguments<'_>) {
        match args.as_str() {
            Some(message) => self.fail_now(message),
            None => self.fail_now(&args.to_string()),
        }
    }

    /// Hint that the calling frame is a helper and should not be blamed.
    ///
    /// Locations are already attributed through `#[track_caller]`; sinks
    /// that keep their own bookkeeping can hook in here.
    fn mark_helper(&self) {}
}

impl<S: Sink + ?Sized> Sink for &S {
    #[track_caller]
    fn fail_now(&self, message: &str) {
        (**self).fail_now(message)
    }

    #[track_caller]
    fn fail_now_fmt(&self, args: fmt::Arguments<'_>) {
        (**self).fail_now_fmt(args)
    }

    fn mark_helper(&self) {
        (**self).mark_helper()
    }
}

/// Sink for plain `#[test]` functions: a failure panics at the caller's line.
#[derive(Debug, Clone, Copy, Default)]
pub struct Panicking;

impl Sink for Panicking {
    #[track_caller]
    fn fail_now(&self, message: &str) {
        panic!("{message}")
    }

    #[track_caller]
    fn fail_now_fmt(&self, args: fmt::Arguments<'_>) {
        panic!("{args}")
    }
}

/// A failure captured by a [`Recorder`].
#[derive(Debug, Clone)]
pub struct Failure {
    pub message: String,
    pub location: &'static Location<'static>,
}

/// Sink that records failures instead of halting.
///
/// Useful for testing checks themselves, or helpers built on top of them.
#[derive(Debug, Default)]
pub struct Recorder {
    failures: Mutex<Vec<Failure>>,
    helper_marks: AtomicUsize,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every failure recorded so far
    pub fn failures(&self) -> Vec<Failure> {
        self.failures.lock().clone()
    }

    pub fn messages(&self) -> Vec<String> {
        self.failures.lock().iter().map(|f| f.message.clone()).collect()
    }

    pub fn failed(&self) -> bool {
        !self.failures.lock().is_empty()
    }

    pub fn failure_count(&self) -> usize {
        self.failures.lock().len()
    }

    pub fn helper_marks(&self) -> usize {
        self.helper_marks.load(Ordering::Relaxed)
    }
}

impl Sink for Recorder {
    #[track_caller]
    fn fail_now(&self, message: &str) {
        self.failures.lock().push(Failure {
            message: message.to_string(),
            location: Location::caller(),
        });
    }

    fn mark_helper(&self) {
        self.helper_marks.fetch_add(1, Ordering::Relaxed);
    }
}
