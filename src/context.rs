use std::sync::{Mutex, PoisonError};

/// The hooks a test exposes to helpers running on its behalf.
pub trait TestContext {
    /// Records a failure without stopping the test.
    fn report_error(&self, message: String);
}

impl<F> TestContext for F
where
    F: Fn(String),
{
    fn report_error(&self, message: String) {
        self(message)
    }
}

/// A [`TestContext`] that prints reported errors as they happen and fails the
/// test when it goes out of scope with errors still recorded.
#[derive(Debug, Default)]
pub struct TestReporter {
    errors: Mutex<Vec<String>>,
}

impl TestReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn errors(&self) -> Vec<String> {
        self.errors
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Drains the recorded errors, so a test that expects them can still pass.
    pub fn take_errors(&self) -> Vec<String> {
        std::mem::take(&mut *self.errors.lock().unwrap_or_else(PoisonError::into_inner))
    }

    pub fn failed(&self) -> bool {
        !self
            .errors
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_empty()
    }
}

impl TestContext for TestReporter {
    fn report_error(&self, message: String) {
        eprintln!("{}", message);
        self.errors
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(message);
    }
}

impl Drop for TestReporter {
    fn drop(&mut self) {
        if std::thread::panicking() {
            return;
        }
        let errors = self.take_errors();
        if !errors.is_empty() {
            panic!(
                "{} error(s) reported during the test:\n{}",
                errors.len(),
                errors.join("\n")
            );
        }
    }
}
