//! The generic user-facing error surface.

/// Somewhere to show errors the user should know about, without interrupting
/// whatever called into the identity cache.
pub trait ErrorReporter {
    fn report_error(&mut self, message: &str);
}

impl<R: ErrorReporter + ?Sized> ErrorReporter for &mut R {
    fn report_error(&mut self, message: &str) {
        (**self).report_error(message)
    }
}

/// Collects reported messages. Handy in tests and headless hosts.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CollectedErrors {
    pub messages: Vec<String>,
}

impl ErrorReporter for CollectedErrors {
    fn report_error(&mut self, message: &str) {
        self.messages.push(message.to_string());
    }
}
