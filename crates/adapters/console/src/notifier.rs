//! Console notifier.

use std::io::{self, Write};
use std::sync::{Mutex, PoisonError};

use terrarium_app::ports::Notifier;

/// [`Notifier`] that prints each message on its own line and flushes
/// before returning.
pub struct ConsoleNotifier<W> {
    writer: Mutex<W>,
}

impl ConsoleNotifier<io::Stdout> {
    /// Notifier that prints to standard output.
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send> ConsoleNotifier<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    /// Consume the notifier and return the writer.
    pub fn into_inner(self) -> W {
        self.writer
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn write_line(&self, message: &str) -> io::Result<()> {
        let mut writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        writeln!(writer, "{message}")?;
        writer.flush()
    }
}

impl<W: Write + Send> Notifier for ConsoleNotifier<W> {
    async fn notify(&self, message: &str) {
        if let Err(err) = self.write_line(message) {
            tracing::warn!(error = %err, message, "failed to show notification");
        }
    }
}
