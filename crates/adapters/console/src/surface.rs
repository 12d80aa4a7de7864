//! Console display surface.

use std::io::{self, Write};
use std::sync::{Mutex, MutexGuard, PoisonError};

use terrarium_app::ports::DisplaySurface;
use terrarium_domain::view::Cell;

use crate::panel::Panel;

const HEADER: &str = "== terrarium ==";

struct State<W> {
    panel: Panel,
    writer: W,
}

/// [`DisplaySurface`] that keeps a [`Panel`] and redraws it to `W` on
/// every render.
///
/// The panel update and the redraw happen under one lock, so concurrent
/// renders are serialised and every frame shows a single view.
pub struct ConsoleSurface<W> {
    state: Mutex<State<W>>,
}

impl ConsoleSurface<io::Stdout> {
    /// Surface that draws to standard output.
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send> ConsoleSurface<W> {
    pub fn new(writer: W) -> Self {
        Self {
            state: Mutex::new(State {
                panel: Panel::default(),
                writer,
            }),
        }
    }

    /// Snapshot of the current panel.
    #[must_use]
    pub fn panel(&self) -> Panel {
        self.lock().panel.clone()
    }

    /// Consume the surface and return the writer.
    pub fn into_inner(self) -> W {
        self.state
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
            .writer
    }

    // A panicking writer must not take the dashboard down with it.
    fn lock(&self) -> MutexGuard<'_, State<W>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn draw<W: Write>(writer: &mut W, panel: &Panel) -> io::Result<()> {
    writeln!(writer, "{HEADER}")?;
    write!(writer, "{panel}")?;
    writer.flush()
}

impl<W: Write + Send> DisplaySurface for ConsoleSurface<W> {
    fn render(&self, cells: &[Cell<'_>]) {
        let mut guard = self.lock();
        let State { panel, writer } = &mut *guard;
        panel.apply(cells);
        if let Err(err) = draw(writer, panel) {
            tracing::warn!(error = %err, "failed to draw dashboard");
        }
    }
}
