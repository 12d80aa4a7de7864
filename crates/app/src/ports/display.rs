//! Display port — where the dashboard's nine fields are written.

use terrarium_domain::view::Cell;

/// A set of render targets addressed by [`Field`](terrarium_domain::view::Field) handles.
///
/// Writes go through `&self`: the surface is shared between the poll loop
/// and user-triggered actions, so implementations use interior mutability.
pub trait DisplaySurface: Send + Sync {
    /// Write every cell of one view, then present it.
    ///
    /// One call is one atomic update. Concurrent renders never interleave
    /// field by field: the surface always shows a whole view, the one whose
    /// render completed last. Cells without a style keep their current one.
    fn render(&self, cells: &[Cell<'_>]);
}

impl<T: DisplaySurface> DisplaySurface for std::sync::Arc<T> {
    fn render(&self, cells: &[Cell<'_>]) {
        (**self).render(cells);
    }
}
