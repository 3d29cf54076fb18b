/// Receives usage figures from a [`Dictionary`](crate::Dictionary). Purely
/// observational; nothing recorded here feeds back into matching.
pub trait Stats: Send + Sync {
    /// Called once when the index is built, with the number of letter-set
    /// classes it holds.
    fn record_size(&self, _classes: usize) {}

    /// Called after every query with the number of words it produced.
    fn record_solutions(&self, _count: usize) {}
}

/// Discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoStats;

impl Stats for NoStats {}

impl<T: Stats + ?Sized> Stats for std::sync::Arc<T> {
    fn record_size(&self, classes: usize) {
        (**self).record_size(classes)
    }

    fn record_solutions(&self, count: usize) {
        (**self).record_solutions(count)
    }
}
