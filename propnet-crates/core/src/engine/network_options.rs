/// Options which determine how a [`Network`](crate::Network) is set up.
#[derive(Debug, Clone, Copy)]
pub struct NetworkOptions {
    /// Whether the `merge` operator treats intervals as partial information about a number, i.e.
    /// merges two intervals into their intersection and an interval with a number inside it into
    /// that number. Without it, intervals only merge with equal intervals.
    pub interval_merge: bool,
}

impl Default for NetworkOptions {
    fn default() -> Self {
        NetworkOptions {
            interval_merge: true,
        }
    }
}
