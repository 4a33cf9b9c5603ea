//! Simulation statistics collection trait

/// Trait for collecting per-tick simulation statistics
///
/// Lets callers count resolutions without the core depending on any
/// particular metrics implementation.
pub trait SimStats {
    /// A contact pair was resolved (including no-op resolutions)
    fn record_resolution(&mut self);

    /// A state transition was committed
    fn record_state_change(&mut self);

    /// A transition was suppressed by the attribute veto
    fn record_veto(&mut self);
}

/// A no-op implementation for when stats collection is not needed
#[derive(Default)]
pub struct NoopStats;

impl SimStats for NoopStats {
    fn record_resolution(&mut self) {}
    fn record_state_change(&mut self) {}
    fn record_veto(&mut self) {}
}
