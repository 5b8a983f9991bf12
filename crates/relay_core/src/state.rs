/// Where the current pipeline stands. One click drives the phase through
/// `Idle -> AwaitingProbe -> AwaitingSend -> Idle` (generic clicks skip the
/// probe); nothing carries over once the cycle completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    AwaitingProbe,
    AwaitingSend,
}

/// Observability counters. These survive across clicks but never influence
/// how a pipeline runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RelayStats {
    pub clicks: u64,
    pub sends_ok: u64,
    pub sends_failed: u64,
    pub extraction_failures: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RelayState {
    phase: Phase,
    stats: RelayStats,
    last_failure: Option<String>,
}

impl RelayState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn stats(&self) -> RelayStats {
        self.stats
    }

    /// Reason the most recent pipeline stopped without sending, if it did.
    pub fn last_failure(&self) -> Option<&str> {
        self.last_failure.as_deref()
    }

    pub(crate) fn set_phase(&mut self, phase: Phase) {
        self.phase = phase;
    }

    /// A new click starts a fresh pipeline; any record of the previous
    /// failure belongs to the completed cycle and is dropped.
    pub(crate) fn record_click(&mut self) {
        self.stats.clicks += 1;
        self.last_failure = None;
    }

    pub(crate) fn record_extraction_failure(&mut self, reason: String) {
        self.stats.extraction_failures += 1;
        self.last_failure = Some(reason);
    }

    pub(crate) fn record_send_ok(&mut self) {
        self.stats.sends_ok += 1;
    }

    pub(crate) fn record_send_failed(&mut self) {
        self.stats.sends_failed += 1;
    }
}
