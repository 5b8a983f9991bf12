use crate::{OutboundMessage, TabContext};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Run a read-only probe inside the tab's page and report the result.
    ProbePage {
        tab: TabContext,
        strategy: ProbeStrategy,
    },
    /// Deliver one composed message to the native host.
    SendMessage { message: OutboundMessage },
}

/// Which field set the probe should extract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeStrategy {
    Netflix,
    FsMirror,
}
