use crate::{ExtractionResult, TabContext};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// The registered context action was clicked on a tab.
    MenuClicked {
        tab: TabContext,
        /// Text the user had highlighted, if any.
        selection: Option<String>,
    },
    /// The engine finished probing the page.
    ProbeFinished { result: ExtractionResult },
    /// The transport finished delivering the in-flight message.
    SendFinished { outcome: SendOutcome },
    /// Fallback for placeholder wiring.
    NoOp,
}

/// Tri-state outcome of one transport attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendOutcome {
    /// The host replied `result: "OK"`.
    Delivered,
    /// The host replied `result: "ERROR"` with an optional message.
    Rejected { error: Option<String> },
    /// The message never got a well-formed reply.
    Faulted {
        kind: TransportFault,
        message: String,
    },
}

/// Classification of a delivery fault. Observability only: the pipeline
/// finishes the same way regardless of the kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportFault {
    /// The host binary could not be located or started.
    HostNotFound,
    /// The host exited after consuming the message. Treated as a benign
    /// completion: a one-shot host quits as soon as it has filed the row.
    HostExited,
    Other,
}
