//! Relay core: pure click-pipeline state machine and message composition.
mod classify;
mod effect;
mod message;
mod msg;
mod state;
mod tab;
mod update;

pub use classify::{classify, is_system_url, PageKind, SYSTEM_PAGE_FAILURE};
pub use effect::{Effect, ProbeStrategy};
pub use message::{compose, ExtractionResult, OutboundMessage};
pub use msg::{Msg, SendOutcome, TransportFault};
pub use state::{Phase, RelayState, RelayStats};
pub use tab::{TabContext, TabId};
pub use update::update;
