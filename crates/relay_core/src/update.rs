use crate::classify::{classify, is_system_url, PageKind, SYSTEM_PAGE_FAILURE};
use crate::message::{compose, ExtractionResult};
use crate::msg::{Msg, SendOutcome, TransportFault};
use crate::state::{Phase, RelayState};
use crate::{Effect, ProbeStrategy};

/// Pure update function: applies a message to state and returns any effects.
///
/// A click is a stateless one-shot pipeline. A click landing while an earlier
/// pipeline is still in flight simply starts the next pipeline; no ordering
/// is promised across overlapping clicks.
pub fn update(mut state: RelayState, msg: Msg) -> (RelayState, Vec<Effect>) {
    let effects = match msg {
        Msg::MenuClicked { tab, selection } => {
            state.record_click();
            match classify(tab.url.as_deref()) {
                PageKind::Generic => {
                    // No DOM read on the generic path: the selection (empty
                    // when absent) goes out directly.
                    let result = ExtractionResult::GenericSelection {
                        text: selection.unwrap_or_default(),
                        url: tab.url_or_empty().to_string(),
                    };
                    apply_extraction(&mut state, result)
                }
                kind => {
                    if is_system_url(tab.url_or_empty()) {
                        // Probes never run against browser-internal pages.
                        let result = ExtractionResult::Failure {
                            reason: SYSTEM_PAGE_FAILURE.to_string(),
                        };
                        apply_extraction(&mut state, result)
                    } else {
                        let strategy = match kind {
                            PageKind::Netflix => ProbeStrategy::Netflix,
                            _ => ProbeStrategy::FsMirror,
                        };
                        state.set_phase(Phase::AwaitingProbe);
                        vec![Effect::ProbePage { tab, strategy }]
                    }
                }
            }
        }
        Msg::ProbeFinished { result } => apply_extraction(&mut state, result),
        Msg::SendFinished { outcome } => {
            match outcome {
                SendOutcome::Delivered => state.record_send_ok(),
                // The host quitting after it consumed the message is the
                // normal shutdown of a one-shot host.
                SendOutcome::Faulted {
                    kind: TransportFault::HostExited,
                    ..
                } => state.record_send_ok(),
                SendOutcome::Rejected { .. } | SendOutcome::Faulted { .. } => {
                    state.record_send_failed()
                }
            }
            state.set_phase(Phase::Idle);
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

fn apply_extraction(state: &mut RelayState, result: ExtractionResult) -> Vec<Effect> {
    match compose(&result) {
        Some(message) => {
            state.set_phase(Phase::AwaitingSend);
            vec![Effect::SendMessage { message }]
        }
        None => {
            let reason = result
                .failure_reason()
                .unwrap_or("extraction produced no fields")
                .to_string();
            state.record_extraction_failure(reason);
            state.set_phase(Phase::Idle);
            Vec::new()
        }
    }
}
