use relay_core::{
    Effect, ExtractionResult, Msg, OutboundMessage, SendOutcome, TransportFault,
};
use relay_engine::{
    EngineConfig, EngineEvent, EngineHandle, HostReply, PipelineId, ProbeReport, TransportError,
    TransportErrorKind, WireMessage,
};
use relay_logging::{relay_error, relay_info, relay_warn};

/// Bridges the pure pipeline and the engine: core effects go in as engine
/// commands, engine events come back out as core messages.
pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            engine: EngineHandle::new(config),
        }
    }

    pub fn dispatch(&self, pipeline_id: PipelineId, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::ProbePage { tab, strategy } => {
                    relay_info!(
                        "ProbePage pipeline={} tab={} url={}",
                        pipeline_id,
                        tab.id,
                        tab.url_or_empty()
                    );
                    self.engine
                        .probe(pipeline_id, tab.url_or_empty(), map_strategy(strategy));
                }
                Effect::SendMessage { message } => {
                    relay_info!(
                        "SendMessage pipeline={} url={} netflix={}",
                        pipeline_id,
                        message.url,
                        message.netflix
                    );
                    self.engine.send(pipeline_id, map_message(message));
                }
            }
        }
    }

    /// Block for the next engine event, translated for the pipeline.
    /// `None` means the engine worker is gone.
    pub fn wait_msg(&self) -> Option<Msg> {
        let event = self.engine.recv()?;
        Some(match event {
            EngineEvent::ProbeFinished { report, .. } => Msg::ProbeFinished {
                result: map_report(report),
            },
            EngineEvent::SendFinished { outcome, .. } => Msg::SendFinished {
                outcome: map_outcome(outcome),
            },
        })
    }
}

fn map_strategy(strategy: relay_core::ProbeStrategy) -> relay_engine::ProbeStrategy {
    match strategy {
        relay_core::ProbeStrategy::Netflix => relay_engine::ProbeStrategy::Netflix,
        relay_core::ProbeStrategy::FsMirror => relay_engine::ProbeStrategy::FsMirror,
    }
}

fn map_report(report: ProbeReport) -> ExtractionResult {
    match report {
        ProbeReport::Netflix { url, title } => ExtractionResult::NetflixInfo { url, title },
        ProbeReport::DvdPoster {
            url,
            image_src,
            alt_text,
        } => ExtractionResult::FsMirrorInfo {
            url,
            image_src,
            alt_text,
        },
        ProbeReport::Failed { reason } => {
            relay_warn!("Probe failed: {}", reason);
            ExtractionResult::Failure { reason }
        }
    }
}

fn map_message(message: OutboundMessage) -> WireMessage {
    WireMessage {
        text: message.text,
        url: message.url,
        title: message.title,
        image_src: message.image_src,
        netflix: message.netflix,
    }
}

fn map_outcome(outcome: Result<HostReply, TransportError>) -> SendOutcome {
    match outcome {
        Ok(HostReply::Ok) => {
            relay_info!("Host accepted the message");
            SendOutcome::Delivered
        }
        Ok(HostReply::Error { error }) => {
            relay_error!(
                "Host reported an error: {}",
                error.as_deref().unwrap_or("Unknown error")
            );
            SendOutcome::Rejected { error }
        }
        Err(err) => {
            match err.kind {
                TransportErrorKind::HostNotFound => relay_error!(
                    "Native host not found. Check that the host command is registered: {}",
                    err.message
                ),
                // Normal shutdown of a one-shot host.
                TransportErrorKind::HostExited => {
                    relay_info!("Native host completed: {}", err.message)
                }
                TransportErrorKind::Other => relay_error!("Native messaging error: {}", err.message),
            }
            SendOutcome::Faulted {
                kind: map_fault(err.kind),
                message: err.message,
            }
        }
    }
}

fn map_fault(kind: TransportErrorKind) -> TransportFault {
    match kind {
        TransportErrorKind::HostNotFound => TransportFault::HostNotFound,
        TransportErrorKind::HostExited => TransportFault::HostExited,
        TransportErrorKind::Other => TransportFault::Other,
    }
}
