use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use crate::fetch::{FetchSettings, ReqwestFetcher};
use crate::probe::{PageProber, ProbeReport, ProbeStrategy};
use crate::transport::{NativeHostTransport, Transport};
use crate::wire::{HostReply, WireMessage};
use crate::TransportError;

pub type PipelineId = u64;

#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub fetch: FetchSettings,
    /// Full command line of the registered native host.
    pub host_command: Vec<String>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            fetch: FetchSettings::default(),
            host_command: vec!["page-relay-host".to_string()],
        }
    }
}

enum EngineCommand {
    Probe {
        pipeline_id: PipelineId,
        url: String,
        strategy: ProbeStrategy,
    },
    Send {
        pipeline_id: PipelineId,
        message: WireMessage,
    },
}

#[derive(Debug)]
pub enum EngineEvent {
    ProbeFinished {
        pipeline_id: PipelineId,
        report: ProbeReport,
    },
    SendFinished {
        pipeline_id: PipelineId,
        outcome: Result<HostReply, TransportError>,
    },
}

/// Handle to the engine's worker thread. Commands go in over a channel and
/// land on a Tokio runtime owned by that thread; events come back out the
/// same way. Dropping the handle shuts the worker down.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(config: EngineConfig) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let prober = Arc::new(PageProber::new(Arc::new(ReqwestFetcher::new(
            config.fetch.clone(),
        ))));
        let transport: Arc<dyn Transport> = Arc::new(
            NativeHostTransport::from_command(&config.host_command)
                .unwrap_or_else(|| NativeHostTransport::new("page-relay-host", Vec::new())),
        );

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            while let Ok(command) = cmd_rx.recv() {
                let prober = prober.clone();
                let transport = transport.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(prober.as_ref(), transport.as_ref(), command, event_tx).await;
                });
            }
        });

        Self { cmd_tx, event_rx }
    }

    pub fn probe(&self, pipeline_id: PipelineId, url: impl Into<String>, strategy: ProbeStrategy) {
        let _ = self.cmd_tx.send(EngineCommand::Probe {
            pipeline_id,
            url: url.into(),
            strategy,
        });
    }

    pub fn send(&self, pipeline_id: PipelineId, message: WireMessage) {
        let _ = self.cmd_tx.send(EngineCommand::Send {
            pipeline_id,
            message,
        });
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }

    /// Block until the next event. `None` means the worker is gone.
    pub fn recv(&self) -> Option<EngineEvent> {
        self.event_rx.recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<EngineEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }
}

async fn handle_command(
    prober: &PageProber,
    transport: &dyn Transport,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::Probe {
            pipeline_id,
            url,
            strategy,
        } => {
            let report = prober.probe(&url, strategy).await;
            let _ = event_tx.send(EngineEvent::ProbeFinished {
                pipeline_id,
                report,
            });
        }
        EngineCommand::Send {
            pipeline_id,
            message,
        } => {
            let outcome = transport.send(&message).await;
            let _ = event_tx.send(EngineEvent::SendFinished {
                pipeline_id,
                outcome,
            });
        }
    }
}
