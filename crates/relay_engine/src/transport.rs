use std::io;
use std::process::Stdio;

use relay_logging::relay_debug;
use tokio::process::Command;

use crate::wire::{read_frame, write_frame, HostReply, WireMessage};
use crate::{TransportError, TransportErrorKind};

/// Legacy-compat shim: older host integrations surfaced delivery faults only
/// as flat error strings. Substring matching here is not a contract, just a
/// bridge for logs produced by those integrations.
pub fn classify_error_text(message: &str) -> TransportErrorKind {
    if message.contains("host not found") {
        TransportErrorKind::HostNotFound
    } else if message.contains("host has exited") {
        TransportErrorKind::HostExited
    } else {
        TransportErrorKind::Other
    }
}

/// Single-attempt delivery of one composed message. No retry, no timeout: a
/// hung host leaves the pipeline stalled, which callers accept.
#[async_trait::async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, message: &WireMessage) -> Result<HostReply, TransportError>;
}

/// Spawns the registered host command and exchanges one native-messaging
/// frame each way over its stdio.
pub struct NativeHostTransport {
    program: String,
    args: Vec<String>,
}

impl NativeHostTransport {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// Build from a full command line; the first element is the program.
    pub fn from_command(command: &[String]) -> Option<Self> {
        let (program, args) = command.split_first()?;
        Some(Self::new(program.clone(), args.to_vec()))
    }
}

#[async_trait::async_trait]
impl Transport for NativeHostTransport {
    async fn send(&self, message: &WireMessage) -> Result<HostReply, TransportError> {
        let payload = serde_json::to_vec(message)
            .map_err(|err| TransportError::new(TransportErrorKind::Other, err.to_string()))?;

        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|err| TransportError::new(spawn_fault(&err), err.to_string()))?;

        relay_debug!(
            "Native host '{}' started, sending {} bytes",
            self.program,
            payload.len()
        );

        let mut stdin = child.stdin.take().ok_or_else(|| {
            TransportError::new(TransportErrorKind::Other, "host stdin unavailable")
        })?;
        let write_result = write_frame(&mut stdin, &payload).await;
        // Close stdin so a host that reads to EOF can proceed.
        drop(stdin);
        if let Err(err) = write_result {
            return Err(TransportError::new(io_fault(&err), err.to_string()));
        }

        let mut stdout = child.stdout.take().ok_or_else(|| {
            TransportError::new(TransportErrorKind::Other, "host stdout unavailable")
        })?;
        let frame = read_frame(&mut stdout)
            .await
            .map_err(|err| TransportError::new(io_fault(&err), err.to_string()))?;
        let _ = child.wait().await;

        match frame {
            Some(bytes) => serde_json::from_slice(&bytes).map_err(|err| {
                TransportError::new(
                    TransportErrorKind::Other,
                    format!("malformed host reply: {err}"),
                )
            }),
            None => Err(TransportError::new(
                TransportErrorKind::HostExited,
                "Native host has exited without replying",
            )),
        }
    }
}

fn spawn_fault(err: &io::Error) -> TransportErrorKind {
    if err.kind() == io::ErrorKind::NotFound {
        TransportErrorKind::HostNotFound
    } else {
        TransportErrorKind::Other
    }
}

fn io_fault(err: &io::Error) -> TransportErrorKind {
    match err.kind() {
        io::ErrorKind::BrokenPipe | io::ErrorKind::UnexpectedEof | io::ErrorKind::WriteZero => {
            TransportErrorKind::HostExited
        }
        _ => TransportErrorKind::Other,
    }
}
