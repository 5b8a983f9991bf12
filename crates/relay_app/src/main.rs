//! Page relay driver: handles one context-action click end to end.
//!
//! The pipeline is the pure `relay_core::update` function; this binary only
//! feeds it the click, executes its effects through the engine, and loops
//! until the pipeline is idle again.

mod config;
mod logging;
mod runner;

use std::path::PathBuf;
use std::process::ExitCode;

use relay_core::{update, Msg, Phase, RelayState, TabContext};
use relay_logging::{relay_info, relay_warn};

use crate::logging::LogDestination;
use crate::runner::EffectRunner;

/// Identifier and label of the single registered context action.
const ACTION_ID: &str = "send-to-host";
const ACTION_TITLE: &str = "Send page to desktop host";

struct CliArgs {
    url: Option<String>,
    selection: Option<String>,
    config_path: PathBuf,
    log_to_file: bool,
}

fn parse_args(mut args: std::env::Args) -> Result<CliArgs, String> {
    // Skip the program name.
    let _ = args.next();

    let mut url = None;
    let mut selection = None;
    let mut config_path = PathBuf::from(config::CONFIG_FILENAME);
    let mut log_to_file = false;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--selection" => {
                selection = Some(args.next().ok_or("--selection needs a value")?);
            }
            "--config" => {
                config_path = PathBuf::from(args.next().ok_or("--config needs a value")?);
            }
            "--log-file" => log_to_file = true,
            other if other.starts_with("--") => {
                return Err(format!("unknown option {other}"));
            }
            other => {
                if url.replace(other.to_string()).is_some() {
                    return Err("at most one URL may be given".to_string());
                }
            }
        }
    }

    Ok(CliArgs {
        url,
        selection,
        config_path,
        log_to_file,
    })
}

fn main() -> ExitCode {
    let args = match parse_args(std::env::args()) {
        Ok(args) => args,
        Err(message) => {
            eprintln!("{message}");
            eprintln!("Usage: relay_app [--selection TEXT] [--config PATH] [--log-file] [URL]");
            return ExitCode::from(2);
        }
    };

    logging::initialize(if args.log_to_file {
        LogDestination::Both
    } else {
        LogDestination::Terminal
    });

    // The single context action, registered once at startup.
    relay_info!("Registered context action '{}' ({})", ACTION_TITLE, ACTION_ID);

    let config = config::load(&args.config_path);
    let runner = EffectRunner::new(config.engine_config());

    let pipeline_id = 1;
    relay_logging::set_pipeline_seq(pipeline_id);

    let tab = TabContext::new(pipeline_id, args.url);
    relay_info!(
        "Context action clicked: tab={} url={}",
        tab.id,
        tab.url_or_empty()
    );

    let (mut state, mut effects) = update(
        RelayState::new(),
        Msg::MenuClicked {
            tab,
            selection: args.selection,
        },
    );

    while !(effects.is_empty() && state.phase() == Phase::Idle) {
        runner.dispatch(pipeline_id, std::mem::take(&mut effects));
        let Some(msg) = runner.wait_msg() else {
            relay_warn!("Engine stopped before the pipeline finished");
            break;
        };
        let (next, more) = update(state, msg);
        state = next;
        effects = more;
    }

    if let Some(reason) = state.last_failure() {
        relay_warn!("Pipeline finished without sending: {}", reason);
    }
    let stats = state.stats();
    relay_info!(
        "Pipeline idle again: clicks={} sends_ok={} sends_failed={} extraction_failures={}",
        stats.clicks,
        stats.sends_ok,
        stats.sends_failed,
        stats.extraction_failures
    );

    ExitCode::SUCCESS
}
