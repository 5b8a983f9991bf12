use std::sync::Arc;

use relay_logging::relay_debug;

use crate::decode::decode_text;
use crate::extract::{dvd_poster, netflix_title};
use crate::Fetcher;

/// Which field set to pull out of the probed page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeStrategy {
    Netflix,
    FsMirror,
}

/// Structured result of one page probe. Mirrors the extraction variants the
/// pipeline composes from; failures are data here, never errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeReport {
    Netflix {
        url: String,
        title: String,
    },
    DvdPoster {
        url: String,
        image_src: String,
        alt_text: String,
    },
    Failed {
        reason: String,
    },
}

/// Read-only page probe: fetches the tab's document and runs the strategy's
/// extraction over it. Never mutates anything on the remote side.
pub struct PageProber {
    fetcher: Arc<dyn Fetcher>,
}

impl PageProber {
    pub fn new(fetcher: Arc<dyn Fetcher>) -> Self {
        Self { fetcher }
    }

    pub async fn probe(&self, url: &str, strategy: ProbeStrategy) -> ProbeReport {
        let output = match self.fetcher.fetch(url).await {
            Ok(output) => output,
            Err(err) => {
                return ProbeReport::Failed {
                    reason: format!("Error reading content: {err}"),
                }
            }
        };

        if !(200..300).contains(&output.metadata.status) {
            return ProbeReport::Failed {
                reason: format!(
                    "Error reading content: http status {}",
                    output.metadata.status
                ),
            };
        }

        let decoded = match decode_text(&output.bytes, output.metadata.content_type.as_deref()) {
            Ok(decoded) => decoded,
            Err(err) => {
                return ProbeReport::Failed {
                    reason: format!("Error reading content: {err}"),
                }
            }
        };
        relay_debug!(
            "Probe fetched {} bytes from {} ({})",
            output.metadata.byte_len,
            url,
            decoded.encoding_label
        );

        match strategy {
            ProbeStrategy::Netflix => ProbeReport::Netflix {
                url: url.to_string(),
                title: netflix_title(&decoded.text),
            },
            ProbeStrategy::FsMirror => match dvd_poster(&decoded.text) {
                Ok(poster) => ProbeReport::DvdPoster {
                    url: url.to_string(),
                    image_src: poster.image_src,
                    alt_text: poster.alt_text,
                },
                Err(reason) => ProbeReport::Failed { reason },
            },
        }
    }
}
