//! Relay engine: effect execution for the click pipeline.
//!
//! Fetching, byte decoding, DOM probing, the native-messaging transport and
//! the standalone field scanner all live here, behind traits where the app
//! or tests need to substitute them.
mod decode;
mod engine;
mod extract;
mod fetch;
mod probe;
mod scan;
mod transport;
mod types;
mod wire;

pub use decode::{decode_text, DecodeError, DecodedText};
pub use engine::{EngineConfig, EngineEvent, EngineHandle, PipelineId};
pub use extract::{
    dvd_poster, netflix_title, title_cards, DvdPoster, TitleCard, DEFAULT_ALT_TEXT,
    MISSING_CONTAINER, MISSING_IMAGE,
};
pub use fetch::{fetch_blocking, FetchSettings, Fetcher, ReqwestFetcher};
pub use probe::{PageProber, ProbeReport, ProbeStrategy};
pub use scan::{scan_name_and_image, ScannedFields};
pub use transport::{classify_error_text, NativeHostTransport, Transport};
pub use types::{FailureKind, FetchError, FetchMetadata, FetchOutput, TransportError, TransportErrorKind};
pub use wire::{encode_frame, read_frame, write_frame, HostReply, WireMessage};
