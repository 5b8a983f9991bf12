/// Outcome of one extraction step. Exactly one variant is produced per click
/// and it is never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractionResult {
    /// Generic page: the user's selected text, passed through unchanged.
    GenericSelection { text: String, url: String },
    /// Netflix page: the player title, already truncated and trimmed.
    NetflixInfo { url: String, title: String },
    /// FSMirror page: the DVD poster image and its alt text.
    FsMirrorInfo {
        url: String,
        image_src: String,
        alt_text: String,
    },
    /// Extraction could not produce fields; the reason is logged, never thrown.
    Failure { reason: String },
}

/// Flat outbound payload for the native host. Which fields are populated is
/// fully determined by the `ExtractionResult` variant it was composed from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OutboundMessage {
    pub text: Option<String>,
    pub url: String,
    pub title: Option<String>,
    pub image_src: Option<String>,
    pub netflix: bool,
}

/// Build the outbound payload for an extraction result.
///
/// Pure and deterministic. Returns `None` for failures, which terminate the
/// pipeline without a transport call. The FSMirror mapping forwards the alt
/// text in the `text` slot alongside the image source; the desktop host files
/// both into its sheet.
pub fn compose(result: &ExtractionResult) -> Option<OutboundMessage> {
    match result {
        ExtractionResult::GenericSelection { text, url } => Some(OutboundMessage {
            text: Some(text.clone()),
            url: url.clone(),
            ..OutboundMessage::default()
        }),
        ExtractionResult::NetflixInfo { url, title } => Some(OutboundMessage {
            url: url.clone(),
            title: Some(title.clone()),
            netflix: true,
            ..OutboundMessage::default()
        }),
        ExtractionResult::FsMirrorInfo {
            url,
            image_src,
            alt_text,
        } => Some(OutboundMessage {
            text: Some(alt_text.clone()),
            url: url.clone(),
            image_src: Some(image_src.clone()),
            ..OutboundMessage::default()
        }),
        ExtractionResult::Failure { .. } => None,
    }
}

impl ExtractionResult {
    /// The failure reason, when this result is a failure.
    pub fn failure_reason(&self) -> Option<&str> {
        match self {
            ExtractionResult::Failure { reason } => Some(reason),
            _ => None,
        }
    }
}
