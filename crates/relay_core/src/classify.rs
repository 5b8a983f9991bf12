/// Which handling path applies to a clicked tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    Generic,
    Netflix,
    FsMirror,
}

/// Fixed failure reason recorded when a probe is refused on a system page.
pub const SYSTEM_PAGE_FAILURE: &str = "Cannot read content from system pages";

/// Browser-internal URL schemes that never accept a content probe.
const SYSTEM_PREFIXES: [&str; 4] = ["chrome://", "chrome-extension://", "edge://", "about:"];

/// Classify a tab URL by raw substring match, `netflix` checked first.
///
/// The match is case-sensitive and does no host parsing; that mirrors the
/// behavior the desktop host expects and is a documented limitation rather
/// than something to normalize away here.
pub fn classify(url: Option<&str>) -> PageKind {
    let Some(url) = url else {
        return PageKind::Generic;
    };
    if url.contains("netflix") {
        PageKind::Netflix
    } else if url.contains("fsmirror") {
        PageKind::FsMirror
    } else {
        PageKind::Generic
    }
}

/// True for browser-internal pages whose content must not be probed.
pub fn is_system_url(url: &str) -> bool {
    SYSTEM_PREFIXES.iter().any(|prefix| url.starts_with(prefix))
}
