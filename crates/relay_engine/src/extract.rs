use scraper::{ElementRef, Html, Selector};

/// Alt text substitute when the poster image carries none.
pub const DEFAULT_ALT_TEXT: &str = "No alt text";
/// Failure reason when an FSMirror page lacks the poster container.
pub const MISSING_CONTAINER: &str = "DVD container not found";
/// Failure reason when the container holds no usable image.
pub const MISSING_IMAGE: &str = "Image tag or src attribute not found in DVD container";

/// Title marker observed in the Netflix player UI; everything from the first
/// occurrence on is episode noise. Site-specific artifact, kept verbatim.
const TITLE_MARKER: &str = "Flg";

const NETFLIX_TITLE_SELECTOR: &str = r#"[data-uia="video-title"]"#;
const DVD_CONTAINER_SELECTOR: &str = r#"div.dvd-container[onclick="showDvdPoster()"]"#;

/// Extract the playing title from a Netflix player page.
///
/// Takes the text of the player's title element, cut at the first marker
/// occurrence and trimmed; falls back to the `<title>` text when the player
/// element is absent or empty, and to the empty string when both are.
pub fn netflix_title(html: &str) -> String {
    let doc = Html::parse_document(html);

    let title_sel = Selector::parse(NETFLIX_TITLE_SELECTOR).ok();
    if let Some(node) = title_sel.as_ref().and_then(|sel| doc.select(sel).next()) {
        let text: String = node.text().collect();
        let title = truncate_at_marker(&text);
        if !title.is_empty() {
            return title;
        }
    }

    document_title(&doc).unwrap_or_default()
}

fn truncate_at_marker(text: &str) -> String {
    match text.find(TITLE_MARKER) {
        Some(idx) => text[..idx].trim().to_string(),
        None => text.to_string(),
    }
}

fn document_title(doc: &Html) -> Option<String> {
    let sel = Selector::parse("title").ok()?;
    doc.select(&sel)
        .next()
        .map(|node| node.text().collect::<String>().trim().to_string())
        .filter(|title| !title.is_empty())
}

/// The DVD poster fields scraped from an FSMirror item page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DvdPoster {
    pub image_src: String,
    pub alt_text: String,
}

/// Locate the DVD poster on an FSMirror page.
///
/// The poster sits in a `div.dvd-container` carrying the site's inline
/// `showDvdPoster()` handler; the first `<img>` inside it is the poster.
/// Failures come back as the fixed reason strings, never as panics.
pub fn dvd_poster(html: &str) -> Result<DvdPoster, String> {
    let doc = Html::parse_document(html);

    let container_sel = Selector::parse(DVD_CONTAINER_SELECTOR).ok();
    let Some(container) = container_sel.as_ref().and_then(|sel| doc.select(sel).next()) else {
        return Err(MISSING_CONTAINER.to_string());
    };

    let img_sel = Selector::parse("img").ok();
    let img = img_sel.as_ref().and_then(|sel| container.select(sel).next());
    let Some(src) = img
        .as_ref()
        .and_then(|el| el.value().attr("src"))
        .filter(|src| !src.is_empty())
    else {
        return Err(MISSING_IMAGE.to_string());
    };

    let alt_text = img
        .and_then(|el| el.value().attr("alt"))
        .filter(|alt| !alt.is_empty())
        .unwrap_or(DEFAULT_ALT_TEXT);

    Ok(DvdPoster {
        image_src: src.to_string(),
        alt_text: alt_text.to_string(),
    })
}

/// One entry scraped from a Netflix browse grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleCard {
    pub title: String,
    pub image_url: Option<String>,
}

/// Collect the title cards of a Netflix browse page.
///
/// The grid nests the labelled element two levels under each `.title-card`;
/// cards without an `aria-label` there are skipped.
pub fn title_cards(html: &str) -> Vec<TitleCard> {
    let doc = Html::parse_document(html);

    let Some(card_sel) = Selector::parse(".title-card").ok() else {
        return Vec::new();
    };
    let img_sel = Selector::parse("img").ok();

    doc.select(&card_sel)
        .filter_map(|card| card_entry(card, img_sel.as_ref()))
        .collect()
}

fn card_entry(card: ElementRef<'_>, img_sel: Option<&Selector>) -> Option<TitleCard> {
    let labelled = card.child_elements().next()?.child_elements().next()?;
    let title = labelled.value().attr("aria-label")?.to_string();
    let image_url = img_sel
        .and_then(|sel| labelled.select(sel).next())
        .and_then(|img| img.value().attr("src"))
        .filter(|src| !src.is_empty())
        .map(str::to_string);
    Some(TitleCard { title, image_url })
}
