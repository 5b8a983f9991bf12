use pretty_assertions::assert_eq;
use relay_engine::{
    dvd_poster, netflix_title, title_cards, DvdPoster, TitleCard, DEFAULT_ALT_TEXT,
    MISSING_CONTAINER, MISSING_IMAGE,
};

#[test]
fn netflix_title_truncates_at_marker() {
    let html = r#"
    <html><head><title>Netflix</title></head><body>
        <div data-uia="video-title">Stranger Things Flg. 1 Kapitel Eins</div>
    </body></html>
    "#;
    assert_eq!(netflix_title(html), "Stranger Things");
}

#[test]
fn netflix_title_without_marker_is_unchanged() {
    let html = r#"<html><body><span data-uia="video-title">Dark</span></body></html>"#;
    assert_eq!(netflix_title(html), "Dark");
}

#[test]
fn netflix_title_falls_back_to_document_title() {
    let html = r#"<html><head><title>Dark - Netflix</title></head><body></body></html>"#;
    assert_eq!(netflix_title(html), "Dark - Netflix");
}

#[test]
fn netflix_title_empty_when_nothing_found() {
    assert_eq!(netflix_title("<html><body></body></html>"), "");
}

#[test]
fn netflix_empty_player_element_falls_back() {
    let html = r#"
    <html><head><title>Fallback</title></head><body>
        <div data-uia="video-title">Flg. 2</div>
    </body></html>
    "#;
    // Marker at the start truncates to nothing; the document title steps in.
    assert_eq!(netflix_title(html), "Fallback");
}

#[test]
fn dvd_poster_reads_src_and_alt() {
    let html = r#"
    <html><body>
        <div class="dvd-container" onclick="showDvdPoster()">
            <img src="http://img/1.png" alt="Poster">
        </div>
    </body></html>
    "#;
    assert_eq!(
        dvd_poster(html),
        Ok(DvdPoster {
            image_src: "http://img/1.png".to_string(),
            alt_text: "Poster".to_string(),
        })
    );
}

#[test]
fn dvd_poster_requires_the_inline_handler() {
    // Same class, wrong handler attribute: not the poster container.
    let html = r#"
    <html><body>
        <div class="dvd-container" onclick="somethingElse()">
            <img src="http://img/1.png" alt="Poster">
        </div>
    </body></html>
    "#;
    assert_eq!(dvd_poster(html), Err(MISSING_CONTAINER.to_string()));
}

#[test]
fn dvd_poster_missing_container_fails() {
    let html = r#"<html><body><p>nothing here</p></body></html>"#;
    assert_eq!(dvd_poster(html), Err(MISSING_CONTAINER.to_string()));
}

#[test]
fn dvd_poster_missing_image_or_src_fails() {
    let no_img = r#"
    <html><body><div class="dvd-container" onclick="showDvdPoster()"></div></body></html>
    "#;
    assert_eq!(dvd_poster(no_img), Err(MISSING_IMAGE.to_string()));

    let empty_src = r#"
    <html><body>
        <div class="dvd-container" onclick="showDvdPoster()"><img src="" alt="x"></div>
    </body></html>
    "#;
    assert_eq!(dvd_poster(empty_src), Err(MISSING_IMAGE.to_string()));
}

#[test]
fn dvd_poster_defaults_missing_alt_text() {
    let html = r#"
    <html><body>
        <div class="dvd-container" onclick="showDvdPoster()"><img src="http://img/2.png"></div>
    </body></html>
    "#;
    let poster = dvd_poster(html).expect("poster");
    assert_eq!(poster.alt_text, DEFAULT_ALT_TEXT);
}

#[test]
fn title_cards_collects_labels_and_images() {
    let html = r#"
    <html><body>
        <div class="title-card">
            <div><a aria-label="Dark"><img src="http://img/dark.jpg"></a></div>
        </div>
        <div class="title-card">
            <div><a aria-label="1899"></a></div>
        </div>
        <div class="title-card">
            <div><a><img src="http://img/unlabelled.jpg"></a></div>
        </div>
    </body></html>
    "#;
    assert_eq!(
        title_cards(html),
        vec![
            TitleCard {
                title: "Dark".to_string(),
                image_url: Some("http://img/dark.jpg".to_string()),
            },
            TitleCard {
                title: "1899".to_string(),
                image_url: None,
            },
        ]
    );
}
