use relay_core::{compose, ExtractionResult, OutboundMessage};

#[test]
fn generic_selection_maps_to_text_and_url() {
    let result = ExtractionResult::GenericSelection {
        text: "picked text".to_string(),
        url: "https://example.com/page".to_string(),
    };
    assert_eq!(
        compose(&result),
        Some(OutboundMessage {
            text: Some("picked text".to_string()),
            url: "https://example.com/page".to_string(),
            ..OutboundMessage::default()
        })
    );
}

#[test]
fn netflix_info_sets_flag_and_title() {
    let result = ExtractionResult::NetflixInfo {
        url: "https://www.netflix.com/watch/81630670".to_string(),
        title: "Stranger Things".to_string(),
    };
    let message = compose(&result).expect("netflix message");
    assert!(message.netflix);
    assert_eq!(message.title.as_deref(), Some("Stranger Things"));
    assert_eq!(message.url, "https://www.netflix.com/watch/81630670");
    assert_eq!(message.text, None);
    assert_eq!(message.image_src, None);
}

#[test]
fn fsmirror_info_forwards_alt_text_in_text_slot() {
    let result = ExtractionResult::FsMirrorInfo {
        url: "https://x.fsmirror.test/item/1".to_string(),
        image_src: "http://img/1.png".to_string(),
        alt_text: "Poster".to_string(),
    };
    assert_eq!(
        compose(&result),
        Some(OutboundMessage {
            text: Some("Poster".to_string()),
            url: "https://x.fsmirror.test/item/1".to_string(),
            image_src: Some("http://img/1.png".to_string()),
            ..OutboundMessage::default()
        })
    );
}

#[test]
fn failure_composes_no_message() {
    let result = ExtractionResult::Failure {
        reason: "DVD container not found".to_string(),
    };
    assert_eq!(compose(&result), None);
    assert_eq!(result.failure_reason(), Some("DVD container not found"));
}

#[test]
fn compose_is_deterministic() {
    let result = ExtractionResult::GenericSelection {
        text: "a".to_string(),
        url: "https://a.example".to_string(),
    };
    assert_eq!(compose(&result), compose(&result));
}
