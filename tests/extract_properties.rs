mod common;

use std::sync::Arc;
use std::thread;

use common::{POST_ID, assert_well_formed, hashtag, mention, url};
use post_entities::config::ExtractorConfig;
use post_entities::domain::entities::{OffsetUnit, PostEntityType};
use post_entities::{EntityExtractor, extract};

const UNICODE_TEXT: &str = "Grüße #café 😀 @ümit und münchen.de 🎉 #tag";

const SAMPLES: &[&str] = &[
    "Hi @john_doe, @admin(:D) and @test! Cool #Java #SpringBoot application! #dev #test GH link github.com/abc",
    "https://www.google.com      and my github github.com, but@invalid.com",
    "Url followed by a https://comma.co.uk, ThisIsAValidUrl.gg and, www.Also3ValidUrl.co.",
    "Hello @valid_len_12345, and @max_length_valid_mention_that_gets_chopped_at_20th_char",
    "see (docs.rs/serde) and [crates.io], then http://localhost.dev:8080/a?b=c!",
    UNICODE_TEXT,
];

fn extractor(unit: OffsetUnit) -> EntityExtractor {
    EntityExtractor::new(ExtractorConfig {
        offset_unit: unit,
        ..ExtractorConfig::default()
    })
}

#[test]
fn test_extract_is_deterministic() {
    for text in SAMPLES {
        let first = extract(POST_ID, *text).unwrap();
        let second = extract(POST_ID, *text).unwrap();

        assert_eq!(first, second, "{text:?}");
    }
}

#[test]
fn test_entities_are_ordered_and_reslice_in_every_unit() {
    for unit in [OffsetUnit::Chars, OffsetUnit::Bytes, OffsetUnit::Utf16] {
        let extractor = extractor(unit);

        for text in SAMPLES {
            let entities = extractor.extract(POST_ID, *text).unwrap();
            assert!(!entities.is_empty(), "{text:?}");
            assert_well_formed(text, &entities, unit);
        }
    }
}

#[test]
fn test_offset_unit_changes_offsets_not_values() {
    let chars = extractor(OffsetUnit::Chars).extract(POST_ID, UNICODE_TEXT).unwrap();
    let bytes = extractor(OffsetUnit::Bytes).extract(POST_ID, UNICODE_TEXT).unwrap();
    let utf16 = extractor(OffsetUnit::Utf16).extract(POST_ID, UNICODE_TEXT).unwrap();

    assert_eq!(
        chars,
        vec![
            hashtag(6, 11, "café"),
            mention(14, 19, "ümit"),
            url(24, 34, "münchen.de"),
            hashtag(37, 41, "tag"),
        ]
    );
    assert_eq!(
        bytes,
        vec![
            hashtag(8, 14, "café"),
            mention(20, 26, "ümit"),
            url(31, 42, "münchen.de"),
            hashtag(48, 52, "tag"),
        ]
    );
    assert_eq!(
        utf16,
        vec![
            hashtag(6, 11, "café"),
            mention(15, 20, "ümit"),
            url(25, 35, "münchen.de"),
            hashtag(39, 43, "tag"),
        ]
    );
}

#[test]
fn test_ascii_text_offsets_match_across_units() {
    let text = SAMPLES[0];

    let chars = extractor(OffsetUnit::Chars).extract(POST_ID, text).unwrap();
    let bytes = extractor(OffsetUnit::Bytes).extract(POST_ID, text).unwrap();
    let utf16 = extractor(OffsetUnit::Utf16).extract(POST_ID, text).unwrap();

    assert_eq!(chars, bytes);
    assert_eq!(chars, utf16);
}

#[test]
fn test_brackets_and_trailing_punctuation_are_trimmed() {
    let entities = extract(POST_ID, SAMPLES[4]).unwrap();

    let urls: Vec<&str> = entities
        .iter()
        .filter(|e| e.entity_type == PostEntityType::Url)
        .map(|e| e.value.as_str())
        .collect();

    assert_eq!(
        urls,
        vec!["docs.rs/serde", "crates.io", "http://localhost.dev:8080/a?b=c"]
    );
}

#[test]
fn test_link_targets_for_extracted_urls() {
    let entities = extract(POST_ID, SAMPLES[2]).unwrap();

    let targets: Vec<String> = entities.iter().filter_map(|e| e.link_target()).collect();

    assert_eq!(
        targets,
        vec![
            "https://comma.co.uk/",
            "https://thisisavalidurl.gg/",
            "https://www.also3validurl.co/",
        ]
    );
}

#[test]
fn test_shared_extractor_across_threads() {
    let extractor = Arc::new(EntityExtractor::default());
    let expected = extractor.extract(POST_ID, SAMPLES[0]).unwrap();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let extractor = Arc::clone(&extractor);
            thread::spawn(move || extractor.extract(POST_ID, SAMPLES[0]).unwrap())
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
