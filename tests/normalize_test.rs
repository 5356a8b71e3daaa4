use social_analyze::normalize::{clean, clean_text};

#[test]
fn given_missing_text_when_cleaning_then_returns_empty_string() {
    assert_eq!(clean(None), "");
}

#[test]
fn given_post_with_url_mention_and_hashtag_when_cleaning_then_keeps_only_words() {
    let cleaned = clean(Some("Check http://x.co now! @bob #Great2024"));

    assert_eq!(cleaned, "check now great");
}

#[test]
fn given_www_and_https_links_when_cleaning_then_links_are_removed() {
    let cleaned = clean_text("see www.example.com and https://t.co/abc today");

    assert_eq!(cleaned, "see and today");
}

#[test]
fn given_underscores_and_digits_when_cleaning_then_output_is_alphanumeric() {
    let cleaned = clean_text("Hello_World 123 it's   2024!!");

    assert_eq!(cleaned, "helloworld its");
    assert!(cleaned
        .chars()
        .all(|c| c.is_alphabetic() || c == ' '));
    assert!(!cleaned.contains("  "));
}

#[test]
fn given_cleaned_text_when_cleaning_again_then_it_is_unchanged() {
    let once = clean_text("Loving the #sunshine at @park!! http://pic.io/1");
    let twice = clean_text(&once);

    assert_eq!(once, twice);
}

#[test]
fn given_only_noise_when_cleaning_then_returns_empty_string() {
    assert_eq!(clean_text("@bob http://x.co 2024 !!!"), "");
}

#[test]
fn given_combining_accent_when_cleaning_then_mark_is_dropped() {
    let cleaned = clean_text("e\u{301}cole caf\u{e9}");

    assert_eq!(cleaned, "ecole caf\u{e9}");
    assert!(cleaned.chars().all(|c| c.is_alphanumeric() || c == ' '));
}
