use social_analyze::stopwords::StopwordFilter;

fn words(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}

#[test]
fn given_english_filter_when_filtering_then_function_words_are_removed() {
    let filter = StopwordFilter::english();

    let kept = filter.filter(words(&["the", "cat", "is", "on", "the", "mat"]));

    assert_eq!(kept, words(&["cat", "mat"]));
}

#[test]
fn given_english_filter_when_inspecting_then_it_has_the_standard_list() {
    let filter = StopwordFilter::english();

    assert_eq!(filter.len(), 179);
    assert!(filter.is_stopword("now"));
    assert!(filter.is_stopword("don't"));
    assert!(!filter.is_stopword("great"));
}

#[test]
fn given_uppercase_token_when_filtering_then_membership_is_case_sensitive() {
    let filter = StopwordFilter::english();

    assert_eq!(filter.filter(words(&["The", "the"])), words(&["The"]));
}

#[test]
fn given_custom_set_when_filtering_then_only_those_words_are_removed() {
    let filter = StopwordFilter::new(["foo"]);

    assert_eq!(filter.filter(words(&["foo", "the", "bar"])), words(&["the", "bar"]));
}
