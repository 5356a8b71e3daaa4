use social_analyze::lemmatize::Lemmatizer;

#[test]
fn given_irregular_plurals_when_lemmatizing_then_uses_exception_table() {
    let lemmatizer = Lemmatizer::new();

    assert_eq!(lemmatizer.lemmatize_word("children"), "child");
    assert_eq!(lemmatizer.lemmatize_word("leaves"), "leaf");
    assert_eq!(lemmatizer.lemmatize_word("women"), "woman");
    assert_eq!(lemmatizer.lemmatize_word("movies"), "movie");
}

#[test]
fn given_regular_plurals_when_lemmatizing_then_applies_suffix_rules() {
    let lemmatizer = Lemmatizer::new();

    let lemmas = lemmatizer.lemmatize(
        ["dogs", "cities", "boxes", "wishes", "buzzes", "pies"]
            .iter()
            .map(|word| word.to_string())
            .collect(),
    );

    assert_eq!(lemmas, vec!["dog", "city", "box", "wish", "buzz", "pie"]);
}

#[test]
fn given_words_that_only_look_plural_when_lemmatizing_then_they_are_unchanged() {
    let lemmatizer = Lemmatizer::new();

    for word in ["news", "series", "status", "analysis", "glass", "bus", "great"] {
        assert_eq!(lemmatizer.lemmatize_word(word), word);
    }
}

#[test]
fn given_custom_exception_when_lemmatizing_then_it_overrides_rules() {
    let lemmatizer = Lemmatizer::new().with_exception("octopi", "octopus");

    assert_eq!(lemmatizer.lemmatize_word("octopi"), "octopus");
}

#[test]
fn given_unknown_words_ending_in_s_when_lemmatizing_then_they_pass_through() {
    let lemmatizer = Lemmatizer::new();

    for word in ["goes", "kudos", "diabetes", "vegas", "nowadays", "upstairs", "xmas", "dallas"] {
        assert_eq!(lemmatizer.lemmatize_word(word), word);
    }
}

#[test]
fn given_plurals_of_listed_nouns_when_lemmatizing_then_they_are_reduced() {
    let lemmatizer = Lemmatizer::new();

    assert_eq!(lemmatizer.lemmatize_word("glasses"), "glass");
    assert_eq!(lemmatizer.lemmatize_word("vibes"), "vibe");
    assert_eq!(lemmatizer.lemmatize_word("sports"), "sport");
    assert_eq!(lemmatizer.lemmatize_word("buses"), "bus");
}

#[test]
fn given_extra_noun_when_lemmatizing_then_its_plural_is_reduced() {
    let lemmatizer = Lemmatizer::new();
    assert_eq!(lemmatizer.lemmatize_word("hoodies"), "hoodies");

    let lemmatizer = lemmatizer.with_nouns(["hoodie"]);

    assert_eq!(lemmatizer.lemmatize_word("hoodies"), "hoodie");
}
