use social_analyze::error::TopicError;
use social_analyze::vectorizer::CountVectorizer;

#[test]
fn given_documents_when_fitting_then_vocabulary_is_sorted_without_stop_words() {
    let mut vectorizer = CountVectorizer::new(1, 1.0);
    let docs = ["zebra apple the", "Apple zebra", "apple mango x"];

    let matrix = vectorizer.fit_transform(&docs).unwrap();

    assert_eq!(vectorizer.vocabulary(), ["apple", "mango", "zebra"]);
    assert_eq!(matrix.n_docs(), 3);
    assert_eq!(matrix.rows[0], vec![(0, 1.0), (2, 1.0)]);
    assert_eq!(matrix.total_count(), 6.0);
}

#[test]
fn given_common_terms_when_fitting_with_max_df_then_they_are_pruned() {
    let mut vectorizer = CountVectorizer::new(1, 0.5);
    let docs = ["zebra apple", "apple zebra", "apple mango"];

    vectorizer.fit_transform(&docs).unwrap();

    assert_eq!(vectorizer.vocabulary(), ["mango"]);
}

#[test]
fn given_only_stop_words_when_fitting_then_fails_with_empty_vocabulary() {
    let mut vectorizer = CountVectorizer::default();

    let result = vectorizer.fit_transform(&["the and of", ""]);

    assert_eq!(result.unwrap_err(), TopicError::EmptyVocabulary);
}

#[test]
fn given_too_few_documents_for_min_df_when_fitting_then_fails_with_invalid_thresholds() {
    let mut vectorizer = CountVectorizer::new(2, 0.5);

    let result = vectorizer.fit_transform(&["rust code", "rust code"]);

    assert!(matches!(
        result,
        Err(TopicError::InvalidThresholds { min_df: 2, .. })
    ));
}

#[test]
fn given_rare_terms_when_fitting_then_fails_with_no_terms_remaining() {
    let mut vectorizer = CountVectorizer::default();

    let result = vectorizer.fit_transform(&["rust fast", "python slow", ""]);

    assert_eq!(result.unwrap_err(), TopicError::NoTermsRemain);
}

#[test]
fn given_fitted_vectorizer_when_transforming_then_unknown_terms_are_ignored() {
    let mut vectorizer = CountVectorizer::new(1, 1.0);
    vectorizer.fit_transform(&["rust crab", "rust cargo"]).unwrap();

    let matrix = vectorizer.transform(&["rust rust python"]);

    let rust = vectorizer.term_index("rust").unwrap();
    assert_eq!(matrix.rows[0], vec![(rust, 2.0)]);
}
