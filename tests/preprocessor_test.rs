use social_analyze::models::{Corpus, Document};
use social_analyze::preprocessor::{Preprocessor, TextResources};

#[test]
fn given_noisy_post_when_processing_then_returns_content_tokens() {
    let resources = TextResources::english();
    let preprocessor = Preprocessor::new(&resources);

    let processed = preprocessor.process(Some("Check http://x.co now! @bob #Great2024"));

    assert_eq!(processed.tokens, vec!["check", "great"]);
    assert_eq!(processed.text, "check great");
}

#[test]
fn given_missing_text_when_processing_then_returns_empty_result() {
    let preprocessor = Preprocessor::new(TextResources::english_shared());

    let processed = preprocessor.process(None);

    assert!(processed.tokens.is_empty());
    assert_eq!(processed.text, "");
}

#[test]
fn given_plural_nouns_when_processing_then_tokens_are_lemmatized() {
    let preprocessor = Preprocessor::new(TextResources::english_shared());

    let processed = preprocessor.process(Some("The cats were chasing mice in the gardens"));

    assert_eq!(processed.tokens, vec!["cat", "chasing", "mouse", "garden"]);
    assert_eq!(processed.text, processed.tokens.join(" "));
}

#[test]
fn given_corpus_when_processing_in_parallel_then_matches_sequential_order() {
    let texts = [
        "Loving the sunshine today #summer",
        "Traffic is terrible this morning",
        "",
        "New phones launched, great cameras",
        "@bob http://x.co",
    ];
    let resources = TextResources::english();
    let preprocessor = Preprocessor::new(&resources);
    let mut sequential = Corpus::from_texts(texts);
    let mut parallel = Corpus::from_texts(texts);

    preprocessor.process_corpus(&mut sequential, false);
    preprocessor.process_corpus(&mut parallel, true);

    for (left, right) in sequential.iter().zip(parallel.iter()) {
        assert_eq!(left.tokens, right.tokens);
        assert_eq!(left.processed_text, right.processed_text);
    }
    assert_eq!(sequential.documents[2].tokens, Some(Vec::new()));
    assert_eq!(sequential.documents[4].processed_text.as_deref(), Some(""));
}

#[test]
fn given_document_without_text_when_processing_corpus_then_it_gets_empty_tokens() {
    let mut corpus = Corpus::new(vec![Document::default(), Document::new("sunny beach")]);
    let preprocessor = Preprocessor::new(TextResources::english_shared());

    preprocessor.process_corpus(&mut corpus, false);

    assert_eq!(corpus.documents[0].tokens, Some(Vec::new()));
    assert_eq!(corpus.documents[1].processed_text.as_deref(), Some("sunny beach"));
}

#[test]
fn given_already_processed_document_when_processing_again_then_it_is_not_rewritten() {
    let mut doc = Document::new("fresh words here");
    doc.tokens = Some(vec!["kept".to_string()]);
    doc.processed_text = Some("kept".to_string());
    let mut corpus = Corpus::new(vec![doc]);
    let preprocessor = Preprocessor::new(TextResources::english_shared());

    preprocessor.process_corpus(&mut corpus, false);

    assert_eq!(corpus.documents[0].processed_text.as_deref(), Some("kept"));
}
