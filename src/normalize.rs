use regex::Regex;
use std::sync::LazyLock;

static URL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"http\S+|www\S+|https\S+").unwrap());
static MENTION: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"@\w+").unwrap());
static HASHTAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"#(\w+)").unwrap());
// `_` and combining marks count as word characters to the regex engine; both
// go with the rest of the punctuation.
static PUNCTUATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s]|_|\p{M}").unwrap());
static DIGITS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+").unwrap());
static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Normalizes an optional raw post body. Missing text becomes `""`.
pub fn clean(raw: Option<&str>) -> String {
    match raw {
        Some(text) => clean_text(text),
        None => String::new(),
    }
}

/// Lowercases and strips URLs, mentions, hashtag markers, punctuation and
/// digits, then collapses whitespace. The steps are order-sensitive.
pub fn clean_text(text: &str) -> String {
    let text = text.to_lowercase();
    let text = URL.replace_all(&text, "");
    let text = MENTION.replace_all(&text, "");
    let text = HASHTAG.replace_all(&text, "$1");
    let text = PUNCTUATION.replace_all(&text, "");
    let text = DIGITS.replace_all(&text, "");
    let text = WHITESPACE.replace_all(&text, " ");

    text.trim().to_string()
}
