use log::debug;
use regex::Regex;
use std::sync::LazyLock;

/// Runs of non-word characters. Word characters are the ASCII class
/// `[A-Za-z0-9_]`, so accented letters and other non-ASCII text separate
/// tokens the same way punctuation does.
static NON_WORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[^A-Za-z0-9_]+").expect("non-word pattern is valid")
});

/// Convert a title into a lowercase, hyphen-separated URL slug.
///
/// ```
/// use drills::utils::url_slug;
///
/// assert_eq!(url_slug("Winter Is Coming"), "winter-is-coming");
/// ```
pub fn url_slug(title: &str) -> String {
    let lowered = title.to_lowercase();
    let slug = NON_WORD
        .split(&lowered)
        .filter(|token| !token.is_empty())
        .collect::<Vec<_>>()
        .join("-");

    debug!("url_slug: {:?} -> {:?}", title, slug);
    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_slug() {
        assert_eq!(url_slug("Winter Is Coming"), "winter-is-coming");
    }

    #[test]
    fn test_collapses_extra_whitespace() {
        assert_eq!(url_slug(" Winter Is  Coming"), "winter-is-coming");
        assert_eq!(url_slug("Hold The Door   "), "hold-the-door");
    }

    #[test]
    fn test_punctuation_separates() {
        assert_eq!(
            url_slug("A Mind Needs Books, Like A Sword!"),
            "a-mind-needs-books-like-a-sword"
        );
        assert_eq!(url_slug("snake_case stays"), "snake_case-stays");
        assert_eq!(url_slug("version 2.0"), "version-2-0");
    }

    #[test]
    fn test_non_ascii_letters_separate() {
        assert_eq!(url_slug("Philosophiæ Naturalis"), "philosophi-naturalis");
    }

    #[test]
    fn test_empty_and_separator_only() {
        assert_eq!(url_slug(""), "");
        assert_eq!(url_slug(" -- !! "), "");
    }
}
