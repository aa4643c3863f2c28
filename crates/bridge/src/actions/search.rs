use crate::config::SearchConfig;

/// Input containing a `.` is treated as an address rather than a query.
pub fn looks_like_url(input: &str) -> bool {
    input.contains('.')
}

/// Browser target for free-form input: URL-like input is opened directly
/// (with the default scheme when it has no `http` prefix), anything else
/// becomes a web search.
pub fn browser_target(config: &SearchConfig, input: &str) -> String {
    if looks_like_url(input) {
        if input.starts_with("http") {
            input.to_string()
        } else {
            format!("{}://{}", config.default_scheme, input)
        }
    } else {
        fill_query(&config.web_search_template, input)
    }
}

pub fn store_search_url(config: &SearchConfig, query: &str) -> String {
    fill_query(&config.store_search_template, query)
}

fn fill_query(template: &str, query: &str) -> String {
    template.replace("{query}", &urlencoding::encode(query))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_domain_gets_default_scheme() {
        let config = SearchConfig::default();
        assert_eq!(browser_target(&config, "example.com"), "https://example.com");
    }

    #[test]
    fn test_existing_scheme_is_kept() {
        let config = SearchConfig::default();
        assert_eq!(
            browser_target(&config, "http://example.com/a?b=c"),
            "http://example.com/a?b=c"
        );
    }

    #[test]
    fn test_plain_words_become_a_search() {
        let config = SearchConfig::default();
        assert_eq!(
            browser_target(&config, "buy milk"),
            "https://www.google.com/search?q=buy%20milk"
        );
        assert_eq!(
            browser_target(&config, "c++ & rust"),
            "https://www.google.com/search?q=c%2B%2B%20%26%20rust"
        );
    }

    #[test]
    fn test_store_search_is_encoded() {
        let config = SearchConfig::default();
        assert_eq!(
            store_search_url(&config, "maps offline"),
            "https://play.google.com/store/search?q=maps%20offline"
        );
    }
}
