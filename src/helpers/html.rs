//! HTML and text helper functions

/// Escape HTML special characters
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Strip HTML tags from a string
pub fn strip_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut in_tag = false;

    for c in s.chars() {
        match c {
            '<' => {
                in_tag = true;
                // Keep words on either side of a tag apart
                result.push(' ');
            }
            '>' => in_tag = false,
            _ if !in_tag => result.push(c),
            _ => {}
        }
    }

    result
}

/// Truncate a string to a specified length
pub fn truncate(s: &str, length: usize, omission: Option<&str>) -> String {
    let omission = omission.unwrap_or("...");

    if s.chars().count() <= length {
        s.to_string()
    } else {
        let truncated: String = s
            .chars()
            .take(length.saturating_sub(omission.chars().count()))
            .collect();
        format!("{}{}", truncated.trim_end(), omission)
    }
}

/// Count words of visible text in an HTML fragment
pub fn word_count(html: &str) -> usize {
    strip_html(html).split_whitespace().count()
}

/// Estimated reading time (like "5 min read"), never below one minute
pub fn read_time(html: &str, words_per_minute: usize) -> String {
    let wpm = words_per_minute.max(1);
    let minutes = word_count(html).div_ceil(wpm).max(1);
    format!("{} min read", minutes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_html() {
        assert_eq!(
            strip_html("<p>Hello <b>World</b></p>").split_whitespace().collect::<Vec<_>>(),
            vec!["Hello", "World"]
        );
        assert_eq!(strip_html("plain"), "plain");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Hello World", 20, None), "Hello World");
        assert_eq!(truncate("Hello World", 8, None), "Hello...");
    }

    #[test]
    fn test_read_time() {
        assert_eq!(read_time("", 200), "1 min read");
        let body = "<p>word </p>".repeat(450);
        assert_eq!(word_count(&body), 450);
        assert_eq!(read_time(&body, 200), "3 min read");
        assert_eq!(read_time(&body, 0), "450 min read");
    }

    #[test]
    fn test_html_escape() {
        assert_eq!(html_escape("<a href=\"x\">"), "&lt;a href=&quot;x&quot;&gt;");
    }
}
