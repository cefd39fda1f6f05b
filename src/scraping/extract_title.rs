use std::sync::OnceLock;

use regex::Regex;

static TITLE_RE: OnceLock<Regex> = OnceLock::new();

/// Extracts the trimmed content of the first `<title>...</title>` span, tag name in any case.
/// Returns `None` if the document has no title tag.
pub fn extract_title(html_content: &str) -> Option<String> {
    let re = TITLE_RE.get_or_init(|| Regex::new(r"(?is)<title>(.*?)</title>").unwrap());

    re.captures(html_content)
        .and_then(|caps| caps.get(1).map(|m| m.as_str().trim().to_string()))
}
