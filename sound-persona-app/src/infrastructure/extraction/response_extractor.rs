use crate::domain::AnalysisResult;
use regex_lite::Regex;
use std::sync::LazyLock;

static TYPE_CODE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Type:\s*\*\*\[?([A-Z]{4})\]?\*\*").expect("type code pattern")
});

static TITLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"『([^』]*)』").expect("title pattern"));

static COLOR_HEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#(?:[0-9a-fA-F]{3}){1,2}").expect("hex color pattern"));

static COLOR_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"カラー名[* \t]*[:：]([^\n]*)(?:\n([^\n]*))?").expect("color name pattern")
});

/// A list bullet or another `label:` item, which is never a color name.
static LABELLED_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(?:[-+*]\s|\d+\.\s|[^:：]*[:：])").expect("labelled line pattern")
});

/// Picks the structured fields out of generated markdown.
///
/// Each field is one independent first-match search; a field the model did
/// not produce is left as `None` and never stops the others.
pub fn extract_analysis(text: &str) -> AnalysisResult {
    AnalysisResult::new(text.to_string())
        .with_type_code(extract_type_code(text))
        .with_title(extract_title(text))
        .with_color_hex(extract_color_hex(text))
        .with_color_name(extract_color_name(text))
}

fn extract_type_code(text: &str) -> Option<String> {
    TYPE_CODE
        .captures(text)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}

fn extract_title(text: &str) -> Option<String> {
    TITLE
        .captures(text)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().trim().to_string())
        .filter(|t| !t.is_empty())
}

fn extract_color_hex(text: &str) -> Option<String> {
    COLOR_HEX.find(text).map(|m| m.as_str().to_string())
}

/// Value on the label's own line, else the following line when the label
/// line is empty. The following line never counts when it is another item.
fn extract_color_name(text: &str) -> Option<String> {
    let captures = COLOR_NAME.captures(text)?;

    let same_line = captures.get(1).map(|m| strip_emphasis(m.as_str()));
    if let Some(name) = same_line.filter(|n| !n.is_empty()) {
        return Some(name);
    }

    captures
        .get(2)
        .map(|m| m.as_str())
        .filter(|line| !LABELLED_LINE.is_match(line))
        .map(strip_emphasis)
        .filter(|n| !n.is_empty())
}

fn strip_emphasis(line: &str) -> String {
    line.replace('*', "").trim().trim_matches('_').trim().to_string()
}
