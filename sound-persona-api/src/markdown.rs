use regex_lite::Regex;
use std::sync::LazyLock;

static STRONG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*(.+?)\*\*|__(.+?)__").expect("strong pattern"));
static EM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*([^*\s][^*]*?)\*").expect("em pattern"));
static CODE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"`([^`]+)`").expect("code pattern"));

pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

static ORDERED_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+[.)]\s+(.*)$").expect("ordered item pattern"));
static TABLE_RULE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\|?\s*:?-{3,}:?\s*(?:\|\s*:?-{3,}:?\s*)*\|?$").expect("table rule pattern")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum List {
    Unordered,
    Ordered,
}

impl List {
    fn tag(self) -> &'static str {
        match self {
            List::Unordered => "ul",
            List::Ordered => "ol",
        }
    }
}

/// Converts the subset of markdown the model is asked to produce into HTML.
/// Input is escaped first, so the output is safe to inject as-is.
pub fn markdown_to_html(text: &str) -> String {
    let mut html = String::new();
    let mut list: Option<List> = None;
    let mut table: Vec<&str> = Vec::new();
    let mut in_code = false;

    for raw in text.lines() {
        let line = raw.trim();

        if in_code {
            if line.starts_with("```") {
                html.push_str("</code></pre>");
                in_code = false;
            } else {
                html.push_str(&escape_html(raw));
                html.push('\n');
            }
            continue;
        }

        let item = list_item(line);
        let is_row = line.len() > 1 && line.starts_with('|') && line.ends_with('|');

        if let Some(open) = list {
            if item.map(|(kind, _)| kind) != Some(open) {
                html.push_str(&format!("</{}>", open.tag()));
                list = None;
            }
        }
        if !is_row && !table.is_empty() {
            html.push_str(&render_table(&table));
            table.clear();
        }

        if line.starts_with("```") {
            html.push_str("<pre><code>");
            in_code = true;
            continue;
        }

        if line.is_empty() {
            continue;
        }

        if let Some((kind, body)) = item {
            if list.is_none() {
                html.push_str(&format!("<{}>", kind.tag()));
                list = Some(kind);
            }
            html.push_str(&format!("<li>{}</li>", inline(body)));
        } else if is_row {
            table.push(line);
        } else if line == "---" || line == "***" {
            html.push_str("<hr>");
        } else if let Some(h) = line.strip_prefix("### ") {
            html.push_str(&format!("<h4>{}</h4>", inline(h)));
        } else if let Some(h) = line.strip_prefix("## ") {
            html.push_str(&format!("<h3>{}</h3>", inline(h)));
        } else if let Some(h) = line.strip_prefix("# ") {
            html.push_str(&format!("<h2>{}</h2>", inline(h)));
        } else {
            html.push_str(&format!("<p>{}</p>", inline(line)));
        }
    }

    if let Some(open) = list {
        html.push_str(&format!("</{}>", open.tag()));
    }
    if !table.is_empty() {
        html.push_str(&render_table(&table));
    }
    if in_code {
        html.push_str("</code></pre>");
    }

    html
}

fn list_item(line: &str) -> Option<(List, &str)> {
    line.strip_prefix("* ")
        .or_else(|| line.strip_prefix("- "))
        .map(|body| (List::Unordered, body))
        .or_else(|| {
            ORDERED_ITEM
                .captures(line)
                .and_then(|c| c.get(1))
                .map(|m| (List::Ordered, m.as_str()))
        })
}

/// A header row is only recognised when a `|---|` rule follows it.
fn render_table(rows: &[&str]) -> String {
    let (header, body) = match rows {
        [head, rule, rest @ ..] if TABLE_RULE.is_match(rule) => (Some(*head), rest),
        _ => (None, rows),
    };

    let mut html = String::from("<table>");
    if let Some(head) = header {
        html.push_str(&format!("<thead>{}</thead>", table_row(head, "th")));
    }
    html.push_str("<tbody>");
    for row in body.iter().filter(|r| !TABLE_RULE.is_match(r)) {
        html.push_str(&table_row(row, "td"));
    }
    html.push_str("</tbody></table>");
    html
}

fn table_row(row: &str, cell: &str) -> String {
    let cells: String = row
        .trim_matches('|')
        .split('|')
        .map(|c| format!("<{cell}>{}</{cell}>", inline(c.trim())))
        .collect();
    format!("<tr>{}</tr>", cells)
}

fn inline(text: &str) -> String {
    let escaped = escape_html(text);
    let coded = CODE.replace_all(&escaped, "<code>$1</code>");
    let strong = STRONG.replace_all(&coded, "<strong>$1$2</strong>");
    EM.replace_all(&strong, "<em>$1</em>").into_owned()
}
