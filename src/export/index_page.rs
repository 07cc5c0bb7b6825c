//! Index page listing every exported file, grouped by category.

use minijinja::{Value, context};
use serde::Serialize;

use super::render::{RenderError, html_environment, source_text};
use crate::domain::{Category, ContentTrust, ExportedFileEntry};

/// File name of the index at the export root.
pub const INDEX_FILENAME: &str = "index.html";

/// Fixed template for the index page.
pub const INDEX_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Exported Content</title>
    <style>
        body {
            font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif;
            line-height: 1.6;
            max-width: 800px;
            margin: 0 auto;
            padding: 20px;
            color: #333;
        }
        h1 { color: #2c3e50; border-bottom: 2px solid #eee; padding-bottom: 10px; margin-top: 0; }
        .section { margin-bottom: 30px; padding-top: 20px; border-top: 1px solid #eee; }
        h2 { color: #3498db; margin-bottom: 15px; font-size: 1.3em; }
        ul { list-style: none; padding: 0; }
        li { margin-bottom: 10px; padding: 8px 0; border-bottom: 1px solid #f0f0f0; }
        a { color: #3498db; text-decoration: none; font-weight: 500; }
        a:hover { text-decoration: underline; }
        .post-date { color: #7f8c8d; font-size: 0.9em; margin-left: 10px; }
        .post-count { color: #7f8c8d; font-size: 0.9em; font-weight: normal; }
    </style>
</head>
<body>
    <h1>Exported Content</h1>
{% for group in groups %}
    <div class="section">
        <h2>{{ group.label }} <span class="post-count">({{ group.items | length }} items)</span></h2>
        <ul>
{% for item in group.items %}
            <li><a href="{{ item.path }}">{{ item.title }}</a> <span class="post-date">{{ item.date }}</span></li>
{% endfor %}
        </ul>
    </div>
{% endfor %}
</body>
</html>
"##;

#[derive(Serialize)]
struct Group {
    label: &'static str,
    items: Vec<Item>,
}

#[derive(Serialize)]
struct Item {
    path: Value,
    title: Value,
    date: String,
}

/// Groups entries by category in first-encounter order.
///
/// Entry order inside each group is preserved.
pub fn group_by_category(entries: &[ExportedFileEntry]) -> Vec<(Category, Vec<&ExportedFileEntry>)> {
    let mut groups: Vec<(Category, Vec<&ExportedFileEntry>)> = Vec::new();
    for entry in entries {
        match groups.iter_mut().find(|(c, _)| *c == entry.category) {
            Some((_, items)) => items.push(entry),
            None => groups.push((entry.category, vec![entry])),
        }
    }
    groups
}

/// Renders the index document for a list of exported files.
///
/// Deterministic: the same entries in the same order always produce the
/// same bytes.
pub fn build_index(
    entries: &[ExportedFileEntry],
    trust: ContentTrust,
) -> Result<String, RenderError> {
    let groups: Vec<Group> = group_by_category(entries)
        .into_iter()
        .map(|(category, items)| Group {
            label: category.label(),
            items: items
                .into_iter()
                .map(|entry| Item {
                    // Paths are built from sanitized names only
                    path: Value::from_safe_string(entry.path.clone()),
                    title: source_text(&entry.title, trust),
                    date: entry.short_date(),
                })
                .collect(),
        })
        .collect();

    let env = html_environment("index.html", INDEX_TEMPLATE)?;
    let tmpl = env.get_template("index.html")?;
    Ok(tmpl.render(context! { groups => groups })?)
}
