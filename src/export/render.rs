//! Rendering a single record into an HTML or plain-text document.

use minijinja::{Environment, Value, context};
use thiserror::Error;

use crate::domain::{ContentRecord, ContentTrust, ExportFormat};
use crate::infra::{strip_tags, to_plain_text};

/// Relative link from a record file back to the index.
pub const INDEX_LINK: &str = "../index.html";

/// Fixed HTML template for a single exported record.
pub const RECORD_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{{ title }}</title>
    <meta name="description" content="{{ excerpt }}">
    <meta name="generator" content="staticpress">
    <style>
        body {
            font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
            line-height: 1.6;
            color: #333;
            max-width: 800px;
            margin: 0 auto;
            padding: 20px;
        }
        h1 { color: #2c3e50; margin-bottom: 10px; }
        .post-meta {
            color: #7f8c8d;
            font-size: 0.9em;
            margin-bottom: 30px;
            border-bottom: 1px solid #eee;
            padding-bottom: 15px;
        }
        .post-content { line-height: 1.8; }
        .post-content img { max-width: 100%; height: auto; }
        .post-content blockquote {
            border-left: 4px solid #3498db;
            padding-left: 15px;
            margin-left: 0;
            color: #555;
            font-style: italic;
        }
        .back-link { display: inline-block; margin-top: 30px; color: #3498db; text-decoration: none; }
        .back-link:hover { text-decoration: underline; }
    </style>
</head>
<body>
    <article>
        <h1>{{ title }}</h1>
        <div class="post-meta">
            Published on {{ date }} | Type: {{ category }}
        </div>
        <div class="post-content">
            {{ body }}
        </div>
        <a href="{{ index_link }}" class="back-link">&larr; Back to all posts</a>
    </article>
</body>
</html>
"##;

/// Errors while rendering documents.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("template error: {0}")]
    Template(#[from] minijinja::Error),
}

/// Renders a record as a complete document in the given format.
///
/// Pure: nothing is written to disk.
pub fn render(
    record: &ContentRecord,
    format: ExportFormat,
    trust: ContentTrust,
) -> Result<String, RenderError> {
    match format {
        ExportFormat::Html => render_html(record, trust),
        ExportFormat::Txt => Ok(render_text(record)),
    }
}

/// Wraps source text for an auto-escaping template according to `trust`.
pub(crate) fn source_text(text: &str, trust: ContentTrust) -> Value {
    match trust {
        ContentTrust::Escaped => Value::from(text),
        ContentTrust::Verbatim => Value::from_safe_string(text.to_string()),
    }
}

/// Builds an environment whose `.html` templates auto-escape.
pub(crate) fn html_environment(
    name: &'static str,
    source: &'static str,
) -> Result<Environment<'static>, RenderError> {
    let mut env = Environment::new();
    env.add_template(name, source)?;
    Ok(env)
}

fn render_html(record: &ContentRecord, trust: ContentTrust) -> Result<String, RenderError> {
    let env = html_environment("record.html", RECORD_TEMPLATE)?;
    let tmpl = env.get_template("record.html")?;

    let html = tmpl.render(context! {
        title => source_text(record.title(), trust),
        excerpt => source_text(record.excerpt(), trust),
        body => source_text(record.body(), trust),
        date => record.long_date(),
        category => record.category().as_str(),
        index_link => Value::from_safe_string(INDEX_LINK.to_string()),
    })?;

    Ok(html)
}

fn render_text(record: &ContentRecord) -> String {
    format!(
        "Title: {}\nDate: {}\nType: {}\nURL: {}\n\n{}\n\nView all posts: {}\n",
        to_plain_text(record.title()),
        record.long_date(),
        record.category(),
        strip_tags(record.slug()),
        to_plain_text(record.body()),
        INDEX_LINK,
    )
}
