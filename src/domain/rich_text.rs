//! Structured rich-text documents.
//!
//! Rich text is stored verbatim as JSON: a `root` node holding `heading`,
//! `paragraph`, and `text` children. The backend never renders these trees; it
//! only builds them (seed fixtures) and hands them through. The builders here
//! produce the exact node shape the persisted documents use.

use serde_json::{Value, json};

/// A heading followed by zero or more paragraphs.
#[derive(Debug, Clone)]
pub struct Section<'a> {
    pub heading: Option<&'a str>,
    pub paragraphs: &'a [&'a str],
}

/// Build a rich-text document from plain paragraphs.
pub fn paragraphs(texts: &[&str]) -> Value {
    document(texts.iter().map(|text| paragraph_node(text, 0)).collect())
}

/// Build a rich-text document from headed sections.
pub fn sections(sections: &[Section<'_>]) -> Value {
    let mut children = Vec::new();
    for section in sections {
        if let Some(heading) = section.heading {
            children.push(heading_node(heading));
        }
        for text in section.paragraphs {
            children.push(paragraph_node(text, 0));
        }
    }
    document(children)
}

/// Build a single bold-formatted paragraph mixed with plain runs. Runs are
/// `(text, bold)` pairs.
pub fn formatted_paragraph(runs: &[(&str, bool)]) -> Value {
    let children: Vec<Value> = runs
        .iter()
        .map(|(text, bold)| text_node(text, if *bold { 1 } else { 0 }))
        .collect();
    document(vec![json!({
        "type": "paragraph",
        "children": children,
        "direction": "ltr",
        "format": "",
        "indent": 0,
        "textFormat": 0,
        "version": 1,
    })])
}

/// Collect the concatenated text content of a document, for summaries and
/// assertions. Unknown node kinds are skipped.
pub fn plain_text(doc: &Value) -> String {
    let mut out = String::new();
    collect_text(doc, &mut out);
    out
}

fn collect_text(node: &Value, out: &mut String) {
    if let Some(text) = node.get("text").and_then(Value::as_str) {
        if !out.is_empty() && !out.ends_with(' ') {
            out.push(' ');
        }
        out.push_str(text);
    }
    if let Some(root) = node.get("root") {
        collect_text(root, out);
    }
    if let Some(children) = node.get("children").and_then(Value::as_array) {
        for child in children {
            collect_text(child, out);
        }
    }
}

fn document(children: Vec<Value>) -> Value {
    json!({
        "root": {
            "type": "root",
            "children": children,
            "direction": "ltr",
            "format": "",
            "indent": 0,
            "version": 1,
        }
    })
}

fn heading_node(text: &str) -> Value {
    json!({
        "type": "heading",
        "tag": "h2",
        "children": [text_node(text, 0)],
        "direction": "ltr",
        "format": "",
        "indent": 0,
        "version": 1,
    })
}

fn paragraph_node(text: &str, format: u8) -> Value {
    json!({
        "type": "paragraph",
        "children": [text_node(text, format)],
        "direction": "ltr",
        "format": "",
        "indent": 0,
        "textFormat": 0,
        "version": 1,
    })
}

fn text_node(text: &str, format: u8) -> Value {
    json!({
        "type": "text",
        "text": text,
        "detail": 0,
        "format": format,
        "mode": "normal",
        "style": "",
        "version": 1,
    })
}
