//! Output formatting helpers.
//!
//! Item JSON goes to stdout so it can be piped; status lines and page
//! footers go to stderr.

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;

use silverwatch::Page;
use silverwatch::error::ErrorBody;

/// Print a success message.
pub fn success(msg: &str) {
    println!("{} {}", "✓".green(), msg);
}

/// Print an error message.
pub fn error(msg: &str) {
    eprintln!("{} {}", "✗".red(), msg);
}

/// Print a labeled field.
pub fn field(label: &str, value: &str) {
    println!("{}: {}", label.dimmed(), value);
}

/// Print a value as compact JSON.
pub fn json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string(value)?;
    println!("{}", json);
    Ok(())
}

/// Print a value as pretty-printed JSON.
pub fn json_pretty<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{}", json);
    Ok(())
}

/// Print a page of items followed by its footer.
pub fn page<T: Serialize>(page: &Page<T>, page_number: u32, pretty: bool) -> Result<()> {
    for item in &page.results {
        if pretty {
            json_pretty(item)?;
        } else {
            json(item)?;
        }
    }

    eprintln!();
    eprintln!("{}", page_footer(page, page_number).dimmed());
    Ok(())
}

/// Footer line summarizing a page of results.
pub fn page_footer<T>(page: &Page<T>, page_number: u32) -> String {
    let mut footer = format!(
        "page {page_number}: {} of {} item(s)",
        page.results.len(),
        page.count
    );
    if page.has_next() {
        footer.push_str(", more available");
    }
    footer
}

/// Render field-keyed validation messages, one field per line. Returns
/// `None` when the body carries no field errors.
pub fn field_errors(body: &ErrorBody) -> Option<String> {
    let ErrorBody::Fields { fields } = body else {
        return None;
    };

    let lines: Vec<String> = fields
        .iter()
        .map(|(field, messages)| format!("  {field}: {}", messages.join("; ")))
        .collect();
    Some(lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    fn page_of(count: u64, shown: usize, next: Option<&str>) -> Page<serde_json::Value> {
        Page {
            count,
            next: next.map(str::to_string),
            previous: None,
            results: vec![serde_json::json!({}); shown],
        }
    }

    #[test]
    fn footer_reports_counts() {
        let footer = page_footer(&page_of(42, 10, Some("http://x/?page=2")), 1);
        assert_eq!(footer, "page 1: 10 of 42 item(s), more available");
    }

    #[test]
    fn footer_on_last_page_omits_more() {
        let footer = page_footer(&page_of(12, 2, None), 2);
        assert_eq!(footer, "page 2: 2 of 12 item(s)");
    }

    #[test]
    fn field_errors_render_one_line_per_field() {
        let mut fields = BTreeMap::new();
        fields.insert(
            "email".to_string(),
            vec!["Enter a valid email address.".to_string()],
        );
        fields.insert(
            "password".to_string(),
            vec!["Too short.".to_string(), "Too common.".to_string()],
        );

        let rendered = field_errors(&ErrorBody::Fields { fields }).unwrap();
        assert_eq!(
            rendered,
            "  email: Enter a valid email address.\n  password: Too short.; Too common."
        );
    }

    #[test]
    fn detail_and_empty_bodies_have_no_field_errors() {
        assert!(field_errors(&ErrorBody::Detail {
            message: "Forbidden".to_string()
        })
        .is_none());
        assert!(field_errors(&ErrorBody::Empty).is_none());
    }
}
