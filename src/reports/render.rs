//! Renders generated body text into the downloadable HTML artifact.
//!
//! Layout convention: a trimmed line ending in a colon is a section heading,
//! a line starting with a bullet marker is a list item, anything else is a
//! paragraph.

use time::macros::format_description;
use time::OffsetDateTime;
use tracing::info;

use crate::store::DocumentStore;

pub const ARTIFACT_EXT: &str = "html";
pub const ARTIFACT_CONTENT_TYPE: &str = "text/html; charset=utf-8";

/// `report_{author}_{YYYYMMDD_HHMMSS}.html`
pub fn report_filename(author: &str, now: OffsetDateTime) -> String {
    let fmt = format_description!("[year][month][day]_[hour][minute][second]");
    // The format description has no fallible components.
    let stamp = now.format(&fmt).expect("format timestamp");
    format!("report_{author}_{stamp}.{ARTIFACT_EXT}")
}

/// Render the full document and persist it; returns the filename used as the
/// retrieval handle. Store failures are fatal to the generation request.
pub async fn render_to_store(
    store: &dyn DocumentStore,
    topic: &str,
    body: &str,
    author: &str,
) -> anyhow::Result<String> {
    let now = OffsetDateTime::now_utc();
    let document = render_document(topic, body, author, now);
    let filename = report_filename(author, now);
    store.put(&filename, document.into()).await?;
    info!(filename = %filename, author, "artifact written");
    Ok(filename)
}

pub fn render_document(
    topic: &str,
    body: &str,
    author: &str,
    generated_at: OffsetDateTime,
) -> String {
    let fmt = format_description!("[year]-[month]-[day] [hour]:[minute]:[second] UTC");
    let stamp = generated_at.format(&fmt).expect("format timestamp");

    let mut html = String::with_capacity(body.len() * 2);
    html.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str(&format!("<title>{}</title>\n", escape(topic)));
    html.push_str(
        "<style>body{font-family:serif;max-width:48rem;margin:2rem auto;line-height:1.5}\
         h1{border-bottom:2px solid #333}h2{margin-top:1.5em}\
         .meta{color:#555;font-style:italic}</style>\n</head>\n<body>\n",
    );
    html.push_str(&format!("<h1>{}</h1>\n", escape(topic)));
    html.push_str(&format!(
        "<p class=\"meta\">Prepared by {} on {}</p>\n",
        escape(author),
        stamp
    ));
    html.push_str(&render_body(body));
    html.push_str("</body>\n</html>\n");
    html
}

fn render_body(body: &str) -> String {
    let mut out = String::with_capacity(body.len() * 2);
    let mut in_list = false;

    for line in body.lines() {
        let line = line.trim();
        let bullet = line
            .strip_prefix("• ")
            .or_else(|| line.strip_prefix("- "));

        if let Some(item) = bullet {
            if !in_list {
                out.push_str("<ul>\n");
                in_list = true;
            }
            out.push_str(&format!("<li>{}</li>\n", escape(item)));
            continue;
        }
        if in_list {
            out.push_str("</ul>\n");
            in_list = false;
        }
        if line.is_empty() {
            continue;
        }
        if line.ends_with(':') {
            out.push_str(&format!("<h2>{}</h2>\n", escape(line.trim_end_matches(':'))));
        } else {
            out.push_str(&format!("<p>{}</p>\n", escape(line)));
        }
    }
    if in_list {
        out.push_str("</ul>\n");
    }
    out
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::FsStore;
    use regex::Regex;
    use time::macros::datetime;

    #[test]
    fn filename_matches_expected_pattern() {
        let name = report_filename("alice", datetime!(2024-03-07 09:05:01 UTC));
        assert_eq!(name, "report_alice_20240307_090501.html");

        let pattern = Regex::new(r"^report_[A-Za-z0-9_]+_\d{8}_\d{6}\.html$").unwrap();
        assert!(pattern.is_match(&name));
    }

    #[test]
    fn headings_bullets_and_paragraphs_are_classified() {
        let body = "Executive Summary:\nPlain paragraph here.\n• first\n• second\nAfter the list.";
        let html = render_document("Topic", body, "bob", datetime!(2024-01-01 00:00:00 UTC));

        assert!(html.contains("<h2>Executive Summary</h2>"));
        assert!(html.contains("<p>Plain paragraph here.</p>"));
        assert!(html.contains("<ul>\n<li>first</li>\n<li>second</li>\n</ul>"));
        assert!(html.contains("<p>After the list.</p>"));
    }

    #[test]
    fn dash_bullets_and_trailing_list_are_closed() {
        let html = render_body("- one\n- two");
        assert!(html.ends_with("</ul>\n"));
        assert!(html.contains("<li>one</li>"));
    }

    #[test]
    fn title_block_contains_topic_author_and_timestamp() {
        let html = render_document(
            "Quantum Computing",
            "body",
            "alice",
            datetime!(2024-06-15 12:30:45 UTC),
        );
        assert!(html.contains("<h1>Quantum Computing</h1>"));
        assert!(html.contains("Prepared by alice on 2024-06-15 12:30:45 UTC"));
    }

    #[test]
    fn html_in_input_is_escaped() {
        let html = render_document(
            "<script>alert(1)</script>",
            "Injected <b>tags</b> & such",
            "eve",
            datetime!(2024-01-01 00:00:00 UTC),
        );
        assert!(!html.contains("<script>alert"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("&amp; such"));
    }

    #[tokio::test]
    async fn render_to_store_persists_retrievable_artifact() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = FsStore::new(dir.path()).await.expect("store");

        let filename = render_to_store(&store, "Topic", "Summary:\nBody.", "carol")
            .await
            .expect("render");

        let bytes = store.get(&filename).await.expect("get").expect("exists");
        let html = String::from_utf8(bytes.to_vec()).expect("utf8");
        assert!(html.contains("<h2>Summary</h2>"));
    }
}
