//! HTML rendering for snippet feeds.
//!
//! Pages are a base layout wrapping a content block. Every piece of user text
//! is escaped on the way out.

use std::fmt::Write;

use crate::models::FeedEntry;

/// Everything needed to render a feed page.
#[derive(Debug, Clone, Default)]
pub struct SnippetsPage {
    pub title: String,
    /// Only the global feed offers the posting form.
    pub show_new_snippet_form: bool,
    pub snippets: Vec<FeedEntry>,
}

/// Render a feed page wrapped in the base layout.
pub fn render_snippets_page(page: &SnippetsPage) -> String {
    let mut content = String::new();

    if page.show_new_snippet_form {
        content.push_str(NEW_SNIPPET_FORM);
    }

    if page.snippets.is_empty() {
        content.push_str("<p class=\"empty\">No snippets yet.</p>\n");
    } else {
        content.push_str("<ul class=\"snippets\">\n");
        for entry in &page.snippets {
            render_entry(&mut content, entry);
        }
        content.push_str("</ul>\n");
    }

    base(&page.title, &content)
}

/// Render a plain error page.
pub fn render_error(title: &str, message: &str) -> String {
    let content = format!(
        "<p class=\"error\">{}</p>\n<p><a href=\"/\">Back to all snippets</a></p>\n",
        escape(message)
    );
    base(title, &content)
}

fn render_entry(out: &mut String, entry: &FeedEntry) {
    // Writing into a String cannot fail.
    let _ = write!(
        out,
        "<li class=\"snippet\">\n  <p class=\"body\">{body}</p>\n  \
         <p class=\"meta\"><a href=\"{uri}\">{name}</a> \
         <time datetime=\"{iso}\">{when}</time></p>\n</li>\n",
        body = escape(&entry.body),
        uri = escape(&entry.author_uri),
        name = escape(&entry.author_name),
        iso = entry.posted_at_utc.to_rfc3339(),
        when = escape(&entry.posted_at),
    );
}

fn base(title: &str, content: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{title} - snippets</title>\n</head>\n<body>\n\
         <header><a href=\"/\">snippets</a></header>\n\
         <main>\n<h1>{title}</h1>\n{content}</main>\n</body>\n</html>\n",
        title = escape(title),
        content = content,
    )
}

const NEW_SNIPPET_FORM: &str = "<form method=\"post\" action=\"/\" class=\"new-snippet\">\n  \
<textarea name=\"snippet\" placeholder=\"What did you work on?\"></textarea>\n  \
<button type=\"submit\">Post</button>\n</form>\n";

/// Escape text for inclusion in HTML content or attribute values.
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn entry(body: &str) -> FeedEntry {
        FeedEntry {
            posted_at: "now".to_string(),
            posted_at_utc: Utc::now(),
            body: body.to_string(),
            author_name: "christian scott".to_string(),
            author_uri: "/authors/0".to_string(),
        }
    }

    #[test]
    fn escapes_markup() {
        assert_eq!(
            escape("<b>\"hi\" & 'bye'</b>"),
            "&lt;b&gt;&quot;hi&quot; &amp; &#39;bye&#39;&lt;/b&gt;"
        );
    }

    #[test]
    fn renders_entries_in_order_with_author_link() {
        let page = SnippetsPage {
            title: "All snippets".to_string(),
            show_new_snippet_form: false,
            snippets: vec![entry("newest"), entry("oldest")],
        };

        let html = render_snippets_page(&page);

        let newest = html.find("newest").expect("newest rendered");
        let oldest = html.find("oldest").expect("oldest rendered");
        assert!(newest < oldest);
        assert!(html.contains("<a href=\"/authors/0\">christian scott</a>"));
        assert!(!html.contains("<form"));
    }

    #[test]
    fn form_is_optional() {
        let page = SnippetsPage {
            title: "All snippets".to_string(),
            show_new_snippet_form: true,
            snippets: Vec::new(),
        };

        let html = render_snippets_page(&page);

        assert!(html.contains("<form method=\"post\" action=\"/\""));
        assert!(html.contains("No snippets yet."));
    }

    #[test]
    fn error_page_links_home() {
        let html = render_error("Not found", "Author not found: <x>");

        assert!(html.contains("<title>Not found - snippets</title>"));
        assert!(html.contains("Author not found: &lt;x&gt;"));
        assert!(html.contains("<a href=\"/\">"));
    }

    #[test]
    fn snippet_bodies_are_escaped() {
        let page = SnippetsPage {
            title: "t".to_string(),
            show_new_snippet_form: false,
            snippets: vec![entry("<script>alert(1)</script>")],
        };

        let html = render_snippets_page(&page);

        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
