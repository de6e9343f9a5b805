//! Template rendering module
//!
//! Templates are plain HTML files with `{{name}}` placeholders, read from
//! the template directory once at startup. Rendering is an explicit
//! substitution pass over the variables a view model hands in; there is no
//! template language beyond that.

mod models;

pub use models::{
    DispatchStatusFragment, HomePage, QuoteErrorFragment, QuoteSuccessFragment,
    ServiceAreaMapFragment, SimplePage,
};

use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// In-memory store of every template under the template directory
pub struct TemplateStore {
    templates: HashMap<String, String>,
}

impl TemplateStore {
    /// Read all `*.html` files under `dir` (recursively). Keys are
    /// slash-separated paths relative to `dir`, e.g.
    /// `partials/dispatch-status.html`.
    pub fn load(dir: &Path) -> std::io::Result<Self> {
        let mut templates = HashMap::new();
        collect(dir, String::new(), &mut templates)?;
        Ok(Self { templates })
    }

    /// Render a template by substituting `{{key}}` for each supplied pair.
    /// Returns None when the template name is unknown.
    pub fn render(&self, name: &str, vars: &[(&str, String)]) -> Option<String> {
        let mut output = self.templates.get(name)?.clone();
        for (key, value) in vars {
            output = output.replace(&format!("{{{{{key}}}}}"), value);
        }
        Some(output)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.templates.contains_key(name)
    }
}

fn collect(
    root: &Path,
    prefix: String,
    templates: &mut HashMap<String, String>,
) -> std::io::Result<()> {
    for entry in fs::read_dir(root)? {
        let entry = entry?;
        let path = entry.path();
        let name = entry.file_name().to_string_lossy().into_owned();
        if path.is_dir() {
            collect(&path, format!("{prefix}{name}/"), templates)?;
        } else if path.extension().is_some_and(|ext| ext == "html") {
            templates.insert(format!("{prefix}{name}"), fs::read_to_string(&path)?);
        }
    }
    Ok(())
}

/// Escape user-provided text before it lands in a rendered document
pub fn html_escape(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with(name: &str, body: &str) -> TemplateStore {
        let mut templates = HashMap::new();
        templates.insert(name.to_string(), body.to_string());
        TemplateStore { templates }
    }

    #[test]
    fn test_render_substitutes_all_occurrences() {
        let store = store_with("t.html", "<p>{{phone}}</p><a href=\"tel:{{phone}}\">call</a>");
        let html = store
            .render("t.html", &[("phone", "(239) 237-2899".to_string())])
            .unwrap();
        assert_eq!(
            html,
            "<p>(239) 237-2899</p><a href=\"tel:(239) 237-2899\">call</a>"
        );
    }

    #[test]
    fn test_render_unknown_template() {
        let store = store_with("t.html", "x");
        assert!(store.render("missing.html", &[]).is_none());
    }

    #[test]
    fn test_render_leaves_unmatched_placeholders() {
        let store = store_with("t.html", "{{a}} {{b}}");
        let html = store.render("t.html", &[("a", "1".to_string())]).unwrap();
        assert_eq!(html, "1 {{b}}");
    }

    #[test]
    fn test_load_walks_partials_directory() {
        let store = TemplateStore::load(Path::new("templates")).unwrap();
        assert!(store.contains("index.html"));
        assert!(store.contains("404.html"));
        assert!(store.contains("partials/quote-success.html"));
    }

    #[test]
    fn test_html_escape() {
        assert_eq!(
            html_escape("<script>alert('x')</script>"),
            "&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;"
        );
        assert_eq!(html_escape("Jane Doe"), "Jane Doe");
        assert_eq!(html_escape("R&B \"Electric\""), "R&amp;B &quot;Electric&quot;");
    }
}
