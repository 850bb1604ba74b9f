use crate::generate::{ComponentInstance, MetaInfo};
use crate::schemes::scheme_or_default;

/// Builds the final HTML document: fixed skeleton with each component's
/// markup concatenated in analysis order inside the body.
pub fn assemble_html(components: &[ComponentInstance], meta: &MetaInfo) -> String {
    let components_html = components
        .iter()
        .map(|c| c.html.as_str())
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <meta name="description" content="{description}">
    <title>{title}</title>
    <link rel="stylesheet" href="styles.css">
</head>
<body>
{components_html}
    <script src="script.js"></script>
</body>
</html>"#,
        description = meta.description,
        title = meta.title,
    )
}

/// Builds the final stylesheet: reset, `:root` variables from the requested
/// color scheme (default fallback for unknown ids), shared button utilities,
/// then each component's CSS in order, skipping empty blocks.
pub fn assemble_css(components: &[ComponentInstance], color_scheme: &str) -> String {
    let scheme = scheme_or_default(color_scheme);

    let mut css = format!(
        r#"/* Generated by sitewright */
* {{
    margin: 0;
    padding: 0;
    box-sizing: border-box;
}}

:root {{
{variables}
}}

body {{
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, 'Helvetica Neue', Arial, sans-serif;
    line-height: 1.6;
    color: var(--text-primary);
    background: var(--bg-primary);
}}

/* Utility Classes */
.btn {{
    padding: 0.75rem 2rem;
    border: none;
    border-radius: 8px;
    font-size: 1rem;
    font-weight: 600;
    cursor: pointer;
    transition: all 0.3s;
    text-decoration: none;
    display: inline-block;
}}

.btn-primary {{
    background: var(--accent);
    color: white;
}}

.btn-primary:hover {{
    transform: translateY(-2px);
    box-shadow: 0 5px 15px rgba(0,0,0,0.2);
}}

.btn-secondary {{
    background: transparent;
    color: var(--text-primary);
    border: 2px solid var(--accent);
}}

.btn-secondary:hover {{
    background: var(--accent);
    color: white;
}}

/* Component Styles */
"#,
        variables = scheme.variables,
    );

    let component_css = components
        .iter()
        .filter(|c| !c.css.is_empty())
        .map(|c| c.css.as_str())
        .collect::<Vec<_>>()
        .join("\n\n");
    css.push_str(&component_css);

    css
}

#[cfg(test)]
mod tests {
    use crate::templates::ComponentKind;

    use super::*;

    fn instance(kind: ComponentKind, html: &str, css: &str) -> ComponentInstance {
        ComponentInstance {
            kind,
            html: html.to_string(),
            css: css.to_string(),
            js: String::new(),
        }
    }

    #[test]
    fn html_skeleton_contains_components_in_order() {
        let components = vec![
            instance(ComponentKind::Navigation, "<nav>first</nav>", ""),
            instance(ComponentKind::Footer, "<footer>last</footer>", ""),
        ];
        let meta = MetaInfo {
            title: "Studio".to_string(),
            description: "A studio site".to_string(),
        };

        let html = assemble_html(&components, &meta);
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Studio</title>"));
        assert!(html.contains(r#"<meta name="description" content="A studio site">"#));
        let nav = html.find("<nav>first</nav>").unwrap();
        let footer = html.find("<footer>last</footer>").unwrap();
        assert!(nav < footer);
        assert!(html.contains(r#"<script src="script.js"></script>"#));
    }

    #[test]
    fn css_uses_requested_scheme_variables() {
        let css = assemble_css(&[], "dark");
        assert!(css.contains("--bg-primary: #1a1a1a"));
        assert!(css.contains(".btn-primary"));
    }

    #[test]
    fn css_falls_back_to_default_scheme() {
        let css = assemble_css(&[], "does-not-exist");
        assert!(css.contains("--bg-primary: #ffffff"));
    }

    #[test]
    fn empty_component_css_is_skipped() {
        let components = vec![
            instance(ComponentKind::Hero, "<section/>", ".hero { color: red; }"),
            instance(ComponentKind::Contact, "<section/>", ""),
            instance(ComponentKind::Footer, "<footer/>", ".footer { color: blue; }"),
        ];
        let css = assemble_css(&components, "default");
        assert!(css.contains(".hero { color: red; }\n\n.footer { color: blue; }"));
    }
}
