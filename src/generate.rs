use std::str::FromStr;
use std::sync::OnceLock;

use anyhow::Result;
use minijinja::Environment;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{info, warn};

use crate::classify::{
    self, WebsiteAnalysis, WebsiteType, compose_subtitle, compose_title, extract_brand_name,
    extract_service, role_or_professional,
};
use crate::extract::{extract_json_object, field_as_string};
use crate::llm::TextModel;
use crate::templates::{ComponentKind, SHARED_JS, Style};

/// Incoming generation request.
#[derive(Debug, Clone, Deserialize)]
pub struct WebsiteRequest {
    pub prompt: String,
    #[serde(default)]
    pub style: Style,
    #[serde(default = "default_color_scheme")]
    pub color_scheme: String,
}

fn default_color_scheme() -> String {
    "default".to_string()
}

/// One rendered page section. `js` is carried for forward compatibility but
/// nothing populates it today; only the shared script ships.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentInstance {
    #[serde(rename = "type")]
    pub kind: ComponentKind,
    pub html: String,
    pub css: String,
    #[serde(default)]
    pub js: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetaInfo {
    pub title: String,
    pub description: String,
}

impl Default for MetaInfo {
    fn default() -> Self {
        Self {
            title: "My Website".to_string(),
            description: "Welcome to our website".to_string(),
        }
    }
}

/// Fully assembled generation result returned to the caller.
#[derive(Debug, Clone, Serialize)]
pub struct GeneratedWebsite {
    pub html: String,
    pub css: String,
    pub js: String,
    pub components: Vec<ComponentInstance>,
    pub meta_description: String,
    pub title: String,
    pub prompt: String,
    pub style: Style,
    pub color_scheme: String,
}

const ANALYSIS_PROMPT_TEMPLATE: &str = r#"Analyze this website request and determine which components are needed:
"{{ prompt }}"

Available components: navigation, hero, features, gallery, contact, footer

Return ONLY a JSON object with this structure:
{
    "components": ["component1", "component2", ...],
    "website_type": "portfolio|business|ecommerce|blog|landing",
    "primary_focus": "brief description"
}

Example response:
{"components": ["navigation", "hero", "features", "gallery", "contact", "footer"], "website_type": "portfolio", "primary_focus": "photography showcase"}"#;

const CONTENT_PROMPT_TEMPLATE: &str = r#"You are a professional web content creator. Generate content for a {{ component }} component.

Website description: "{{ prompt }}"
Website type: {{ website_type }}
Design style: {{ style }}

Create realistic, specific, and relevant content based on the prompt. Use details from the prompt to make the content unique and appropriate.

Return ONLY a valid JSON object with these fields: {{ fields }}

IMPORTANT: Make content SPECIFIC to this website type and prompt. Do not use generic placeholders.
Example response format:
{"section_title": "Specific Title Based on Prompt", "section_subtitle": "Specific subtitle", "feature_items": "<div>...</div>"}

RESPOND WITH ONLY THE JSON, NO OTHER TEXT:"#;

const META_PROMPT_TEMPLATE: &str = r#"Generate SEO-friendly meta information for this website:
"{{ prompt }}"

Return ONLY a JSON object with:
{"title": "Page Title (max 60 chars)", "description": "Meta description (max 160 chars)"}"#;

fn render_prompt(template: &str, ctx: minijinja::Value) -> Result<String> {
    let mut env = Environment::new();
    env.add_template("prompt", template)?;
    let rendered = env.get_template("prompt")?.render(ctx)?;
    Ok(rendered)
}

/// Shape the analysis prompt asks the model to return.
#[derive(Debug, Deserialize)]
struct RawAnalysis {
    #[serde(default)]
    components: Vec<String>,
    website_type: Option<String>,
    primary_focus: Option<String>,
}

/// Classifies the prompt via the model, degrading to the keyword heuristic
/// when the call fails or the output has no parseable JSON object. Unknown
/// component names in model output are dropped silently.
pub async fn analyze_prompt<M: TextModel>(model: &M, prompt: &str) -> WebsiteAnalysis {
    let analysis_prompt = match render_prompt(
        ANALYSIS_PROMPT_TEMPLATE,
        minijinja::context! { prompt => prompt },
    ) {
        Ok(p) => p,
        Err(e) => {
            warn!(error = %e, "Failed to render analysis prompt, using heuristic");
            return classify::classify(prompt);
        }
    };

    let text = match model.complete(&analysis_prompt).await {
        Ok(text) => text,
        Err(e) => {
            info!(error = %e, "Analysis call failed, using heuristic");
            return classify::classify(prompt);
        }
    };

    let Some(object) = extract_json_object(&text) else {
        info!("No JSON object in analysis response, using heuristic");
        return classify::classify(prompt);
    };

    let raw: RawAnalysis = match serde_json::from_value(Value::Object(object)) {
        Ok(raw) => raw,
        Err(e) => {
            info!(error = %e, "Analysis JSON had unexpected shape, using heuristic");
            return classify::classify(prompt);
        }
    };

    let components: Vec<ComponentKind> = raw
        .components
        .iter()
        .filter_map(|name| ComponentKind::from_str(name).ok())
        .collect();

    if components.is_empty() {
        info!("Analysis listed no known components, using heuristic");
        return classify::classify(prompt);
    }

    let website_type = raw
        .website_type
        .as_deref()
        .and_then(|t| WebsiteType::from_str(t).ok())
        .unwrap_or_else(|| classify::infer_website_type(prompt));

    WebsiteAnalysis {
        website_type,
        components,
        primary_focus: raw
            .primary_focus
            .unwrap_or_else(|| role_or_professional(prompt)),
    }
}

/// Default content used when per-component generation degrades, synthesized
/// from the prompt so the fallback site still reflects the request.
pub fn default_content(kind: ComponentKind, prompt: &str) -> Map<String, Value> {
    let website_type = classify::infer_website_type(prompt);
    let role = role_or_professional(prompt);
    let is_portfolio = website_type == WebsiteType::Portfolio;
    let is_blog = website_type == WebsiteType::Blog;

    let mut map = Map::new();
    let mut put = |key: &str, value: String| {
        map.insert(key.to_string(), Value::String(value));
    };

    match kind {
        ComponentKind::Navigation => {
            put("brand_name", extract_brand_name(prompt));
            put(
                "nav_items",
                r##"<li><a href="#home">Home</a></li>
                    <li><a href="#about">About</a></li>
                    <li><a href="#services">Services</a></li>
                    <li><a href="#contact">Contact</a></li>"##
                    .to_string(),
            );
        }
        ComponentKind::Hero => {
            put("title", compose_title(&role, website_type));
            put("subtitle", compose_subtitle(&role, website_type));
            put(
                "cta_buttons",
                r#"<button class="btn btn-primary">Get Started</button>
                    <button class="btn btn-secondary">Learn More</button>"#
                    .to_string(),
            );
            put(
                "hero_image",
                r#"<div style="width: 100%; height: 400px; background: linear-gradient(135deg, var(--bg-secondary) 0%, var(--accent) 100%); border-radius: 12px; display: flex; align-items: center; justify-content: center;"><span style="font-size: 4rem; opacity: 0.5;">&#10024;</span></div>"#
                    .to_string(),
            );
        }
        ComponentKind::Features => {
            put(
                "section_title",
                if is_blog { "Highlights" } else { "Key Features" }.to_string(),
            );
            put(
                "section_subtitle",
                if is_blog {
                    "What you'll find here"
                } else {
                    "What makes us unique"
                }
                .to_string(),
            );
            put(
                "feature_items",
                r#"<div class="feature-card">
                        <div class="feature-icon">&#128640;</div>
                        <h3>Fast &amp; Efficient</h3>
                        <p>Lightning-fast performance optimized for your needs</p>
                    </div>
                    <div class="feature-card">
                        <div class="feature-icon">&#127912;</div>
                        <h3>Beautiful Design</h3>
                        <p>Modern, clean design that captures attention</p>
                    </div>
                    <div class="feature-card">
                        <div class="feature-icon">&#128274;</div>
                        <h3>Secure &amp; Reliable</h3>
                        <p>Enterprise-grade security and reliability</p>
                    </div>"#
                    .to_string(),
            );
        }
        ComponentKind::Gallery => {
            put(
                "section_title",
                if is_portfolio {
                    "Portfolio"
                } else if is_blog {
                    "Recent Posts"
                } else {
                    "Gallery"
                }
                .to_string(),
            );
            put(
                "gallery_items",
                r#"<div class="gallery-item">
                        <img src="https://via.placeholder.com/400x300/667eea/ffffff?text=Project+1" alt="Project 1">
                        <div class="gallery-overlay"><h3>Project 1</h3></div>
                    </div>
                    <div class="gallery-item">
                        <img src="https://via.placeholder.com/400x300/764ba2/ffffff?text=Project+2" alt="Project 2">
                        <div class="gallery-overlay"><h3>Project 2</h3></div>
                    </div>
                    <div class="gallery-item">
                        <img src="https://via.placeholder.com/400x300/f093fb/ffffff?text=Project+3" alt="Project 3">
                        <div class="gallery-overlay"><h3>Project 3</h3></div>
                    </div>"#
                    .to_string(),
            );
        }
        ComponentKind::Contact => {
            put("section_title", "Get In Touch".to_string());
            put(
                "section_subtitle",
                if is_blog {
                    "Questions or collaboration ideas?"
                } else {
                    "Work with us on your next project"
                }
                .to_string(),
            );
        }
        ComponentKind::Footer => {
            put("brand_name", extract_brand_name(prompt));
            put(
                "brand_description",
                format!("{} - {}", classify::title_case(&role), extract_service(prompt)),
            );
            put("year", "2026".to_string());
            put(
                "footer_sections",
                r##"<div class="footer-section">
                        <h4>Company</h4>
                        <ul>
                            <li><a href="#">About Us</a></li>
                            <li><a href="#">Services</a></li>
                            <li><a href="#">Blog</a></li>
                        </ul>
                    </div>
                    <div class="footer-section">
                        <h4>Support</h4>
                        <ul>
                            <li><a href="#">Contact</a></li>
                            <li><a href="#">FAQ</a></li>
                            <li><a href="#">Documentation</a></li>
                        </ul>
                    </div>"##
                    .to_string(),
            );
        }
    }

    map
}

static LEFTOVER_PLACEHOLDER: OnceLock<regex::Regex> = OnceLock::new();

fn leftover_placeholder() -> &'static regex::Regex {
    LEFTOVER_PLACEHOLDER
        .get_or_init(|| regex::Regex::new(r"\{[^}]+\}").expect("placeholder regex"))
}

/// Substitutes every `{field}` token with content, then deletes whatever
/// tokens remain so incomplete model output never leaks literal placeholders
/// into the page.
pub fn fill_template(template: &str, content: &Map<String, Value>) -> String {
    let mut html = template.to_string();
    for (key, value) in content {
        let placeholder = format!("{{{key}}}");
        html = html.replace(&placeholder, &field_as_string(value));
    }
    leftover_placeholder().replace_all(&html, "").into_owned()
}

/// Generates one component, always returning usable HTML: model output when
/// it parses, default content otherwise.
pub async fn component_content<M: TextModel>(
    model: &M,
    prompt: &str,
    kind: ComponentKind,
    website_type: WebsiteType,
    style: Style,
) -> ComponentInstance {
    let content = match render_prompt(
        CONTENT_PROMPT_TEMPLATE,
        minijinja::context! {
            component => kind.to_string(),
            prompt => prompt,
            website_type => website_type.to_string(),
            style => style.to_string(),
            fields => kind.content_fields(),
        },
    ) {
        Ok(content_prompt) => match model.complete(&content_prompt).await {
            Ok(text) => match extract_json_object(&text) {
                Some(object) => object,
                None => {
                    info!(component = %kind, "No JSON object in content response, using defaults");
                    default_content(kind, prompt)
                }
            },
            Err(e) => {
                info!(component = %kind, error = %e, "Content call failed, using defaults");
                default_content(kind, prompt)
            }
        },
        Err(e) => {
            warn!(component = %kind, error = %e, "Failed to render content prompt, using defaults");
            default_content(kind, prompt)
        }
    };

    ComponentInstance {
        kind,
        html: fill_template(kind.template(style), &content),
        css: kind.css().to_string(),
        js: String::new(),
    }
}

/// Generates SEO meta title/description, with a fixed fallback.
pub async fn meta_info<M: TextModel>(model: &M, prompt: &str) -> MetaInfo {
    let meta_prompt = match render_prompt(
        META_PROMPT_TEMPLATE,
        minijinja::context! { prompt => prompt },
    ) {
        Ok(p) => p,
        Err(e) => {
            warn!(error = %e, "Failed to render meta prompt, using defaults");
            return MetaInfo::default();
        }
    };

    let object = match model.complete(&meta_prompt).await {
        Ok(text) => extract_json_object(&text),
        Err(e) => {
            info!(error = %e, "Meta info call failed, using defaults");
            None
        }
    };

    match object {
        Some(map) => {
            let defaults = MetaInfo::default();
            MetaInfo {
                title: map
                    .get("title")
                    .map(field_as_string)
                    .filter(|t| !t.is_empty())
                    .unwrap_or(defaults.title),
                description: map
                    .get("description")
                    .map(field_as_string)
                    .filter(|d| !d.is_empty())
                    .unwrap_or(defaults.description),
            }
        }
        None => MetaInfo::default(),
    }
}

/// Runs the full pipeline: classify, generate each component in order,
/// generate meta info, assemble. Model failures never fail the request.
pub async fn generate_website<M: TextModel>(
    model: &M,
    request: &WebsiteRequest,
) -> GeneratedWebsite {
    let analysis = analyze_prompt(model, &request.prompt).await;
    info!(
        website_type = %analysis.website_type,
        components = analysis.components.len(),
        focus = %analysis.primary_focus,
        "Prompt analyzed"
    );

    let mut components = Vec::with_capacity(analysis.components.len());
    for kind in &analysis.components {
        let instance = component_content(
            model,
            &request.prompt,
            *kind,
            analysis.website_type,
            request.style,
        )
        .await;
        components.push(instance);
    }

    let meta = meta_info(model, &request.prompt).await;

    let html = crate::assemble::assemble_html(&components, &meta);
    let css = crate::assemble::assemble_css(&components, &request.color_scheme);

    GeneratedWebsite {
        html,
        css,
        js: SHARED_JS.to_string(),
        components,
        meta_description: meta.description,
        title: meta.title,
        prompt: request.prompt.clone(),
        style: request.style,
        color_scheme: request.color_scheme.clone(),
    }
}

#[cfg(test)]
mod tests {
    use anyhow::anyhow;
    use strum::IntoEnumIterator;

    use super::*;

    /// Model that always errors, exercising every fallback path.
    struct DownModel;

    impl TextModel for DownModel {
        fn complete(&self, _prompt: &str) -> impl Future<Output = Result<String>> + Send {
            async { Err(anyhow!("connection refused")) }
        }
    }

    /// Model that returns a canned string for every call.
    struct CannedModel(String);

    impl TextModel for CannedModel {
        fn complete(&self, _prompt: &str) -> impl Future<Output = Result<String>> + Send {
            let text = self.0.clone();
            async move { Ok(text) }
        }
    }

    fn request(prompt: &str, color_scheme: &str) -> WebsiteRequest {
        WebsiteRequest {
            prompt: prompt.to_string(),
            style: Style::Modern,
            color_scheme: color_scheme.to_string(),
        }
    }

    #[test]
    fn fill_template_deletes_leftover_placeholders() {
        let mut content = Map::new();
        content.insert("title".to_string(), Value::String("Hi".to_string()));
        let html = fill_template("<h1>{title}</h1><p>{subtitle}</p>", &content);
        assert_eq!(html, "<h1>Hi</h1><p></p>");
        assert!(!html.contains('{'));
    }

    #[test]
    fn default_content_fills_every_kind_without_placeholders() {
        for kind in ComponentKind::iter() {
            let content = default_content(kind, "Create a portfolio website for a photographer");
            let html = fill_template(kind.template(Style::Modern), &content);
            assert!(!html.is_empty());
            assert!(!leftover_placeholder().is_match(&html), "{kind}: {html}");
        }
    }

    #[tokio::test]
    async fn component_content_degrades_to_defaults_when_model_is_down() {
        for kind in ComponentKind::iter() {
            let instance = component_content(
                &DownModel,
                "Build a shop for mobile accessories",
                kind,
                WebsiteType::Ecommerce,
                Style::Modern,
            )
            .await;
            assert!(!instance.html.is_empty());
            assert!(!instance.html.contains('{'), "{kind}: {}", instance.html);
            assert!(instance.js.is_empty());
        }
    }

    #[tokio::test]
    async fn component_content_degrades_on_unparseable_output() {
        let model = CannedModel("Sorry, I cannot help with that request.".to_string());
        let instance = component_content(
            &model,
            "travel blog",
            ComponentKind::Hero,
            WebsiteType::Blog,
            Style::Modern,
        )
        .await;
        assert!(!instance.html.is_empty());
        assert!(!instance.html.contains('{'));
    }

    #[tokio::test]
    async fn model_content_is_substituted_into_template() {
        let model = CannedModel(
            r##"```json
{"brand_name": "Shutterline", "nav_items": "<li><a href=\"#work\">Work</a></li>"}
```"##
                .to_string(),
        );
        let instance = component_content(
            &model,
            "photography portfolio",
            ComponentKind::Navigation,
            WebsiteType::Portfolio,
            Style::Modern,
        )
        .await;
        assert!(instance.html.contains("Shutterline"));
        assert!(instance.html.contains("#work"));
        assert!(!instance.html.contains("{brand_name}"));
    }

    #[tokio::test]
    async fn analyze_falls_back_to_heuristic_when_model_is_down() {
        let analysis = analyze_prompt(&DownModel, "Build a shop for mobile accessories").await;
        assert_eq!(analysis.website_type, WebsiteType::Ecommerce);
        assert_eq!(
            analysis.components,
            vec![
                ComponentKind::Navigation,
                ComponentKind::Hero,
                ComponentKind::Features,
                ComponentKind::Contact,
                ComponentKind::Footer,
            ]
        );
    }

    #[tokio::test]
    async fn analyze_drops_unknown_component_kinds() {
        let model = CannedModel(
            r#"{"components": ["navigation", "sidebar", "hero", "chatbot", "footer"], "website_type": "landing", "primary_focus": "launch"}"#
                .to_string(),
        );
        let analysis = analyze_prompt(&model, "landing page").await;
        assert_eq!(
            analysis.components,
            vec![
                ComponentKind::Navigation,
                ComponentKind::Hero,
                ComponentKind::Footer,
            ]
        );
        assert_eq!(analysis.website_type, WebsiteType::Landing);
    }

    #[tokio::test]
    async fn analyze_recovers_type_when_model_gives_unknown_type() {
        let model = CannedModel(
            r#"{"components": ["navigation"], "website_type": "brochureware", "primary_focus": "x"}"#
                .to_string(),
        );
        let analysis = analyze_prompt(&model, "portfolio for a designer").await;
        assert_eq!(analysis.website_type, WebsiteType::Portfolio);
    }

    #[tokio::test]
    async fn meta_info_defaults_when_model_is_down() {
        let meta = meta_info(&DownModel, "anything").await;
        assert_eq!(meta.title, "My Website");
        assert_eq!(meta.description, "Welcome to our website");
    }

    #[tokio::test]
    async fn photographer_scenario_with_model_down() {
        let req = request("Create a portfolio website for a photographer", "dark");
        let site = generate_website(&DownModel, &req).await;

        let kinds: Vec<ComponentKind> = site.components.iter().map(|c| c.kind).collect();
        assert_eq!(
            kinds,
            vec![
                ComponentKind::Navigation,
                ComponentKind::Hero,
                ComponentKind::Features,
                ComponentKind::Gallery,
                ComponentKind::Contact,
                ComponentKind::Footer,
            ]
        );
        assert!(site.css.contains("--bg-primary: #1a1a1a"));
        assert!(site.html.contains("<!DOCTYPE html>"));
        assert_eq!(site.title, "My Website");
        assert_eq!(site.color_scheme, "dark");
    }

    #[tokio::test]
    async fn generated_kinds_are_subset_of_template_library() {
        let model = CannedModel(
            r#"{"components": ["hero", "jumbotron", "footer"], "website_type": "business", "primary_focus": "x"}"#
                .to_string(),
        );
        let site = generate_website(&model, &request("company site", "default")).await;
        assert!(site.components.iter().all(|c| ComponentKind::iter().any(|k| k == c.kind)));
        assert_eq!(site.components.len(), 2);
    }
}
