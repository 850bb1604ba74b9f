use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::templates::ComponentKind;

/// Coarse website category used to choose components and default copy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum WebsiteType {
    Portfolio,
    #[default]
    Business,
    Ecommerce,
    Blog,
    Landing,
}

/// Result of classifying a prompt: which components to render, in order,
/// plus the inferred category and a free-text focus.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebsiteAnalysis {
    pub website_type: WebsiteType,
    pub components: Vec<ComponentKind>,
    pub primary_focus: String,
}

/// Keyword-driven fallback classification. Deterministic, no I/O, never
/// fails; also the source of default copy when per-component generation
/// degrades.
pub fn classify(prompt: &str) -> WebsiteAnalysis {
    let website_type = infer_website_type(prompt);

    let mut components = vec![ComponentKind::Navigation, ComponentKind::Hero];
    match website_type {
        WebsiteType::Portfolio | WebsiteType::Blog => {
            components.push(ComponentKind::Features);
            components.push(ComponentKind::Gallery);
        }
        _ => components.push(ComponentKind::Features),
    }
    components.push(ComponentKind::Contact);
    components.push(ComponentKind::Footer);

    WebsiteAnalysis {
        website_type,
        components,
        primary_focus: role_or_professional(prompt),
    }
}

/// First matching keyword group wins; checked in fixed priority order.
pub fn infer_website_type(prompt: &str) -> WebsiteType {
    let p = prompt.to_lowercase();
    let matches_any = |keys: &[&str]| keys.iter().any(|k| p.contains(k));

    if matches_any(&["portfolio", "photographer", "designer", "developer portfolio"]) {
        WebsiteType::Portfolio
    } else if matches_any(&["blog", "writer", "journal", "articles"]) {
        WebsiteType::Blog
    } else if matches_any(&["shop", "store", "ecommerce", "products"]) {
        WebsiteType::Ecommerce
    } else if matches_any(&["landing", "launch", "signup"]) {
        WebsiteType::Landing
    } else {
        WebsiteType::Business
    }
}

const ROLES: &[(&str, &[&str])] = &[
    (
        "mobile developer",
        &["mobile developer", "android developer", "ios developer"],
    ),
    (
        "software developer",
        &[
            "software developer",
            "software engineer",
            "full stack developer",
            "backend developer",
            "frontend developer",
        ],
    ),
    ("photographer", &["photographer", "photography"]),
    ("travel writer", &["travel writer", "travel blogger"]),
    ("restaurant", &["restaurant", "cafe", "bistro"]),
    ("saas startup", &["saas", "startup"]),
];

/// Infers the role or subject the site is about. First matching label wins;
/// otherwise the text after the first " for "; otherwise "professional".
pub fn extract_role(prompt: &str) -> Option<&str> {
    let p = prompt.to_lowercase();
    for &(label, keys) in ROLES {
        if keys.iter().any(|k| p.contains(k)) {
            return Some(label);
        }
    }
    None
}

/// Role used in default copy, with the " for " and "professional" fallbacks
/// applied.
pub fn role_or_professional(prompt: &str) -> String {
    if let Some(role) = extract_role(prompt) {
        return role.to_string();
    }
    let p = prompt.to_lowercase();
    if let Some((_, after)) = p.split_once(" for ") {
        return after.trim().to_string();
    }
    "professional".to_string()
}

/// Brand name for default navigation/footer copy: the first word of the
/// prompt, capitalized.
pub fn extract_brand_name(prompt: &str) -> String {
    match prompt.split_whitespace().next() {
        Some(word) => {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => "My Website".to_string(),
            }
        }
        None => "My Website".to_string(),
    }
}

/// What the site offers, for the default footer description.
pub fn extract_service(prompt: &str) -> &'static str {
    let p = prompt.to_lowercase();
    if p.contains("mobile") {
        "mobile development"
    } else if p.contains("software") {
        "software solutions"
    } else if p.contains("portfolio") {
        "portfolio services"
    } else if p.contains("blog") {
        "content creation"
    } else {
        "professional services"
    }
}

pub(crate) fn title_case(s: &str) -> String {
    s.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn compose_title(role: &str, website_type: WebsiteType) -> String {
    match website_type {
        WebsiteType::Portfolio => format!("Portfolio of a {role}"),
        WebsiteType::Blog => format!("{} Blog", title_case(role)),
        WebsiteType::Ecommerce => format!("{} Shop", title_case(role)),
        WebsiteType::Landing => format!("{} - Modern Landing Page", title_case(role)),
        WebsiteType::Business => format!("Professional {} Services", title_case(role)),
    }
}

pub fn compose_subtitle(role: &str, website_type: WebsiteType) -> String {
    match website_type {
        WebsiteType::Portfolio => {
            format!("Showcasing recent work and case studies in {role}")
        }
        WebsiteType::Blog => format!("Insights, tutorials, and stories from a {role}"),
        WebsiteType::Ecommerce => format!("Browse curated products and resources for {role}"),
        WebsiteType::Landing => format!("Clear value proposition tailored to {role}"),
        WebsiteType::Business => format!("Tailored solutions by an experienced {role}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn positions(analysis: &WebsiteAnalysis) -> Vec<usize> {
        [
            ComponentKind::Navigation,
            ComponentKind::Hero,
            ComponentKind::Contact,
            ComponentKind::Footer,
        ]
        .iter()
        .map(|kind| {
            analysis
                .components
                .iter()
                .position(|c| c == kind)
                .expect("required component missing")
        })
        .collect()
    }

    #[test]
    fn photographer_prompt_is_portfolio_with_gallery() {
        let analysis = classify("Create a portfolio website for a photographer");
        assert_eq!(analysis.website_type, WebsiteType::Portfolio);
        assert_eq!(
            analysis.components,
            vec![
                ComponentKind::Navigation,
                ComponentKind::Hero,
                ComponentKind::Features,
                ComponentKind::Gallery,
                ComponentKind::Contact,
                ComponentKind::Footer,
            ]
        );
        assert_eq!(analysis.primary_focus, "photographer");
    }

    #[test]
    fn shop_prompt_is_ecommerce_without_gallery() {
        let analysis = classify("Build a shop for mobile accessories");
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

    #[test]
    fn required_components_keep_relative_order_for_any_prompt() {
        for prompt in [
            "",
            "something entirely unrelated",
            "landing page for a product launch",
            "travel blog with articles",
            "restaurant homepage",
        ] {
            let analysis = classify(prompt);
            let pos = positions(&analysis);
            assert!(pos[0] < pos[1] && pos[1] < pos[2] && pos[2] < pos[3], "{prompt:?}");
        }
    }

    #[test]
    fn unmatched_prompt_defaults_to_business() {
        assert_eq!(infer_website_type("just a website"), WebsiteType::Business);
    }

    #[test]
    fn portfolio_wins_over_blog_in_priority_order() {
        assert_eq!(
            infer_website_type("portfolio and blog for a designer"),
            WebsiteType::Portfolio
        );
    }

    #[test]
    fn primary_focus_follows_the_role_fallback_chain() {
        // keyword match, then text after " for ", then "professional"
        assert_eq!(
            classify("Create a portfolio website for a photographer").primary_focus,
            "photographer"
        );
        assert_eq!(
            classify("a site for my knitting circle").primary_focus,
            "my knitting circle"
        );
        assert_eq!(classify("plain business site").primary_focus, "professional");
    }

    #[test]
    fn role_falls_back_to_text_after_for() {
        assert_eq!(role_or_professional("a site for my knitting circle"), "my knitting circle");
        assert_eq!(role_or_professional("plain business site"), "professional");
        assert_eq!(
            role_or_professional("portfolio for an ios developer"),
            "mobile developer"
        );
    }

    #[test]
    fn brand_name_is_first_word_capitalized() {
        assert_eq!(extract_brand_name("acme widgets online"), "Acme");
        assert_eq!(extract_brand_name(""), "My Website");
    }
}
