/// Color schemes for generated websites. Each entry is a block of CSS custom
/// properties spliced into the `:root` rule of the assembled stylesheet.
pub struct ColorScheme {
    pub id: &'static str,
    pub name: &'static str,
    pub variables: &'static str,
}

pub const COLOR_SCHEMES: &[ColorScheme] = &[
    ColorScheme {
        id: "default",
        name: "Default Light",
        variables: "    --bg-primary: #ffffff;
    --bg-secondary: #f8f9fa;
    --text-primary: #1a1a1a;
    --text-secondary: #666666;
    --accent: #3b82f6;
    --border: #e5e7eb;",
    },
    ColorScheme {
        id: "dark",
        name: "Dark Mode",
        variables: "    --bg-primary: #1a1a1a;
    --bg-secondary: #2d2d2d;
    --text-primary: #ffffff;
    --text-secondary: #a0a0a0;
    --accent: #60a5fa;
    --border: #404040;",
    },
    ColorScheme {
        id: "ocean",
        name: "Ocean Blue",
        variables: "    --bg-primary: #f0f9ff;
    --bg-secondary: #e0f2fe;
    --text-primary: #0c4a6e;
    --text-secondary: #475569;
    --accent: #0284c7;
    --border: #bae6fd;",
    },
    ColorScheme {
        id: "sunset",
        name: "Sunset Orange",
        variables: "    --bg-primary: #fff7ed;
    --bg-secondary: #ffedd5;
    --text-primary: #7c2d12;
    --text-secondary: #78350f;
    --accent: #ea580c;
    --border: #fed7aa;",
    },
    ColorScheme {
        id: "forest",
        name: "Forest Green",
        variables: "    --bg-primary: #f0fdf4;
    --bg-secondary: #dcfce7;
    --text-primary: #14532d;
    --text-secondary: #166534;
    --accent: #16a34a;
    --border: #bbf7d0;",
    },
    ColorScheme {
        id: "purple",
        name: "Royal Purple",
        variables: "    --bg-primary: #faf5ff;
    --bg-secondary: #f3e8ff;
    --text-primary: #581c87;
    --text-secondary: #6b21a8;
    --accent: #a855f7;
    --border: #e9d5ff;",
    },
    ColorScheme {
        id: "minimal",
        name: "Minimal Gray",
        variables: "    --bg-primary: #fafafa;
    --bg-secondary: #f5f5f5;
    --text-primary: #171717;
    --text-secondary: #525252;
    --accent: #404040;
    --border: #e5e5e5;",
    },
];

/// Looks up a scheme by id, falling back to `default` for anything
/// unrecognized. Unknown ids are not an error.
pub fn scheme_or_default(id: &str) -> &'static ColorScheme {
    COLOR_SCHEMES
        .iter()
        .find(|s| s.id == id)
        .unwrap_or(&COLOR_SCHEMES[0])
}
