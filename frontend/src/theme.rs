use stylist::GlobalStyle;

pub const PRIMARY: &str = "#3b2a1e";
pub const ACCENT: &str = "#b8864b";
pub const CREAM: &str = "#faf7f2";
pub const TEXT: &str = "#2d2418";

fn base_css() -> String {
    format!(
        r#"
        html {{
            scroll-behavior: smooth;
        }}
        body {{
            margin: 0;
            font-family: 'Inter', system-ui, sans-serif;
            color: {text};
            background: {cream};
            -webkit-font-smoothing: antialiased;
        }}
        h1, h2, h3 {{
            font-family: 'Playfair Display', Georgia, serif;
        }}
        h2, h3 {{
            color: {primary};
        }}
        .cta-button {{
            background: {accent};
        }}
        "#,
        text = TEXT,
        cream = CREAM,
        primary = PRIMARY,
        accent = ACCENT,
    )
}

/// Registers the base typography and palette on the document.
pub fn mount() -> stylist::Result<()> {
    GlobalStyle::new(base_css()).map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_css_uses_palette() {
        let css = base_css();
        assert!(css.contains(&format!("color: {};", TEXT)));
        assert!(css.contains(&format!("background: {};", ACCENT)));
        assert!(!css.contains("{text}"));
    }
}
