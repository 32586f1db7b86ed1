//! Inline SVG glyphs for the page's icons.
//!
//! Icons are a closed capability: each glyph is a variant that renders to a
//! self-contained `<svg>` fragment, parameterized only by a class token
//! string for size and color. The page never references icon assets on
//! disk, so the generated document stays self-contained.

use serde::Serialize;

use crate::util::escape_html;

/// The glyphs the page uses.
///
/// Serialized by kebab-case name so content records can hand icons to
/// templates, where the `icon` filter turns the name back into markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    Chrome,
    TabletSmartphone,
    Layers,
    Sparkles,
    ArrowUpRight,
    Mail,
    Linkedin,
    Twitter,
    MapPin,
}

impl Icon {
    /// All glyphs, for diagnostics and completeness checks.
    pub const ALL: [Icon; 9] = [
        Icon::Chrome,
        Icon::TabletSmartphone,
        Icon::Layers,
        Icon::Sparkles,
        Icon::ArrowUpRight,
        Icon::Mail,
        Icon::Linkedin,
        Icon::Twitter,
        Icon::MapPin,
    ];

    /// The kebab-case name matching the serialized form.
    pub fn name(self) -> &'static str {
        match self {
            Icon::Chrome => "chrome",
            Icon::TabletSmartphone => "tablet-smartphone",
            Icon::Layers => "layers",
            Icon::Sparkles => "sparkles",
            Icon::ArrowUpRight => "arrow-up-right",
            Icon::Mail => "mail",
            Icon::Linkedin => "linkedin",
            Icon::Twitter => "twitter",
            Icon::MapPin => "map-pin",
        }
    }

    /// Parses a glyph name as used in templates.
    ///
    /// Returns `None` for unknown names; callers surface that as a
    /// configuration error before anything is rendered.
    pub fn from_name(name: &str) -> Option<Icon> {
        Icon::ALL.into_iter().find(|icon| icon.name() == name)
    }

    /// Inner path markup, 24x24 viewBox, stroked with `currentColor`.
    fn paths(self) -> &'static str {
        match self {
            Icon::Chrome => concat!(
                r#"<circle cx="12" cy="12" r="10"/>"#,
                r#"<circle cx="12" cy="12" r="4"/>"#,
                r#"<line x1="21.17" x2="12" y1="8" y2="8"/>"#,
                r#"<line x1="3.95" x2="8.54" y1="6.06" y2="14"/>"#,
                r#"<line x1="10.88" x2="15.46" y1="21.94" y2="14"/>"#
            ),
            Icon::TabletSmartphone => concat!(
                r#"<rect width="10" height="14" x="3" y="8" rx="2"/>"#,
                r#"<path d="M5 4a2 2 0 0 1 2-2h12a2 2 0 0 1 2 2v16a2 2 0 0 1-2 2h-2.4"/>"#,
                r#"<path d="M8 18h.01"/>"#
            ),
            Icon::Layers => concat!(
                r#"<path d="m12.83 2.18a2 2 0 0 0-1.66 0L2.6 6.08a1 1 0 0 0 0 1.83l8.58 3.91a2 2 0 0 0 1.66 0l8.58-3.9a1 1 0 0 0 0-1.83Z"/>"#,
                r#"<path d="m22 17.65-9.17 4.16a2 2 0 0 1-1.66 0L2 17.65"/>"#,
                r#"<path d="m22 12.65-9.17 4.16a2 2 0 0 1-1.66 0L2 12.65"/>"#
            ),
            Icon::Sparkles => concat!(
                r#"<path d="M9.94 15.5a2 2 0 0 0-1.44-1.44L2.35 12.5a.54.54 0 0 1 0-1l6.15-1.56A2 2 0 0 0 9.94 8.5l1.56-6.15a.54.54 0 0 1 1 0l1.56 6.15a2 2 0 0 0 1.44 1.44l6.15 1.56a.54.54 0 0 1 0 1l-6.15 1.56a2 2 0 0 0-1.44 1.44l-1.56 6.15a.54.54 0 0 1-1 0Z"/>"#,
                r#"<path d="M20 3v4"/>"#,
                r#"<path d="M22 5h-4"/>"#
            ),
            Icon::ArrowUpRight => concat!(r#"<path d="M7 7h10v10"/>"#, r#"<path d="M7 17 17 7"/>"#),
            Icon::Mail => concat!(
                r#"<rect width="20" height="16" x="2" y="4" rx="2"/>"#,
                r#"<path d="m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7"/>"#
            ),
            Icon::Linkedin => concat!(
                r#"<path d="M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6z"/>"#,
                r#"<rect width="4" height="12" x="2" y="9"/>"#,
                r#"<circle cx="4" cy="4" r="2"/>"#
            ),
            Icon::Twitter => {
                r#"<path d="M22 4s-.7 2.1-2 3.4c1.6 10-9.4 17.3-18 11.6 2.2.1 4.4-.6 6-2C3 15.5.5 9.6 3 5c2.2 2.6 5.6 4.1 9 4-.9-4.2 4-6.6 7-3.8 1.1 0 3-1.2 3-1.2z"/>"#
            }
            Icon::MapPin => concat!(
                r#"<path d="M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0Z"/>"#,
                r#"<circle cx="12" cy="10" r="3"/>"#
            ),
        }
    }

    /// Renders the glyph with the given class tokens.
    ///
    /// The glyph inherits its color from `currentColor`, so color tokens in
    /// `class` behave exactly like on text.
    ///
    /// # Example
    ///
    /// ```rust
    /// use folio::Icon;
    ///
    /// let svg = Icon::ArrowUpRight.render("w-4 h-4 text-gray-200");
    /// assert!(svg.starts_with("<svg"));
    /// assert!(svg.contains("class=\"w-4 h-4 text-gray-200\""));
    /// ```
    pub fn render(self, class: &str) -> String {
        format!(
            concat!(
                r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" "#,
                r#"stroke="currentColor" stroke-width="2" stroke-linecap="round" "#,
                r#"stroke-linejoin="round" aria-hidden="true" class="{}">{}</svg>"#
            ),
            escape_html(class),
            self.paths()
        )
    }
}
