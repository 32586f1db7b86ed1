//! Single-page portfolio generator.
//!
//! `folio` renders an author-curated content set (biography, contact
//! links, experience, education, tech stack, and project cards) into one
//! self-contained HTML page styled with utility classes.
//!
//! The heart of the crate is the typographic layer: a closed table of text
//! roles ([`TypeScale`]), each owning a fixed base class sequence and a
//! semantic element kind, combined with caller overrides by a
//! deterministic, last-wins-on-conflict [`merge`]. The page composition
//! consumes that layer through template filters, so every piece of text on
//! the page is styled by the same rule.
//!
//! # Example
//!
//! ```rust
//! use folio::{default_portfolio, ColorScheme, PageRenderer, TypeScale};
//!
//! let renderer = PageRenderer::new(TypeScale::default()).unwrap();
//! let html = renderer.render(default_portfolio(), ColorScheme::Light).unwrap();
//! assert!(html.contains("<h3"));
//! ```
//!
//! Configuration holes (a blank role base, a missing content field, a
//! template naming a role that does not exist) fail the build with a
//! typed error. A page is either complete or not written at all.

/// Utility-class merging with conflict resolution.
pub mod classes;
/// The immutable content structure behind the page.
pub mod content;
/// Inline SVG glyphs.
pub mod icons;
/// Page composition and rendering.
pub mod render;
/// Color scheme selection for the generated page.
pub mod scheme;
/// Text-role typography.
pub mod typography;
/// HTML escaping and text measurement helpers.
pub mod util;

pub use classes::{merge, merge_with};
pub use content::{
    default_portfolio, ContactEntry, ContentError, EducationEntry, ExperienceEntry,
    ExperienceSection, Portfolio, Profile, ProjectEntry, Section, TechStack,
};
pub use icons::Icon;
pub use render::{PageRenderer, RenderError, TEMPLATE_EXTENSIONS};
pub use scheme::{set_scheme_detector, ColorScheme, SchemeChoice};
pub use typography::{RoleSpec, ScaleError, TextElement, TypeScale, Variant};
pub use util::{escape_html, truncate_to_width};
