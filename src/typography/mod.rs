//! Text-role typography: a closed table of variants and their rendering.
//!
//! This module provides the core typographic primitives:
//!
//! - [`Variant`]: the closed set of text roles the page uses
//! - [`TypeScale`]: the total mapping from role to base classes and element kind
//! - [`TextElement`]: a builder producing one semantic HTML element
//!
//! Every variant renders through the same rule: its element kind, its base
//! classes merged with the caller's override (override wins on conflicts),
//! all passthrough attributes applied verbatim, and the children inside.
//! There are no per-role special cases.

mod error;

pub use error::ScaleError;

use crate::classes::merge_with;
use crate::util::escape_html;

/// A text role used by the page composition.
///
/// Four heading levels plus the paragraph family. The set is closed: the
/// page can only ever ask for roles that exist in the [`TypeScale`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    H1,
    H2,
    H3,
    H4,
    Paragraph,
    Muted,
    Lead,
    Blockquote,
    InlineCode,
    Small,
    Large,
}

impl Variant {
    /// All variants, in table order.
    pub const ALL: [Variant; 11] = [
        Variant::H1,
        Variant::H2,
        Variant::H3,
        Variant::H4,
        Variant::Paragraph,
        Variant::Muted,
        Variant::Lead,
        Variant::Blockquote,
        Variant::InlineCode,
        Variant::Small,
        Variant::Large,
    ];

    /// The role name used by templates and diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            Variant::H1 => "h1",
            Variant::H2 => "h2",
            Variant::H3 => "h3",
            Variant::H4 => "h4",
            Variant::Paragraph => "p",
            Variant::Muted => "muted",
            Variant::Lead => "lead",
            Variant::Blockquote => "blockquote",
            Variant::InlineCode => "code",
            Variant::Small => "small",
            Variant::Large => "large",
        }
    }

    /// Parses a role name as used in templates.
    ///
    /// Returns `None` for unknown names; callers surface that as a
    /// configuration error before anything is rendered.
    pub fn from_name(name: &str) -> Option<Variant> {
        Variant::ALL.into_iter().find(|v| v.name() == name)
    }

    fn index(self) -> usize {
        Variant::ALL.iter().position(|v| *v == self).unwrap_or(0)
    }
}

/// One row of the type scale: base classes and the semantic element kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleSpec {
    base: String,
    tag: &'static str,
}

impl RoleSpec {
    fn new(base: &str, tag: &'static str) -> Self {
        Self { base: base.to_string(), tag }
    }

    /// The fixed base class sequence for this role.
    pub fn base(&self) -> &str {
        &self.base
    }

    /// The HTML element kind this role renders as.
    pub fn tag(&self) -> &'static str {
        self.tag
    }
}

/// The total mapping from [`Variant`] to [`RoleSpec`].
///
/// Storage is indexed by variant, so every role always has exactly one
/// entry and a lookup cannot miss. The default scale carries the page's
/// golden base strings; [`TypeScale::with_base`] swaps a role's classes
/// while keeping its element kind.
///
/// # Example
///
/// ```rust
/// use folio::{TypeScale, Variant};
///
/// let scale = TypeScale::default();
/// assert_eq!(
///     scale.spec(Variant::H3).base(),
///     "scroll-m-20 text-2xl font-semibold tracking-tight"
/// );
/// assert_eq!(scale.spec(Variant::Muted).tag(), "p");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeScale {
    specs: [RoleSpec; 11],
}

impl Default for TypeScale {
    fn default() -> Self {
        Self {
            specs: [
                RoleSpec::new("scroll-m-20 text-4xl font-bold tracking-tight lg:text-6xl", "h1"),
                RoleSpec::new(
                    "scroll-m-20 border-b pb-2 text-3xl font-semibold tracking-tight first:mt-0",
                    "h2",
                ),
                RoleSpec::new("scroll-m-20 text-2xl font-semibold tracking-tight", "h3"),
                RoleSpec::new("scroll-m-20 text-xl font-semibold tracking-tight", "h4"),
                RoleSpec::new("leading-7 [&:not(:first-child)]:mt-6", "p"),
                RoleSpec::new("text-sm text-muted-foreground", "p"),
                RoleSpec::new("text-xl text-muted-foreground", "p"),
                RoleSpec::new("mt-6 border-l-2 pl-6 italic", "blockquote"),
                RoleSpec::new(
                    "relative rounded bg-muted px-[0.3rem] py-[0.2rem] font-mono text-sm font-semibold",
                    "code",
                ),
                RoleSpec::new("text-sm font-medium leading-none", "small"),
                RoleSpec::new("text-lg font-semibold", "div"),
            ],
        }
    }
}

impl TypeScale {
    /// Creates the default scale.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the spec for a role. Total: never fails.
    pub fn spec(&self, variant: Variant) -> &RoleSpec {
        &self.specs[variant.index()]
    }

    /// Replaces a role's base classes, returning the updated scale for chaining.
    ///
    /// The element kind is fixed per role and cannot be changed.
    ///
    /// # Example
    ///
    /// ```rust
    /// use folio::{TypeScale, Variant};
    ///
    /// let scale = TypeScale::new().with_base(Variant::Muted, "text-xs text-stone-400");
    /// assert_eq!(scale.spec(Variant::Muted).base(), "text-xs text-stone-400");
    /// ```
    pub fn with_base(mut self, variant: Variant, base: impl Into<String>) -> Self {
        self.specs[variant.index()].base = base.into();
        self
    }

    /// Validates that no role has a blank base.
    ///
    /// A blank base would render visually unstyled text; this is caught
    /// when the renderer is constructed, never discovered on the page.
    pub fn validate(&self) -> Result<(), ScaleError> {
        for variant in Variant::ALL {
            if self.spec(variant).base.trim().is_empty() {
                return Err(ScaleError::BlankBase { role: variant.name() });
            }
        }
        Ok(())
    }
}

/// Child content of a [`TextElement`].
#[derive(Debug, Clone)]
enum Node {
    /// Plain text, HTML-escaped on render.
    Text(String),
    /// A pre-rendered fragment, emitted verbatim.
    Raw(String),
}

/// A semantic text element under construction.
///
/// One parametrized builder covers every role: the variant picks the
/// element kind and base classes from the scale, the caller adds children,
/// an optional class override, and passthrough attributes.
///
/// Rendering is pure: the same element against the same scale always
/// produces the same markup.
///
/// # Example
///
/// ```rust
/// use folio::{TextElement, TypeScale, Variant};
///
/// let scale = TypeScale::default();
/// let html = TextElement::new(Variant::H3).text("Naqib Hishamuddin.").render(&scale);
/// assert_eq!(
///     html,
///     "<h3 class=\"scroll-m-20 text-2xl font-semibold tracking-tight\">Naqib Hishamuddin.</h3>"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct TextElement {
    variant: Variant,
    class_override: Option<String>,
    attrs: Vec<(String, String)>,
    children: Vec<Node>,
}

impl TextElement {
    /// Creates an empty element for the given role.
    pub fn new(variant: Variant) -> Self {
        Self { variant, class_override: None, attrs: Vec::new(), children: Vec::new() }
    }

    /// Appends escaped text content.
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Node::Text(text.into()));
        self
    }

    /// Appends a pre-rendered HTML fragment verbatim.
    ///
    /// The caller vouches for the fragment being well-formed markup.
    pub fn raw(mut self, html: impl Into<String>) -> Self {
        self.children.push(Node::Raw(html.into()));
        self
    }

    /// Sets the caller's class override, merged over the role's base.
    pub fn class(mut self, classes: impl Into<String>) -> Self {
        self.class_override = Some(classes.into());
        self
    }

    /// Adds a passthrough attribute, forwarded verbatim in call order.
    ///
    /// The `class` attribute is reserved: entries named `class` are
    /// discarded at render so the merged class can never be clobbered.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push((name.into(), value.into()));
        self
    }

    /// Renders the element against a scale.
    pub fn render(&self, scale: &TypeScale) -> String {
        let spec = scale.spec(self.variant);
        let class = merge_with(spec.base(), self.class_override.as_deref());

        let mut out = String::new();
        out.push('<');
        out.push_str(spec.tag());
        out.push_str(" class=\"");
        out.push_str(&escape_html(&class));
        out.push('"');
        for (name, value) in &self.attrs {
            if name.eq_ignore_ascii_case("class") {
                continue;
            }
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            out.push_str(&escape_html(value));
            out.push('"');
        }
        out.push('>');
        for child in &self.children {
            match child {
                Node::Text(text) => out.push_str(&escape_html(text)),
                Node::Raw(html) => out.push_str(html),
            }
        }
        out.push_str("</");
        out.push_str(spec.tag());
        out.push('>');
        out
    }
}
