//! Page composition and rendering.
//!
//! This module provides:
//!
//! - [`PageRenderer`]: a minijinja environment with the page templates and
//!   the `typo`/`icon` filters pre-registered
//! - [`RenderError`]: everything that can go wrong building or rendering
//! - [`TEMPLATE_EXTENSIONS`]: the extensions recognized in an override
//!   template directory
//!
//! The composition is declarative: templates arrange cards, the content
//! structure supplies the words, and every text fragment is styled through
//! the type scale.

mod filters;
mod renderer;
mod templates;

pub use renderer::{PageRenderer, RenderError};
pub use templates::TEMPLATE_EXTENSIONS;
