//! Pre-compiled page renderer.

use std::path::{Path, PathBuf};

use minijinja::{context, AutoEscape, Environment};

use super::filters::register_filters;
use super::templates;
use crate::content::{ContentError, Portfolio};
use crate::scheme::ColorScheme;
use crate::typography::{ScaleError, TypeScale};

/// Error raised while building a renderer or rendering the page.
#[derive(Debug)]
pub enum RenderError {
    /// The type scale failed validation.
    Scale(ScaleError),
    /// The content table failed its completeness check.
    Content(ContentError),
    /// A template failed to compile or render.
    Template(minijinja::Error),
    /// The override template directory could not be read.
    TemplateDir { path: PathBuf, message: String },
    /// Writing the generated page failed.
    Io { path: PathBuf, message: String },
}

impl std::fmt::Display for RenderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderError::Scale(e) => write!(f, "invalid type scale: {}", e),
            RenderError::Content(e) => write!(f, "incomplete content: {}", e),
            RenderError::Template(e) => write!(f, "template error: {}", e),
            RenderError::TemplateDir { path, message } => {
                write!(f, "failed to read template directory \"{}\": {}", path.display(), message)
            }
            RenderError::Io { path, message } => {
                write!(f, "failed to write \"{}\": {}", path.display(), message)
            }
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RenderError::Scale(e) => Some(e),
            RenderError::Content(e) => Some(e),
            RenderError::Template(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ScaleError> for RenderError {
    fn from(e: ScaleError) -> Self {
        RenderError::Scale(e)
    }
}

impl From<ContentError> for RenderError {
    fn from(e: ContentError) -> Self {
        RenderError::Content(e)
    }
}

impl From<minijinja::Error> for RenderError {
    fn from(e: minijinja::Error) -> Self {
        RenderError::Template(e)
    }
}

/// A renderer with the page templates and filters pre-registered.
///
/// Building the renderer validates the type scale; rendering validates the
/// content. Both checks fail fast so a configuration hole surfaces as a
/// build error, never as a silently misstyled page.
///
/// # Example
///
/// ```rust
/// use folio::{default_portfolio, ColorScheme, PageRenderer, TypeScale};
///
/// let renderer = PageRenderer::new(TypeScale::default()).unwrap();
/// let html = renderer.render(default_portfolio(), ColorScheme::Light).unwrap();
/// assert!(html.contains("Naqib Hishamuddin."));
/// ```
pub struct PageRenderer {
    env: Environment<'static>,
}

impl PageRenderer {
    /// Creates a renderer with the built-in templates.
    ///
    /// # Errors
    ///
    /// Returns an error if the scale fails validation or a built-in
    /// template fails to compile.
    pub fn new(scale: TypeScale) -> Result<Self, RenderError> {
        Self::build(scale, None)
    }

    /// Creates a renderer whose templates may be shadowed from a directory.
    ///
    /// Files in `dir` (recursively) shadow built-ins by name: `page.html`
    /// replaces the shell, `card/about.html` replaces one card. See
    /// [`TEMPLATE_EXTENSIONS`](super::TEMPLATE_EXTENSIONS).
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be read or an override
    /// fails to compile.
    pub fn with_template_dir(scale: TypeScale, dir: impl AsRef<Path>) -> Result<Self, RenderError> {
        Self::build(scale, Some(dir.as_ref()))
    }

    fn build(scale: TypeScale, dir: Option<&Path>) -> Result<Self, RenderError> {
        scale.validate()?;

        let mut env = Environment::new();
        env.set_auto_escape_callback(|_| AutoEscape::Html);
        register_filters(&mut env, scale);

        for &(name, source) in templates::BUILTINS {
            env.add_template(name, source)?;
        }
        if let Some(dir) = dir {
            let overrides = templates::load_overrides(dir)
                .map_err(|e| RenderError::TemplateDir { path: e.path, message: e.message })?;
            for (name, source) in overrides {
                env.add_template_owned(name, source)?;
            }
        }

        Ok(Self { env })
    }

    /// Renders the full page as an HTML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content fails validation or a template
    /// fails to render.
    pub fn render(&self, portfolio: &Portfolio, scheme: ColorScheme) -> Result<String, RenderError> {
        portfolio.validate()?;
        let template = self.env.get_template("page")?;
        let html = template.render(context! { portfolio, scheme => scheme.class() })?;
        Ok(html)
    }

    /// Renders the page and writes `index.html` under `out_dir`.
    ///
    /// The directory is created if it does not exist. Returns the path of
    /// the written file.
    ///
    /// # Errors
    ///
    /// Returns an error on validation, rendering, or filesystem failure.
    pub fn write(
        &self,
        portfolio: &Portfolio,
        scheme: ColorScheme,
        out_dir: &Path,
    ) -> Result<PathBuf, RenderError> {
        let html = self.render(portfolio, scheme)?;
        std::fs::create_dir_all(out_dir).map_err(|e| RenderError::Io {
            path: out_dir.to_path_buf(),
            message: e.to_string(),
        })?;
        let out_path = out_dir.join("index.html");
        std::fs::write(&out_path, html)
            .map_err(|e| RenderError::Io { path: out_path.clone(), message: e.to_string() })?;
        Ok(out_path)
    }
}
