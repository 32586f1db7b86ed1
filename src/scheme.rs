//! Color scheme selection for the generated page.
//!
//! The page ships light and dark palettes behind CSS custom properties;
//! the scheme class on the root element picks one. The scheme is fixed at
//! generation time: explicitly, or by detecting the OS color mode of the
//! machine running the build.

use dark_light::{detect as detect_os_scheme, Mode as OsSchemeMode};
use once_cell::sync::Lazy;
use std::sync::Mutex;

/// The palette the generated page renders with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorScheme {
    Light,
    Dark,
}

impl ColorScheme {
    /// The scheme class placed on the page's root element.
    pub fn class(self) -> &'static str {
        match self {
            ColorScheme::Light => "light",
            ColorScheme::Dark => "dark",
        }
    }
}

/// How the scheme is chosen at generation time.
///
/// # Example
///
/// ```rust
/// use folio::{ColorScheme, SchemeChoice};
///
/// assert_eq!(SchemeChoice::Dark.resolve(), ColorScheme::Dark);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemeChoice {
    /// Always the light palette.
    Light,
    /// Always the dark palette.
    Dark,
    /// Follow the OS color mode of the machine running the build.
    Auto,
}

impl SchemeChoice {
    /// Resolves to a concrete scheme.
    pub fn resolve(self) -> ColorScheme {
        match self {
            SchemeChoice::Light => ColorScheme::Light,
            SchemeChoice::Dark => ColorScheme::Dark,
            SchemeChoice::Auto => detect_scheme(),
        }
    }
}

type SchemeDetector = fn() -> ColorScheme;

static SCHEME_DETECTOR: Lazy<Mutex<SchemeDetector>> = Lazy::new(|| Mutex::new(os_scheme_detector));

/// Overrides the detector used by [`SchemeChoice::Auto`].
///
/// This is useful for testing or when you want to force a specific scheme
/// without changing the choice plumbing.
pub fn set_scheme_detector(detector: SchemeDetector) {
    let mut guard = SCHEME_DETECTOR.lock().unwrap();
    *guard = detector;
}

pub(crate) fn detect_scheme() -> ColorScheme {
    let detector = SCHEME_DETECTOR.lock().unwrap();
    (*detector)()
}

fn os_scheme_detector() -> ColorScheme {
    match detect_os_scheme() {
        OsSchemeMode::Dark => ColorScheme::Dark,
        OsSchemeMode::Light => ColorScheme::Light,
    }
}
