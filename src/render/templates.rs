//! Built-in page templates and the override directory.
//!
//! The page is composed from named templates: one shell plus one template
//! per card kind. All of them are compiled into the binary, so a build
//! needs no files on disk. A user may shadow any built-in by dropping a
//! file with the same name (plus a recognized extension) into a template
//! directory; `folio build --templates DIR` resolves those before
//! rendering.
//!
//! Text never appears in a template as a bare element: every fragment goes
//! through the `typo` filter so the type scale stays the single source of
//! typographic truth.

use std::path::{Path, PathBuf};

/// Recognized template file extensions in priority order.
///
/// When one name exists with both extensions, the earlier extension wins.
pub const TEMPLATE_EXTENSIONS: &[&str] = &[".html", ".tmpl"];

/// The built-in templates, registered under these names.
pub(crate) const BUILTINS: &[(&str, &str)] = &[
    ("page", PAGE),
    ("card/about", CARD_ABOUT),
    ("card/portrait", CARD_PORTRAIT),
    ("card/contact", CARD_CONTACT),
    ("card/section-intro", CARD_SECTION_INTRO),
    ("card/experience", CARD_EXPERIENCE),
    ("card/tech-stack", CARD_TECH_STACK),
    ("card/project", CARD_PROJECT),
    ("card/education", CARD_EDUCATION),
];

/// The document shell and the card grid, mirroring the page layout:
/// about + portrait/contact column, experience, projects + tech stack,
/// education. Breakpoint behavior lives entirely in the utility classes.
const PAGE: &str = r#"<!DOCTYPE html>
<html lang="en" class="{{ scheme }}">
<head>
<meta charset="utf-8"/>
<meta name="viewport" content="width=device-width, initial-scale=1.0"/>
<title>{{ portfolio.profile.name }}</title>
<meta name="description" content="{{ portfolio.profile.about }}"/>
<script src="https://cdn.tailwindcss.com"></script>
<script>
tailwind.config = {
  darkMode: "class",
  theme: {
    extend: {
      colors: {
        border: "hsl(var(--border))",
        background: "hsl(var(--background))",
        foreground: "hsl(var(--foreground))",
        card: { DEFAULT: "hsl(var(--card))", foreground: "hsl(var(--card-foreground))" },
        primary: { DEFAULT: "hsl(var(--primary))", foreground: "hsl(var(--primary-foreground))" },
        secondary: { DEFAULT: "hsl(var(--secondary))", foreground: "hsl(var(--secondary-foreground))" },
        muted: { DEFAULT: "hsl(var(--muted))", foreground: "hsl(var(--muted-foreground))" }
      }
    }
  }
};
</script>
<style>
:root, .light {
  --background: 0 0% 100%;
  --foreground: 222.2 84% 4.9%;
  --card: 0 0% 100%;
  --card-foreground: 222.2 84% 4.9%;
  --primary: 222.2 47.4% 11.2%;
  --primary-foreground: 210 40% 98%;
  --secondary: 210 40% 96.1%;
  --secondary-foreground: 222.2 47.4% 11.2%;
  --muted: 210 40% 96.1%;
  --muted-foreground: 215.4 16.3% 46.9%;
  --border: 214.3 31.8% 91.4%;
}
.dark {
  --background: 222.2 84% 4.9%;
  --foreground: 210 40% 98%;
  --card: 222.2 84% 4.9%;
  --card-foreground: 210 40% 98%;
  --primary: 210 40% 98%;
  --primary-foreground: 222.2 47.4% 11.2%;
  --secondary: 217.2 32.6% 17.5%;
  --secondary-foreground: 210 40% 98%;
  --muted: 217.2 32.6% 17.5%;
  --muted-foreground: 215 20.2% 65.1%;
  --border: 217.2 32.6% 17.5%;
}
* { border-color: hsl(var(--border)); }
body { background-color: hsl(var(--background)); }
</style>
</head>
<body>
<div class="min-h-screen px-4 py-16 text-white">
<div class="mx-auto grid max-w-4xl grid-cols-1 gap-6 md:grid-cols-12">
{% include "card/about" %}
<div class="md:col-span-4 grid grid-cols-12 gap-4 md:gap-3">
{% include "card/portrait" %}
{% for contact in portfolio.contacts %}{% include "card/contact" %}
{% endfor %}</div>
{% set heading = portfolio.experience.heading %}
{% set blurb = portfolio.experience.blurb_mobile %}
{% set shell = "md:hidden flex flex-col justify-end" %}
{% set inner = "" %}
{% include "card/section-intro" %}
<div class="md:col-span-7 grid grid-cols-1 gap-6 md:grid-cols-12">
{% for entry in portfolio.experience.entries %}{% include "card/experience" %}
{% endfor %}</div>
{% set blurb = portfolio.experience.blurb_desktop %}
{% set shell = "hidden md:col-span-5 md:flex flex-col justify-end" %}
{% include "card/section-intro" %}
{% set heading = portfolio.projects.heading %}
{% set blurb = portfolio.projects.blurb %}
{% set shell = "md:col-span-8 flex flex-col justify-end" %}
{% set inner = "max-w-md" %}
{% include "card/section-intro" %}
{% include "card/tech-stack" %}
{% for entry in portfolio.projects.entries %}
{% set span = "md:col-span-4" if loop.index <= 3 else "md:col-span-6" %}
{% include "card/project" %}
{% endfor %}
{% set heading = portfolio.education.heading %}
{% set blurb = portfolio.education.blurb %}
{% set shell = "md:col-span-4 flex flex-col" %}
{% set inner = "" %}
{% include "card/section-intro" %}
{% for entry in portfolio.education.entries %}{% include "card/education" %}
{% endfor %}
</div>
</div>
</body>
</html>
"#;

const CARD_ABOUT: &str = r#"<section class="md:col-span-8 flex flex-col justify-end rounded-lg border bg-card text-card-foreground shadow-sm">
<div class="flex flex-col space-y-6 p-6">
{{ portfolio.profile.name | typo("h3", "text-4xl font-black text-neutral-900") }}
{{ portfolio.profile.about | typo("muted", "text-muted-foreground font-light") }}
<button type="button" class="inline-flex h-10 items-center justify-center gap-2 rounded-md bg-primary px-4 text-sm font-medium text-primary-foreground md:flex md:w-1/2 py-6">{{ portfolio.profile.resume_label }} {{ "arrow-up-right" | icon("w-4 h-4 text-gray-200") }}</button>
</div>
</section>
"#;

const CARD_PORTRAIT: &str = r#"<section class="hidden overflow-hidden rounded-lg border bg-card text-card-foreground shadow-sm md:col-span-12 md:flex">
<div class="aspect-square w-full">
<img src="{{ portfolio.profile.portrait }}" alt="Portrait of {{ portfolio.profile.name }}" class="h-full w-full object-cover"/>
</div>
</section>
"#;

const CARD_CONTACT: &str = r#"<a href="{{ contact.url }}"{% if contact.external %} target="_blank" rel="noreferrer"{% endif %} aria-label="{{ contact.label }}" class="col-span-3 mx-auto flex w-full cursor-pointer flex-col items-center justify-center rounded-lg border bg-card text-card-foreground shadow-sm py-6 md:col-span-3 md:py-0">
{{ contact.icon | icon("h-12 w-12") }}
</a>
"#;

const CARD_SECTION_INTRO: &str = r#"<section class="{{ shell }} overflow-hidden rounded-lg border bg-primary text-primary-foreground shadow-sm">
<div class="flex flex-col space-y-2 p-6{% if inner %} {{ inner }}{% endif %}">
{{ heading | typo("h4", "text-gray-200") }}
{{ blurb | typo("muted", "text-gray-300") }}
</div>
</section>
"#;

const CARD_EXPERIENCE: &str = r#"<section class="md:col-span-6 rounded-lg border bg-card text-card-foreground shadow-sm">
<div class="p-6">
<div class="flex flex-col items-center justify-center space-y-3 pt-6 text-center">
{{ entry.icon | icon("w-9 h-9 text-gray-800") }}
<div class="flex flex-col space-y-1">
{{ entry.title | typo("h4", "text-sm font-semibold") }}
{{ entry.company | typo("muted", "text-xs") }}
{{ entry.date | typo("muted", "text-xs font-extralight") }}
</div>
</div>
</div>
</section>
"#;

const CARD_TECH_STACK: &str = r#"<section class="md:col-span-4 rounded-lg border bg-card text-card-foreground shadow-sm">
<div class="flex flex-col space-y-3 p-6">
{{ portfolio.tech_stack.heading | typo("h4") }}
<div class="flex flex-row flex-wrap items-center gap-2">
{% for item in portfolio.tech_stack.items %}<span class="inline-flex items-center rounded-md border border-transparent bg-secondary px-2.5 py-0.5 text-xs font-semibold text-secondary-foreground">{{ item }}</span>
{% endfor %}</div>
</div>
</section>
"#;

const CARD_PROJECT: &str = r#"<a href="{{ entry.url }}" target="_blank" rel="noreferrer" class="{{ span }} block rounded-lg border bg-card text-card-foreground shadow-sm">
<div class="flex cursor-pointer flex-col space-y-1.5 p-6">
<div class="flex flex-row items-center gap-2">
{{ entry.title | typo("h4", "font-semibold text-lg") }}
{{ "arrow-up-right" | icon("w-4 h-4 text-muted-foreground") }}
</div>
{{ entry.description | typo("muted", "text-muted-foreground font-light") }}
</div>
</a>
"#;

const CARD_EDUCATION: &str = r#"<section class="md:col-span-4 rounded-lg border bg-card text-card-foreground shadow-sm">
<div class="mt-6 space-y-1.5 p-6">
{{ entry.course | typo("h4", "text-sm font-semibold") }}
{{ entry.institution | typo("muted", "text-xs") }}
{{ entry.date | typo("muted", "text-xs font-extralight") }}
</div>
</section>
"#;

/// A template file discovered in an override directory.
#[derive(Debug, Clone, PartialEq, Eq)]
struct TemplateFile {
    /// Resolution name without extension (e.g. `card/about`).
    name: String,
    /// Extension priority, lower is higher.
    priority: usize,
    /// Absolute path for reading content.
    path: PathBuf,
}

/// Collects override templates from a directory, recursively.
///
/// Each discovered file registers under its root-relative path with the
/// extension stripped, so `DIR/card/about.html` shadows the built-in
/// `card/about`. When both extensions exist for one name, the
/// higher-priority one wins and the other is skipped.
pub(crate) fn load_overrides(root: &Path) -> Result<Vec<(String, String)>, OverrideError> {
    let mut files = Vec::new();
    collect_templates(root, root, &mut files)?;

    // Higher-priority extensions first, so a shadowed sibling is skipped.
    files.sort_by(|a, b| a.priority.cmp(&b.priority).then_with(|| a.name.cmp(&b.name)));

    let mut seen = Vec::new();
    let mut overrides = Vec::new();
    for file in files {
        if seen.contains(&file.name) {
            continue;
        }
        let content = std::fs::read_to_string(&file.path).map_err(|e| OverrideError {
            path: file.path.clone(),
            message: e.to_string(),
        })?;
        seen.push(file.name.clone());
        overrides.push((file.name, content));
    }
    Ok(overrides)
}

fn collect_templates(
    current: &Path,
    root: &Path,
    files: &mut Vec<TemplateFile>,
) -> Result<(), OverrideError> {
    let entries = std::fs::read_dir(current)
        .map_err(|e| OverrideError { path: current.to_path_buf(), message: e.to_string() })?;
    for entry in entries {
        let entry = entry
            .map_err(|e| OverrideError { path: current.to_path_buf(), message: e.to_string() })?;
        let path = entry.path();
        if path.is_dir() {
            collect_templates(&path, root, files)?;
        } else if let Some(file) = parse_template_file(&path, root) {
            files.push(file);
        }
    }
    Ok(())
}

fn parse_template_file(path: &Path, root: &Path) -> Option<TemplateFile> {
    let relative = path.strip_prefix(root).ok()?;
    let relative = relative.to_string_lossy().replace(std::path::MAIN_SEPARATOR, "/");

    let (priority, extension) = TEMPLATE_EXTENSIONS
        .iter()
        .enumerate()
        .find(|(_, ext)| relative.ends_with(*ext))?;
    let name = relative.strip_suffix(extension)?.to_string();

    Some(TemplateFile { name, priority, path: path.to_path_buf() })
}

/// Failure reading an override directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct OverrideError {
    pub(crate) path: PathBuf,
    pub(crate) message: String,
}
