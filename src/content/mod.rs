//! The immutable content structure behind the page.
//!
//! Everything the page says lives here as one explicit configuration
//! value: profile, contact targets, experience, education, projects, and
//! the tech stack. Records are defined once, validated for completeness
//! before any rendering happens, and serialized into the template context.
//!
//! There is no runtime mutation: the default data set is built once behind
//! a [`Lazy`] static and only ever read.

mod error;

pub use error::ContentError;

use once_cell::sync::Lazy;
use serde::Serialize;

use crate::icons::Icon;

/// Who the page is about.
#[derive(Debug, Clone, Serialize)]
pub struct Profile {
    pub name: String,
    pub about: String,
    pub email: String,
    /// Path of the portrait image, relative to the generated page.
    pub portrait: String,
    /// Label of the resume button. The button has no navigation target,
    /// so only its label is content.
    pub resume_label: String,
}

/// One contact tile: a glyph linking out of the page.
#[derive(Debug, Clone, Serialize)]
pub struct ContactEntry {
    pub label: String,
    pub icon: Icon,
    pub url: String,
    /// Whether the target opens in a new browsing context.
    /// `mailto:` navigates the current one.
    pub external: bool,
}

impl ContactEntry {
    pub fn new(label: impl Into<String>, icon: Icon, url: impl Into<String>) -> Self {
        let url = url.into();
        let external = !url.starts_with("mailto:");
        Self { label: label.into(), icon, url, external }
    }
}

/// One role in the professional history.
#[derive(Debug, Clone, Serialize)]
pub struct ExperienceEntry {
    pub title: String,
    pub company: String,
    pub date: String,
    pub icon: Icon,
}

impl ExperienceEntry {
    pub fn new(
        title: impl Into<String>,
        company: impl Into<String>,
        date: impl Into<String>,
        icon: Icon,
    ) -> Self {
        Self { title: title.into(), company: company.into(), date: date.into(), icon }
    }
}

/// One academic qualification.
#[derive(Debug, Clone, Serialize)]
pub struct EducationEntry {
    pub course: String,
    pub institution: String,
    pub date: String,
}

impl EducationEntry {
    pub fn new(
        course: impl Into<String>,
        institution: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self { course: course.into(), institution: institution.into(), date: date.into() }
    }
}

/// One showcased project, linking to its live deployment.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectEntry {
    pub title: String,
    pub description: String,
    pub url: String,
}

impl ProjectEntry {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self { title: title.into(), description: description.into(), url: url.into() }
    }
}

/// The experience section. The page shows a different intro blurb on
/// narrow and wide layouts, so both are content.
#[derive(Debug, Clone, Serialize)]
pub struct ExperienceSection {
    pub heading: String,
    pub blurb_mobile: String,
    pub blurb_desktop: String,
    pub entries: Vec<ExperienceEntry>,
}

/// A section with one intro blurb and a list of entries.
#[derive(Debug, Clone, Serialize)]
pub struct Section<T> {
    pub heading: String,
    pub blurb: String,
    pub entries: Vec<T>,
}

/// The tech-stack badge list.
#[derive(Debug, Clone, Serialize)]
pub struct TechStack {
    pub heading: String,
    pub items: Vec<String>,
}

/// The complete page content.
#[derive(Debug, Clone, Serialize)]
pub struct Portfolio {
    pub profile: Profile,
    pub contacts: Vec<ContactEntry>,
    pub experience: ExperienceSection,
    pub projects: Section<ProjectEntry>,
    pub tech_stack: TechStack,
    pub education: Section<EducationEntry>,
}

fn require(record: &str, field: &'static str, value: &str) -> Result<(), ContentError> {
    if value.trim().is_empty() {
        return Err(ContentError::BlankField { record: record.to_string(), field });
    }
    Ok(())
}

fn require_linkable(record: &str, url: &str) -> Result<(), ContentError> {
    let ok = url.starts_with("http://") || url.starts_with("https://") || url.starts_with("mailto:");
    if !ok {
        return Err(ContentError::UnsupportedScheme {
            record: record.to_string(),
            url: url.to_string(),
        });
    }
    Ok(())
}

impl Portfolio {
    /// Checks the content table for completeness.
    ///
    /// Every required field must be non-blank, every navigation target
    /// must carry a linkable scheme, and every section must have entries.
    /// Run before rendering, so a hole in the table is a build failure and
    /// never a half-filled page.
    pub fn validate(&self) -> Result<(), ContentError> {
        let p = &self.profile;
        require("profile", "name", &p.name)?;
        require("profile", "about", &p.about)?;
        require("profile", "email", &p.email)?;
        require("profile", "portrait", &p.portrait)?;
        require("profile", "resume_label", &p.resume_label)?;

        if self.contacts.is_empty() {
            return Err(ContentError::EmptySection { section: "contacts" });
        }
        for contact in &self.contacts {
            let record = format!("contact \"{}\"", contact.label);
            require(&record, "label", &contact.label)?;
            require(&record, "url", &contact.url)?;
            require_linkable(&record, &contact.url)?;
        }

        require("experience", "heading", &self.experience.heading)?;
        require("experience", "blurb_mobile", &self.experience.blurb_mobile)?;
        require("experience", "blurb_desktop", &self.experience.blurb_desktop)?;
        if self.experience.entries.is_empty() {
            return Err(ContentError::EmptySection { section: "experience" });
        }
        for entry in &self.experience.entries {
            let record = format!("experience \"{}\"", entry.title);
            require(&record, "title", &entry.title)?;
            require(&record, "company", &entry.company)?;
            require(&record, "date", &entry.date)?;
        }

        require("projects", "heading", &self.projects.heading)?;
        require("projects", "blurb", &self.projects.blurb)?;
        if self.projects.entries.is_empty() {
            return Err(ContentError::EmptySection { section: "projects" });
        }
        for entry in &self.projects.entries {
            let record = format!("project \"{}\"", entry.title);
            require(&record, "title", &entry.title)?;
            require(&record, "description", &entry.description)?;
            require(&record, "url", &entry.url)?;
            require_linkable(&record, &entry.url)?;
        }

        require("tech_stack", "heading", &self.tech_stack.heading)?;
        if self.tech_stack.items.is_empty() {
            return Err(ContentError::EmptySection { section: "tech_stack" });
        }
        for item in &self.tech_stack.items {
            require("tech_stack", "items", item)?;
        }

        require("education", "heading", &self.education.heading)?;
        require("education", "blurb", &self.education.blurb)?;
        if self.education.entries.is_empty() {
            return Err(ContentError::EmptySection { section: "education" });
        }
        for entry in &self.education.entries {
            let record = format!("education \"{}\"", entry.course);
            require(&record, "course", &entry.course)?;
            require(&record, "institution", &entry.institution)?;
            require(&record, "date", &entry.date)?;
        }

        Ok(())
    }
}

static PORTFOLIO: Lazy<Portfolio> = Lazy::new(author_portfolio);

/// The author's content set, built once and shared.
pub fn default_portfolio() -> &'static Portfolio {
    &PORTFOLIO
}

fn author_portfolio() -> Portfolio {
    Portfolio {
        profile: Profile {
            name: "Naqib Hishamuddin.".to_string(),
            about: "A full stack developer with a strong focus on frontend development, \
                    particularly within the React and React Native ecosystem. With a solid \
                    foundation in Node.js for backend solutions, I am dedicated to creating \
                    dynamic and responsive web applications. My approach is driven by a \
                    passion for delivering intuitive and seamless user experiences, while \
                    constantly staying updated with the latest industry trends to bring \
                    fresh and effective ideas to every project."
                .to_string(),
            email: "hello@naqibhishamuddin.com".to_string(),
            portrait: "assets/profile.webp".to_string(),
            resume_label: "Download Resume".to_string(),
        },
        contacts: vec![
            ContactEntry::new("Email", Icon::Mail, "mailto:hello@naqibhishamuddin.com"),
            ContactEntry::new(
                "LinkedIn",
                Icon::Linkedin,
                "https://www.linkedin.com/in/naqibhishamuddin/",
            ),
            ContactEntry::new("Twitter", Icon::Twitter, "https://x.com/qibbydev"),
            ContactEntry::new("Location", Icon::MapPin, "https://maps.app.goo.gl/KkNAxvCBtM4emXvRA"),
        ],
        experience: ExperienceSection {
            heading: "Experience.".to_string(),
            blurb_mobile: "Here is a summary of my professional journey, showcasing my \
                           expertise and contributions across various roles and industries."
                .to_string(),
            blurb_desktop: "Encapsulating my professional journey, highlighting expertise \
                            and impactful contributions across diverse roles and industries."
                .to_string(),
            entries: vec![
                ExperienceEntry::new(
                    "Business & Integration Architect Senior Analyst",
                    "Accenture",
                    "Mar 2022 - Present",
                    Icon::Chrome,
                ),
                ExperienceEntry::new(
                    "React Native Developer",
                    "HAUZ Enterprise Sdn. Bhd",
                    "Nov 2021 - Mar 2022",
                    Icon::TabletSmartphone,
                ),
                ExperienceEntry::new(
                    "Team Lead",
                    "Lava X Technologies Sdn. Bhd",
                    "Sept 2021 - Nov 2021",
                    Icon::Sparkles,
                ),
                ExperienceEntry::new(
                    "Full-Stack Developer",
                    "Lava X Technologies Sdn. Bhd",
                    "Mar 2021 - Sept 2021",
                    Icon::Layers,
                ),
            ],
        },
        projects: Section {
            heading: "Project.".to_string(),
            blurb: "Explore a curated selection of my impactful projects, showcasing \
                    innovative solutions and meticulous craftsmanship across diverse domains \
                    and industries. Each project highlights my commitment to excellence and \
                    creative problem-solving in software development."
                .to_string(),
            entries: vec![
                ProjectEntry::new(
                    "Resit Cukai",
                    "Simplify receipt storage and organization securely for seamless \
                     e-filing and easy access to purchase records.",
                    "https://resitcukai.com",
                ),
                ProjectEntry::new(
                    "Encreept",
                    "A one-click solution for securely hashing plaintext using SHA-256, \
                     ensuring data integrity and confidentiality with ease.",
                    "https://www.encreept.com",
                ),
                ProjectEntry::new(
                    "Webpee",
                    "Convert images to WebP format for optimized web use, improving \
                     performance and reducing file sizes effectively.",
                    "https://webpee.naqibhishamuddin.com/",
                ),
                ProjectEntry::new(
                    "Quurls",
                    "Quick URL Shortener, efficiently shorten URLs to create compact links, \
                     enhancing readability and optimizing space in communications and online \
                     sharing.",
                    "https://quurls.com",
                ),
                ProjectEntry::new(
                    "Nak Masak Apa",
                    "Explore a curated collection of recipes crafted by Khairul Aming, \
                     featuring diverse culinary delights for every occasion and palate",
                    "https://nakmasakapa.com",
                ),
            ],
        },
        tech_stack: TechStack {
            heading: "Tech Stack.".to_string(),
            items: [
                "HTML",
                "CSS",
                "React",
                "Next.js",
                "Nest.js",
                "Jest",
                "Typescript",
                "Javascript",
                "React Native",
                "Playwright",
                "React Testing Library",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
        },
        education: Section {
            heading: "Education.".to_string(),
            blurb: "Summary of my academic journey, highlighting qualifications and areas \
                    of specialization."
                .to_string(),
            entries: vec![
                EducationEntry::new(
                    "Bachelor's Degree (Hons.) in Mobile Wireless and Technology",
                    "Management and Science University, Malaysia",
                    "Feb 2018 - May 2021",
                ),
                EducationEntry::new(
                    "Sijil Tinggi Pelajaran Malaysia",
                    "Setapak High School, Malaysia",
                    "Mar 2016 - Feb 2018",
                ),
            ],
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_portfolio_validates() {
        assert!(default_portfolio().validate().is_ok());
    }

    #[test]
    fn test_default_portfolio_shape() {
        let portfolio = default_portfolio();
        assert_eq!(portfolio.profile.name, "Naqib Hishamuddin.");
        assert_eq!(portfolio.contacts.len(), 4);
        assert_eq!(portfolio.experience.entries.len(), 4);
        assert_eq!(portfolio.projects.entries.len(), 5);
        assert_eq!(portfolio.tech_stack.items.len(), 11);
        assert_eq!(portfolio.education.entries.len(), 2);
    }

    #[test]
    fn test_blank_field_is_rejected() {
        let mut portfolio = default_portfolio().clone();
        portfolio.profile.name = "   ".to_string();
        assert_eq!(
            portfolio.validate(),
            Err(ContentError::BlankField { record: "profile".to_string(), field: "name" })
        );
    }

    #[test]
    fn test_unlinkable_url_is_rejected() {
        let mut portfolio = default_portfolio().clone();
        portfolio.projects.entries[0].url = "ftp://resitcukai.com".to_string();
        assert!(matches!(
            portfolio.validate(),
            Err(ContentError::UnsupportedScheme { .. })
        ));
    }

    #[test]
    fn test_empty_section_is_rejected() {
        let mut portfolio = default_portfolio().clone();
        portfolio.education.entries.clear();
        assert_eq!(
            portfolio.validate(),
            Err(ContentError::EmptySection { section: "education" })
        );
    }

    #[test]
    fn test_contact_external_flag() {
        let mail = ContactEntry::new("Email", Icon::Mail, "mailto:a@b.c");
        let web = ContactEntry::new("LinkedIn", Icon::Linkedin, "https://example.com");
        assert!(!mail.external);
        assert!(web.external);
    }

    #[test]
    fn test_records_serialize_for_templates() {
        let json = serde_json::to_value(default_portfolio()).unwrap();
        assert_eq!(json["profile"]["name"], "Naqib Hishamuddin.");
        assert_eq!(json["experience"]["entries"][0]["icon"], "chrome");
        assert_eq!(json["contacts"][0]["external"], false);
    }
}
