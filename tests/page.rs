//! End-to-end page scenarios: the full pipeline from content to written HTML.

use folio::{
    default_portfolio, ColorScheme, Icon, PageRenderer, TextElement, TypeScale, Variant,
};

fn render_page() -> String {
    PageRenderer::new(TypeScale::default())
        .unwrap()
        .render(default_portfolio(), ColorScheme::Light)
        .unwrap()
}

#[test]
fn heading_three_renders_the_name_with_its_base_style() {
    let scale = TypeScale::default();
    let html = TextElement::new(Variant::H3).text("Naqib Hishamuddin.").render(&scale);
    assert_eq!(
        html,
        "<h3 class=\"scroll-m-20 text-2xl font-semibold tracking-tight\">Naqib Hishamuddin.</h3>"
    );
}

#[test]
fn muted_override_keeps_base_and_wins_the_color() {
    let scale = TypeScale::default();
    let html = TextElement::new(Variant::Muted).text("test").class("text-gray-300").render(&scale);
    assert_eq!(html, "<p class=\"text-sm text-gray-300\">test</p>");
}

#[test]
fn page_contains_every_section() {
    let html = render_page();
    let portfolio = default_portfolio();

    assert!(html.contains("Naqib Hishamuddin."));
    assert!(html.contains(&portfolio.experience.heading));
    assert!(html.contains(&portfolio.projects.heading));
    assert!(html.contains(&portfolio.tech_stack.heading));
    assert!(html.contains(&portfolio.education.heading));

    for entry in &portfolio.experience.entries {
        assert!(html.contains(&entry.company), "missing company {}", entry.company);
    }
    for entry in &portfolio.education.entries {
        assert!(html.contains(&entry.institution), "missing institution {}", entry.institution);
    }
}

#[test]
fn page_renders_both_experience_blurbs() {
    let html = render_page();
    let portfolio = default_portfolio();
    assert!(html.contains(&portfolio.experience.blurb_mobile));
    assert!(html.contains(&portfolio.experience.blurb_desktop));
}

#[test]
fn project_cards_split_spans_three_to_two() {
    let html = render_page();
    // Three narrow cards, then two wide ones, plus no other users of the
    // wide span in the grid.
    assert_eq!(html.matches("md:col-span-6 block").count(), 2);
    assert_eq!(html.matches("md:col-span-4 block").count(), 3);
}

#[test]
fn contact_glyphs_render_inline() {
    let html = render_page();
    for contact in &default_portfolio().contacts {
        assert!(
            html.contains(&format!("aria-label=\"{}\"", contact.label)),
            "missing contact {}",
            contact.label
        );
    }
    // Glyphs are inline SVG; nothing references icon image assets.
    assert!(html.contains(Icon::Linkedin.render("h-12 w-12").as_str()));
    assert!(!html.contains(".webp\" alt=\"LinkedIn"));
}

#[test]
fn rendering_twice_is_byte_identical() {
    assert_eq!(render_page(), render_page());
}

#[test]
fn build_writes_a_complete_page_to_disk() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("dist");

    let renderer = PageRenderer::new(TypeScale::default()).unwrap();
    let path = renderer.write(default_portfolio(), ColorScheme::Dark, &out).unwrap();

    let html = std::fs::read_to_string(&path).unwrap();
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("class=\"dark\""));
    assert!(html.trim_end().ends_with("</html>"));
}

#[test]
fn template_directory_shadows_one_card_only() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir(dir.path().join("card")).unwrap();
    std::fs::write(dir.path().join("card/tech-stack.html"), "<!-- stack elided -->").unwrap();

    let renderer = PageRenderer::with_template_dir(TypeScale::default(), dir.path()).unwrap();
    let html = renderer.render(default_portfolio(), ColorScheme::Light).unwrap();

    assert!(html.contains("<!-- stack elided -->"));
    assert!(!html.contains("React Testing Library"));
    // Everything else is untouched.
    assert!(html.contains("Naqib Hishamuddin."));
}
