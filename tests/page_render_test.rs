use portfolio_site::domain::content::default_content;
use portfolio_site::domain::model::{ContentData, ExperienceEntry, ProjectEntry, SkillEntry};
use portfolio_site::render::animation::{AnimationState, RevealSpec, RevealTrigger};
use portfolio_site::render::page::{anchor_id, NAV_LABELS};
use portfolio_site::render::{AnimationSettings, PageShell};

fn empty_content() -> ContentData {
    let mut content = default_content();
    content.skills.clear();
    content.experiences.clear();
    content.projects.clear();
    content
}

/// Slice of the page between `<section id="{id}"` and its closing tag.
fn section<'a>(html: &'a str, id: &str) -> &'a str {
    let start = html.find(&format!("<section id=\"{}\"", id)).unwrap();
    let end = start + html[start..].find("</section>").unwrap();
    &html[start..end]
}

#[test]
fn test_each_section_renders_one_item_per_entry() {
    let content = default_content();
    let settings = AnimationSettings::default();
    let html = PageShell::new(&content, &settings).render().html;

    assert_eq!(section(&html, "skills").matches("data-item=").count(), content.skills.len());
    assert_eq!(
        section(&html, "experience").matches("data-item=").count(),
        content.experiences.len()
    );
    assert_eq!(section(&html, "projects").matches("data-item=").count(), content.projects.len());
    assert_eq!(section(&html, "about").matches("data-item=").count(), 0);
}

#[test]
fn test_empty_collections_render_empty_sections() {
    let content = empty_content();
    let settings = AnimationSettings::default();
    let page = PageShell::new(&content, &settings).render();

    assert_eq!(page.counts.skills, 0);
    assert_eq!(page.counts.experience, 0);
    assert_eq!(page.counts.projects, 0);
    for label in NAV_LABELS {
        assert!(page.html.contains(&format!("<section id=\"{}\"", anchor_id(label))));
    }
    assert!(!page.html.contains("data-item="));
}

#[test]
fn test_skill_stagger_follows_index() {
    let mut content = empty_content();
    content.skills = ["React", "Redux", "Tailwind"].into_iter().map(SkillEntry::from).collect();
    let settings = AnimationSettings::default();
    let html = PageShell::new(&content, &settings).render().html;

    let skills = section(&html, "skills");
    let delays: Vec<u64> = skills
        .match_indices("--reveal-delay:")
        .map(|(i, m)| {
            let rest = &skills[i + m.len()..];
            rest[..rest.find("ms").unwrap()].parse::<u64>().unwrap()
        })
        .collect();
    assert_eq!(delays, vec![0, 50, 100]);
}

#[test]
fn test_malformed_entries_render_as_gaps() {
    let mut content = empty_content();
    content.experiences = vec![ExperienceEntry {
        company: "Acme".to_string(),
        duration: String::new(),
        role: String::new(),
        points: vec![],
    }];
    content.projects = vec![
        ProjectEntry {
            title: String::new(),
            role: String::new(),
            points: vec![],
        },
        ProjectEntry {
            title: "Still here".to_string(),
            role: "Author".to_string(),
            points: vec!["works".to_string()],
        },
    ];
    let settings = AnimationSettings::default();
    let page = PageShell::new(&content, &settings).render();

    assert_eq!(page.counts.experience, 1);
    assert_eq!(page.counts.projects, 2);
    let projects = section(&page.html, "projects");
    assert!(projects.contains("<h3>Still here</h3>"));
    assert!(projects.contains("<li>works</li>"));
}

#[test]
fn test_mount_trigger_override() {
    let content = default_content();
    let mut settings = AnimationSettings::default();
    settings.skills.trigger = RevealTrigger::Mount;
    let html = PageShell::new(&content, &settings).render().html;

    let skills = section(&html, "skills");
    assert_eq!(skills.matches("data-reveal=\"mount\"").count(), content.skills.len());
    assert!(!section(&html, "projects").contains("data-reveal=\"mount\""));
}

#[test]
fn test_page_ships_reveal_runtime() {
    let content = default_content();
    let settings = AnimationSettings::default();
    let html = PageShell::new(&content, &settings).render().html;

    assert!(html.contains("IntersectionObserver"));
    assert!(html.contains("observer.unobserve(entry.target)"));
    assert!(html.contains("<noscript><style>"));
    assert!(html.contains("scroll-behavior:smooth"));
}

#[test]
fn test_item_lifecycle() {
    let spec = RevealSpec::skills();
    let mut state = AnimationState::new();

    state.pointer_enter();
    assert!(!state.is_visible());

    assert!(state.reveal());
    assert!(!state.reveal());

    state.pointer_down();
    state.pointer_up();
    state.pointer_leave();
    assert_eq!(state.scale(&spec), 1.0);
    assert!(state.is_visible());
}
