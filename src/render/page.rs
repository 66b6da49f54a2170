use crate::domain::model::{ContentData, Links, Profile};
use crate::render::animation::{AnimationSettings, RevealSpec};
use crate::render::assets::{icons, NOSCRIPT_STYLE, REVEAL_SCRIPT, STYLESHEET};
use crate::render::html::inline_markup;
use crate::render::item::reveal_block;
use crate::render::section::SectionRenderer;
use chrono::{DateTime, Utc};
use maud::{html, Markup, PreEscaped, DOCTYPE};

/// Nav labels in page order. The anchor is the lowercased label.
pub const NAV_LABELS: [&str; 4] = ["About", "Skills", "Experience", "Projects"];

pub fn anchor_id(label: &str) -> String {
    label.to_lowercase()
}

/// Item counts per rendered section.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SectionCounts {
    pub skills: usize,
    pub experience: usize,
    pub projects: usize,
}

#[derive(Debug, Clone)]
pub struct RenderedPage {
    pub html: String,
    pub counts: SectionCounts,
}

/// The whole document: head, sticky header, about block and the three list sections.
pub struct PageShell<'a> {
    content: &'a ContentData,
    animation: &'a AnimationSettings,
    generated_at: Option<DateTime<Utc>>,
}

impl<'a> PageShell<'a> {
    pub fn new(content: &'a ContentData, animation: &'a AnimationSettings) -> Self {
        Self {
            content,
            animation,
            generated_at: None,
        }
    }

    /// Stamp the footer and the `generated` meta tag.
    pub fn generated_at(mut self, at: DateTime<Utc>) -> Self {
        self.generated_at = Some(at);
        self
    }

    pub fn render(&self) -> RenderedPage {
        let content = self.content;
        let skills = SectionRenderer {
            id: "skills",
            title: "Skills",
            layout: "grid skills-grid",
            spec: &self.animation.skills,
        };
        let experience = SectionRenderer {
            id: "experience",
            title: "Experience",
            layout: "stack",
            spec: &self.animation.experience,
        };
        let projects = SectionRenderer {
            id: "projects",
            title: "Projects",
            layout: "grid cards-grid",
            spec: &self.animation.projects,
        };

        let markup = html! {
            (DOCTYPE)
            html lang="en" {
                (self.head())
                body {
                    (self.header())
                    main {
                        (self.about())
                        (skills.render(&content.skills))
                        (experience.render(&content.experiences))
                        (projects.render(&content.projects))
                    }
                    (self.footer())
                    script { (PreEscaped(REVEAL_SCRIPT)) }
                }
            }
        };

        RenderedPage {
            html: markup.into_string(),
            counts: SectionCounts {
                skills: content.skills.len(),
                experience: content.experiences.len(),
                projects: content.projects.len(),
            },
        }
    }

    fn head(&self) -> Markup {
        let profile = &self.content.profile;
        html! {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (profile.name) }
                meta name="description" content=(format!("{} - {}", profile.name, profile.headline));
                @if let Some(at) = self.generated_at {
                    meta name="generated" content=(at.to_rfc3339());
                }
                style { (PreEscaped(STYLESHEET)) }
                noscript { style { (PreEscaped(NOSCRIPT_STYLE)) } }
            }
        }
    }

    fn header(&self) -> Markup {
        html! {
            header class="site-header" {
                h1 class="site-name" { (self.content.profile.name) }
                nav class="site-nav" {
                    @for label in NAV_LABELS {
                        a href=(format!("#{}", anchor_id(label))) { (label) }
                    }
                }
            }
        }
    }

    fn about(&self) -> Markup {
        let profile = &self.content.profile;
        // 文字由左滑入，照片由右滑入
        let text_spec = RevealSpec::slide(-60);
        let image_spec = RevealSpec::slide(60);

        let text = html! {
            p class="headline" { (profile.headline) }
            h2 class="greeting" { (profile.greeting) }
            @for paragraph in &profile.about {
                p class="bio" { (inline_markup(paragraph)) }
            }
            (links(&self.content.links))
        };

        html! {
            section id="about" class="section about" {
                (reveal_block("about-text", &text_spec, 0, None, text))
                @if let Some(image) = &profile.image {
                    (reveal_block(
                        "about-image",
                        &image_spec,
                        0,
                        None,
                        html! { img src=(image) alt=(image_alt(profile)); },
                    ))
                }
            }
        }
    }

    fn footer(&self) -> Markup {
        html! {
            footer class="site-footer" {
                "© " (self.content.profile.name)
                @if let Some(at) = self.generated_at {
                    " · updated " (at.format("%Y-%m-%d").to_string())
                }
            }
        }
    }
}

fn image_alt(profile: &Profile) -> &str {
    if profile.image_alt.is_empty() {
        &profile.name
    } else {
        &profile.image_alt
    }
}

fn links(links: &Links) -> Markup {
    html! {
        div class="links" {
            a class="link-email" href=(links.email) {
                (PreEscaped(icons::MAIL)) span { "Email" }
            }
            a class="link-profile" href=(links.profile_url) target="_blank" rel="noopener noreferrer" {
                (PreEscaped(icons::PROFILE)) span { (links.profile_label) }
            }
            a class="link-resume" href=(links.resume) download {
                (PreEscaped(icons::DOWNLOAD)) span { "Resume" }
            }
        }
    }
}
