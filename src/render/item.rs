use crate::domain::model::{ExperienceEntry, ProjectEntry, SkillEntry};
use crate::render::animation::{ItemFrames, RevealSpec, RevealStyle};
use crate::render::html::bullet_list;
use maud::{html, Markup};

/// An entry that can be rendered as the body of an animated list item.
pub trait ListEntry {
    /// Classes for the wrapper element.
    fn item_class(&self) -> &'static str;
    fn render_body(&self) -> Markup;
}

impl ListEntry for SkillEntry {
    fn item_class(&self) -> &'static str {
        "skill"
    }

    fn render_body(&self) -> Markup {
        html! { (self.label()) }
    }
}

impl ListEntry for ExperienceEntry {
    fn item_class(&self) -> &'static str {
        "card"
    }

    fn render_body(&self) -> Markup {
        html! {
            h3 {
                (self.company)
                @if !self.duration.is_empty() {
                    " "
                    span class="muted" { "(" (self.duration) ")" }
                }
            }
            @if !self.role.is_empty() {
                p class="role" { (self.role) }
            }
            (bullet_list("points", &self.points))
        }
    }
}

impl ListEntry for ProjectEntry {
    fn item_class(&self) -> &'static str {
        "card"
    }

    fn render_body(&self) -> Markup {
        html! {
            h3 { (self.title) }
            @if !self.role.is_empty() {
                p class="role" { (self.role) }
            }
            (bullet_list("points", &self.points))
        }
    }
}

/// Wrapper carrying the entrance animation. Starts in the model's initial
/// state; the runtime flips `data-state` once.
pub(crate) fn reveal_block(
    class: &str,
    spec: &RevealSpec,
    index: usize,
    item: Option<usize>,
    body: Markup,
) -> Markup {
    let frames = ItemFrames::from_model(spec);
    let class = if spec.is_interactive() {
        format!("reveal {} interactive", class)
    } else {
        format!("reveal {}", class)
    };
    let style = RevealStyle { spec, index }.to_string();

    html! {
        div class=(class)
            data-item=[item]
            data-reveal=(spec.trigger.as_attr())
            data-state=(frames.initial.as_attr())
            style=(style)
            tabindex=[spec.is_interactive().then_some("0")] {
            (body)
        }
    }
}

/// One entry wrapped in its entrance animation.
///
/// The stagger delay is baked into the inline style so the cascade needs no
/// per-item scripting.
pub struct AnimatedListItem<'a, E: ListEntry> {
    pub index: usize,
    pub spec: &'a RevealSpec,
    pub entry: &'a E,
}

impl<'a, E: ListEntry> AnimatedListItem<'a, E> {
    pub fn new(index: usize, spec: &'a RevealSpec, entry: &'a E) -> Self {
        Self { index, spec, entry }
    }

    pub fn render(&self) -> Markup {
        reveal_block(
            self.entry.item_class(),
            self.spec,
            self.index,
            Some(self.index),
            self.entry.render_body(),
        )
    }
}
