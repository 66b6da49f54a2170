use crate::render::animation::RevealSpec;
use crate::render::item::{AnimatedListItem, ListEntry};
use maud::{html, Markup};

/// Maps one ordered collection to one animated item per entry.
pub struct SectionRenderer<'a> {
    pub id: &'a str,
    pub title: &'a str,
    /// Layout class of the item container.
    pub layout: &'a str,
    pub spec: &'a RevealSpec,
}

impl<'a> SectionRenderer<'a> {
    /// Items are emitted in slice order, index doubling as stagger index.
    pub fn render_items<E: ListEntry>(&self, entries: &[E]) -> Markup {
        html! {
            div class=(self.layout) {
                @for (index, entry) in entries.iter().enumerate() {
                    (AnimatedListItem::new(index, self.spec, entry).render())
                }
            }
        }
    }

    pub fn render<E: ListEntry>(&self, entries: &[E]) -> Markup {
        tracing::debug!("Rendering section '{}' with {} items", self.id, entries.len());
        html! {
            section id=(self.id) class="section" {
                h2 class="section-title" { (self.title) }
                (self.render_items(entries))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::SkillEntry;

    fn skills_section(spec: &RevealSpec) -> SectionRenderer<'_> {
        SectionRenderer {
            id: "skills",
            title: "Skills",
            layout: "grid skills-grid",
            spec,
        }
    }

    #[test]
    fn test_items_in_input_order() {
        let spec = RevealSpec::skills();
        let skills: Vec<SkillEntry> = ["React", "Redux", "Tailwind"].into_iter().map(SkillEntry::from).collect();
        let out = skills_section(&spec).render(&skills).into_string();

        assert_eq!(out.matches("data-item=").count(), 3);
        let positions: Vec<usize> = [">React<", ">Redux<", ">Tailwind<"]
            .iter()
            .map(|label| out.find(label).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_duplicates_are_kept() {
        let spec = RevealSpec::skills();
        let skills = vec![SkillEntry::from("Git"), SkillEntry::from("Git")];
        let out = skills_section(&spec).render(&skills).into_string();
        assert_eq!(out.matches(">Git</div>").count(), 2);
    }

    #[test]
    fn test_empty_section_renders_container() {
        let spec = RevealSpec::skills();
        let out = skills_section(&spec).render(&Vec::<SkillEntry>::new()).into_string();

        assert!(out.starts_with("<section id=\"skills\""));
        assert!(out.contains("<div class=\"grid skills-grid\"></div>"));
        assert!(!out.contains("data-item"));
    }
}
