use crate::domain::model::{ContentData, ExperienceEntry, Links, ProjectEntry, Profile, SkillEntry};

const SKILLS: &[&str] = &[
    "HTML5",
    "CSS3",
    "JavaScript",
    "TypeScript",
    "React.js",
    "Redux",
    "Tailwind CSS",
    "Framer Motion",
    "REST APIs",
    "Git",
    "Jest",
    "Figma",
];

/// Leading word of every placeholder experience and project.
pub const SAMPLE_PREFIX: &str = "Sample";

fn points(items: &[&str]) -> Vec<String> {
    items.iter().map(|p| p.to_string()).collect()
}

/// Content compiled into the binary, used when no content file is given.
///
/// Profile, links and skills are the real page's. Experience and project
/// entries are placeholders meant to be replaced through a content file.
pub fn default_content() -> ContentData {
    ContentData {
        profile: Profile {
            name: "Velugoti Manoja".to_string(),
            headline: "Frontend Developer".to_string(),
            greeting: "Hi, I'm Manoja".to_string(),
            about: vec![
                "A front-end developer with **4 years** of experience building fast, responsive, and scalable web apps using **React.js** and **Tailwind CSS**. Skilled in crafting clean UIs, managing complex states with **Redux**, and delivering smooth, user-first experiences.".to_string(),
                "I focus on writing clean code, staying updated with modern web trends, and turning ideas into polished, performant products.".to_string(),
            ],
            image: Some("profile.jpeg".to_string()),
            image_alt: "Manoja".to_string(),
        },
        links: Links {
            email: "mailto:velugotivinay326@gmail.com".to_string(),
            profile_url: "https://www.linkedin.com/in/velugotivinay/".to_string(),
            profile_label: "LinkedIn".to_string(),
            resume: "/vinay_resume.pdf".to_string(),
        },
        skills: SKILLS.iter().map(|s| SkillEntry::from(*s)).collect(),
        experiences: vec![
            ExperienceEntry {
                company: "Sample Company A".to_string(),
                duration: "2022 - Present".to_string(),
                role: "Frontend Developer".to_string(),
                points: points(&[
                    "Replace with a highlight from this role",
                    "Describe the stack and the impact",
                ]),
            },
            ExperienceEntry {
                company: "Sample Company B".to_string(),
                duration: "2020 - 2022".to_string(),
                role: "Junior Frontend Developer".to_string(),
                points: points(&["Replace with a highlight from this role"]),
            },
        ],
        projects: vec![
            ProjectEntry {
                title: "Sample Project One".to_string(),
                role: "Frontend Developer".to_string(),
                points: points(&["Replace with what the project does", "and what you built"]),
            },
            ProjectEntry {
                title: "Sample Project Two".to_string(),
                role: "Frontend Developer".to_string(),
                points: points(&["Replace with what the project does"]),
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_skills_are_non_empty() {
        let content = default_content();
        assert!(!content.skills.is_empty());
        assert!(content.skills.iter().all(|s| !s.label().trim().is_empty()));
    }

    #[test]
    fn test_placeholder_entries_are_labelled() {
        let content = default_content();
        assert!(content.experiences.iter().all(|e| e.company.starts_with(SAMPLE_PREFIX)));
        assert!(content.projects.iter().all(|p| p.title.starts_with(SAMPLE_PREFIX)));
    }

    #[test]
    fn test_default_links_use_expected_schemes() {
        let links = default_content().links;
        assert!(links.email.starts_with("mailto:"));
        assert!(links.profile_url.starts_with("https://"));
        assert!(links.resume.starts_with('/'));
    }
}
