use serde::{Deserialize, Serialize};

/// A single skill tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SkillEntry(pub String);

impl SkillEntry {
    pub fn label(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SkillEntry {
    fn from(label: &str) -> Self {
        Self(label.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub role: String,
    /// Display order.
    #[serde(default)]
    pub points: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectEntry {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub points: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    /// Small line above the greeting, e.g. the job title.
    pub headline: String,
    pub greeting: String,
    /// Paragraphs; `**text**` runs render as `<strong>`.
    #[serde(default)]
    pub about: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default)]
    pub image_alt: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Links {
    /// `mailto:` link.
    pub email: String,
    /// External profile, opened in a new tab.
    pub profile_url: String,
    #[serde(default = "default_profile_label")]
    pub profile_label: String,
    /// Same-origin document offered as a download.
    pub resume: String,
}

fn default_profile_label() -> String {
    "LinkedIn".to_string()
}

/// Everything the page renders. Loaded once, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentData {
    pub profile: Profile,
    pub links: Links,
    #[serde(default)]
    pub skills: Vec<SkillEntry>,
    #[serde(default)]
    pub experiences: Vec<ExperienceEntry>,
    #[serde(default)]
    pub projects: Vec<ProjectEntry>,
}

/// Page output of the render stage.
#[derive(Debug, Clone)]
pub struct RenderedSite {
    pub files: Vec<SiteFile>,
}

#[derive(Debug, Clone)]
pub struct SiteFile {
    /// Path relative to the output root.
    pub path: String,
    pub bytes: Vec<u8>,
}

impl RenderedSite {
    pub fn file(&self, path: &str) -> Option<&SiteFile> {
        self.files.iter().find(|f| f.path == path)
    }
}

/// Content plus the per-section animation tweaks that came with it.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteContent {
    pub content: ContentData,
    pub animation: crate::render::animation::AnimationOverrides,
}
