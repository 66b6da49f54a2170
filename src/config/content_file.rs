use crate::config::DumpFormat;
use crate::domain::content::default_content;
use crate::domain::model::{
    ContentData, ExperienceEntry, Links, ProjectEntry, Profile, SiteContent, SkillEntry,
};
use crate::domain::ports::ContentSource;
use crate::render::animation::AnimationOverrides;
use crate::utils::error::{Result, SiteError};
use crate::utils::validation::{
    validate_link_url, validate_non_empty_string, validate_range, validate_same_origin_path,
    Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

const MAX_STAGGER_MS: u32 = 2_000;
const MAX_DURATION_MS: u32 = 5_000;

/// On-disk shape of a content file.
///
/// ```toml
/// skills = ["React", "Redux"]
///
/// [profile]
/// name = "Ada"
/// headline = "Frontend Developer"
/// greeting = "Hi, I'm Ada"
/// about = ["Building **fast** web apps."]
///
/// [links]
/// email = "mailto:ada@example.com"
/// profile_url = "https://example.com/in/ada"
/// resume = "/resume.pdf"
///
/// [[experiences]]
/// company = "Acme"
/// duration = "2021 - Present"
/// role = "Engineer"
/// points = ["Shipped things"]
///
/// [animation.skills]
/// stagger_ms = 80
/// trigger = "mount"
/// ```
// 純值欄位放在表格之前，序列化時才會是合法的 TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentFile {
    #[serde(default)]
    pub skills: Vec<SkillEntry>,
    pub profile: Profile,
    pub links: Links,
    #[serde(default)]
    pub experiences: Vec<ExperienceEntry>,
    #[serde(default)]
    pub projects: Vec<ProjectEntry>,
    #[serde(default, skip_serializing_if = "AnimationOverrides::is_empty")]
    pub animation: AnimationOverrides,
}

impl ContentFile {
    /// 從 TOML 檔案載入內容
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(SiteError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// `${VAR}` is expanded inside string values after parsing, so a value
    /// may hold quotes or newlines without breaking the file.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let parse_error = |e: toml::de::Error| SiteError::ContentParseError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        };

        let mut value = toml::Value::Table(toml::from_str(content).map_err(parse_error)?);
        substitute_in_value(&mut value);
        value.try_into().map_err(parse_error)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn render_as(&self, format: DumpFormat) -> Result<String> {
        match format {
            DumpFormat::Toml => self.to_toml_string(),
            DumpFormat::Json => self.to_json_string(),
        }
    }

    pub fn into_site_content(self) -> SiteContent {
        SiteContent {
            content: ContentData {
                profile: self.profile,
                links: self.links,
                skills: self.skills,
                experiences: self.experiences,
                projects: self.projects,
            },
            animation: self.animation,
        }
    }
}

impl From<SiteContent> for ContentFile {
    fn from(site: SiteContent) -> Self {
        let SiteContent { content, animation } = site;
        Self {
            skills: content.skills,
            profile: content.profile,
            links: content.links,
            experiences: content.experiences,
            projects: content.projects,
            animation,
        }
    }
}

/// 替換環境變數 (例如 ${EMAIL})；未設定的變數保留原樣
fn substitute_env_vars(content: &str) -> String {
    static ENV_VAR: OnceLock<Regex> = OnceLock::new();
    let re = ENV_VAR.get_or_init(|| {
        Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}").expect("env var pattern is valid")
    });

    re.replace_all(content, |caps: &regex::Captures| {
        let var_name = &caps[1];
        std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
    })
    .into_owned()
}

fn substitute_in_value(value: &mut toml::Value) {
    match value {
        toml::Value::String(text) => *text = substitute_env_vars(text),
        toml::Value::Array(items) => items.iter_mut().for_each(substitute_in_value),
        toml::Value::Table(table) => table.iter_mut().for_each(|(_, v)| substitute_in_value(v)),
        _ => {}
    }
}

/// Links and animation bounds are checked; entries are rendered as given.
impl Validate for ContentFile {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("profile.name", &self.profile.name)?;
        validate_link_url("links.email", &self.links.email, &["mailto"])?;
        validate_link_url("links.profile_url", &self.links.profile_url, &["http", "https"])?;
        validate_same_origin_path("links.resume", &self.links.resume)?;
        if let Some(image) = &self.profile.image {
            validate_same_origin_path("profile.image", image)?;
        }

        for (name, over) in [
            ("skills", &self.animation.skills),
            ("experience", &self.animation.experience),
            ("projects", &self.animation.projects),
        ] {
            if let Some(ms) = over.stagger_ms {
                validate_range(&format!("animation.{}.stagger_ms", name), ms, 0, MAX_STAGGER_MS)?;
            }
            if let Some(ms) = over.duration_ms {
                validate_range(&format!("animation.{}.duration_ms", name), ms, 0, MAX_DURATION_MS)?;
            }
        }
        Ok(())
    }
}

/// Content compiled into the binary.
#[derive(Debug, Clone, Default)]
pub struct BuiltinContent;

impl ContentSource for BuiltinContent {
    fn load(&self) -> Result<SiteContent> {
        Ok(SiteContent {
            content: default_content(),
            animation: AnimationOverrides::default(),
        })
    }
}

/// Content read from a TOML file on every `load`.
#[derive(Debug, Clone)]
pub struct FileContent {
    path: PathBuf,
}

impl FileContent {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ContentSource for FileContent {
    fn load(&self) -> Result<SiteContent> {
        tracing::debug!("Loading content from {}", self.path.display());
        let file = ContentFile::from_file(&self.path)?;
        file.validate()?;
        Ok(file.into_site_content())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::animation::RevealTrigger;

    const MINIMAL: &str = r#"
skills = ["React", "Redux", "Tailwind"]

[profile]
name = "Ada"
headline = "Frontend Developer"
greeting = "Hi, I'm Ada"

[links]
email = "mailto:ada@example.com"
profile_url = "https://example.com/in/ada"
resume = "/resume.pdf"

[[experiences]]
company = "Acme"
role = "Engineer"

[[projects]]
title = "Site"
points = ["one", "two"]

[animation.skills]
stagger_ms = 80
trigger = "mount"
"#;

    #[test]
    fn test_parse_minimal_file() {
        let file = ContentFile::from_toml_str(MINIMAL).unwrap();
        assert!(file.validate().is_ok());
        assert_eq!(file.skills.len(), 3);
        assert_eq!(file.skills[1].label(), "Redux");
        assert_eq!(file.links.profile_label, "LinkedIn");
        assert!(file.experiences[0].points.is_empty());
        assert_eq!(file.experiences[0].duration, "");
        assert_eq!(file.projects[0].points, vec!["one", "two"]);
        assert_eq!(file.animation.skills.stagger_ms, Some(80));
        assert_eq!(file.animation.skills.trigger, Some(RevealTrigger::Mount));
        assert_eq!(file.animation.projects.stagger_ms, None);
    }

    #[test]
    fn test_env_substitution() {
        std::env::set_var("PORTFOLIO_TEST_EMAIL", "mailto:env@example.com");
        let text = MINIMAL.replace("mailto:ada@example.com", "${PORTFOLIO_TEST_EMAIL}");
        let file = ContentFile::from_toml_str(&text).unwrap();
        assert_eq!(file.links.email, "mailto:env@example.com");
    }

    #[test]
    fn test_unset_env_var_is_kept() {
        assert_eq!(
            substitute_env_vars("${PORTFOLIO_TEST_SURELY_UNSET}"),
            "${PORTFOLIO_TEST_SURELY_UNSET}"
        );
    }

    #[test]
    fn test_env_value_with_quotes() {
        std::env::set_var("PORTFOLIO_TEST_NAME", "Ada \"The Countess\" Lovelace");
        std::env::set_var("PORTFOLIO_TEST_SKILL", "C\\C++");
        let text = MINIMAL
            .replace("name = \"Ada\"", "name = \"${PORTFOLIO_TEST_NAME}\"")
            .replace("\"Redux\"", "\"${PORTFOLIO_TEST_SKILL}\"");

        let file = ContentFile::from_toml_str(&text).unwrap();
        assert_eq!(file.profile.name, "Ada \"The Countess\" Lovelace");
        assert_eq!(file.skills[1].label(), "C\\C++");
        assert_eq!(file.animation.skills.stagger_ms, Some(80));
    }

    #[test]
    fn test_invalid_links_rejected() {
        let text = MINIMAL.replace("mailto:ada@example.com", "ada@example.com");
        let file = ContentFile::from_toml_str(&text).unwrap();
        assert!(matches!(
            file.validate(),
            Err(SiteError::InvalidConfigValueError { ref field, .. }) if field == "links.email"
        ));
    }

    #[test]
    fn test_stagger_out_of_range_rejected() {
        let text = MINIMAL.replace("stagger_ms = 80", "stagger_ms = 9000");
        let file = ContentFile::from_toml_str(&text).unwrap();
        assert!(file.validate().is_err());
    }

    #[test]
    fn test_bad_toml_is_content_error() {
        let err = ContentFile::from_toml_str("skills = [").unwrap_err();
        assert!(matches!(err, SiteError::ContentParseError { .. }));
    }

    #[test]
    fn test_builtin_dump_reloads() {
        let site = BuiltinContent.load().unwrap();
        let file = ContentFile::from(site.clone());
        let text = file.to_toml_string().unwrap();
        let reparsed = ContentFile::from_toml_str(&text).unwrap();
        assert_eq!(reparsed.into_site_content(), site);
    }
}
