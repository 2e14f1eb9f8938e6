use std::collections::HashSet;

use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use thiserror::Error;

const CONTENT_FILE: &str = "portfolio.json";

/// Tab group holding one tab per skill category.
pub const SKILLS_TAB_GROUP: &str = "skills";
/// Tab group inside the project detail dialog.
pub const PROJECT_TAB_GROUP: &str = "project-detail";
pub const PROJECT_TABS: [(&str, &str); 4] = [
    ("overview", "Overview"),
    ("technical", "Technical"),
    ("achievements", "Results"),
    ("challenges", "Challenges"),
];

#[derive(Embed)]
#[folder = "content"]
pub struct Assets;

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("Content file {0} not found")]
    Missing(&'static str),
    #[error("Couldn't parse content: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Skill target for {metric} is {target}, must be at most 100")]
    InvalidTarget { metric: String, target: u8 },
    #[error("Duplicate {kind} key: {key}")]
    DuplicateKey { kind: &'static str, key: String },
    #[error("No {0} declared")]
    Empty(&'static str),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Content {
    pub profile: Profile,
    pub hero: Hero,
    pub about: About,
    pub skills: Skills,
    pub experience: Vec<Experience>,
    pub projects: Vec<Project>,
    pub education: Education,
    pub contact: ContactSection,
    pub footer: Footer,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub title: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub bio: String,
    pub linkedin: String,
    pub github: String,
    pub credly: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hero {
    pub headline: String,
    pub headline_accent: String,
    pub summary: String,
    pub specialties: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct About {
    pub objective: Vec<String>,
    pub highlights: Vec<Blurb>,
    pub competencies: Vec<Blurb>,
}

/// Title plus one-line description, used by several sections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Blurb {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skills {
    pub categories: Vec<SkillCategory>,
    pub tools: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub key: String,
    pub title: String,
    pub tab_label: String,
    pub skills: Vec<Skill>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    /// Key of the progress bar driven by this skill.
    pub metric: String,
    pub name: String,
    pub target: u8,
    pub tools: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    pub id: u32,
    pub role: String,
    pub company: String,
    pub status: String,
    pub kind: String,
    pub description: String,
    pub project_roles: Vec<ProjectRole>,
}

impl Experience {
    /// Accordion id for this entry.
    pub fn expand_id(&self) -> String {
        format!("exp-{}", self.id)
    }

    pub fn is_current(&self) -> bool {
        self.status == "Current Position"
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectRole {
    pub project: String,
    pub role: String,
    pub responsibilities: Vec<String>,
    pub technologies: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: u32,
    pub title: String,
    pub category: String,
    pub client: String,
    pub duration: String,
    pub status: String,
    pub overview: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub achievements: Vec<String>,
    pub responsibilities: Vec<String>,
    pub challenges: Vec<String>,
    pub impact: String,
    pub metrics: Vec<ProjectMetric>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectMetric {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Education {
    pub degree: String,
    pub university: String,
    pub location: String,
    pub highlights: Vec<String>,
    pub certification: Certification,
    pub learning: Vec<LearningTrack>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Certification {
    pub title: String,
    pub short_title: String,
    pub issuer: String,
    pub status: String,
    pub url: String,
    pub description: String,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearningTrack {
    pub category: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactSection {
    pub reasons: Vec<Blurb>,
    pub availability: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Footer {
    pub blurb: String,
    pub links: Vec<FooterLink>,
    pub services: Vec<String>,
    pub technologies: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FooterLink {
    pub name: String,
    pub href: String,
}

/// A set of mutually exclusive tabs. The first key is active initially.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabGroup {
    pub key: String,
    pub tabs: Vec<String>,
}

impl Content {
    /// Loads the embedded portfolio document and validates it.
    pub fn load() -> Result<Self, ContentError> {
        let file = Assets::get(CONTENT_FILE).ok_or(ContentError::Missing(CONTENT_FILE))?;
        let content = Self::from_json(&file.data)?;
        log::debug!(
            "loaded content: {} experiences, {} projects",
            content.experience.len(),
            content.projects.len()
        );
        Ok(content)
    }

    pub fn from_json(data: &[u8]) -> Result<Self, ContentError> {
        let content: Self = serde_json::from_slice(data)?;
        content.validate()?;
        Ok(content)
    }

    pub fn validate(&self) -> Result<(), ContentError> {
        if self.skills.categories.is_empty() {
            return Err(ContentError::Empty("skill categories"));
        }

        let mut categories = HashSet::new();
        let mut metrics = HashSet::new();
        for category in &self.skills.categories {
            if category.key.is_empty() {
                return Err(ContentError::Empty("skill category key"));
            }
            if !categories.insert(category.key.as_str()) {
                return Err(ContentError::DuplicateKey {
                    kind: "skill category",
                    key: category.key.clone(),
                });
            }
            for skill in &category.skills {
                if skill.target > 100 {
                    return Err(ContentError::InvalidTarget {
                        metric: skill.metric.clone(),
                        target: skill.target,
                    });
                }
                if !metrics.insert(skill.metric.as_str()) {
                    return Err(ContentError::DuplicateKey {
                        kind: "metric",
                        key: skill.metric.clone(),
                    });
                }
            }
        }

        let mut experience = HashSet::new();
        for exp in &self.experience {
            if !experience.insert(exp.id) {
                return Err(ContentError::DuplicateKey {
                    kind: "experience",
                    key: exp.id.to_string(),
                });
            }
        }

        let mut projects = HashSet::new();
        for project in &self.projects {
            if !projects.insert(project.id) {
                return Err(ContentError::DuplicateKey {
                    kind: "project",
                    key: project.id.to_string(),
                });
            }
        }

        Ok(())
    }

    pub fn tab_groups(&self) -> Vec<TabGroup> {
        vec![
            TabGroup {
                key: SKILLS_TAB_GROUP.to_string(),
                tabs: self
                    .skills
                    .categories
                    .iter()
                    .map(|c| c.key.clone())
                    .collect(),
            },
            TabGroup {
                key: PROJECT_TAB_GROUP.to_string(),
                tabs: PROJECT_TABS.iter().map(|(k, _)| k.to_string()).collect(),
            },
        ]
    }

    pub fn expandable_ids(&self) -> Vec<String> {
        self.experience.iter().map(Experience::expand_id).collect()
    }

    pub fn skills(&self) -> impl Iterator<Item = &Skill> {
        self.skills.categories.iter().flat_map(|c| c.skills.iter())
    }

    pub fn project(&self, id: u32) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn sample_content() -> Content {
        Content::load().expect("embedded content should load")
    }

    #[test]
    fn test_embedded_content_loads() {
        let content = sample_content();
        assert_eq!(content.profile.name, "Nikhil Goud Bandini");
        assert_eq!(content.skills.categories.len(), 4);
        assert_eq!(content.experience.len(), 2);
        assert_eq!(content.projects.len(), 2);
        assert!(content.skills().all(|s| s.target <= 100));
    }

    #[test]
    fn test_tab_groups() {
        let content = sample_content();
        let groups = content.tab_groups();
        assert_eq!(groups.len(), 2);

        let skills = &groups[0];
        assert_eq!(skills.key, SKILLS_TAB_GROUP);
        assert_eq!(skills.tabs, vec!["cloud", "devops", "monitoring", "systems"]);

        let detail = &groups[1];
        assert_eq!(detail.key, PROJECT_TAB_GROUP);
        assert_eq!(detail.tabs[0], "overview");
        assert_eq!(detail.tabs.len(), 4);
    }

    #[test]
    fn test_expandable_ids() {
        let content = sample_content();
        assert_eq!(content.expandable_ids(), vec!["exp-1", "exp-2"]);
        assert!(content.experience[0].is_current());
        assert!(!content.experience[1].is_current());
    }

    #[test]
    fn test_rejects_target_over_100() {
        let mut content = sample_content();
        content.skills.categories[0].skills[0].target = 101;
        let err = content.validate().unwrap_err();
        assert!(matches!(err, ContentError::InvalidTarget { target: 101, .. }));
    }

    #[test]
    fn test_rejects_duplicate_metric() {
        let mut content = sample_content();
        let dup = content.skills.categories[0].skills[0].clone();
        content.skills.categories[1].skills.push(dup);
        let err = content.validate().unwrap_err();
        assert!(matches!(err, ContentError::DuplicateKey { kind: "metric", .. }));
    }

    #[test]
    fn test_rejects_duplicate_experience() {
        let mut content = sample_content();
        content.experience[1].id = content.experience[0].id;
        let err = content.validate().unwrap_err();
        assert!(matches!(err, ContentError::DuplicateKey { kind: "experience", .. }));
    }

    #[test]
    fn test_rejects_empty_categories() {
        let mut content = sample_content();
        content.skills.categories.clear();
        assert!(matches!(content.validate(), Err(ContentError::Empty(_))));
    }

    #[test]
    fn test_parse_error() {
        let err = Content::from_json(b"{ not json").unwrap_err();
        assert!(matches!(err, ContentError::Parse(_)));
        assert!(err.to_string().starts_with("Couldn't parse content"));
    }
}
