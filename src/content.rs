//! Page content.
//!
//! Everything the page shows (hero text, typing phrases, sections, skills,
//! stats, projects and contact methods) is described by `Content`. It can
//! be loaded from a YAML document; the defaults are the owner's portfolio.

use crate::config::ConfigError;
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

/// A page section with its anchor identifier.
///
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionSpec {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub lines: Vec<String>,
}

/// A clickable skill category pointing at the group it reveals.
///
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillCategorySpec {
    pub name: String,
    pub group: String,
}

/// A group of skills shown when its category is selected.
///
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillGroupSpec {
    pub id: String,
    pub items: Vec<String>,
}

/// A statistic counted up when it scrolls into view.
///
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatSpec {
    pub label: String,
    pub target: u64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectSpec {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub tech: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMethodSpec {
    pub label: String,
    pub value: String,
}

/// Defines the content of the whole page.
///
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Content {
    pub name: String,
    pub title: String,
    pub phrases: Vec<String>,
    pub sections: Vec<SectionSpec>,
    pub skill_categories: Vec<SkillCategorySpec>,
    pub skill_groups: Vec<SkillGroupSpec>,
    pub stats: Vec<StatSpec>,
    pub projects: Vec<ProjectSpec>,
    pub contact_methods: Vec<ContactMethodSpec>,
}

impl Content {
    /// Load content from a YAML file. Keys missing from the file keep their
    /// default values.
    ///
    pub fn load(path: &Path) -> Result<Content, AppError> {
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::LoadFailed {
            path: path.to_path_buf(),
            message: format!("IO error: {}", e),
        })?;
        let content = Content::from_yaml(&contents)?;
        Ok(content)
    }

    pub fn from_yaml(contents: &str) -> Result<Content, ConfigError> {
        serde_yaml::from_str(contents).map_err(|e| ConfigError::DeserializationFailed(e.to_string()))
    }

    /// Return the section with the given identifier.
    ///
    pub fn section(&self, id: &str) -> Option<&SectionSpec> {
        self.sections.iter().find(|s| s.id == id)
    }
}

fn section(id: &str, title: &str, lines: &[&str]) -> SectionSpec {
    SectionSpec {
        id: id.to_string(),
        title: title.to_string(),
        lines: lines.iter().map(|l| l.to_string()).collect(),
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|i| i.to_string()).collect()
}

impl Default for Content {
    fn default() -> Self {
        Content {
            name: "Aya Mohamed El-Sharbasy".to_string(),
            title: "Full Stack .NET Developer".to_string(),
            phrases: strings(&[
                "Full Stack .NET Developer",
                "Problem Solver",
                "Code Enthusiast",
                "Continuous Learner",
            ]),
            sections: vec![
                section("home", "Home", &[]),
                section(
                    "about",
                    "About Me",
                    &[
                        "I build reliable web applications end to end, from SQL schemas",
                        "and ASP.NET Core APIs to responsive front ends.",
                        "",
                        "Clean architecture, tested code and clear communication.",
                    ],
                ),
                section("skills", "Skills", &[]),
                section("projects", "Projects", &[]),
                section(
                    "experience",
                    "Experience",
                    &[
                        "Full Stack .NET Developer Trainee",
                        "  Built and shipped ASP.NET Core MVC and Web API projects.",
                        "",
                        "Freelance Web Developer",
                        "  Delivered responsive portfolio and business sites.",
                    ],
                ),
                section(
                    "contact",
                    "Get In Touch",
                    &["Have a project in mind? Send me a message."],
                ),
            ],
            skill_categories: vec![
                SkillCategorySpec {
                    name: "Backend".to_string(),
                    group: "backend".to_string(),
                },
                SkillCategorySpec {
                    name: "Frontend".to_string(),
                    group: "frontend".to_string(),
                },
                SkillCategorySpec {
                    name: "Tools".to_string(),
                    group: "tools".to_string(),
                },
            ],
            skill_groups: vec![
                SkillGroupSpec {
                    id: "backend".to_string(),
                    items: strings(&["C#", "ASP.NET Core", "Entity Framework", "SQL Server"]),
                },
                SkillGroupSpec {
                    id: "frontend".to_string(),
                    items: strings(&["HTML5", "CSS3", "JavaScript", "Angular"]),
                },
                SkillGroupSpec {
                    id: "tools".to_string(),
                    items: strings(&["Git", "Docker", "Azure DevOps", "Postman"]),
                },
            ],
            stats: vec![
                StatSpec {
                    label: "Projects Completed".to_string(),
                    target: 20,
                },
                StatSpec {
                    label: "Technologies".to_string(),
                    target: 15,
                },
                StatSpec {
                    label: "Cups of Coffee".to_string(),
                    target: 500,
                },
            ],
            projects: vec![
                ProjectSpec {
                    name: "E-Commerce Platform".to_string(),
                    description: "Online store with cart, orders and an admin dashboard."
                        .to_string(),
                    tech: strings(&["ASP.NET Core", "EF Core", "SQL Server"]),
                },
                ProjectSpec {
                    name: "Task Manager API".to_string(),
                    description: "REST API with JWT authentication and role-based access."
                        .to_string(),
                    tech: strings(&["Web API", "JWT", "Swagger"]),
                },
                ProjectSpec {
                    name: "Portfolio".to_string(),
                    description: "This page, with themes, animations and a contact form."
                        .to_string(),
                    tech: strings(&["HTML", "CSS", "JavaScript"]),
                },
            ],
            contact_methods: vec![
                ContactMethodSpec {
                    label: "Email".to_string(),
                    value: "ayahady052@gmail.com".to_string(),
                },
                ContactMethodSpec {
                    label: "LinkedIn".to_string(),
                    value: "https://www.linkedin.com/in/aya-hady/".to_string(),
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_content() {
        let content = Content::default();
        assert_eq!(content.phrases.len(), 4);
        assert_eq!(content.phrases[0], "Full Stack .NET Developer");
        assert!(content.section("contact").is_some());
        assert!(content.section("missing").is_none());
        for category in &content.skill_categories {
            assert!(content.skill_groups.iter().any(|g| g.id == category.group));
        }
    }

    #[test]
    fn test_from_yaml_partial() {
        let content = Content::from_yaml("name: Jane\nphrases: [Hi, Yo]\n").unwrap();
        assert_eq!(content.name, "Jane");
        assert_eq!(content.phrases, vec!["Hi".to_string(), "Yo".to_string()]);
        assert_eq!(content.sections, Content::default().sections);
    }

    #[test]
    fn test_from_yaml_invalid() {
        assert!(matches!(
            Content::from_yaml("sections: 12"),
            Err(ConfigError::DeserializationFailed(_))
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = Content::load(&dir.path().join("content.yml"));
        assert!(matches!(result, Err(AppError::Config(ConfigError::LoadFailed { .. }))));
    }
}
