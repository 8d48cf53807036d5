use std::collections::HashSet;
use std::sync::LazyLock;

use chrono::{DateTime, Datelike};
use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const ALL_CATEGORIES: &str = "All";
const PORTFOLIO_FILE: &str = "portfolio.json";
const FALLBACK_YEAR: i32 = 2025;

pub static PORTFOLIO: LazyLock<Portfolio> = LazyLock::new(|| match load_portfolio() {
    Ok(portfolio) => portfolio,
    Err(e) => {
        log::error!("couldn't load portfolio content: {e}");
        Portfolio::default()
    }
});

#[derive(Embed)]
#[folder = "content"]
pub struct Assets;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ContentError {
    #[error("content file {0} not found")]
    Missing(String),
    #[error("couldn't parse content: {0}")]
    Parse(String),
    #[error("skill {skill} has level {level}, expected at most 100")]
    InvalidSkillLevel { skill: String, level: u8 },
    #[error("project id {0} is used more than once")]
    DuplicateProjectId(u32),
    #[error("project {project} has unknown category {category}")]
    UnknownCategory { project: String, category: String },
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Portfolio {
    pub profile: Profile,
    pub social_links: Vec<SocialLink>,
    pub contact_details: Vec<ContactDetail>,
    pub skill_categories: Vec<SkillCategory>,
    pub project_categories: Vec<String>,
    pub projects: Vec<Project>,
    pub experience: Vec<Experience>,
    pub stats: Vec<Stat>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub title: String,
    pub greeting: String,
    pub summary: String,
    pub availability: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SocialLink {
    pub icon: String,
    pub label: String,
    pub url: String,
    /// Also shown under the hero banner.
    #[serde(default)]
    pub in_hero: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactDetail {
    pub icon: String,
    pub title: String,
    pub value: String,
    pub href: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillCategory {
    pub name: String,
    pub icon: String,
    pub skills: Vec<Skill>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub level: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub category: String,
    pub image: Option<String>,
    pub live_url: Option<String>,
    pub repo_url: Option<String>,
    #[serde(default)]
    pub featured: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Experience {
    pub id: u32,
    pub company: String,
    pub position: String,
    pub period: String,
    pub location: String,
    pub description: String,
    pub achievements: Vec<String>,
    pub technologies: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stat {
    pub value: String,
    pub label: String,
}

pub fn load_portfolio() -> Result<Portfolio, ContentError> {
    let file =
        Assets::get(PORTFOLIO_FILE).ok_or_else(|| ContentError::Missing(PORTFOLIO_FILE.to_string()))?;
    parse_portfolio(&file.data)
}

pub fn parse_portfolio(bytes: &[u8]) -> Result<Portfolio, ContentError> {
    let portfolio: Portfolio =
        serde_json::from_slice(bytes).map_err(|e| ContentError::Parse(e.to_string()))?;
    portfolio.validate()?;
    Ok(portfolio)
}

impl Portfolio {
    pub fn validate(&self) -> Result<(), ContentError> {
        let mut skills = self.skill_categories.iter().flat_map(|c| &c.skills);
        if let Some(skill) = skills.find(|s| s.level > 100) {
            return Err(ContentError::InvalidSkillLevel {
                skill: skill.name.clone(),
                level: skill.level,
            });
        }

        let mut ids = HashSet::new();
        for project in &self.projects {
            if !ids.insert(project.id) {
                return Err(ContentError::DuplicateProjectId(project.id));
            }
            if !self.project_categories.contains(&project.category) {
                return Err(ContentError::UnknownCategory {
                    project: project.title.clone(),
                    category: project.category.clone(),
                });
            }
        }
        Ok(())
    }

    /// Filter buttons, in display order.
    pub fn filter_options(&self) -> Vec<&str> {
        std::iter::once(ALL_CATEGORIES)
            .chain(self.project_categories.iter().map(String::as_str))
            .collect()
    }

    pub fn projects_in(&self, category: &str) -> Vec<&Project> {
        filter_projects(&self.projects, category)
    }

    pub fn hero_links(&self) -> impl Iterator<Item = &SocialLink> {
        self.social_links.iter().filter(|l| l.in_hero)
    }
}

/// Projects of one category in their original order; [`ALL_CATEGORIES`] keeps everything.
pub fn filter_projects<'a>(projects: &'a [Project], category: &str) -> Vec<&'a Project> {
    projects
        .iter()
        .filter(|p| category == ALL_CATEGORIES || p.category == category)
        .collect()
}

/// CSS width of a skill bar; empty until the bar is shown.
pub fn skill_bar_width(level: u8, visible: bool) -> String {
    if visible {
        format!("{}%", level.min(100))
    } else {
        "0%".to_string()
    }
}

pub fn skill_bar_delay_ms(category_index: usize, skill_index: usize) -> u32 {
    (category_index * 200 + skill_index * 100) as u32
}

/// Year the site was built, stamped by build.rs.
pub fn copyright_year() -> i32 {
    DateTime::parse_from_rfc3339(env!("BUILD_TIME"))
        .map(|t| t.year())
        .unwrap_or(FALLBACK_YEAR)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(id: u32, category: &str) -> Project {
        Project {
            id,
            title: format!("Project {id}"),
            description: String::new(),
            technologies: vec![],
            category: category.to_string(),
            image: None,
            live_url: None,
            repo_url: None,
            featured: false,
        }
    }

    #[test]
    fn test_embedded_content_loads() {
        let portfolio = load_portfolio().expect("embedded content should be valid");
        assert!(!portfolio.profile.name.is_empty());
        assert_eq!(portfolio.projects.len(), 6);
        assert_eq!(portfolio.skill_categories.len(), 3);
        assert_eq!(portfolio.experience.len(), 3);
        assert_eq!(
            portfolio.filter_options(),
            vec!["All", "Frontend", "Backend", "Full-Stack"]
        );
        assert_eq!(portfolio.hero_links().count(), 3);
    }

    #[test]
    fn test_filter_frontend_keeps_order() {
        let projects = vec![
            project(1, "Full-Stack"),
            project(2, "Frontend"),
            project(3, "Frontend"),
            project(4, "Backend"),
            project(5, "Frontend"),
            project(6, "Full-Stack"),
        ];
        let ids = filter_projects(&projects, "Frontend")
            .iter()
            .map(|p| p.id)
            .collect::<Vec<_>>();
        assert_eq!(ids, vec![2, 3, 5]);

        assert_eq!(filter_projects(&projects, ALL_CATEGORIES).len(), 6);
        assert!(filter_projects(&projects, "Mobile").is_empty());
    }

    #[test]
    fn test_embedded_frontend_projects() {
        let portfolio = load_portfolio().unwrap();
        let titles = portfolio
            .projects_in("Frontend")
            .iter()
            .map(|p| p.title.as_str())
            .collect::<Vec<_>>();
        assert_eq!(
            titles,
            vec!["Task Management App", "Weather Dashboard", "Portfolio Website"]
        );
    }

    #[test]
    fn test_validation_errors() {
        let mut portfolio = Portfolio {
            project_categories: vec!["Frontend".to_string()],
            projects: vec![project(1, "Frontend"), project(1, "Frontend")],
            ..Default::default()
        };
        assert_eq!(
            portfolio.validate(),
            Err(ContentError::DuplicateProjectId(1))
        );

        portfolio.projects = vec![project(1, "Backend")];
        assert!(matches!(
            portfolio.validate(),
            Err(ContentError::UnknownCategory { .. })
        ));

        portfolio.projects.clear();
        portfolio.skill_categories = vec![SkillCategory {
            name: "Frontend".to_string(),
            icon: "layout".to_string(),
            skills: vec![Skill {
                name: "Rust".to_string(),
                level: 120,
            }],
        }];
        assert_eq!(
            portfolio.validate(),
            Err(ContentError::InvalidSkillLevel {
                skill: "Rust".to_string(),
                level: 120
            })
        );
    }

    #[test]
    fn test_parse_error() {
        let err = parse_portfolio(b"{ not json").unwrap_err();
        assert!(matches!(err, ContentError::Parse(_)));
    }

    #[test]
    fn test_skill_bar_width_and_delay() {
        assert_eq!(skill_bar_width(85, false), "0%");
        assert_eq!(skill_bar_width(85, true), "85%");
        assert_eq!(skill_bar_width(250, true), "100%");
        assert_eq!(skill_bar_delay_ms(0, 0), 0);
        assert_eq!(skill_bar_delay_ms(2, 3), 700);
    }

    #[test]
    fn test_copyright_year_from_build_time() {
        assert!(copyright_year() >= FALLBACK_YEAR);
    }
}
