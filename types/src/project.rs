//! Directory entity records.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Ecosystem category a project is listed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    Payment,
    DeFi,
    Gaming,
    Infrastructure,
    Social,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Payment,
        Category::DeFi,
        Category::Gaming,
        Category::Infrastructure,
        Category::Social,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::Payment => "Payment",
            Category::DeFi => "DeFi",
            Category::Gaming => "Gaming",
            Category::Infrastructure => "Infrastructure",
            Category::Social => "Social",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown category `{0}`")]
pub struct ParseCategoryError(pub String);

impl FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseCategoryError(s.to_string()))
    }
}

/// Category selection for the directory: everything, or exactly one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub const ALL_LABEL: &'static str = "All";

    /// The filter chips in display order, `All` first.
    pub fn chips() -> impl Iterator<Item = CategoryFilter> {
        std::iter::once(CategoryFilter::All).chain(Category::ALL.into_iter().map(CategoryFilter::Only))
    }

    pub fn matches(self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(c) => c == category,
        }
    }

    pub fn is_all(self) -> bool {
        self == CategoryFilter::All
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => f.write_str(Self::ALL_LABEL),
            CategoryFilter::Only(c) => c.fmt(f),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case(Self::ALL_LABEL) {
            return Ok(CategoryFilter::All);
        }
        s.parse().map(CategoryFilter::Only)
    }
}

impl TryFrom<String> for CategoryFilter {
    type Error = ParseCategoryError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CategoryFilter> for String {
    fn from(value: CategoryFilter) -> Self {
        value.to_string()
    }
}

impl From<Category> for CategoryFilter {
    fn from(value: Category) -> Self {
        CategoryFilter::Only(value)
    }
}

/// Deployment status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    #[default]
    Mainnet,
    Testnet,
    Incubated,
}

impl ProjectStatus {
    pub fn label(self) -> &'static str {
        match self {
            ProjectStatus::Mainnet => "Mainnet Ready",
            ProjectStatus::Testnet => "Testnet",
            ProjectStatus::Incubated => "Incubated",
        }
    }
}

/// A project listed in the directory. `name` is the unique key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    pub category: Category,
    pub description: String,
    #[serde(default)]
    pub status: ProjectStatus,
    #[serde(default)]
    pub featured: bool,
    /// Overrides the status badge text when set.
    #[serde(default)]
    pub status_label: Option<String>,
    #[serde(default)]
    pub twitter_followers: Option<String>,
    #[serde(default)]
    pub discord_activity: Option<String>,
    #[serde(default)]
    pub ecosystem_fit: Option<String>,
    /// Activity score, 0-100.
    #[serde(default)]
    pub activity: u8,
    #[serde(default)]
    pub sparkline: Vec<f64>,
}

impl Project {
    pub fn new(name: impl Into<String>, category: Category, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            category,
            description: description.into(),
            status: ProjectStatus::default(),
            featured: false,
            status_label: None,
            twitter_followers: None,
            discord_activity: None,
            ecosystem_fit: None,
            activity: 0,
            sparkline: Vec::new(),
        }
    }

    pub fn status(mut self, status: ProjectStatus) -> Self {
        self.status = status;
        self
    }

    pub fn featured(mut self) -> Self {
        self.featured = true;
        self
    }

    pub fn status_text(&self) -> &str {
        self.status_label.as_deref().unwrap_or(self.status.label())
    }

    /// First letter of the name, used as the card avatar.
    pub fn initial(&self) -> char {
        self.name.chars().next().unwrap_or('?')
    }
}

/// The seed directory shown on the landing page.
pub fn builtin_projects() -> Vec<Project> {
    vec![
        Project::new(
            "MorphPay",
            Category::Payment,
            "Next-gen crypto card solutions for seamless everyday spending.",
        )
        .featured(),
        Project::new(
            "Zoo Wallet",
            Category::Gaming,
            "Official consumer engagement & rewards hub powered by Morph.",
        )
        .featured(),
        Project::new(
            "BitStore",
            Category::Payment,
            "Integrated payment gateway bridging crypto and retail commerce.",
        ),
        Project::new(
            "BulbaSwap",
            Category::DeFi,
            "Native liquidity layer optimized for consumer asset swaps.",
        ),
        Project::new(
            "SocialMorph",
            Category::Social,
            "Decentralized identity and social graph for the consumer web.",
        )
        .status(ProjectStatus::Testnet),
        Project::new(
            "MorphBridge",
            Category::Infrastructure,
            "Canonical bridge for fast L1 <-> L2 asset transfers on Morph.",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_parse_is_case_insensitive() {
        assert_eq!("defi".parse::<Category>(), Ok(Category::DeFi));
        assert_eq!(" Gaming ".parse::<Category>(), Ok(Category::Gaming));
        assert_eq!(
            "Lending".parse::<Category>(),
            Err(ParseCategoryError("Lending".to_string()))
        );
    }

    #[test]
    fn test_category_filter_parse() {
        assert_eq!("All".parse::<CategoryFilter>(), Ok(CategoryFilter::All));
        assert_eq!("all".parse::<CategoryFilter>(), Ok(CategoryFilter::All));
        assert_eq!(
            "Social".parse::<CategoryFilter>(),
            Ok(CategoryFilter::Only(Category::Social))
        );
    }

    #[test]
    fn test_category_filter_chips_order() {
        let labels: Vec<String> = CategoryFilter::chips().map(|c| c.to_string()).collect();
        assert_eq!(
            labels,
            ["All", "Payment", "DeFi", "Gaming", "Infrastructure", "Social"]
        );
    }

    #[test]
    fn test_category_filter_serde_uses_labels() {
        let json = serde_json::to_string(&CategoryFilter::Only(Category::DeFi)).unwrap();
        assert_eq!(json, "\"DeFi\"");
        let back: CategoryFilter = serde_json::from_str("\"All\"").unwrap();
        assert_eq!(back, CategoryFilter::All);
        assert!(serde_json::from_str::<CategoryFilter>("\"Nope\"").is_err());
    }

    #[test]
    fn test_builtin_projects_have_unique_names() {
        let projects = builtin_projects();
        let mut names: Vec<&str> = projects.iter().map(|p| p.name.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), projects.len());
    }

    #[test]
    fn test_status_text() {
        let mut project = Project::new("X", Category::Social, "x").status(ProjectStatus::Testnet);
        assert_eq!(project.status_text(), "Testnet");
        project.status_label = Some("Beta".to_string());
        assert_eq!(project.status_text(), "Beta");
        assert_eq!(project.initial(), 'X');
    }

    #[test]
    fn test_project_deserialize_defaults() {
        let json = r#"{"name":"BulbaSwap","category":"DeFi","description":"swap"}"#;
        let project: Project = serde_json::from_str(json).unwrap();
        assert_eq!(project.status, ProjectStatus::Mainnet);
        assert!(!project.featured);
        assert!(project.sparkline.is_empty());
    }
}
