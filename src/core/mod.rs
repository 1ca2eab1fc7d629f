//! Core types and data structures for garden.rs
//!
//! This module defines the fundamental types used across the system:
//! - Skill items and their closed enumerations (category, status, visibility)
//! - Portfolio projects and certifications
//! - The item store (single source of truth)
//! - The filter/group engine deriving views from the store
//! - The admin gate and display-mode state machine
//! - The import/export boundary

pub mod gate;
pub mod persistence;
pub mod radar;
pub mod seed;
pub mod store;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error types for core operations
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid category: {0}")]
    InvalidCategory(String),

    #[error("Invalid status: {0}")]
    InvalidStatus(String),

    #[error("Invalid visibility: {0}")]
    InvalidVisibility(String),
}

pub type Result<T> = std::result::Result<T, CoreError>;

/// Classification bucket for grouping skills on the radar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Languages,
    DataEngineering,
    Devops,
    Tools,
    SoftSkills,
    Business,
}

impl Category {
    /// Every category, in display order
    pub const ALL: [Category; 6] = [
        Category::Languages,
        Category::DataEngineering,
        Category::Devops,
        Category::Tools,
        Category::SoftSkills,
        Category::Business,
    ];
}

impl FromStr for Category {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "languages" => Ok(Category::Languages),
            "data-engineering" => Ok(Category::DataEngineering),
            "devops" => Ok(Category::Devops),
            "tools" => Ok(Category::Tools),
            "soft-skills" => Ok(Category::SoftSkills),
            "business" => Ok(Category::Business),
            _ => Err(CoreError::InvalidCategory(s.to_string())),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Languages => write!(f, "languages"),
            Category::DataEngineering => write!(f, "data-engineering"),
            Category::Devops => write!(f, "devops"),
            Category::Tools => write!(f, "tools"),
            Category::SoftSkills => write!(f, "soft-skills"),
            Category::Business => write!(f, "business"),
        }
    }
}

/// Lifecycle stage of a skill on the radar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// Currently used in production work
    Active,
    /// Actively learning and experimenting
    Learning,
    /// Evaluating for future use
    Assess,
    /// Previously used, now shelved
    Archive,
}

impl Status {
    /// Board column order in the workshop view
    pub const COLUMNS: [Status; 4] = [
        Status::Active,
        Status::Learning,
        Status::Assess,
        Status::Archive,
    ];
}

impl FromStr for Status {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "active" => Ok(Status::Active),
            "learning" => Ok(Status::Learning),
            "assess" => Ok(Status::Assess),
            "archive" => Ok(Status::Archive),
            _ => Err(CoreError::InvalidStatus(s.to_string())),
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Active => write!(f, "active"),
            Status::Learning => write!(f, "learning"),
            Status::Assess => write!(f, "assess"),
            Status::Archive => write!(f, "archive"),
        }
    }
}

/// Whether an item is shown to the world or only inside the workshop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Public,
    Private,
}

impl Visibility {
    /// The other setting; toggling is an involution
    pub fn flipped(&self) -> Visibility {
        match self {
            Visibility::Public => Visibility::Private,
            Visibility::Private => Visibility::Public,
        }
    }
}

impl FromStr for Visibility {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "public" => Ok(Visibility::Public),
            "private" => Ok(Visibility::Private),
            _ => Err(CoreError::InvalidVisibility(s.to_string())),
        }
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Visibility::Public => write!(f, "public"),
            Visibility::Private => write!(f, "private"),
        }
    }
}

/// One technology or skill entry on the radar
///
/// Ids are unique across the store. Tags are stored lowercased; tag
/// matching in the engine is a case-sensitive substring test against
/// these values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillItem {
    pub id: String,
    pub name: String,
    pub category: Category,
    pub status: Status,
    pub visibility: Visibility,
    pub description: String,
    pub tags: Vec<String>,
}

impl SkillItem {
    pub fn is_public(&self) -> bool {
        self.visibility == Visibility::Public
    }
}

/// Icon family for a certification badge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconKind {
    Azure,
    Gcp,
    Generic,
}

/// Portfolio project shown in the public view
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub short_description: String,
    pub full_description: String,
    pub date: String,
    pub tech_stack: Vec<String>,
    pub image_count: u32,
}

/// Professional certification or award
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Certificate {
    pub id: String,
    pub name: String,
    pub issuer: String,
    pub date: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    pub icon: IconKind,
}
