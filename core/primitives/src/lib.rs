// core/primitives/src/lib.rs

//! ReWear primitive types
//!
//! Identifiers and the closed enumerations shared by the marketplace and
//! economics crates.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Failure to parse one of the closed enumerations from its display name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("Unknown gender: {0}")]
    UnknownGender(String),

    #[error("Unknown condition: {0}")]
    UnknownCondition(String),

    #[error("Unknown role: {0}")]
    UnknownRole(String),
}

/// Listing identifier, stable for the lifetime of the item
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Fresh random identifier for a new listing
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Clothing categories accepted by the marketplace
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "T-Shirt")]
    TShirt,
    Pant,
    Jacket,
    Shoes,
}

impl Category {
    /// Canonical name, also the wire and filter value
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::TShirt => "T-Shirt",
            Category::Pant => "Pant",
            Category::Jacket => "Jacket",
            Category::Shoes => "Shoes",
        }
    }

    /// Human-facing label used in listings
    pub fn label(&self) -> &'static str {
        match self {
            Category::TShirt => "T-Shirt",
            Category::Pant => "Pants",
            Category::Jacket => "Jacket",
            Category::Shoes => "Shoes",
        }
    }

    pub fn all() -> &'static [Category] {
        &[
            Category::TShirt,
            Category::Pant,
            Category::Jacket,
            Category::Shoes,
        ]
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::all()
            .iter()
            .copied()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| ParseError::UnknownCategory(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    Unisex,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Unisex => "Unisex",
        }
    }

    pub fn all() -> &'static [Gender] {
        &[Gender::Male, Gender::Female, Gender::Unisex]
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Gender::all()
            .iter()
            .copied()
            .find(|gender| gender.as_str() == s)
            .ok_or_else(|| ParseError::UnknownGender(s.to_string()))
    }
}

/// Wear condition declared by the donor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Condition {
    New,
    Good,
    Worn,
}

impl Condition {
    pub fn as_str(&self) -> &'static str {
        match self {
            Condition::New => "New",
            Condition::Good => "Good",
            Condition::Worn => "Worn",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Condition::New => "New - With tags",
            Condition::Good => "Good - Gently used",
            Condition::Worn => "Worn - Shows use",
        }
    }

    pub fn all() -> &'static [Condition] {
        &[Condition::New, Condition::Good, Condition::Worn]
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Condition {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Condition::all()
            .iter()
            .copied()
            .find(|condition| condition.as_str() == s)
            .ok_or_else(|| ParseError::UnknownCondition(s.to_string()))
    }
}

/// Community role chosen at sign-up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Donor,
    Receiver,
    Both,
}

impl Role {
    /// Whether a member with this role may file requests for listed items
    pub fn can_request(&self) -> bool {
        matches!(self, Role::Receiver | Role::Both)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Donor => "donor",
            Role::Receiver => "receiver",
            Role::Both => "both",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Role::Donor => "Donor",
            Role::Receiver => "Receiver",
            Role::Both => "Donor + Receiver",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "donor" => Ok(Role::Donor),
            "receiver" => Ok(Role::Receiver),
            "both" => Ok(Role::Both),
            _ => Err(ParseError::UnknownRole(s.to_string())),
        }
    }
}
