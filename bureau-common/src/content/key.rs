//! Content key schema
//!
//! Every overridable field is addressed by a dot-namespaced key of the form
//! `<page>.<section>.<field>`, e.g. `home.hero.title`. Keys are stable
//! identifiers: renaming one orphans any override stored under the old name.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Marketing site pages that carry editable content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    Home,
    Services,
    Team,
    Speakers,
    Workshops,
    Contact,
    Footer,
}

impl Page {
    /// All pages in navigation order
    pub const ALL: [Page; 7] = [
        Page::Home,
        Page::Services,
        Page::Team,
        Page::Speakers,
        Page::Workshops,
        Page::Contact,
        Page::Footer,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::Services => "services",
            Page::Team => "team",
            Page::Speakers => "speakers",
            Page::Workshops => "workshops",
            Page::Contact => "contact",
            Page::Footer => "footer",
        }
    }

    /// Key prefix owned by this page, including the trailing dot
    pub fn namespace(&self) -> String {
        format!("{}.", self.as_str())
    }

    /// True when `key` lives under this page's namespace
    pub fn owns_key(&self, key: &str) -> bool {
        key.strip_prefix(self.as_str())
            .is_some_and(|rest| rest.starts_with('.'))
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Page {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Page::ALL
            .iter()
            .copied()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| Error::InvalidInput(format!("Unknown page: {}", s)))
    }
}

/// Validated `<page>.<section>.<field>` content key
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ContentKey {
    raw: String,
    page: Page,
    section_end: usize,
}

impl ContentKey {
    /// Parse and validate a content key
    pub fn parse(s: &str) -> Result<Self> {
        let segments: Vec<&str> = s.split('.').collect();
        if segments.len() != 3 {
            return Err(Error::InvalidInput(format!(
                "Content key must have 3 segments <page>.<section>.<field>: {}",
                s
            )));
        }

        for segment in &segments {
            if segment.is_empty() {
                return Err(Error::InvalidInput(format!("Empty segment in content key: {}", s)));
            }
            if !segment
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' || c == '-')
            {
                return Err(Error::InvalidInput(format!(
                    "Invalid character in content key segment '{}': {}",
                    segment, s
                )));
            }
        }

        let page = segments[0].parse::<Page>()?;
        let section_end = segments[0].len() + 1 + segments[1].len();

        Ok(Self {
            raw: s.to_string(),
            page,
            section_end,
        })
    }

    pub fn page(&self) -> Page {
        self.page
    }

    pub fn section(&self) -> &str {
        &self.raw[self.page.as_str().len() + 1..self.section_end]
    }

    pub fn field(&self) -> &str {
        &self.raw[self.section_end + 1..]
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl fmt::Display for ContentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl FromStr for ContentKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        ContentKey::parse(s)
    }
}

impl TryFrom<String> for ContentKey {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        ContentKey::parse(&s)
    }
}

impl From<ContentKey> for String {
    fn from(key: ContentKey) -> Self {
        key.raw
    }
}

impl AsRef<str> for ContentKey {
    fn as_ref(&self) -> &str {
        &self.raw
    }
}
