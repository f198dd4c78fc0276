//! Role-group taxonomy for desired-position titles.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse job-role buckets derived from position titles by keyword
/// matching.
///
/// Classification walks the buckets in declaration order and the first
/// bucket with a matching keyword wins, so the order here is
/// significant: a "python developer, аналитик" title lands in `Dev`,
/// not `Analyst`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoleGroup {
    /// Software development
    Dev,

    /// Systems administration and operations
    Sys,

    /// Management
    Mgr,

    /// Analytics
    Analyst,

    /// Customer and technical support
    Support,

    /// Marketing, content and design
    Marketing,

    /// Hardware and field engineering
    Engineer,

    /// Catch-all for everything unmatched
    Other,
}

impl RoleGroup {
    /// All buckets in classification order; `Other` is the catch-all
    /// and carries no keywords.
    pub fn all() -> Vec<Self> {
        vec![
            Self::Dev,
            Self::Sys,
            Self::Mgr,
            Self::Analyst,
            Self::Support,
            Self::Marketing,
            Self::Engineer,
            Self::Other,
        ]
    }

    /// Bucket label used in encoded column names.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Dev => "dev",
            Self::Sys => "sys",
            Self::Mgr => "mgr",
            Self::Analyst => "analyst",
            Self::Support => "support",
            Self::Marketing => "marketing",
            Self::Engineer => "engineer",
            Self::Other => "other",
        }
    }

    /// Case-insensitive substrings that map a title into this bucket.
    pub const fn keywords(&self) -> &'static [&'static str] {
        match self {
            Self::Dev => &[
                "программист",
                "разработчик",
                "developer",
                "java",
                "python",
                "php",
                "frontend",
                "backend",
                "qa",
            ],
            Self::Sys => &["системн", "администратор", "devops", "dba", "сетев"],
            Self::Mgr => &[
                "менедж",
                "руководител",
                "начальник",
                "lead",
                "project",
                "product",
            ],
            Self::Analyst => &["аналитик", "data", "analysis", "bi"],
            Self::Support => &["поддерж", "support", "helpdesk", "оператор"],
            Self::Marketing => &["маркет", "seo", "контент", "дизайн"],
            Self::Engineer => &["инженер", "техник", "электрик", "монтаж"],
            Self::Other => &[],
        }
    }

    /// Classify a position title; the first matching bucket wins.
    pub fn classify(title: &str) -> Self {
        let title = title.to_lowercase();
        for bucket in Self::all() {
            if bucket.keywords().iter().any(|k| title.contains(k)) {
                return bucket;
            }
        }
        Self::Other
    }
}

impl fmt::Display for RoleGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
