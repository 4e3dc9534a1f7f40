use crate::error::{Error, Result};
use regex::Regex;
use std::sync::LazyLock;

// Default key forms for JIRA Server 7.1.
static PROJECT_KEY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z][A-Z]+$").unwrap());
static ISSUE_KEY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z][A-Z]+-\d+$").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyKind {
    Project,
    Issue,
}

/// Classify a user-supplied key token. Exactly one of the two forms must
/// match; anything else is a malformed key, reported before any network
/// traffic happens.
pub fn classify_key(key: &str) -> Result<KeyKind> {
    if PROJECT_KEY_RE.is_match(key) {
        Ok(KeyKind::Project)
    } else if ISSUE_KEY_RE.is_match(key) {
        Ok(KeyKind::Issue)
    } else {
        Err(Error::MalformedKey(key.to_string()))
    }
}

/// JQL filter clause builder: key predicate plus optional creation-time
/// bounds and ordering directive. Built once per invocation.
#[derive(Debug, Clone, Default)]
pub struct JqlFilter {
    key: String,
    since: Option<String>,
    until: Option<String>,
    order_by: Option<String>,
}

impl JqlFilter {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ..Self::default()
        }
    }

    pub fn since(mut self, since: impl Into<String>) -> Self {
        self.since = Some(since.into());
        self
    }

    pub fn until(mut self, until: impl Into<String>) -> Self {
        self.until = Some(until.into());
        self
    }

    pub fn order_by(mut self, order_by: impl Into<String>) -> Self {
        self.order_by = Some(order_by.into());
        self
    }

    /// Assemble the clause. Time bounds and the ordering expression pass
    /// through verbatim so server-side JQL functions (`now()`,
    /// `startofday()`) keep working.
    pub fn build(&self) -> Result<String> {
        let mut clause = Vec::new();
        match classify_key(&self.key)? {
            KeyKind::Project => clause.push(format!("PROJECT = \"{}\"", self.key)),
            KeyKind::Issue => clause.push(format!("ISSUEKEY={}", self.key)),
        }
        if let Some(since) = &self.since {
            clause.push(format!("CREATED >= {}", since));
        }
        if let Some(until) = &self.until {
            clause.push(format!("CREATED <= {}", until));
        }
        let mut jql = clause.join(" AND ");
        if let Some(order_by) = &self.order_by {
            jql.push_str(&format!(" ORDER BY {}", order_by));
        }
        Ok(jql)
    }
}
