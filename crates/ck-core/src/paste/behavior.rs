use serde::{Deserialize, Serialize};

/// How pasted content is post-processed in the target application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PasteBehavior {
    #[default]
    Normal,
    /// Paste a URL, select it, then invoke the editor's "insert link" command.
    LinkConversion,
}

impl PasteBehavior {
    pub fn label(&self) -> &'static str {
        match self {
            PasteBehavior::Normal => "Normal Paste",
            PasteBehavior::LinkConversion => "Paste as Link",
        }
    }
}

/// Override rule for one application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppPasteBehavior {
    /// Bundle identifier (or platform equivalent) of the target application.
    pub app_identifier: String,
    pub app_name: String,
    /// Literal substring the live page URL must contain for the rule to apply.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url_pattern: Option<String>,
    pub behavior: PasteBehavior,
}

/// Rule list keyed by `app_identifier`; at most one rule per identifier.
///
/// `Default` yields the shipped rule set, `new()` an empty list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<AppPasteBehavior>", into = "Vec<AppPasteBehavior>")]
pub struct AppPasteBehaviors(Vec<AppPasteBehavior>);

impl AppPasteBehaviors {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Insert a rule, replacing any rule with the same identifier in place.
    pub fn upsert(&mut self, rule: AppPasteBehavior) {
        match self
            .0
            .iter_mut()
            .find(|existing| existing.app_identifier == rule.app_identifier)
        {
            Some(existing) => *existing = rule,
            None => self.0.push(rule),
        }
    }

    pub fn remove(&mut self, app_identifier: &str) -> Option<AppPasteBehavior> {
        let index = self
            .0
            .iter()
            .position(|rule| rule.app_identifier == app_identifier)?;
        Some(self.0.remove(index))
    }

    pub fn find(&self, app_identifier: &str) -> Option<&AppPasteBehavior> {
        self.0.iter().find(|rule| rule.app_identifier == app_identifier)
    }

    pub fn iter(&self) -> impl Iterator<Item = &AppPasteBehavior> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<AppPasteBehavior> for AppPasteBehaviors {
    fn from_iter<I: IntoIterator<Item = AppPasteBehavior>>(iter: I) -> Self {
        let mut rules = Self::new();
        for rule in iter {
            rules.upsert(rule);
        }
        rules
    }
}

impl From<Vec<AppPasteBehavior>> for AppPasteBehaviors {
    fn from(rules: Vec<AppPasteBehavior>) -> Self {
        rules.into_iter().collect()
    }
}

impl From<AppPasteBehaviors> for Vec<AppPasteBehavior> {
    fn from(rules: AppPasteBehaviors) -> Self {
        rules.0
    }
}
