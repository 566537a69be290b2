use super::behavior::{AppPasteBehaviors, PasteBehavior};
use crate::ports::PageUrlPort;

/// `true` when the trimmed text starts with an `http://` or `https://` scheme.
pub fn is_web_link(text: &str) -> bool {
    let trimmed = text.trim();
    trimmed.starts_with("http://") || trimmed.starts_with("https://")
}

/// Maps a target application to the paste behavior configured for it.
#[derive(Debug, Clone, Default)]
pub struct BehaviorResolver {
    rules: AppPasteBehaviors,
}

impl BehaviorResolver {
    pub fn new(rules: AppPasteBehaviors) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &AppPasteBehaviors {
        &self.rules
    }

    /// Resolve the behavior for `app_identifier`.
    ///
    /// Only the rule registered for the identifier is consulted. A rule with a
    /// URL pattern applies only when the live page URL can be read and contains
    /// the pattern verbatim (case-sensitive). Everything else is `Normal`.
    pub async fn resolve(
        &self,
        app_identifier: Option<&str>,
        page_urls: &dyn PageUrlPort,
    ) -> PasteBehavior {
        let Some(rule) = app_identifier.and_then(|id| self.rules.find(id)) else {
            return PasteBehavior::Normal;
        };

        let Some(pattern) = rule.url_pattern.as_deref() else {
            return rule.behavior;
        };

        match page_urls.front_page_url(&rule.app_identifier).await {
            Some(url) if url.contains(pattern) => rule.behavior,
            _ => PasteBehavior::Normal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paste::AppPasteBehavior;
    use crate::ports::MockPageUrl;

    fn resolver() -> BehaviorResolver {
        let mut rules = AppPasteBehaviors::new();
        rules.upsert(AppPasteBehavior {
            app_identifier: "browser.x".into(),
            app_name: "Browser X".into(),
            url_pattern: Some("docs.example.com".into()),
            behavior: PasteBehavior::LinkConversion,
        });
        rules.upsert(AppPasteBehavior {
            app_identifier: "editor.y".into(),
            app_name: "Editor Y".into(),
            url_pattern: None,
            behavior: PasteBehavior::LinkConversion,
        });
        BehaviorResolver::new(rules)
    }

    fn urls_returning(url: Option<&'static str>) -> MockPageUrl {
        let mut urls = MockPageUrl::new();
        urls.expect_front_page_url()
            .returning(move |_| url.map(str::to_string));
        urls
    }

    #[tokio::test]
    async fn matching_url_applies_rule() {
        let urls = urls_returning(Some("https://docs.example.com/doc1"));
        let behavior = resolver().resolve(Some("browser.x"), &urls).await;
        assert_eq!(behavior, PasteBehavior::LinkConversion);
    }

    #[tokio::test]
    async fn other_url_falls_back_to_normal() {
        let urls = urls_returning(Some("https://other.com"));
        let behavior = resolver().resolve(Some("browser.x"), &urls).await;
        assert_eq!(behavior, PasteBehavior::Normal);
    }

    #[tokio::test]
    async fn unreadable_url_falls_back_to_normal() {
        let urls = urls_returning(None);
        let behavior = resolver().resolve(Some("browser.x"), &urls).await;
        assert_eq!(behavior, PasteBehavior::Normal);
    }

    #[tokio::test]
    async fn url_match_is_case_sensitive() {
        let urls = urls_returning(Some("https://DOCS.EXAMPLE.COM/doc1"));
        let behavior = resolver().resolve(Some("browser.x"), &urls).await;
        assert_eq!(behavior, PasteBehavior::Normal);
    }

    #[tokio::test]
    async fn rule_without_pattern_never_queries_url() {
        let mut urls = MockPageUrl::new();
        urls.expect_front_page_url().never();
        let behavior = resolver().resolve(Some("editor.y"), &urls).await;
        assert_eq!(behavior, PasteBehavior::LinkConversion);
    }

    #[tokio::test]
    async fn unknown_or_missing_identifier_is_normal() {
        let mut urls = MockPageUrl::new();
        urls.expect_front_page_url().never();
        let resolver = resolver();
        assert_eq!(
            resolver.resolve(Some("unknown.app"), &urls).await,
            PasteBehavior::Normal
        );
        assert_eq!(resolver.resolve(None, &urls).await, PasteBehavior::Normal);
    }

    #[test]
    fn web_link_detection() {
        assert!(is_web_link("  https://example.com \n"));
        assert!(is_web_link("http://a"));
        assert!(!is_web_link("ftp://example.com"));
        assert!(!is_web_link("see https://example.com"));
    }
}
