//! Narrowing a release list down to a single tag.

use log::debug;

use crate::provider::Release;

/// Keeps the releases whose tag matches `tag`, ignoring case.
///
/// An absent or empty tag keeps every release. Order is preserved and an empty
/// result is valid.
pub fn filter_by_tag(releases: Vec<Release>, tag: Option<&str>) -> Vec<Release> {
    let Some(tag) = tag.filter(|t| !t.is_empty()) else {
        return releases;
    };

    let total = releases.len();
    let matched: Vec<Release> = releases
        .into_iter()
        .filter(|r| eq_ignore_case(&r.tag, tag))
        .collect();

    debug!("Tag filter '{}' kept {} of {} releases", tag, matched.len(), total);
    matched
}

/// Char-by-char comparison of the uppercase forms, independent of locale.
fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_uppercase)
        .eq(b.chars().flat_map(char::to_uppercase))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn release(tag: &str) -> Release {
        Release {
            tag: tag.to_string(),
            name: Some(tag.to_string()),
            ..Default::default()
        }
    }

    fn tags(releases: &[Release]) -> Vec<&str> {
        releases.iter().map(|r| r.tag.as_str()).collect()
    }

    #[test]
    fn test_no_tag_is_identity() {
        let releases = vec![release("v2"), release("v1")];
        assert_eq!(filter_by_tag(releases.clone(), None), releases);
    }

    #[test]
    fn test_empty_tag_is_identity() {
        let releases = vec![release("v2"), release("v1")];
        assert_eq!(filter_by_tag(releases.clone(), Some("")), releases);
    }

    #[test]
    fn test_exact_match() {
        let releases = vec![release("v2"), release("v1")];
        assert_eq!(tags(&filter_by_tag(releases, Some("v1"))), vec!["v1"]);
    }

    #[test]
    fn test_match_ignores_case() {
        let releases = vec![release("v1.0"), release("v1.1")];
        assert_eq!(tags(&filter_by_tag(releases, Some("V1.0"))), vec!["v1.0"]);
    }

    #[test]
    fn test_match_ignores_case_beyond_ascii() {
        let releases = vec![release("version-é"), release("version-e")];
        assert_eq!(
            tags(&filter_by_tag(releases, Some("VERSION-É"))),
            vec!["version-é"]
        );
    }

    #[test]
    fn test_eq_ignore_case() {
        assert!(eq_ignore_case("release-ÄÖ", "RELEASE-äö"));
        assert!(eq_ignore_case("v1.0-ω", "V1.0-Ω"));
        assert!(!eq_ignore_case("v1.0", "v1.0.0"));
    }

    #[test]
    fn test_prefix_is_not_a_match() {
        let releases = vec![release("v1.0.1")];
        assert!(filter_by_tag(releases, Some("v1.0")).is_empty());
    }

    #[test]
    fn test_no_match_is_empty() {
        let releases = vec![release("v1")];
        assert!(filter_by_tag(releases, Some("v2")).is_empty());
    }

    #[test]
    fn test_duplicates_keep_order() {
        let mut first = release("nightly");
        first.name = Some("first".into());
        let mut second = release("NIGHTLY");
        second.name = Some("second".into());

        let matched = filter_by_tag(vec![first, release("v1"), second], Some("Nightly"));
        let names: Vec<_> = matched.iter().map(|r| r.name.as_deref()).collect();
        assert_eq!(names, vec![Some("first"), Some("second")]);
    }
}
