//! Repository statistics aggregation
//!
//! Combines a GitHub profile and its repositories into star totals,
//! the languages used (in first-seen order) and the most-starred repository.

use crate::errors::{QueryError, Result};
use serde::{Deserialize, Serialize};

/// Number of languages shown in the summary sentence
pub const SUMMARY_LANGUAGE_LIMIT: usize = 3;

/// Account profile as returned by `GET /users/{username}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileRecord {
    #[serde(default)]
    pub name: Option<String>,
    pub login: String,
    #[serde(default)]
    pub public_repos: u64,
}

impl ProfileRecord {
    /// Display name, falling back to the login
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .filter(|n| !n.trim().is_empty())
            .unwrap_or(&self.login)
    }
}

/// One repository as returned by `GET /users/{username}/repos`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryRecord {
    pub name: String,
    #[serde(default)]
    pub stargazers_count: u64,
    #[serde(default)]
    pub language: Option<String>,
}

impl RepositoryRecord {
    pub fn new(name: impl Into<String>, stars: u64, language: Option<&str>) -> Self {
        Self {
            name: name.into(),
            stargazers_count: stars,
            language: language.map(str::to_string),
        }
    }
}

/// Aggregated statistics
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoStats {
    pub total_stars: u64,
    pub distinct_languages: Vec<String>,
    pub top_repository: RepositoryRecord,
}

/// Aggregate a profile's repositories
pub fn compute_stats(_profile: &ProfileRecord, repos: &[RepositoryRecord]) -> Result<RepoStats> {
    let (first, rest) = repos.split_first().ok_or(QueryError::EmptyInput {
        what: "repositories",
    })?;

    // Strict comparison keeps the earliest repository on ties.
    let mut top = first;
    for repo in rest {
        if repo.stargazers_count > top.stargazers_count {
            top = repo;
        }
    }

    let total_stars = repos
        .iter()
        .fold(0u64, |total, r| total.saturating_add(r.stargazers_count));

    let mut distinct_languages: Vec<String> = Vec::new();
    for language in repos.iter().filter_map(|r| r.language.as_deref()) {
        if !distinct_languages.iter().any(|seen| seen == language) {
            distinct_languages.push(language.to_string());
        }
    }

    Ok(RepoStats {
        total_stars,
        distinct_languages,
        top_repository: top.clone(),
    })
}

/// Render the one-sentence summary for a profile
pub fn summarize(profile: &ProfileRecord, stats: &RepoStats) -> String {
    let languages = if stats.distinct_languages.is_empty() {
        "none".to_string()
    } else {
        stats
            .distinct_languages
            .iter()
            .take(SUMMARY_LANGUAGE_LIMIT)
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    };

    format!(
        "{} (@{}) has {} public repositories with {} total stars. \
         Top repository: {} ({} stars). Languages: {}.",
        profile.display_name(),
        profile.login,
        profile.public_repos,
        stats.total_stars,
        stats.top_repository.name,
        stats.top_repository.stargazers_count,
        languages
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;

    fn profile() -> ProfileRecord {
        ProfileRecord {
            name: Some("The Octocat".to_string()),
            login: "octocat".to_string(),
            public_repos: 8,
        }
    }

    #[test]
    fn test_top_repository_by_stars() {
        let repos = vec![
            RepositoryRecord::new("a", 5, None),
            RepositoryRecord::new("b", 5, None),
            RepositoryRecord::new("c", 9, None),
        ];
        let stats = compute_stats(&profile(), &repos).unwrap();
        assert_eq!(stats.top_repository.name, "c");
        assert_eq!(stats.total_stars, 19);
    }

    #[test]
    fn test_tie_resolves_to_earliest() {
        let repos = vec![
            RepositoryRecord::new("first", 7, None),
            RepositoryRecord::new("second", 7, None),
            RepositoryRecord::new("small", 1, None),
        ];
        let stats = compute_stats(&profile(), &repos).unwrap();
        assert_eq!(stats.top_repository.name, "first");
    }

    #[test]
    fn test_distinct_languages_first_seen_order() {
        let repos = vec![
            RepositoryRecord::new("a", 0, Some("Go")),
            RepositoryRecord::new("b", 0, Some("Go")),
            RepositoryRecord::new("c", 0, None),
            RepositoryRecord::new("d", 0, Some("Rust")),
        ];
        let stats = compute_stats(&profile(), &repos).unwrap();
        assert_eq!(stats.distinct_languages, vec!["Go", "Rust"]);
    }

    #[test]
    fn test_star_total_saturates() {
        let repos = vec![
            RepositoryRecord::new("huge", u64::MAX, None),
            RepositoryRecord::new("small", 1, None),
        ];
        let stats = compute_stats(&profile(), &repos).unwrap();
        assert_eq!(stats.total_stars, u64::MAX);
        assert_eq!(stats.top_repository.name, "huge");
    }

    #[test]
    fn test_empty_repositories() {
        let err = compute_stats(&profile(), &[]).unwrap_err();
        assert!(matches!(err, QueryError::EmptyInput { what: "repositories" }));
    }

    #[test]
    fn test_summary_truncates_languages() {
        let repos = vec![
            RepositoryRecord::new("hello-world", 12, Some("Ruby")),
            RepositoryRecord::new("spoon-knife", 30, Some("HTML")),
            RepositoryRecord::new("linguist", 4, Some("Go")),
            RepositoryRecord::new("octo", 1, Some("Rust")),
        ];
        let stats = compute_stats(&profile(), &repos).unwrap();
        assert_eq!(stats.distinct_languages.len(), 4);

        let summary = summarize(&profile(), &stats);
        assert_eq!(
            summary,
            "The Octocat (@octocat) has 8 public repositories with 47 total stars. \
             Top repository: spoon-knife (30 stars). Languages: Ruby, HTML, Go."
        );
    }

    #[test]
    fn test_summary_without_languages_or_name() {
        let profile = ProfileRecord {
            name: None,
            login: "ghost".to_string(),
            public_repos: 1,
        };
        let stats = compute_stats(&profile, &[RepositoryRecord::new("x", 0, None)]).unwrap();
        let summary = summarize(&profile, &stats);
        assert!(summary.starts_with("ghost (@ghost)"));
        assert!(summary.ends_with("Languages: none."));
    }

    #[test]
    fn test_deserialize_github_shape() {
        let repos: Vec<RepositoryRecord> = serde_json::from_str(
            r#"[{"name":"r","stargazers_count":3,"language":null,"fork":false}]"#,
        )
        .unwrap();
        assert_eq!(repos[0].stargazers_count, 3);
        assert!(repos[0].language.is_none());
    }

    #[quickcheck]
    fn prop_top_repository_is_first_maximum(stars: Vec<u16>) -> bool {
        if stars.is_empty() {
            return true;
        }
        let repos: Vec<RepositoryRecord> = stars
            .iter()
            .enumerate()
            .map(|(i, s)| RepositoryRecord::new(i.to_string(), u64::from(*s), None))
            .collect();
        let stats = compute_stats(&profile(), &repos).unwrap();
        let max = stars.iter().copied().max().unwrap_or(0);
        let first_index = stars.iter().position(|s| *s == max).unwrap_or(0);
        stats.top_repository.name == first_index.to_string()
            && stats.total_stars == stars.iter().map(|s| u64::from(*s)).sum::<u64>()
    }
}
