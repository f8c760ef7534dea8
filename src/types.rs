use serde::Deserialize;

/// What to do with a dependency title that matches no task in the request.
///
/// - `Ignore`: treat the reference as already satisfied; it adds no edge
///   (default behaviour).
/// - `Reject`: fail the whole request with `DependencyNotFound`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnknownDependencyPolicy {
    Ignore,
    Reject,
}

impl Default for UnknownDependencyPolicy {
    fn default() -> Self {
        UnknownDependencyPolicy::Ignore
    }
}

/// What to do when two tasks in one request share a title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicateTitlePolicy {
    /// Fail with `DuplicateTitle` (default).
    Reject,
    /// Keep the last task with a given title and drop the earlier ones.
    LastWins,
}

impl Default for DuplicateTitlePolicy {
    fn default() -> Self {
        DuplicateTitlePolicy::Reject
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn policies_use_the_config_file_spellings() {
        #[derive(Deserialize)]
        struct Section {
            unknown: UnknownDependencyPolicy,
            dupes: DuplicateTitlePolicy,
        }

        let section: Section =
            toml::from_str("unknown = \"reject\"\ndupes = \"last_wins\"").unwrap();
        assert_eq!(section.unknown, UnknownDependencyPolicy::Reject);
        assert_eq!(section.dupes, DuplicateTitlePolicy::LastWins);

        assert!(toml::from_str::<Section>("unknown = \"ignore\"\ndupes = \"last-wins\"").is_err());
    }

    #[test]
    fn defaults_match_lenient_references_and_strict_titles() {
        assert_eq!(UnknownDependencyPolicy::default(), UnknownDependencyPolicy::Ignore);
        assert_eq!(DuplicateTitlePolicy::default(), DuplicateTitlePolicy::Reject);
    }
}
