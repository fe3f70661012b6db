// src/compare/mod.rs
use crate::extractors::ExtractedVersion;
use crate::utils::AppError;

/// Outcome of comparing two extracted versions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Match { version: ExtractedVersion },
    Mismatch { left: ExtractedVersion, right: ExtractedVersion },
}

impl Verdict {
    pub fn is_match(&self) -> bool {
        matches!(self, Verdict::Match { .. })
    }
}

/// Exact string comparison. No case, zero-padding or semver normalization.
pub fn compare(left: ExtractedVersion, right: ExtractedVersion) -> Verdict {
    if left.value == right.value {
        Verdict::Match { version: left }
    } else {
        Verdict::Mismatch { left, right }
    }
}

/// Logs the verdict and turns a mismatch into an error for the caller to exit on.
pub fn report(verdict: &Verdict) -> Result<(), AppError> {
    match verdict {
        Verdict::Match { version } => {
            tracing::info!("version check ok: {}", version.value);
            Ok(())
        }
        Verdict::Mismatch { left, right } => {
            tracing::error!("not OK: version mismatch");
            tracing::error!("{} version {:?}", left.source, left.value);
            tracing::error!("{} version {:?}", right.source, right.value);
            Err(AppError::Mismatch {
                left_name: left.source.clone(),
                left: left.value.clone(),
                right_name: right.source.clone(),
                right: right.value.clone(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn version(value: &str, source: &str) -> ExtractedVersion {
        ExtractedVersion { value: value.to_string(), source: source.to_string() }
    }

    #[test]
    fn test_equal_versions_match() {
        let verdict = compare(version("2.0.0", "README.md"), version("2.0.0", "lib/main.c"));
        assert!(verdict.is_match());
        assert!(report(&verdict).is_ok());
    }

    #[test]
    fn test_mismatch_keeps_both_values() {
        let verdict = compare(version("2.0.0", "README.md"), version("2.0.1", "lib/main.c"));
        assert_eq!(
            verdict,
            Verdict::Mismatch {
                left: version("2.0.0", "README.md"),
                right: version("2.0.1", "lib/main.c"),
            }
        );

        match report(&verdict) {
            Err(AppError::Mismatch { left, right, left_name, right_name }) => {
                assert_eq!((left.as_str(), right.as_str()), ("2.0.0", "2.0.1"));
                assert_eq!((left_name.as_str(), right_name.as_str()), ("README.md", "lib/main.c"));
            }
            other => panic!("expected mismatch error, got {:?}", other),
        }
    }

    #[test]
    fn test_no_normalization() {
        assert!(!compare(version("2.0", "a"), version("2.0.0", "b")).is_match());
        assert!(!compare(version("V2.0.0", "a"), version("v2.0.0", "b")).is_match());
        assert!(!compare(version("02.0.0", "a"), version("2.0.0", "b")).is_match());
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn equal_values_match(value in "[0-9A-Za-z.+-]{1,20}") {
                let verdict = compare(version(&value, "README.md"), version(&value, "lib/main.c"));
                prop_assert_eq!(verdict, Verdict::Match { version: version(&value, "README.md") });
            }

            #[test]
            fn different_values_keep_both(
                left in "[0-9A-Za-z.+-]{1,20}",
                right in "[0-9A-Za-z.+-]{1,20}",
            ) {
                prop_assume!(left != right);
                let verdict = compare(version(&left, "README.md"), version(&right, "lib/main.c"));
                prop_assert_eq!(
                    verdict,
                    Verdict::Mismatch {
                        left: version(&left, "README.md"),
                        right: version(&right, "lib/main.c"),
                    }
                );
            }
        }
    }
}
