use crate::core::errors::{DecodeError, DecodeOutcome};

/// How the driver reacts to a unit that failed to convert.
///
/// The transcoder never sees this; it only decides what happens to an
/// outcome after the fact.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ErrorPolicy {
    /// Drop failed units silently and do not count them against the run.
    pub ignore: bool,
    /// Report each counted failure on the diagnostic stream.
    pub verbose: bool,
}

/// What the driver does with one unit's outcome.
#[derive(Debug, Clone, PartialEq)]
pub enum Disposition {
    /// Write this line to the output.
    Emit(String),
    /// Failed, but the policy swallows it.
    Suppressed(DecodeError),
    /// Failed and counts against the run.
    Failed(DecodeError),
}

impl Disposition {
    pub fn is_failure(&self) -> bool {
        matches!(self, Disposition::Failed(_))
    }
}

impl ErrorPolicy {
    pub fn new(ignore: bool, verbose: bool) -> Self {
        Self { ignore, verbose }
    }

    /// Classify `outcome` for the unit read from `input`, logging as the policy asks.
    pub fn dispose(&self, input: &str, outcome: DecodeOutcome) -> Disposition {
        match outcome {
            Ok(text) => Disposition::Emit(text),
            Err(err) if self.ignore => {
                tracing::debug!(input = %input, kind = err.kind(), "ignoring failed line: {}", err);
                Disposition::Suppressed(err)
            }
            Err(err) => {
                if self.verbose {
                    tracing::warn!(input = %input, kind = err.kind(), "cannot convert line: {}", err);
                }
                Disposition::Failed(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_is_emitted_under_any_policy() {
        for policy in [ErrorPolicy::new(false, false), ErrorPolicy::new(true, true)] {
            assert_eq!(policy.dispose("x", Ok("pw".into())), Disposition::Emit("pw".into()));
        }
    }

    #[test]
    fn ignore_suppresses_failures() {
        let policy = ErrorPolicy::new(true, false);
        let d = policy.dispose("$HEX[", Err(DecodeError::MalformedEnvelope));
        assert_eq!(d, Disposition::Suppressed(DecodeError::MalformedEnvelope));
        assert!(!d.is_failure());
    }

    #[test]
    fn failures_count_without_ignore() {
        let quiet = ErrorPolicy::default();
        let loud = ErrorPolicy::new(false, true);
        for policy in [quiet, loud] {
            let d = policy.dispose("$HEX[abc]", Err(DecodeError::OddHexLength(3)));
            assert!(d.is_failure());
        }
    }
}
