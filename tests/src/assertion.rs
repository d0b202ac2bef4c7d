//! Assertion types and builders for verifying step results.

use nsfile_builder::BuildSummary;
use nsfile_namespace::MemoryNamespace;

use crate::error::{ScenarioError, ScenarioResult};

/// A complete assertion for a step result.
#[derive(Debug, Default)]
pub struct Assertion {
    // Build assertions
    pub applied: Option<usize>,
    pub included: Option<usize>,

    // Name space assertions
    pub unions: Vec<(String, Vec<String>)>,
    pub unmounted: Vec<String>,
    pub resolves: Vec<(String, Vec<String>)>,
    pub cwd: Option<String>,
    pub create_targets: Vec<(String, Option<String>)>,

    // Error assertions
    pub error: Option<String>,
    pub error_pattern: Option<String>,
}

impl Assertion {
    /// Create a new empty assertion.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of operations the step applied.
    pub fn applied(mut self, n: usize) -> Self {
        self.applied = Some(n);
        self
    }

    /// Number of included scripts the step applied.
    pub fn included(mut self, n: usize) -> Self {
        self.included = Some(n);
        self
    }

    /// The union at `path` has exactly these member roots, in search order.
    pub fn union(mut self, path: &str, members: &[&str]) -> Self {
        self.unions
            .push((path.to_string(), members.iter().map(|m| m.to_string()).collect()));
        self
    }

    /// Nothing is mounted at `path`.
    pub fn unmounted(mut self, path: &str) -> Self {
        self.unmounted.push(path.to_string());
        self
    }

    /// `path` resolves to these candidates, in search order.
    pub fn resolves(mut self, path: &str, candidates: &[&str]) -> Self {
        self.resolves.push((
            path.to_string(),
            candidates.iter().map(|c| c.to_string()).collect(),
        ));
        self
    }

    pub fn cwd(mut self, dir: &str) -> Self {
        self.cwd = Some(dir.to_string());
        self
    }

    /// Files created in `dir` land in `target` (`None`: creation fails).
    pub fn creates_in(mut self, dir: &str, target: Option<&str>) -> Self {
        self.create_targets
            .push((dir.to_string(), target.map(str::to_string)));
        self
    }

    /// The step fails with a message containing `text`.
    pub fn error(mut self, text: &str) -> Self {
        self.error = Some(text.to_string());
        self
    }

    /// The step fails with a message matching the regex `pattern`.
    pub fn error_matches(mut self, pattern: &str) -> Self {
        self.error_pattern = Some(pattern.to_string());
        self
    }

    fn expects_error(&self) -> bool {
        self.error.is_some() || self.error_pattern.is_some()
    }

    /// Verify the assertion against a step result and the name space after it.
    ///
    /// Name space checks run for failed steps too, so a test can confirm what
    /// a partial build left behind.
    pub fn verify(
        &self,
        step: &str,
        result: &Result<BuildSummary, String>,
        ns: &MemoryNamespace,
    ) -> ScenarioResult<()> {
        let fail = |message: String| Err(ScenarioError::assertion_failed(step, message));

        match result {
            Ok(summary) => {
                if self.expects_error() {
                    return fail(format!(
                        "expected an error, but step succeeded ({:?})",
                        summary
                    ));
                }
                if let Some(expected) = self.applied {
                    if summary.applied != expected {
                        return fail(format!(
                            "expected {} applied operations, got {}",
                            expected, summary.applied
                        ));
                    }
                }
                if let Some(expected) = self.included {
                    if summary.included != expected {
                        return fail(format!(
                            "expected {} includes, got {}",
                            expected, summary.included
                        ));
                    }
                }
            }
            Err(message) => {
                if !self.expects_error() {
                    return fail(format!("unexpected error: {}", message));
                }
                if let Some(ref text) = self.error {
                    if !message.contains(text.as_str()) {
                        return fail(format!(
                            "expected error containing '{}', got: {}",
                            text, message
                        ));
                    }
                }
                if let Some(ref pattern) = self.error_pattern {
                    let re = regex_lite::Regex::new(pattern).map_err(|e| {
                        ScenarioError::assertion_failed(
                            step,
                            format!("invalid regex pattern: {}", e),
                        )
                    })?;
                    if !re.is_match(message) {
                        return fail(format!(
                            "expected error matching '{}', got: {}",
                            pattern, message
                        ));
                    }
                }
            }
        }

        for (path, expected) in &self.unions {
            let actual: Vec<String> = ns
                .union(path)
                .unwrap_or_default()
                .iter()
                .map(|m| m.source.root())
                .collect();
            if &actual != expected {
                return fail(format!(
                    "union at {}: expected {:?}, got {:?}",
                    path, expected, actual
                ));
            }
        }

        for path in &self.unmounted {
            if let Some(members) = ns.union(path) {
                return fail(format!(
                    "expected nothing mounted at {}, found {} member(s)",
                    path,
                    members.len()
                ));
            }
        }

        for (path, expected) in &self.resolves {
            let actual = ns.resolve(path);
            if &actual != expected {
                return fail(format!(
                    "{} resolves to {:?}, expected {:?}",
                    path, actual, expected
                ));
            }
        }

        if let Some(ref expected) = self.cwd {
            if ns.cwd() != expected {
                return fail(format!(
                    "expected current directory {}, got {}",
                    expected,
                    ns.cwd()
                ));
            }
        }

        for (dir, expected) in &self.create_targets {
            let actual = ns.create_target(dir);
            if &actual != expected {
                return fail(format!(
                    "creates in {} land in {:?}, expected {:?}",
                    dir, actual, expected
                ));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nsfile_core::{Namespace, Placement};

    #[test]
    fn test_union_mismatch_is_reported() {
        let mut ns = MemoryNamespace::new();
        ns.bind("/a", "/b", Placement::REPLACE).unwrap();
        let assertion = Assertion::new().union("/b", &["/c"]);

        let err = assertion
            .verify("s", &Ok(BuildSummary::default()), &ns)
            .unwrap_err();

        assert!(err.to_string().contains("union at /b"));
    }

    #[test]
    fn test_error_expectations() {
        let ns = MemoryNamespace::new();
        let result = Err("line 2: bind failed: not mounted: /x".to_string());

        assert!(Assertion::new()
            .error("not mounted")
            .verify("s", &result, &ns)
            .is_ok());
        assert!(Assertion::new()
            .error_matches(r"^line \d+: bind")
            .verify("s", &result, &ns)
            .is_ok());
        assert!(Assertion::new().verify("s", &result, &ns).is_err());
        assert!(Assertion::new()
            .error("x")
            .verify("s", &Ok(BuildSummary::default()), &ns)
            .is_err());
    }
}
