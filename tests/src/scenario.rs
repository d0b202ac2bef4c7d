//! Scenario definition and builder.

use std::fs;
use std::path::{Path, PathBuf};

use crate::assertion::Assertion;
use crate::error::{ScenarioError, ScenarioResult};
use crate::loader::Steps;
use crate::runner::Runner;

/// A step in a scenario with its assertion.
#[derive(Debug)]
pub struct Step {
    /// Step name (matches `#-- name` in the fixture).
    pub name: String,
    pub assertion: Assertion,
}

/// A complete test scenario.
pub struct Scenario {
    /// Scenario name (for reporting).
    name: String,
    /// Fixture file, relative to the fixtures directory.
    fixture: Option<PathBuf>,
    /// Parsed steps (if loaded inline).
    source: Option<Steps>,
    steps: Vec<Step>,
    /// Directory fixtures and their includes are resolved against.
    base_dir: PathBuf,
}

impl Scenario {
    /// Create a new scenario with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fixture: None,
            source: None,
            steps: Vec::new(),
            base_dir: fixtures_dir(),
        }
    }

    /// Set the directory fixtures and includes are resolved against.
    pub fn base_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.base_dir = dir.into();
        self
    }

    /// Set the fixture file (relative to the fixtures directory).
    pub fn fixture(mut self, path: impl Into<PathBuf>) -> Self {
        self.fixture = Some(path.into());
        self
    }

    /// Load steps from a string instead of a fixture file.
    pub fn source(mut self, source: &str) -> ScenarioResult<Self> {
        self.source = Some(Steps::parse(source)?);
        Ok(self)
    }

    /// Add a step with an assertion.
    ///
    /// Steps run in the order they are added, not the order of the fixture.
    pub fn step<F>(mut self, name: impl Into<String>, assertion_fn: F) -> Self
    where
        F: FnOnce(Assertion) -> Assertion,
    {
        self.steps.push(Step {
            name: name.into(),
            assertion: assertion_fn(Assertion::new()),
        });
        self
    }

    /// Run the scenario.
    pub fn run(&self) -> ScenarioResult<()> {
        Runner::new(self)?.run()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn base_path(&self) -> &Path {
        &self.base_dir
    }

    /// Get the fixture steps, reading the fixture file if needed.
    pub fn load_steps(&self) -> ScenarioResult<Steps> {
        if let Some(ref steps) = self.source {
            return Ok(steps.clone());
        }

        let path = match &self.fixture {
            Some(p) => self.base_dir.join(p),
            None => return Err(ScenarioError::NoFixture),
        };
        let text = fs::read_to_string(&path).map_err(|e| ScenarioError::file_read(&path, e))?;
        Steps::parse(&text).map_err(|e| match e {
            ScenarioError::FixtureParse { message, .. } => {
                ScenarioError::fixture_parse(path.display().to_string(), message)
            }
            other => other,
        })
    }
}

/// The fixtures directory of this crate.
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/fixtures"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scenario_builder() {
        let scenario = Scenario::new("test")
            .fixture("terminal.ns")
            .step("boot", |a| a.applied(3))
            .step("devices", |a| a.applied(6));

        assert_eq!(scenario.name(), "test");
        assert_eq!(scenario.steps().len(), 2);
        assert_eq!(scenario.steps()[1].name, "devices");
        assert_eq!(scenario.base_path(), fixtures_dir().as_path());
    }

    #[test]
    fn test_missing_fixture() {
        let scenario = Scenario::new("empty");

        assert!(matches!(
            scenario.load_steps(),
            Err(ScenarioError::NoFixture)
        ));
    }
}
