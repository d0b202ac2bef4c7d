//! Loader for step-marked fixture files.
//!
//! Splits a namespace file into steps at `#-- step_name` lines.

use std::collections::HashMap;

use crate::error::{ScenarioError, ScenarioResult};

const STEP_MARKER: &str = "#--";

/// A fixture file split into named steps.
#[derive(Debug, Clone, Default)]
pub struct Steps {
    /// Map of step name to namespace file text.
    steps: HashMap<String, String>,
    /// Steps in order of appearance.
    order: Vec<String>,
}

impl Steps {
    /// Split fixture text into steps.
    ///
    /// Lines before the first marker are ignored. Line breaks are kept as-is
    /// so a step's text is itself a valid namespace file.
    pub fn parse(source: &str) -> ScenarioResult<Self> {
        let mut steps = Self::default();
        let mut current: Option<String> = None;
        let mut body = String::new();

        for line in source.lines() {
            if let Some(suffix) = line.strip_prefix(STEP_MARKER) {
                if let Some(name) = current.take() {
                    steps.insert(name, std::mem::take(&mut body))?;
                }
                let name = suffix.trim();
                if name.is_empty() {
                    return Err(ScenarioError::fixture_parse(
                        "<inline>",
                        format!("empty step name after {}", STEP_MARKER),
                    ));
                }
                current = Some(name.to_string());
                continue;
            }
            if current.is_some() {
                body.push_str(line);
                body.push('\n');
            }
        }
        if let Some(name) = current {
            steps.insert(name, body)?;
        }

        Ok(steps)
    }

    fn insert(&mut self, name: String, body: String) -> ScenarioResult<()> {
        if self.steps.contains_key(&name) {
            return Err(ScenarioError::fixture_parse(
                "<inline>",
                format!("duplicate step '{}'", name),
            ));
        }
        self.order.push(name.clone());
        self.steps.insert(name, body);
        Ok(())
    }

    /// Get a step's namespace file text.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.steps.get(name).map(String::as_str)
    }

    /// Step names in file order.
    pub fn names(&self) -> &[String] {
        &self.order
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_on_markers() {
        let source = "\
# header comment
#-- first
bind /a /b

#-- second
clear
";
        let steps = Steps::parse(source).unwrap();

        assert_eq!(steps.names(), &["first".to_string(), "second".to_string()]);
        assert_eq!(steps.get("first"), Some("bind /a /b\n\n"));
        assert_eq!(steps.get("second"), Some("clear\n"));
        assert_eq!(steps.get("third"), None);
    }

    #[test]
    fn test_empty_step_name() {
        assert!(Steps::parse("#--   \nclear\n").is_err());
    }

    #[test]
    fn test_duplicate_step_name() {
        assert!(Steps::parse("#-- a\nclear\n#-- a\nclear\n").is_err());
    }
}
