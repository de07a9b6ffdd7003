use std::collections::HashMap;

use crate::domain::naming::ArtifactName;

/// Context for placeholder substitution.
///
/// A **Value Object** holding every variable a blueprint or starter file may
/// reference. Immutable after creation (see `with_variable`).
///
/// ## Built-in Variables
///
/// | Variable       | Example         | Source                       |
/// |----------------|-----------------|------------------------------|
/// | `SELECTOR`     | "user-profile"  | [`RenderContext::for_artifact`] |
/// | `CLASSNAME`    | "UserProfile"   | [`RenderContext::for_artifact`] |
/// | `PIPENAME`     | "userProfile"   | [`RenderContext::for_artifact`] |
/// | `PROJECT_NAME` | "my-app"        | [`RenderContext::for_project`]  |
#[derive(Debug, Clone, Default)]
pub struct RenderContext {
    variables: HashMap<String, String>,
}

impl RenderContext {
    /// Variables for rendering one artifact blueprint.
    pub fn for_artifact(name: &ArtifactName) -> Self {
        Self::default()
            .with_variable("SELECTOR", name.selector())
            .with_variable("CLASSNAME", name.class_name())
            .with_variable("PIPENAME", name.pipe_name())
    }

    /// Variables for rendering starter-project files.
    pub fn for_project(project_name: impl Into<String>) -> Self {
        Self::default().with_variable("PROJECT_NAME", project_name)
    }

    /// Add a custom variable, consuming self and returning a new context.
    pub fn with_variable(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.variables.insert(key.into(), value.into());
        self
    }

    /// Get a variable value if it exists.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(|s| s.as_str())
    }

    /// Render a template string by replacing `{{VARIABLE}}` placeholders.
    ///
    /// - `{{UNKNOWN}}` → remains as literal `{{UNKNOWN}}` (no error)
    /// - `{{SELECTOR}}{{SELECTOR}}` → both replaced
    pub fn render(&self, template: &str) -> String {
        let mut result = template.to_string();

        for (key, value) in &self.variables {
            let placeholder = format!("{{{{{key}}}}}");
            result = result.replace(&placeholder, value);
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn artifact_variables() {
        let name = ArtifactName::parse("user-profile").unwrap();
        let ctx = RenderContext::for_artifact(&name);

        assert_eq!(ctx.get("SELECTOR"), Some("user-profile"));
        assert_eq!(ctx.get("CLASSNAME"), Some("UserProfile"));
        assert_eq!(ctx.get("PIPENAME"), Some("userProfile"));
    }

    #[test]
    fn renders_repeated_and_unknown_placeholders() {
        let ctx = RenderContext::for_project("my-app");
        assert_eq!(
            ctx.render("{{PROJECT_NAME}}/{{PROJECT_NAME}} {{UNKNOWN}}"),
            "my-app/my-app {{UNKNOWN}}"
        );
    }
}
