use dialoguer::{Input, theme::ColorfulTheme};

/// Abstraction over a string input prompt.
///
/// Implementors define how string input is collected from the user,
/// including any styling or interactivity. This trait enables testability
/// by decoupling user input from the logic that consumes it.
pub trait StringPrompter {
    /// Prompt the user for a string input.
    ///
    /// # Parameters
    /// - `prompt`: The message shown to the user.
    /// - `default`: Default value if the user presses Enter without input.
    ///
    /// # Returns
    /// `Ok(String)` if input is successfully collected, or an `Err(String)` describing the failure.
    fn prompt(&mut self, prompt: &str, default: &str) -> Result<String, String>;
}

/// Default implementation of `StringPrompter` using `dialoguer::Input`.
///
/// Uses the `ColorfulTheme` for user-friendly styling.
pub struct DialoguerStringPrompter;

impl StringPrompter for DialoguerStringPrompter {
    fn prompt(&mut self, prompt: &str, default: &str) -> Result<String, String> {
        let theme = ColorfulTheme::default();
        let input = Input::<String>::with_theme(&theme)
            .with_prompt(prompt)
            .default(default.to_string());
        match input.interact_text() {
            Ok(v) => Ok(v),
            Err(e) => Err(e.to_string()),
        }
    }
}

/// Prompt the user for an input string, showing an example value.
///
/// Wraps the `StringPrompter` trait and constructs a prompt of the form:
/// `"Path to the Git repository (e.g., ./my-project)"`. The collected
/// value is returned verbatim; callers trim as needed.
///
/// # Parameters
/// - `prompter`: A mutable reference to a `StringPrompter` implementation.
/// - `label`: A short description of what is being requested (e.g., `"Git remote URL"`).
/// - `example`: A sample value shown for context.
///
/// # Returns
/// - `Ok(String)` containing user input.
/// - `Err(String)` if the input could not be collected.
pub fn ask<P: StringPrompter>(
    prompter: &mut P,
    label: &str,
    example: &str,
) -> Result<String, String> {
    let prompt = format!("{} (e.g., {})", label, example);
    prompter.prompt(&prompt, "")
}

#[cfg(test)]
mod tests {
    use super::*;

    struct MockStringPrompter {
        pub response: Result<String, String>,
        pub expected_prompt: String,
        pub expected_default: String,
    }

    impl StringPrompter for MockStringPrompter {
        fn prompt(&mut self, prompt: &str, default: &str) -> Result<String, String> {
            assert_eq!(prompt, self.expected_prompt);
            assert_eq!(default, self.expected_default);
            self.response.clone()
        }
    }

    #[test]
    fn test_ask_returns_user_input() {
        let mut prompter = MockStringPrompter {
            response: Ok("./my-project".to_string()),
            expected_prompt: "Path to the Git repository (e.g., ./my-project)".to_string(),
            expected_default: "".to_string(),
        };
        let result = ask(&mut prompter, "Path to the Git repository", "./my-project");
        assert_eq!(result.unwrap(), "./my-project");
    }

    #[test]
    fn test_ask_embeds_example_in_prompt() {
        let mut prompter = MockStringPrompter {
            response: Ok("index.js".to_string()),
            expected_prompt: "Main file to commit first (e.g., index.js)".to_string(),
            expected_default: "".to_string(),
        };
        let result = ask(&mut prompter, "Main file to commit first", "index.js");
        assert_eq!(result.unwrap(), "index.js");
    }

    #[test]
    fn test_ask_returns_empty_input() {
        let mut prompter = MockStringPrompter {
            response: Ok("".to_string()),
            expected_prompt: "Git remote URL (e.g., https://example.com/repo.git)".to_string(),
            expected_default: "".to_string(),
        };
        let result = ask(&mut prompter, "Git remote URL", "https://example.com/repo.git");
        assert_eq!(result.unwrap(), "");
    }

    #[test]
    fn test_ask_returns_error() {
        let mut prompter = MockStringPrompter {
            response: Err("input failed".to_string()),
            expected_prompt: "Label (e.g., sample)".to_string(),
            expected_default: "".to_string(),
        };
        let result = ask(&mut prompter, "Label", "sample");
        assert!(result.is_err());
    }
}
