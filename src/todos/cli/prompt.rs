use dialoguer::Input;
use todos::error::{Result, TodoError};

const EMPTY_TODO: &str = "Empty to-dos are not allowed";

fn validate_title(input: &String) -> std::result::Result<(), &'static str> {
    if input.is_empty() {
        Err(EMPTY_TODO)
    } else {
        Ok(())
    }
}

/// Asks for a to-do title, re-prompting until a non-empty one is given.
pub(super) fn ask_title() -> Result<String> {
    Input::<String>::new()
        .with_prompt("What is your to-do?")
        .validate_with(validate_title)
        .interact_text()
        .map_err(|e| TodoError::Prompt(e.to_string()))
}
