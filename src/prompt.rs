//! User input and interaction handling.

use crate::error::{Error, Result};
use dialoguer::Confirm;

/// Trait for interactive confirmations.
pub trait Prompter {
    /// Asks the user a yes/no question.
    ///
    /// # Arguments
    /// * `skip` - When true the question is not asked and `true` is returned
    /// * `message` - The question shown to the user
    fn confirm(&self, skip: bool, message: String) -> Result<bool>;
}

/// Prompter backed by dialoguer.
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DialoguerPrompter {
    fn default() -> Self {
        DialoguerPrompter::new()
    }
}

impl Prompter for DialoguerPrompter {
    fn confirm(&self, skip: bool, message: String) -> Result<bool> {
        if skip {
            return Ok(true);
        }
        Confirm::new()
            .with_prompt(message)
            .default(false)
            .interact()
            .map_err(|e| Error::Prompt(e.to_string()))
    }
}
