use crate::domain::errors::OpsError;
use dialoguer::Confirm;

/// Port for interactive yes/no questions.
pub trait Prompter {
    fn confirm(&self, prompt: &str) -> Result<bool, OpsError>;
}

/// Asks on the terminal, defaulting to no. Escape, or no terminal at all,
/// counts as a decline.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn confirm(&self, prompt: &str) -> Result<bool, OpsError> {
        let answer = Confirm::new()
            .with_prompt(prompt)
            .default(false)
            .interact_opt();
        Ok(decision(prompt, answer))
    }
}

fn decision(prompt: &str, answer: dialoguer::Result<Option<bool>>) -> bool {
    match answer {
        Ok(choice) => choice.unwrap_or(false),
        Err(err) => {
            tracing::warn!(prompt, error = %err, "cannot ask interactively; treating as no (pass --yes to confirm)");
            false
        }
    }
}

/// Backs `--yes`.
#[derive(Debug, Default, Clone, Copy)]
pub struct AssumeYes;

impl Prompter for AssumeYes {
    fn confirm(&self, prompt: &str) -> Result<bool, OpsError> {
        tracing::info!(prompt, "auto-confirmed");
        Ok(true)
    }
}
