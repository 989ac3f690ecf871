use dialoguer::theme::ColorfulTheme;
use dialoguer::Input;
use primer::form::Prompter;
use primer::PrimerResult;

/// Prompts on an interactive terminal.
#[derive(Default)]
pub struct DialoguerPrompter {
    theme: ColorfulTheme,
}

impl Prompter for DialoguerPrompter {
    fn ask(&mut self, question: &str) -> PrimerResult<String> {
        let answer = Input::<String>::with_theme(&self.theme)
            .with_prompt(question)
            .allow_empty(true)
            .interact_text()?;
        Ok(answer)
    }
}
