use colored::Colorize;
use console::Term;
use linkshelf::prompt::Prompter;

/// Asks on the terminal. With `assume_yes`, every question is answered yes.
pub struct TermPrompter {
    term: Term,
    assume_yes: bool,
}

impl TermPrompter {
    pub fn new(assume_yes: bool) -> Self {
        Self {
            term: Term::stderr(),
            assume_yes,
        }
    }
}

impl Prompter for TermPrompter {
    fn confirm(&mut self, message: &str) -> bool {
        if self.assume_yes {
            return true;
        }
        if self.term.write_str(&format!("{} [y/N] ", message)).is_err() {
            return false;
        }
        match self.term.read_line() {
            Ok(answer) => matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"),
            Err(e) => {
                tracing::warn!(error = %e, "could not read confirmation");
                false
            }
        }
    }

    fn notify(&mut self, message: &str) {
        let _ = self.term.write_line(&message.red().to_string());
    }
}
