//! Blocking user interaction, as a capability the UI provides.
//!
//! The core never talks to a terminal or a dialog directly. Delete asks
//! [`Prompter::confirm`]; a rejected URL is reported through
//! [`Prompter::notify`].

pub trait Prompter {
    /// Ask a yes/no question. `true` means go ahead.
    fn confirm(&mut self, message: &str) -> bool;

    /// Tell the user something went wrong.
    fn notify(&mut self, message: &str);
}

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::Prompter;
    use std::collections::VecDeque;

    /// Replays queued answers and records everything it was asked or told.
    #[derive(Debug, Default)]
    pub struct ScriptedPrompter {
        answers: VecDeque<bool>,
        pub questions: Vec<String>,
        pub notices: Vec<String>,
    }

    impl ScriptedPrompter {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn answering(answers: &[bool]) -> Self {
            Self {
                answers: answers.iter().copied().collect(),
                ..Self::default()
            }
        }
    }

    impl Prompter for ScriptedPrompter {
        fn confirm(&mut self, message: &str) -> bool {
            self.questions.push(message.to_string());
            self.answers.pop_front().unwrap_or(false)
        }

        fn notify(&mut self, message: &str) {
            self.notices.push(message.to_string());
        }
    }
}
