use heck::ToKebabCase;

use playgen_core::{keys, ConfigStore, Result};

use crate::prompt::UserPrompt;

pub const PLAY_APP: &str = "Play rest App";
pub const REACTIVE_PLAY_APP: &str = "ReactiveMongo Play rest App";

#[derive(Debug, Clone)]
pub enum QuestionKind {
    /// Free-text input.
    Input,
    /// Single choice from a fixed list; `default` indexes into `choices`.
    Select {
        choices: Vec<&'static str>,
        default: usize,
    },
}

/// One prompt definition: the config key it writes, how it is asked, and
/// how the raw answer is normalized before storage.
#[derive(Debug, Clone)]
pub struct Question {
    pub key: &'static str,
    pub message: &'static str,
    pub kind: QuestionKind,
    pub default: Option<String>,
    pub filter: Option<fn(&str) -> String>,
}

impl Question {
    fn input(key: &'static str, message: &'static str) -> Self {
        Self {
            key,
            message,
            kind: QuestionKind::Input,
            default: None,
            filter: None,
        }
    }

    fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }

    fn with_filter(mut self, filter: fn(&str) -> String) -> Self {
        self.filter = Some(filter);
        self
    }
}

pub fn kebab(value: &str) -> String {
    value.to_kebab_case()
}

/// The full ordered question sequence. `dest_name` seeds the project-name
/// default; `default_author` comes from the stored git identity.
pub fn question_table(dest_name: &str, default_author: &str) -> Vec<Question> {
    vec![
        Question {
            key: keys::APP_TYPE,
            message: "What type of project are you bootstrapping?",
            kind: QuestionKind::Select {
                choices: vec![PLAY_APP, REACTIVE_PLAY_APP],
                default: 0,
            },
            default: None,
            filter: None,
        },
        Question::input(keys::APP_NAME, "What would you like to call your project?")
            .with_default(kebab(dest_name))
            .with_filter(kebab),
        Question::input(keys::APP_DESCRIPTION, "How would you describe your project?")
            .with_default("Test project"),
        Question::input(keys::APP_AUTHOR, "What is your GitHub name <email>?")
            .with_default(default_author),
        // The port is stored raw; it only has to be non-empty.
        Question::input(
            keys::PORT_NUMBER,
            "On what port number would you like to run this project?",
        ),
        Question::input(keys::PLAY_VERSION, "Which version of Play! do you want to use?")
            .with_default("2.5.3"),
        Question::input(keys::SCALA_VERSION, "Which version of Scala do you want to use?")
            .with_default("2.11.8"),
        Question {
            key: keys::LANGUAGE,
            message: "Which language do you want to use to code your application?",
            kind: QuestionKind::Select {
                choices: vec!["PlayScala", "PlayJava"],
                default: 0,
            },
            default: None,
            filter: None,
        },
        Question::input(keys::SBT_VERSION, "Which version of sbt do you want to use?")
            .with_default("0.13.11"),
        Question::input(keys::LANGS, "Supported langs?").with_default("en"),
    ]
}

/// Keeps every question whose key is not already resolved in the store.
/// Filtering by key identity rather than position means a rerun skips all
/// previously answered questions, not just the leading ones.
pub fn unanswered(questions: Vec<Question>, store: &ConfigStore) -> Vec<Question> {
    questions
        .into_iter()
        .filter(|q| !store.is_set(q.key))
        .collect()
}

/// Asks each question in order and merges the answers into the store.
/// An empty answer is rejected and the same question is asked again; a key
/// that gained a value in the meantime is never overwritten.
pub fn collect(
    questions: &[Question],
    prompt: &impl UserPrompt,
    store: &mut ConfigStore,
) -> Result<()> {
    for question in questions {
        let answer = loop {
            let raw = prompt.ask(question)?;
            let normalized = match question.filter {
                Some(filter) => filter(&raw),
                None => raw,
            };
            if !normalized.trim().is_empty() {
                break normalized;
            }
        };
        store.set_if_unset(question.key, answer);
    }
    Ok(())
}
