use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};

use dialoguer::{theme::ColorfulTheme, Input, Select};

use playgen_core::{Result, ScaffoldError};

use crate::questions::{Question, QuestionKind};

/// How answers reach the collector. The interactive implementation talks to
/// the terminal; the scripted one drives tests.
pub trait UserPrompt {
    fn ask(&self, question: &Question) -> Result<String>;
}

pub struct DialoguerPrompt {
    theme: ColorfulTheme,
}

impl DialoguerPrompt {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for DialoguerPrompt {
    fn default() -> Self {
        Self::new()
    }
}

impl UserPrompt for DialoguerPrompt {
    fn ask(&self, question: &Question) -> Result<String> {
        match &question.kind {
            QuestionKind::Input => {
                let mut input = Input::<String>::with_theme(&self.theme)
                    .with_prompt(question.message)
                    .allow_empty(true);
                if let Some(default) = &question.default {
                    input = input.default(default.clone());
                }
                input
                    .interact_text()
                    .map_err(|e| ScaffoldError::Prompt(e.to_string()))
            }
            QuestionKind::Select { choices, default } => {
                let selection = Select::with_theme(&self.theme)
                    .with_prompt(question.message)
                    .items(choices)
                    .default(*default)
                    .interact()
                    .map_err(|e| ScaffoldError::Prompt(e.to_string()))?;
                Ok(choices[selection].to_string())
            }
        }
    }
}

/// Answers questions from a prepared script, keyed by config key. A key
/// with no scripted answer left falls back to the question's default, as a
/// user pressing enter would; a defaultless question with an exhausted
/// script is an error so a broken test cannot loop forever.
pub struct ScriptedPrompt {
    answers: RefCell<HashMap<String, VecDeque<String>>>,
    asked: RefCell<Vec<String>>,
}

impl ScriptedPrompt {
    pub fn new() -> Self {
        Self {
            answers: RefCell::new(HashMap::new()),
            asked: RefCell::new(Vec::new()),
        }
    }

    pub fn with_answer(self, key: &str, answer: &str) -> Self {
        self.answers
            .borrow_mut()
            .entry(key.to_string())
            .or_default()
            .push_back(answer.to_string());
        self
    }

    /// Keys asked so far, in order, repeats included.
    pub fn asked(&self) -> Vec<String> {
        self.asked.borrow().clone()
    }

    pub fn was_asked(&self, key: &str) -> bool {
        self.asked.borrow().iter().any(|k| k == key)
    }

    pub fn times_asked(&self, key: &str) -> usize {
        self.asked.borrow().iter().filter(|k| *k == key).count()
    }
}

impl Default for ScriptedPrompt {
    fn default() -> Self {
        Self::new()
    }
}

impl UserPrompt for ScriptedPrompt {
    fn ask(&self, question: &Question) -> Result<String> {
        self.asked.borrow_mut().push(question.key.to_string());

        if let Some(queue) = self.answers.borrow_mut().get_mut(question.key) {
            if let Some(answer) = queue.pop_front() {
                return Ok(answer);
            }
        }

        match &question.kind {
            QuestionKind::Input => match &question.default {
                Some(default) => Ok(default.clone()),
                None => Err(ScaffoldError::ScriptExhausted(question.key.to_string())),
            },
            QuestionKind::Select { choices, default } => Ok(choices[*default].to_string()),
        }
    }
}
