use crate::ui::cli::drivers::PromptDriver;
use anyhow::{Result, bail};
use std::cell::RefCell;
use std::collections::VecDeque;

#[derive(Debug, Clone, PartialEq)]
pub enum Answer {
    Text(String),
    U64(u64),
    Choice(usize),
}

/// Replays canned answers, or accepts every offered default.
#[derive(Default)]
pub struct ScriptedDriver {
    answers: RefCell<VecDeque<Answer>>,
    use_defaults: bool,
    asked: RefCell<Vec<String>>,
    u64_defaults: RefCell<Vec<u64>>,
    u64_minimums: RefCell<Vec<Option<u64>>>,
}

impl ScriptedDriver {
    pub fn new(answers: Vec<Answer>) -> Self {
        Self {
            answers: RefCell::new(answers.into()),
            ..Self::default()
        }
    }

    pub fn accepting_defaults() -> Self {
        Self {
            use_defaults: true,
            ..Self::default()
        }
    }

    pub fn asked(&self) -> Vec<String> {
        self.asked.borrow().clone()
    }
    pub fn offered_u64_defaults(&self) -> Vec<u64> {
        self.u64_defaults.borrow().clone()
    }
    pub fn offered_u64_minimums(&self) -> Vec<Option<u64>> {
        self.u64_minimums.borrow().clone()
    }

    fn next(&self, title: &str) -> Result<Answer> {
        self.asked.borrow_mut().push(title.to_string());
        match self.answers.borrow_mut().pop_front() {
            Some(a) => Ok(a),
            None => bail!("script exhausted at '{title}'"),
        }
    }
}

impl PromptDriver for ScriptedDriver {
    fn ask_string(&self, title: &str, _help: &str, default: &str) -> Result<String> {
        if self.use_defaults {
            self.asked.borrow_mut().push(title.to_string());
            return Ok(default.to_string());
        }
        match self.next(title)? {
            Answer::Text(s) => Ok(s),
            other => bail!("'{title}' expected text, script has {other:?}"),
        }
    }

    fn ask_u64(
        &self,
        title: &str,
        _help: &str,
        default: u64,
        min: Option<u64>,
        _max: Option<u64>,
    ) -> Result<u64> {
        self.u64_defaults.borrow_mut().push(default);
        self.u64_minimums.borrow_mut().push(min);
        if self.use_defaults {
            self.asked.borrow_mut().push(title.to_string());
            return Ok(default);
        }
        match self.next(title)? {
            Answer::U64(n) => Ok(n),
            other => bail!("'{title}' expected an integer, script has {other:?}"),
        }
    }

    fn ask_choice(
        &self,
        title: &str,
        _help: &str,
        _options: &[String],
        default: usize,
    ) -> Result<usize> {
        if self.use_defaults {
            self.asked.borrow_mut().push(title.to_string());
            return Ok(default);
        }
        match self.next(title)? {
            Answer::Choice(i) => Ok(i),
            other => bail!("'{title}' expected a choice, script has {other:?}"),
        }
    }
}
