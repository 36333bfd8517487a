use crate::ui::cli::drivers::PromptDriver;
use anyhow::{Result, anyhow, bail};
use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};

#[derive(Debug, Clone)]
enum Answer {
    Flag(bool),
    Text(String),
    Number(u64),
    Choose(String),
}

/// [`PromptDriver`] answering from per-title scripts.
///
/// Answers for one title are consumed in order. A title that was never
/// scripted gets the prompt's default; a scripted title whose answers ran
/// out is an error, so retry loops cannot spin forever.
#[derive(Default)]
pub struct ScriptedDriver {
    answers: RefCell<HashMap<String, VecDeque<Answer>>>,
}

impl ScriptedDriver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn flag(self, title: &str, value: bool) -> Self {
        self.push(title, Answer::Flag(value))
    }

    pub fn text(self, title: &str, value: &str) -> Self {
        self.push(title, Answer::Text(value.to_string()))
    }

    pub fn number(self, title: &str, value: u64) -> Self {
        self.push(title, Answer::Number(value))
    }

    /// Picks the option whose text is `option`.
    pub fn choose(self, title: &str, option: &str) -> Self {
        self.push(title, Answer::Choose(option.to_string()))
    }

    pub fn is_exhausted(&self) -> bool {
        self.answers.borrow().values().all(VecDeque::is_empty)
    }

    fn push(self, title: &str, answer: Answer) -> Self {
        self.answers
            .borrow_mut()
            .entry(title.to_string())
            .or_default()
            .push_back(answer);
        self
    }

    fn next(&self, title: &str) -> Result<Option<Answer>> {
        match self.answers.borrow_mut().get_mut(title) {
            None => Ok(None),
            Some(queue) => queue
                .pop_front()
                .map(Some)
                .ok_or_else(|| anyhow!("no scripted answer left for `{title}`")),
        }
    }
}

impl PromptDriver for ScriptedDriver {
    fn ask_bool(&self, title: &str, _help: &str, default: bool) -> Result<bool> {
        match self.next(title)? {
            None => Ok(default),
            Some(Answer::Flag(v)) => Ok(v),
            Some(other) => bail!("`{title}` expects a flag, scripted {other:?}"),
        }
    }

    fn ask_string(&self, title: &str, _help: &str, default: &str) -> Result<String> {
        match self.next(title)? {
            None => Ok(default.to_string()),
            Some(Answer::Text(v)) => Ok(v),
            Some(other) => bail!("`{title}` expects text, scripted {other:?}"),
        }
    }

    fn ask_u64(
        &self,
        title: &str,
        _help: &str,
        default: u64,
        min: Option<u64>,
        max: Option<u64>,
    ) -> Result<u64> {
        let v = match self.next(title)? {
            None => default,
            Some(Answer::Number(v)) => v,
            Some(other) => bail!("`{title}` expects a number, scripted {other:?}"),
        };
        if min.is_some_and(|lo| v < lo) || max.is_some_and(|hi| v > hi) {
            bail!("`{title}`: {v} is out of range");
        }
        Ok(v)
    }

    fn ask_select(&self, title: &str, _help: &str, options: &[String], default: usize) -> Result<usize> {
        match self.next(title)? {
            None => Ok(default),
            Some(Answer::Choose(v)) => options
                .iter()
                .position(|o| *o == v)
                .ok_or_else(|| anyhow!("`{title}` has no option `{v}`")),
            Some(other) => bail!("`{title}` expects a choice, scripted {other:?}"),
        }
    }
}
