//! Test generators — deterministic `TextGenerator` and `ImageGenerator`
//! implementations for tests.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use gaslamp_core::generator::{GeneratorError, ImageGenerator, TextGenerator};

/// A text generator that replays a queue of canned replies and records every
/// prompt it was given. Once the queue is exhausted it keeps returning the
/// last reply, so handlers that make a variable number of calls still get an
/// answer.
#[derive(Debug)]
pub struct ScriptedGenerator {
    replies: Mutex<VecDeque<String>>,
    last: Mutex<String>,
    fail_when_exhausted: bool,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedGenerator {
    /// A generator that will answer with `replies` in order.
    ///
    /// # Panics
    ///
    /// Panics if `replies` is empty.
    #[must_use]
    pub fn new(replies: impl IntoIterator<Item = impl Into<String>>) -> Self {
        let queue: VecDeque<String> = replies.into_iter().map(Into::into).collect();
        assert!(!queue.is_empty(), "ScriptedGenerator needs at least one reply");
        let last = queue.back().cloned().unwrap_or_default();
        Self {
            replies: Mutex::new(queue),
            last: Mutex::new(last),
            fail_when_exhausted: false,
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// A generator that answers every call with the same reply.
    #[must_use]
    pub fn always(reply: impl Into<String>) -> Self {
        Self::new([reply.into()])
    }

    /// Like [`ScriptedGenerator::new`], but calls past the end of the
    /// script fail as upstream errors instead of replaying the last reply.
    ///
    /// # Panics
    ///
    /// Panics if `replies` is empty.
    #[must_use]
    pub fn exhausting(replies: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            fail_when_exhausted: true,
            ..Self::new(replies)
        }
    }

    /// Snapshot of every prompt this generator has been asked, in order.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextGenerator for ScriptedGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, GeneratorError> {
        self.prompts.lock().unwrap().push(prompt.to_owned());
        let next = self.replies.lock().unwrap().pop_front();
        match next {
            Some(reply) => {
                *self.last.lock().unwrap() = reply.clone();
                Ok(reply)
            }
            None if self.fail_when_exhausted => Err(GeneratorError::from_status(
                500,
                "script exhausted".to_owned(),
            )),
            None => Ok(self.last.lock().unwrap().clone()),
        }
    }
}

/// A text generator that always fails with the configured error kind.
#[derive(Debug)]
pub struct FailingGenerator {
    status: u16,
}

impl FailingGenerator {
    /// Fails every call as an upstream error with the given HTTP status.
    #[must_use]
    pub fn with_status(status: u16) -> Self {
        Self { status }
    }
}

impl Default for FailingGenerator {
    fn default() -> Self {
        Self::with_status(500)
    }
}

#[async_trait]
impl TextGenerator for FailingGenerator {
    async fn generate(&self, _prompt: &str) -> Result<String, GeneratorError> {
        Err(GeneratorError::from_status(
            self.status,
            "scripted failure".to_owned(),
        ))
    }
}

/// An image generator that returns the same URL for every prompt and records
/// the prompts it saw.
#[derive(Debug)]
pub struct StaticImageGenerator {
    url: String,
    prompts: Mutex<Vec<String>>,
}

impl StaticImageGenerator {
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Snapshot of every prompt this generator has rendered, in order.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl ImageGenerator for StaticImageGenerator {
    async fn render(&self, prompt: &str) -> Result<String, GeneratorError> {
        self.prompts.lock().unwrap().push(prompt.to_owned());
        Ok(self.url.clone())
    }
}

/// An image generator that always fails with a transport error.
#[derive(Debug)]
pub struct FailingImageGenerator;

#[async_trait]
impl ImageGenerator for FailingImageGenerator {
    async fn render(&self, _prompt: &str) -> Result<String, GeneratorError> {
        Err(GeneratorError::Transport("connection reset".to_owned()))
    }
}
