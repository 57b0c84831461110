//! Canned-response generator for tests.

use std::collections::VecDeque;
use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;

use crate::{GenerationError, TextGenerator};

type Responder = Box<dyn Fn(&str) -> Result<String, GenerationError> + Send + Sync>;

enum Script {
    Queue(Mutex<VecDeque<Result<String, GenerationError>>>),
    Responder(Responder),
}

/// A [`TextGenerator`] that answers from a script and records every prompt.
pub struct ScriptedGenerator {
    script: Script,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedGenerator {
    /// Answer each call with the next queued result. An exhausted queue
    /// answers [`GenerationError::Empty`].
    pub fn queued(responses: impl IntoIterator<Item = Result<String, GenerationError>>) -> Self {
        Self {
            script: Script::Queue(Mutex::new(responses.into_iter().collect())),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Answer each call by running `responder` on the prompt.
    pub fn from_fn(
        responder: impl Fn(&str) -> Result<String, GenerationError> + Send + Sync + 'static,
    ) -> Self {
        Self {
            script: Script::Responder(Box::new(responder)),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Every prompt received so far, in order.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn calls(&self) -> usize {
        self.prompts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

#[async_trait]
impl TextGenerator for ScriptedGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        self.prompts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(prompt.to_string());

        match &self.script {
            Script::Queue(queue) => queue
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .pop_front()
                .unwrap_or_else(|| Err(GenerationError::Empty("scripted".into()))),
            Script::Responder(responder) => responder(prompt),
        }
    }
}
