//! In-memory chat transcript and the per-submission state machine.
//!
//! `Idle -> Sending -> Idle`: [`ChatSession::submit`] moves to `Sending`,
//! [`ChatSession::complete`] records the outcome and returns to `Idle`.

use crate::api::ChatFailure;
use crate::models::Message;
use thiserror::Error;

/// Longest message the relay accepts, in characters.
pub const MAX_MESSAGE_CHARS: usize = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SendState {
    #[default]
    Idle,
    Sending,
}

/// Input rejected locally, before any network call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("Please enter a message.")]
    Empty,

    #[error(
        "Message is too long ({chars} characters, maximum is {max}).",
        max = MAX_MESSAGE_CHARS
    )]
    TooLong { chars: usize },

    #[error("Please wait for the current response.")]
    Busy,
}

#[derive(Debug, Default)]
pub struct ChatSession {
    messages: Vec<Message>,
    state: SendState,
    banner: Option<String>,
}

impl ChatSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn state(&self) -> SendState {
        self.state
    }

    /// While sending, the submit control is disabled and a thinking indicator shows.
    pub fn is_sending(&self) -> bool {
        self.state == SendState::Sending
    }

    /// Error text from the last failed submission, until the next one starts.
    pub fn banner(&self) -> Option<&str> {
        self.banner.as_deref()
    }

    /// Validate `input`, append it as a user message and enter `Sending`.
    ///
    /// Returns the trimmed text to send to the relay.
    pub fn submit(&mut self, input: &str) -> Result<String, InputError> {
        if self.is_sending() {
            return Err(InputError::Busy);
        }

        let chars = input.chars().count();
        if chars > MAX_MESSAGE_CHARS {
            return Err(InputError::TooLong { chars });
        }

        let text = input.trim();
        if text.is_empty() {
            return Err(InputError::Empty);
        }

        self.messages.push(Message::user(text));
        self.banner = None;
        self.state = SendState::Sending;

        Ok(text.to_string())
    }

    /// Record the relay outcome as an ai message and return to `Idle`.
    pub fn complete(&mut self, outcome: Result<String, ChatFailure>) -> &Message {
        let message = match outcome {
            Ok(reply) => Message::ai(reply),
            Err(failure) => {
                let text = failure.to_string();
                self.banner = Some(text.clone());
                Message::ai(text)
            }
        };

        self.state = SendState::Idle;
        self.messages.push(message);
        &self.messages[self.messages.len() - 1]
    }

    /// Drop the transcript and banner. The send state is left alone, so a
    /// request already in flight still lands in the emptied transcript.
    pub fn clear(&mut self) {
        self.messages.clear();
        self.banner = None;
    }
}
