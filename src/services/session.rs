// src/services/session.rs
use tracing::debug;

use crate::error::ClientError;
use crate::message::{ChatIntent, ChatRequest, ChatResponse, Message};
use crate::services::identifier::extract_employee_id;
use crate::services::transport::ChatTransport;

pub const GREETING: &str = "Hi! I can check your leave balance. You can say 'what is my annual leave?' \
     or ask for your balance directly. If you share your employee ID once (e.g., E001), \
     I'll remember it for this session.";

/// Message sent by the balance action when the input buffer is blank.
pub const BALANCE_FALLBACK: &str = "leave balance";

/// Shown when the backend answers with neither `reply` nor `error`.
pub const NO_REPLY: &str = "No reply";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Backspace,
    Enter,
    ShiftEnter,
}

#[derive(Debug)]
pub enum KeyOutcome {
    /// The buffer changed.
    Edited,
    /// Enter was pressed. Holds the request to issue, if one was started.
    Submitted(Option<PendingSend>),
    /// Input is disabled while a request is in flight.
    Ignored,
}

/// A request that has been started but not yet applied to the transcript.
#[derive(Debug)]
#[must_use = "a pending send keeps the session loading until completed"]
pub struct PendingSend {
    request: ChatRequest,
}

impl PendingSend {
    pub fn request(&self) -> &ChatRequest {
        &self.request
    }
}

/// Client-side conversation state: transcript, input buffer, remembered
/// identifier and the single in-flight guard.
#[derive(Clone, Debug)]
pub struct ChatSession {
    messages: Vec<Message>,
    input: String,
    remembered_id: Option<String>,
    loading: bool,
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatSession {
    pub fn new() -> Self {
        Self {
            messages: vec![Message::assistant(GREETING)],
            input: String::new(),
            remembered_id: None,
            loading: false,
        }
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    pub fn remembered_id(&self) -> Option<&str> {
        self.remembered_id.as_deref()
    }

    pub fn clear_remembered_id(&mut self) {
        self.remembered_id = None;
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn handle_key(&mut self, key: Key) -> KeyOutcome {
        if self.loading {
            return KeyOutcome::Ignored;
        }
        match key {
            Key::Enter => KeyOutcome::Submitted(self.begin_send()),
            Key::ShiftEnter => {
                self.input.push('\n');
                KeyOutcome::Edited
            }
            Key::Char(c) => {
                self.input.push(c);
                KeyOutcome::Edited
            }
            Key::Backspace => {
                self.input.pop();
                KeyOutcome::Edited
            }
        }
    }

    /// Starts a free-text send. Returns `None` when busy or the input is blank.
    pub fn begin_send(&mut self) -> Option<PendingSend> {
        if self.loading {
            return None;
        }
        let text = self.input.trim().to_string();
        if text.is_empty() {
            return None;
        }
        Some(self.start(text, None))
    }

    /// Starts a balance request, using the fallback text for a blank input.
    pub fn begin_balance(&mut self) -> Option<PendingSend> {
        if self.loading {
            return None;
        }
        let text = match self.input.trim() {
            "" => BALANCE_FALLBACK.to_string(),
            t => t.to_string(),
        };
        Some(self.start(text, Some(ChatIntent::Balance)))
    }

    fn start(&mut self, text: String, intent: Option<ChatIntent>) -> PendingSend {
        self.messages.push(Message::user(text.clone()));
        self.input.clear();
        self.loading = true;

        if let Some(id) = extract_employee_id(&text) {
            debug!(employee_id = %id, "remembering employee id");
            self.remembered_id = Some(id);
        }

        PendingSend {
            request: ChatRequest {
                message: text,
                employee_id: self.remembered_id.clone(),
                intent,
            },
        }
    }

    /// Applies the outcome of a pending send and returns to idle.
    ///
    /// `pending` must come from `begin_send`/`begin_balance` on this session.
    pub fn complete(&mut self, pending: PendingSend, outcome: Result<ChatResponse, ClientError>) {
        debug_assert!(
            self.loading,
            "completed {:?} on a session with no request in flight",
            pending.request.message
        );
        let text = match outcome {
            Ok(ChatResponse { reply, error }) => {
                reply.or(error).unwrap_or_else(|| NO_REPLY.to_string())
            }
            Err(e) => format!("Error: {e}"),
        };
        self.messages.push(Message::assistant(text));
        self.loading = false;
    }

    /// Runs one full send cycle. Returns `false` if nothing was sent.
    pub async fn send<T: ChatTransport + ?Sized>(&mut self, transport: &T) -> bool {
        match self.begin_send() {
            Some(pending) => {
                self.dispatch(pending, transport).await;
                true
            }
            None => false,
        }
    }

    /// Runs one full balance cycle. Returns `false` if a request is in flight.
    pub async fn request_balance<T: ChatTransport + ?Sized>(&mut self, transport: &T) -> bool {
        match self.begin_balance() {
            Some(pending) => {
                self.dispatch(pending, transport).await;
                true
            }
            None => false,
        }
    }

    pub async fn dispatch<T: ChatTransport + ?Sized>(&mut self, pending: PendingSend, transport: &T) {
        let outcome = transport.post(pending.request()).await;
        self.complete(pending, outcome);
    }
}
