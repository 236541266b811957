use crate::domain::ports::ChatService;
use serde::Serialize;

pub const GREETING: &str =
    "Hi! I'm Verdie 🌿. Ask me about organic food benefits or healthy recipes!";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Bot,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Message {
    pub id: usize,
    pub role: Role,
    pub text: String,
}

/// Conversation shown in the chat widget, oldest first.
#[derive(Debug, Clone)]
pub struct ChatTranscript {
    messages: Vec<Message>,
}

impl Default for ChatTranscript {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatTranscript {
    pub fn new() -> Self {
        Self {
            messages: vec![Message {
                id: 1,
                role: Role::Bot,
                text: GREETING.to_string(),
            }],
        }
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Sends `input` and records the reply. Blank input is ignored and
    /// returns `None`.
    pub async fn send<S: ChatService + ?Sized>(&mut self, service: &S, input: &str) -> Option<&Message> {
        if input.trim().is_empty() {
            return None;
        }

        self.push(Role::User, input.to_string());
        let reply = service.reply(input, None).await;
        self.push(Role::Bot, reply);
        self.messages.last()
    }

    fn push(&mut self, role: Role, text: String) {
        let id = self.messages.len() + 1;
        self.messages.push(Message { id, role, text });
    }
}
