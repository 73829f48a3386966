use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use tracing::{debug, trace};

use crate::error::{Error, Result};

/// Role for a prompt message (system, user, assistant, or caller-defined)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Role {
    /// System message
    System,
    /// User message
    User,
    /// Assistant message
    Assistant,
    /// Caller-defined role
    Custom(String),
}

impl Role {
    /// Convert the role to a string representation
    pub fn as_str(&self) -> &str {
        match self {
            Role::System => "system",
            Role::User => "user",
            Role::Assistant => "assistant",
            Role::Custom(role) => role,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for Role {
    fn from(role: &str) -> Self {
        match role {
            "system" => Role::System,
            "user" => Role::User,
            "assistant" => Role::Assistant,
            other => Role::Custom(other.to_string()),
        }
    }
}

impl From<String> for Role {
    fn from(role: String) -> Self {
        match role.as_str() {
            "system" => Role::System,
            "user" => Role::User,
            "assistant" => Role::Assistant,
            _ => Role::Custom(role),
        }
    }
}

impl Serialize for Role {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Role {
    fn deserialize<D: Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Self, D::Error> {
        Ok(Role::from(String::deserialize(deserializer)?))
    }
}

/// A single message in a prompt
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// The role of the message sender
    pub role: Role,
    /// The content of the message
    pub content: String,
}

impl Message {
    /// Create a new message with the given role and content
    pub fn new(role: impl Into<Role>, content: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            content: content.into(),
        }
    }
}

/// The message sequence wrapped in the shape chat completion APIs expect
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatPrompt {
    /// The messages in the conversation
    pub messages: Vec<Message>,
}

/// A built prompt in one of the supported output formats
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Prompt {
    /// Ordered `{role, content}` records
    Messages(Vec<Message>),
    /// One `ROLE: content` line per message
    Text(String),
    /// Chat API payload
    Chat(ChatPrompt),
}

impl Prompt {
    /// The message records, if this prompt was built as `"messages"`
    pub fn as_messages(&self) -> Option<&[Message]> {
        match self {
            Prompt::Messages(messages) => Some(messages),
            _ => None,
        }
    }

    /// The rendered text, if this prompt was built as `"string"`
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Prompt::Text(text) => Some(text),
            _ => None,
        }
    }

    /// The chat payload, if this prompt was built as `"chat"`
    pub fn as_chat(&self) -> Option<&ChatPrompt> {
        match self {
            Prompt::Chat(chat) => Some(chat),
            _ => None,
        }
    }
}

/// A flexible builder for constructing prompts for Large Language Models.
///
/// Messages are kept in insertion order, which is the conversation order.
/// Building is non-destructive; the same builder can be built in several
/// formats.
///
/// ```
/// use ezprompt::PromptBuilder;
///
/// let mut builder = PromptBuilder::new();
/// builder
///     .add_system("You are a helpful assistant.")
///     .add_user("What is the capital of France?");
/// let prompt = builder.build("messages").unwrap();
/// assert_eq!(prompt.as_messages().unwrap().len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct PromptBuilder {
    messages: Vec<Message>,
    context: HashMap<String, Value>,
}

impl PromptBuilder {
    /// Create an empty prompt builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a system message to the prompt
    pub fn add_system(&mut self, content: impl Into<String>) -> &mut Self {
        self.add_message(Role::System, content)
    }

    /// Add a user message to the prompt
    pub fn add_user(&mut self, content: impl Into<String>) -> &mut Self {
        self.add_message(Role::User, content)
    }

    /// Add an assistant message to the prompt
    pub fn add_assistant(&mut self, content: impl Into<String>) -> &mut Self {
        self.add_message(Role::Assistant, content)
    }

    /// Add a message with a caller-supplied role.
    ///
    /// Any role string is accepted; `"system"`, `"user"` and `"assistant"`
    /// map to their fixed [`Role`] variants, everything else becomes
    /// [`Role::Custom`].
    pub fn add_message(&mut self, role: impl Into<Role>, content: impl Into<String>) -> &mut Self {
        let message = Message::new(role, content);
        trace!("Appending {} message", message.role);
        self.messages.push(message);
        self
    }

    /// Set a context value on the builder.
    ///
    /// Context is caller-side bookkeeping only; it is never part of any
    /// build output.
    pub fn set_context(&mut self, key: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.context.insert(key.into(), value.into());
        self
    }

    /// Look up a context value by key
    pub fn context(&self, key: &str) -> Option<&Value> {
        self.context.get(key)
    }

    /// Remove all messages and context
    pub fn clear(&mut self) -> &mut Self {
        self.messages.clear();
        self.context.clear();
        self
    }

    /// The messages appended so far, in insertion order
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Get the last message in the prompt
    pub fn last_message(&self) -> Option<&Message> {
        self.messages.last()
    }

    /// The number of messages in the prompt
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Whether the prompt has no messages
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Build the prompt in the requested format.
    ///
    /// Supported formats are `"messages"` (ordered records), `"string"`
    /// (one upper-cased `ROLE: content` line per message) and `"chat"`
    /// (the payload shape of chat completion APIs). Any other value fails
    /// with [`Error::UnknownFormat`]. Building never mutates the builder.
    pub fn build(&self, format: &str) -> Result<Prompt> {
        let prompt = match format {
            "messages" => Prompt::Messages(self.messages.clone()),
            "string" => Prompt::Text(self.build_string()),
            "chat" => Prompt::Chat(ChatPrompt {
                messages: self.messages.clone(),
            }),
            other => return Err(Error::UnknownFormat(other.to_string())),
        };
        debug!("Built {} prompt with {} messages", format, self.messages.len());
        Ok(prompt)
    }

    fn build_string(&self) -> String {
        let parts: Vec<String> = self
            .messages
            .iter()
            .map(|message| {
                format!(
                    "{}: {}",
                    message.role.as_str().to_uppercase(),
                    message.content
                )
            })
            .collect();
        parts.join("\n")
    }
}

impl fmt::Display for PromptBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.build_string())
    }
}
