//! # Message Builder
//!
//! [MessageBuilder] accumulates an ordered sequence of role-tagged
//! [Message]s and renders it into one of three shapes via
//! [MessageBuilder::build]:
//!
//! * `"messages"` — a copy of the message sequence,
//! * `"string"` — a flattened `ROLE: content` transcript,
//! * `"chat"` — a [ChatPrompt] payload in chat-API shape.
//!
//! Roles are open strings rather than a closed enum: `system`, `user` and
//! `assistant` get dedicated helpers, and [MessageBuilder::add_message]
//! accepts any role label a downstream API understands.
//!
//! The builder also carries a context mapping for the caller's own
//! bookkeeping. Rendering never consults it; it is cleared together with the
//! messages by [MessageBuilder::clear].

use std::fmt;
use std::fmt::Formatter;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::builder::errors::UnknownFormat;
use crate::utils::JsonMap;

/// A role-tagged unit of conversational content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: String,
    pub content: String,
}

impl Message {
    pub fn new(role: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            content: content.into(),
        }
    }
}

/// The chat-API payload produced by [MessageBuilder::build] with `"chat"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatPrompt {
    pub messages: Vec<Message>,
}

/// Output of [MessageBuilder::build], one variant per recognized format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuiltPrompt {
    Messages(Vec<Message>),
    Text(String),
    Chat(ChatPrompt),
}

impl BuiltPrompt {
    pub fn into_messages(self) -> Option<Vec<Message>> {
        match self {
            BuiltPrompt::Messages(messages) => Some(messages),
            _ => None,
        }
    }

    pub fn into_text(self) -> Option<String> {
        match self {
            BuiltPrompt::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn into_chat(self) -> Option<ChatPrompt> {
        match self {
            BuiltPrompt::Chat(chat) => Some(chat),
            _ => None,
        }
    }
}

/// Accumulates role-tagged messages and renders them on demand.
///
/// All mutators return `&mut Self` for fluent chaining. No operation blocks;
/// everything is a synchronous transformation over builder-owned state.
#[derive(Debug, Clone, Default)]
pub struct MessageBuilder {
    messages: Vec<Message>,
    context: JsonMap,
}

impl MessageBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a `system` message.
    pub fn add_system(&mut self, content: impl Into<String>) -> &mut Self {
        self.add_message("system", content)
    }

    /// Append a `user` message.
    pub fn add_user(&mut self, content: impl Into<String>) -> &mut Self {
        self.add_message("user", content)
    }

    /// Append an `assistant` message.
    pub fn add_assistant(&mut self, content: impl Into<String>) -> &mut Self {
        self.add_message("assistant", content)
    }

    /// Append a message with an arbitrary role label. Duplicate roles are
    /// fine; insertion order is preserved exactly.
    pub fn add_message(&mut self, role: impl Into<String>, content: impl Into<String>) -> &mut Self {
        self.messages.push(Message::new(role, content));
        self
    }

    /// Insert or overwrite a context entry. Context is caller-owned
    /// bookkeeping and has no effect on any `build` output.
    pub fn set_context(&mut self, key: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.context.insert(key.into(), value.into());
        self
    }

    /// Reset both the message sequence and the context mapping to empty.
    pub fn clear(&mut self) -> &mut Self {
        self.messages.clear();
        self.context.clear();
        self
    }

    /// The number of messages currently held.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// The messages in insertion order.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// The context mapping.
    pub fn context(&self) -> &JsonMap {
        &self.context
    }

    /// Render the current message sequence in the requested format.
    ///
    /// Recognized selectors are `"messages"`, `"string"` and `"chat"`;
    /// anything else fails with [errors::UnknownFormat]. The `"messages"` and
    /// `"chat"` shapes are copies, so mutating them never affects the
    /// builder.
    pub fn build(&self, format: &str) -> Result<BuiltPrompt, UnknownFormat> {
        match format {
            "messages" => Ok(BuiltPrompt::Messages(self.messages.clone())),
            "string" => Ok(BuiltPrompt::Text(self.build_string())),
            "chat" => Ok(BuiltPrompt::Chat(ChatPrompt {
                messages: self.messages.clone(),
            })),
            unknown => Err(UnknownFormat::new(unknown)),
        }
    }

    fn build_string(&self) -> String {
        self.messages
            .iter()
            .map(|message| format!("{}: {}", message.role.to_uppercase(), message.content))
            .collect::<Vec<String>>()
            .join("\n\n")
    }
}

impl fmt::Display for MessageBuilder {
    /// Displays the builder as its `"string"` rendering.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.build_string())
    }
}

pub mod errors {
    use std::error::Error;
    use std::fmt;
    use std::fmt::Formatter;

    /// Error when building with a format selector the builder does not
    /// recognize.
    #[derive(Debug, Clone)]
    pub struct UnknownFormat {
        pub format: String,
    }

    impl UnknownFormat {
        pub(crate) fn new(format: impl Into<String>) -> Self {
            UnknownFormat {
                format: format.into(),
            }
        }
    }

    impl fmt::Display for UnknownFormat {
        fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
            write!(
                f,
                "Unknown format: {}, expected one of \"messages\", \"string\" or \"chat\"",
                self.format
            )
        }
    }

    impl Error for UnknownFormat {}
}
