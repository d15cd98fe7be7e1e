//! # promptkit
//!
//! Building blocks for assembling and templating LLM prompts in Rust.
//!
//! `promptkit` deliberately stays small and data-driven: prompts are plain
//! strings and role-tagged records, and every step that composes one is
//! explicit and synchronous. There is no network code, no model invocation
//! and no shared state, so the crate slots in front of whatever LLM client a
//! host application already uses.
//!
//! ## Concepts
//!
//! ### Message Builder
//!
//! [`MessageBuilder`](crate::builder::MessageBuilder) accumulates an ordered
//! sequence of role-tagged [`Message`](crate::builder::Message)s plus a side
//! mapping of caller-owned context values, and renders the sequence into one
//! of three shapes: the raw message list, a flattened string transcript, or a
//! chat-API payload.
//!
//! ```
//! use promptkit::builder::MessageBuilder;
//!
//! let mut builder = MessageBuilder::new();
//! builder
//!     .add_system("You are a helpful assistant.")
//!     .add_user("What is the capital of France?");
//! let transcript = builder.build("string").unwrap();
//! ```
//!
//! ### Template and Placeholder
//!
//! A [`Template`](crate::template::Template) is a string with named
//! placeholders written as `{name}`. A template can carry default values
//! fixed at construction; per-call overrides win over defaults:
//!
//! ```
//! use promptkit::template::Template;
//! use promptkit::utils::JsonMap;
//!
//! let template = Template::new("Hello {name}, you have {count} messages.");
//! let mut vars = JsonMap::new();
//! vars.insert("name".to_string(), "User".into());
//! vars.insert("count".to_string(), 5.into());
//! assert_eq!(
//!     template.format(&vars).unwrap(),
//!     "Hello User, you have 5 messages.",
//! );
//! ```
//!
//! Formatting is all-or-nothing: a placeholder with neither an override nor a
//! default fails with a
//! [`MissingVariable`](crate::template::errors::MissingVariable) error, and
//! [`Template::validate`](crate::template::Template::validate) probes for
//! that condition in advance without erroring.
//!
//! ### Catalog
//!
//! [`catalog`](crate::catalog) holds factory functions for common task
//! shapes (Q&A, summarization, translation, code generation,
//! classification). Every call returns a fresh, independent template.
//!
//! ## What `promptkit` does not do
//!
//! No token counting, no validation of message semantics, no model-specific
//! formatting beyond the three documented shapes. Instances are independently
//! owned; sharing one across threads is the caller's synchronization problem.

pub mod builder;
pub mod catalog;
pub mod template;
pub mod utils;
