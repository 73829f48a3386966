//! An opinionated, simple Rust interface for assembling prompts for Large
//! Language Models.
//!
//! Two independent building blocks:
//!
//! - [`PromptBuilder`] accumulates role-tagged messages and builds them into
//!   the shapes chat completion APIs expect.
//! - [`PromptTemplate`] is reusable template text with `{variable}`
//!   placeholders, resolved from per-call overrides and construction-time
//!   defaults. [`PromptLibrary`] ships templates for common tasks.
//!
//! ```
//! use ezprompt::{PromptBuilder, PromptTemplate, Result};
//!
//! fn main() -> Result<()> {
//!     let question = PromptTemplate::new("Question about {topic}: {question}")
//!         .with_default("topic", "Rust");
//!
//!     let mut builder = PromptBuilder::new();
//!     builder
//!         .add_system("You are a helpful assistant.")
//!         .add_user(question.format(&[("question", "what is ownership?")])?);
//!
//!     let prompt = builder.build("messages")?;
//!     assert_eq!(prompt.as_messages().unwrap().len(), 2);
//!     Ok(())
//! }
//! ```

mod builder;
mod error;
mod library;
mod template;

pub use builder::{ChatPrompt, Message, Prompt, PromptBuilder, Role};
pub use error::{Error, Result};
pub use library::PromptLibrary;
pub use template::PromptTemplate;
