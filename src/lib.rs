//! HotMessCoach is a full-screen terminal Thanksgiving survival coach.
//!
//! The crate is organized around a small set of collaborating layers:
//! - [`core`] owns the setup wizard, the chat session with its single
//!   in-flight request, the root controller that switches between them,
//!   and the persistent configuration.
//! - [`api`] defines the `/api/chat` payloads and the HTTP call.
//! - [`ui`] renders the terminal interface and runs the interactive event
//!   loop that drives user input and display updates.
//! - [`utils`] holds diagnostic logging setup and URL helpers.
//!
//! Runtime entrypoints live in the binary crate (`src/main.rs`) and route
//! through [`crate::cli::main`], which dispatches into [`ui::chat_loop`] for
//! interactive sessions or [`cli::ask`] for one-shot questions.

pub mod api;
pub mod cli;
pub mod core;
pub mod ui;
pub mod utils;
