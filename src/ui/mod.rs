//! Terminal UI layer.
//!
//! - [`chat_loop`]: terminal lifecycle, key routing, and the event loop that
//!   feeds [`crate::core::app`] actions and spawns reply requests.
//! - [`renderer`] and [`layout`]: drawing the setup and chat screens.
//! - [`theme`]: named color palettes.
//!
//! This layer presents and captures interaction state, while [`crate::core`]
//! owns the wizard, the session, and backend coordination.

pub mod chat_loop;
pub mod layout;
pub mod renderer;
pub mod theme;
