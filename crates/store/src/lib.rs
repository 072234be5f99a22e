//! Storefront client: session state, terminal view and prompt commands.

pub mod commands;
pub mod session;
pub mod view;

pub use commands::{Command, ParseError};
pub use session::Session;
