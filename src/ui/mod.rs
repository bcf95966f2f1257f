//! User interface and interaction
//!
//! This module contains all components related to user interaction,
//! including CLI parsing, console output, the send spinner,
//! and shell completion generation.

pub mod cli;
pub mod color;
pub mod completion;
pub mod output;
pub mod progress;

// Re-export commonly used items
pub use cli::{Cli, Commands, GenerateArgs, SendArgs};
pub use completion::{completion_script, install_completion, print_completions};
pub use progress::SendSpinner;
