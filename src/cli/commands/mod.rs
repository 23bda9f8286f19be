//! Command implementations, one module per subcommand.

pub mod completions;
pub mod encrypt;
pub mod view;
