//! CLI command implementations
//!
//! One submodule per subcommand: `export`, `validate-config`, `status`, `init`.

pub mod export;
pub mod init;
pub mod status;
pub mod validate;
