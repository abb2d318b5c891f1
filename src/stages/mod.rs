//! Default stage collaborators used by the CLI
//!
//! Generation writes real files; testing and deployment are static stand-ins
//! that execute and publish nothing.

pub mod file_check;
pub mod fs;
pub mod llm_codegen;
pub mod preview;
pub mod scaffold;

pub use file_check::FileCheckRunner;
pub use fs::{resolve_within, write_file};
pub use llm_codegen::LlmCodeGenerator;
pub use preview::{PreviewDeployer, DEFAULT_GITHUB_OWNER, DEFAULT_PREVIEW_DOMAIN};
pub use scaffold::ScaffoldGenerator;
