//! Build plan: schema, decomposition and validation
//!
//! A plan arrives from the planning model as loosely-typed JSON. It is checked
//! for required keys ([`is_valid`]), decoded into [`Plan`], then checked again
//! by the rule-based [`Validator`] before any file is written.

mod choice;
pub mod decomposer;
pub mod paths;
pub mod rules;
pub mod schema;
pub mod validator;

pub use decomposer::{decompose, Subtask, SubtaskKind};
pub use schema::{AppType, Auth, Backend, Database, Frontend, Plan, Styling, Task, TechStack};
pub use validator::{is_valid, missing_fields, Validator, REQUIRED_FIELDS};
