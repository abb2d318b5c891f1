//! Build plan schema
//!
//! This module defines the shape of the plan the planning model produces: app
//! metadata, tech stack, feature list and ordered tasks. Decoding is lenient
//! about optional fields and strict about the required ones, which are checked
//! separately by [`super::validator::is_valid`] before decoding.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::define_choice_enum;

define_choice_enum! {
    /// Kind of application the plan describes
    AppType {
        WebApp => "web_app",
        Api => "api",
        MobileApp => "mobile_app",
        ChromeExtension => "chrome_extension",
        CliTool => "cli_tool",
    }
}

define_choice_enum! {
    Frontend {
        React => "react",
        Vue => "vue",
        Svelte => "svelte",
        Next => "next",
        None => "none",
    }
}

define_choice_enum! {
    Backend {
        Node => "node",
        Python => "python",
        Go => "go",
        None => "none",
    }
}

define_choice_enum! {
    Database {
        Postgresql => "postgresql",
        Mongodb => "mongodb",
        Firebase => "firebase",
        None => "none",
    }
}

define_choice_enum! {
    Styling {
        Tailwindcss => "tailwindcss",
        Mui => "mui",
        Chakra => "chakra",
        None => "none",
    }
}

define_choice_enum! {
    Auth {
        Firebase => "firebase",
        Supabase => "supabase",
        Jwt => "jwt",
        None => "none",
    }
}

fn default_estimate() -> f64 {
    5.0
}

/// A complete build plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    pub app_type: AppType,
    /// Directory name for the generated project
    #[serde(default)]
    pub app_name: String,
    #[serde(default)]
    pub description: String,
    pub tech_stack: TechStack,
    pub features: Vec<String>,
    #[serde(default)]
    pub tasks: Vec<Task>,
    /// Advisory only
    #[serde(default = "default_estimate")]
    pub estimated_time_minutes: f64,
}

impl Plan {
    /// Total number of files the plan asks for, across all tasks
    pub fn file_count(&self) -> usize {
        self.tasks.iter().map(|t| t.files_to_create.len()).sum()
    }
}

/// Technology choices; a key the model leaves out means `none`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TechStack {
    #[serde(default = "Frontend::none")]
    pub frontend: Frontend,
    #[serde(default = "Backend::none")]
    pub backend: Backend,
    #[serde(default = "Database::none")]
    pub database: Database,
    #[serde(default = "Styling::none")]
    pub styling: Styling,
    #[serde(default = "Auth::none")]
    pub auth: Auth,
}

impl Default for TechStack {
    fn default() -> Self {
        Self {
            frontend: Frontend::None,
            backend: Backend::None,
            database: Database::None,
            styling: Styling::None,
            auth: Auth::None,
        }
    }
}

impl TechStack {
    /// Short label like "react + node", used in progress output
    pub fn summary(&self) -> String {
        format!("{} + {}", self.frontend, self.backend)
    }
}

macro_rules! none_constructor {
    ($($ty:ident),*) => {
        $(
            impl $ty {
                fn none() -> Self {
                    Self::None
                }
            }
        )*
    };
}

none_constructor!(Frontend, Backend, Database, Styling, Auth);

/// One unit of work in a plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: u32,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Paths relative to the project directory
    #[serde(default)]
    pub files_to_create: Vec<String>,
    /// Ids of tasks that conceptually come first. Recorded, never scheduled on.
    #[serde(default)]
    pub dependencies: BTreeSet<u32>,
}
