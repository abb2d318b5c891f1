use std::path::PathBuf;

pub const DEFAULT_OUTPUT_ROOT: &str = "./generated_apps";

#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Parent of every generated project directory
    pub output_root: PathBuf,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            output_root: PathBuf::from(DEFAULT_OUTPUT_ROOT),
        }
    }
}

impl PipelineConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_output_root(mut self, output_root: impl Into<PathBuf>) -> Self {
        self.output_root = output_root.into();
        self
    }
}
