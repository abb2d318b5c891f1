use anyhow::Result;
use async_trait::async_trait;
use std::path::Path;
use tracing::info;

use crate::pipeline::{Deployer, Deployment};
use crate::plan::Plan;

pub const DEFAULT_PREVIEW_DOMAIN: &str = "appforge.dev";
pub const DEFAULT_GITHUB_OWNER: &str = "appforge";

/// Reports where the app would be published. Deploys nothing.
#[derive(Debug, Clone)]
pub struct PreviewDeployer {
    preview_domain: String,
    github_owner: String,
}

impl Default for PreviewDeployer {
    fn default() -> Self {
        Self::new(DEFAULT_PREVIEW_DOMAIN, DEFAULT_GITHUB_OWNER)
    }
}

impl PreviewDeployer {
    pub fn new(preview_domain: impl Into<String>, github_owner: impl Into<String>) -> Self {
        Self {
            preview_domain: preview_domain.into(),
            github_owner: github_owner.into(),
        }
    }
}

#[async_trait]
impl Deployer for PreviewDeployer {
    async fn deploy(&self, plan: &Plan, app_dir: &Path) -> Result<Deployment> {
        let deployment = Deployment {
            url: format!("https://{}.{}", plan.app_name, self.preview_domain),
            github_url: format!("https://github.com/{}/{}", self.github_owner, plan.app_name),
        };
        info!(
            dir = %app_dir.display(),
            url = %deployment.url,
            "Preview deployment prepared"
        );
        Ok(deployment)
    }
}
