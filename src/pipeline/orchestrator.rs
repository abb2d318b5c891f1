use anyhow::Context;
use std::future::Future;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, info_span, warn, Instrument};
use uuid::Uuid;

use super::collaborators::{CodeGenerator, Deployer, Planner, TestRunner};
use super::config::PipelineConfig;
use super::error::BuildError;
use super::result::{BuildFailure, BuildResult, BuildSummary};
use super::stage::{BuildState, Stage};
use crate::plan::Validator;
use crate::progress::{NoOpHandler, ProgressEvent, ProgressHandler};

/// Runs planning, generation, testing and deployment once each, in order.
///
/// The first fault stops the build; later collaborators are never called.
pub struct BuildOrchestrator {
    planner: Arc<dyn Planner>,
    generator: Arc<dyn CodeGenerator>,
    tester: Arc<dyn TestRunner>,
    deployer: Arc<dyn Deployer>,
    validator: Arc<Validator>,
    config: PipelineConfig,
    progress: Arc<dyn ProgressHandler>,
    state: BuildState,
}

impl BuildOrchestrator {
    pub fn new(
        planner: Arc<dyn Planner>,
        generator: Arc<dyn CodeGenerator>,
        tester: Arc<dyn TestRunner>,
        deployer: Arc<dyn Deployer>,
        config: PipelineConfig,
    ) -> Self {
        Self {
            planner,
            generator,
            tester,
            deployer,
            validator: Arc::new(Validator::new()),
            config,
            progress: Arc::new(NoOpHandler),
            state: BuildState::Start,
        }
    }

    pub fn with_progress_handler(mut self, handler: Arc<dyn ProgressHandler>) -> Self {
        self.progress = handler;
        self
    }

    pub fn with_validator(mut self, validator: Validator) -> Self {
        self.validator = Arc::new(validator);
        self
    }

    pub fn state(&self) -> BuildState {
        self.state
    }

    pub async fn build(&mut self, prompt: &str) -> BuildResult {
        let span = info_span!("build", id = %Uuid::new_v4());
        self.build_inner(prompt).instrument(span).await
    }

    async fn build_inner(&mut self, prompt: &str) -> BuildResult {
        let start = Instant::now();
        self.state = BuildState::Start;
        self.emit(ProgressEvent::BuildStarted {
            prompt: prompt.to_string(),
        });

        match self.run(prompt, start).await {
            Ok(summary) => {
                self.state = BuildState::Done;
                info!(
                    app = %summary.plan.app_name,
                    elapsed_secs = summary.elapsed_time,
                    "Build succeeded"
                );
                self.emit(ProgressEvent::Completed {
                    total_time: start.elapsed(),
                });
                BuildResult::Success(summary)
            }
            Err(err) => {
                self.state = BuildState::Failed;
                let stage = err.stage();
                warn!(stage = %stage, error = %err, "Build failed");
                self.emit(ProgressEvent::Failed {
                    stage,
                    error: err.to_string(),
                });
                BuildResult::Failure(BuildFailure {
                    failed_at: stage,
                    error: err.to_string(),
                    help: err.help_message(),
                })
            }
        }
    }

    async fn run(&mut self, prompt: &str, start: Instant) -> Result<BuildSummary, BuildError> {
        let planner = self.planner.clone();
        let validator = self.validator.clone();
        let plan = self
            .stage(Stage::Planning, async {
                let plan = planner.plan(prompt).await.map_err(BuildError::from)?;
                validator
                    .validate(&plan)
                    .map_err(|e| BuildError::InvalidPlan(e.to_string()))?;
                Ok::<_, BuildError>(plan)
            })
            .await?;
        self.emit(ProgressEvent::PlanReady {
            app_name: plan.app_name.clone(),
            app_type: plan.app_type.to_string(),
            tech: plan.tech_stack.summary(),
            features: plan.features.len(),
            tasks: plan.tasks.len(),
            estimated_minutes: plan.estimated_time_minutes,
        });

        let app_dir = self.config.output_root.join(&plan.app_name);
        let generator = self.generator.clone();
        let files = self
            .stage(Stage::Generation, async {
                prepare_app_dir(&app_dir)
                    .await
                    .map_err(BuildError::Generation)?;
                generator
                    .generate(&plan, &app_dir)
                    .await
                    .map_err(BuildError::Generation)
            })
            .await?;
        self.emit(ProgressEvent::FilesGenerated {
            count: files.len(),
            app_dir: app_dir.clone(),
        });

        let tester = self.tester.clone();
        let report = self
            .stage(Stage::Testing, async {
                tester
                    .run(&plan, &app_dir)
                    .await
                    .map_err(BuildError::Testing)
            })
            .await?;
        self.emit(ProgressEvent::TestsComplete {
            passed: report.passed,
            failed: report.failed,
            total: report.total,
        });

        let deployer = self.deployer.clone();
        let deployment = self
            .stage(Stage::Deployment, async {
                deployer
                    .deploy(&plan, &app_dir)
                    .await
                    .map_err(BuildError::Deployment)
            })
            .await?;
        self.emit(ProgressEvent::Deployed {
            url: deployment.url.clone(),
            github_url: deployment.github_url.clone(),
        });

        Ok(BuildSummary {
            files_created: files.len(),
            tests_passed: report.passed,
            tests_total: report.total,
            deployment_url: deployment.url,
            github_url: deployment.github_url,
            elapsed_time: start.elapsed().as_secs_f64(),
            app_dir,
            plan,
        })
    }

    async fn stage<T, F>(&mut self, stage: Stage, work: F) -> Result<T, BuildError>
    where
        F: Future<Output = Result<T, BuildError>>,
    {
        info!("Stage {}: {}", stage.number(), stage.title());
        self.emit(ProgressEvent::StageStarted { stage });

        let stage_start = Instant::now();
        let output = work.await?;
        self.state = BuildState::after(stage);

        self.emit(ProgressEvent::StageComplete {
            stage,
            duration: stage_start.elapsed(),
        });
        debug!(state = ?self.state, "Stage {} complete", stage);
        Ok(output)
    }

    fn emit(&self, event: ProgressEvent) {
        self.progress.on_progress(&event);
    }
}

/// Creates the project directory; an existing one is reused.
async fn prepare_app_dir(app_dir: &Path) -> anyhow::Result<()> {
    tokio::fs::create_dir_all(app_dir)
        .await
        .with_context(|| format!("Failed to create app directory {}", app_dir.display()))
}
