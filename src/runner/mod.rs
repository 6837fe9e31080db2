//! Fixed smoke-test script: walks the device endpoints in order, prints each
//! response and counts failures without stopping early.
mod plan;
mod step;
mod summary;


use std::io::Write;

use crate::client::{ApiResponse, DeviceClient, Endpoint, TaskAction, TaskCommand};
use crate::error::{ClientError, StepError};

pub use plan::RunPlan;
pub use step::Step;
pub use summary::RunSummary;

pub struct Runner<'client, W> {
    client: &'client DeviceClient,
    out: W,
    steps: usize,
    failures: usize,
}

impl<'client, W: Write> Runner<'client, W> {
    #[must_use]
    pub const fn new(client: &'client DeviceClient, out: W) -> Self {
        Self {
            client,
            out,
            steps: 0,
            failures: 0,
        }
    }

    /// Runs every step selected by `plan` and prints the final verdict.
    ///
    /// # Errors
    ///
    /// Returns an error only when writing the report fails; device failures
    /// are counted in the summary instead.
    pub async fn run(&mut self, plan: &RunPlan) -> std::io::Result<RunSummary> {
        let client = self.client;

        self.step(&Step::plain(Endpoint::STATUS), client.status())
            .await?;
        self.step(&Step::plain(Endpoint::READ), client.read()).await?;
        self.step(&Step::plain(Endpoint::CONFIG_GET), client.config())
            .await?;
        self.step(&Step::plain(Endpoint::METRICS), client.metrics())
            .await?;

        if let Some(patch) = plan.config_patch.as_ref() {
            self.step(&Step::config_patch(), client.post_config(patch))
                .await?;
            if let Some(action) = plan.persist {
                self.step(&Step::plain(action.endpoint()), client.persist_config(action))
                    .await?;
            }
        }

        if plan.task_tests {
            for (index, action) in TaskAction::ALL.into_iter().enumerate() {
                if index > 0 {
                    tokio::time::sleep(plan.task_pause).await;
                }
                let command = TaskCommand::sensor_post(action);
                self.step(&Step::task(command), client.post_task(command))
                    .await?;
            }
        }

        let summary = RunSummary {
            steps: self.steps,
            failures: self.failures,
        };
        writeln!(self.out, "\n==> DONE")?;
        writeln!(self.out, "{}", summary.message())?;
        self.out.flush()?;
        Ok(summary)
    }

    #[must_use]
    pub fn into_output(self) -> W {
        self.out
    }

    async fn step<Fut>(&mut self, step: &Step, call: Fut) -> std::io::Result<()>
    where
        Fut: Future<Output = Result<ApiResponse, ClientError>>,
    {
        if self.steps > 0 {
            writeln!(self.out)?;
        }
        self.steps = self.steps.saturating_add(1);
        writeln!(self.out, "==> {}", step.header())?;

        let outcome = match call.await {
            Ok(response) => self.report(step, &response)?,
            Err(err) => Err(StepError::from(err)),
        };

        match outcome {
            Ok(()) => {
                tracing::debug!(step = %step.label(), "Step passed");
            }
            Err(err) => {
                tracing::debug!(step = %step.label(), error = %err, "Step failed");
                writeln!(self.out, "[ERROR] {} failed: {}", step.label(), err)?;
                self.failures = self.failures.saturating_add(1);
            }
        }
        Ok(())
    }

    fn report(
        &mut self,
        step: &Step,
        response: &ApiResponse,
    ) -> std::io::Result<Result<(), StepError>> {
        writeln!(self.out, "HTTP {}", response.status().as_u16())?;

        if step.endpoint().expects_text() {
            writeln!(self.out, "{}", response.text())?;
        } else {
            match response.render() {
                Ok(body) => writeln!(self.out, "{}", body)?,
                Err(err) => {
                    writeln!(self.out, "{}", response.text())?;
                    return Ok(Err(StepError::from(err)));
                }
            }
        }

        Ok(response.error_for_status().map_err(StepError::from))
    }
}
