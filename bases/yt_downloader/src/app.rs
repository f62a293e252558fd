// bases/yt_downloader/src/app.rs
use crate::args::Args;
use crate::output::OutputHandler;
use color_eyre::Result;
use std::sync::Arc;
use video_downloader::{Dispatcher, InvocationRequest, Outcome, QualitySummary, SystemRunner};

pub struct App {
    request: InvocationRequest,
    dispatcher: Dispatcher,
    output: OutputHandler,
    summary: bool,
}

impl App {
    pub fn new(args: Args) -> Self {
        let output = OutputHandler::new(args.verbose);
        let dispatcher = Dispatcher::with_runner(args.yt_dlp.clone(), Arc::new(SystemRunner));
        let summary = args.summary;

        Self {
            request: args.into_request(),
            dispatcher,
            output,
            summary,
        }
    }

    pub async fn run(&self) -> Result<()> {
        let job = self.dispatcher.plan(&self.request)?;
        self.output.print_job_start(&job);

        let outcome = self.dispatcher.execute(&job).await?;

        match &outcome {
            Outcome::Fetched { metadata, .. } if self.summary => {
                let summary = QualitySummary::from_metadata(metadata)?;
                self.output.print_summary(&serde_json::to_string(&summary)?);
            }
            _ => self.output.print_outcome(&outcome),
        }

        Ok(())
    }

    pub fn print_error(&self, error: &color_eyre::Report) {
        self.output.print_error(error);
    }
}
