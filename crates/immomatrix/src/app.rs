//! Application entry point and dispatch.

use std::sync::Arc;

use anyhow::{Context, Result};

use immomatrix_cli::output::write_to_file;
use immomatrix_cli::ui;
use immomatrix_cli::{CLIResultPresenter, DraftSpinner, JsonResultPresenter, ResultPresenter};
use immomatrix_copy::{DraftClient, DraftOutcome, GeminiClient};
use immomatrix_core::{campaign_roi, vacancy_cost};
use immomatrix_tui::{spawn_draft_worker, TuiApp, TuiMessage};

use crate::config::{AppConfig, Command, DraftArgs, ServiceArgs, TuiArgs};

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    let presenter = presenter_for(config);

    match &config.command {
        None | Some(Command::Dashboard) => presenter.present_dashboard(),
        Some(Command::Vacancy(args)) => {
            let input = args.to_input()?;
            presenter.present_vacancy(&input, &vacancy_cost(&input));
        }
        Some(Command::Roi(args)) => {
            let input = args.to_input()?;
            presenter.present_roi(&input, &campaign_roi(&input));
        }
        Some(Command::Draft(args)) => run_draft(config, args, presenter.as_ref())?,
        Some(Command::Tui(args)) => run_tui(args)?,
        Some(Command::Completion { shell }) => {
            let mut cmd = <AppConfig as clap::CommandFactory>::command();
            immomatrix_cli::completion::generate_completion(
                &mut cmd,
                *shell,
                &mut std::io::stdout(),
            );
        }
    }

    Ok(())
}

/// Report a failed run through the configured presenter.
pub fn report_error(config: &AppConfig, err: &anyhow::Error) {
    presenter_for(config).present_error(&format!("{err:#}"));
}

fn presenter_for(config: &AppConfig) -> Box<dyn ResultPresenter> {
    if config.json {
        Box::new(JsonResultPresenter)
    } else {
        Box::new(CLIResultPresenter::new(config.verbose, config.quiet))
    }
}

fn draft_client(service: &ServiceArgs) -> DraftClient {
    let generator = GeminiClient::new(service.api_key())
        .with_model(service.model.clone())
        .with_endpoint(service.endpoint.clone());
    if !generator.has_credentials() {
        tracing::warn!("no API key configured; drafts will fall back");
    }
    DraftClient::new(Arc::new(generator))
}

fn run_draft(config: &AppConfig, args: &DraftArgs, presenter: &dyn ResultPresenter) -> Result<()> {
    let client = draft_client(&args.service);
    let request = args.campaign.to_request();

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;

    let spinner = DraftSpinner::start(
        &format!("Generiere Texte mit {} …", client.model()),
        !config.quiet && !config.json,
    );
    let outcome = runtime.block_on(client.draft(&request));
    spinner.finish();

    let generated = matches!(outcome, DraftOutcome::Generated(_));
    let text = outcome.into_text();
    presenter.present_draft(client.model(), &text, !generated);

    if let Some(path) = &args.output {
        if generated {
            write_to_file(path, &text)
                .with_context(|| format!("failed to write {}", path.display()))?;
            if !config.quiet && !config.json {
                ui::print_success(&format!("Gespeichert in {}", path.display()));
            }
        } else {
            tracing::warn!(path = %path.display(), "no draft text to write");
        }
    }

    Ok(())
}

fn run_tui(args: &TuiArgs) -> Result<()> {
    let client = draft_client(&args.service);
    let model = client.model().to_string();

    // Create crossbeam channel for TUI messages
    let (tx, rx) = crossbeam_channel::unbounded::<TuiMessage>();
    let jobs = spawn_draft_worker(client, tx.clone()).context("failed to start draft worker")?;

    let mut app = TuiApp::new(rx)
        .with_draft_worker(jobs, model.clone())
        .with_draft_request(args.campaign.to_request());
    let _ = tx.send(TuiMessage::Log(format!("Text-Dienst: {model}")));

    // Run TUI event loop on the main thread
    app.run().map_err(|e| anyhow::anyhow!("TUI error: {e}"))?;

    Ok(())
}
