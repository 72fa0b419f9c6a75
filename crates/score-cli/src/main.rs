mod cli;
mod context;
mod handlers;
mod output;

use clap::{CommandFactory, Parser};
use cli::{Cli, Commands};
use context::CliContext;
use score_core::AppConfig;
use score_tui::{App, StateManager};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Ok(log_path) = std::env::var("SCOREBOARD_DEBUG_LOG") {
        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        tracing_subscriber::fmt()
            .with_writer(log_file)
            .with_max_level(tracing::Level::DEBUG)
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(false)
            .init();
    } else if cli.logs_to_stderr() {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_max_level(tracing::Level::WARN)
            .init();
    }

    let config = AppConfig::load();
    let features = cli.features(&config);
    let repository = cli.repository(&config, features);

    match cli.command {
        None => {
            let state = StateManager::load(repository, features).await;
            let mut app = App::new(state);
            let stats = app.run().await?;
            tracing::info!("Session ended: {} saves, failed: {}", stats.saved, stats.failed);
        }
        Some(Commands::Completions { shell }) => {
            clap_complete::generate(
                shell,
                &mut Cli::command(),
                "scoreboard",
                &mut std::io::stdout(),
            );
        }
        Some(cmd) => {
            if let Err(e) = run_command(repository, features, cmd).await {
                output::output_error(&e.to_string());
            }
        }
    }

    Ok(())
}

async fn run_command(
    repository: Option<score_persistence::RowRepository>,
    features: score_domain::Features,
    cmd: Commands,
) -> anyhow::Result<()> {
    let mut ctx = CliContext::load(repository, features).await?;

    match cmd {
        Commands::Add { text } => handlers::rows::handle_add(&mut ctx, text).await?,
        Commands::List => handlers::rows::handle_list(&ctx)?,
        Commands::Get { id } => handlers::rows::handle_get(&ctx, id)?,
        Commands::Delete { id } => handlers::rows::handle_delete(&mut ctx, id).await?,
        Commands::Adjust { id, delta } => {
            handlers::scores::handle_adjust(&mut ctx, id, delta).await?
        }
        Commands::Reset => handlers::scores::handle_reset(&mut ctx).await?,
        Commands::Move { id, position } => {
            handlers::rows::handle_move(&mut ctx, id, position).await?
        }
        Commands::Reorder { ids } => handlers::rows::handle_reorder(&mut ctx, ids).await?,
        Commands::Completions { .. } => {}
    }

    Ok(())
}
