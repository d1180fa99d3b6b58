use anyhow::Context;
use clap::Parser;
use owo_colors::OwoColorize;
use scout::cli::Cli;
use scout::delivery::{HttpMailProvider, ReportDispatcher, render};
use scout::llm::LLMClient;
use scout::research::ResearchWorkflow;
use scout::types::{ResearchRequest, ResearchRunReport};
use scout::utils::config::Config;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = Config::from_env().context("failed to load configuration")?;
    let provider = config
        .llm
        .provider()
        .context("failed to resolve LLM provider")?;
    tracing::info!(provider = provider.name(), "using LLM provider");

    let llm: Arc<dyn LLMClient> = Arc::from(
        provider
            .create_client()
            .await
            .context("failed to create LLM client")?,
    );
    let mail = Arc::new(HttpMailProvider::new(&config.delivery));
    let workflow = ResearchWorkflow::new(llm, ReportDispatcher::new(mail), &config.research);

    let request = ResearchRequest {
        query: cli.query.clone(),
        deliver: cli.deliver,
        recipient: cli.recipient.clone(),
    };
    let run = workflow
        .execute(&request)
        .await
        .context("research workflow failed")?;

    print_run(&run);

    if let Some(path) = &cli.output {
        std::fs::write(path, render::render_markdown(&run.report))
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        println!("\nReport written to {}", path.display());
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "scout=debug" } else { "scout=info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .init();
}

fn print_run(run: &ResearchRunReport) {
    println!("\n{}", render::render_markdown(&run.report));

    println!("{}", "Run summary".bold());
    println!(
        "  searches: {}/{} completed",
        run.searches_completed, run.searches_planned
    );
    println!("  duration: {} ms", run.duration_ms);
    if let Some(delivery) = &run.delivery {
        if delivery.is_success() {
            println!("  delivery: {}", "sent".green());
        } else {
            println!("  delivery: {} ({})", "failed".red(), delivery.message);
        }
    }
}
