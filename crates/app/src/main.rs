//! Storefront - Main Entry Point
//!
//! Wires the catalog client, repository, use cases and view-models
//! together, then runs a command loop on stdin.

use std::sync::Arc;

use storefront::command::HELP;
use storefront::{Command, parse_command, render_screen};
use storefront_application::ProductUseCases;
use storefront_infrastructure::{ApiProductRepository, ClientConfig, ReqwestProductApi};
use storefront_ui::AppController;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr so they never interleave with rendered screens
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = ClientConfig::from_env()?;
    let api = ReqwestProductApi::new(&config)?;
    tracing::info!(
        base_url = %api.base_url(),
        "Starting Storefront v{}",
        env!("CARGO_PKG_VERSION")
    );

    let use_cases = ProductUseCases::new(Arc::new(ApiProductRepository::new(api)));
    let controller = AppController::new(&use_cases);

    let mut stdout = tokio::io::stdout();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    show(&controller, &mut stdout).await?;
    while let Some(line) = lines.next_line().await? {
        match parse_command(&line) {
            Ok(Command::Quit) => break,
            Ok(Command::Help) => write_block(&mut stdout, HELP).await?,
            Ok(Command::Ui(command)) => {
                controller.dispatch(command);
                show(&controller, &mut stdout).await?;
            }
            Err(error) => write_block(&mut stdout, &format!("{error}\n\n{HELP}")).await?,
        }
    }

    tracing::info!("Storefront stopped");
    Ok(())
}

async fn show<R>(
    controller: &AppController<R>,
    stdout: &mut tokio::io::Stdout,
) -> std::io::Result<()>
where
    R: storefront_application::ProductRepository + 'static,
{
    controller.wait_idle().await;
    let text = render_screen(
        controller.screen(),
        &controller.list().state(),
        &controller.detail().state(),
    );
    write_block(stdout, &text).await
}

async fn write_block(stdout: &mut tokio::io::Stdout, text: &str) -> std::io::Result<()> {
    stdout.write_all(text.as_bytes()).await?;
    stdout.write_all(b"\n\n> ").await?;
    stdout.flush().await
}
