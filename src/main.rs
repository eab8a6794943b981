use std::sync::Arc;

use clap::Parser;
use color_eyre::eyre::Result;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use imagine_lens::application::{ImagineUseCase, LensUseCase};
use imagine_lens::domain::ReplyAttachment;
use imagine_lens::infrastructure::{
    AppConfig, CliArgs, Command, ConfigStore, ConsoleMessenger, DiskStagingCache, GlensClient,
    GoogleTranslateClient, HttpImageFetcher, ImagineClient, build_http_client,
};

fn init_logging(config: &AppConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.to_string()));

    if let Some(log_path) = &config.log_path {
        if let Some(parent) = log_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_path)?;

        let file_layer = fmt::layer()
            .with_writer(file)
            .with_ansi(false)
            .with_target(true)
            .with_thread_ids(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .init();

        info!(path = %log_path.display(), "Logging initialized");
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_writer(std::io::stderr))
            .init();
    }

    Ok(())
}

fn load_config(args: &CliArgs) -> Result<AppConfig> {
    let mut config = ConfigStore::locate(args.config.as_deref())?.load()?;
    config.merge_with_args(args);
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let args = CliArgs::parse();
    let config = load_config(&args)?;

    init_logging(&config)?;

    info!(version = imagine_lens::VERSION, "Starting imagine-lens");

    let http = build_http_client(&config.http.user_agent, config.http.timeout())?;
    let staging = Arc::new(DiskStagingCache::new(config.effective_cache_dir()).await?);

    debug!(cache_dir = %config.effective_cache_dir().display(), "Using staging directory");

    match args.command {
        Command::Imagine { prompt } => {
            let use_case = ImagineUseCase::new(
                Arc::new(GoogleTranslateClient::with_endpoint(
                    http.clone(),
                    &config.endpoints.translate_url,
                )),
                Arc::new(ImagineClient::with_endpoint(
                    http,
                    &config.endpoints.generate_url,
                )),
                staging,
            )
            .with_options(config.imagine.clone())
            .with_messages(config.messages.clone());

            let outcome = use_case.execute(&prompt, &ConsoleMessenger::new()).await?;
            debug!(?outcome, "Imagine finished");
        }
        Command::Lens { image_url, kind } => {
            let lens = GlensClient::with_endpoint(http.clone(), &config.endpoints.lens_url)
                .with_max_results(config.lens.max_results);
            let use_case =
                LensUseCase::new(Arc::new(lens), Arc::new(HttpImageFetcher::new(http)), staging)
                    .with_options(config.lens.clone())
                    .with_messages(config.messages.clone());

            let messenger =
                ConsoleMessenger::replying_to(vec![ReplyAttachment::new(kind.into(), image_url)]);
            let outcome = use_case.execute(&messenger).await;
            debug!(?outcome, "Lens finished");
        }
    }

    Ok(())
}
