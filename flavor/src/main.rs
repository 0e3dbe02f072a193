use config::Config;
use dotenv::dotenv;
use flavor_http::server::{bind, create_server, Responses};
use std::process::ExitCode;
use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tracing::{error, info, trace};

mod config;

#[tokio::main]
async fn main() -> ExitCode {
    dotenv().ok();

    let logger = tracing_subscriber::fmt()
        .event_format(
            tracing_subscriber::fmt::format()
                .with_file(cfg!(not(feature = "production")))
                .with_line_number(cfg!(not(feature = "production"))),
        )
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
    if let Err(err) = logger {
        eprintln!("failed to init logger: {err}");
    }

    trace!("started!");

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{}", err);
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), FlavorErr> {
    let config = Config::from_env()?;
    trace!("current assets directory is {}", config.assets_root_dir.display());
    trace!("current index is {}", config.index_path.display());

    let responses = Responses::load(&config.assets_root_dir, &config.index_path).await?;
    let listener = bind(config.site_addr).await?;

    let cancelation_token = CancellationToken::new();
    let shutdown = {
        let cancelation_token = cancelation_token.clone();
        async move {
            if let Err(err) = tokio::signal::ctrl_c().await {
                error!("failed to listen for ctrl-c: {}", err);
            }
            info!("shutting down");
            cancelation_token.cancel();
        }
    };
    tokio::spawn(shutdown);

    create_server(cancelation_token, listener, responses).await?;

    Ok(())
}

#[derive(Error, Debug)]
enum FlavorErr {
    #[error("config error: {0}")]
    Config(#[from] config::ConfigErr),

    #[error("server error: {0}")]
    Server(#[from] flavor_http::server::ServerErr),
}
