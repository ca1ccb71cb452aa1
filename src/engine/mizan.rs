use std::path::Path;
use std::path::PathBuf;

use actix_cors::Cors;
use actix_files::Files;
use actix_web::App;
use actix_web::HttpServer;
use actix_web::web;
use tracing::info;
use tracing::warn;

use crate::Result;
use crate::chart::write_chart;
use crate::cli::Cli;
use crate::cli::Command;
use crate::config::Config;
use crate::config::load_config;
use crate::err_with_loc;
use crate::error::EngineError;
use crate::handler::QueryHandler;
use crate::handler::http::AppState;
use crate::handler::http::configure_api;
use crate::model::WalletAddress;
use crate::storage::make_ledger;
use crate::tracing::setup_tracing;

const ENGINE_NAME: &str = "mizan";

#[derive(Debug, Clone)]
pub struct Mizan {
    pub config:        Config,
    pub query_handler: QueryHandler,
}

impl Mizan {
    pub async fn run(cli: Cli) -> Result<()> {
        let _ = dotenvy::dotenv();

        let config = load_config(&cli.config)?;
        let _guard = setup_tracing(ENGINE_NAME, &config.logging)?;
        info!("Starting Mizan (ميزان): The Balance");

        let mizan = Self::new(config)?;

        match cli.command.unwrap_or(Command::Serve) {
            Command::Serve => mizan.serve().await,
            Command::Analyze { wallet, chart } => mizan.analyze_once(&wallet, chart.as_deref()),
        }
    }

    /// Loads the dataset and builds the shared ledger.
    pub fn new(config: Config) -> Result<Self> {
        let ledger = make_ledger(ENGINE_NAME, &config)?;
        let query_handler = QueryHandler::new(ledger, config.analytics.clone(), config.chart.clone());
        Ok(Self {
            config,
            query_handler,
        })
    }

    pub async fn serve(self) -> Result<()> {
        let host = self.config.server.host.clone();
        let port = self.config.server.port;
        let static_dir = static_dir(self.config.server.static_dir.as_deref());
        let state = web::Data::new(AppState::new(self.query_handler));

        info!("{}::http::binding::{}:{}", ENGINE_NAME, host, port);
        HttpServer::new(move || {
            let app = App::new()
                .wrap(Cors::permissive())
                .app_data(state.clone())
                .configure(configure_api);
            match &static_dir {
                Some(dir) => app.service(Files::new("/", dir).index_file("index.html")),
                None => app,
            }
        })
        .bind((host.as_str(), port))
        .map_err(|e| err_with_loc!(EngineError::ServerError(format!("bind {}:{}: {}", host, port, e))))?
        .run()
        .await
        .map_err(|e| err_with_loc!(EngineError::ServerError(e.to_string())))?;

        info!("{}::shutdown", ENGINE_NAME);
        Ok(())
    }

    pub fn analyze_once(
        &self,
        wallet: &str,
        chart_path: Option<&Path>,
    ) -> Result<()> {
        let (report, png) = self.query_handler.report_with_png(wallet)?;
        println!("{}", serde_json::to_string_pretty(&report)?);

        if let Some(path) = chart_path {
            match png {
                Some(png) => {
                    write_chart(path, &png)?;
                    info!("{}::chart::written::{}", ENGINE_NAME, path.display());
                },
                None => warn!("{}::chart::skipped::no_activity::{}", ENGINE_NAME, WalletAddress::normalize(wallet)),
            }
        }
        Ok(())
    }
}

// Only mount the static index when it actually exists
fn static_dir(configured: Option<&str>) -> Option<PathBuf> {
    let dir = PathBuf::from(configured?);
    if dir.join("index.html").is_file() {
        Some(dir)
    } else {
        warn!("{}::static::missing_index::{}", ENGINE_NAME, dir.display());
        None
    }
}
