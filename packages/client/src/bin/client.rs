//! Command-line access to the booking backend.
//!
//! Run with:
//! ```not_rust
//! API_BASE_URL=http://localhost:4000 cargo run --bin nomad-client -- activity 42
//! ```

use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use nomad_client::{
    ApiClient, ApiService, BookingApi, ExecutionContext, ServiceError,
    domain::{
        ActivityId, ActivityListQuery, ActivitySort, Category, PaginationMethod,
        ReservationListQuery, ReservationStatus,
    },
};
use nomad_shared::logger::setup_logger;
use serde::Serialize;
use thiserror::Error;

/// Failures of one CLI command.
#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Service(#[from] ServiceError),
    #[error("Failed to render response: {0}")]
    Render(#[from] serde_json::Error),
}

#[derive(Debug, Parser)]
#[command(version, about = "Query the Nomad booking backend")]
struct Cli {
    /// Which base-URL variable to read
    #[arg(long, value_enum, default_value_t = ContextArg::Server, global = true)]
    context: ContextArg,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ContextArg {
    Server,
    Browser,
}

impl From<ContextArg> for ExecutionContext {
    fn from(arg: ContextArg) -> Self {
        match arg {
            ContextArg::Server => ExecutionContext::Server,
            ContextArg::Browser => ExecutionContext::Browser,
        }
    }
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List activities
    Activities {
        #[arg(long)]
        keyword: Option<String>,
        /// Category label, e.g. 투어
        #[arg(long)]
        category: Option<Category>,
        #[arg(long, value_enum)]
        sort: Option<SortArg>,
        #[arg(long)]
        page: Option<u32>,
        #[arg(long)]
        size: Option<u32>,
    },
    /// Show one activity
    Activity { id: ActivityId },
    /// Show reviews of one activity
    Reviews { id: ActivityId },
    /// Delete one of my activities
    Delete { id: ActivityId },
    /// Show my notifications
    Notifications,
    /// Show my reservations
    Reservations {
        #[arg(long)]
        status: Option<ReservationStatus>,
        #[arg(long)]
        size: Option<u32>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum SortArg {
    MostReviewed,
    PriceAsc,
    PriceDesc,
    Latest,
}

impl From<SortArg> for ActivitySort {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::MostReviewed => ActivitySort::MostReviewed,
            SortArg::PriceAsc => ActivitySort::PriceAsc,
            SortArg::PriceDesc => ActivitySort::PriceDesc,
            SortArg::Latest => ActivitySort::Latest,
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    setup_logger(env!("CARGO_BIN_NAME"), "info");
    let cli = Cli::parse();

    let client = match ApiClient::from_env(cli.context.into()) {
        Ok(client) => client,
        Err(e) => {
            tracing::error!("Failed to create API client: {}", e);
            return ExitCode::FAILURE;
        }
    };
    let service = ApiService::new(client);

    match run(&service, cli.command).await {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(api: &dyn BookingApi, command: Command) -> Result<String, CliError> {
    match command {
        Command::Activities {
            keyword,
            category,
            sort,
            page,
            size,
        } => {
            let query = ActivityListQuery {
                method: PaginationMethod::Offset,
                keyword,
                category,
                sort: sort.map(Into::into),
                page,
                size,
                ..Default::default()
            };
            render(&api.list_activities(&query).await?)
        }
        Command::Activity { id } => render(&api.get_activity_detail(id).await?),
        Command::Reviews { id } => render(&api.get_activity_reviews(id).await?),
        Command::Delete { id } => {
            let response = api.delete_my_activity(id).await?;
            Ok(format!("{} {}", response.status, response.body))
        }
        Command::Notifications => render(&api.get_my_notifications().await?),
        Command::Reservations { status, size } => {
            let query = ReservationListQuery {
                status,
                size,
                ..Default::default()
            };
            render(&api.get_my_reservations(&query).await?)
        }
    }
}

fn render<T: Serialize>(value: &T) -> Result<String, CliError> {
    Ok(serde_json::to_string_pretty(value)?)
}
