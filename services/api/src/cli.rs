use crate::infra::{local_now, parse_now, parse_window, StdoutClipboard};
use crate::render::{
    render_customer_cards, render_lead_detail, render_recap, render_sales_users,
};
use crate::server;
use chrono::{DateTime, FixedOffset, Local};
use clap::{Args, Parser, Subcommand};
use sales_visit::config::AppConfig;
use sales_visit::error::AppError;
use sales_visit::telemetry;
use sales_visit::workflows::dataset::CsvDataset;
use sales_visit::workflows::visits::{
    CopyOutcome, CustomerId, RecapQuery, SalesSelection, TimeWindow, UserId,
    VisitReportingService,
};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser, Debug)]
#[command(
    name = "sales-visit",
    about = "Sales visit recaps and lead history from the command line or over HTTP",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Print the visit recap for a period (pipe into a printer to print)
    Recap(RecapArgs),
    /// Browse leads and their visit history
    Leads {
        #[command(subcommand)]
        command: LeadsCommand,
    },
    /// Sales team lookups for admins
    Sales {
        #[command(subcommand)]
        command: SalesCommand,
    },
}

#[derive(Subcommand, Debug)]
enum SalesCommand {
    /// List salespeople and the ids `recap --sales` accepts
    List(ViewerArgs),
}

#[derive(Subcommand, Debug)]
enum LeadsCommand {
    /// List the customers visible to a viewer
    List(ViewerArgs),
    /// Show one customer with their visit history
    Show(LeadArgs),
    /// Write a customer's contact card to stdout
    Copy(LeadArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    /// Override the configured dataset directory
    #[arg(long)]
    pub(crate) data_dir: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct DataArgs {
    /// Dataset directory holding customers.csv, reports.csv and users.csv
    #[arg(long)]
    data_dir: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct RecapArgs {
    /// User id of the person viewing the recap
    #[arg(long)]
    viewer: String,
    /// Reporting period: all, daily, weekly or monthly
    #[arg(long, default_value = "all", value_parser = parse_window)]
    window: TimeWindow,
    /// Narrow an admin recap to one salesperson id ("all" for everyone)
    #[arg(long)]
    sales: Option<String>,
    /// Reference instant (RFC 3339 or YYYY-MM-DD); defaults to now
    #[arg(long, value_parser = parse_now)]
    now: Option<DateTime<FixedOffset>>,
    #[command(flatten)]
    data: DataArgs,
}

#[derive(Args, Debug)]
struct ViewerArgs {
    /// User id of the person viewing the list
    #[arg(long)]
    viewer: String,
    #[command(flatten)]
    data: DataArgs,
}

#[derive(Args, Debug)]
struct LeadArgs {
    /// Customer id
    customer_id: String,
    #[command(flatten)]
    data: DataArgs,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Recap(args) => run_recap(args),
        Command::Leads { command } => run_leads(command),
        Command::Sales { command } => run_sales(command),
    }
}

fn reporting_service(data: DataArgs) -> Result<VisitReportingService<CsvDataset>, AppError> {
    let mut config = AppConfig::load()?;
    if let Some(dir) = data.data_dir {
        config.data.dir = dir;
    }
    telemetry::init(&config.telemetry)?;

    let dataset = CsvDataset::open(config.data.dir);
    Ok(VisitReportingService::new(Arc::new(dataset)))
}

fn run_recap(args: RecapArgs) -> Result<(), AppError> {
    let RecapArgs {
        viewer,
        window,
        sales,
        now,
        data,
    } = args;

    let service = reporting_service(data)?;
    let query = RecapQuery {
        window,
        selection: SalesSelection::from_param(sales.as_deref()),
    };
    let now = now.unwrap_or_else(local_now);
    let recap = service.recap(&UserId(viewer), &query, &now)?;

    print!("{}", render_recap(&recap));
    Ok(())
}

fn run_leads(command: LeadsCommand) -> Result<(), AppError> {
    match command {
        LeadsCommand::List(ViewerArgs { viewer, data }) => {
            let service = reporting_service(data)?;
            let cards = service.customer_cards(&UserId(viewer))?;
            print!("{}", render_customer_cards(&cards));
        }
        LeadsCommand::Show(LeadArgs { customer_id, data }) => {
            let service = reporting_service(data)?;
            let id = CustomerId(customer_id);
            let detail = service
                .lead_detail(&id, &Local)
                .ok_or_else(|| AppError::CustomerNotFound(id.0.clone()))?;
            print!("{}", render_lead_detail(&detail));
        }
        LeadsCommand::Copy(LeadArgs { customer_id, data }) => {
            let service = reporting_service(data)?;
            let id = CustomerId(customer_id);
            match service.copy_contact_info(&StdoutClipboard::default(), &id) {
                Some(CopyOutcome::Copied { .. }) => {}
                Some(CopyOutcome::Failed { alert }) => eprintln!("{alert}"),
                None => return Err(AppError::CustomerNotFound(id.0)),
            }
        }
    }

    Ok(())
}

fn run_sales(command: SalesCommand) -> Result<(), AppError> {
    match command {
        SalesCommand::List(ViewerArgs { viewer, data }) => {
            let service = reporting_service(data)?;
            let users = service.sales_users(&UserId(viewer))?;
            print!("{}", render_sales_users(&users));
        }
    }

    Ok(())
}
