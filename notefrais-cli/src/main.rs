use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use notefrais_core::routes::BILLS_PATH;
use notefrais_core::{
    BillCategory, BillForm, BillsGateway, NewBillPane, Router, SessionProvider, SubmitError,
    UserKind,
};
use notefrais_gateway::{HttpBillsGateway, MemoryBillsGateway};
use std::path::{Path, PathBuf};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod render;
mod session_store;
mod tui;

#[derive(Parser, Debug)]
#[command(name = "notefrais", version, about = "Employee expense bills client")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Store the local user session (authentication itself happens upstream)
    Login {
        #[arg(long)]
        email: String,

        /// Store an admin session instead of an employee one
        #[arg(long)]
        admin: bool,
    },

    /// Clear the local user session
    Logout,

    /// Fetch and print the bills list
    Bills,

    /// Validate a receipt, upload it and submit a new bill
    New {
        /// Expense category (e.g. transports, hotel, restaurants)
        #[arg(long)]
        category: BillCategory,

        #[arg(long)]
        name: String,

        #[arg(long)]
        amount: String,

        /// Calendar date, YYYY-MM-DD
        #[arg(long)]
        date: String,

        #[arg(long)]
        vat: Option<String>,

        #[arg(long)]
        pct: Option<String>,

        #[arg(long)]
        commentary: Option<String>,

        /// Path to the receipt image (jpg, jpeg or png)
        #[arg(long)]
        receipt: PathBuf,
    },

    /// Interactive shell: navigate between the bills list and the form
    Ui,

    /// Manage ~/.notefrais/config.toml
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Write the default config file
    Init,
    /// Print the resolved config
    Show,
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Login { email, admin } => {
            let kind = if admin { UserKind::Admin } else { UserKind::Employee };
            session_store::login(&email, kind)?;
        }

        Command::Logout => session_store::logout()?,

        Command::Bills => {
            let cfg = config::load_config()?;
            let store = session_store::FileSessionStore::open()?;
            if cfg.gateway.demo {
                run_bills(store, MemoryBillsGateway::seeded()).await?;
            } else {
                run_bills(store, http_gateway(&cfg)).await?;
            }
        }

        Command::New {
            category,
            name,
            amount,
            date,
            vat,
            pct,
            commentary,
            receipt,
        } => {
            let cfg = config::load_config()?;
            let store = session_store::FileSessionStore::open()?;
            let form = BillForm {
                category,
                name,
                amount,
                date,
                vat,
                pct,
                commentary,
            };
            if cfg.gateway.demo {
                run_new(store, MemoryBillsGateway::seeded(), form, &receipt).await?;
            } else {
                run_new(store, http_gateway(&cfg), form, &receipt).await?;
            }
        }

        Command::Ui => {
            let cfg = config::load_config()?;
            let store = session_store::FileSessionStore::open()?;
            if cfg.gateway.demo {
                tui::run(store, MemoryBillsGateway::seeded())?;
            } else {
                tui::run(store, http_gateway(&cfg))?;
            }
        }

        Command::Config { command } => match command {
            ConfigCommand::Init => config::init_config()?,
            ConfigCommand::Show => config::show_config()?,
        },
    }

    Ok(())
}

fn http_gateway(cfg: &config::Config) -> HttpBillsGateway {
    HttpBillsGateway::new(cfg.gateway.base_url.clone(), cfg.gateway.token.clone())
}

async fn run_bills<S: SessionProvider, G: BillsGateway>(store: S, gateway: G) -> Result<()> {
    let mut router = Router::new(store, gateway);
    let view = router.navigate(BILLS_PATH).await;
    print!("{}", render::render(&view, router.navigation()));
    Ok(())
}

async fn run_new<S: SessionProvider, G: BillsGateway>(
    store: S,
    gateway: G,
    form: BillForm,
    receipt: &Path,
) -> Result<()> {
    let Some(session) = store.current() else {
        bail!("no stored session; run: notefrais login --email <you>");
    };
    let file_name = receipt
        .file_name()
        .and_then(|n| n.to_str())
        .context("receipt path has no file name")?;

    let mut pane = NewBillPane::new(&gateway, session.email);
    match pane.handle_file_change(file_name).await {
        Ok(stub) => println!("Receipt accepted: {} -> {}", stub.file_name, stub.file_url),
        Err(err) => {
            // Inline validation message; nothing was submitted.
            println!("{err}");
            return Ok(());
        }
    }

    match pane.handle_submit(&form).await {
        Ok(route) => {
            drop(pane);
            println!("Bill submitted.");
            let mut router = Router::new(store, gateway);
            let view = router.navigate(route.path().unwrap_or(BILLS_PATH)).await;
            print!("{}", render::render(&view, router.navigation()));
        }
        Err(SubmitError::Invalid(err)) => println!("Validation failed: {err}"),
        Err(SubmitError::Gateway(_)) => {
            // The container already logged the message verbatim.
            println!("The bill could not be submitted; please try again.");
        }
    }

    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
