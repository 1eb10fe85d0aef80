use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};

use wedding_bells::backend::LocalBackend;
use wedding_bells::cli::{
    handle_auth_command, handle_category_command, handle_expense_command, handle_income_command,
    handle_summary_command, require_dashboard,
};
use wedding_bells::config::{Settings, WeddingPaths};
use wedding_bells::logging;
use wedding_bells::session::Session;

#[derive(Parser)]
#[command(
    name = "wedding",
    version,
    about = "Terminal wedding budget tracker",
    long_about = "Wedding Bells tracks a wedding budget from the terminal: planned and \
                  paid expenses by category, income by source, and how much is left \
                  (or how far over budget you are)."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI
    #[command(alias = "ui")]
    Tui,

    /// Sign up, sign in and sign out
    #[command(subcommand)]
    Auth(wedding_bells::cli::AuthCommands),

    /// Expense commands
    #[command(subcommand, alias = "exp")]
    Expense(wedding_bells::cli::ExpenseCommands),

    /// Income commands
    #[command(subcommand)]
    Income(wedding_bells::cli::IncomeCommands),

    /// Category commands
    #[command(subcommand)]
    Category(wedding_bells::cli::CategoryCommands),

    /// Show budget totals
    Summary {
        /// Also break expenses down by category
        #[arg(long)]
        by_category: bool,
    },

    /// Create the data directories and default settings
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = WeddingPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    if matches!(cli.command, Some(Commands::Tui)) {
        logging::init_file(&paths.log_file(), &settings.log_level)?;
    } else {
        logging::init_stderr(&settings.log_level);
    }

    match cli.command {
        Some(Commands::Init) => {
            println!("Initializing Wedding Bells at: {}", paths.base_dir().display());
            paths.ensure_directories()?;
            settings.save(&paths)?;
            println!("Initialization complete!");
            println!();
            println!("Create an account with 'wedding auth sign-up <email>'.");
            return Ok(());
        }
        Some(Commands::Config) => {
            println!("Wedding Bells Configuration");
            println!("===========================");
            println!("Base directory:  {}", paths.base_dir().display());
            println!("Data directory:  {}", paths.data_dir().display());
            println!("Settings file:   {}", paths.settings_file().display());
            println!("Log file:        {}", paths.log_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Date format:     {}", settings.date_format);
            println!("  Log level:       {}", settings.log_level);
            return Ok(());
        }
        None => {
            println!("Wedding Bells - Terminal wedding budget tracker");
            println!();
            println!("Run 'wedding --help' for usage information.");
            println!("Run 'wedding tui' to launch the interactive interface.");
            return Ok(());
        }
        _ => {}
    }

    let backend = Arc::new(LocalBackend::open(&paths)?);
    let mut session = Session::new(backend.clone(), backend);

    match cli.command {
        Some(Commands::Tui) => {
            wedding_bells::tui::run_tui(session, &settings)?;
        }
        Some(Commands::Auth(cmd)) => {
            handle_auth_command(&mut session, cmd)?;
        }
        Some(Commands::Expense(cmd)) => {
            handle_expense_command(require_dashboard(&mut session)?, &settings, cmd)?;
        }
        Some(Commands::Income(cmd)) => {
            handle_income_command(require_dashboard(&mut session)?, &settings, cmd)?;
        }
        Some(Commands::Category(cmd)) => {
            handle_category_command(require_dashboard(&mut session)?, cmd)?;
        }
        Some(Commands::Summary { by_category }) => {
            handle_summary_command(require_dashboard(&mut session)?, &settings, by_category)?;
        }
        Some(Commands::Init) | Some(Commands::Config) | None => {}
    }

    Ok(())
}
