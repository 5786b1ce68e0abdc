use std::path::PathBuf;

use anyhow::Result;
use chrono::Local;
use clap::{Parser, Subcommand};

use crystal_budget::cli::{
    handle_budget_command, handle_category_command, handle_expense_command,
    handle_export_command, handle_income_command, handle_source_command, BudgetCommands,
    CategoryCommands, ExpenseCommands, ExportArgs, IncomeCommands, SourceCommands,
};
use crystal_budget::config::paths::DATA_DIR_ENV;
use crystal_budget::config::{CrystalPaths, Settings};
use crystal_budget::logging::init_tracing;
use crystal_budget::services::PeriodService;
use crystal_budget::storage::Storage;

#[derive(Parser)]
#[command(
    name = "crystal",
    version,
    about = "Budget allocation and balance tracking",
    long_about = "CrystalBudget splits each income source across spending categories \
                  by fixed amounts or percentages, then tracks what is spent, what \
                  remains, and what carries over from month to month."
)]
struct Cli {
    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use this directory for settings and data
    #[arg(long, global = true, env = DATA_DIR_ENV)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize settings and an empty budget
    Init,

    /// Show current configuration and paths
    Config,

    /// Income source management
    #[command(subcommand)]
    Source(SourceCommands),

    /// Category management
    #[command(subcommand)]
    Category(CategoryCommands),

    /// Record and list income
    #[command(subcommand)]
    Income(IncomeCommands),

    /// Record and list expenses
    #[command(subcommand)]
    Expense(ExpenseCommands),

    /// Budget views for a period
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// Export a period's budget overview
    Export(ExportArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let paths = match cli.data_dir {
        Some(dir) => CrystalPaths::with_base_dir(dir),
        None => CrystalPaths::new()?,
    };
    let settings = Settings::load_or_create(&paths)?;

    let mut storage = Storage::new(paths.clone())?;
    storage.load()?;

    let periods = PeriodService::new(Local::now().date_naive());

    match cli.command {
        Some(Commands::Init) => {
            if storage.is_initialized() {
                println!("CrystalBudget is already initialized at: {}", paths.base_dir().display());
                return Ok(());
            }

            settings.save(&paths)?;
            storage.save()?;
            println!("Initialized CrystalBudget at: {}", paths.base_dir().display());
            println!();
            println!("Next steps:");
            println!("  crystal source add Salary --expected 3000");
            println!("  crystal category add Food --alloc Salary:20%");
            println!("  crystal budget overview");
        }
        Some(Commands::Config) => {
            println!("CrystalBudget Configuration");
            println!("===========================");
            println!("Base directory:  {}", paths.base_dir().display());
            println!("Settings file:   {}", paths.settings_file().display());
            println!("Snapshot file:   {}", paths.snapshot_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol:        {}", settings.currency_symbol);
            println!("  Date format:            {}", settings.date_format);
            println!("  Hide empty categories:  {}", settings.hide_empty_categories);
        }
        Some(Commands::Source(cmd)) => handle_source_command(&mut storage, &settings, cmd)?,
        Some(Commands::Category(cmd)) => handle_category_command(&mut storage, &settings, cmd)?,
        Some(Commands::Income(cmd)) => {
            handle_income_command(&mut storage, &settings, &periods, cmd)?
        }
        Some(Commands::Expense(cmd)) => {
            handle_expense_command(&mut storage, &settings, &periods, cmd)?
        }
        Some(Commands::Budget(cmd)) => handle_budget_command(&storage, &settings, &periods, cmd)?,
        Some(Commands::Export(args)) => handle_export_command(&storage, &periods, args)?,
        None => {
            println!("CrystalBudget - budget allocation and balance tracking");
            println!();
            println!("Run 'crystal --help' for usage information.");
        }
    }

    Ok(())
}
