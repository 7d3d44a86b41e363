//! Wallet Shell - Terminal User Interface
//!
//! Entry point: loads the configuration, opens (or creates) the accounts vault
//! and runs the shell.

use anyhow::{bail, Context};
use clap::Parser;
use std::path::PathBuf;

use wallet_shell::{
    tui::{utils::logger, App},
    AccountsStore, ShellConfig,
};

#[derive(Parser)]
#[command(name = "wallet-shell")]
#[command(about = "Wallet shell - accounts and navigation in the terminal")]
#[command(version)]
struct Args {
    /// Path to the configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Path to the accounts vault
    #[arg(long)]
    vault: Option<PathBuf>,

    /// Wallet password
    #[arg(short, long, env = "WALLET_SHELL_PASSWORD", hide_env_values = true)]
    password: Option<String>,

    /// Show admin and developer entries regardless of the selected account
    #[arg(long)]
    admin: bool,

    /// Route to open on start
    #[arg(long)]
    route: Option<String>,

    /// Use the single-account panel
    #[arg(long)]
    single_account: bool,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Truncate the log file before starting
    #[arg(long)]
    clear_log: bool,

    /// Create a vault with one generated account and exit
    #[arg(long)]
    init: bool,
}

fn load_config(args: &Args) -> anyhow::Result<ShellConfig> {
    let mut config =
        ShellConfig::load(args.config.as_deref()).context("Failed to load configuration")?;

    if args.admin {
        config.admin = true;
    }
    if args.single_account {
        config.multi_account = false;
    }
    if let Some(route) = &args.route {
        config.initial_route = route.clone();
    }
    if let Some(vault) = &args.vault {
        config.vault_path = Some(vault.clone());
    }

    config.validate().context("Invalid command line override")?;
    Ok(config)
}

/// Create the vault and, when missing, a config file pointing at it.
///
/// The config file goes to `--config` if given. Only the vault path is
/// written; command line switches such as `--admin` stay out of it.
fn init_vault(args: &Args, config: &ShellConfig, password: &str) -> anyhow::Result<()> {
    let vault_path = config.vault_path();
    let store = AccountsStore::create_vault(&vault_path, password)
        .with_context(|| format!("Failed to create vault at {}", vault_path.display()))?;

    println!("✓ Vault created at {}", vault_path.display());
    if let Some(account) = store.selected_account() {
        println!("✓ {}: {}", account.id, account.address);
    }

    let config_path = args.config.clone().unwrap_or_else(ShellConfig::default_path);
    if !config_path.exists() {
        let initial = ShellConfig {
            vault_path: config.vault_path.clone(),
            ..ShellConfig::default()
        };
        initial
            .save(&config_path)
            .with_context(|| format!("Failed to write {}", config_path.display()))?;
        println!("✓ Configuration written to {}", config_path.display());
    }
    Ok(())
}

async fn run(args: Args) -> anyhow::Result<()> {
    let config = load_config(&args)?;

    let log_path = config.log_file();
    if args.clear_log {
        logger::clear_log(&log_path);
    }
    if let Err(e) = logger::init_logger(&log_path, args.debug) {
        eprintln!("Warning: logging disabled: {}", e);
    }

    let Some(password) = args.password.as_deref() else {
        bail!("A wallet password is required (--password or WALLET_SHELL_PASSWORD)");
    };

    if args.init {
        return init_vault(&args, &config, password);
    }

    let vault_path = config.vault_path();
    if !vault_path.exists() {
        bail!("No vault at {}. Create one with --init", vault_path.display());
    }
    let accounts = AccountsStore::open_vault(&vault_path, password)
        .with_context(|| format!("Failed to open vault at {}", vault_path.display()))?;

    let app = App::new(config, accounts);
    wallet_shell::run_tui(app).await.context("Shell error")?;
    Ok(())
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    if let Err(e) = run(args).await {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
