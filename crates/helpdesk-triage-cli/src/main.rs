use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use clap_complete::generate;
use colored::Colorize;
use tracing::debug;

use helpdesk_triage_core::priority::{Signal, PRIORITY_RULES};
use helpdesk_triage_core::{Config, Priority, Result, TicketClassifier};

mod args;
mod logger;
mod session;

use args::{Cli, Commands, ConfigAction, Shell};
use session::OutputFormat;

fn main() -> ExitCode {
    let cli = Cli::parse();
    logger::init_cli_logger(cli.verbose, cli.quiet);

    let base_dir = resolve_base_dir(cli.base_dir);
    debug!(base_dir = %base_dir.display(), "resolved base directory");

    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Summary
    };

    let result = match cli.command {
        Some(Commands::Categories) => handle_categories(&base_dir),
        Some(Commands::Config { action }) => handle_config(action, &base_dir),
        Some(Commands::Completions { shell }) => {
            handle_completions(shell);
            Ok(())
        }
        None => handle_triage(&base_dir, cli.description.as_deref(), format),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "[ERROR]".red().bold(), e);
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

fn handle_completions(shell: Shell) {
    let mut cmd = Cli::command();
    let shell = match shell {
        Shell::Bash => clap_complete::Shell::Bash,
        Shell::Zsh => clap_complete::Shell::Zsh,
        Shell::Fish => clap_complete::Shell::Fish,
        Shell::PowerShell => clap_complete::Shell::PowerShell,
        Shell::Elvish => clap_complete::Shell::Elvish,
    };
    generate(shell, &mut cmd, "helpdesk-triage", &mut io::stdout());
}

fn resolve_base_dir(cli_base: Option<PathBuf>) -> PathBuf {
    if let Some(base) = cli_base {
        return base;
    }

    if let Ok(base) = std::env::var("HELPDESK_TRIAGE_BASE") {
        return PathBuf::from(base);
    }

    dirs::home_dir()
        .map(|h| h.join(".helpdesk-triage"))
        .unwrap_or_else(|| PathBuf::from(".helpdesk-triage"))
}

fn load_classifier(base_dir: &Path) -> Result<TicketClassifier> {
    let config = Config::load(base_dir)?;
    Ok(TicketClassifier::from_config(&config))
}

fn handle_triage(base_dir: &Path, description: Option<&str>, format: OutputFormat) -> Result<()> {
    let classifier = load_classifier(base_dir)?;
    let mut stdout = io::stdout().lock();
    let mut stderr = io::stderr();

    match description {
        Some(description) => {
            session::run_once(&classifier, description, &mut stdout, &mut stderr, format)?
        }
        None => session::run_interactive(
            &classifier,
            io::stdin().lock(),
            &mut stdout,
            &mut stderr,
            format,
        )?,
    }

    Ok(())
}

fn handle_categories(base_dir: &Path) -> Result<()> {
    let classifier = load_classifier(base_dir)?;
    let rules = classifier.rules();

    println!();
    println!("{}", "Category rules (first match wins):".cyan().bold());
    println!();
    for (i, rule) in rules.all().iter().enumerate() {
        println!(
            "{}. {} {}",
            (i + 1).to_string().bold(),
            rule.label.cyan().bold(),
            format!("[{}, priority {}]", rule.key, rule.priority).dimmed()
        );
        println!("   Keywords: {}", rule.keywords.join(", "));
        println!("   Action:   {}", rule.recommendation);
        println!();
    }

    let fallback = rules.fallback();
    println!("{} {}", "Fallback:".yellow(), fallback.label.cyan().bold());
    println!("   Action:   {}", fallback.recommendation);
    println!();

    println!("{}", "Priority signals:".cyan().bold());
    println!();
    for def in classifier.signals().all() {
        println!("  {} {}", format!("{:<12}", def.signal).yellow(), def.keywords.join(", "));
        if !def.negations.is_empty() {
            println!("  {:<12} ignores: {}", "", def.negations.join(", "));
        }
    }
    println!();

    println!("{}", "Priority rules (first match wins):".cyan().bold());
    println!();
    for rule in PRIORITY_RULES {
        let requires: Vec<&str> = rule.requires.iter().map(|s| Signal::name(*s)).collect();
        println!("  {:<24} -> {}", requires.join(" + "), rule.priority);
    }
    println!("  {:<24} -> {}", "(otherwise)", Priority::default());
    println!();

    Ok(())
}

fn handle_config(action: ConfigAction, base_dir: &Path) -> Result<()> {
    match action {
        ConfigAction::Path => {
            let path = Config::path(base_dir);
            println!("{}", path.display());
        }
        ConfigAction::Init => {
            let path = Config::init(base_dir)?;
            println!("{} {}", "Initialized:".green(), path.display());
        }
        ConfigAction::Show => {
            let config = Config::load(base_dir)?;
            let content = config.to_toml()?;
            if content.trim().is_empty() {
                println!("{}", "No overrides; using builtin keyword tables.".dimmed());
            } else {
                println!("{}", content.trim_end());
            }
        }
    }

    Ok(())
}
