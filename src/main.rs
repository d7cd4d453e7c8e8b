use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use expense_tracker::config::{Config, DEFAULT_CONFIG_PATH};
use expense_tracker::core::{
    Expense, ExpenseForm, ExpenseStore, by_category, format_amount, pie_slices, total_of,
};
use expense_tracker::import;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "expenses", about = "Track personal expenses")]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive session reading commands from stdin
    Session,
    /// Print totals and chart data for a saved snapshot
    Report {
        #[arg(long)]
        input: PathBuf,
    },
    /// List every expense in a saved snapshot
    List {
        #[arg(long)]
        input: PathBuf,
    },
    /// Show how to reach support
    Support,
    /// Report a bug
    BugReport {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        description: String,
    },
}

fn init_logger() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logger();
    let cli = Cli::parse();
    let cfg = match &cli.config {
        Some(path) => Config::load(path, true)?,
        None => Config::load(Path::new(DEFAULT_CONFIG_PATH), false)?,
    };
    debug!(?cfg, "Loaded configuration");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match cli.command {
        Commands::Session => {
            let stdin = io::stdin();
            run_session(&cfg, stdin.lock(), &mut out)?;
        }
        Commands::Report { input } => {
            let expenses = import::load(&input, cfg.amount_policy)?;
            print_report(&cfg, &expenses, &mut out)?;
        }
        Commands::List { input } => {
            let expenses = import::load(&input, cfg.amount_policy)?;
            for expense in &expenses {
                print_expense(&cfg, expense, &mut out)?;
            }
        }
        Commands::Support => match &cfg.support.contact {
            Some(contact) => writeln!(out, "Contact: {contact}")?,
            None => writeln!(out, "No support contact configured")?,
        },
        Commands::BugReport {
            name,
            email,
            description,
        } => {
            // Reports are acknowledged but not stored or sent anywhere.
            info!(%name, %email, length = description.len(), "Bug report received");
            writeln!(out, "Bug report submitted!")?;
        }
    }
    Ok(())
}

fn print_expense(cfg: &Config, expense: &Expense, out: &mut impl Write) -> io::Result<()> {
    writeln!(
        out,
        "{} | {} | {} | {} | {}",
        expense.id,
        expense.category,
        expense.date,
        expense.description,
        format_amount(expense.amount, &cfg.currency_symbol)
    )
}

fn print_report(cfg: &Config, expenses: &[Expense], out: &mut impl Write) -> io::Result<()> {
    writeln!(
        out,
        "Total Expenses: {}",
        format_amount(total_of(expenses), &cfg.currency_symbol)
    )?;
    for (category, amount) in by_category(expenses).iter() {
        writeln!(
            out,
            "  {category}: {}",
            format_amount(amount, &cfg.currency_symbol)
        )?;
    }
    for slice in pie_slices(expenses, cfg.color_strategy) {
        writeln!(out, "  {} -> {}", slice.name, slice.color)?;
    }
    Ok(())
}

const SESSION_HELP: &str = "commands:
  add <amount> <category> [description...] [--date=YYYY-MM-DD]
  edit <id> <amount> <category> [description...] [--date=YYYY-MM-DD]
  list | show <id> | total | report
  import <file.json|file.csv>
  export <file.json|file.csv>
  help | quit
quote arguments containing spaces: add 4.5 \"Fast Food\" burger";

const DATE_FLAG: &str = "--date=";

/// Splits a session line on whitespace, keeping double-quoted runs together.
///
/// `""` produces an empty argument.
fn tokenize(line: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_token = false;
    let mut quoted = false;
    for c in line.chars() {
        match c {
            '"' => {
                quoted = !quoted;
                in_token = true;
            }
            c if c.is_whitespace() && !quoted => {
                if in_token {
                    tokens.push(std::mem::take(&mut current));
                    in_token = false;
                }
            }
            c => {
                current.push(c);
                in_token = true;
            }
        }
    }
    if in_token {
        tokens.push(current);
    }
    tokens
}

/// Fills the amount, category and description of `form` from session
/// arguments, honoring a `--date=` flag anywhere in the list.
fn fill_form(form: &mut ExpenseForm, amount: &str, category: &str, rest: &[&str]) {
    form.amount = amount.to_string();
    form.category = category.to_string();
    let mut description = Vec::new();
    for arg in rest {
        match arg.strip_prefix(DATE_FLAG) {
            Some(date) => form.date = date.to_string(),
            None => description.push(*arg),
        }
    }
    form.description = description.join(" ");
}

/// Runs line commands against a store that lives only for this session.
fn run_session(cfg: &Config, input: impl BufRead, out: &mut impl Write) -> io::Result<()> {
    let mut store = ExpenseStore::new();
    for line in input.lines() {
        let line = line?;
        let tokens = tokenize(&line);
        let Some((command, args)) = tokens.split_first() else {
            continue;
        };
        let args: Vec<&str> = args.iter().map(String::as_str).collect();
        match (command.as_str(), args.as_slice()) {
            ("add", [amount, category, rest @ ..]) => {
                let mut form = ExpenseForm::new();
                fill_form(&mut form, amount, category, rest);
                match form.to_new_expense(cfg.amount_policy) {
                    Ok(expense) => {
                        writeln!(out, "added {}", expense.id)?;
                        store.add(expense);
                    }
                    Err(e) => writeln!(out, "error: {e}")?,
                }
            }
            ("edit", [id, amount, category, rest @ ..]) => {
                let Some(existing) = store.get(id).cloned() else {
                    writeln!(out, "no expense with id {id}")?;
                    continue;
                };
                let mut form = ExpenseForm::from_expense(&existing);
                fill_form(&mut form, amount, category, rest);
                match form.apply_to(&existing, cfg.amount_policy) {
                    Ok(expense) => {
                        store.update(expense);
                        writeln!(out, "updated {id}")?;
                    }
                    Err(e) => writeln!(out, "error: {e}")?,
                }
            }
            ("list", []) => {
                for expense in store.iter() {
                    print_expense(cfg, expense, out)?;
                }
            }
            ("show", [id]) => match store.get(id) {
                Some(expense) => print_expense(cfg, expense, out)?,
                None => writeln!(out, "no expense with id {id}")?,
            },
            ("total", []) => writeln!(
                out,
                "Total Expenses: {}",
                format_amount(total_of(&store.snapshot()), &cfg.currency_symbol)
            )?,
            ("report", []) => print_report(cfg, &store.snapshot(), out)?,
            ("import", [path]) => match import::load(Path::new(path), cfg.amount_policy) {
                Ok(expenses) => {
                    let count = expenses.len();
                    store.extend(expenses);
                    writeln!(out, "imported {count} expenses")?;
                }
                Err(e) => writeln!(out, "error: {e}")?,
            },
            ("export", [path]) => match import::save(Path::new(path), &store.snapshot()) {
                Ok(()) => writeln!(out, "exported {} expenses", store.len())?,
                Err(e) => writeln!(out, "error: {e}")?,
            },
            ("help", _) => writeln!(out, "{SESSION_HELP}")?,
            ("quit", _) | ("exit", _) => break,
            _ => writeln!(out, "unrecognized command, try 'help'")?,
        }
    }
    Ok(())
}
