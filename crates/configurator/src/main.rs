use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use configurator_lib::command::execute_json_batch;
use configurator_lib::export::render_text;
use configurator_lib::i18n::{self, t, Lang};
use configurator_lib::session::Session;
use configurator_lib::state::{format_price, AppSettings};

#[derive(Parser)]
#[command(name = "configurator", version, about = "Modular container assembly configurator")]
struct Cli {
    /// Output language (ru or en)
    #[arg(long, global = true)]
    lang: Option<Lang>,
    /// Settings file to use instead of the one in the config dir
    #[arg(long, global = true)]
    settings: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Execute a JSON array of commands against a fresh session
    Run { script: PathBuf },
    /// Print the price breakdown of a saved assembly
    Quote { assembly: PathBuf },
    /// Print the text report of a saved assembly
    Report { assembly: PathBuf },
    /// Print the effective settings
    Settings {
        /// Also write them to the config dir
        #[arg(long)]
        save: bool,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "configurator=info".into()),
        )
        .init();

    let cli = Cli::parse();

    let mut settings = match &cli.settings {
        Some(path) => AppSettings::load_from(path)?,
        None => AppSettings::load(),
    };
    if let Some(lang) = cli.lang {
        settings.export.lang = lang;
    }
    i18n::set_lang(settings.export.lang);

    match cli.command {
        Commands::Run { script } => {
            let json = read_file(&script)?;
            let mut session = Session::with_settings(settings);
            let responses = execute_json_batch(&mut session, &json)?;
            let failed = responses.iter().filter(|r| !r.success).count();
            for response in &responses {
                println!("{}", serde_json::to_string(response)?);
            }
            tracing::info!(
                "Executed {} commands ({failed} failed), {} units, total {}",
                responses.len(),
                session.unit_count(),
                session.total_price()
            );
        }
        Commands::Quote { assembly } => {
            let session = load_session(&assembly, settings)?;
            let breakdown = session.price_breakdown();
            let currency = session.settings().export.currency_label();
            println!("{}: {}", t("report.count"), breakdown.unit_count);
            println!("  {}", format_price(breakdown.base_total, currency));
            println!("+ {}", format_price(breakdown.modifications_total, currency));
            println!("{}: {}", t("report.total"), format_price(breakdown.total, currency));
        }
        Commands::Report { assembly } => {
            let session = load_session(&assembly, settings)?;
            print!("{}", render_text(&session.report(), &session.settings().export));
        }
        Commands::Settings { save } => {
            println!("{}", serde_json::to_string_pretty(&settings)?);
            if save {
                settings.save();
            }
        }
    }

    Ok(())
}

fn read_file(path: &Path) -> Result<String, String> {
    std::fs::read_to_string(path).map_err(|e| format!("Failed to read {}: {e}", path.display()))
}

fn load_session(path: &Path, settings: AppSettings) -> Result<Session, Box<dyn std::error::Error>> {
    let json = read_file(path)?;
    let mut session = Session::with_settings(settings);
    session.load_json(&json)?;
    tracing::info!("Loaded assembly from {} ({} units)", path.display(), session.unit_count());
    let problems = session.validator().validate_all();
    for problem in &problems {
        tracing::warn!("{problem}");
    }
    Ok(session)
}
