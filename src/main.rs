use chrono::{DateTime, Local};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use tracing::info;
use vacancy_watch::availability::{self, AvailabilityReport};
use vacancy_watch::config::AppConfig;
use vacancy_watch::error::AppError;
use vacancy_watch::fetch::PageFetcher;
use vacancy_watch::telemetry;

// Exit codes consumed by the external scheduler.
const EXIT_AVAILABLE: i32 = 0;
const EXIT_NOT_AVAILABLE: i32 = 1;
const EXIT_ERROR: i32 = 2;

#[derive(Parser, Debug)]
#[command(
    name = "vacancy-watch",
    about = "Check an apartment listing page for two-bedroom availability",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch the listing page once and report availability (default command)
    Check(CheckArgs),
}

#[derive(Args, Debug, Default)]
struct CheckArgs {
    /// Override the configured listing page URL
    #[arg(long)]
    url: Option<String>,
    /// Override the configured request timeout in seconds
    #[arg(long)]
    timeout_secs: Option<u64>,
    /// Print the check result as JSON instead of the console report
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Serialize)]
struct CheckRecord<'a> {
    checked_at: DateTime<Local>,
    url: &'a str,
    available: bool,
    evidence: &'a [String],
}

#[tokio::main]
async fn main() {
    let code = match run_cli().await {
        Ok(true) => EXIT_AVAILABLE,
        Ok(false) => EXIT_NOT_AVAILABLE,
        Err(err) => {
            eprintln!("application error: {err}");
            EXIT_ERROR
        }
    };
    std::process::exit(code);
}

async fn run_cli() -> Result<bool, AppError> {
    let cli = Cli::parse();
    let Command::Check(args) = cli
        .command
        .unwrap_or_else(|| Command::Check(CheckArgs::default()));
    run_check(args).await
}

async fn run_check(mut args: CheckArgs) -> Result<bool, AppError> {
    let mut config = AppConfig::load()?;

    if let Some(url) = args.url.take() {
        config.target.url = url;
    }
    if let Some(timeout_secs) = args.timeout_secs.take() {
        config.target.timeout_secs = timeout_secs;
    }

    telemetry::init(&config.telemetry)?;

    info!(?config.environment, url = %config.target.url, "starting availability check");

    let checked_at = Local::now();
    let fetcher = PageFetcher::new(config.target.timeout())?;
    let page = fetcher.fetch(&config.target.url).await?;
    let report = availability::detect(&page);

    if args.json {
        let record = CheckRecord {
            checked_at,
            url: &config.target.url,
            available: report.available,
            evidence: &report.evidence,
        };
        println!("{}", serde_json::to_string_pretty(&record)?);
    } else {
        render_check_report(&config.target.property, &config.target.url, checked_at, &report);
    }

    Ok(report.available)
}

fn render_check_report(
    property: &str,
    url: &str,
    checked_at: DateTime<Local>,
    report: &AvailabilityReport,
) {
    println!(
        "Checking {} at {}",
        property,
        checked_at.format("%Y-%m-%d %H:%M:%S")
    );
    println!("URL: {url}");
    println!("{}", "-".repeat(50));

    // Capitalized booleans match the report format the monitoring logs have
    // always carried.
    let shown = if report.available { "True" } else { "False" };
    println!("Two-bedroom available: {shown}");
    if !report.evidence.is_empty() {
        println!("Details: {}", report.evidence_summary());
    }

    if report.available {
        println!("\n*** TWO-BEDROOM AVAILABLE! ***");
    } else {
        println!("\nNo two-bedroom units available yet");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_args_parse_overrides() {
        let cli = Cli::try_parse_from([
            "vacancy-watch",
            "check",
            "--url",
            "https://example.com/listing",
            "--timeout-secs",
            "5",
            "--json",
        ])
        .expect("args parse");

        let Some(Command::Check(args)) = cli.command else {
            panic!("expected check command");
        };
        assert_eq!(args.url.as_deref(), Some("https://example.com/listing"));
        assert_eq!(args.timeout_secs, Some(5));
        assert!(args.json);
    }

    #[test]
    fn missing_subcommand_defaults_to_check() {
        let cli = Cli::try_parse_from(["vacancy-watch"]).expect("bare invocation parses");
        assert!(cli.command.is_none());
    }

    #[test]
    fn check_record_serializes_expected_shape() {
        let evidence = vec!["Price found: $2,500+".to_string()];
        let record = CheckRecord {
            checked_at: Local::now(),
            url: "https://example.com/listing",
            available: true,
            evidence: &evidence,
        };

        let value = serde_json::to_value(&record).expect("record serializes");
        assert_eq!(value["url"], "https://example.com/listing");
        assert_eq!(value["available"], true);
        assert_eq!(value["evidence"][0], "Price found: $2,500+");
        assert!(value["checked_at"].is_string());
    }
}
