//! ScamGuard CLI - Main entry point

use clap::{Parser, Subcommand};
use scamguard_cli::{commands, AppContext, ScanRequest};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "scamguard")]
#[command(about = "ScamGuard - Internship scam scanner", long_about = None)]
struct Cli {
    /// Classifier config file (JSON)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the screening questions in answer order
    Questions,

    /// Classify questionnaire answers
    Classify {
        /// Five comma-separated answers (yes/no/not sure), in question order
        #[arg(long)]
        answers: String,
        /// Recruiter email address
        #[arg(long)]
        email: Option<String>,
        /// Seed for reproducible jitter and indicators
        #[arg(long)]
        seed: Option<u64>,
        /// Print JSON instead of the text report
        #[arg(long)]
        json: bool,
    },

    /// Run a full scan of an internship offer
    Scan {
        /// Offer text or job description
        #[arg(long)]
        text: String,
        /// Company name
        #[arg(long)]
        company: String,
        /// Recruiter email address
        #[arg(long)]
        email: String,
        /// Recruiter name
        #[arg(long)]
        recruiter: Option<String>,
        /// Recruiter phone number
        #[arg(long)]
        phone: Option<String>,
        /// Offer letter file (PDF, JPG or PNG, up to 10 MiB)
        #[arg(long)]
        offer_letter: Option<PathBuf>,
        /// Five comma-separated answers (yes/no/not sure), in question order
        #[arg(long)]
        answers: String,
        /// Seed for reproducible jitter and indicators
        #[arg(long)]
        seed: Option<u64>,
        /// Simulated processing delay in milliseconds
        #[arg(long, default_value = "0")]
        delay_ms: u64,
        /// Print JSON instead of the text report
        #[arg(long)]
        json: bool,
    },

    /// Print the effective classifier configuration
    Config,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let ctx = AppContext::new(cli.config.as_deref())?;

    match cli.command {
        Commands::Questions => {
            commands::print_questions();
        }

        Commands::Classify {
            answers,
            email,
            seed,
            json,
        } => {
            let questionnaire = commands::parse_answers(&answers)?;
            let assessment = commands::classify(&ctx, &questionnaire, email.as_deref(), seed)?;
            commands::print_assessment(&assessment, json)?;
        }

        Commands::Scan {
            text,
            company,
            email,
            recruiter,
            phone,
            offer_letter,
            answers,
            seed,
            delay_ms,
            json,
        } => {
            let request = ScanRequest {
                internship_text: text,
                company_name: company,
                recruiter_email: email,
                recruiter_name: recruiter,
                recruiter_phone: phone,
                offer_letter,
                answers: commands::parse_answers(&answers)?,
            };
            let summary =
                commands::scan(&ctx, request, seed, Duration::from_millis(delay_ms)).await?;
            commands::print_summary(&summary, json)?;
        }

        Commands::Config => {
            commands::print_config(&ctx)?;
        }
    }

    Ok(())
}
