//! CLI entry point for the GCSE grader.
//!
//! Provides subcommands for grading a single score, averaging a CSV of
//! results, writing a class report from a results directory, and summarizing
//! a student's results fetched from Supabase.

use anyhow::Result;
use clap::{Parser, Subcommand};
use gcse_grader::fetch::supabase::{SupabaseConfig, fetch_student_records};
use gcse_grader::grading::{
    Tier, calculate_average_grade, grade_descriptor, grade_result, improvement_suggestions,
    next_grade_info, summarize_student, validate_percentage,
};
use gcse_grader::output::{append_record, print_json, print_pretty, write_json};
use gcse_grader::records::load_records;
use gcse_grader::report::write_report;
use serde_json::json;
use std::ffi::OsStr;
use std::path::Path;
use tracing::{info, warn};
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "gcse_grader")]
#[command(about = "GCSE grade calculator for language assessment results", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Grade a single percentage score
    Grade {
        /// Percentage score between 0 and 100
        #[arg(value_name = "PERCENTAGE", allow_negative_numbers = true)]
        percentage: f64,

        /// Exam tier: foundation or higher
        #[arg(short, long, default_value_t = Tier::Higher)]
        tier: Tier,
    },
    /// Average the grades of every row in a results CSV
    Average {
        /// CSV with percentage_score and optional tier columns
        #[arg(value_name = "FILE")]
        input: String,

        /// Optional CSV file to append each graded row to
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Summarize every student directory and write a class report
    Report {
        /// Directory containing student_id=<id> subdirectories
        #[arg(short = 'd', long, default_value = "results")]
        input_dir: String,

        /// Path of the JSON report to write
        #[arg(short, long, default_value = "reports/class.json")]
        output: String,
    },
    /// Fetch a student's results from Supabase and summarize them
    Fetch {
        /// Student id as stored in the results table
        #[arg(value_name = "STUDENT_ID")]
        student_id: String,

        /// Optional path to write the summary JSON to
        #[arg(short, long)]
        output: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/gcse_grader.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("gcse_grader.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse()?));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Grade { percentage, tier } => {
            let percentage = validate_percentage(percentage)?;
            let result = grade_result(percentage, tier);
            print_pretty(&result);

            print_json(&json!({
                "result": result,
                "next": next_grade_info(percentage, tier),
                "suggestions": improvement_suggestions(result.grade, tier),
            }))?;
        }
        Commands::Average { input, output } => {
            let records = load_records(&input)?;
            if records.is_empty() {
                warn!(input = %input, "No rows to grade");
            }

            if let Some(output) = &output {
                for record in &records {
                    let result = grade_result(record.percentage_score, record.tier_or_default());
                    append_record(output, &result)?;
                }
                info!(output = %output, rows = records.len(), "Graded rows appended");
            }

            let average = calculate_average_grade(&records);
            info!(
                rows = records.len(),
                average_grade = ?average,
                descriptor = grade_descriptor(average),
                "Average grade"
            );
        }
        Commands::Report { input_dir, output } => {
            write_report(&input_dir, &output)?;
        }
        Commands::Fetch { student_id, output } => {
            let config = SupabaseConfig::from_env()?;
            let client = config.client()?;

            let records = fetch_student_records(&client, &config, &student_id).await?;
            let summary = summarize_student(&student_id, &records);

            match output {
                Some(path) => {
                    write_json(&path, &summary)?;
                    info!(path = %path, "Student summary written");
                }
                None => print_json(&summary)?,
            }
        }
    }

    Ok(())
}
