//! docxvet CLI - review .docx marketing drafts against compliance rules

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;

use docxvet::{ReviewConfig, Reviewer};

#[derive(Parser)]
#[command(name = "docxvet")]
#[command(version)]
#[command(about = "Review .docx marketing drafts against configurable compliance rules", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Review one or more .docx files and write annotated copies
    Review {
        /// Input .docx files
        #[arg(value_name = "FILE", required = true)]
        files: Vec<PathBuf>,

        /// Rule configuration JSON (built-in defaults if not specified)
        #[arg(short, long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// Required title keyword (overrides the config value)
        #[arg(long, value_name = "KEYWORD")]
        title_keyword: Option<String>,

        /// Enable LLM-assisted review (needs OPENAI_API_KEY)
        #[arg(long)]
        llm: bool,

        /// Output directory (next to each input if not specified)
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,

        /// Also write the combined report to a text file
        #[arg(long, value_name = "FILE")]
        report: Option<PathBuf>,
    },

    /// Show document information
    Info {
        /// Input .docx file
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Print the built-in default configuration as JSON
    Config,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Review {
            files,
            config,
            title_keyword,
            llm,
            output,
            report,
        } => run_review(&files, config.as_deref(), title_keyword, llm, output.as_deref(), report.as_deref()),
        Commands::Info { file } => run_info(&file),
        Commands::Config => run_config(),
    };

    if let Err(e) = result {
        eprintln!("{} {}", "error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn run_review(
    files: &[PathBuf],
    config_path: Option<&Path>,
    title_keyword: Option<String>,
    llm: bool,
    output_dir: Option<&Path>,
    report_path: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = load_config(config_path)?;
    if let Some(keyword) = title_keyword {
        config = config.with_title_keyword(keyword);
    }
    log::debug!(
        "review config: min_images={}, llm={}, {} file(s)",
        config.min_images,
        llm,
        files.len()
    );

    let reviewer = Reviewer::new().with_config(config).with_llm(llm);

    let mut combined_report = String::new();
    let mut failures = 0usize;

    for file in files {
        println!("{}", format!("📄 {}", file.display()).bold());

        let outcome = match reviewer.review_file(file) {
            Ok(o) => o,
            Err(e) => {
                eprintln!("  {} {}", "failed:".red().bold(), e);
                failures += 1;
                continue;
            }
        };

        for line in outcome.report.lines() {
            if is_clean_line(line) {
                println!("  {}", line.green());
            } else {
                println!("  {}", line.yellow());
            }
        }

        let out_path = checked_path(file, output_dir);
        fs::write(&out_path, &outcome.document)?;
        println!("  {} {}", "saved:".green().bold(), out_path.display());

        combined_report.push_str(&format!("# {}\n", file.display()));
        combined_report.push_str(&outcome.report.to_text());
        combined_report.push_str("\n\n");
    }

    if let Some(path) = report_path {
        fs::write(path, combined_report.trim_end())?;
        println!("{} {}", "report:".green().bold(), path.display());
    }

    if failures > 0 {
        return Err(format!("{} file(s) failed to process", failures).into());
    }
    Ok(())
}

fn run_info(file: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let data = fs::read(file)?;
    let doc = docxvet::docx::parse_bytes(&data)?;

    println!("{}", format!("📄 {}", file.display()).bold());
    println!("  format:     docx");
    println!("  paragraphs: {}", doc.paragraph_count());
    println!("  media:      {}", doc.media_count());
    println!("  characters: {}", doc.full_text().chars().count());
    Ok(())
}

fn run_config() -> Result<(), Box<dyn std::error::Error>> {
    let config = ReviewConfig::marketing_defaults();
    println!("{}", serde_json::to_string_pretty(&config)?);
    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<ReviewConfig, Box<dyn std::error::Error>> {
    match path {
        Some(p) => {
            let text = fs::read_to_string(p)?;
            Ok(serde_json::from_str(&text)?)
        }
        None => Ok(ReviewConfig::marketing_defaults()),
    }
}

/// `draft.docx` -> `draft_checked.docx`, optionally relocated into `dir`.
fn checked_path(input: &Path, dir: Option<&Path>) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());
    let name = format!("{}_checked.docx", stem);

    match dir {
        Some(d) => d.join(name),
        None => input.with_file_name(name),
    }
}

/// Lines that report no finding are printed green, findings yellow.
fn is_clean_line(line: &str) -> bool {
    const CLEAN_MARKERS: [&str; 8] = [
        "문제 없음",
        "모두 포함됨",
        "언급 없음",
        "오해 표현 없음",
        "개수 충족",
        "URL 포함됨",
        "지정 키워드 포함",
        "기준 미설정",
    ];
    CLEAN_MARKERS.iter().any(|ok| line.contains(ok)) || line.contains(": 0개")
}
