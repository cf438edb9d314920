mod error;
mod export;
mod loader;
mod parser;
mod record;

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use tracing::warn;

#[derive(Parser)]
#[command(name = "resume_parser", about = "Extract structured fields from resume documents")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Json,
    Csv,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse one resume (pdf/docx/txt) into a structured record
    Parse {
        file: PathBuf,
        /// Export format
        #[arg(short, long, value_enum, default_value = "json")]
        format: OutputFormat,
        /// Write here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Skill phrase list, one per line (defaults to the built-in list)
        #[arg(long)]
        skills_file: Option<PathBuf>,
    },
    /// Parse every resume found under a directory
    Batch {
        dir: PathBuf,
        /// Max files to parse (default: all)
        #[arg(short = 'n', long)]
        limit: Option<usize>,
        /// Export format
        #[arg(short, long, value_enum, default_value = "csv")]
        format: OutputFormat,
        /// Write here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Skill phrase list, one per line (defaults to the built-in list)
        #[arg(long)]
        skills_file: Option<PathBuf>,
    },
    /// Show the detected section map for a resume
    Sections { file: PathBuf },
    /// Dump the cleaned extracted text of a resume
    Text { file: PathBuf },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Parse {
            file,
            format,
            output,
            skills_file,
        } => {
            let skills = load_skill_phrases(skills_file.as_deref())?;
            let record = parser::parse_file(&file, &skills)?;
            let rendered = match format {
                OutputFormat::Json => export::to_json(&record)?,
                OutputFormat::Csv => export::to_csv(std::slice::from_ref(&record))?,
            };
            emit(&rendered, output.as_deref())
        }
        Commands::Batch {
            dir,
            limit,
            format,
            output,
            skills_file,
        } => {
            let skills = load_skill_phrases(skills_file.as_deref())?;
            run_batch(&dir, limit, format, output.as_deref(), &skills)
        }
        Commands::Sections { file } => show_sections(&file),
        Commands::Text { file } => {
            let format = loader::DocumentFormat::from_path(&file)?;
            let bytes = std::fs::read(&file)
                .with_context(|| format!("reading {}", file.display()))?;
            let extracted = loader::load(&bytes, format)?;
            println!("{}", parser::clean::clean(&extracted.full_text));
            Ok(())
        }
    };

    let elapsed = t0.elapsed();
    if elapsed.as_secs() >= 1 {
        eprintln!("\nDone in {:.1}s", elapsed.as_secs_f64());
    }

    result
}

fn run_batch(
    dir: &Path,
    limit: Option<usize>,
    format: OutputFormat,
    output: Option<&Path>,
    skills: &[String],
) -> anyhow::Result<()> {
    use indicatif::{ProgressBar, ProgressStyle};
    use rayon::prelude::*;

    let files = collect_resume_files(dir, limit);
    if files.is_empty() {
        println!("No resume files (pdf/docx/txt) found under {}", dir.display());
        return Ok(());
    }
    println!("Parsing {} files...", files.len());

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({per_sec})")
            .unwrap()
            .progress_chars("#>-"),
    );

    let mut records = Vec::with_capacity(files.len());
    let mut errors = 0usize;

    for chunk in files.chunks(64) {
        let results: Vec<_> = chunk
            .par_iter()
            .map(|path| (path.clone(), parser::parse_file(path, skills)))
            .collect();
        for (path, result) in results {
            match result {
                Ok(record) => records.push(record),
                // one bad document never aborts its siblings
                Err(e) => {
                    errors += 1;
                    warn!("{}: {}", path.display(), e);
                }
            }
        }
        pb.inc(chunk.len() as u64);
    }
    pb.finish_and_clear();

    let rendered = match format {
        OutputFormat::Json => export::to_json_many(&records)?,
        OutputFormat::Csv => export::to_csv(&records)?,
    };
    emit(&rendered, output)?;

    println!("Parsed {} resumes ({} errors).", records.len(), errors);
    Ok(())
}

fn show_sections(file: &Path) -> anyhow::Result<()> {
    let format = loader::DocumentFormat::from_path(file)?;
    let bytes = std::fs::read(file).with_context(|| format!("reading {}", file.display()))?;
    let extracted = loader::load(&bytes, format)?;
    let cleaned = parser::clean::clean(&extracted.full_text);
    let sections = parser::sections::split_sections(&cleaned);

    if sections.is_empty() {
        println!("No text extracted.");
        return Ok(());
    }
    for section in &sections {
        let preview = truncate(&section.lines.join(" | "), 100);
        println!(
            "{:<12} {:<24} {}",
            section.kind.label(),
            section.heading.as_deref().unwrap_or("-"),
            preview
        );
    }
    Ok(())
}

fn collect_resume_files(dir: &Path, limit: Option<usize>) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = walkdir::WalkDir::new(dir)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
        .filter(|p| loader::DocumentFormat::from_path(p).is_ok())
        .collect();
    files.sort();
    if let Some(n) = limit {
        files.truncate(n);
    }
    files
}

fn load_skill_phrases(path: Option<&Path>) -> anyhow::Result<Vec<String>> {
    match path {
        Some(p) => {
            let content = std::fs::read_to_string(p)
                .with_context(|| format!("reading skills file {}", p.display()))?;
            let phrases: Vec<String> = content
                .lines()
                .map(str::trim)
                .filter(|l| !l.is_empty() && !l.starts_with('#'))
                .map(String::from)
                .collect();
            anyhow::ensure!(!phrases.is_empty(), "skills file {} is empty", p.display());
            Ok(phrases)
        }
        None => Ok(parser::extract::skills::DEFAULT_SKILLS
            .iter()
            .map(|s| s.to_string())
            .collect()),
    }
}

fn emit(rendered: &str, output: Option<&Path>) -> anyhow::Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, rendered)
                .with_context(|| format!("writing {}", path.display()))?;
            println!("Wrote {}", path.display());
        }
        None => println!("{}", rendered),
    }
    Ok(())
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max).collect();
        format!("{}...", truncated)
    }
}
