//! ndoc — assemble documentation records into a section/class/member tree.
//!
//! Supports two modes:
//!
//! - **stdin mode**: `ndoc < records.json`
//! - **file mode**: `ndoc -o api.json doc/records/*.json`

use anyhow::{Context, Result};
use clap::Parser;
use ndoc::render::{self, Renderer};
use ndoc::{Documentation, Options, Registry};
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

#[derive(Parser)]
#[command(
    name = "ndoc",
    about = "Assemble parsed documentation records into a navigable documentation tree"
)]
struct Cli {
    /// Record files (glob patterns and directories supported). If omitted, reads from stdin.
    files: Vec<String>,

    /// Output file (defaults to stdout)
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Output format: json (default), markdown
    #[arg(short = 'f', long, default_value = "json")]
    format: String,

    /// Registered parser to run
    #[arg(long, default_value = "ndoc")]
    parser: String,

    /// Source link template. Supports ${file} and ${line} substitution.
    #[arg(short = 'l', long)]
    link_template: Option<String>,

    /// Write JSON on a single line
    #[arg(long)]
    compact: bool,

    /// Log pipeline progress to stderr
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_tracing(cli.verbose);

    let renderer = render::create_renderer(&cli.format, cli.compact).with_context(|| {
        format!("unknown format: {}. Use json or markdown", cli.format)
    })?;

    let options = match cli.link_template {
        Some(ref template) => Options::with_link_template(template),
        None => Options::default(),
    };

    let registry = Registry::with_defaults();
    let doc = if cli.files.is_empty() {
        stdin_mode(&registry, &cli.parser, &options)?
    } else {
        let files = expand_globs(&cli.files)?;
        debug!(files = files.len(), "input files");
        registry
            .invoke(&cli.parser, &files, &options)
            .context("failed to assemble documentation")?
    };

    write_output(renderer.as_ref(), &doc, cli.output.as_deref())
}

/// stdin mode: read one record set from stdin and run it through `parser`.
fn stdin_mode(registry: &Registry, parser: &str, options: &Options) -> Result<Documentation> {
    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("failed to read stdin")?;

    registry
        .invoke_texts(parser, vec![(PathBuf::from("stdin"), input)], options)
        .context("failed to assemble documentation")
}

fn write_output(renderer: &dyn Renderer, doc: &Documentation, output: Option<&Path>) -> Result<()> {
    let rendered = renderer.render(doc)?;
    match output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent).with_context(|| {
                    format!("failed to create output directory: {}", parent.display())
                })?;
            }
            fs::write(path, rendered)
                .with_context(|| format!("failed to write {}", path.display()))?;
        }
        None => print!("{}", rendered),
    }
    Ok(())
}

/// File extensions recognized as record files.
const SUPPORTED_EXTENSIONS: &[&str] = &["json"];

/// Expand glob patterns into a list of real file paths.
/// Also handles bare directory paths by scanning for record files.
fn expand_globs(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for pattern in patterns {
        let path = Path::new(pattern);
        if path.is_file() {
            files.push(path.to_path_buf());
            continue;
        }
        // If it's a directory, scan for supported extensions (non-recursive)
        if path.is_dir() {
            let entries = fs::read_dir(path)
                .with_context(|| format!("failed to read directory: {}", path.display()))?;
            for entry in entries.flatten() {
                let p = entry.path();
                if p.is_file() && has_supported_extension(&p) {
                    files.push(p);
                }
            }
            continue;
        }
        // Try as glob
        let matches: Vec<_> = glob::glob(pattern)
            .with_context(|| format!("invalid glob pattern: {}", pattern))?
            .filter_map(|r| r.ok())
            .filter(|p| p.is_file())
            .collect();
        if matches.is_empty() {
            // Let the read fail loudly for plain paths that don't exist.
            if !is_glob(pattern) {
                files.push(path.to_path_buf());
                continue;
            }
            warn!(pattern = %pattern, "no files matched");
        }
        files.extend(matches);
    }
    // Sort so colliding records resolve the same way on every run
    files.sort();
    files.dedup();
    Ok(files)
}

fn has_supported_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| SUPPORTED_EXTENSIONS.contains(&ext))
}

fn is_glob(pattern: &str) -> bool {
    pattern.contains(['*', '?', '['])
}

fn setup_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_env("NDOC_LOG").unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("ndoc=debug,warn")
        } else {
            EnvFilter::new("warn")
        }
    });

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}
