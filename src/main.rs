//! tdump: print or search an indentation-structured dump as a tree.
#![allow(clippy::multiple_crate_versions)]

use clap::Parser;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use streaming_iterator::StreamingIterator;
use tracing_subscriber::EnvFilter;
use treedump::browser::{Mode, TreeBrowser};
use treedump::line_buffer::LineReader;
use treedump::parser::parse_streaming;
use treedump::transform::Redactor;
use treedump::{config, render, worker, Forest, Transform};

#[derive(Parser)]
#[command(name = "tdump")]
#[command(about = "Turn indentation-structured dumps into a searchable tree", long_about = None)]
struct Args {
    /// Dump file to read, stdin when omitted
    #[arg(value_name = "PATH")]
    path: Option<PathBuf>,

    /// Only show lines containing this text (case-insensitive)
    #[arg(long, short = 'q')]
    query: Option<String>,

    /// Print JSON instead of a text tree
    #[arg(long)]
    json: bool,

    /// Regular expression to mask in every line
    #[arg(long, short = 'r', value_name = "PATTERN")]
    redact: Vec<String>,

    /// Expand the tree down to this depth (also limits the --json tree)
    #[arg(long, short = 'd')]
    depth: Option<usize>,

    /// Indent with spaces instead of box-drawing guides
    #[arg(long)]
    no_guides: bool,

    /// Parse and search on the main thread
    #[arg(long)]
    foreground: bool,

    /// Read settings from this file instead of ./tdump.toml
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

fn main() -> treedump::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let mut cfg = args
        .config
        .as_deref()
        .map_or_else(config::Config::load, config::Config::load_from);

    // Command line patterns add to the configured ones
    cfg.redact_patterns.extend(args.redact);
    if args.no_guides {
        cfg.tree_guides = false;
    }
    if args.foreground {
        cfg.background = false;
    }

    let transform =
        Redactor::new(&cfg.redact_patterns, cfg.redact_replacement.as_str())?.into_transform();

    let forest = load_forest(args.path.as_deref(), transform, cfg.background)?;
    if forest.is_empty() {
        eprintln!("No lines found in dump");
        return Ok(());
    }

    let query = args.query.unwrap_or_default();
    let mut browser = browse(forest, &query, cfg.background)?;
    match args.depth {
        Some(depth) => browser.expand_to_depth(depth),
        None => browser.expand_all(),
    }

    let output = if args.json {
        let json = match browser.mode() {
            Mode::Search => serde_json::to_string_pretty(&render::export_hits(
                browser.forest(),
                browser.displayed(),
            ))?,
            Mode::Tree => serde_json::to_string_pretty(&render::export_forest(
                browser.forest(),
                args.depth,
            ))?,
        };
        json + "\n"
    } else {
        match browser.mode() {
            Mode::Search => render::render_hits(&browser),
            Mode::Tree => render::render_rows(&browser, cfg.tree_guides),
        }
    };

    io::stdout().lock().write_all(output.as_bytes())?;
    Ok(())
}

fn open_input(path: Option<&Path>) -> io::Result<Box<dyn BufRead>> {
    Ok(match path {
        Some(path) => Box::new(BufReader::new(File::open(path)?)),
        None => Box::new(io::stdin().lock()),
    })
}

fn load_forest(
    path: Option<&Path>,
    transform: Option<Arc<Transform>>,
    background: bool,
) -> treedump::Result<Forest> {
    let mut lines = LineReader::new(open_input(path)?);

    if !background {
        let forest = parse_streaming(&mut lines, transform.as_deref());
        lines.finish()?;
        return Ok(forest);
    }

    let mut owned = Vec::new();
    while let Some(line) = lines.next() {
        owned.push(line.to_string());
    }
    lines.finish()?;

    worker::spawn_parse(owned, transform)?.join()
}

fn browse(forest: Forest, query: &str, background: bool) -> treedump::Result<TreeBrowser> {
    if query.is_empty() || !background {
        let mut browser = TreeBrowser::new(forest);
        browser.set_query(query);
        return Ok(browser);
    }

    let forest = Arc::new(forest);
    let hits = worker::spawn_search(Arc::clone(&forest), query.to_string())?.join()?;
    let forest = Arc::try_unwrap(forest).unwrap_or_else(|shared| (*shared).clone());

    let mut browser = TreeBrowser::new(forest);
    browser.apply_search(query, hits);
    Ok(browser)
}
