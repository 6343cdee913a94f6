use std::error::Error;
use std::fs;
use std::io::{self, Read, Write};

use clap::{Parser, ValueEnum};
use openapi_reader::{Diagnostic, ReadOptions, ReadResult};
use serde::Serialize;

#[derive(Parser, Debug)]
#[command(name = "openapi-read", version, about = "Swagger 2.0 document reader")]
struct Args {
    /// Input JSON document. Omit or use '-' to read from stdin.
    input: Option<String>,

    /// Output file path (prints to stdout if omitted).
    #[arg(short, long, value_name = "file")]
    output: Option<String>,

    /// Report format.
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Exit with an error when the document has diagnostics.
    #[arg(long)]
    deny_missing: bool,

    /// Deepest nesting of maps to walk before giving up.
    #[arg(long, value_name = "number")]
    max_depth: Option<usize>,

    /// Log reader activity to stderr.
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Serialize)]
struct Report<'a> {
    title: Option<&'a str>,
    version: Option<&'a str>,
    servers: Vec<&'a str>,
    paths: usize,
    definitions: usize,
    references: Vec<&'a str>,
    diagnostics: &'a [Diagnostic],
}

impl<'a> Report<'a> {
    fn new(result: &'a ReadResult) -> Self {
        let document = &result.document;
        let info = document.info.as_ref();
        Self {
            title: info.and_then(|info| info.title.as_deref()),
            version: info.and_then(|info| info.version.as_deref()),
            servers: document.servers.iter().map(|server| server.url.as_str()).collect(),
            paths: document.paths.len(),
            definitions: document.components.schemas.len(),
            references: result.references.iter().map(|(pointer, _)| pointer).collect(),
            diagnostics: &result.diagnostics,
        }
    }
}

fn main() {
    if let Err(err) = run() {
        eprintln!("ERROR  {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    init_logging(args.verbose);

    let source = args.input.as_deref().unwrap_or("-");
    log::debug!("reading {source}");
    let input = read_input(args.input.as_deref())?;
    let mut options = ReadOptions::new();
    if let Some(max_depth) = args.max_depth {
        options = options.with_max_depth(max_depth);
    }

    let result = openapi_reader::from_str_with_options(&input, &options)?;
    log::debug!(
        "read {source}: {} diagnostics, {} references",
        result.diagnostics.len(),
        result.references.len()
    );
    let report = Report::new(&result);

    with_output_writer(args.output.as_deref(), |writer| match args.format {
        Format::Text => write_text(writer, &report),
        Format::Json => {
            serde_json::to_writer_pretty(&mut *writer, &report)?;
            writeln!(writer)?;
            Ok(())
        }
    })?;

    if args.deny_missing && !result.diagnostics.is_empty() {
        return Err(format!("document has {} diagnostics", result.diagnostics.len()).into());
    }
    Ok(())
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

fn read_input(input: Option<&str>) -> Result<String, Box<dyn Error>> {
    match input {
        None | Some("-") => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
        Some(path) => Ok(fs::read_to_string(path)?),
    }
}

fn with_output_writer<F>(path: Option<&str>, f: F) -> Result<(), Box<dyn Error>>
where
    F: FnOnce(&mut dyn Write) -> Result<(), Box<dyn Error>>,
{
    match path {
        Some(path) if path != "-" => {
            let mut file = fs::File::create(path)?;
            f(&mut file)
        }
        _ => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            f(&mut handle)
        }
    }
}

fn write_text(writer: &mut dyn Write, report: &Report<'_>) -> Result<(), Box<dyn Error>> {
    writeln!(writer, "title: {}", report.title.unwrap_or("-"))?;
    writeln!(writer, "version: {}", report.version.unwrap_or("-"))?;
    writeln!(writer, "servers: {}", report.servers.len())?;
    for url in &report.servers {
        writeln!(writer, "  {url}")?;
    }
    writeln!(writer, "paths: {}", report.paths)?;
    writeln!(writer, "definitions: {}", report.definitions)?;
    writeln!(writer, "references: {}", report.references.len())?;
    for diagnostic in report.diagnostics {
        writeln!(writer, "warning: {diagnostic}")?;
    }
    Ok(())
}
