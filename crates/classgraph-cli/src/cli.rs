//! Command-line interface for the classgraph utility
//!
//! Loads class graph records (or the built-in sample), then previews,
//! labels, validates or edits them.

use anyhow::{anyhow, bail, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use tracing::debug;

use classgraph::{
    actions, sample, ClassGraphModel, ClassLabels, GraphRecords, LoadReport, ModelConfig,
    NodeKey, PreviewStyle, TextPreview,
};

/// Classgraph - inspect and edit UML class graph records
#[derive(Parser)]
#[command(name = "classgraph")]
#[command(about = "A Rust utility to inspect, validate and edit UML class graph records")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Accept links whose endpoints are missing instead of rejecting them
    #[arg(long, global = true)]
    pub permissive: bool,

    /// Set log level (trace|debug|info|warn|error) [default: warn]
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Set log format (compact|pretty|json)
    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

/// Log level options
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

/// Pick the log filter: an explicit `--log-level`, then
/// `CLASSGRAPH_LOG_LEVEL`, then `RUST_LOG`, then `warn`
pub fn resolve_log_level(
    flag: Option<LogLevel>,
    env: impl Fn(&str) -> Option<String>,
) -> String {
    flag.map(|level| level.as_str().to_string())
        .or_else(|| env(classgraph::core::logging::LOG_LEVEL_ENV))
        .or_else(|| env("RUST_LOG"))
        .unwrap_or_else(|| LogLevel::Warn.as_str().to_string())
}

/// Log format options
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Pretty,
    Json,
}

impl LogFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogFormat::Compact => "compact",
            LogFormat::Pretty => "pretty",
            LogFormat::Json => "json",
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write the built-in sample records as JSON
    Sample {
        /// Output file (use - for stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Draw every class box and list the links
    Show {
        /// Input records file (use - for stdin; sample data when omitted)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Character set to use for the preview
        #[arg(long, value_enum, default_value_t = StyleChoice::Unicode)]
        style: StyleChoice,
    },

    /// Print the display labels of each class
    Labels {
        /// Input records file (use - for stdin; sample data when omitted)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Only print the class with this key
        #[arg(short, long)]
        key: Option<NodeKey>,
    },

    /// Load records and report every rejected one
    Validate {
        /// Input records file (use - for stdin; sample data when omitted)
        #[arg(short, long)]
        input: Option<PathBuf>,
    },

    /// Add the stock Person class under a fresh key and write the result
    AddPerson {
        /// Input records file (use - for stdin; sample data when omitted)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output file (use - for stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Supported preview character sets
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum StyleChoice {
    Ascii,
    Unicode,
}

impl From<StyleChoice> for PreviewStyle {
    fn from(value: StyleChoice) -> Self {
        match value {
            StyleChoice::Ascii => PreviewStyle::Ascii,
            StyleChoice::Unicode => PreviewStyle::Unicode,
        }
    }
}

/// Main CLI application
pub struct ClassgraphApp {
    config: ModelConfig,
    verbose: bool,
}

impl ClassgraphApp {
    pub fn new(config: ModelConfig) -> Self {
        Self {
            config,
            verbose: false,
        }
    }

    /// Run the application with the given CLI arguments
    pub fn run(&mut self, cli: Cli) -> Result<()> {
        if cli.permissive {
            self.config = ModelConfig::permissive();
        }
        self.verbose = cli.verbose;

        match cli.command {
            Commands::Sample { output } => {
                self.write_output(output, &sample::sample_records().to_json()?)
            }
            Commands::Show { input, style } => self.show_command(input, style),
            Commands::Labels { input, key } => self.labels_command(input, key),
            Commands::Validate { input } => self.validate_command(input),
            Commands::AddPerson { input, output } => self.add_person_command(input, output),
        }
    }

    fn show_command(&self, input: Option<PathBuf>, style: StyleChoice) -> Result<()> {
        let (model, report) = self.load(input)?;
        self.print_rejections(&report);
        println!("{}", TextPreview::with_style(style.into()).render(&model));
        Ok(())
    }

    fn labels_command(&self, input: Option<PathBuf>, key: Option<NodeKey>) -> Result<()> {
        let (model, report) = self.load(input)?;
        self.print_rejections(&report);

        let nodes: Vec<_> = match key {
            Some(key) => vec![model
                .node(key)
                .ok_or_else(|| anyhow!("No class with key {}", key))?],
            None => model.nodes().collect(),
        };

        for node in nodes {
            let labels = ClassLabels::for_node(node);
            println!("[{}] {}", node.key(), labels.name);
            for line in labels.properties.iter().chain(&labels.methods) {
                println!("  {}", line);
            }
        }
        Ok(())
    }

    fn validate_command(&self, input: Option<PathBuf>) -> Result<()> {
        let (model, report) = self.load(input)?;

        for error in &report.errors {
            println!("✗ {}", error);
        }
        let dangling = model.dangling_links();
        for link in &dangling {
            println!(
                "! dangling {} link {} -> {}",
                link.kind, link.from, link.to
            );
        }

        if !report.is_clean() {
            bail!("{} record(s) rejected", report.errors.len());
        }
        println!(
            "✓ Valid class graph: {} classes, {} links{}",
            model.node_count(),
            model.link_count(),
            if dangling.is_empty() {
                String::new()
            } else {
                format!(" ({} dangling)", dangling.len())
            }
        );
        Ok(())
    }

    fn add_person_command(&self, input: Option<PathBuf>, output: Option<PathBuf>) -> Result<()> {
        let (mut model, report) = self.load(input)?;
        self.print_rejections(&report);

        let key = actions::add_person(&mut model)?;
        eprintln!("Added Person with key {}", key);
        self.write_output(output, &model.to_records().to_json()?)
    }

    fn print_rejections(&self, report: &LoadReport) {
        for error in &report.errors {
            eprintln!("Warning: skipped {}", error);
        }
    }

    /// Load records from the input, or the sample data when none is given
    fn load(&self, input: Option<PathBuf>) -> Result<(ClassGraphModel, LoadReport)> {
        let records = match input {
            Some(path) => GraphRecords::from_json(&self.read_input(path)?)?,
            None => sample::sample_records(),
        };
        if self.verbose {
            eprintln!(
                "Loading {} node and {} link records",
                records.nodes.len(),
                records.links.len()
            );
        }
        debug!(config = ?self.config, "Loading records");
        Ok(ClassGraphModel::load_with_config(&records, self.config))
    }

    /// Read a file, or stdin for `-`
    pub fn read_input(&self, path: PathBuf) -> Result<String> {
        if path.to_string_lossy() == "-" {
            let mut content = String::new();
            io::stdin().read_to_string(&mut content)?;
            Ok(content)
        } else {
            fs::read_to_string(&path)
                .map_err(|e| anyhow!("Failed to read input file '{}': {}", path.display(), e))
        }
    }

    /// Write output to file or stdout
    pub fn write_output(&self, output: Option<PathBuf>, content: &str) -> Result<()> {
        let content = if content.is_empty() || content.ends_with('\n') {
            content.to_string()
        } else {
            format!("{}\n", content)
        };

        match output {
            Some(path) if path.to_string_lossy() != "-" => {
                fs::write(&path, content).map_err(|e| {
                    anyhow!("Failed to write output file '{}': {}", path.display(), e)
                })?;
                if self.verbose {
                    eprintln!("Wrote {}", path.display());
                }
                Ok(())
            }
            _ => {
                let mut stdout = io::stdout().lock();
                stdout.write_all(content.as_bytes())?;
                stdout.flush()?;
                Ok(())
            }
        }
    }
}

impl Default for ClassgraphApp {
    fn default() -> Self {
        Self::new(ModelConfig::default())
    }
}
