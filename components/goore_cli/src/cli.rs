//! Command-line arguments

use clap::{ArgAction, Parser, ValueEnum};

/// How a parsed tree is printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Indented `@Attr:` tree
    Dump,
    /// Pretty-printed JSON
    Json,
}

/// goore front end: parse a source and print what was understood
#[derive(Parser, Debug)]
#[command(name = "goore")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Parse goore source and print its syntax tree", long_about = None)]
pub struct Cli {
    /// Source file to parse
    #[arg(value_name = "FILE", conflicts_with = "eval")]
    pub file: Option<String>,

    /// Parse CODE instead of a file
    #[arg(short, long, value_name = "CODE")]
    pub eval: Option<String>,

    /// Print the token stream instead of the tree
    #[arg(long)]
    pub tokens: bool,

    /// Output format for the tree
    #[arg(long, value_enum, default_value_t = OutputFormat::Dump)]
    pub format: OutputFormat,

    /// Log more (-v for parser recovery, -vv for every token)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}
