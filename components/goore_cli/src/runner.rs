//! Drives the lexer and parser for one source and prints the result

use crate::cli::OutputFormat;
use crate::error::{CliError, CliResult};
use core_types::{Error, SyntaxError};
use parser::{dump, parse_reader, Lexer, Program};
use std::fs::File;
use std::io::{BufReader, Read, Write};

/// What a run found besides its printed output
#[derive(Debug, Default)]
pub struct Report {
    /// Recovered syntax errors, in source order
    pub errors: Vec<SyntaxError>,
}

impl Report {
    /// Whether the source parsed without any error
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Parses sources and writes their tokens or trees
#[derive(Debug, Clone)]
pub struct Runner {
    format: OutputFormat,
    print_tokens: bool,
}

impl Runner {
    /// Create a runner printing trees in `format`
    ///
    /// # Example
    /// ```
    /// use goore_cli::{OutputFormat, Runner};
    ///
    /// let runner = Runner::new(OutputFormat::Dump);
    /// let mut out = Vec::new();
    /// let report = runner.run_string("x\n", "-e", &mut out).unwrap();
    ///
    /// assert!(report.is_clean());
    /// assert!(String::from_utf8(out).unwrap().contains("Identifier: x"));
    /// ```
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            print_tokens: false,
        }
    }

    /// Print the token stream instead of the tree
    pub fn with_print_tokens(mut self, enabled: bool) -> Self {
        self.print_tokens = enabled;
        self
    }

    /// Parse the file at `path`
    ///
    /// # Errors
    /// Returns `CliError` if the file cannot be read, the source is not
    /// lexically valid, or the output cannot be written
    pub fn run_file(&self, path: &str, out: &mut impl Write) -> CliResult<Report> {
        let file = File::open(path).map_err(|source| CliError::Read {
            path: path.to_string(),
            source,
        })?;
        self.run_reader(file, path, out)
    }

    /// Parse `source`, attributing diagnostics to `file_name`
    pub fn run_string(
        &self,
        source: &str,
        file_name: &str,
        out: &mut impl Write,
    ) -> CliResult<Report> {
        self.run_reader(source.as_bytes(), file_name, out)
    }

    fn run_reader<R: Read>(
        &self,
        reader: R,
        file_name: &str,
        out: &mut impl Write,
    ) -> CliResult<Report> {
        tracing::debug!(file = file_name, tokens = self.print_tokens, "running");

        if self.print_tokens {
            self.write_tokens(reader, file_name, out)?;
            out.flush()?;
            return Ok(Report::default());
        }

        let program = parse_reader(reader, file_name)?;
        self.write_program(&program, out)?;
        out.flush()?;
        Ok(Report {
            errors: program.errors,
        })
    }

    fn write_tokens<R: Read>(
        &self,
        reader: R,
        file_name: &str,
        out: &mut impl Write,
    ) -> CliResult<()> {
        let mut lexer = Lexer::new(BufReader::new(reader));
        let tokens = lexer.tokenize().map_err(|e| match e {
            Error::Syntax(error) => Error::Syntax(error.in_file(file_name)),
            other => other,
        })?;
        for token in &tokens {
            writeln!(out, "{}", token)?;
        }
        Ok(())
    }

    fn write_program(&self, program: &Program, out: &mut impl Write) -> CliResult<()> {
        match self.format {
            OutputFormat::Dump => out.write_all(dump(program).as_bytes())?,
            OutputFormat::Json => {
                serde_json::to_writer_pretty(&mut *out, program)?;
                writeln!(out)?;
            }
        }
        Ok(())
    }
}
