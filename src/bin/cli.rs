//! Command-line front end: emit leveled lines or filter tagged ones.

use std::ffi::OsString;
use std::fmt::Display;
use std::fs::{File, OpenOptions};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use levelog::{ConfigError, Flags, Level, LevelFilter, Logger, LoggerConfig, parse_flag_list};

/// Exit status for bad arguments or configuration.
const USAGE_EXIT: u8 = 2;

/// Write and filter leveled log lines.
///
/// Options left unset fall back to LEVELOG_LEVEL, LEVELOG_PREFIX and
/// LEVELOG_FLAGS, then to INFO, no prefix and "date,time".
#[derive(Parser, Debug)]
#[command(name = "levelog")]
#[command(about = "Write and filter leveled log lines")]
#[command(version)]
struct Cli {
    /// Lowest level written: DEBUG, INFO, WARN, ERROR or FATAL.
    #[arg(long, value_name = "LEVEL", global = true)]
    min_level: Option<Level>,

    /// Text placed at the start of every line.
    #[arg(long, value_name = "PREFIX", global = true, allow_hyphen_values = true)]
    prefix: Option<String>,

    /// Comma-separated header fields: date, time, microseconds, longfile,
    /// shortfile, utc, msgprefix, std or none.
    #[arg(long, value_name = "LIST", global = true, value_parser = parse_flag_list)]
    flags: Option<Flags>,

    /// Append to FILE instead of writing to standard error.
    #[arg(long, value_name = "FILE", global = true)]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write one line at LEVEL, or one line per input line when no MESSAGE is given.
    ///
    /// FATAL exits with status 1 after writing.
    Emit {
        /// Level of the emitted line.
        #[arg(value_name = "LEVEL")]
        level: Level,

        /// Words joined by single spaces.
        #[arg(value_name = "MESSAGE")]
        message: Vec<String>,
    },

    /// Copy standard input, dropping lines tagged below the minimum level.
    Filter,
}

impl Cli {
    /// Environment settings overridden by the options given on the command line.
    fn config(&self) -> Result<LoggerConfig, ConfigError> {
        let mut config = LoggerConfig::from_env()?;
        if let Some(level) = self.min_level {
            config.min_level = level;
        }
        if let Some(prefix) = &self.prefix {
            config.prefix.clone_from(prefix);
        }
        if let Some(flags) = self.flags {
            config.flags = flags;
        }
        Ok(config)
    }
}

/// Parses `args`, runs the selected command and maps the outcome to an exit status.
///
/// Log lines go to `stderr` unless `--output` names a file. A FATAL emission
/// does not return.
pub fn run_with<I, In, Out, Err>(args: I, stdin: In, stdout: &mut Out, stderr: &mut Err) -> ExitCode
where
    I: IntoIterator,
    I::Item: Into<OsString> + Clone,
    In: BufRead,
    Out: Write,
    Err: Write,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(error) => {
            let rendered = error.render().to_string();
            let _ = if error.use_stderr() {
                stderr.write_all(rendered.as_bytes())
            } else {
                stdout.write_all(rendered.as_bytes())
            };
            return ExitCode::from(u8::try_from(error.exit_code()).unwrap_or(USAGE_EXIT));
        }
    };

    let config = match cli.config() {
        Ok(config) => config,
        Err(error) => {
            let _ = writeln!(stderr, "levelog: {error}");
            return ExitCode::from(USAGE_EXIT);
        }
    };

    let result = match cli.output.as_deref() {
        Some(path) => open_append(path).and_then(|file| execute(&cli.command, &config, file, stdin)),
        None => execute(&cli.command, &config, &mut *stderr, stdin),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            let _ = writeln!(stderr, "levelog: {error}");
            ExitCode::FAILURE
        }
    }
}

fn open_append(path: &Path) -> io::Result<File> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|error| io::Error::new(error.kind(), format!("{}: {error}", path.display())))
}

fn execute<W, In>(command: &Command, config: &LoggerConfig, destination: W, stdin: In) -> io::Result<()>
where
    W: Write,
    In: BufRead,
{
    match command {
        Command::Emit { level, message } => emit(&config.build(destination), *level, message, stdin),
        Command::Filter => filter(LevelFilter::new(destination, config.min_level), stdin),
    }
}

fn emit<W: Write>(logger: &Logger<W>, level: Level, message: &[String], stdin: impl BufRead) -> io::Result<()> {
    if message.is_empty() {
        for line in stdin.lines() {
            let line = line?;
            emit_line(logger, level, &[&line as &dyn Display])?;
        }
    } else {
        let words: Vec<&dyn Display> = message.iter().map(|word| word as &dyn Display).collect();
        emit_line(logger, level, &words)?;
    }
    logger.sink().flush()
}

fn emit_line<W: Write>(logger: &Logger<W>, level: Level, words: &[&dyn Display]) -> io::Result<()> {
    if level == Level::Fatal {
        logger.fatalln(words);
    }
    logger.try_logln(level, words)
}

fn filter<W: Write>(mut filter: LevelFilter<W>, mut stdin: impl BufRead) -> io::Result<()> {
    let mut line = Vec::new();
    loop {
        line.clear();
        if stdin.read_until(b'\n', &mut line)? == 0 {
            break;
        }
        filter.write_all(&line)?;
    }
    filter.flush()
}
