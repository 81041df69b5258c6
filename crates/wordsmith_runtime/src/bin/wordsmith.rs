//! Wordsmith CLI entry point.

use std::env;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use tracing_subscriber::EnvFilter;
use wordsmith_runtime::{Repl, WordsmithConfig};

/// Environment variable holding the log filter.
const LOG_ENV: &str = "WORDSMITH_LOG";

/// CLI configuration parsed from arguments.
#[derive(Default)]
struct CliConfig {
    files: Vec<PathBuf>,
    batch_mode: bool,
    show_help: bool,
    show_version: bool,
    rc_path: Option<PathBuf>,
    no_rc: bool,
    seed: Option<u64>,
    no_color: bool,
    log_filter: Option<String>,
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

fn parse_args(args: Vec<String>) -> Result<CliConfig, Box<dyn std::error::Error>> {
    let mut config = CliConfig::default();

    let mut args = args.into_iter().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "-b" | "--batch" => config.batch_mode = true,
            "--no-rc" => config.no_rc = true,
            "--no-color" => config.no_color = true,
            "--rc" => {
                let path = args.next().ok_or("--rc requires a path")?;
                config.rc_path = Some(PathBuf::from(path));
            }
            "--seed" => {
                let value = args.next().ok_or("--seed requires a value")?;
                config.seed = Some(
                    value
                        .parse()
                        .map_err(|_| format!("invalid --seed value: {value}"))?,
                );
            }
            "--log" => {
                let filter = args.next().ok_or("--log requires a filter")?;
                config.log_filter = Some(filter);
            }
            flag if flag.starts_with('-') => {
                return Err(format!("unknown option: {flag}").into());
            }
            path => config.files.push(PathBuf::from(path)),
        }
    }

    Ok(config)
}

/// Builds the log filter from `--log`, else `WORDSMITH_LOG`, else `warn`.
///
/// An explicit `--log` filter must parse.
fn log_filter(directives: Option<&str>) -> Result<EnvFilter, String> {
    match directives {
        Some(directives) => EnvFilter::try_new(directives)
            .map_err(|e| format!("invalid --log filter {directives:?}: {e}")),
        None => Ok(EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))),
    }
}

fn init_logging(filter: EnvFilter) {
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(args: Vec<String>) -> Result<(), Box<dyn std::error::Error>> {
    let cli = parse_args(args)?;

    if cli.show_help {
        print_help();
        return Ok(());
    }

    if cli.show_version {
        println!("wordsmith {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    init_logging(log_filter(cli.log_filter.as_deref())?);

    let mut config = WordsmithConfig::default().with_color(!cli.no_color);
    if let Some(path) = cli.rc_path {
        config = config.with_rc_path(path);
    }
    if cli.no_rc {
        config = config.without_rc();
    }
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }
    // Files establish context, so skip the banner after them.
    if cli.batch_mode || !cli.files.is_empty() {
        config = config.without_banner();
    }

    let mut repl = Repl::new(config)?;

    repl.load_rc()?;
    for file in &cli.files {
        if !repl.is_active() {
            return Ok(());
        }
        repl.run_file(file)?;
    }

    if cli.batch_mode || !repl.is_active() {
        return Ok(());
    }

    repl.run()?;
    Ok(())
}

fn print_help() {
    println!(
        "\x1b[1mWordsmith\x1b[0m - Rule-driven word and definition generator

\x1b[1mUSAGE:\x1b[0m
    wordsmith [OPTIONS] [FILES...]

\x1b[1mARGUMENTS:\x1b[0m
    [FILES...]    Command files to run before starting the REPL

\x1b[1mOPTIONS:\x1b[0m
    -h, --help         Print help information
    -V, --version      Print version information
    -b, --batch        Run the startup and command files, then exit
    --rc PATH          Startup command file (default: wordsmithrc)
    --no-rc            Skip the startup command file
    --seed N           Seed generation for reproducible words
    --no-color         Disable colored output
    --log FILTER       Log filter, e.g. debug (default: {LOG_ENV} or warn)

\x1b[1mEXAMPLES:\x1b[0m
    wordsmith                          Start interactive REPL
    wordsmith --seed 7 words.txt       Run words.txt, then start REPL
    wordsmith -b --no-rc build.txt     Run build.txt and exit

\x1b[1mREPL COMMANDS:\x1b[0m
    add <file> as <type>     Load a vocabulary file
    new [<number> <type>]xN  Generate a word
    old                      List generated words
    export <file>            Save generated words
    help                     List every command
    Ctrl+D                   Exit REPL
    Ctrl+C                   Cancel current input"
    );
}
