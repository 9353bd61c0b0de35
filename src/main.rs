//! # RPN
//!
//! Command line front end for the RPN calculator.

use getargs::{Opt, Options};
use tracing_subscriber::filter::Directive;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod term;

const USAGE: &str = "\
Usage: rpn [OPTIONS]

Options:
  -f, --file <FILE>  Run FILE instead of reading the terminal (repeatable)
  -q, --quiet        Do not print the banner
  -v, --verbose      Log definitions, calls and errors (adds to RUST_LOG)
  -h, --help         Print this message
";

/// Settings gathered from the command line.
#[derive(Debug, Default)]
pub struct Settings {
    pub quiet: bool,
    pub verbose: bool,
    pub files: Vec<String>,
}

fn parse_args(args: &[String]) -> Result<Option<Settings>, String> {
    let mut settings = Settings::default();
    let mut opts = Options::new(args.iter().map(String::as_str));
    while let Some(opt) = opts.next_opt().map_err(|e| e.to_string())? {
        match opt {
            Opt::Short('h') | Opt::Long("help") => return Ok(None),
            Opt::Short('q') | Opt::Long("quiet") => settings.quiet = true,
            Opt::Short('v') | Opt::Long("verbose") => settings.verbose = true,
            Opt::Short('f') | Opt::Long("file") => {
                let file = opts.value().map_err(|e| e.to_string())?;
                settings.files.push(file.to_string());
            }
            _ => return Err(format!("unknown option {:?}", opt)),
        }
    }
    if let Some(arg) = opts.positionals().next() {
        return Err(format!("unexpected argument {}", arg));
    }
    Ok(Some(settings))
}

/// `RUST_LOG` directives, or `warn` without them. Verbose adds debug
/// output for this crate on top of either.
fn log_filter(env: Option<&str>, verbose: bool) -> EnvFilter {
    let mut filter = env
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new("warn"));
    if verbose {
        if let Ok(directive) = "rpn=debug".parse::<Directive>() {
            filter = filter.add_directive(directive);
        }
    }
    filter
}

fn init_tracing(verbose: bool) {
    let env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = log_filter(env.as_deref(), verbose);
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_level(true),
        )
        .with(filter)
        .init();
}

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let settings = match parse_args(&args) {
        Ok(Some(settings)) => settings,
        Ok(None) => {
            print!("{}", USAGE);
            return;
        }
        Err(message) => {
            eprintln!("rpn: {}", message);
            eprint!("{}", USAGE);
            std::process::exit(1);
        }
    };
    init_tracing(settings.verbose);
    std::process::exit(term::main(&settings));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(s: &str) -> Vec<String> {
        s.split_whitespace().map(String::from).collect()
    }

    #[test]
    fn test_parse_args() {
        let settings = parse_args(&args("-q -f a.rpn --file b.rpn -v")).unwrap().unwrap();
        assert!(settings.quiet);
        assert!(settings.verbose);
        assert_eq!(settings.files, vec!["a.rpn".to_string(), "b.rpn".to_string()]);
        assert!(parse_args(&args("--help")).unwrap().is_none());
        assert!(parse_args(&args("-x")).is_err());
        assert!(parse_args(&args("stray")).is_err());
    }

    #[test]
    fn test_verbose_adds_to_rust_log() {
        let filter = log_filter(Some("warn"), true).to_string();
        assert!(filter.contains("rpn=debug"), "{}", filter);
        assert!(filter.contains("warn"), "{}", filter);
        let filter = log_filter(Some("rpn=trace"), false).to_string();
        assert!(!filter.contains("rpn=debug"), "{}", filter);
        let filter = log_filter(None, true).to_string();
        assert!(filter.contains("rpn=debug"), "{}", filter);
    }
}
