use crate::Settings;
use ansi_term::Style;
use linefeed::{Completer, Completion, Interface, Prompter, ReadResult, Terminal};
use rpn::lang::Error;
use rpn::mach::{Event, Runtime};
use std::cell::Cell;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{debug, warn};

const CYCLES: usize = 5000;
const BANNER: &str = "RPN calculator. Type help for a list of words, q to quit.\n";

/// Runs the session and returns the process exit code.
pub fn main(settings: &Settings) -> i32 {
    let interrupted = Arc::new(AtomicBool::new(false));
    let int_moved = interrupted.clone();
    if let Err(error) = ctrlc::set_handler(move || {
        int_moved.store(true, Ordering::SeqCst);
    }) {
        warn!(%error, "Ctrl-C handler not installed");
    }
    let mut runtime = Runtime::default();
    let result = if settings.files.is_empty() {
        interactive(&mut runtime, &interrupted, settings.quiet)
    } else {
        scripts(&mut runtime, &interrupted, &settings.files)
    };
    match result {
        Ok(code) => code,
        Err(error) => {
            eprintln!("rpn: {}", error);
            1
        }
    }
}

trait Console {
    fn print(&self, s: &str) -> io::Result<()>;
    fn error(&self, error: &Error) -> io::Result<()>;
}

/// Standard streams. Remembers whether a malformed definition or loop
/// was reported so scripts can fail with a non-zero status.
#[derive(Default)]
struct Plain {
    malformed: Cell<bool>,
}

impl Plain {
    fn status(&self) -> i32 {
        if self.malformed.get() {
            1
        } else {
            0
        }
    }
}

impl Console for Plain {
    fn print(&self, s: &str) -> io::Result<()> {
        let mut out = io::stdout();
        out.write_all(s.as_bytes())?;
        out.flush()
    }

    fn error(&self, error: &Error) -> io::Result<()> {
        if error.code().is_malformed() {
            self.malformed.set(true);
        }
        io::stdout().flush()?;
        writeln!(io::stderr(), "?{}", error)
    }
}

impl<T: Terminal> Console for Interface<T> {
    fn print(&self, s: &str) -> io::Result<()> {
        self.write_fmt(format_args!("{}", s))
    }

    fn error(&self, error: &Error) -> io::Result<()> {
        self.write_fmt(format_args!(
            "{}\n",
            Style::new().bold().paint(format!("?{}", error))
        ))
    }
}

/// Run queued input until the runtime asks for more. True means quit.
fn drive<C: Console>(runtime: &mut Runtime, interrupted: &AtomicBool, console: &C) -> io::Result<bool> {
    loop {
        if interrupted.swap(false, Ordering::SeqCst) {
            runtime.interrupt();
        }
        match runtime.execute(CYCLES) {
            Event::Stopped => return Ok(false),
            Event::Quit => return Ok(true),
            Event::Running => {}
            Event::Print(s) => console.print(&s)?,
            Event::Error(error) => console.error(&error)?,
        }
    }
}

fn run_lines<C: Console, R: BufRead>(
    runtime: &mut Runtime,
    interrupted: &AtomicBool,
    console: &C,
    reader: R,
) -> io::Result<bool> {
    for line in reader.lines() {
        runtime.enter(&line?);
        if drive(runtime, interrupted, console)? {
            return Ok(true);
        }
    }
    Ok(false)
}

fn scripts(runtime: &mut Runtime, interrupted: &AtomicBool, files: &[String]) -> io::Result<i32> {
    let console = Plain::default();
    for path in files {
        let file = match File::open(path) {
            Ok(file) => file,
            Err(error) => {
                eprintln!("rpn: {}: {}", path, error);
                return Ok(1);
            }
        };
        debug!(%path, "running script");
        if run_lines(runtime, interrupted, &console, BufReader::new(file))? {
            return Ok(console.status());
        }
        if let Some(error) = runtime.finish() {
            console.error(&error)?;
            return Ok(1);
        }
    }
    Ok(console.status())
}

fn piped(runtime: &mut Runtime, interrupted: &AtomicBool) -> io::Result<i32> {
    let console = Plain::default();
    let stdin = io::stdin();
    if run_lines(runtime, interrupted, &console, stdin.lock())? {
        return Ok(console.status());
    }
    if let Some(error) = runtime.finish() {
        console.error(&error)?;
    }
    Ok(console.status())
}

fn interactive(runtime: &mut Runtime, interrupted: &AtomicBool, quiet: bool) -> io::Result<i32> {
    let interface = match Interface::new("rpn") {
        Ok(interface) => interface,
        Err(error) => {
            debug!(%error, "no terminal, reading stdin");
            return piped(runtime, interrupted);
        }
    };
    if !quiet {
        interface.write_fmt(format_args!("{}", BANNER))?;
    }
    loop {
        if drive(runtime, interrupted, &interface)? {
            return Ok(0);
        }
        interface.set_prompt(if runtime.is_capturing() { "... " } else { "> " })?;
        interface.set_completer(Arc::new(WordCompleter::new(runtime.words())));
        match interface.read_line()? {
            ReadResult::Input(line) => {
                interrupted.store(false, Ordering::SeqCst);
                runtime.enter(&line);
                if !line.trim().is_empty() {
                    interface.add_history_unique(line);
                }
            }
            ReadResult::Signal(_) | ReadResult::Eof => break,
        }
    }
    if let Some(error) = runtime.finish() {
        interface.error(&error)?;
    }
    Ok(0)
}

/// Completes subroutine and primitive names.
struct WordCompleter {
    words: Vec<String>,
}

impl WordCompleter {
    fn new(words: Vec<String>) -> WordCompleter {
        WordCompleter { words }
    }
}

impl<Term: Terminal> Completer<Term> for WordCompleter {
    fn complete(
        &self,
        word: &str,
        _prompter: &Prompter<Term>,
        _start: usize,
        _end: usize,
    ) -> Option<Vec<Completion>> {
        let list: Vec<Completion> = self
            .words
            .iter()
            .filter(|w| w.starts_with(word))
            .map(|w| Completion::simple(w.clone()))
            .collect();
        if list.is_empty() {
            None
        } else {
            Some(list)
        }
    }
}
