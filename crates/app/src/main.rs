use std::fmt;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use quiz_core::Clock;
use quiz_core::model::{Category, Level, QuestionBank, QuestionDraft};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use services::{QuizService, QuizSession, ReferenceService, SessionError};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidSeed { raw: String },
    InvalidCategory { raw: String },
    InvalidLevel { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidSeed { raw } => write!(f, "invalid --seed value: {raw}"),
            ArgsError::InvalidCategory { raw } => {
                write!(f, "invalid --category value: {raw} (systems, tools, six-sigma)")
            }
            ArgsError::InvalidLevel { raw } => {
                write!(f, "invalid --level value: {raw} (basic, intermediate, advanced)")
            }
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- quiz      [--seed <u64>] [--bank <questions.json>]");
    eprintln!("  cargo run -p app -- reference [--category <name>] [--level <name>]");
    eprintln!();
    eprintln!("quiz runs the interactive multiple-choice session (the default");
    eprintln!("subcommand); reference prints the interview Q&A collection.");
    eprintln!();
    eprintln!("  --seed      fixes the question order for a reproducible run");
    eprintln!("  --bank      loads a JSON array of question drafts instead of the");
    eprintln!("              built-in quality-engineering bank");
    eprintln!("  --category  systems | tools | six-sigma");
    eprintln!("  --level     basic | intermediate | advanced");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Quiz,
    Reference,
}

impl Command {
    fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "quiz" => Some(Self::Quiz),
            "reference" => Some(Self::Reference),
            _ => None,
        }
    }
}

struct Args {
    seed: Option<u64>,
    bank: Option<PathBuf>,
    category: Option<Category>,
    level: Option<Level>,
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut parsed = Self {
            seed: None,
            bank: None,
            category: None,
            level: None,
        };

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--seed" => {
                    let value = require_value(args, "--seed")?;
                    let seed: u64 = value
                        .parse()
                        .map_err(|_| ArgsError::InvalidSeed { raw: value.clone() })?;
                    parsed.seed = Some(seed);
                }
                "--bank" => {
                    let value = require_value(args, "--bank")?;
                    parsed.bank = Some(PathBuf::from(value));
                }
                "--category" => {
                    let value = require_value(args, "--category")?;
                    parsed.category = Some(
                        Category::parse(&value)
                            .ok_or(ArgsError::InvalidCategory { raw: value.clone() })?,
                    );
                }
                "--level" => {
                    let value = require_value(args, "--level")?;
                    parsed.level = Some(
                        Level::parse(&value).ok_or(ArgsError::InvalidLevel { raw: value.clone() })?,
                    );
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(parsed)
    }
}

fn load_bank(path: Option<&Path>) -> Result<QuestionBank, Box<dyn std::error::Error>> {
    let Some(path) = path else {
        return Ok(content::builtin_bank()?);
    };

    let raw = std::fs::read_to_string(path)?;
    let drafts: Vec<QuestionDraft> = serde_json::from_str(&raw)?;
    let questions = drafts
        .into_iter()
        .map(QuestionDraft::validate)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(QuestionBank::new(questions))
}

fn run_reference(args: &Args) {
    let reference = ReferenceService::new(content::builtin_reference());
    let entries = reference.filter(args.category, args.level);

    if entries.is_empty() {
        println!("No entries match the given filters.");
        return;
    }

    for entry in entries {
        println!("[{} / {}]", entry.category, entry.level);
        println!("Q: {}", entry.question);
        println!("A: {}", entry.answer);
        println!();
    }
}

/// Reads one trimmed line from stdin; `None` on end of input.
fn read_line(input: &mut impl BufRead) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn show_question(session: &QuizSession) -> Result<(), SessionError> {
    let progress = session.progress();
    let question = session.current_question()?;

    println!();
    println!("Question {} / {}", progress.position + 1, progress.total);
    println!("{}", question.prompt());
    for (i, option) in question.options().iter().enumerate() {
        println!("  {}) {}", i + 1, option);
    }
    Ok(())
}

fn show_summary(session: &QuizSession) -> Result<(), SessionError> {
    let summary = session.summary()?;

    println!();
    println!("Quiz complete!");
    if summary.total() == 0 {
        println!("The question bank was empty, nothing to score.");
        return Ok(());
    }

    // Percentage is a derived view; the engine only ever stores counts.
    let pct = f64::from(summary.score()) / f64::from(summary.total()) * 100.0;
    println!(
        "Score: {} / {} ({pct:.0}%)",
        summary.score(),
        summary.total()
    );
    Ok(())
}

fn run_quiz<R: Rng + ?Sized>(
    service: &QuizService,
    rng: &mut R,
    input: &mut impl BufRead,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut session = service.start_session_with_rng(rng);

    loop {
        while !session.is_complete() {
            show_question(&session)?;

            let record = loop {
                print!("Your answer: ");
                io::stdout().flush()?;
                let Some(line) = read_line(input)? else {
                    return Ok(());
                };

                let choice = match line.parse::<usize>() {
                    Ok(n) if n >= 1 => n - 1,
                    _ => {
                        println!("Please enter an option number.");
                        continue;
                    }
                };
                match service.answer_current(&mut session, choice) {
                    Ok(record) => break record,
                    Err(err) if err.is_input_error() => {
                        println!("{err}");
                    }
                    Err(err) => return Err(err.into()),
                }
            };

            let question = session.current_question()?;
            if record.correct {
                println!("Correct!");
            } else {
                println!(
                    "Not quite. The correct answer is {}) {}",
                    question.correct_index() + 1,
                    question.options()[question.correct_index()]
                );
            }
            println!("{}", question.explanation());

            print!("Press Enter for the next question... ");
            io::stdout().flush()?;
            if read_line(input)?.is_none() {
                return Ok(());
            }
            service.advance_current(&mut session)?;
        }

        show_summary(&session)?;

        print!("Restart with a new shuffle? (r to restart, anything else quits) ");
        io::stdout().flush()?;
        match read_line(input)? {
            Some(line) if line.eq_ignore_ascii_case("r") => {
                service.reset_session_with_rng(&mut session, rng);
            }
            _ => return Ok(()),
        }
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv: Vec<String> = std::env::args().skip(1).collect();

    let cmd = match argv.first().map(String::as_str) {
        None => Command::Quiz,
        Some("--help" | "-h") => {
            print_usage();
            return Ok(());
        }
        Some(first) if first.starts_with("--") => Command::Quiz,
        Some(first) => Command::from_arg(first).ok_or_else(|| {
            eprintln!("unknown subcommand: {first}");
            print_usage();
            io::Error::new(io::ErrorKind::InvalidInput, "unknown subcommand")
        })?,
    };

    if !argv.is_empty() && !argv[0].starts_with("--") {
        argv.remove(0);
    }

    let mut iter = argv.into_iter();
    let args = Args::parse(&mut iter).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    match cmd {
        Command::Reference => {
            run_reference(&args);
            Ok(())
        }
        Command::Quiz => {
            let bank = load_bank(args.bank.as_deref())?;
            let service = QuizService::new(Clock::default_clock(), Arc::new(bank));
            let mut rng: StdRng = match args.seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_os_rng(),
            };
            let mut input = io::stdin().lock();
            run_quiz(&service, &mut rng, &mut input)
        }
    }
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
