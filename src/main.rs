//! Newton CLI
//!
//! Usage:
//!   newton --text "your text here"           # Single evaluation
//!   newton --interactive                     # Interactive mode, state persists
//!   newton --serve                           # HTTP API server
//!   newton --text "text" --json              # Endpoint-shaped JSON output
//!   newton --text "text" --compose           # Messages that would reach the LLM

use clap::Parser;
use colored::Colorize;
use std::io::{self, BufRead, Write};
use tracing_subscriber::EnvFilter;

use newton::core::{compose_messages, run_server, AffectTracker, Newton, DEFAULT_PERSONA};
use newton::types::Inference;
use newton::{DEFAULT_ADDR, VERSION};

#[derive(Parser, Debug)]
#[command(
    name = "newton",
    version = VERSION,
    about = "Newton - infer behavioural directives for the Paradox assistant",
    long_about = "Newton reads a chat turn, classifies its emotion and intent,\n\
                  updates a persistent trust state and renders a directive block\n\
                  to be injected as a system message before the language model.\n\n\
                  Modes:\n  \
                  --text         Single evaluation\n  \
                  --interactive  One turn per line, state persists\n  \
                  --serve        HTTP API server"
)]
struct Args {
    /// Text to evaluate (single mode)
    #[arg(short, long)]
    text: Option<String>,

    /// Interactive mode - read lines from stdin
    #[arg(short, long)]
    interactive: bool,

    /// Run as HTTP API server
    #[arg(short, long)]
    serve: bool,

    /// Server address
    #[arg(long, env = "NEWTON_ADDR", default_value = DEFAULT_ADDR)]
    addr: String,

    /// Output the endpoint response as JSON
    #[arg(long)]
    json: bool,

    /// Print the message list that would be sent to the language model
    #[arg(long)]
    compose: bool,

    /// Disable colors in output
    #[arg(long)]
    no_color: bool,

    /// Show signals, fired rules and state
    #[arg(long)]
    verbose: bool,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    init_tracing();

    if args.no_color {
        colored::control::set_override(false);
    }

    if args.serve {
        run_serve(&args).await;
    } else if args.interactive {
        run_interactive(&args);
    } else if let Some(ref text) = args.text {
        run_single(text, &args);
    } else {
        // Default to interactive if no mode specified
        run_interactive(&args);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("newton=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Run single text evaluation
fn run_single(text: &str, args: &Args) {
    let newton = Newton::new();
    let mut tracker = AffectTracker::new();
    let inference = tracker.turn(&newton, text);
    print_inference(text, &inference, args);
}

/// Run interactive mode
fn run_interactive(args: &Args) {
    let newton = Newton::new();
    let mut tracker = AffectTracker::new();

    print_header();
    println!("Type a message and press Enter. Type 'quit' to exit.");
    println!();

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("{} > ", format!("[trust={:.2}]", tracker.state().trust).dimmed());
        let _ = stdout.flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(_) => break,
        }

        let line = line.trim();
        if line.eq_ignore_ascii_case("quit") || line.eq_ignore_ascii_case("exit") {
            println!("\nSession ended. Turns: {}", tracker.update_count());
            break;
        }
        if line.is_empty() {
            continue;
        }

        let inference = tracker.turn(&newton, line);
        print_inference(line, &inference, args);
    }
}

fn print_inference(text: &str, inference: &Inference, args: &Args) {
    if args.json {
        println!("{}", serde_json::to_string_pretty(&inference.to_response()).unwrap_or_default());
    } else if args.compose {
        let messages = compose_messages(DEFAULT_PERSONA, &inference.system_prompt, &[], text);
        println!("{}", serde_json::to_string_pretty(&messages).unwrap_or_default());
    } else if args.verbose {
        print_verbose(inference);
    } else {
        print_summary(inference);
    }
}

/// Print header
fn print_header() {
    println!("{}", "========================================".bold());
    println!("{}", format!("  Newton v{}", VERSION).bold());
    println!("{}", "========================================".bold());
    println!();
}

fn print_summary(inference: &Inference) {
    let color = inference.signals.emotion.color();
    println!("{}", inference.to_parseable_string().color(color));
}

/// Print verbose output
fn print_verbose(inference: &Inference) {
    let emotion = inference.signals.emotion;
    let state = &inference.state;
    println!("{}", "┌──────────────────────────────────────".color(emotion.color()));
    println!("│ Signals: emotion={} intent={}", emotion, inference.signals.intent);
    println!("│ Rules:   {}", inference.fired.join(" → "));
    println!(
        "│ State:   trust={:.2} energy={:.2} openness={:.2}",
        state.trust, state.energy, state.openness
    );
    println!("{}", "├──────────────────────────────────────".color(emotion.color()));
    for line in inference.system_prompt.lines() {
        println!("│ {}", line);
    }
    println!("{}", "└──────────────────────────────────────".color(emotion.color()));
}

/// Run HTTP API server
async fn run_serve(args: &Args) {
    println!();
    println!("{}", format!("  Newton API Server v{}", VERSION).bold());
    println!();

    if let Err(e) = run_server(&args.addr).await {
        eprintln!("{} {}", "Server error:".red(), e);
        std::process::exit(1);
    }
}
