// Pentatonic Fit: CLI entry point.
//
// Runs the full pipeline over the embedded chord catalog and prints the
// report as YAML, followed by a second YAML document listing every scale that
// fits more than one chord with its chord count.
//
// Usage:
//   cargo run -p pentatonic_fit -- [--scales | --fits]
//
//   (no args)  Report + shared-scale audit
//   --scales   List every generated scale, dominant table first
//   --fits     Print the matcher's per-chord detail (matched/out notes)
//
// Set RUST_LOG=debug to see per-stage counts on stderr.

use pentatonic_fit::audit::{render_shared, shared_scales};
use pentatonic_fit::{Analysis, Result, analyze_default, scale_tables};

enum Command {
    Report,
    Scales,
    Fits,
}

fn main() {
    env_logger::init();

    let command = parse_args();
    if let Err(e) = run(command) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Scales => {
            pentatonic_fit::validate_forms()?;
            print_scales();
        }
        Command::Fits => {
            let Analysis { fits, .. } = analyze_default()?;
            print!("{}", serde_yaml::to_string(&fits)?);
        }
        Command::Report => {
            let Analysis { fits, report } = analyze_default()?;
            print!("{}", report.to_yaml()?);
            print!("{}", render_shared(&shared_scales(&fits)));
        }
    }
    Ok(())
}

fn print_scales() {
    for table in scale_tables() {
        for (name, scale) in table.iter() {
            let notes: Vec<String> = scale.notes.iter().map(ToString::to_string).collect();
            println!("{name}: [{}]", notes.join(", "));
        }
    }
}

/// Parse command-line arguments with plain `std::env::args()` matching.
fn parse_args() -> Command {
    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.iter().map(String::as_str).collect::<Vec<_>>().as_slice() {
        [] => Command::Report,
        ["--scales"] => Command::Scales,
        ["--fits"] => Command::Fits,
        ["--help" | "-h"] => {
            print_usage();
            std::process::exit(0);
        }
        other => {
            eprintln!("Unknown arguments: {}", other.join(" "));
            print_usage();
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("Usage: pentatonic-report [OPTIONS]");
    println!();
    println!("Options:");
    println!("  --scales     List every generated pentatonic scale");
    println!("  --fits       Print matched and out notes for every accepted scale");
    println!("  --help, -h   Show this help");
}
