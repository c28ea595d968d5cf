use clap::Parser;
use mdtidy::application::normalize::{normalize_target, NormalizeOptions};
use mdtidy::cli::{format_failures, format_file_lines, format_summary, Cli};
use mdtidy::error::MdtidyError;

fn main() {
    let cli = Cli::parse();

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), MdtidyError> {
    let options = NormalizeOptions {
        rules: cli.command.rules(),
        dry_run: cli.command.dry_run(),
    };

    let report = normalize_target(cli.command.target(), &options)?;

    let file_lines = format_file_lines(&report);
    if !file_lines.is_empty() {
        print!("{}", file_lines);
    }

    // Per-file failures are reported but never change the exit code.
    let failures = format_failures(&report);
    if !failures.is_empty() {
        eprint!("{}", failures);
    }

    println!("{}", format_summary(&report));

    Ok(())
}
