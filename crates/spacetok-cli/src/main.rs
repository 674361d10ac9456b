use clap::{Parser, Subcommand};
use spacetok_core::{FileError, DEFAULT_TARGET, SPACING_SCALE};
use std::path::Path;

#[derive(Parser)]
#[command(name = "spacetok")]
#[command(about = "Replace literal spacing values in a stylesheet with spacing tokens")]
#[command(version)]
struct Cli {
    /// Defaults to `apply` on layout/spacing.css
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Rewrite a stylesheet in place to use spacing tokens
    Apply {
        /// Stylesheet to rewrite
        #[arg(default_value = DEFAULT_TARGET)]
        path: String,
    },

    /// Report spacing literals that would be replaced, without writing
    Check {
        /// Stylesheet to inspect
        #[arg(default_value = DEFAULT_TARGET)]
        path: String,
    },

    /// Print the literal-to-token mapping
    Table,
}

fn main() {
    let cli = Cli::parse();

    match cli.command.unwrap_or(Command::Apply {
        path: DEFAULT_TARGET.to_string(),
    }) {
        Command::Apply { path } => cmd_apply(&path),
        Command::Check { path } => cmd_check(&path),
        Command::Table => cmd_table(),
    }
}

fn fail(err: FileError) -> ! {
    eprintln!("Error: {err}");
    std::process::exit(1);
}

fn cmd_apply(path: &str) {
    let report = match spacetok_core::rewrite_file(Path::new(path), SPACING_SCALE) {
        Ok(report) => report,
        Err(e) => fail(e),
    };

    println!(
        "Updated {path} to use spacing tokens ({} replacements)",
        report.replacements()
    );
}

fn cmd_check(path: &str) {
    let report = match spacetok_core::preview_file(Path::new(path), SPACING_SCALE) {
        Ok(report) => report,
        Err(e) => fail(e),
    };

    if report.is_unchanged() {
        println!("OK: {path}");
        return;
    }

    for entry in report.entries.iter().filter(|e| e.replaced + e.negated > 0) {
        eprintln!(
            "  {} -> var(--{}): {} bare, {} negated",
            entry.literal, entry.token, entry.replaced, entry.negated
        );
    }
    println!(
        "{path}: {} spacing literals would be replaced",
        report.replacements()
    );
    std::process::exit(1);
}

fn cmd_table() {
    for mapping in SPACING_SCALE {
        println!("{} -> {}", mapping.literal, mapping.reference());
    }
}
