//! The Tern interpreter CLI.
//!
//! This binary provides `tern run` and `tern ast` commands and delegates
//! pipeline orchestration to the driver module.

use clap::{Parser, Subcommand};

mod diagnostics;
mod driver;

/// Command-line interface for the Tern interpreter.
#[derive(Parser)]
#[command(name = "tern")]
#[command(about = "The Tern programming language", long_about = None)]
struct Cli {
    /// The subcommand to execute.
    #[command(subcommand)]
    command: Commands,
}

/// Available CLI subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Run a Tern program.
    Run {
        /// The source file to run (e.g., `hello.tern`).
        file: String,
    },
    /// Parse a Tern program and print its AST in source form.
    Ast {
        /// The source file to parse.
        file: String,
    },
}

/// Entry point for the Tern interpreter.
fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run { file } => {
            if let Err(error) = driver::run(&file) {
                report_and_exit(*error);
            }
        }
        Commands::Ast { file } => {
            if let Err(error) = driver::print_ast(&file) {
                report_and_exit(*error);
            }
        }
    }
}

fn report_and_exit(error: driver::RunErrorWithContext) -> ! {
    diagnostics::report_error(error.filename(), error.source(), error.error());
    std::process::exit(1);
}
