use avtool::cli::{Cli, Commands};
use clap::Parser;

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::View { ref file, ref key } => avtool::cli::commands::view::execute(&cli, file, key),
        Commands::Encrypt { ref file } => avtool::cli::commands::encrypt::execute(&cli, file),
        Commands::Completions { ref shell } => avtool::cli::commands::completions::execute(shell),
    };

    if let Err(e) = result {
        avtool::cli::output::error(&e.to_string());
        std::process::exit(1);
    }
}
