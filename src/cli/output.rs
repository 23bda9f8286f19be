//! Colored terminal output helpers.
//!
//! All user-facing output goes through these functions so we get
//! consistent styling across every command.

use comfy_table::{ContentArrangement, Table};
use console::style;

use crate::cli::OutputFormat;

/// Width the `aligned` style pads messages to.
const ALIGNED_WIDTH: usize = 80;

/// Print a green success message: "check_mark {msg}"
pub fn success(msg: &str) {
    println!("{} {}", style("\u{2713}").green().bold(), msg);
}

/// Print a red error message: "x_mark {msg}"
pub fn error(msg: &str) {
    eprintln!("{} {}", style("\u{2717}").red().bold(), msg);
}

/// Print a yellow warning: "warning_sign {msg}"
pub fn warning(msg: &str) {
    eprintln!("{} {}", style("\u{26a0}").yellow().bold(), msg);
}

/// Print a blue info message: "info_sign {msg}"
pub fn info(msg: &str) {
    println!("{} {}", style("\u{2139}").blue().bold(), msg);
}

/// Decorate a message according to the output style.
///
/// `vanilla` passes the message through untouched; `aligned` pads it
/// with dot leaders out to an 80-column ruler.
pub fn decorate(msg: &str, format: OutputFormat) -> String {
    match format {
        OutputFormat::Vanilla => msg.to_string(),
        OutputFormat::Aligned => {
            let trailer = ALIGNED_WIDTH.saturating_sub(msg.chars().count() + 6);
            format!(".... {} {}", msg, ".".repeat(trailer))
        }
    }
}

/// Print a table of the top-level key names in a vault document.
pub fn print_keys_table(keys: &[String]) {
    if keys.is_empty() {
        info("No keys in this vault document.");
        return;
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Key"]);

    for key in keys {
        table.add_row(vec![key.clone()]);
    }

    println!("{table}");
}
