// file: src/utils/logging.rs
// description: Tracing subscriber initialization and colored console status lines

use colored::*;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

pub fn init_logger(colored_output: bool, verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_file(verbose)
        .with_line_number(verbose)
        .with_writer(std::io::stderr)
        .compact()
        .with_ansi(colored_output);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

/// User-facing status output. Built once from the command line and handed to
/// the orchestrator, so color choice is never process-wide state.
#[derive(Debug, Clone, Copy)]
pub struct Console {
    colored: bool,
}

impl Console {
    pub fn new(colored: bool) -> Self {
        Self { colored }
    }

    pub fn format_info(&self, msg: &str) -> String {
        if self.colored {
            format!("{} {}", "[INFO]".cyan(), msg)
        } else {
            format!("[INFO] {}", msg)
        }
    }

    pub fn format_success(&self, msg: &str) -> String {
        if self.colored {
            format!("{}", format!("✔ {}", msg).green())
        } else {
            format!("✔ {}", msg)
        }
    }

    pub fn format_warning(&self, msg: &str) -> String {
        if self.colored {
            format!("{}", format!("⚠ {}", msg).yellow())
        } else {
            format!("⚠ {}", msg)
        }
    }

    pub fn format_error(&self, msg: &str) -> String {
        if self.colored {
            format!("{}", format!("✖ {}", msg).red())
        } else {
            format!("✖ {}", msg)
        }
    }

    pub fn info(&self, msg: &str) {
        println!("{}", self.format_info(msg));
    }

    pub fn success(&self, msg: &str) {
        println!("{}", self.format_success(msg));
    }

    pub fn warning(&self, msg: &str) {
        println!("{}", self.format_warning(msg));
    }

    pub fn error(&self, msg: &str) {
        println!("{}", self.format_error(msg));
    }
}

impl Default for Console {
    fn default() -> Self {
        Self::new(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_markers() {
        let console = Console::new(false);
        assert_eq!(console.format_info("Input file: a.mkv"), "[INFO] Input file: a.mkv");
        assert_eq!(console.format_success("done"), "✔ done");
        assert_eq!(console.format_warning("Deleted temporary file: x"), "⚠ Deleted temporary file: x");
        assert_eq!(console.format_error("failed"), "✖ failed");
    }

    #[test]
    fn test_colored_markers_keep_text() {
        let console = Console::new(true);
        assert!(console.format_error("failed").contains("failed"));
        assert!(console.format_info("hello").contains("[INFO]"));
    }
}
