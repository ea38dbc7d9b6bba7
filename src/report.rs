use std::io;

use hydrion::RunMetrics;

mod ansi {
    pub const RESET: &str = "\x1b[0m";
    pub const DIM: &str = "\x1b[2m";
    pub const BOLD: &str = "\x1b[1m";

    pub struct Palette {
        enabled: bool,
    }

    impl Palette {
        pub fn new(enabled: bool) -> Self {
            Self { enabled }
        }

        pub fn bold(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", BOLD, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn dim(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", DIM, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }
    }
}

pub use ansi::Palette;

/// Block until the user presses Enter. Returns false when the run should be
/// cancelled (`q` or end of input).
pub fn wait_for_enter() -> bool {
    let mut line = String::new();
    match io::stdin().read_line(&mut line) {
        Ok(0) => false,
        Ok(_) => !line.trim().eq_ignore_ascii_case("q"),
        Err(_) => false,
    }
}

/// Print the elementary-step total, plus a compact engine summary for
/// abridged runs.
pub fn print_totals(palette: &Palette, metrics: &RunMetrics, abridged: bool) {
    println!("{}", palette.bold(format!("Total steps: {}", metrics.elementary)));
    if abridged {
        println!(
            "{}",
            palette.dim(format!(
                "  {} engine calls │ {} jumps │ {} cache hits │ {:?} │ {:?}",
                metrics.calls, metrics.jumps, metrics.cache_hits, metrics.kinds, metrics.total
            ))
        );
    }
}
