mod report;

use std::io::{self, IsTerminal, Read};
use std::time::Instant;

use hydrion::{RunMetrics, StepCache};
use num_traits::Zero;
use report::Palette;

fn main() {
    let config = match parse_args() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    let chain = hydrion::normalize(config.chain.trim());
    if let Err(err) = hydrion::validate(&chain) {
        eprintln!("error: {err}");
        std::process::exit(2);
    }

    let palette = Palette::new(config.color);
    match config.mode {
        Mode::Step => step_once(&chain),
        Mode::Run => run_plain(&chain, &palette, true, false),
        Mode::Last => run_plain(&chain, &palette, false, false),
        Mode::Interactive => run_plain(&chain, &palette, true, true),
        Mode::RunAbridged => run_abridged(&chain, &palette, false),
        Mode::InteractiveAbridged => run_abridged(&chain, &palette, true),
    }
}

/// Apply one step and stop, whatever else would still apply.
fn step_once(chain: &str) {
    match hydrion::rewrite_step(chain) {
        Some(next) => println!("{next}"),
        None => println!("(no rule applies)"),
    }
}

/// Unabridged driving loop. `echo` prints every intermediate chain; `pause`
/// gates each step on Enter (`q` or end of input cancels the run).
fn run_plain(chain: &str, palette: &Palette, echo: bool, pause: bool) {
    let started = Instant::now();
    let mut metrics = RunMetrics::default();
    let mut cur = chain.to_string();
    if echo {
        println!("{cur}");
    }
    loop {
        let Some(next) = hydrion::rewrite_step(&cur) else { break };
        if pause && !report::wait_for_enter() {
            break;
        }
        if echo {
            println!("{next}");
        }
        metrics.record_step();
        cur = next;
    }
    metrics.total = started.elapsed();
    if !echo {
        println!("{cur}");
    }
    report::print_totals(palette, &metrics, false);
}

/// Abridged driving loop: closed-form jumps are announced with an omission
/// annotation; only fresh single steps are gated in interactive use.
fn run_abridged(chain: &str, palette: &Palette, pause: bool) {
    let started = Instant::now();
    let mut cache = StepCache::new();
    let mut metrics = RunMetrics::default();
    let mut cur = chain.to_string();
    println!("{cur}");
    loop {
        let Some(jump) = hydrion::abridged_step(&cur, &mut cache) else { break };
        if jump.omitted.is_zero() {
            if pause && !report::wait_for_enter() {
                break;
            }
        } else {
            println!("{}", palette.dim(format!("({} lines omitted)", jump.omitted)));
        }
        println!("{}", jump.chain);
        metrics.record(&jump);
        cur = jump.chain;
    }
    metrics.total = started.elapsed();
    report::print_totals(palette, &metrics, true);
}

struct CliConfig {
    mode: Mode,
    chain: String,
    color: bool,
}

#[derive(Clone, Copy)]
enum Mode {
    Step,
    Run,
    Last,
    Interactive,
    RunAbridged,
    InteractiveAbridged,
}

impl Mode {
    fn parse(name: &str) -> Option<Mode> {
        match name {
            "step" => Some(Mode::Step),
            "run" => Some(Mode::Run),
            "last" => Some(Mode::Last),
            "interactive" => Some(Mode::Interactive),
            "run-abridged" => Some(Mode::RunAbridged),
            "interactive-abridged" => Some(Mode::InteractiveAbridged),
            _ => None,
        }
    }
}

fn parse_args() -> Result<CliConfig, String> {
    let mut mode: Option<Mode> = None;
    let mut chain: Option<String> = None;
    let mut color = io::stdout().is_terminal();
    let mut args = std::env::args().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                println!("{}", help_text());
                std::process::exit(0);
            }
            "-V" | "--version" => {
                println!("hydrion {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "--color" => color = true,
            "--no-color" => color = false,
            "--chain" | "-c" => {
                let value = args.next().ok_or_else(|| "error: --chain expects a value".to_string())?;
                if chain.is_some() {
                    return Err("error: chain provided multiple times".to_string());
                }
                chain = Some(value);
            }
            "--" => {
                let rest = args.collect::<Vec<_>>().join(" ");
                if !rest.trim().is_empty() {
                    if chain.is_some() {
                        return Err("error: chain provided multiple times".to_string());
                    }
                    chain = Some(rest);
                }
                break;
            }
            _ if arg.starts_with("--chain=") => {
                let value = arg.trim_start_matches("--chain=");
                if chain.is_some() {
                    return Err("error: chain provided multiple times".to_string());
                }
                chain = Some(value.to_string());
            }
            _ if arg.starts_with("--") => {
                return Err(format!("error: unknown option '{arg}'"));
            }
            _ => {
                if mode.is_none() {
                    let parsed =
                        Mode::parse(&arg).ok_or_else(|| format!("error: unknown mode '{arg}'\n\n{}", help_text()))?;
                    mode = Some(parsed);
                } else if chain.is_none() {
                    chain = Some(arg);
                } else {
                    return Err(format!("error: unexpected extra argument '{arg}'"));
                }
            }
        }
    }

    let mode = mode.ok_or_else(|| format!("error: no mode provided\n\n{}", help_text()))?;
    let chain = match chain {
        Some(value) => value,
        None => read_stdin_chain()?,
    };
    if chain.trim().is_empty() {
        return Err(format!("error: no chain provided\n\n{}", help_text()));
    }

    Ok(CliConfig { mode, chain, color })
}

fn read_stdin_chain() -> Result<String, String> {
    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer).map_err(|err| format!("error: failed to read stdin: {err}"))?;
    Ok(buffer)
}

fn help_text() -> String {
    format!(
        "hydrion {version}

Deterministic bullet-dash chain rewriting CLI.

Usage:
  hydrion <mode> [OPTIONS] [--] <chain>
  hydrion <mode> [OPTIONS] --chain <chain>

Modes:
  step                   Apply a single rewrite step and stop.
  run                    Rewrite to normal form, printing every chain.
  last                   Rewrite to normal form, printing only the result.
  interactive            Like run, waiting for Enter between steps
                         (q or end of input cancels).
  run-abridged           Like run, jumping over repetitive expansions and
                         annotating each jump with the omitted line count.
  interactive-abridged   Abridged, with the Enter gate on single steps.

Options:
  -c, --chain <chain>    The chain to rewrite. If omitted, reads the second
                         positional argument, or stdin when none is given.
                         ASCII '.' is accepted as an alias for '\u{2022}'.
  --color                Force ANSI color output.
  --no-color             Disable ANSI color output.
  -h, --help             Show this help message.
  -V, --version          Print version information.

Exit codes:
  0  Success.
  1  Internal error.
  2  Invalid arguments or malformed chain.
",
        version = env!("CARGO_PKG_VERSION"),
    )
}
