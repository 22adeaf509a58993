use std::io::{BufRead, Write};
use std::panic::{self, PanicHookInfo};
use std::thread;

use divguard_core::{Case, Harness, Report, demo};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::{Config, Result};

fn rng(config: &Config) -> StdRng {
    match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

type PanicHook = Box<dyn Fn(&PanicHookInfo<'_>) + Sync + Send + 'static>;

/// Silences the panic hook while caught faults are reported through tracing.
/// The previous hook is restored on drop.
struct QuietPanics {
    previous: Option<PanicHook>,
}

impl QuietPanics {
    fn install() -> Self {
        let previous = panic::take_hook();
        panic::set_hook(Box::new(|_| {}));
        Self {
            previous: Some(previous),
        }
    }
}

impl Drop for QuietPanics {
    fn drop(&mut self) {
        if thread::panicking() {
            return;
        }
        if let Some(previous) = self.previous.take() {
            panic::set_hook(previous);
        }
    }
}

/// Runs the fixed scenario and writes one line per case.
pub fn run_demo<R: BufRead, W: Write>(
    config: &Config,
    input: &mut R,
    out: &mut W,
) -> Result<Vec<Report>> {
    tracing::debug!(ack = demo::acknowledge(), "running demo");
    run_cases(config, &demo::cases(config.numerator), input, out)
}

/// Runs a single case and writes its line.
pub fn run_case<R: BufRead, W: Write>(
    config: &Config,
    case: &Case,
    input: &mut R,
    out: &mut W,
) -> Result<Report> {
    let mut reports = run_cases(config, std::slice::from_ref(case), input, out)?;
    Ok(reports.remove(0))
}

fn run_cases<R: BufRead, W: Write>(
    config: &Config,
    cases: &[Case],
    input: &mut R,
    out: &mut W,
) -> Result<Vec<Report>> {
    let mut rng = rng(config);
    let mut harness = Harness::new(input, &mut rng).catch_faults(config.catch_faults);
    let _quiet = config.catch_faults.then(QuietPanics::install);

    let mut reports = Vec::with_capacity(cases.len());
    for case in cases {
        let report = harness.run(case)?;
        writeln!(out, "{report}")?;
        reports.push(report);
    }
    out.flush()?;
    Ok(reports)
}

#[cfg(test)]
mod tests {
    use super::*;
    use divguard_core::{Operation, Outcome, Path, Source};
    use pretty_assertions::assert_eq;

    fn output(f: impl FnOnce(&mut Vec<u8>)) -> String {
        let mut out = Vec::new();
        f(&mut out);
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_demo_lines() {
        let config = Config::default();
        let text = output(|out| {
            let reports = run_demo(&config, &mut &b""[..], out).unwrap();
            assert_eq!(reports.len(), 2);
        });
        assert_eq!(
            text,
            "This would result in a divide by zero\n100/0 faulted: attempt to divide by zero\n"
        );
    }

    #[test]
    fn test_demo_uses_configured_numerator() {
        let config = Config {
            numerator: 42,
            ..Config::default()
        };
        let text = output(|out| {
            run_demo(&config, &mut &b""[..], out).unwrap();
        });
        assert!(text.ends_with("42/0 faulted: attempt to divide by zero\n"));
    }

    #[test]
    fn test_single_case() {
        let config = Config::default();
        let case = Case {
            numerator: 100,
            source: Source::Console,
            operation: Operation::Divide,
            path: Path::Unguarded,
        };
        let mut report = None;
        let text = output(|out| {
            report = Some(run_case(&config, &case, &mut &b"5\n"[..], out).unwrap());
        });
        assert_eq!(text, "100/5 = 20\n");
        assert_eq!(report.map(|r| r.outcome), Some(Outcome::Value(20)));
    }
}
