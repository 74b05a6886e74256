//! Every log of the library is made to one of the targets of [targets].

use std::sync::Mutex;

use log::{LevelFilter, Log, Metadata, Record};

use marten_sat::{
    config::{Config, RestartPolicy},
    context::Context,
    misc::log::targets,
    reports::Report,
};

static TARGETS: Mutex<Vec<String>> = Mutex::new(Vec::new());

struct TargetCapture;

impl Log for TargetCapture {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        if let Ok(mut seen) = TARGETS.lock() {
            seen.push(record.target().to_string());
        }
    }

    fn flush(&self) {}
}

static CAPTURE: TargetCapture = TargetCapture;

const KNOWN: [&str; 11] = [
    targets::PROPAGATION,
    targets::ANALYSIS,
    targets::REDUCTION,
    targets::CLAUSE_DB,
    targets::VALUATION,
    targets::BACKJUMP,
    targets::DECISION,
    targets::RESTART,
    targets::RESOLUTION,
    targets::PARSE,
    targets::SOLVE,
];

fn pigeonhole_dimacs(holes: usize) -> String {
    let pigeons = holes + 1;
    let atom = |pigeon: usize, hole: usize| pigeon * holes + hole + 1;

    let mut dimacs = format!("p cnf {} {}\n", pigeons * holes, pigeons);
    for pigeon in 0..pigeons {
        for hole in 0..holes {
            dimacs.push_str(&format!("{} ", atom(pigeon, hole)));
        }
        dimacs.push_str("0\n");
    }
    for hole in 0..holes {
        for a in 0..pigeons {
            for b in (a + 1)..pigeons {
                dimacs.push_str(&format!("-{} -{} 0\n", atom(a, hole), atom(b, hole)));
            }
        }
    }
    dimacs
}

#[test]
fn logs_use_known_targets() {
    assert!(log::set_logger(&CAPTURE).is_ok());
    log::set_max_level(LevelFilter::Trace);

    let mut config = Config::default();
    config.restart_policy.value = RestartPolicy::Luby { unit: 2 };
    config.reduction_interval.value = 4;

    let mut the_context = Context::from_config(config.clone());
    assert!(the_context
        .read_dimacs(pigeonhole_dimacs(4).as_bytes())
        .is_ok());
    assert_eq!(the_context.solve(), Ok(Report::Unsatisfiable));

    config.conflict_limit.value = 1;
    let mut the_context = Context::from_config(config);
    assert!(the_context
        .read_dimacs(pigeonhole_dimacs(5).as_bytes())
        .is_ok());
    assert_eq!(the_context.solve(), Ok(Report::Unknown));

    let seen = TARGETS.lock().map(|seen| seen.clone()).unwrap_or_default();
    for target in &seen {
        assert!(KNOWN.contains(&target.as_str()), "log to unknown target {target}");
    }

    // Release builds compile logs out.
    if cfg!(debug_assertions) {
        assert!(seen.iter().any(|target| target == targets::SOLVE));
        assert!(seen.iter().any(|target| target == targets::PARSE));
    }
}
