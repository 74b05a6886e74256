use marten_sat::{config::Config, context::Context, reports::Report};
use misc::{examine_parser_report, print_counters};
use parse_args::{parse_args, CliOptions};
use read::read_formula;

mod misc;
mod parse_args;
mod read;

const USAGE: &str = "c Usage: marten_cli [--option=value ...] FILE.cnf[.xz]";

fn main() {
    #[cfg(feature = "log")]
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    let mut config = Config::default();
    let mut cli_options = CliOptions::default();

    let path = match parse_args(&args, &mut config, &mut cli_options) {
        Ok(path) => path,
        Err(message) => {
            println!("c {message}");
            println!("{USAGE}");
            std::process::exit(1);
        }
    };

    let mut ctx = Context::from_config(config);

    println!("c Reading DIMACS file from {path:?}");
    match read_formula(&mut ctx, &path) {
        Ok(info) => examine_parser_report(&info),
        Err(e) => {
            println!("c Parse error: {e:?}");
            std::process::exit(1);
        }
    }

    let report = match ctx.solve() {
        Ok(report) => report,
        Err(e) => {
            println!("c Solve error: {e:?}");
            std::process::exit(2);
        }
    };

    if cli_options.stats {
        print_counters(&ctx.counters);
    }

    println!("{}", report.status_line());

    if cli_options.model {
        if let Some(model) = ctx.model() {
            let literals = model
                .iter()
                .map(|literal| literal.to_string())
                .collect::<Vec<_>>();
            println!("v {} 0", literals.join(" "));
        }
    }

    std::process::exit(match report {
        Report::Satisfiable => 10,
        Report::Unsatisfiable => 20,
        Report::Unknown => 0,
    });
}
