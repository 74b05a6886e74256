use std::{fmt::Display, path::PathBuf, str::FromStr, time::Duration};

use marten_sat::config::{Config, ConfigOption};

/// Options of the CLI, as distinct from the configuration of a context.
#[derive(Default)]
pub struct CliOptions {
    /// Write a model, if one exists.
    pub model: bool,

    /// Write counters after a solve.
    pub stats: bool,
}

/// Parses CLI arguments to a [Config] struct and a [CliOptions] struct, returning the path to the formula.
///
/// Every argument but the last is an option, and the last is the path.
/// Options of a configuration are written `--name=value`, and values are checked against the bounds of the option.
pub fn parse_args(
    args: &[String],
    cfg: &mut Config,
    cli_options: &mut CliOptions,
) -> Result<PathBuf, String> {
    let Some((path, options)) = args.split_last() else {
        return Err("Path to CNF required".to_string());
    };
    if options.is_empty() || path.starts_with("--") {
        return Err("Path to CNF required".to_string());
    }

    for arg in options.iter().skip(1) {
        let mut split = arg.splitn(2, '=');
        let name = split.next().unwrap_or_default();
        let request = split.next();

        // Cases are in lexicographic order.
        match name {
            "--model" | "--valuation" => {
                println!("c A model will be written, if one exists.");
                cli_options.model = true;
            }

            "--stats" => cli_options.stats = true,

            "--atom_bump" => set_option(&mut cfg.atom_db.bump, request)?,
            "--atom_decay" => set_option(&mut cfg.atom_db.decay, request)?,
            "--clause_bump" => set_option(&mut cfg.clause_db.bump, request)?,
            "--clause_decay" => set_option(&mut cfg.clause_db.decay, request)?,
            "--clause_limit" => set_option(&mut cfg.clause_db.clause_limit, request)?,
            "--conflict_limit" => set_option(&mut cfg.conflict_limit, request)?,
            "--decision_heuristic" => set_option(&mut cfg.decision_heuristic, request)?,
            "--lbd_bound" => set_option(&mut cfg.clause_db.lbd_bound, request)?,
            "--occurrence_seeding" => set_option(&mut cfg.occurrence_seeding, request)?,
            "--phase_saving" => set_option(&mut cfg.phase_saving, request)?,
            "--polarity_lean" => set_option(&mut cfg.polarity_lean, request)?,
            "--random_decision_bias" => set_option(&mut cfg.random_decision_bias, request)?,
            "--reduction_interval" => set_option(&mut cfg.reduction_interval, request)?,
            "--reduction_ratio" => set_option(&mut cfg.reduction_ratio, request)?,
            "--restart_policy" => set_option(&mut cfg.restart_policy, request)?,
            "--seed" => set_option(&mut cfg.seed, request)?,
            "--time_limit" => set_time_limit(&mut cfg.time_limit, request)?,
            "--vsids_variant" => set_option(&mut cfg.vsids_variant, request)?,

            _ => return Err(format!("Unrecognised argument: {arg}")),
        }
    }

    Ok(PathBuf::from(path))
}

/// Sets the value of an option to the requested value, if the value can be read and is within the bounds of the option.
fn set_option<T>(option: &mut ConfigOption<T>, request: Option<&str>) -> Result<(), String>
where
    T: FromStr + PartialOrd + Display + Clone,
{
    if let Some(value) = request.and_then(|request| request.parse::<T>().ok()) {
        let shown = value.to_string();
        if option.set_bounded(value) {
            println!("c {} set to: {shown}", option.name);
            return Ok(());
        }
    }

    let (min, max) = option.min_max();
    Err(format!("{} requires a value between {min} and {max}", option.name))
}

/// Sets a time limit, in seconds.
fn set_time_limit(option: &mut ConfigOption<Duration>, request: Option<&str>) -> Result<(), String> {
    if let Some(seconds) = request.and_then(|request| request.parse::<u64>().ok()) {
        if option.set_bounded(Duration::from_secs(seconds)) {
            println!("c {} set to: {seconds}s", option.name);
            return Ok(());
        }
    }

    Err(format!("{} requires a count of seconds", option.name))
}
