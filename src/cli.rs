use std::io;
use std::path::Path;

use serde::Serialize;

use crate::config::{load_sweep_config, SweepConfig, DEFAULT_SWEEP_CONFIG_PATH};
use crate::equilibrium::{
    at_least_one_volunteer_classic, at_least_one_volunteer_social_distance,
    classic_n_player_nash, classic_two_player_nash, social_distance_n_player_nash,
    social_distance_two_player_nash, EquilibriumResult, Payoffs,
};
use crate::report::{export_report, write_csv, write_json};
use crate::sweep::run_sweep;

const USAGE: &str = "usage: bystander <eval|sweep|validate>";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Eval,
    Sweep,
    Validate,
}

pub fn parse_command(args: &[String]) -> Option<Command> {
    match args.get(1).map(String::as_str) {
        Some("eval") => Some(Command::Eval),
        Some("sweep") => Some(Command::Sweep),
        Some("validate") => Some(Command::Validate),
        _ => None,
    }
}

pub fn run_with_args(args: &[String]) -> i32 {
    match parse_command(args) {
        Some(Command::Eval) => handle_eval(args),
        Some(Command::Sweep) => handle_sweep(args),
        Some(Command::Validate) => handle_validate(args),
        None => {
            eprintln!("{USAGE}");
            2
        }
    }
}

/// Every closed-form variant for one set of inputs.
#[derive(Debug, Clone, Serialize)]
pub struct Evaluation {
    pub payoffs: Payoffs,
    pub players: u32,
    pub distance: f64,
    pub classic_two_player: f64,
    pub classic_n_player: f64,
    pub at_least_one_classic: f64,
    pub social_distance_two_player: f64,
    pub social_distance_n_player: f64,
    pub at_least_one_social_distance: f64,
}

pub fn evaluate(payoffs: Payoffs, players: u32, distance: f64) -> EquilibriumResult<Evaluation> {
    Ok(Evaluation {
        payoffs,
        players,
        distance,
        classic_two_player: classic_two_player_nash(payoffs)?,
        classic_n_player: classic_n_player_nash(payoffs, players)?,
        at_least_one_classic: at_least_one_volunteer_classic(payoffs, players)?,
        social_distance_two_player: social_distance_two_player_nash(payoffs, distance)?,
        social_distance_n_player: social_distance_n_player_nash(payoffs, players, distance)?,
        at_least_one_social_distance: at_least_one_volunteer_social_distance(payoffs, players, distance)?,
    })
}

fn handle_eval(args: &[String]) -> i32 {
    let (Some(t), Some(r), Some(p), Some(n)) = (
        parse_f64_arg(args.get(2)),
        parse_f64_arg(args.get(3)),
        parse_f64_arg(args.get(4)),
        args.get(5).and_then(|raw| raw.parse::<u32>().ok()),
    ) else {
        eprintln!("usage: bystander eval <T> <R> <P> <n> [d]");
        return 2;
    };
    let distance = match args.get(6) {
        None => 0.0,
        Some(raw) => match raw.parse::<f64>() {
            Ok(value) => value,
            Err(_) => {
                eprintln!("invalid distance '{raw}'");
                return 2;
            }
        },
    };

    let evaluation = match Payoffs::new(t, r, p).and_then(|payoffs| evaluate(payoffs, n, distance)) {
        Ok(evaluation) => evaluation,
        Err(err) => {
            eprintln!("evaluation failed: {err}");
            return 1;
        }
    };
    match serde_json::to_string_pretty(&evaluation) {
        Ok(payload) => {
            println!("{payload}");
            0
        }
        Err(err) => {
            eprintln!("failed to serialize evaluation: {err}");
            1
        }
    }
}

#[derive(Debug, Default, PartialEq, Eq)]
struct SweepArgs<'a> {
    config: Option<&'a str>,
    out_dir: Option<&'a str>,
    as_csv: bool,
}

fn parse_sweep_args(args: &[String]) -> Result<SweepArgs<'_>, String> {
    let mut parsed = SweepArgs::default();
    let mut rest = args.iter().skip(2).map(String::as_str);
    while let Some(arg) = rest.next() {
        match arg {
            "--csv" => parsed.as_csv = true,
            "--out" => match rest.next() {
                Some(dir) => parsed.out_dir = Some(dir),
                None => return Err("--out requires a directory".to_string()),
            },
            flag if flag.starts_with("--") => return Err(format!("unknown flag '{flag}'")),
            path if parsed.config.is_none() => parsed.config = Some(path),
            extra => return Err(format!("unexpected argument '{extra}'")),
        }
    }
    Ok(parsed)
}

fn resolve_config(path: Option<&str>) -> Result<SweepConfig, String> {
    match path {
        Some(path) => load_sweep_config(path).map_err(|err| err.to_string()),
        None if Path::new(DEFAULT_SWEEP_CONFIG_PATH).exists() => {
            load_sweep_config(DEFAULT_SWEEP_CONFIG_PATH).map_err(|err| err.to_string())
        }
        None => Ok(SweepConfig::default()),
    }
}

fn handle_sweep(args: &[String]) -> i32 {
    let sweep_args = match parse_sweep_args(args) {
        Ok(parsed) => parsed,
        Err(msg) => {
            eprintln!("{msg}");
            eprintln!("usage: bystander sweep [config.yaml] [--out DIR] [--csv]");
            return 2;
        }
    };
    let config = match resolve_config(sweep_args.config) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("config error: {err}");
            return 1;
        }
    };
    let report = match run_sweep(&config) {
        Ok(report) => report,
        Err(err) => {
            eprintln!("sweep failed: {err}");
            return 1;
        }
    };

    if let Some(dir) = sweep_args.out_dir {
        if let Err(err) = export_report(&report, dir) {
            eprintln!("export failed: {err}");
            return 1;
        }
    }

    let stdout = io::stdout();
    let written = if sweep_args.as_csv {
        write_csv(&report, stdout.lock())
    } else {
        write_json(&report, stdout.lock())
    };
    match written {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("failed to write sweep output: {err}");
            1
        }
    }
}

fn handle_validate(args: &[String]) -> i32 {
    let Some(path) = args.get(2) else {
        eprintln!("usage: bystander validate <config.yaml>");
        return 2;
    };

    match load_sweep_config(path) {
        Ok(config) => {
            println!(
                "validation passed: {path} (players {}..={}, {} distances)",
                config.min_players,
                config.max_players,
                config.social_distances.len()
            );
            0
        }
        Err(err) => {
            eprintln!("validation failed: {err}");
            1
        }
    }
}

fn parse_f64_arg(raw: Option<&String>) -> Option<f64> {
    raw.and_then(|value| value.parse::<f64>().ok())
}
