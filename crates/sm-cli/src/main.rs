//! spinmark: Monte Carlo RTP estimator for a classic 3x3 slot machine
//!
//! Runs the simulator and prints the summary the cabinet engineers read:
//! wins, losses, house take, cash paid out and the estimated RTP. All
//! currency and locale formatting lives here; the core emits raw decimals.

use anyhow::Result;
use clap::{Parser, ValueEnum};
use log::info;

use sm_rtp_sim::{Report, SimConfig, SimRunner};
use sm_slot_core::SpinPolicy;

#[derive(Parser)]
#[command(
    name = "spinmark",
    about = "Monte Carlo RTP estimator for a classic 3x3 slot machine"
)]
struct Cli {
    /// Number of trials to run
    #[arg(long, default_value_t = 1_000_000)]
    trials: u64,

    /// Stake per trial, in pounds
    #[arg(long, default_value_t = 0.10)]
    stake: f64,

    /// Seed the random source for a reproducible run
    #[arg(long)]
    seed: Option<u64>,

    /// Reel stepping policy
    #[arg(long, value_enum, default_value = "mechanical")]
    policy: PolicyArg,

    /// Log progress every N trials (0 = silent)
    #[arg(long, default_value_t = 100_000)]
    progress: u64,

    /// Print the report as JSON instead of a table
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum PolicyArg {
    /// Fixed circular reel band with a per-reel cursor
    Mechanical,
    /// Independent uniform draw on every step
    Electronic,
}

impl From<PolicyArg> for SpinPolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Mechanical => SpinPolicy::Mechanical,
            PolicyArg::Electronic => SpinPolicy::Electronic,
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut config = SimConfig::default()
        .with_trials(cli.trials)
        .with_stake(cli.stake)
        .with_policy(cli.policy.into());
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }

    let mut runner = SimRunner::new(config)?;
    let report = runner.run_with_progress(cli.progress, |done, total| {
        info!("spun {done} of {total} trials");
    })?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }
    Ok(())
}

fn print_report(report: &Report) {
    println!("Number of spins  : {}", report.trials);
    println!("Number of wins   : {}", report.wins);
    println!("Number of losses : {}", report.losses);
    println!("Total staked     : {}", format_gbp(report.total_stake));
    println!("Cash paid out    : {}", format_gbp(report.total_payout));
    println!("House take       : {}", format_gbp(report.house_take));
    println!("Calculated RTP   : {:.2}%", report.rtp_percent);
}

/// en-GB currency display, e.g. `£1,234.56`.
fn format_gbp(amount: f64) -> String {
    let negative = amount < 0.0;
    let total_pence = (amount.abs() * 100.0).round() as u64;
    let pounds = (total_pence / 100).to_string();
    let pence = total_pence % 100;

    let mut grouped = String::with_capacity(pounds.len() + pounds.len() / 3);
    for (i, digit) in pounds.chars().enumerate() {
        if i > 0 && (pounds.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if negative { "-" } else { "" };
    format!("{sign}£{grouped}.{pence:02}")
}
