//! Premium Breakeven CLI
//!
//! Commands:
//! - `simulate` - project premium against investment and report the break-even
//! - `policy` - digest an extraction record and simulate its candidate fields
//! - `risk` - look up a population risk statistic
//! - `rates` - compare several investment rates for one policy

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

use premium_breakeven::coverage::InsuranceType;
use premium_breakeven::format::rate_to_percent;
use premium_breakeven::simulation::{DEFAULT_ANNUAL_RATE, DEFAULT_HORIZONS};
use premium_breakeven::{
    simulate, simulate_parallel, ExplanationContext, PolicyExtraction, RiskStatsSource,
    RiskStatsTable, ScenarioRunner, Sex, Simulation, SimulationInput,
};

#[derive(Parser)]
#[command(
    name = "premium_breakeven",
    about = "Compare an insurance premium against investing the same money"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Project premiums and investment value over the horizons.
    Simulate {
        /// Monthly premium.
        #[arg(long)]
        premium: f64,

        /// Benefit paid on a claim.
        #[arg(long)]
        benefit: f64,

        /// Annual investment return in percent.
        #[arg(long, default_value_t = DEFAULT_ANNUAL_RATE * 100.0, allow_negative_numbers = true)]
        rate_pct: f64,

        /// Comma-separated horizons in years. Defaults to 3,5,10,...,40.
        #[arg(long, value_delimiter = ',')]
        horizons: Option<Vec<u32>>,

        /// Project horizons on the thread pool.
        #[arg(long, default_value_t = false)]
        parallel: bool,

        /// Write the projection table to this CSV file.
        #[arg(long)]
        csv: Option<PathBuf>,

        /// Print the simulation as JSON instead of a table.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Digest a policy extraction record (JSON) and simulate it.
    Policy {
        /// Path to the extraction JSON.
        #[arg(long)]
        file: PathBuf,

        /// Annual investment return in percent.
        #[arg(long, default_value_t = DEFAULT_ANNUAL_RATE * 100.0, allow_negative_numbers = true)]
        rate_pct: f64,

        /// Comma-separated horizons in years.
        #[arg(long, value_delimiter = ',')]
        horizons: Option<Vec<u32>>,
    },
    /// Look up a population risk statistic.
    Risk {
        /// Risk statistics CSV.
        #[arg(long)]
        stats: PathBuf,

        /// Insurance category, e.g. cancer, medical, term_life.
        #[arg(long)]
        risk_type: String,

        /// Age in years.
        #[arg(long)]
        age: u32,

        /// male, female or all.
        #[arg(long, default_value = "all")]
        sex: String,
    },
    /// Compare several investment rates for the same policy.
    Rates {
        /// Monthly premium.
        #[arg(long)]
        premium: f64,

        /// Benefit paid on a claim.
        #[arg(long)]
        benefit: f64,

        /// Comma-separated annual returns in percent.
        #[arg(long, value_delimiter = ',', default_values_t = [1.0, 3.0, 5.0, 7.0], allow_negative_numbers = true)]
        rates_pct: Vec<f64>,

        /// Comma-separated horizons in years.
        #[arg(long, value_delimiter = ',')]
        horizons: Option<Vec<u32>>,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Simulate {
            premium,
            benefit,
            rate_pct,
            horizons,
            parallel,
            csv,
            json,
        } => run_simulate(premium, benefit, rate_pct, horizons, parallel, csv, json),
        Commands::Policy {
            file,
            rate_pct,
            horizons,
        } => run_policy(&file, rate_pct, horizons),
        Commands::Risk {
            stats,
            risk_type,
            age,
            sex,
        } => run_risk(&stats, &risk_type, age, &sex),
        Commands::Rates {
            premium,
            benefit,
            rates_pct,
            horizons,
        } => run_rates(premium, benefit, &rates_pct, horizons),
    }
}

fn horizons_or_default(horizons: Option<Vec<u32>>) -> Vec<u32> {
    horizons.unwrap_or_else(|| DEFAULT_HORIZONS.to_vec())
}

fn run_simulate(
    premium: f64,
    benefit: f64,
    rate_pct: f64,
    horizons: Option<Vec<u32>>,
    parallel: bool,
    csv: Option<PathBuf>,
    json: bool,
) -> Result<()> {
    let input = SimulationInput::from_percent_rate(premium, benefit, rate_pct, horizons_or_default(horizons))?;

    let simulation = if parallel {
        simulate_parallel(&input)
    } else {
        simulate(&input)
    };

    if let Some(path) = csv {
        write_csv(&path, &simulation)?;
        info!("Projection written to {}", path.display());
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&simulation)?);
    } else {
        print_simulation(&input, &simulation);
    }

    Ok(())
}

fn run_policy(file: &Path, rate_pct: f64, horizons: Option<Vec<u32>>) -> Result<()> {
    let raw = fs::read_to_string(file)
        .with_context(|| format!("Unable to read {}", file.display()))?;
    let extraction = PolicyExtraction::from_json(&raw)
        .with_context(|| format!("Unable to parse {}", file.display()))?;

    for line in extraction.summary_lines() {
        println!("{}", line);
    }
    if let Some(kind) = extraction.suggested_insurance_type() {
        println!("\nCategory: {}", kind.label());
        println!("{}", kind.guidance());
    }
    println!();

    let input = extraction.to_simulation_input(rate_pct / 100.0, horizons_or_default(horizons))?;
    let simulation = simulate(&input);
    print_simulation(&input, &simulation);

    Ok(())
}

fn run_risk(stats: &Path, risk_type: &str, age: u32, sex: &str) -> Result<()> {
    let kind: InsuranceType = risk_type.parse().map_err(anyhow::Error::msg)?;
    let sex: Sex = sex.parse().map_err(anyhow::Error::msg)?;
    let table = RiskStatsTable::from_csv_path(stats)
        .with_context(|| format!("Unable to load risk statistics from {}", stats.display()))?;

    match table.lookup(kind.as_str(), age, sex) {
        Some(stat) => {
            println!("Risk: {} ({})", kind.label(), stat.risk_type);
            println!("  Band: age {}-{}, {}", stat.age_from, stat.age_to, stat.sex);
            println!("  Annual probability: {:.4}%", stat.annual_prob * 100.0);
            if let Some(lifetime) = stat.lifetime_prob {
                println!("  Lifetime probability: {:.2}%", lifetime * 100.0);
            }
            if let Some(note) = &stat.note {
                println!("  Note: {}", note);
            }
            println!(
                "  Source: {}{}",
                stat.source_name.as_deref().unwrap_or("unknown"),
                stat.source_url.as_deref().map(|u| format!(" <{}>", u)).unwrap_or_default(),
            );
        }
        None => println!("No statistic for {} at age {} ({})", kind, age, sex),
    }

    Ok(())
}

fn run_rates(premium: f64, benefit: f64, rates_pct: &[f64], horizons: Option<Vec<u32>>) -> Result<()> {
    let base = SimulationInput::new(premium, benefit, 0.0, horizons_or_default(horizons))?;
    let runner = ScenarioRunner::new(base);
    let rates: Vec<f64> = rates_pct.iter().map(|r| r / 100.0).collect();
    let scenarios = runner.run_rates(&rates)?;

    println!("{:>8} {:>12} {:>10} {:>16}", "Rate %", "Break-even", "Bracket", "Final delta");
    println!("{}", "-".repeat(50));

    for s in &scenarios {
        let final_delta = s.simulation.result.points().last().map(|p| p.delta()).unwrap_or(0.0);
        match s.simulation.break_even {
            Some(be) => println!(
                "{:>8.2} {:>12.1} {:>10} {:>16.0}",
                rate_to_percent(s.annual_rate),
                be.approx_year,
                format!("{}-{}", be.from_year, be.to_year),
                final_delta,
            ),
            None => println!(
                "{:>8.2} {:>12} {:>10} {:>16.0}",
                rate_to_percent(s.annual_rate),
                "none",
                "-",
                final_delta,
            ),
        }
    }

    Ok(())
}

fn print_simulation(input: &SimulationInput, simulation: &Simulation) {
    println!(
        "Monthly premium {:.2}, benefit {:.2}, annual return {}%",
        input.monthly_premium(),
        input.benefit_amount(),
        rate_to_percent(input.annual_rate()),
    );
    println!();
    println!(
        "{:>5} {:>16} {:>16} {:>16} {:>16}",
        "Years", "Premiums", "Invested", "Insurance net", "Delta"
    );
    println!("{}", "-".repeat(73));

    for p in &simulation.result {
        println!(
            "{:>5} {:>16.0} {:>16.0} {:>16.0} {:>16.0}",
            p.years(), p.total_premium_paid(), p.investment_future_value(), p.insurance_net(), p.delta(),
        );
    }

    let context = ExplanationContext::new(input, simulation, None);
    println!("\n{}", context.break_even_text());
}

fn write_csv(path: &Path, simulation: &Simulation) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("Unable to create {}", path.display()))?;
    for point in &simulation.result {
        writer.serialize(point)?;
    }
    writer.flush()?;
    Ok(())
}
