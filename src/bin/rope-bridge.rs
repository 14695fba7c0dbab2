use anyhow::{Context, Result};

use rope_bridge::{read_instructions, run_many, Simulation};

// Chain lengths to run when none are given on the command line
const DEFAULT_LENGTHS: [usize; 2] = [2, 10];

fn main() -> Result<()> {
    env_logger::init();

    let mut json = false;
    let mut render = false;
    let mut lengths = Vec::new();

    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--json" => json = true,
            "--render" => render = true,
            _ => lengths.push(
                arg.parse::<usize>()
                    .with_context(|| format!("Invalid knot count: {arg:?}"))?,
            ),
        }
    }
    if lengths.is_empty() {
        lengths = DEFAULT_LENGTHS.to_vec();
    }

    let stdin = std::io::stdin();
    let mut reader = stdin.lock();
    let instructions = read_instructions(&mut reader)
        .inspect_err(|e| {
            if e.is_malformed_input() {
                log::error!("Refusing to run on malformed input: {e}");
            }
        })
        .context("Failed to read instructions")?;

    log::info!(
        "Read {} instructions, running lengths {:?}",
        instructions.len(),
        lengths
    );

    let simulations = run_many(&instructions, &lengths)
        .into_iter()
        .collect::<Result<Vec<Simulation>, _>>()?;

    if render {
        for simulation in simulations.iter() {
            println!("== {} knots ==", simulation.config().knots);
            println!("{}", simulation.display_rope());
            println!();
        }
    }

    let summaries = simulations
        .iter()
        .map(Simulation::summary)
        .collect::<Vec<_>>();

    if json {
        println!("{}", serde_json::to_string_pretty(&summaries)?);
    } else {
        for summary in summaries.iter() {
            println!("{}", summary.visited);
        }
    }

    Ok(())
}
