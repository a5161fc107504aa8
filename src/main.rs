use anyhow::{Context, Result};
use chimera_lib::model::config::EngineConfig;
use chimera_lib::model::metrics::init_logging;
use chimera_lib::model::prediction::PredictionContext;
use chimera_lib::model::state::{Biome, GeneticProfile, Season};
use chimera_lib::model::GeneticsEngine;
use chimera_lib::sample;
use clap::{Parser, Subcommand, ValueEnum};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Engine config file path
    #[arg(short, long, global = true, default_value = "chimera.toml")]
    config: PathBuf,

    /// Root seed, overrides the config file
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Predict offspring traits for a breeding pair
    Predict {
        /// JSON file holding `[parent1, parent2]`; random parents if omitted
        #[arg(short, long)]
        parents: Option<PathBuf>,

        #[arg(long, value_enum, default_value = "grassland")]
        biome: BiomeArg,

        #[arg(long, value_enum, default_value = "summer")]
        season: SeasonArg,

        /// Age-driven mutation pressure multiplier
        #[arg(long, default_value_t = 1.0)]
        age_factor: f32,
    },
    /// Score breeding compatibility of a pair
    Analyze {
        /// JSON file holding `[parent1, parent2]`; random parents if omitted
        #[arg(short, long)]
        parents: Option<PathBuf>,
    },
    /// Run population ticks through the batch engines
    Tick {
        #[arg(short, long, default_value_t = 10_000)]
        population: usize,

        #[arg(short, long, default_value_t = 1)]
        ticks: u64,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum BiomeArg {
    Grassland,
    Forest,
    Desert,
    Tundra,
    Volcanic,
    Ocean,
    Mystic,
}

impl From<BiomeArg> for Biome {
    fn from(arg: BiomeArg) -> Self {
        match arg {
            BiomeArg::Grassland => Biome::Grassland,
            BiomeArg::Forest => Biome::Forest,
            BiomeArg::Desert => Biome::Desert,
            BiomeArg::Tundra => Biome::Tundra,
            BiomeArg::Volcanic => Biome::Volcanic,
            BiomeArg::Ocean => Biome::Ocean,
            BiomeArg::Mystic => Biome::Mystic,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum SeasonArg {
    Spring,
    Summer,
    Autumn,
    Winter,
}

impl From<SeasonArg> for Season {
    fn from(arg: SeasonArg) -> Self {
        match arg {
            SeasonArg::Spring => Season::Spring,
            SeasonArg::Summer => Season::Summer,
            SeasonArg::Autumn => Season::Autumn,
            SeasonArg::Winter => Season::Winter,
        }
    }
}

fn load_parents(path: Option<&Path>, seed: u64) -> Result<(GeneticProfile, GeneticProfile)> {
    match path {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading parents from {}", path.display()))?;
            let [p1, p2]: [GeneticProfile; 2] =
                serde_json::from_str(&text).context("parents file must hold two profiles")?;
            p1.validate()?;
            p2.validate()?;
            Ok((p1, p2))
        }
        None => {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let p1 = sample::random_profile(&mut rng, 1);
            let p2 = sample::random_profile(&mut rng, 2);
            Ok((p1, p2))
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging();

    let mut config = EngineConfig::load(&args.config)?;
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    let mut engine = GeneticsEngine::init(config)?;

    match args.command {
        Command::Predict {
            parents,
            biome,
            season,
            age_factor,
        } => {
            let (p1, p2) = load_parents(parents.as_deref(), engine.seed())?;
            let context = PredictionContext {
                biome: biome.into(),
                season: season.into(),
                age_factor,
            };
            let prediction = engine.predict(Some(&p1), Some(&p2), &context);
            println!("{}", serde_json::to_string_pretty(&prediction)?);
        }
        Command::Analyze { parents } => {
            let (p1, p2) = load_parents(parents.as_deref(), engine.seed())?;
            let report = engine.analyze(Some(&p1), Some(&p2));
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        Command::Tick { population, ticks } => {
            let mut rng = ChaCha8Rng::seed_from_u64(engine.seed());
            let batch = sample::random_batch(&mut rng, population);
            let mut summary = Vec::with_capacity(ticks as usize);
            for _ in 0..ticks {
                let report = engine.step(&batch);
                summary.push(serde_json::json!({
                    "tick": report.tick,
                    "records": report.offspring.len(),
                    "mean_fitness": report.mean_fitness,
                    "mean_compatibility": report.mean_compatibility,
                }));
            }
            println!("{}", serde_json::to_string_pretty(&summary)?);
            tracing::info!(
                ticks = engine.metrics().tick_count(),
                records = engine.metrics().records_processed(),
                elapsed_ms = engine.metrics().elapsed().as_millis() as u64,
                "Batch run finished"
            );
        }
    }

    Ok(())
}
