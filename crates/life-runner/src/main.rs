//! Timed driver for the toroidal Game of Life.
//!
//! Randomizes a world, then steps it on a fixed interval until the world
//! goes extinct, the generation limit is hit, or Ctrl-C arrives. All the
//! scheduling lives here; the core only promises that `step` is cheap and
//! repeatable.

use anyhow::Result;
use life_core::RunnerConfig;
use life_world::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tokio::signal;
use tokio::time::{interval, Duration};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = RunnerConfig::from_env()?;
    info!(
        dimension = config.world.dimension,
        seed = config.world.seed,
        tick_interval_ms = config.tick_interval_ms,
        "starting life runner"
    );

    let mut rng = ChaCha8Rng::seed_from_u64(config.world.seed);
    let mut world = World::randomize(config.world.dimension, &mut rng)?;
    info!(population = world.population(), "initial world");
    print!("{world}");

    let mut ticker = interval(Duration::from_millis(config.tick_interval_ms));
    // The first tick of a tokio interval fires immediately; consume it so
    // generation 1 arrives a full interval after the initial render.
    ticker.tick().await;

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                world.step();
                info!(
                    generation = world.generation(),
                    population = world.population(),
                    "stepped"
                );
                print!("{world}");

                if world.is_extinct() {
                    info!(generation = world.generation(), "world is extinct, stopping");
                    break;
                }
                if let Some(max_generations) = config.max_generations {
                    if world.generation() >= max_generations {
                        info!(generation = world.generation(), "generation limit reached, stopping");
                        break;
                    }
                }
            }
            _ = signal::ctrl_c() => {
                info!("shutdown signal received");
                break;
            }
        }
    }

    Ok(())
}
