//! Command-line argument parsing.

use std::path::PathBuf;

use clap::Parser;

use crate::params::WorldParams;

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "TerraForge")]
#[command(about = "Procedural island terrain with rain and tide simulation", long_about = None)]
pub struct Args {
    /// Terrain noise seed
    #[arg(long, default_value = "1337")]
    pub seed: u64,

    /// Grid resolution (elevation samples per side)
    #[arg(long, default_value = "128")]
    pub resolution: usize,

    /// Number of rain drops in the pool
    #[arg(long, default_value = "4000")]
    pub rain_count: usize,

    /// Simulation ticks to run at 60 Hz
    #[arg(long, default_value = "240")]
    pub ticks: u32,

    /// Write a grayscale heightmap preview to this PNG path
    #[arg(long, value_name = "PATH")]
    pub preview: Option<PathBuf>,
}

impl Args {
    /// Fold the overrides into the default world parameters. The
    /// weather RNG keeps its own seed so terrain and rain stay
    /// independently deterministic.
    pub fn world_params(&self) -> WorldParams {
        let mut params = WorldParams::default();
        params.terrain.noise_seed = self.seed;
        params.terrain.resolution = self.resolution;
        params.weather.drop_count = self.rain_count;
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_map_to_world_params() {
        let args = Args::parse_from(["terraforge"]);
        let params = args.world_params();
        assert_eq!(params.terrain.noise_seed, 1337);
        assert_eq!(params.terrain.resolution, 128);
        assert_eq!(params.weather.drop_count, 4000);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_overrides_apply() {
        let args = Args::parse_from([
            "terraforge",
            "--seed",
            "7",
            "--resolution",
            "64",
            "--rain-count",
            "500",
        ]);
        let params = args.world_params();
        assert_eq!(params.terrain.noise_seed, 7);
        assert_eq!(params.terrain.resolution, 64);
        assert_eq!(params.weather.drop_count, 500);
    }
}
