extern crate nalgebra as na;
mod config;
mod export;
mod materials;
mod objects;
mod scenes;
mod types;

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use config::GeneratorConfig;
use rand::rngs::StdRng;
use rand::SeedableRng;
use scenes::{random_spheres::RandomSpheres, Scene};

/// Stdout carries the listing; stderr stays quiet unless `RUST_LOG` asks for more.
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Warn;

/// Emits a random sphere scene as a C-style initializer list.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// TOML file with generator settings
    #[arg(long)]
    config: Option<PathBuf>,

    /// Grid half-width; cells span [-W, W) on both axes
    #[arg(long)]
    half_width: Option<i32>,

    /// Seed for a reproducible listing
    #[arg(long)]
    seed: Option<u64>,

    /// Output file (defaults to stdout)
    #[arg(long, short)]
    output: Option<PathBuf>,
}

fn load_config(args: &Args) -> anyhow::Result<GeneratorConfig> {
    let mut config = match &args.config {
        Some(path) => {
            log::info!("Reading config from {}", path.display());
            let text = fs::read_to_string(path)
                .with_context(|| format!("failed to read config {}", path.display()))?;
            GeneratorConfig::from_toml(&text)
                .with_context(|| format!("failed to parse config {}", path.display()))?
        }
        None => GeneratorConfig::default(),
    };

    if let Some(half_width) = args.half_width {
        config.half_width = half_width;
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }

    config.validate()?;
    Ok(config)
}

fn build_rng(config: &GeneratorConfig) -> StdRng {
    match config.seed {
        Some(seed) => {
            log::info!("Seeding generator with {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(DEFAULT_LOG_LEVEL)
        .parse_default_env()
        .init();

    let args = Args::parse();
    let config = load_config(&args)?;

    let mut rng = build_rng(&config);

    let scene = RandomSpheres::new(config.half_width);
    log::debug!(
        "Generating over {} candidate cells (half width {})",
        scene.candidates(),
        scene.half_width()
    );

    let mut out: Box<dyn Write> = match &args.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            Box::new(BufWriter::new(file))
        }
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };

    let count = export::write_scene(&mut out, &config.array_name, scene.spheres(&mut rng))
        .and_then(|count| out.flush().map(|_| count))
        .context("failed to write scene listing")?;

    log::info!(
        "Done. Wrote {} spheres ({} from the grid)",
        count,
        count - RandomSpheres::FIXED_SPHERES
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_config(name: &str, text: &str) -> PathBuf {
        let file = format!("scenegen-{}-{}.toml", name, std::process::id());
        let path = std::env::temp_dir().join(file);
        fs::write(&path, text).unwrap();
        path
    }

    fn listing(config: &GeneratorConfig) -> String {
        let mut rng = build_rng(config);
        let scene = RandomSpheres::new(config.half_width);
        let mut buf = Vec::new();
        export::write_scene(&mut buf, &config.array_name, scene.spheres(&mut rng)).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn info_logs_are_silent_by_default() {
        assert!(DEFAULT_LOG_LEVEL < log::LevelFilter::Info);
    }

    #[test]
    fn no_flags_gives_defaults() {
        let args = Args::try_parse_from(["scenegen"]).unwrap();
        assert_eq!(load_config(&args).unwrap(), GeneratorConfig::default());
    }

    #[test]
    fn flags_override_config_file() {
        let path = write_config("override", "half_width = 3\nseed = 5\n");
        let args = Args::try_parse_from([
            "scenegen",
            "--config",
            path.to_str().unwrap(),
            "--half-width",
            "2",
        ])
        .unwrap();
        let config = load_config(&args).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(config.half_width, 2);
        assert_eq!(config.seed, Some(5));
        assert_eq!(config.array_name, "initialScene");
    }

    #[test]
    fn file_values_apply_without_flags() {
        let path = write_config("file-only", "half_width = 4\narray_name = \"scene\"\n");
        let args = Args::try_parse_from(["scenegen", "--config", path.to_str().unwrap()]).unwrap();
        let config = load_config(&args).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(config.half_width, 4);
        assert_eq!(config.seed, None);
        assert_eq!(config.array_name, "scene");
    }

    #[test]
    fn negative_half_width_is_rejected() {
        let args = Args::try_parse_from(["scenegen", "--half-width=-1"]).unwrap();
        assert_eq!(args.half_width, Some(-1));

        let err = load_config(&args).unwrap_err();
        assert!(err.to_string().contains("half_width"), "{err}");
    }

    #[test]
    fn missing_config_file_is_an_error() {
        let args =
            Args::try_parse_from(["scenegen", "--config", "/nonexistent/scenegen.toml"]).unwrap();
        assert!(load_config(&args).is_err());
    }

    #[test]
    fn seeded_runs_are_reproducible() {
        let seeded = |seed: &str| {
            let args = Args::try_parse_from(["scenegen", "--seed", seed, "--half-width", "3"]).unwrap();
            load_config(&args).unwrap()
        };
        let config = seeded("42");
        assert_eq!(config.seed, Some(42));

        let first = listing(&config);
        let second = listing(&config);
        assert_eq!(first.as_bytes(), second.as_bytes());

        assert_ne!(first, listing(&seeded("43")));
    }
}
