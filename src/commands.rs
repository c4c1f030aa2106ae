//! Command drivers
//!
//! Each command builds a full trajectory, rejects it when empty, then hands it
//! to a [`ChunkEmitter`]. The pipeline itself is synchronous; [`run`] executes
//! it on a blocking thread while the progress ticker runs.

use crate::cli::{Cli, Commands};
use crate::progress::ProgressIndicator;
use anyhow::Context;
use kukakit_core::{E6Pos, Result, TrajectoryError};
use kukakit_krl::{ChunkEmitter, DatRenderer, EmitReport, KrlRenderer, SrcRenderer};
use kukakit_pathgen::{
    FieldPolicy, RandomCircleGenerator, RepeatCircleGenerator, TableParser,
};
use kukakit_settings::Config;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Parse the configuration, run the selected command and log the written files
pub async fn run(cli: Cli) -> anyhow::Result<EmitReport> {
    let mut config = Config::load_or_default(cli.config.as_deref())
        .context("Failed to load configuration")?;
    if let Some(dir) = cli.output_dir {
        config.output.directory = dir;
    }

    let mut progress = ProgressIndicator::new(Duration::from_millis(config.progress.interval_ms));
    if config.progress.enabled && !cli.quiet {
        progress.start();
    }

    let command = cli.command;
    let pipeline = tokio::task::spawn_blocking(move || execute(&config, &command)).await;
    progress.stop().await;

    let report = pipeline.context("Generation task failed")??;
    for file in &report.files {
        tracing::info!("Wrote {}", file.display());
    }
    Ok(report)
}

/// Run one command synchronously
pub fn execute(config: &Config, command: &Commands) -> anyhow::Result<EmitReport> {
    match command {
        Commands::Random {
            count,
            max_points,
            seed,
        } => random_circles(config, *count, *max_points, *seed)
            .context("Failed to generate random circles"),
        Commands::Repeat { count } => {
            repeat_circle(config, *count).context("Failed to generate repeated circle")
        }
        Commands::Csv {
            file,
            max_points,
            lenient,
        } => convert_table(config, file, *max_points, *lenient)
            .with_context(|| format!("Failed to convert {}", file.display())),
    }
}

/// Random circles, chunked into blocks of at most `max_points`
pub fn random_circles(
    config: &Config,
    count: Option<usize>,
    max_points: Option<usize>,
    seed: Option<u64>,
) -> Result<EmitReport> {
    let params = config.random.to_parameters(count, seed);
    tracing::info!("Generating {} random circle(s)", params.count);

    let points = RandomCircleGenerator::new(params)?.generate()?;
    ensure_points(&points)?;

    let emitter = emitter(config, &config.output.random_prefix, 1);
    Ok(emitter.emit(&points, max_points.unwrap_or(config.output.max_points))?)
}

/// One circle declared once and traversed `count` times
pub fn repeat_circle(config: &Config, count: Option<usize>) -> Result<EmitReport> {
    let params = config.circle.to_parameters(count);
    tracing::info!(
        "Generating circle r={} traversed {} time(s)",
        params.circle.radius,
        params.count
    );

    let path = RepeatCircleGenerator::new(params)?.generate()?;
    if path.passes == 0 {
        return Err(TrajectoryError::EmptyTrajectory.into());
    }
    ensure_points(&path.points)?;

    let emitter = emitter(config, &config.output.repeat_prefix, path.passes);
    Ok(emitter.emit(&path.points, 0)?)
}

/// Import a point table, chunked into blocks of at most `max_points`
pub fn convert_table(
    config: &Config,
    file: &Path,
    max_points: Option<usize>,
    lenient: bool,
) -> Result<EmitReport> {
    let policy = if lenient {
        FieldPolicy::Lenient
    } else {
        FieldPolicy::Strict
    };
    tracing::info!("Reading point table {}", file.display());

    let points = TableParser::new(policy).parse_file(file)?;
    ensure_points(&points)?;

    let emitter = emitter(config, &config.output.table_prefix, 1);
    Ok(emitter.emit(&points, max_points.unwrap_or(config.output.max_points))?)
}

fn ensure_points(points: &[E6Pos]) -> Result<()> {
    if points.is_empty() {
        return Err(TrajectoryError::EmptyTrajectory.into());
    }
    Ok(())
}

fn emitter(config: &Config, prefix: &str, passes: usize) -> ChunkEmitter {
    let renderers: Vec<Box<dyn KrlRenderer>> = vec![
        Box::new(DatRenderer::new(config.output.fold_every)),
        Box::new(SrcRenderer::with_passes(passes)),
    ];
    ChunkEmitter::with_renderers(
        PathBuf::from(&config.output.directory),
        prefix,
        renderers,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use kukakit_core::{Error, TableError};
    use std::fs;

    fn config_for(dir: &Path) -> Config {
        let mut config = Config::default();
        config.output.directory = dir.to_path_buf();
        config.progress.enabled = false;
        config
    }

    #[test]
    fn test_random_command_is_reproducible_with_seed() {
        let first = tempfile::tempdir().unwrap();
        let second = tempfile::tempdir().unwrap();

        let a = random_circles(&config_for(first.path()), Some(3), Some(50), Some(42)).unwrap();
        let b = random_circles(&config_for(second.path()), Some(3), Some(50), Some(42)).unwrap();

        // 3 circles of 63 points in blocks of 50
        assert_eq!(a.chunks, 4);
        assert_eq!(a.files.len(), 8);
        for name in ["randomCircleSpline0.dat", "randomCircleSpline3.src"] {
            let left = fs::read_to_string(first.path().join(name)).unwrap();
            let right = fs::read_to_string(second.path().join(name)).unwrap();
            assert_eq!(left, right);
        }
        assert_eq!(b.chunks, 4);

        let last = fs::read_to_string(first.path().join("randomCircleSpline3.dat")).unwrap();
        assert!(last.contains("DECL E6POS XP189="));
        assert!(last.contains("S 2,T 43"));
    }

    #[test]
    fn test_repeat_command_declares_once_and_traverses_n_times() {
        let dir = tempfile::tempdir().unwrap();
        let report = repeat_circle(&config_for(dir.path()), Some(4)).unwrap();
        assert_eq!(report.chunks, 1);

        let dat = fs::read_to_string(dir.path().join("repeatCircleSpline0.dat")).unwrap();
        assert_eq!(dat.matches("DECL E6POS").count(), 63);

        let src = fs::read_to_string(dir.path().join("repeatCircleSpline0.src")).unwrap();
        assert_eq!(src.matches("ENDSPLINE").count(), 4);
        assert_eq!(src.matches("SPL XP63\n").count(), 4);
    }

    #[test]
    fn test_repeat_with_zero_passes_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let err = repeat_circle(&config_for(dir.path()), Some(0)).unwrap_err();
        assert!(matches!(
            err,
            Error::Trajectory(TrajectoryError::EmptyTrajectory)
        ));
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_csv_command_chunks_table() {
        let dir = tempfile::tempdir().unwrap();
        let table = dir.path().join("points.csv");
        fs::write(
            &table,
            "1.0,44.9624,8.7501,1119.9937,9.2796,0.0,0.0,1.0\n\
             2.0,45.0,8.8,1120.0,9.3,0.0,0.0,0.0\n\
             3.0,45.1,8.9,1120.1,9.3,0.0,0.0,0.0\n",
        )
        .unwrap();

        let out = dir.path().join("out");
        let report = convert_table(&config_for(&out), &table, Some(2), false).unwrap();
        assert_eq!(report.chunks, 2);

        let dat = fs::read_to_string(out.join("fileSpline0.dat")).unwrap();
        assert!(dat.contains("DECL E6POS XP1={X 44.9624,Y 8.7501,Z 1119.9937,A 9.2796"));
        assert!(dat.contains("S 6,T 19"));
    }

    #[test]
    fn test_csv_errors_abort_before_writing() {
        let dir = tempfile::tempdir().unwrap();
        let table = dir.path().join("points.csv");
        fs::write(&table, "1.0,2.0,3.0\n").unwrap();
        let out = dir.path().join("out");

        let err = convert_table(&config_for(&out), &table, None, false).unwrap_err();
        assert!(matches!(
            err,
            Error::Table(TableError::ShortRecord { line: 1, .. })
        ));
        assert!(!out.exists());

        let empty = dir.path().join("empty.csv");
        fs::write(&empty, "").unwrap();
        let err = convert_table(&config_for(&out), &empty, None, false).unwrap_err();
        assert!(matches!(
            err,
            Error::Trajectory(TrajectoryError::EmptyTrajectory)
        ));
    }

    #[test]
    fn test_lenient_csv_accepts_bad_fields() {
        let dir = tempfile::tempdir().unwrap();
        let table = dir.path().join("points.csv");
        fs::write(&table, "1.0,abc,2.0,3.0,0.0,0.0,0.0,0.0\n").unwrap();

        let command = Commands::Csv {
            file: table.clone(),
            max_points: None,
            lenient: false,
        };
        assert!(execute(&config_for(dir.path()), &command).is_err());

        let command = Commands::Csv {
            file: table,
            max_points: None,
            lenient: true,
        };
        let report = execute(&config_for(dir.path()), &command).unwrap();
        assert_eq!(report.chunks, 1);
        let dat = fs::read_to_string(dir.path().join("fileSpline0.dat")).unwrap();
        assert!(dat.contains("DECL E6POS XP1={X 0.0000,Y 2.0000,Z 3.0000"));
    }

    #[tokio::test]
    async fn test_run_uses_config_file_and_output_override() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("kukakit.toml");
        fs::write(
            &config_path,
            "[output]\nrepeat_prefix = \"loop\"\n\n[progress]\nenabled = false\n",
        )
        .unwrap();
        let out = dir.path().join("krl");

        let cli = Cli {
            config: Some(config_path),
            output_dir: Some(out.clone()),
            quiet: true,
            verbose: 0,
            command: Commands::Repeat { count: Some(2) },
        };
        let report = run(cli).await.unwrap();

        assert_eq!(report.files, vec![out.join("loop0.dat"), out.join("loop0.src")]);
    }

    #[tokio::test]
    async fn test_run_rejects_non_finite_circle_center() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("kukakit.toml");
        fs::write(
            &config_path,
            "[circle]\ncenter = { p1 = nan, p2 = 0.0, p3 = 600.0 }\n",
        )
        .unwrap();
        let out = dir.path().join("krl");

        let cli = Cli {
            config: Some(config_path),
            output_dir: Some(out.clone()),
            quiet: true,
            verbose: 0,
            command: Commands::Repeat { count: Some(1) },
        };
        assert!(run(cli).await.is_err());
        assert!(!out.exists());
    }

    #[test]
    fn test_random_command_rejects_overflowing_count() {
        let dir = tempfile::tempdir().unwrap();
        let err = random_circles(&config_for(dir.path()), Some(usize::MAX), None, Some(1))
            .unwrap_err();
        assert!(matches!(
            err,
            Error::Trajectory(TrajectoryError::TooManyPoints { .. })
        ));
    }
}
