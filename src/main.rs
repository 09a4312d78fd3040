//! `license-vectorizer`: identify project licenses against a reference
//! database, and build such databases.
//!
//! Exit status: `0` on success, `1` on runtime failures such as an unreadable
//! database, `2` on configuration errors.

mod cli;

use std::{
    fs::File,
    io::{self, BufReader, Write},
    path::{Path, PathBuf},
    sync::Arc,
};

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, warn};

use cli::{BuildArgs, Cli, Command, IdentifyArgs};
use license_vectorizer::{open_project, Algorithm, Config, Database, Error, Identifier, License, Vectorizer};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    if let Err(err) = run() {
        eprintln!("Error: {:#}", err);
        std::process::exit(exit_status(&err));
    }
}

fn exit_status(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<Error>() {
        Some(e) if e.is_config() => 2,
        _ => 1,
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Command::Identify(args) => identify(args),
        Command::Build(args) => build(args),
        Command::Algorithms => {
            let mut out = io::stdout().lock();
            for name in Algorithm::AVAILABLE {
                writeln!(out, "{}", name)?;
            }
            Ok(())
        }
    }
}

/// Config file first, then flags on top.
fn resolve_config(args: &IdentifyArgs) -> Result<Config> {
    let mut config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    if let Some(algorithm) = &args.algorithm {
        config.algorithm = algorithm.clone();
    }
    if let Some(threshold) = args.threshold {
        config.threshold = threshold;
    }
    if let Some(database) = &args.database {
        config.database = Some(database.clone());
    }
    Ok(config)
}

fn identify(args: IdentifyArgs) -> Result<()> {
    let config = resolve_config(&args)?;
    let algorithm = config.validate()?;
    let db_path = config.database.as_ref().ok_or_else(|| {
        Error::Config("no database given, use --database or set database in the config file".to_string())
    })?;
    let database = Arc::new(Database::load(db_path)?);
    let identifier = Identifier::new(algorithm, config.threshold, database)?;

    report(&mut io::stdout().lock(), &identifier, &args.projects)?;
    Ok(())
}

/// Print `<base>/<id>` and its matches for every license file of every
/// project. Unreadable projects and files are logged and skipped.
fn report(out: &mut impl Write, identifier: &Identifier, projects: &[PathBuf]) -> io::Result<()> {
    for path in projects {
        let mut project = match open_project(path) {
            Ok(project) => project,
            Err(e) => {
                warn!("{}", e);
                continue;
            }
        };
        let results = identifier.identify_project(project.as_mut());
        if results.is_empty() {
            writeln!(out, "{}: license file not found", path.display())?;
            continue;
        }
        for (id, result) in results {
            // failures were already logged by identify_project
            if let Ok(matches) = result {
                writeln!(out, "{}", project.base_path().join(&id).display())?;
                for found in &matches {
                    writeln!(out, "\t{}", found)?;
                }
            }
        }
    }
    Ok(())
}

fn build(args: BuildArgs) -> Result<()> {
    let names: Vec<String> = if args.algorithms.is_empty() {
        Algorithm::AVAILABLE.iter().map(|s| s.to_string()).collect()
    } else {
        args.algorithms.clone()
    };
    let algorithms = names
        .iter()
        .map(|name| name.parse::<Algorithm>())
        .collect::<license_vectorizer::Result<Vec<_>>>()?;

    let mut db = Database::new();
    for path in &args.licenses {
        let name = license_name(path);
        let mut built = 0;
        for algorithm in &algorithms {
            match vectorize_file(algorithm, path, &name) {
                Ok(license) => {
                    db.put(&algorithm.name(), license);
                    built += 1;
                }
                Err(e) => warn!("{}: {} skipped, {:#}", name, algorithm, e),
            }
        }
        info!("{}: vectorized for {} algorithms", name, built);
    }

    let db = match &args.merge {
        Some(store) => {
            let mut existing = Database::load(store)?;
            existing.merge(&db);
            existing
        }
        None => db,
    };
    db.save(&args.dest)?;
    info!("{}: {} algorithms written", args.dest.display(), db.len());
    Ok(())
}

fn vectorize_file(algorithm: &Algorithm, path: &Path, name: &str) -> Result<License> {
    let file = File::open(path).with_context(|| format!("{}: cannot open", path.display()))?;
    let license = algorithm
        .parse(&mut BufReader::new(file), name)
        .map_err(|source| Error::Parse {
            name: path.display().to_string(),
            source,
        })?;
    Ok(license)
}

fn license_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
