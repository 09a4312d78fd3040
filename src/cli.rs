use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Default store written by `build`.
pub const DEFAULT_DATABASE: &str = "liossdb.json";

#[derive(Parser, Debug)]
#[command(
    name = "license-vectorizer",
    about = "Identify project licenses by text similarity",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Identify the license files of each project
    Identify(IdentifyArgs),
    /// Build a reference database from license texts
    Build(BuildArgs),
    /// List the available algorithms
    Algorithms,
}

#[derive(clap::Args, Debug)]
pub struct IdentifyArgs {
    /// TOML config file; flags override its values
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Reference database; required here or in the config file
    #[arg(long, value_name = "PATH")]
    pub database: Option<PathBuf>,

    /// Algorithm, e.g. 5gram, wordfreq or tfidf [default: 5gram]
    #[arg(short, long, value_name = "ALGORITHM")]
    pub algorithm: Option<String>,

    /// Minimum probability to report, 0.0 to 1.0 [default: 0.75]
    #[arg(short, long, value_name = "THRESHOLD")]
    pub threshold: Option<f64>,

    /// Project directories, license files or .zip/.jar/.war archives
    #[arg(required = true, value_name = "PROJECT")]
    pub projects: Vec<PathBuf>,
}

#[derive(clap::Args, Debug)]
pub struct BuildArgs {
    /// Destination; .cbor selects CBOR and .gz adds gzip
    #[arg(short, long, value_name = "DEST", default_value = DEFAULT_DATABASE)]
    pub dest: PathBuf,

    /// Algorithm to build for (repeatable) [default: all]
    #[arg(short, long = "algorithm", value_name = "ALGORITHM")]
    pub algorithms: Vec<String>,

    /// Existing store to merge; its entries win on a name collision
    #[arg(long, value_name = "STORE")]
    pub merge: Option<PathBuf>,

    /// License text files; each entry is named after its file name
    #[arg(required = true, value_name = "LICENSE")]
    pub licenses: Vec<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn identify_flags() {
        let cli = Cli::try_parse_from([
            "license-vectorizer",
            "identify",
            "-a",
            "tfidf",
            "-t",
            "0.5",
            "--database",
            "db.json.gz",
            "proj1",
            "proj2.zip",
        ])
        .unwrap();
        match cli.command {
            Command::Identify(args) => {
                assert_eq!(args.algorithm.as_deref(), Some("tfidf"));
                assert_eq!(args.threshold, Some(0.5));
                assert_eq!(args.database, Some(PathBuf::from("db.json.gz")));
                assert_eq!(args.projects.len(), 2);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn build_defaults() {
        let cli = Cli::try_parse_from(["license-vectorizer", "build", "MIT", "-a", "5gram", "-a", "tfidf"]).unwrap();
        match cli.command {
            Command::Build(args) => {
                assert_eq!(args.dest, PathBuf::from(DEFAULT_DATABASE));
                assert_eq!(args.algorithms, ["5gram", "tfidf"]);
                assert!(args.merge.is_none());
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn identify_requires_a_project() {
        assert!(Cli::try_parse_from(["license-vectorizer", "identify"]).is_err());
    }
}
