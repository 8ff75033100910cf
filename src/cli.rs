use std::path::{Path, PathBuf};
use std::sync::Arc;

use structopt::StructOpt;

use crate::gen::NameQuoting;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

#[derive(StructOpt, Debug, Clone)]
#[structopt(
global_settings(& [structopt::clap::AppSettings::ColoredHelp, structopt::clap::AppSettings::DeriveDisplayOrder]),
name = "gen_colaboradores",
)]
/// Writes a SQL INSERT of 100 synthetic rows for the colaboradores table.
pub struct CliCfg {
    #[structopt(short = "o", long = "output", name = "output", parse(from_os_str))]
    /// Write the statement to this file instead of stdout
    pub output: Option<PathBuf>,

    #[structopt(long = "escape_quotes")]
    /// Double single quotes found inside names
    ///
    /// Off by default so the statement matches the historical output byte for byte.
    /// A name like O'Neil breaks the SQL unless this is on.
    pub escape_quotes: bool,

    #[structopt(long = "stats")]
    /// Write stats after generating
    pub stats: bool,

    #[structopt(short = "v", parse(from_occurrences))]
    /// Verbosity - use more than one v for greater detail
    pub verbose: usize,

    #[structopt(short = "E", long = "print_examples")]
    /// Print a few usage examples
    pub print_examples: bool,
}

impl CliCfg {
    pub fn quoting(&self) -> NameQuoting {
        if self.escape_quotes { NameQuoting::Escaped } else { NameQuoting::Verbatim }
    }
}

fn print_examples() {
    println!("{}",
             r#"
    Here are a few examples for quick reference

    gen_colaboradores                        # statement to stdout
    gen_colaboradores | psql mydb            # run it straight into a database
    gen_colaboradores -o colaboradores.sql   # statement to a file
    gen_colaboradores --stats -o seed.sql    # also report rows, bytes and timing on stderr
    gen_colaboradores --escape_quotes        # make names with ' safe inside the literals
    "#);
}

fn check_output_path(path: &Path) -> Result<()> {
    if path.is_dir() {
        Err(format!("output path \"{}\" is a directory", path.display()))?
    }
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.is_dir() {
            Err(format!("directory for output file \"{}\" does not exist", path.display()))?
        }
    }
    Ok(())
}

pub fn get_cli() -> Result<Arc<CliCfg>> {
    let cfg = Arc::new({
        let cfg: CliCfg = CliCfg::from_args();
        if cfg.print_examples {
            print_examples();
            std::process::exit(0);
        }
        if let Some(path) = &cfg.output {
            check_output_path(path)?;
        }
        if cfg.verbose == 1 {
            eprintln!("CLI options: {:?}", cfg);
        } else if cfg.verbose > 1 {
            eprintln!("CLI options: {:#?}", cfg);
        }
        cfg
    });

    Ok(cfg)
}

#[test]
fn test_cli_defaults() {
    let cfg = CliCfg::from_iter(&["gen_colaboradores"]);
    assert!(cfg.output.is_none());
    assert!(!cfg.stats);
    assert_eq!(cfg.verbose, 0);
    assert_eq!(cfg.quoting(), NameQuoting::Verbatim);
}

#[test]
fn test_cli_flags() {
    let cfg = CliCfg::from_iter(&["gen_colaboradores", "-vv", "--escape_quotes", "--stats", "-o", "seed.sql"]);
    assert_eq!(cfg.verbose, 2);
    assert!(cfg.stats);
    assert_eq!(cfg.quoting(), NameQuoting::Escaped);
    assert_eq!(cfg.output, Some(PathBuf::from("seed.sql")));
}

#[test]
fn test_check_output_path() {
    let dir = std::env::temp_dir();
    assert!(check_output_path(&dir).is_err());
    assert!(check_output_path(&dir.join("seed.sql")).is_ok());
    assert!(check_output_path(&dir.join("no_such_dir_for_seed").join("seed.sql")).is_err());
    assert!(check_output_path(Path::new("seed.sql")).is_ok());
}
