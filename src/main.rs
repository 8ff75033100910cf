use atty::Stream;
use cpu_time::ProcessTime;
use std::{
    fs::File,
    io::{prelude::*, BufWriter},
    time::{Duration, Instant},
};

mod cli;
mod gen;
mod nombres;

use cli::get_cli;
use gen::{write_insert, BatchParams};

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {}", &err);
        std::process::exit(1);
    }
}

fn secs(d: Duration) -> f64 {
    (d.as_secs() as f64) + (d.subsec_nanos() as f64 / 1_000_000_000.0)
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let start_f = Instant::now();
    let startcpu = ProcessTime::now();

    let cfg = get_cli()?;
    let params = BatchParams::default_batch();

    if cfg.verbose >= 1 {
        eprintln!("batch: {} names, solicitud_id {}, cedulas from {}", nombres::NOMBRES.len(), params.solicitud_id, params.cedula_inicial);
    }

    let mut writer: Box<dyn Write> = match &cfg.output {
        Some(path) => {
            let f = match File::create(path) {
                Ok(f) => f,
                Err(err) => Err(format!("unable to create output file \"{}\", cause: {}", path.display(), err))?,
            };
            if cfg.verbose >= 1 {
                eprintln!("writing to file: {}", path.display());
            }
            Box::new(BufWriter::new(f))
        }
        None => {
            if cfg.verbose >= 1 && atty::is(Stream::Stdout) {
                eprintln!("writing to terminal, use -o or a pipe to keep the statement");
            }
            Box::new(BufWriter::new(std::io::stdout()))
        }
    };

    let bytes = write_insert(&mut writer, &nombres::NOMBRES, &params, cfg.quoting())?;
    writer.flush()?;

    if cfg.verbose > 1 {
        eprintln!("flushed {} bytes", bytes);
    }

    if cfg.stats {
        eprintln!(
            "records: {}  bytes: {}  runtime(sec): {:.3}  cpu(sec): {:.3}",
            nombres::NOMBRES.len(),
            bytes,
            secs(start_f.elapsed()),
            secs(startcpu.elapsed())
        );
    }
    Ok(())
}
