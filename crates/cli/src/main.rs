use log::{debug, error, info, warn};
use std::fmt::Display;
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::process::ExitCode;

use base::scalar::F64;
use window::RankedWindow;

use crate::args::{kind_from_str, Arguments, ValueKind};
use crate::read::{parse_line, Line, StreamValue};

mod args;
mod read;

fn answer<T: Display>(value: Option<&T>) -> String {
    match value {
        Some(value) => value.to_string(),
        None => String::from("none"),
    }
}

fn run<T: StreamValue>(
    window: &mut RankedWindow<T>,
    reader: impl BufRead,
    follow: bool,
    out: &mut impl Write,
) -> std::io::Result<()> {
    let mut accepted = 0usize;
    for (number, line) in reader.lines().enumerate() {
        let line = line?;
        match parse_line::<T>(&line) {
            Line::Blank => continue,
            Line::Malformed => {
                warn!("skipped malformed value at line {}: {line:?}", number + 1);
                continue;
            }
            Line::Value(value) => {
                if let Err(err) = window.try_update(value) {
                    warn!("skipped line {}: {err}", number + 1);
                    continue;
                }
            }
        }
        accepted += 1;
        if follow {
            writeln!(out, "{}", answer(window.query()))?;
        }
    }
    info!("read {accepted} values");
    if !follow {
        writeln!(out, "{}", answer(window.query()))?;
    }
    out.flush()
}

fn run_kind<T: StreamValue>(args: &Arguments, capacity: usize) -> std::io::Result<()> {
    let mut window = RankedWindow::<T>::new(capacity)
        .map_err(|err| std::io::Error::new(std::io::ErrorKind::InvalidInput, err))?;
    let mut out = std::io::stdout().lock();
    match &args.input {
        Some(path) => {
            let file = File::open(path)?;
            run(&mut window, BufReader::new(file), args.follow, &mut out)
        }
        None => run(&mut window, std::io::stdin().lock(), args.follow, &mut out),
    }
}

fn main() -> ExitCode {
    let args: Arguments = argh::from_env();
    let mut log_builder = env_logger::builder();
    if args.verbose {
        log_builder.filter_level(log::LevelFilter::Debug);
    } else {
        log_builder.filter_level(log::LevelFilter::Info);
    }
    log_builder.init();
    debug!("arguments: {args:#?}");

    let capacity = match args.get_window_options().and_then(|o| o.capacity()) {
        Ok(capacity) => capacity,
        Err(err) => {
            error!("{err}");
            return ExitCode::FAILURE;
        }
    };
    let Ok(kind) = kind_from_str(&args.kind) else {
        error!("unknown value kind {:?}, expected `int` or `float`", args.kind);
        return ExitCode::FAILURE;
    };
    let result = match kind {
        ValueKind::Int => run_kind::<i64>(&args, capacity),
        ValueKind::Float => run_kind::<F64>(&args, capacity),
    };
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}
