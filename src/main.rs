mod app;
mod config;
mod data;
mod error;
mod logging;
mod processing;

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use app::PlotOptions;
use config::Args;
use data::loader;
use data::table::FrequencyTable;
use error::Error;
use processing::statistics::Summary;

fn main() -> ExitCode {
    logging::init_logging();
    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", error::chain(&e));
            ExitCode::FAILURE
        }
    }
}

/// A loaded and summarized export, ready to plot.
struct Reported {
    path: PathBuf,
    table: FrequencyTable,
    summary: Summary,
}

fn run(args: &Args) -> Result<(), Error> {
    let reported = {
        let mut stdout = std::io::stdout().lock();
        report(args, &mut stdout)?
    };

    let Some(Reported { path, table, summary }) = reported else {
        return Ok(());
    };
    if args.no_plot {
        return Ok(());
    }

    app::show(
        &table,
        summary,
        PlotOptions {
            title: args.title(),
            source: path,
        },
    )?;
    Ok(())
}

/// Load and summarize the export, then write the report to `out`.
///
/// Nothing reaches `out` unless both steps succeed. Returns `None` when only
/// the export query was asked for.
fn report(args: &Args, out: &mut impl Write) -> Result<Option<Reported>, Error> {
    if let Some(corpus) = args.print_query {
        writeln!(out, "{}", corpus.export_query())?;
        return Ok(None);
    }

    let path = args.export_path();
    let table = loader::load_frequency_table(&path, args.delimiter)?;

    let summary = Summary::compute(&table)?;
    tracing::debug!(
        "{} counts, min {}, max {}",
        summary.count,
        summary.min,
        summary.max
    );

    write!(out, "{}", summary.report())?;
    out.flush()?;

    Ok(Some(Reported {
        path,
        table,
        summary,
    }))
}
