use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("cannot open {path:?}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot read header row")]
    Header(#[source] csv::Error),

    #[error("header has no `{column}` column")]
    MissingColumn { column: &'static str },

    #[error("cannot read record")]
    Read(#[source] csv::Error),

    #[error("line {line}: expected {expected} fields, found {found}")]
    FieldCount {
        line: u64,
        expected: usize,
        found: usize,
    },

    #[error("line {line}: malformed row")]
    Malformed {
        line: u64,
        #[source]
        source: csv::Error,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum SummaryError {
    #[error("median and mean are undefined for an empty table")]
    EmptyTable,
}

#[derive(Debug, thiserror::Error)]
pub enum PlotError {
    #[error("plot window failed")]
    Window(#[from] eframe::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to load frequency table")]
    Load(#[from] LoadError),

    #[error("failed to summarize frequency table")]
    Summary(#[from] SummaryError),

    #[error("failed to show frequency plot")]
    Plot(#[from] PlotError),

    #[error("failed to write report")]
    Output(#[from] std::io::Error),
}

/// Render an error and its sources as `outer: inner: root`.
pub fn chain(err: &dyn std::error::Error) -> String {
    let mut out = err.to_string();
    let mut source = err.source();
    while let Some(inner) = source {
        out.push_str(": ");
        out.push_str(&inner.to_string());
        source = inner.source();
    }
    out
}
