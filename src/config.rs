use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Plot a headword frequency export on a log scale and print its median and mean.
#[derive(Debug, Parser)]
#[command(name = "headword-plot", version)]
pub struct Args {
    /// Delimited export with `entry_name` and `total_count` columns.
    /// Defaults to ~/tmp/out.csv.
    pub path: Option<PathBuf>,

    /// Field delimiter of the export.
    #[arg(short, long, default_value = "|", value_parser = parse_delimiter)]
    pub delimiter: u8,

    /// Corpus the export was taken from; used to title the plot.
    #[arg(long, value_enum)]
    pub corpus: Option<Corpus>,

    /// Print the psql command that produces the export for a corpus, then exit.
    #[arg(long, value_enum, value_name = "CORPUS")]
    pub print_query: Option<Corpus>,

    /// Print the statistics without opening the plot window.
    #[arg(long)]
    pub no_plot: bool,
}

impl Args {
    pub fn export_path(&self) -> PathBuf {
        self.path.clone().unwrap_or_else(default_export_path)
    }

    pub fn title(&self) -> String {
        match self.corpus {
            Some(corpus) => format!("{} headword frequencies", corpus.label()),
            None => "Headword frequencies".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Corpus {
    Latin,
    Greek,
}

impl Corpus {
    pub fn label(&self) -> &'static str {
        match self {
            Corpus::Latin => "Latin",
            Corpus::Greek => "Greek",
        }
    }

    /// The manual `psql` export for this corpus, ordered by count descending.
    pub fn export_query(&self) -> String {
        let predicate = match self {
            Corpus::Latin => "lt_count > 0 and entry_name ~ '[a-z]'",
            Corpus::Greek => "gr_count > 0 and entry_name ~ '[^a-z]'",
        };
        format!(
            "psql -d hipparchiaDB -o ~/tmp/out.csv -F '|' -A \\\n    \
             -c \"SELECT entry_name,total_count from dictionary_headword_wordcounts \
             where {predicate} order by total_count desc\""
        )
    }
}

fn default_export_path() -> PathBuf {
    let home = std::env::var_os("HOME").map(PathBuf::from).unwrap_or_default();
    home.join("tmp").join("out.csv")
}

fn parse_delimiter(value: &str) -> Result<u8, String> {
    match value.as_bytes() {
        [b] if b.is_ascii() => Ok(*b),
        _ => Err(format!("delimiter must be a single ASCII character, got {value:?}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_fixed_export() {
        let args = Args::try_parse_from(["headword-plot"]).unwrap();

        assert_eq!(args.delimiter, b'|');
        assert!(args.export_path().ends_with("tmp/out.csv"));
        assert!(args.print_query.is_none());
        assert!(!args.no_plot);
        assert_eq!(args.title(), "Headword frequencies");
    }

    #[test]
    fn explicit_path_and_delimiter() {
        let args =
            Args::try_parse_from(["headword-plot", "-d", ",", "counts.csv", "--corpus", "greek"])
                .unwrap();

        assert_eq!(args.export_path(), PathBuf::from("counts.csv"));
        assert_eq!(args.delimiter, b',');
        assert_eq!(args.title(), "Greek headword frequencies");
    }

    #[test]
    fn multi_character_delimiter_is_rejected() {
        assert!(Args::try_parse_from(["headword-plot", "--delimiter", "||"]).is_err());
        assert!(Args::try_parse_from(["headword-plot", "--delimiter", "ϲ"]).is_err());
    }

    #[test]
    fn export_queries_select_by_language_count() {
        let latin = Corpus::Latin.export_query();
        let greek = Corpus::Greek.export_query();

        assert!(latin.contains("where lt_count > 0"));
        assert!(greek.contains("where gr_count > 0"));
        assert!(greek.ends_with("order by total_count desc\""));
    }
}
