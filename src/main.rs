use anyhow::Result;
use clap::error::ErrorKind;
use clap::{ArgAction, Parser};
use craigslister::common_scraper;
use craigslister::error::ConfigError;
use craigslister::models::SearchOptions;
use craigslister::tui::StatusReporter;
use craigslister::{utils, verbose};
use std::path::PathBuf;
use std::process;

const USAGE: &str = "usage: craigslister [--nopics] [--minprice <min>] [--maxprice <max>]
                    < --query <query> | --queryfile <file> >
                    [--historyfile <file>]

You must specify either --query <query> or --queryfile <file>.

";

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Craigslister - Downloads furniture listings from Craigslist",
    disable_help_flag = true
)]
struct Args {
    /// Include listings without pictures
    #[arg(short = 'p', long)]
    nopics: bool,

    /// Minimum asking price
    #[arg(short = 'n', long, default_value = "min")]
    minprice: String,

    /// Maximum asking price
    #[arg(short = 'x', long, default_value = "max")]
    maxprice: String,

    /// Search text
    #[arg(short, long)]
    query: Option<String>,

    /// File whose first non-blank line is the search text
    #[arg(short = 'f', long)]
    queryfile: Option<PathBuf>,

    /// Accepted for compatibility, not used
    #[arg(short = 'h', long)]
    historyfile: Option<PathBuf>,

    /// Read the results page from this file instead of downloading it
    #[arg(short, long)]
    debug: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Print help
    #[arg(long, action = ArgAction::Help)]
    help: Option<bool>,
}

impl Args {
    fn into_options(self) -> Result<SearchOptions, ConfigError> {
        let query = utils::resolve_query(self.query, self.queryfile.as_deref())?;

        Ok(SearchOptions {
            query,
            min_price: self.minprice,
            max_price: self.maxprice,
            exclude_no_picture: !self.nopics,
            debug_file_path: self.debug,
        })
    }
}

fn main() -> Result<()> {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
            _ => {
                let _ = e.print();
                process::exit(1);
            }
        },
    };

    verbose::set_verbose(args.verbose);

    if let Some(history) = &args.historyfile {
        verbose::note_ignored_history_file(history);
    }

    let options = match args.into_options() {
        Ok(options) => options,
        Err(e) => {
            if !matches!(e, ConfigError::MissingQuery) {
                eprintln!("{}", e);
            }
            print!("{}", USAGE);
            process::exit(1);
        }
    };

    let source = common_scraper::source_for(&options)?;
    let mut reporter = StatusReporter::stderr();
    let result = common_scraper::run_search(source.as_ref(), &mut reporter)?;

    for listing in &result.listings {
        println!("{}", listing);
        println!();
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Result<Args, clap::Error> {
        Args::try_parse_from(std::iter::once("craigslister").chain(argv.iter().copied()))
    }

    #[test]
    fn short_flags_fill_the_search() {
        let options = parse(&["-q", "couch", "-n", "100", "-x", "200", "-p", "-d", "page.html"])
            .unwrap()
            .into_options()
            .unwrap();

        assert_eq!(options.query, "couch");
        assert_eq!(options.min_price, "100");
        assert_eq!(options.max_price, "200");
        assert!(!options.exclude_no_picture);
        assert_eq!(options.debug_file_path, Some(PathBuf::from("page.html")));
    }

    #[test]
    fn long_flags_and_defaults() {
        let options = parse(&["--query", "dresser"]).unwrap().into_options().unwrap();

        assert_eq!(options.query, "dresser");
        assert_eq!(options.min_price, "min");
        assert_eq!(options.max_price, "max");
        assert!(options.exclude_no_picture);
        assert!(options.debug_file_path.is_none());
    }

    #[test]
    fn short_h_is_history_file_not_help() {
        let args = parse(&["-h", "seen.txt", "-q", "lamp"]).unwrap();
        assert_eq!(args.historyfile, Some(PathBuf::from("seen.txt")));
    }

    #[test]
    fn missing_query_is_a_configuration_error() {
        let err = parse(&["--minprice", "10"]).unwrap().into_options().unwrap_err();
        assert!(matches!(err, ConfigError::MissingQuery));
    }

    #[test]
    fn flag_without_its_argument_is_rejected_by_the_parser() {
        let err = parse(&["--query"]).unwrap_err();
        assert!(!matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion));
    }

    #[test]
    fn long_help_is_still_available() {
        let err = parse(&["--help"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
    }
}
