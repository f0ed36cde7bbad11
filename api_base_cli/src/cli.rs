use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "api-base",
    version,
    about = "Resolve the API base URL and join paths onto it"
)]
pub(crate) struct Args {
    /// Paths to join onto the base URL. Prints the base URL when empty.
    pub(crate) paths: Vec<String>,
    /// Load variables from this dotenv file instead of `./.env`.
    #[arg(short = 'e', long)]
    pub(crate) env_file: Option<PathBuf>,
    /// Use this base URL instead of the configured one.
    #[arg(short = 'b', long)]
    pub(crate) base: Option<String>,
    /// Debug logging on stderr, on top of any `RUST_LOG` filter.
    #[arg(short = 'v', long)]
    pub(crate) verbose: bool,
    /// Print JSON instead of one URL per line.
    #[arg(long)]
    pub(crate) json: bool,
    /// Fail if any printed URL does not parse.
    #[arg(long)]
    pub(crate) check: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_flags_and_paths() {
        let args = Args::try_parse_from([
            "api-base", "-e", "dev.env", "--base", "http://b.test", "-v", "--json", "users", "/x",
        ])
        .unwrap();
        assert_eq!(args.env_file, Some(PathBuf::from("dev.env")));
        assert_eq!(args.base.as_deref(), Some("http://b.test"));
        assert!(args.verbose);
        assert!(args.json);
        assert!(!args.check);
        assert_eq!(args.paths, vec!["users", "/x"]);
    }

    #[test]
    fn no_arguments_is_valid() {
        let args = Args::try_parse_from(["api-base"]).unwrap();
        assert!(args.paths.is_empty());
        assert!(args.env_file.is_none());
    }
}
