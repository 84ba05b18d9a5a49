use std::path::PathBuf;
use clap::{Parser, Subcommand};
use crate::logging::LogConfig;

#[derive(Parser, Debug)]
#[command(name = "leetlog")]
#[command(version, about = "Track coding-interview practice and get your next problem")]
pub struct Cli {
    /// Directory holding problems.json, solved.json, history.json and config.json
    #[arg(long, global = true, env = "LEETLOG_DATA_DIR", default_value = "data")]
    pub data_dir: PathBuf,

    /// Show debug logs on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Store your Gemini API key and create the data files
    Init,

    /// Ask the model for your next problem based on recent activity
    Suggest {
        /// Log each prompt and the raw suggestions
        #[arg(long)]
        debug: bool,
    },

    /// Pick a random problem from the catalog
    Random {
        /// Filter by difficulty: Easy|Medium|Hard
        #[arg(long)]
        difficulty: Option<String>,
        /// Filter by topic (case-insensitive)
        #[arg(long)]
        topic: Option<String>,
    },

    /// Mark a problem as solved
    Done {
        /// Problem id, e.g. 1 for Two Sum
        problem_id: String,
    },

    /// Show solving stats and streaks
    Stats,

    /// Show previously suggested problems (default 1, max 10)
    Prev {
        #[arg(allow_hyphen_values = true)]
        n: Option<String>,
    },
}

impl Cli {
    pub fn log_config(&self) -> LogConfig {
        let debug = self.verbose || matches!(self.command, Commands::Suggest { debug: true });
        LogConfig::from_flags(debug)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_random_filters() {
        let args = ["leetlog", "random", "--difficulty", "easy", "--topic", "Array"];
        let cli = Cli::try_parse_from(args).unwrap();
        assert_eq!(
            cli.command,
            Commands::Random { difficulty: Some("easy".into()), topic: Some("Array".into()) }
        );
        assert_eq!(cli.data_dir, PathBuf::from("data"));
    }

    #[test]
    fn test_prev_accepts_negative_input() {
        let cli = Cli::try_parse_from(["leetlog", "prev", "-3"]).unwrap();
        assert_eq!(cli.command, Commands::Prev { n: Some("-3".into()) });
    }

    #[test]
    fn test_suggest_debug_raises_log_level() {
        let cli = Cli::try_parse_from(["leetlog", "suggest", "--debug"]).unwrap();
        assert_eq!(cli.log_config(), LogConfig::debug());
        let cli = Cli::try_parse_from(["leetlog", "stats"]).unwrap();
        assert_eq!(cli.log_config(), LogConfig::production());
    }

    #[test]
    fn test_done_requires_id() {
        assert!(Cli::try_parse_from(["leetlog", "done"]).is_err());
    }
}
