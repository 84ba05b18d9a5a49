pub mod done;
pub mod init;
pub mod prev;
pub mod random;
pub mod stats;
pub mod suggest;

use crate::cli::{Cli, Commands};
use crate::error::{ErrorKind, LeetError};
use crate::problems::selector::ProblemFilter;
use crate::store::{recover_reset, DataStore};

/// Run the parsed command against the data directory
pub async fn dispatch(cli: Cli) -> Result<(), LeetError> {
    let store = DataStore::new(cli.data_dir);
    tracing::debug!(data_dir = ?store.dir(), command = ?cli.command, "Dispatching command");

    match cli.command {
        Commands::Init => init::run(&store).await,
        Commands::Suggest { .. } => suggest::run(&store).await,
        Commands::Random { difficulty, topic } => {
            random::run(&store, &ProblemFilter { difficulty, topic }).await
        }
        Commands::Done { problem_id } => done::run(&store, &problem_id).await,
        Commands::Stats => stats::run(&store).await,
        Commands::Prev { n } => prev::run(&store, n.as_deref()).await,
    }
}

/// Print a chosen problem the same way for `suggest` and `random`
pub(crate) fn print_problem(heading: &str, problem: &crate::problems::problem::Problem) {
    println!("{}", heading);
    println!("{}. {} ({})", problem.id, problem.title, problem.difficulty);
    println!("Topics: {}", problem.topic_names().join(", "));
    println!("Link: {}", problem.url());
}

/// Tell the user a corrupt log was reset, then carry on with it empty
pub(crate) fn or_reset<T>(result: Result<Vec<T>, LeetError>) -> Result<Vec<T>, LeetError> {
    if let Err(e) = &result {
        if e.is(ErrorKind::CorruptData) {
            eprintln!("⚠️ {}", e.message);
        }
    }
    recover_reset(result)
}
