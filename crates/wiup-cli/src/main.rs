use wiup_core::logging;

mod cli;

#[tokio::main]
async fn main() {
    // Initialize logging as early as possible; fall back to stderr if the state dir is unusable.
    if logging::init_logging().is_err() {
        logging::init_logging_stderr();
    }

    let code = match cli::run_from_args().await {
        Ok(code) => code,
        Err(err) => {
            eprintln!("wiup error: {:#}", err);
            cli::report::EXIT_UNCLASSIFIED
        }
    };
    if code != cli::report::EXIT_OK {
        println!("exit code: {}", code);
        std::process::exit(code);
    }
}
