use anyhow::Result;
use review_sentiment::cli::{init_logging, parse_args, use_color, Commands};
use review_sentiment::commands::{handle_run, init_config, RunCommand};
use review_sentiment::observability::install_panic_hook;

fn main() -> Result<()> {
    install_panic_hook();
    let cli = parse_args();

    match cli.command {
        Commands::Run {
            input,
            output,
            summary,
            profile,
            config,
            jobs,
            no_parallel,
            format,
            plain,
            verbosity,
            quiet,
        } => {
            init_logging(verbosity, quiet);
            let command = RunCommand {
                input,
                output,
                summary,
                profile: profile.map(Into::into),
                config,
                jobs,
                no_parallel,
                format,
                color: use_color(plain),
                quiet,
            };
            let code = handle_run(command)?;
            std::process::exit(code);
        }
        Commands::Init { force } => {
            init_logging(0, false);
            init_config(force)
        }
    }
}
