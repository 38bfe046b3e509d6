use clap::Parser;
use securefiles::cli::{Cli, Commands};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Signup {
            ref username,
            ref question,
            ref answer,
        } => securefiles::cli::commands::signup::execute(
            &cli,
            username.as_deref(),
            question.as_deref(),
            answer.as_deref(),
        ),
        Commands::Login => securefiles::cli::commands::login::execute(&cli),
        Commands::ResetPassword { ref answer } => {
            securefiles::cli::commands::reset_password::execute(&cli, answer.as_deref())
        }
        Commands::Profile {
            ref username,
            ref question,
            ref answer,
            change_password,
        } => securefiles::cli::commands::profile::execute(
            &cli,
            username.as_deref(),
            question.as_deref(),
            answer.as_deref(),
            change_password,
        ),
        Commands::List { json } => securefiles::cli::commands::list::execute(&cli, json),
        Commands::Encrypt { ref files } => securefiles::cli::commands::encrypt::execute(&cli, files),
        Commands::Decrypt { ref names } => securefiles::cli::commands::decrypt::execute(&cli, names),
        Commands::Delete { ref name, force } => {
            securefiles::cli::commands::delete::execute(&cli, name, force)
        }
        Commands::Rename {
            ref name,
            ref new_name,
        } => securefiles::cli::commands::rename::execute(&cli, name, new_name),
        Commands::Move { ref name, ref dir } => {
            securefiles::cli::commands::move_cmd::execute(&cli, name, dir)
        }
        Commands::Serve { ref file, port } => securefiles::cli::commands::serve::execute(file, port),
        Commands::Fetch {
            ref address,
            ref dest,
            port,
        } => securefiles::cli::commands::fetch::execute(address, dest, port),
        Commands::Version => securefiles::cli::commands::version::execute(),
        Commands::Completions { shell } => securefiles::cli::commands::completions::execute(shell),
    };

    if let Err(e) = result {
        securefiles::cli::output::error(&e.to_string());
        std::process::exit(1);
    }
}

/// Send `tracing` events to stderr.  `RUST_LOG` wins over `--verbose`.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}
