//! Lacework CLI - command line companion for the Lacework API v2

use clap::Parser;

mod cli;
mod models;
mod output;

use cli::args::GlobalOptions;
use cli::{
    AccessTokenCommands, AlertCommands, Cli, Commands, ContainerVulnCommands, PolicyCommands,
    ReportCommands, TeamMemberCommands, VulnerabilityCommands,
};
use lacework_sdk::Result;
use lacework_sdk::client::LOG_LEVEL_ENV;

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.debug);

    let opts = GlobalOptions::from_cli(&cli);

    match cli.command {
        Commands::Configure(args) => cli::configure::run(&opts, &args),
        Commands::Api(args) => cli::api::run(&opts, &args).await,
        Commands::Version => {
            println!("lacework version {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Commands::AccessToken(cmd) => match cmd {
            AccessTokenCommands::List => cli::access_token::list(&opts).await,
            AccessTokenCommands::Show { token } => cli::access_token::show(&opts, &token).await,
            AccessTokenCommands::Create { alias, description } => {
                cli::access_token::create(&opts, &alias, &description).await
            }
            AccessTokenCommands::Enable { token } => {
                cli::access_token::set_state(&opts, &token, true).await
            }
            AccessTokenCommands::Disable { token } => {
                cli::access_token::set_state(&opts, &token, false).await
            }
        },
        Commands::TeamMember(cmd) => match cmd {
            TeamMemberCommands::List => cli::team_member::list(&opts).await,
            TeamMemberCommands::Show { guid } => cli::team_member::show(&opts, &guid).await,
            TeamMemberCommands::Delete { guid } => cli::team_member::delete(&opts, &guid).await,
        },
        Commands::Alert(cmd) => match cmd {
            AlertCommands::List(args) => cli::alert::list(&opts, &args).await,
            AlertCommands::Show { id } => cli::alert::show(&opts, id).await,
            AlertCommands::Comment { id, comment } => {
                cli::alert::comment(&opts, id, &comment).await
            }
        },
        Commands::Policy(cmd) => match cmd {
            PolicyCommands::List(args) => cli::policy::list(&opts, &args).await,
            PolicyCommands::Show { id } => cli::policy::show(&opts, &id).await,
            PolicyCommands::Create { file } => cli::policy::create(&opts, &file).await,
            PolicyCommands::Delete { id } => cli::policy::delete(&opts, &id).await,
        },
        Commands::Report(ReportCommands::Download(args)) => {
            cli::report::download(&opts, &args).await
        }
        Commands::Vulnerability(VulnerabilityCommands::Container(cmd)) => match cmd {
            ContainerVulnCommands::List(args) => {
                cli::vulnerability::list_containers(&opts, &args).await
            }
        },
    }
}

/// Route `log` output to stderr. `LW_LOG` sets the filter (default `warn`);
/// `--debug` forces debug level.
fn init_logging(debug: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::new().filter_or(LOG_LEVEL_ENV, "warn"));
    if debug {
        builder.filter_level(log::LevelFilter::Debug);
    }
    // A logger may already be installed when embedded in tests
    let _ = builder.try_init();
}
