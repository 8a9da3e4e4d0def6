use clap::{Args, Parser, Subcommand, ValueEnum};
use investigate::Entity;

#[derive(Parser, Debug)]
#[command(name = "meontheweb")]
#[command(
    author,
    version,
    about = "Check where an email, domain or username shows up in breach data"
)]
pub struct Cli {
    /// Log request details to stderr
    #[clap(short, long, global = true, default_value_t = false)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search one index for an email, domain, phone, username or card number
    Scan(ScanArgs),

    /// Show how many hits each index holds for a value
    Counters(CountersArgs),

    /// Write a default investigate.toml
    Init {
        /// Where to write the file
        #[clap(default_value = "investigate.toml")]
        path: String,

        /// Overwrite without asking
        #[clap(short, long, default_value_t = false)]
        force: bool,
    },
}

#[derive(Args, Debug, Clone)]
pub struct ScanArgs {
    /// Value to look up
    pub query: String,

    /// Kind of value being looked up
    #[clap(short, long, value_enum, default_value_t = EntityArg::Emails)]
    pub entity: EntityArg,

    /// Index to search
    #[clap(short, long, default_value = "leaked_credentials")]
    pub index: String,

    /// Optional filter passed through to the service
    #[clap(long)]
    pub filter: Option<String>,

    #[clap(flatten)]
    pub output: OutputArgs,
}

#[derive(Args, Debug, Clone)]
pub struct CountersArgs {
    /// Value to look up
    pub query: String,

    /// Kind of value being looked up
    #[clap(short, long, value_enum, default_value_t = EntityArg::Emails)]
    pub entity: EntityArg,

    #[clap(flatten)]
    pub output: OutputArgs,
}

#[derive(Args, Debug, Clone)]
pub struct OutputArgs {
    /// Configuration file (defaults to environment variables)
    #[clap(short, long)]
    pub config: Option<String>,

    /// Print the raw outcome as JSON
    #[clap(long, default_value_t = false)]
    pub json: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntityArg {
    Emails,
    Domains,
    Phones,
    Usernames,
    CreditCards,
}

impl From<EntityArg> for Entity {
    fn from(value: EntityArg) -> Self {
        match value {
            EntityArg::Emails => Entity::Emails,
            EntityArg::Domains => Entity::Domains,
            EntityArg::Phones => Entity::Phones,
            EntityArg::Usernames => Entity::Usernames,
            EntityArg::CreditCards => Entity::CreditCards,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_scan_defaults() {
        let cli = Cli::try_parse_from(["meontheweb", "scan", "user@example.com"]).unwrap();
        assert!(!cli.verbose);
        match cli.command {
            Commands::Scan(args) => {
                assert_eq!(args.query, "user@example.com");
                assert_eq!(args.entity, EntityArg::Emails);
                assert_eq!(args.index, "leaked_credentials");
                assert!(args.filter.is_none());
                assert!(args.output.config.is_none());
                assert!(!args.output.json);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_scan_with_options() {
        let cli = Cli::try_parse_from([
            "meontheweb",
            "scan",
            "acme.io",
            "--entity",
            "domains",
            "--index",
            "instant_messaging",
            "--filter",
            "30",
            "--json",
            "-v",
        ])
        .unwrap();

        assert!(cli.verbose);
        let Commands::Scan(args) = cli.command else {
            panic!("expected scan");
        };
        assert_eq!(Entity::from(args.entity), Entity::Domains);
        assert_eq!(args.index, "instant_messaging");
        assert_eq!(args.filter.as_deref(), Some("30"));
        assert!(args.output.json);
    }

    #[test]
    fn test_entity_names_match_wire_names() {
        let cli =
            Cli::try_parse_from(["meontheweb", "counters", "4111", "-e", "credit-cards"]).unwrap();
        let Commands::Counters(args) = cli.command else {
            panic!("expected counters");
        };
        assert_eq!(Entity::from(args.entity).as_str(), "credit_cards");
    }

    #[test]
    fn test_init_defaults() {
        let cli = Cli::try_parse_from(["meontheweb", "init"]).unwrap();
        match cli.command {
            Commands::Init { path, force } => {
                assert_eq!(path, "investigate.toml");
                assert!(!force);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_query_is_required() {
        assert!(Cli::try_parse_from(["meontheweb", "scan"]).is_err());
    }
}
