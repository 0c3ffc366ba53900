use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "rekey",
    about = "Convert export archives between object-addressing schemes",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Convert an archive's key format, producing a new archive
    Convert(ConvertArgs),
    /// Show an archive's current key format
    Inspect(InspectArgs),
}

#[derive(Args)]
pub struct ConvertArgs {
    /// The archive's current key format (content-hash or random-id)
    #[arg(long = "from")]
    pub from: String,
    /// The key format to convert to
    #[arg(long = "to")]
    pub to: String,
    /// Validate the requested conversion without mutating anything
    #[arg(long)]
    pub dry_run: bool,
    /// Path to the export archive
    pub archive: PathBuf,
}

#[derive(Args)]
pub struct InspectArgs {
    /// Path to the export archive
    pub archive: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_convert() {
        let cli = Cli::try_parse_from([
            "rekey",
            "convert",
            "--from",
            "content-hash",
            "--to",
            "random-id",
            "export.zip",
        ])
        .unwrap();
        if let Command::Convert(args) = cli.command {
            assert_eq!(args.from, "content-hash");
            assert_eq!(args.to, "random-id");
            assert!(!args.dry_run);
            assert_eq!(args.archive, PathBuf::from("export.zip"));
        } else {
            panic!("wrong command");
        }
    }

    #[test]
    fn parse_convert_dry_run() {
        let cli = Cli::try_parse_from([
            "rekey",
            "convert",
            "--from",
            "random-id",
            "--to",
            "content-hash",
            "--dry-run",
            "export.zip",
        ])
        .unwrap();
        if let Command::Convert(args) = cli.command {
            assert!(args.dry_run);
        } else {
            panic!("wrong command");
        }
    }

    #[test]
    fn parse_convert_requires_formats() {
        assert!(Cli::try_parse_from(["rekey", "convert", "export.zip"]).is_err());
    }

    #[test]
    fn parse_inspect() {
        let cli = Cli::try_parse_from(["rekey", "inspect", "export.zip"]).unwrap();
        assert!(matches!(cli.command, Command::Inspect(_)));
    }

    #[test]
    fn parse_verbose() {
        let cli = Cli::try_parse_from(["rekey", "--verbose", "inspect", "export.zip"]).unwrap();
        assert!(cli.verbose);
    }
}
