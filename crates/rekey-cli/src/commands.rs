use colored::Colorize;

use rekey_types::KeyFormat;

use crate::cli::*;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Convert(args) => cmd_convert(args),
        Command::Inspect(args) => cmd_inspect(args),
    }
}

fn cmd_convert(args: ConvertArgs) -> anyhow::Result<()> {
    let from: KeyFormat = args.from.parse()?;
    let to: KeyFormat = args.to.parse()?;

    let out = rekey_archive::convert(from, to, &args.archive, args.dry_run)?;

    if args.dry_run {
        println!(
            "{} Would convert {} from {} to {}",
            "✓".green(),
            args.archive.display().to_string().bold(),
            from.to_string().yellow(),
            to.to_string().yellow(),
        );
    } else if out == args.archive {
        println!(
            "{} Archive already uses {}, nothing to do",
            "✓".green(),
            from.to_string().yellow()
        );
    } else {
        println!(
            "{} Converted archive written to {}",
            "✓".green().bold(),
            out.display().to_string().bold()
        );
    }
    Ok(())
}

fn cmd_inspect(args: InspectArgs) -> anyhow::Result<()> {
    let format = rekey_archive::read_key_format(&args.archive)?;
    println!(
        "{}: key format {}",
        args.archive.display().to_string().bold(),
        format.to_string().yellow()
    );
    Ok(())
}
