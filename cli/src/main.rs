mod commands;
mod terminal;

use commands::{CommandLine, Commands, export, summary};
use tfinv_common::config::Config;
use terminal::{logging, print};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging(commands.verbose, commands.quiet);

    match commands.command {
        Commands::Render(args) => {
            let cfg = Config {
                format: args.format,
                ..args.source.to_config(commands.quiet)
            };
            export::export(&args.source, args.output.as_deref(), &cfg)
        }
        Commands::Summary(args) => {
            let cfg = args.to_config(commands.quiet);
            print::header("inventory summary", cfg.quiet);
            summary::summary(&args, &cfg)
        }
    }
}
