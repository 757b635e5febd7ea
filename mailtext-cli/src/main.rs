mod options {
    #[derive(Debug, clap::Parser)]
    #[clap(name = "mailtext", about = "Convert Markdown email archives into plain text", version = clap::crate_version!())]
    #[clap(subcommand_required = true, arg_required_else_help = true)]
    pub struct Args {
        /// Enable tracing for all components.
        #[clap(short = 'v', long)]
        pub verbose: bool,

        #[clap(subcommand)]
        pub cmds: SubCommands,
    }

    #[derive(Debug, clap::Subcommand)]
    pub enum SubCommands {
        /// Convert an archive folder into year-bucketed text files.
        Convert {
            /// The root folder the converted text files are written to.
            ///
            /// One subfolder per extracted year is created below it on demand.
            #[clap(short = 'o', long, default_value = "./txt")]
            output: String,

            /// The folder containing the Markdown email archive.
            #[clap(default_value = "./random")]
            archive_folder: String,
        },
    }
}

use std::path::PathBuf;
use std::str::FromStr;

use clap::Parser;
use mt_core::eyre;
use options::{Args, SubCommands};

fn main() -> eyre::Result<()> {
    let args = Args::parse();
    if args.verbose {
        mt_core::setup_tracing();
    }

    match args.cmds {
        SubCommands::Convert {
            output,
            archive_folder,
        } => {
            let archive_folder = expanded(&archive_folder)?;
            let output = expanded(&output)?;
            let config = mt_core::Config::new(&archive_folder, &output);
            mt_converter::convert_folder(&config)?;
        }
    };
    Ok(())
}

/// Expand a user-supplied path, so `~/mail` works as an archive folder.
fn expanded(path: &str) -> eyre::Result<PathBuf> {
    let expanded = shellexpand::tilde(path);
    PathBuf::from_str(&expanded).map_err(|e| eyre::eyre!("Invalid path {}: {}", path, e))
}
