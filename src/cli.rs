use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "ocrkit",
    version,
    about = "Provision the OCR host, run the OCR pipeline and serve its dashboard",
    arg_required_else_help = true
)]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(
        long,
        global = true,
        env = "OCRKIT_PROJECT_DIR",
        help = "Project root holding requirements.txt, app/ and env/ (default: directory of this executable)"
    )]
    pub project_dir: Option<PathBuf>,
    #[arg(
        short = 'y',
        long = "yes",
        global = true,
        help = "Answer yes to every confirmation prompt"
    )]
    pub assume_yes: bool,
    #[arg(
        short,
        long,
        global = true,
        action = ArgAction::Count,
        help = "Increase log verbosity (-v info, -vv debug)"
    )]
    pub verbose: u8,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Install system packages and the pinned Python, then build the environment
    Setup,
    /// Run the OCR pipeline over a directory of scans
    Run {
        /// Input directory with images
        directory: Option<PathBuf>,
    },
    /// Launch the dashboard over the OCR output directory
    Dashboard,
}
