//!
//! The smart contract project configuration tool arguments.
//!

use std::path::PathBuf;

use structopt::StructOpt;

///
/// Loads, validates, and prints the smart contract project configuration
/// read from the given file (or the standard input if none is given or
/// "-" is used as the file name).
///
/// Example: zkconfig project.json --network development
///
#[derive(Debug, StructOpt)]
#[structopt(name = "The smart contract project configuration tool")]
pub struct Arguments {
    /// The configuration file path.
    #[structopt(parse(from_os_str))]
    pub input_file: Option<PathBuf>,

    /// Print only the network profile with the given name.
    #[structopt(short = "n", long = "network")]
    pub network: Option<String>,

    /// Print the `solc --standard-json` settings derived from the compiler section.
    #[structopt(long = "standard-json")]
    pub standard_json: bool,

    /// Validate the configuration without printing it.
    #[structopt(short = "q", long = "quiet")]
    pub quiet: bool,
}

impl Arguments {
    ///
    /// A shortcut constructor.
    ///
    pub fn new() -> Self {
        Self::from_args()
    }

    ///
    /// Validates the arguments.
    ///
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.standard_json && self.network.is_some() {
            anyhow::bail!("The following options are invalid in standard JSON mode: --network.");
        }
        if self.quiet {
            if self.standard_json {
                anyhow::bail!("The following options are invalid in quiet mode: --standard-json.");
            }
            if self.network.is_some() {
                anyhow::bail!("The following options are invalid in quiet mode: --network.");
            }
        }

        Ok(())
    }
}

impl Default for Arguments {
    fn default() -> Self {
        Self::new()
    }
}
