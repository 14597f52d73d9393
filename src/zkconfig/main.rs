//!
//! The smart contract project configuration tool binary.
//!

pub mod arguments;

use std::path::PathBuf;

use colored::Colorize;

use self::arguments::Arguments;

///
/// The application entry point.
///
fn main() {
    std::process::exit(match main_inner() {
        Ok(()) => project_config::exit_code::SUCCESS,
        Err(error) => {
            eprintln!("{} {}", "Error:".bright_red(), error);
            project_config::exit_code::FAILURE
        }
    })
}

///
/// The auxiliary `main` function to facilitate the `?` error conversion operator.
///
fn main_inner() -> anyhow::Result<()> {
    let arguments = Arguments::new();
    arguments.validate()?;

    let input_file = arguments.input_file.unwrap_or_else(|| PathBuf::from("-"));
    let project = project_config::Project::try_from_path(input_file.as_path())?;

    if arguments.quiet {
        return Ok(());
    }

    let output = if arguments.standard_json {
        let settings = project_config::SolcSettings::from(&project.compiler);
        serde_json::to_string_pretty(&settings).expect("Always valid")
    } else if let Some(ref network) = arguments.network {
        let profile = project.network(network.as_str())?;
        serde_json::to_string_pretty(profile).expect("Always valid")
    } else {
        serde_json::to_string_pretty(&project).expect("Always valid")
    };
    println!("{}", output);

    Ok(())
}
