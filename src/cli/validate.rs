use std::path::Path;
use crate::cli::commands::ValidateArgs;
use crate::config::parse_config;
use crate::errors::S2pError;

pub fn handle_validate(args: ValidateArgs) -> Result<(), S2pError> {
    let _config = parse_config(Path::new(&args.path))?;
    println!("Configuration is valid: {}", args.path);
    Ok(())
}
