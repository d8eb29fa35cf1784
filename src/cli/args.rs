use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[clap(author, version, about)]
pub struct DomainColoringArgs {
    #[command(subcommand)]
    pub command: Option<CommandsEnum>,
}

#[derive(Debug, Subcommand)]
pub enum CommandsEnum {
    /// Open the interactive viewer.
    Explore(ParameterFilePath),
}

#[derive(Debug, Args, Default)]
pub struct ParameterFilePath {
    /// JSON parameter file; built-in defaults are used when omitted.
    pub params_path: Option<String>,
}

impl DomainColoringArgs {
    pub fn params_path(&self) -> Option<&str> {
        match &self.command {
            Some(CommandsEnum::Explore(params)) => params.params_path.as_deref(),
            None => None,
        }
    }
}
