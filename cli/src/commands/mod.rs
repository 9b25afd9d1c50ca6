use crate::config::AppConfig;
use clap::Subcommand;

#[derive(Subcommand, PartialEq, Debug)]
pub enum Commands {
    /// Inspect or create the configuration file
    #[command(subcommand)]
    Config(ConfigCommands),
}

#[derive(Subcommand, PartialEq, Debug)]
pub enum ConfigCommands {
    /// Print the effective configuration as TOML
    Show,
    /// Write the effective configuration to the config file
    Init {
        /// Overwrite an existing config file
        #[arg(long = "force", default_value_t = false)]
        force: bool,
    },
}

impl Commands {
    pub fn run(self, config: AppConfig) -> Result<(), String> {
        match self {
            Commands::Config(ConfigCommands::Show) => {
                let body = config
                    .to_config_file()
                    .to_toml()
                    .map_err(|e| e.to_string())?;
                println!("# {}", config.config_path.display());
                print!("{}", body);
            }
            Commands::Config(ConfigCommands::Init { force }) => {
                if config.config_path.exists() && !force {
                    return Err(format!(
                        "{} already exists, pass --force to overwrite it",
                        config.config_path.display()
                    ));
                }
                config
                    .to_config_file()
                    .save_to(&config.config_path)
                    .map_err(|e| format!("Failed to save config: {}", e))?;
                println!("Config written to {}", config.config_path.display());
            }
        }
        Ok(())
    }
}
