use clap::Subcommand;
use sixwell_core::Config;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print the current configuration
    Show,
    /// Set the monthly per-dimension check-in target
    SetGoal {
        /// Check-ins per dimension that fill the progress ring
        target: u32,
    },
}

pub fn run(action: ConfigAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::Show => {
            let config = Config::load()?;
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
        ConfigAction::SetGoal { target } => {
            if target == 0 {
                return Err("monthly target must be at least 1".into());
            }
            let mut config = Config::load()?;
            config.goal.monthly_target = target;
            config.save()?;
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
    }
    Ok(())
}
