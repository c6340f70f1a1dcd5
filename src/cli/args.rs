//! CLI argument definitions using Clap

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::core::{DwellingType, RoomConfig, MAX_AGE, MIN_AGE};
use crate::form::FormState;

/// Household energy consumption estimator
#[derive(Parser, Debug)]
#[command(name = "home-energy-calc")]
#[command(version, about = "Estimate monthly household energy consumption")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Config file path
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Display language, overrides the config ("auto", "en", "fr")
    #[arg(long, global = true)]
    pub lang: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Open the interactive form (default when no command given)
    Form,

    /// Calculate from flags and print the result
    Estimate(EstimateArgs),

    /// Print energy saving tips
    Tips,

    /// Inspect or create the configuration file
    Config(ConfigArgs),
}

/// Output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Arguments for the estimate subcommand
///
/// Every field is optional at parse time so that missing ones are reported
/// through the same validation as the interactive form.
#[derive(clap::Args, Debug, Default)]
pub struct EstimateArgs {
    /// Your full name
    #[arg(long)]
    pub name: Option<String>,

    /// Your age (clamped to 1-120)
    #[arg(long, allow_negative_numbers = true)]
    pub age: Option<i64>,

    /// Your city
    #[arg(long)]
    pub city: Option<String>,

    /// Your area or locality
    #[arg(long)]
    pub area: Option<String>,

    /// Flat, tenement or bungalow
    #[arg(long)]
    pub dwelling: Option<DwellingType>,

    /// 1BHK, 2BHK or 3BHK
    #[arg(long)]
    pub rooms: Option<RoomConfig>,

    /// Household has an air conditioner
    #[arg(long)]
    pub ac: bool,

    /// Household has a refrigerator
    #[arg(long)]
    pub fridge: bool,

    /// Household has a washing machine
    #[arg(long)]
    pub washing_machine: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Leave out the cost estimate
    #[arg(long)]
    pub no_cost: bool,
}

impl EstimateArgs {
    /// Fill a form the same way the interactive UI would
    pub fn to_form(&self, defaults: &FormState) -> FormState {
        let mut form = defaults.clone();
        form.name = self.name.clone().unwrap_or_default();
        form.city = self.city.clone().unwrap_or_default();
        form.area = self.area.clone().unwrap_or_default();
        if let Some(age) = self.age {
            form.set_age(age.clamp(i64::from(MIN_AGE), i64::from(MAX_AGE)) as u32);
        }
        form.dwelling_type = self.dwelling;
        form.room_config = self.rooms;
        form.has_ac = self.ac;
        form.has_fridge = self.fridge;
        form.has_washing_machine = self.washing_machine;
        form
    }
}

/// Arguments for the config subcommand
#[derive(clap::Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Config actions
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigAction {
    /// Print the config file location
    Path,
    /// Print the effective configuration as TOML
    Show,
    /// Write the default configuration file (overwrites)
    Init,
}
