use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::composer::{ComposerConfig, FavoritePolicy, SERVING_STEP};

/// MealComposer — group analyzed foods into meals, adjust servings, and log them.
#[derive(Parser, Debug)]
#[command(name = "meal_composer")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// How favoriting an ingredient propagates through its dish.
    #[arg(long, value_enum, default_value_t = FavoritePolicy::Cascade, global = true)]
    pub favorites: FavoritePolicy,

    /// Enable debug logging (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Group an analysis result and print the meal.
    Classify {
        /// Analysis JSON: a list of foods or an object with a `foods` list.
        input: PathBuf,

        /// Print the flattened record as JSON instead of a table.
        #[arg(long)]
        json: bool,
    },

    /// Interactively edit a meal and save it as a record.
    Edit {
        /// Analysis or saved record JSON.
        input: PathBuf,

        /// Where to write the saved record.
        #[arg(short, long, default_value = "meal_record.json")]
        output: PathBuf,
    },

    /// Export a saved record as CSV.
    Export {
        /// Saved record JSON.
        input: PathBuf,

        /// CSV destination.
        #[arg(long, default_value = "meal_record.csv")]
        csv: PathBuf,
    },
}

impl Cli {
    /// Session configuration selected by the flags.
    pub fn composer_config(&self) -> ComposerConfig {
        ComposerConfig {
            favorite_policy: self.favorites,
            serving_step: SERVING_STEP,
        }
    }
}
