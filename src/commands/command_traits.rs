//! Command pattern interfaces
//!
//! This module defines the core Command pattern interfaces
//! for the CLI application, enabling a clean separation of concerns.

use crate::config::Settings;
use crate::errors::GeoResult;
use crate::utils::logger::Logger;

/// Represents an executable command in the application
///
/// Command objects encapsulate the logic for a specific CLI operation,
/// allowing for separation of concerns and better testability.
pub trait Command {
    /// Produce the lines this command prints on success
    fn render(&self) -> GeoResult<Vec<String>>;

    /// Execute the command, printing its output to stdout
    fn execute(&self) -> GeoResult<()> {
        for line in self.render()? {
            println!("{}", line);
        }
        Ok(())
    }
}

/// Factory for creating commands from CLI arguments
///
/// This trait defines the interface for command factories
/// which can parse CLI arguments and create the appropriate Command.
pub trait CommandFactory<'a> {
    /// Create a new Command instance based on CLI arguments
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `settings` - Output and logging settings
    /// * `logger` - Logger for recording operations
    ///
    /// # Returns
    /// A command that implements the Command trait, or an error
    fn create_command(
        &self,
        args: &clap::ArgMatches,
        settings: &'a Settings,
        logger: &'a Logger,
    ) -> GeoResult<Box<dyn Command + 'a>>;
}
