use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::env;

const VTLAB_HEAP_LIMIT: &str = "VTLAB_HEAP_LIMIT";

#[derive(Parser, Debug)]
#[command(name = "vtlab", version, about, long_about = None)]
pub struct Arguments {
    /// Maximum number of bytes the object heap may hand out
    /// (default: $VTLAB_HEAP_LIMIT, or unlimited)
    #[arg(long, global = true)]
    pub heap_limit: Option<usize>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, PartialEq, Subcommand)]
pub enum Command {
    /// Call `start` on a Vehicle, a Truck, and a Truck seen as a Vehicle
    Run,
    /// Print the metadata of the built-in classes as JSON
    Classes,
    /// Print the current time
    Time,
    /// Print "Hello World!"
    Hello {
        /// Call the greeting through the type instead of an instance
        #[arg(long = "static")]
        call_static: bool,
    },
    /// Print the sum of the numbers (default: 0 to 9)
    Sum {
        #[arg(allow_negative_numbers = true)]
        numbers: Vec<i32>,
    },
}

impl Arguments {
    /// Heap limit given on the command line, or by the environment
    pub fn heap_limit(&self) -> Result<Option<usize>> {
        if self.heap_limit.is_some() {
            return Ok(self.heap_limit);
        }
        let Ok(s) = env::var(VTLAB_HEAP_LIMIT) else {
            return Ok(None);
        };
        let limit = s
            .trim()
            .parse::<usize>()
            .context(format!("{} must be a number of bytes (got `{}')", VTLAB_HEAP_LIMIT, s))?;
        Ok(Some(limit))
    }

    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Run)
    }
}

pub fn parse_command_line_args() -> Arguments {
    Arguments::parse()
}
