use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "jsonutil")]
#[command(about = "Parse and format compact duration strings such as 90s, 2h or 3d")]
pub struct CliConfig {
    #[command(subcommand)]
    pub command: Command,

    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON")]
    pub log_json: bool,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Print the number of milliseconds a duration string stands for
    Parse {
        text: String,

        #[arg(long, help = "Treat the input as a JSON string literal")]
        json: bool,
    },

    /// Print the duration string for a number of milliseconds
    Format {
        #[arg(allow_hyphen_values = true)]
        millis: i64,

        #[arg(long, help = "Print a JSON string literal")]
        json: bool,
    },
}
