use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "lapwatch", version, about = "Time programs and format durations")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print a number of seconds as a human-readable duration
    Format {
        #[arg(allow_negative_numbers = true)]
        seconds: f64,
    },

    /// Run a program and report how long it took
    Run {
        /// Number of times to run the program
        #[arg(short, long)]
        repeat: Option<u32>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,

        /// Program followed by its arguments
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        command: Vec<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_format() {
        let cli = Cli::try_parse_from(["lapwatch", "format", "3661"]).unwrap();
        match cli.command {
            Commands::Format { seconds } => assert_eq!(seconds, 3661.0),
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_parse_run_with_program_flags() {
        let cli = Cli::try_parse_from([
            "lapwatch", "run", "--repeat", "3", "--json", "--", "ls", "-la",
        ])
        .unwrap();
        match cli.command {
            Commands::Run {
                repeat,
                json,
                command,
            } => {
                assert_eq!(repeat, Some(3));
                assert!(json);
                assert_eq!(command, vec!["ls".to_string(), "-la".to_string()]);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_run_requires_program() {
        assert!(Cli::try_parse_from(["lapwatch", "run"]).is_err());
    }
}
