use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

pub const DEFAULT_WIDTH: u32 = 640;
pub const DEFAULT_HEIGHT: u32 = 480;
pub const DEFAULT_OUTPUT: &str = "image.png";

#[derive(Parser)]
#[command(author, version, about = "Generate an image from another image", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Generate an image from a config file
    #[command(name = "generate")]
    Generate(GenerateArgs),

    /// Print a blank config for the image type
    #[command(name = "config")]
    Config,
}

#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Path to the image config file
    #[arg(short, long)]
    pub config: PathBuf,

    /// Width of the generated image
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    pub width: u32,

    /// Height of the generated image
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    pub height: u32,

    /// Path to write the file
    #[arg(short, long, default_value = DEFAULT_OUTPUT, conflicts_with = "to_stdout")]
    pub output: PathBuf,

    /// Print the image to stdout
    #[arg(long)]
    pub to_stdout: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generate(args: &[&str]) -> Result<GenerateArgs, clap::Error> {
        let argv = ["image-source", "generate"].iter().chain(args.iter());
        match Cli::try_parse_from(argv)?.command {
            Command::Generate(args) => Ok(args),
            Command::Config => panic!("parsed the wrong subcommand"),
        }
    }

    #[test]
    fn generate_defaults() {
        let args = generate(&["--config", "c.yaml"]).unwrap();
        assert_eq!(args.config, PathBuf::from("c.yaml"));
        assert_eq!((args.width, args.height), (640, 480));
        assert_eq!(args.output, PathBuf::from("image.png"));
        assert!(!args.to_stdout);
    }

    #[test]
    fn generate_overrides() {
        let args = generate(&[
            "-c", "c.yaml", "--width", "2000", "--height", "1000", "-o", "out.png",
        ])
        .unwrap();
        assert_eq!((args.width, args.height), (2000, 1000));
        assert_eq!(args.output, PathBuf::from("out.png"));
    }

    #[test]
    fn output_conflicts_with_stdout() {
        assert!(generate(&["-c", "c.yaml", "-o", "x.png", "--to-stdout"]).is_err());
        assert!(generate(&["-c", "c.yaml", "--to-stdout"]).unwrap().to_stdout);
    }

    #[test]
    fn config_is_required_for_generate() {
        assert!(generate(&[]).is_err());
    }

    #[test]
    fn config_subcommand_parses() {
        let cli = Cli::try_parse_from(["image-source", "config"]).unwrap();
        assert!(matches!(cli.command, Command::Config));
    }
}
