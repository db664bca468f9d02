use clap::Parser;
use image_source::{
    core::{app::Generator, config::Config},
    image::{geometry::Dimensions, writer::ImageWriter},
    utils::cli::{Cli, Command, GenerateArgs},
    ImageSourceResult,
};
use std::{io, process::ExitCode};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let result = match cli.command {
        Command::Generate(args) => generate(&args),
        Command::Config => print_config(),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn generate(args: &GenerateArgs) -> ImageSourceResult<()> {
    let config = Config::parse(&args.config)?;
    let image = Generator::new().generate(&config, Dimensions::new(args.width, args.height))?;

    let writer = ImageWriter::default();
    if args.to_stdout {
        writer.write_to(&image, &mut io::stdout().lock())
    } else {
        writer.save(&image, &args.output)
    }
}

fn print_config() -> ImageSourceResult<()> {
    println!("{}", Config::skeleton().to_json()?);
    Ok(())
}
