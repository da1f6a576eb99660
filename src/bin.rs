use clap::Parser;
use series::cli::{run, Cli};
use series::Error;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Error> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let rendered = run(&cli)?;
    println!("{}", rendered.join(" "));
    Ok(())
}
