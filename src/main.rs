use colored::Colorize;
use optipngp::cli::process;
use optipngp::{Result, WrapperConfig, WrapperError};
use std::ffi::OsString;

// Every argument belongs to optipng, including `--` and names that are not
// UTF-8, so argv is taken as-is rather than through an argument parser.
fn main() {
    let args: Vec<OsString> = std::env::args_os().skip(1).collect();

    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("{}", format!("Error: Failed to create tokio runtime: {}", e).red());
            std::process::exit(1);
        }
    };

    if let Err(e) = runtime.block_on(run_async(args)) {
        match e.downcast_ref::<WrapperError>() {
            Some(WrapperError::Usage) => eprintln!("{}", e),
            _ => eprintln!("{}", format!("Error: {:#}", e).red()),
        }
        std::process::exit(1);
    }
}

async fn run_async(args: Vec<OsString>) -> Result<()> {
    // Usage errors win over a broken config file
    if args.is_empty() {
        return Err(WrapperError::Usage.into());
    }

    let config = WrapperConfig::load()?;
    let outcome = process::run(&config, args).await?;
    process::report(&config, &outcome);
    Ok(())
}
