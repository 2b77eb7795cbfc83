use anyhow::Result;
use avatar_squeeze::cli::Args;
use avatar_squeeze::processing::{optimize, OptimizationRequest};
use avatar_squeeze::utils::print_failure;
use clap::Parser;

fn main() -> Result<()> {
    let args = Args::parse();

    let subscriber = tracing_subscriber::fmt()
        .with_max_level(args.log_level())
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // Failures are reported on stdout; the exit code stays 0.
    match OptimizationRequest::new(args.input, args.output, args.max_width) {
        Ok(request) => {
            optimize(&request);
        }
        Err(err) => print_failure(&err),
    }

    Ok(())
}
