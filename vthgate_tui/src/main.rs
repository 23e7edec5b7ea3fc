use std::io;
use std::process::ExitCode;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use vthgate_sim::{persist, Session, Summary};
use vthgate_tui::{cli::Cli, error::VthGateTuiResult, plot, prompt};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(&cli);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            debug!(error = %e, "run failed");
            println!("{}", e.user_message(cli.vdd));
            ExitCode::FAILURE
        }
    }
}

fn init_logging(cli: &Cli) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_level()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(cli: &Cli) -> VthGateTuiResult<()> {
    let session = Session::new(cli.config())?;
    if cli.list {
        print!("{}", session.table());
        return Ok(());
    }

    let threshold = match &cli.threshold {
        Some(threshold) => threshold.clone(),
        None => prompt::read_threshold(
            &mut io::stdin().lock(),
            &mut io::stdout(),
            session.config().vdd,
        )?,
    };
    let result = session.run_text(&threshold)?;

    if !cli.no_save {
        persist::save(&result.waveform, &session.config().output_dir)?;
    }
    print!("{}", Summary::new(&result.waveform));
    if !cli.no_plot {
        plot::show(&result.waveform)?;
    }
    Ok(())
}
