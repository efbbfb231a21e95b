use anyhow::Context;
use clap::Parser;
use count_words::args::Args;
use count_words::config::AppConfig;
use count_words::error::AppError;
use count_words::{logging, presentation};
use std::io::{self, Write};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(e) = logging::init(args.verbose) {
        eprintln!("[warn] {e}");
    }

    let config = match AppConfig::try_from(args) {
        Ok(config) => config,
        Err(e) => return fail(&e),
    };

    match run(&config) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("count_words: {e:#}");
            let code = e.downcast_ref::<AppError>().map_or(1, AppError::exit_code);
            ExitCode::from(code)
        }
    }
}

/// Returns whether every input was counted completely.
fn run(config: &AppConfig) -> anyhow::Result<bool> {
    tracing::info!(
        "count_words v{} · threads={} chunk_size={}",
        count_words::VERSION,
        config.engine.threads,
        config.engine.chunk_size
    );

    let report = count_words_engine::run(&config.engine, &config.inputs).map_err(AppError::from)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    presentation::write_report(
        &mut out,
        &report,
        config.engine.output_mode,
        config.engine.metrics,
    )
    .context("failed to write results")?;
    out.flush().context("failed to flush stdout")?;

    Ok(report.is_complete())
}

fn fail(err: &AppError) -> ExitCode {
    eprintln!("count_words: {err}");
    ExitCode::from(err.exit_code())
}
