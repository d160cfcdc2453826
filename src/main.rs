use std::process::ExitCode;

fn main() -> ExitCode {
    // Default: WARN for everything, INFO for curvelet.
    // Override with RUST_LOG env var (e.g. RUST_LOG=curvelet=debug).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("curvelet=info".parse().unwrap_or_default());
    // Logs go to stderr; stdout carries only the report lines.
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    match curvelet::app::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
