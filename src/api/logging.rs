use chrono::Utc;
use slog::Drain;
use std::fs::OpenOptions;
use std::io;
use std::path::Path;

fn level(debug: bool) -> slog::Level {
    if debug {
        slog::Level::Debug
    } else {
        slog::Level::Info
    }
}

/// Async terminal logger. `debug` lowers the threshold from info to debug.
pub fn create_root_logger_for_stdout(component: String, debug: bool) -> slog::Logger {
    let decorator = slog_term::TermDecorator::new().build();
    let drain = slog_term::FullFormat::new(decorator).use_file_location().build().fuse();
    let drain = slog_async::Async::new(drain).build().fuse();
    let drain = slog::LevelFilter::new(drain, level(debug)).fuse();

    slog::Logger::root(drain, slog::o!("Component" => component))
}

/// Async file logger writing to `{directory}/{component}_{utc timestamp}.log`.
pub fn create_root_logger_for_file(directory: &Path, component: String, debug: bool) -> io::Result<slog::Logger> {
    let now = Utc::now().format("%Y-%m-%dT%H:%M:%SZ");
    let log_path = directory.join(format!("{}_{}.log", component, now));
    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(log_path)?;

    let decorator = slog_term::PlainDecorator::new(file);
    let drain = slog_term::FullFormat::new(decorator).build().fuse();
    let drain = slog_async::Async::new(drain).build().fuse();
    let drain = slog::LevelFilter::new(drain, level(debug)).fuse();

    Ok(slog::Logger::root(drain, slog::o!("Component" => component)))
}
