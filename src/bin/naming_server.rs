use classes::NamingServerConfig;
use std::process;

#[tokio::main]
async fn main() {
    let debug = std::env::args().skip(1).any(|arg| arg == "-debug");
    let logger = classes::create_root_logger_for_stdout("NamingServer".to_string(), debug);

    let config = NamingServerConfig {
        address: classes::default_naming_address(),
        info_logger: logger.clone(),
    };

    let server = match classes::try_create_naming_server(config).await {
        Ok(server) => server,
        Err(e) => {
            eprintln!("ERROR: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = tokio::signal::ctrl_c().await {
        slog::error!(logger, "Cannot listen for Ctrl-C: {}", e);
    }

    slog::info!(logger, "Exiting naming server...");
    server.shutdown().await;
}
