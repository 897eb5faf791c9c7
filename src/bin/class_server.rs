use classes::{ClassServerConfig, ClassServerOptions, ReplicaAddress, Role};
use std::process;

const USAGE: &str = "Usage: class-server <host> <port> <P|S> [-debug]";

struct Args {
    address: ReplicaAddress,
    role: Role,
    debug: bool,
}

fn parse_args(args: &[String]) -> Result<Args, String> {
    if args.len() < 3 {
        return Err(format!("Wrong format. {}", USAGE));
    }

    let port = match args[1].parse::<u16>() {
        Ok(port) if port >= 1024 => port,
        _ => return Err("Wrong port format. Try a number between 1024 and 65535".to_string()),
    };

    let role = Role::from_qualifier(&args[2]).ok_or_else(|| "Wrong qualifier format. Try 'P' or 'S'".to_string())?;
    let debug = args.get(3).map(|flag| flag == "-debug").unwrap_or(false);

    Ok(Args {
        address: ReplicaAddress::new(args[0].clone(), port),
        role,
        debug,
    })
}

#[tokio::main]
async fn main() {
    let raw_args: Vec<String> = std::env::args().skip(1).collect();
    let args = match parse_args(&raw_args) {
        Ok(args) => args,
        Err(message) => {
            eprintln!("ERROR: {}", message);
            process::exit(1);
        }
    };

    let logger = classes::create_root_logger_for_stdout("ClassServer".to_string(), args.debug);
    let config = ClassServerConfig {
        address: args.address,
        role: args.role,
        naming_address: classes::default_naming_address(),
        service_name: classes::CLASS_SERVICE_NAME.to_string(),
        info_logger: logger.clone(),
        options: ClassServerOptions::default(),
    };

    let server = match classes::try_create_class_server(config).await {
        Ok(server) => server,
        Err(e) => {
            eprintln!("ERROR: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = tokio::signal::ctrl_c().await {
        slog::error!(logger, "Cannot listen for Ctrl-C: {}", e);
    }

    slog::info!(logger, "Exiting server...");
    server.shutdown().await;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn parses_valid_arguments() {
        let parsed = parse_args(&args(&["localhost", "8080", "P", "-debug"])).unwrap();
        assert_eq!(parsed.address, ReplicaAddress::new("localhost", 8080));
        assert_eq!(parsed.role, Role::Primary);
        assert!(parsed.debug);

        let parsed = parse_args(&args(&["localhost", "8081", "S"])).unwrap();
        assert_eq!(parsed.role, Role::Secondary);
        assert!(!parsed.debug);
    }

    #[test]
    fn rejects_invalid_arguments() {
        assert!(parse_args(&args(&["localhost", "8080"])).is_err());
        assert!(parse_args(&args(&["localhost", "80", "P"])).is_err());
        assert!(parse_args(&args(&["localhost", "70000", "P"])).is_err());
        assert!(parse_args(&args(&["localhost", "8080", "X"])).is_err());
    }
}
