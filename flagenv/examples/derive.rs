//! Example demonstrating the Flags derive macro

use flagenv::Flags;

#[derive(Debug, Flags)]
#[flag(prefix = "MYAPP")]
struct Config {
    #[flag(help = "server host", default = "localhost".to_string())]
    pub host: String,

    #[flag(help = "server port", default = 8080u16)]
    pub port: u16,

    #[flag(name = "log-level", help = "log verbosity", default = "info".to_string())]
    pub log_level: String,

    #[flag(help = "enable debug output")]
    pub debug: bool,
}

fn main() -> anyhow::Result<()> {
    // Set environment variables for demonstration
    std::env::set_var("MYAPP_PORT", "3000");
    std::env::set_var("MYAPP_LOG_LEVEL", "debug");

    // One flag per field: --host, --port, --log-level, --debug.
    // Flags the user leaves unset are filled from MYAPP_* variables.
    let config = Config::from_args(["--debug"])?;

    println!("Configuration loaded:");
    println!("  host: {}", config.host);
    println!("  port: {}", config.port);
    println!("  log-level: {}", config.log_level);
    println!("  debug: {}", config.debug);

    Ok(())
}
