//! Basic usage example

use flagenv::{bind_parsed, FlagSet};

fn main() -> anyhow::Result<()> {
    // Set an environment variable for demonstration
    std::env::set_var("DEMO_CONFIG_FILE", "from-env.toml");

    let mut flags = FlagSet::new("demo");
    let host = flags.flag("host", "localhost".to_string(), "server host");
    let port = flags.flag("port", 8080u16, "server port");
    let config = flags.flag("config-file", "config.toml".to_string(), "config file");

    // Pretend the user passed one flag on the command line.
    flags.parse(["-port=7777"])?;

    // Fill the unset flags from DEMO_* environment variables.
    bind_parsed(&mut flags, "DEMO")?;

    println!("Flag values:");
    println!("  host: {} (default, DEMO_HOST unset)", host.get());
    println!("  port: {} (explicitly set, never overwritten)", port.get());
    println!("  config-file: {} (filled from DEMO_CONFIG_FILE)", config.get());

    Ok(())
}
