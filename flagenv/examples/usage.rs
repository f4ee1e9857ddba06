//! Example printing usage text and the derived environment variable names
//!
//! Run with `--help` to see the usage listing.

use flagenv::{bind_parsed, env_name_from_prefix, FlagError, FlagSet};

const ENV_PREFIX: &str = "DEMO";

fn main() -> anyhow::Result<()> {
    let mut flags = FlagSet::new("usage-demo");
    let host = flags.flag("host", "localhost".to_string(), "server host");
    let port = flags.flag("port", 8080u16, "server port");
    let log_level = flags.flag("log-level", "info".to_string(), "log verbosity");

    match flags.parse(std::env::args().skip(1)) {
        Ok(_) => {}
        Err(FlagError::Help) => {
            print!("{}", flags.usage());
            println!();
            println!("Environment variables read when a flag is unset:");
            let to_env = env_name_from_prefix(ENV_PREFIX);
            for flag in flags.iter() {
                println!("  {}: {}", flag.name(), to_env(flag.name()));
            }
            return Ok(());
        }
        Err(err) => return Err(err.into()),
    }

    bind_parsed(&mut flags, ENV_PREFIX)?;

    println!("host: {}", host.get());
    println!("port: {}", port.get());
    println!("log-level: {}", log_level.get());

    Ok(())
}
