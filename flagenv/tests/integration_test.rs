//! Integration tests

use flagenv::Flags;
use serial_test::serial;
use std::env;

#[derive(Debug, Flags)]
#[flag(prefix = "ITEST")]
struct ServerConfig {
    #[flag(help = "server host", default = "localhost".to_string())]
    pub host: String,

    #[flag(help = "server port", default = 8080u16)]
    pub port: u16,

    #[flag(name = "config-file", help = "config file", default = "config.toml".to_string())]
    pub config: String,

    #[flag(help = "enable debug output")]
    pub debug: bool,
}

#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
struct Limits {
    max_conns: u32,
    burst: u32,
}

#[derive(Debug, Flags)]
#[flag(prefix = "JTEST")]
struct WorkerConfig {
    #[flag(help = "worker count", default = 4u32)]
    pub workers: u32,

    #[flag(help = "connection limits", parser = "serde_json::from_str", default = Limits { max_conns: 10, burst: 20 })]
    pub limits: Limits,
}

#[test]
#[serial]
fn test_defaults_without_args_or_env() {
    env::remove_var("ITEST_HOST");
    env::remove_var("ITEST_PORT");
    env::remove_var("ITEST_CONFIG_FILE");
    env::remove_var("ITEST_DEBUG");

    let config = ServerConfig::from_args(Vec::<String>::new()).unwrap();

    assert_eq!(config.host, "localhost");
    assert_eq!(config.port, 8080);
    assert_eq!(config.config, "config.toml");
    assert!(!config.debug);
}

#[test]
#[serial]
fn test_args_override_defaults() {
    env::remove_var("ITEST_HOST");
    env::remove_var("ITEST_PORT");
    env::remove_var("ITEST_CONFIG_FILE");
    env::remove_var("ITEST_DEBUG");

    let config = ServerConfig::from_args(["--host=example.com", "--port", "9090", "--debug"]).unwrap();

    assert_eq!(config.host, "example.com");
    assert_eq!(config.port, 9090);
    assert!(config.debug);
}

#[test]
#[serial]
fn test_env_fills_unset_flags() {
    env::set_var("ITEST_HOST", "envhost");
    env::set_var("ITEST_CONFIG_FILE", "env.toml");
    env::remove_var("ITEST_PORT");
    env::remove_var("ITEST_DEBUG");

    let config = ServerConfig::from_args(Vec::<String>::new()).unwrap();

    assert_eq!(config.host, "envhost");
    assert_eq!(config.config, "env.toml");
    assert_eq!(config.port, 8080);
    assert!(!config.debug);

    env::remove_var("ITEST_HOST");
    env::remove_var("ITEST_CONFIG_FILE");
}

#[test]
#[serial]
fn test_explicit_args_win_over_env() {
    env::set_var("ITEST_PORT", "7777");

    let config = ServerConfig::from_args(["--port=9999"]).unwrap();

    assert_eq!(config.port, 9999);

    env::remove_var("ITEST_PORT");
}

#[test]
#[serial]
fn test_env_coercion_error() {
    env::set_var("ITEST_PORT", "not-a-number");

    let err = ServerConfig::from_args(Vec::<String>::new()).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("port"), "unexpected message: {message}");
    assert!(message.contains("ITEST_PORT"), "unexpected message: {message}");

    env::remove_var("ITEST_PORT");
}

#[test]
#[serial]
fn test_unknown_argument() {
    env::remove_var("ITEST_HOST");
    env::remove_var("ITEST_PORT");
    env::remove_var("ITEST_CONFIG_FILE");
    env::remove_var("ITEST_DEBUG");

    let result = ServerConfig::from_args(["--nope=1"]);
    assert!(result.is_err());
}

#[test]
#[serial]
fn test_custom_parser_from_env() {
    env::set_var("JTEST_LIMITS", r#"{"max_conns": 50, "burst": 100}"#);
    env::remove_var("JTEST_WORKERS");

    let config = WorkerConfig::from_args(Vec::<String>::new()).unwrap();

    assert_eq!(config.workers, 4);
    assert_eq!(
        config.limits,
        Limits {
            max_conns: 50,
            burst: 100
        }
    );

    env::remove_var("JTEST_LIMITS");
}

#[test]
#[serial]
fn test_custom_parser_rejects_malformed_value() {
    env::set_var("JTEST_LIMITS", "not json");
    env::remove_var("JTEST_WORKERS");

    let err = WorkerConfig::from_args(Vec::<String>::new()).unwrap_err();
    assert!(err.to_string().contains("JTEST_LIMITS"));

    env::remove_var("JTEST_LIMITS");
}

#[test]
#[serial]
fn test_manual_flag_set_round_trip() {
    env::set_var("MTEST_CONFIG_FILE", "from-env.toml");
    env::remove_var("MTEST_HOST");
    env::remove_var("MTEST_PORT");

    let mut flags = flagenv::FlagSet::new("manual");
    let host = flags.flag("host", "localhost".to_string(), "server host");
    let port = flags.flag("port", 8080u16, "server port");
    let config = flags.flag("config-file", "config.toml".to_string(), "config file");

    flags.parse(["-port=7777"]).unwrap();
    flagenv::bind_parsed(&mut flags, "MTEST").unwrap();

    assert_eq!(host.get(), "localhost");
    assert_eq!(port.get(), 7777);
    assert_eq!(config.get(), "from-env.toml");

    env::remove_var("MTEST_CONFIG_FILE");
}

#[test]
#[serial]
fn test_bind_before_parse_is_an_error() {
    env::set_var("MTEST_HOST", "from-env");

    let mut flags = flagenv::FlagSet::new("manual");
    let host = flags.flag("host", "localhost".to_string(), "server host");

    let err = flagenv::bind_parsed(&mut flags, "MTEST").unwrap_err();
    assert!(matches!(err, flagenv::BindError::NotParsed));
    assert_eq!(host.get(), "localhost");

    env::remove_var("MTEST_HOST");
}
