//! Tests for configuration sources.

use std::io::Write;
use std::time::Duration;

use tempfile::{NamedTempFile, tempdir};

use super::defaults;
use super::error::{DecodeError, SourceError};
use super::fields::find;
use super::model::{Config, LogLevel};
use super::source::{self, BufferSource, EnvSource, FileSource, FlagSource, Source};

/// Helper to parse flags from a slice
fn flags(args: &[&str]) -> FlagSource {
    let mut full_args = vec!["netcli-server"];
    full_args.extend(args);
    FlagSource::parse_from(full_args).unwrap()
}

/// Helper to write a temporary config file with the given extension
fn config_file(suffix: &str, content: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    write!(file, "{content}").unwrap();
    file
}

mod env_source {
    use super::*;

    #[test]
    fn get_uses_env_key() {
        let env = EnvSource::from_vars([("DEV_LOGIN", "envuser")]);

        let value = env.get(find("dev-login").unwrap()).unwrap();

        assert_eq!(value.as_deref(), Some("envuser"));
    }

    #[test]
    fn missing_key_is_none_not_error() {
        let env = EnvSource::default();

        assert_eq!(env.get(find("port").unwrap()).unwrap(), None);
    }

    #[test]
    fn flag_spelling_is_not_an_env_key() {
        let env = EnvSource::from_vars([("dev-login", "x")]);

        assert_eq!(env.get(find("dev-login").unwrap()).unwrap(), None);
    }

    #[test]
    fn decode_into_sets_present_fields() {
        let env = EnvSource::from_vars([
            ("PORT", "10.0.0.1:50051"),
            ("TLS", "1"),
            ("DEFAULT_READ_TIMEOUT", "45s"),
            ("LOG_LEVEL", "error"),
            ("UNRELATED", "ignored"),
        ]);
        let mut config = defaults::bootstrap();

        env.decode_into(&mut config).unwrap();

        assert_eq!(config.listen, "10.0.0.1:50051");
        assert!(config.tls);
        assert_eq!(config.default_read_timeout, Duration::from_secs(45));
        assert_eq!(config.logging.level, LogLevel::Error);
        assert!(config.dev_login.is_empty());
    }

    #[test]
    fn invalid_value_names_env_key() {
        let env = EnvSource::from_vars([("DISABLE_TCP", "sometimes")]);
        let mut config = Config::default();

        let err = env.decode_into(&mut config).unwrap_err();

        match err {
            SourceError::InvalidValue {
                source_name,
                key,
                value,
                ..
            } => {
                assert_eq!(source_name, "environment");
                assert_eq!(key, "DISABLE_TCP");
                assert_eq!(value, "sometimes");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}

mod flag_source {
    use super::*;

    #[test]
    fn long_flags_are_read() {
        let flags = flags(&["--dev-login", "flaguser", "--port", "0.0.0.0:1"]);

        assert_eq!(
            flags.get(find("dev-login").unwrap()).unwrap().as_deref(),
            Some("flaguser")
        );
        assert_eq!(
            flags.get(find("port").unwrap()).unwrap().as_deref(),
            Some("0.0.0.0:1")
        );
    }

    #[test]
    fn absent_switch_is_not_found() {
        let flags = flags(&[]);

        assert_eq!(flags.get(find("debug").unwrap()).unwrap(), None);
        assert_eq!(flags.get(find("tls").unwrap()).unwrap(), None);
    }

    #[test]
    fn short_debug_switch() {
        let flags = flags(&["-d"]);

        assert_eq!(
            flags.get(find("debug").unwrap()).unwrap().as_deref(),
            Some("true")
        );
    }

    #[test]
    fn bare_switch_reads_true() {
        let flags = flags(&["--tls"]);

        assert_eq!(
            flags.get(find("tls").unwrap()).unwrap().as_deref(),
            Some("true")
        );
    }

    #[test]
    fn switch_accepts_explicit_value() {
        let flags = flags(&["--tls=false", "--debug=0", "--dev-use-agent=t"]);
        let mut config = Config {
            tls: true,
            debug: true,
            ..Config::default()
        };

        flags.decode_into(&mut config).unwrap();

        assert!(!config.tls);
        assert!(!config.debug);
        assert!(config.dev_use_agent);
    }

    #[test]
    fn invalid_switch_value_names_flag() {
        let flags = flags(&["--tls=maybe"]);
        let mut config = Config::default();

        let err = flags.decode_into(&mut config).unwrap_err();

        assert!(matches!(
            err,
            SourceError::InvalidValue { source_name: "flags", ref key, .. } if key == "tls"
        ));
    }

    #[test]
    fn repeated_flag_keeps_last_value() {
        let flags = flags(&["--port", "a:1", "--port", "b:2", "-d", "-d"]);

        assert_eq!(
            flags.get(find("port").unwrap()).unwrap().as_deref(),
            Some("b:2")
        );
        assert_eq!(
            flags.get(find("debug").unwrap()).unwrap().as_deref(),
            Some("true")
        );
    }

    #[test]
    fn underscore_flags_parse() {
        let flags = flags(&["--disable_tcp", "--http_port", ":8080"]);
        let mut config = Config::default();

        flags.decode_into(&mut config).unwrap();

        assert!(config.disable_tcp);
        assert_eq!(config.http_listen, ":8080");
    }

    #[test]
    fn stdin_marker_is_accepted_as_value() {
        let flags = flags(&["--conf-file", "-"]);
        let mut config = Config::default();

        flags.decode_into(&mut config).unwrap();

        assert_eq!(config.conf_file, "-");
    }

    #[test]
    fn unknown_flag_is_error() {
        let result = FlagSource::parse_from(["netcli-server", "--no-such-flag"]);

        assert!(matches!(result, Err(SourceError::Flags(_))));
    }

    #[test]
    fn missing_value_is_error() {
        let result = FlagSource::parse_from(["netcli-server", "--port"]);

        assert!(matches!(result, Err(SourceError::Flags(_))));
    }

    #[test]
    fn malformed_duration_names_flag() {
        let flags = flags(&["--default-cmd-timeout", "abc"]);
        let mut config = Config::default();

        let err = flags.decode_into(&mut config).unwrap_err();

        assert!(matches!(
            err,
            SourceError::InvalidValue { source_name: "flags", ref key, .. } if key == "default-cmd-timeout"
        ));
    }

    #[test]
    fn help_is_reported_as_flags_error() {
        let result = FlagSource::parse_from(["netcli-server", "--help"]);

        match result {
            Err(SourceError::Flags(e)) => {
                assert_eq!(e.kind(), clap::error::ErrorKind::DisplayHelp);
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn command_is_consistent() {
        FlagSource::command().debug_assert();
    }
}

mod buffer_source {
    use super::*;

    #[test]
    fn get_is_not_implemented() {
        let buffer = BufferSource::new("port: x", "yaml");

        let err = buffer.get(find("port").unwrap()).unwrap_err();

        assert!(matches!(
            err,
            SourceError::NotImplemented {
                source_name: "buffer"
            }
        ));
    }

    #[test]
    fn decodes_with_declared_format() {
        let buffer = BufferSource::new(r#"{"dev_pass": "pw"}"#, "json");
        let mut config = Config::default();

        buffer.decode_into(&mut config).unwrap();

        assert_eq!(buffer.format(), "json");
        assert_eq!(config.dev_pass, "pw");
    }

    #[test]
    fn format_is_never_sniffed() {
        // Valid JSON is also valid YAML; a TOML tag must still reject it.
        let buffer = BufferSource::new(r#"{"dev_pass": "pw"}"#, "toml");
        let mut config = Config::default();

        let err = buffer.decode_into(&mut config).unwrap_err();

        assert!(matches!(
            err,
            SourceError::Decode {
                source: DecodeError::Toml(_),
                ..
            }
        ));
    }

    #[test]
    fn unsupported_tag() {
        let buffer = BufferSource::new("<config/>", "xml");
        let mut config = Config::default();

        let err = buffer.decode_into(&mut config).unwrap_err();

        assert!(matches!(
            err,
            SourceError::Decode {
                source: DecodeError::UnsupportedFormat { .. },
                ..
            }
        ));
        assert_eq!(config, Config::default());
    }
}

mod file_source {
    use super::*;

    #[test]
    fn yaml_file_by_extension() {
        let file = config_file(".yaml", "dev_login: fileuser\nport: 0.0.0.0:9000\n");
        let source = FileSource::new(file.path());
        let mut config = defaults::full();

        source.decode_into(&mut config).unwrap();

        assert_eq!(source.path(), file.path());
        assert_eq!(config.dev_login, "fileuser");
        assert_eq!(config.listen, "0.0.0.0:9000");
    }

    #[test]
    fn json_file_by_extension() {
        let file = config_file(".json", r#"{"basic_auth": "a:b"}"#);
        let mut config = defaults::full();

        FileSource::new(file.path()).decode_into(&mut config).unwrap();

        assert_eq!(config.basic_auth, "a:b");
    }

    #[test]
    fn missing_file_is_read_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("absent.yaml");
        let mut config = defaults::full();

        let err = FileSource::new(&path).decode_into(&mut config).unwrap_err();

        assert!(matches!(err, SourceError::FileRead { path: ref p, .. } if *p == path));
    }

    #[test]
    fn unsupported_extension_is_decode_error() {
        let file = config_file(".xml", "<config/>");
        let mut config = defaults::full();

        let err = FileSource::new(file.path())
            .decode_into(&mut config)
            .unwrap_err();

        match err {
            SourceError::Decode {
                source: DecodeError::UnsupportedFormat { format },
                ..
            } => assert_eq!(format, "xml"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn get_is_not_implemented() {
        let source = FileSource::new("conf.yaml");

        assert!(matches!(
            source.get(find("port").unwrap()),
            Err(SourceError::NotImplemented { .. })
        ));
    }
}

mod layering {
    use super::*;

    #[test]
    fn later_sources_win() {
        let env = EnvSource::from_vars([("DEV_LOGIN", "envuser"), ("DEV_PASS", "envpass")]);
        let flags = flags(&["--dev-login", "flaguser"]);

        let config = source::load(defaults::bootstrap(), &[&env, &flags]).unwrap();

        assert_eq!(config.dev_login, "flaguser");
        assert_eq!(config.dev_pass, "envpass");
    }

    #[test]
    fn first_error_stops_loading() {
        let env = EnvSource::from_vars([("TLS", "perhaps")]);
        let buffer = BufferSource::new("port: x", "yaml");

        let result = source::load(defaults::full(), &[&env, &buffer]);

        assert!(matches!(result, Err(SourceError::InvalidValue { .. })));
    }
}
