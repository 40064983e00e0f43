use std::time::Duration;

use figment::Jail;

use randovec_core::config::{DEFAULT_BATCH_SIZE, DEFAULT_NUM_OBJECTS, DEFAULT_VECTOR_SIZE};
use randovec_core::{Error, LogFormat, Scheme, Settings};

fn set_required(jail: &mut Jail) {
    jail.set_env("WEAVIATE_HTTP_ENDPONT", "weaviate.example.com");
    jail.set_env("WEAVIATE_GRPC_ENDPONT", "grpc-weaviate.example.com:443");
    jail.set_env("WEAVIATE_API_KEY", "secret");
}

#[test]
fn loads_required_vars_and_defaults() {
    Jail::expect_with(|jail| {
        set_required(jail);
        let settings = Settings::load().expect("settings");
        assert_eq!(settings.connection.http_host, "weaviate.example.com");
        assert_eq!(settings.connection.grpc_host, "grpc-weaviate.example.com:443");
        assert_eq!(settings.connection.api_key, "secret");
        assert_eq!(settings.connection.scheme, Scheme::Https);
        assert_eq!(settings.connection.timeout, Duration::from_secs(30));
        assert_eq!(settings.run.num_objects, DEFAULT_NUM_OBJECTS);
        assert_eq!(settings.run.batch_size, DEFAULT_BATCH_SIZE);
        assert_eq!(settings.run.vector_size, DEFAULT_VECTOR_SIZE);
        assert_eq!(settings.log_format, LogFormat::Json);
        Ok(())
    });
}

#[test]
fn each_missing_required_var_is_reported() {
    for missing in ["WEAVIATE_HTTP_ENDPONT", "WEAVIATE_GRPC_ENDPONT", "WEAVIATE_API_KEY"] {
        Jail::expect_with(|jail| {
            set_required(jail);
            jail.set_env(missing, "");
            let err = Settings::load().unwrap_err();
            match err {
                Error::MissingEnv(var) => assert_eq!(var, missing),
                other => panic!("expected MissingEnv, got {other}"),
            }
            Ok(())
        });
    }
}

#[test]
fn run_parameters_are_parsed() {
    Jail::expect_with(|jail| {
        set_required(jail);
        jail.set_env("NUM_OBJECTS", "7");
        jail.set_env("BATCH_SIZE", "3");
        jail.set_env("VECTOR_SIZE", "1536");
        jail.set_env("WEAVIATE_SCHEME", "HTTP");
        jail.set_env("RANDOVEC_LOG_FORMAT", "pretty");
        let settings = Settings::load().expect("settings");
        assert_eq!((settings.run.num_objects, settings.run.batch_size, settings.run.vector_size), (7, 3, 1536));
        assert_eq!(settings.connection.scheme, Scheme::Http);
        assert_eq!(settings.log_format, LogFormat::Pretty);
        Ok(())
    });
}

#[test]
fn non_positive_or_non_numeric_run_parameters_are_rejected() {
    for (var, value) in [("NUM_OBJECTS", "abc"), ("BATCH_SIZE", "0"), ("VECTOR_SIZE", "-4"), ("WEAVIATE_TIMEOUT_SECS", "0")] {
        Jail::expect_with(|jail| {
            set_required(jail);
            jail.set_env(var, value);
            let err = Settings::load().unwrap_err();
            assert!(matches!(err, Error::InvalidConfig(ref msg) if msg.contains(var)), "{var}={value}: {err}");
            assert!(err.is_fatal());
            Ok(())
        });
    }
}

#[test]
fn numeric_api_key_is_kept_as_text() {
    Jail::expect_with(|jail| {
        set_required(jail);
        jail.set_env("WEAVIATE_API_KEY", "123456");
        let settings = Settings::load().expect("settings");
        assert_eq!(settings.connection.api_key, "123456");
        Ok(())
    });
}

#[test]
fn number_like_connection_values_keep_their_text() {
    for key in ["0123", "12.50", "+42", "1e5", "true", "0x1F"] {
        Jail::expect_with(|jail| {
            set_required(jail);
            jail.set_env("WEAVIATE_API_KEY", key);
            jail.set_env("WEAVIATE_GRPC_ENDPONT", "10.0.0.5");
            let settings = Settings::load().expect("settings");
            assert_eq!(settings.connection.api_key, key);
            assert_eq!(settings.connection.grpc_host, "10.0.0.5");
            Ok(())
        });
    }
}

#[test]
fn run_parameters_above_their_cap_are_rejected() {
    for (var, value) in [("NUM_OBJECTS", "18446744073709551615"), ("NUM_OBJECTS", "10000001"), ("VECTOR_SIZE", "1000000")] {
        Jail::expect_with(|jail| {
            set_required(jail);
            jail.set_env(var, value);
            let err = Settings::load().unwrap_err();
            assert!(matches!(err, Error::InvalidConfig(ref msg) if msg.contains(var)), "{var}={value}: {err}");
            Ok(())
        });
    }
}

#[test]
fn signed_run_parameter_is_accepted() {
    Jail::expect_with(|jail| {
        set_required(jail);
        jail.set_env("NUM_OBJECTS", "+42");
        assert_eq!(Settings::load().expect("settings").run.num_objects, 42);
        Ok(())
    });
}

#[test]
fn config_file_is_overridden_by_env() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "randovec.toml",
            r#"
                weaviate_http_endpont = "file-host:8080"
                weaviate_grpc_endpont = "file-host:50051"
                weaviate_api_key = "file-key"
                batch_size = 50
            "#,
        )?;
        jail.set_env("WEAVIATE_HTTP_ENDPONT", "env-host:8080");
        let settings = Settings::load().expect("settings");
        assert_eq!(settings.connection.http_host, "env-host:8080");
        assert_eq!(settings.connection.api_key, "file-key");
        assert_eq!(settings.run.batch_size, 50);
        Ok(())
    });
}

#[test]
fn unknown_scheme_is_rejected() {
    Jail::expect_with(|jail| {
        set_required(jail);
        jail.set_env("WEAVIATE_SCHEME", "ftp");
        assert!(matches!(Settings::load().unwrap_err(), Error::InvalidConfig(_)));
        Ok(())
    });
}
