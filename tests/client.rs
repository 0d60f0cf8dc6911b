use std::env;

use mailbridge::{Config, Driver, MailError, new_client};
use serial_test::serial;

fn full_cfg() -> Config {
    Config {
        url: "https://api.example.com".into(),
        port: 587,
        from_address: "from@test.com".into(),
        from_name: "Sender".into(),
        password: "secret".into(),
        api_key: "key123".into(),
        domain: "example.com".into(),
    }
}

fn assert_config_err(result: Result<Box<dyn mailbridge::Mailer>, MailError>, msg: &str) {
    match result {
        Err(MailError::Config(m)) => assert_eq!(m, msg),
        Err(other) => panic!("expected config error, got {}", other),
        Ok(_) => panic!("expected config error, got a driver"),
    }
}

#[test]
fn every_driver_requires_a_url() {
    for driver in [Driver::Smtp, Driver::Mailgun, Driver::SendGrid] {
        let cfg = Config {
            url: String::new(),
            ..full_cfg()
        };
        assert_config_err(new_client(driver, cfg), "driver requires a url");
    }
}

#[test]
fn a_from_address_is_required() {
    let cfg = Config {
        from_address: String::new(),
        ..full_cfg()
    };
    assert_config_err(new_client(Driver::Mailgun, cfg), "driver requires a from address");
}

#[test]
fn a_from_name_is_required() {
    let cfg = Config {
        from_name: String::new(),
        ..full_cfg()
    };
    assert_config_err(new_client(Driver::SendGrid, cfg), "driver requires a from name");
}

#[test]
fn smtp_requires_a_port() {
    let cfg = Config {
        port: 0,
        ..full_cfg()
    };
    assert_config_err(new_client(Driver::Smtp, cfg), "driver requires a port");
}

#[test]
fn smtp_requires_a_password() {
    let cfg = Config {
        password: String::new(),
        ..full_cfg()
    };
    assert_config_err(new_client(Driver::Smtp, cfg), "driver requires a password");
}

#[test]
fn mailgun_requires_a_domain() {
    let cfg = Config {
        domain: String::new(),
        ..full_cfg()
    };
    assert_config_err(new_client(Driver::Mailgun, cfg), "driver requires a domain");
}

#[test]
fn mailgun_requires_an_api_key() {
    let cfg = Config {
        api_key: String::new(),
        ..full_cfg()
    };
    assert_config_err(new_client(Driver::Mailgun, cfg), "driver requires an api key");
}

#[test]
fn sendgrid_requires_an_api_key() {
    let cfg = Config {
        api_key: String::new(),
        ..full_cfg()
    };
    assert_config_err(new_client(Driver::SendGrid, cfg), "driver requires an api key");
}

#[test]
fn valid_configs_build_drivers() {
    let cfg = Config {
        url: "smtp.example.com".into(),
        ..full_cfg()
    };
    assert!(new_client(Driver::Smtp, cfg).is_ok());
    assert!(new_client(Driver::Mailgun, full_cfg()).is_ok());
    assert!(new_client(Driver::SendGrid, full_cfg()).is_ok());
}

fn clear_env() {
    unsafe {
        env::remove_var("MAILBRIDGE_URL");
        env::remove_var("MAILBRIDGE_PORT");
        env::remove_var("MAILBRIDGE_FROM_ADDRESS");
        env::remove_var("MAILBRIDGE_FROM_NAME");
        env::remove_var("MAILBRIDGE_PASSWORD");
        env::remove_var("MAILBRIDGE_API_KEY");
        env::remove_var("MAILBRIDGE_DOMAIN");
    }
}

#[test]
#[serial]
fn from_env_missing_variables() {
    clear_env();
    let err = Config::from_env().unwrap_err();
    assert!(matches!(err, MailError::MissingEnvVar("MAILBRIDGE_URL")));
}

#[test]
#[serial]
fn from_env_defaults_port() {
    clear_env();
    unsafe {
        env::set_var("MAILBRIDGE_URL", "smtp.example.com");
        env::set_var("MAILBRIDGE_FROM_ADDRESS", "from@test.com");
        env::set_var("MAILBRIDGE_FROM_NAME", "Sender");
    }
    let cfg = Config::from_env().unwrap();
    assert_eq!(cfg.port, 587);
    assert_eq!(cfg.url, "smtp.example.com");
    assert!(cfg.password.is_empty());
}

#[test]
#[serial]
fn from_env_rejects_bad_port() {
    clear_env();
    unsafe {
        env::set_var("MAILBRIDGE_URL", "smtp.example.com");
        env::set_var("MAILBRIDGE_FROM_ADDRESS", "from@test.com");
        env::set_var("MAILBRIDGE_FROM_NAME", "Sender");
        env::set_var("MAILBRIDGE_PORT", "not-a-port");
    }
    let err = Config::from_env().unwrap_err();
    assert!(matches!(err, MailError::Config(_)));
}
