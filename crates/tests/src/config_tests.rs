use pretty_assertions::assert_eq;
use shared_types::{AppConfig, AppErrorKind, LoggingConfig, Role, ShellState};

#[test]
fn empty_file_gives_defaults() {
    let config = AppConfig::from_toml_str("").unwrap();
    assert_eq!(config, AppConfig::default());
    assert_eq!(config.session.user().role, Role::Student);
    assert_eq!(config.ui.brand, "AttendEase");
    assert!(!config.ui.drawer_open);
    assert_eq!(config.logging.level, "info");
}

#[test]
fn partial_file_fills_missing_fields() {
    let config = AppConfig::from_toml_str(
        r#"
        [session]
        role = "teacher"

        [ui]
        drawer_open = true
        "#,
    )
    .unwrap();
    assert_eq!(config.session.name, "Sarah Johnson");
    assert_eq!(config.session.user().role, Role::Teacher);
    assert_eq!(config.ui.brand, "AttendEase");
    assert!(config.ui.drawer_open);
}

#[test]
fn unknown_role_falls_back_to_student() {
    let config = AppConfig::from_toml_str("[session]\nrole = \"principal\"\n").unwrap();
    assert_eq!(config.session.user().role, Role::Student);
}

#[test]
fn malformed_file_is_a_config_error() {
    let err = AppConfig::from_toml_str("[session\nrole = ").unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Config);
    assert_eq!(AppConfig::from_toml_or_default("[session\n"), AppConfig::default());
}

#[test]
fn config_builds_the_shell() {
    let config = AppConfig::from_toml_str("[session]\nname = \"Dr. Patel\"\nrole = \"hod\"\n").unwrap();
    let shell = ShellState::new(config.session.user()).with_drawer_open(config.ui.drawer_open);
    assert_eq!(shell.session().name, "Dr. Patel");
    assert_eq!(shell.menu().len(), 5);
    assert_eq!(shell.user_initial(), "D");
}

#[test]
fn shipped_config_loads_without_fallback() {
    let contents = include_str!("../../app/config.toml");
    let strict = AppConfig::from_toml_str(contents).unwrap();
    assert_eq!(AppConfig::from_toml_or_default(contents), strict);
    assert_eq!(strict.logging.tracing_level(), LoggingConfig::default().tracing_level());
    assert_eq!(strict.ui.brand, "AttendEase");
}

#[test]
fn malformed_file_logs_at_default_level() {
    let level = AppConfig::from_toml_str("[logging\nlevel = \"debug\"")
        .map(|config| config.logging)
        .unwrap_or_default()
        .tracing_level();
    assert_eq!(level, LoggingConfig::default().tracing_level());
}
