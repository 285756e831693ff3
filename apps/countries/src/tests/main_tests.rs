use super::*;
use crate::config::settings_from_sources;

fn file_and_env_settings() -> Settings {
    settings_from_sources(
        Some(
            r#"
api_url = "http://from-file/v3.1"
name_lang = "deu"
"#,
        ),
        |key| match key {
            "APP__API_URL" => Some("http://from-env/v3.1".to_string()),
            "APP__NAME_LANG" => Some("ita".to_string()),
            _ => None,
        },
    )
    .settings
}

#[test]
fn flags_override_file_and_environment() {
    let args = Args::try_parse_from([
        "countries",
        "--api-url",
        "http://from-flag/v3.1",
        "--name-lang",
        "spa",
    ])
    .expect("parse args");
    let mut settings = file_and_env_settings();

    args.apply_to(&mut settings);

    assert_eq!(settings.api_url, "http://from-flag/v3.1");
    assert_eq!(settings.name_field(), NameField::translation("spa"));
}

#[test]
fn common_names_flag_drops_translation() {
    let args = Args::try_parse_from(["countries", "--common-names"]).expect("parse args");
    let mut settings = file_and_env_settings();

    args.apply_to(&mut settings);

    assert_eq!(settings.name_field(), NameField::Common);
    assert_eq!(settings.api_url, "http://from-env/v3.1");
}

#[test]
fn absent_flags_keep_environment_values() {
    let args = Args::try_parse_from(["countries"]).expect("parse args");
    let mut settings = file_and_env_settings();

    args.apply_to(&mut settings);

    assert_eq!(settings.api_url, "http://from-env/v3.1");
    assert_eq!(settings.name_field(), NameField::translation("ita"));
}

#[test]
fn name_lang_conflicts_with_common_names() {
    let err = Args::try_parse_from(["countries", "--name-lang", "fra", "--common-names"])
        .expect_err("must conflict");
    assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
}

#[test]
fn parses_filter_flags() {
    let args = Args::try_parse_from([
        "countries",
        "-q",
        " fra",
        "--region",
        "Europe",
        "--currency",
        "euro",
        "--json",
    ])
    .expect("parse args");

    assert_eq!(args.query.as_deref(), Some(" fra"));
    assert_eq!(args.region.as_deref(), Some("Europe"));
    assert_eq!(args.currency, Some(CurrencyCategory::Euro));
    assert!(args.json);
}

#[test]
fn rejects_unknown_currency() {
    assert!(Args::try_parse_from(["countries", "--currency", "yen"]).is_err());
}
