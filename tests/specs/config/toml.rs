//! TOML render configuration

use crate::prelude::*;

#[test]
fn config_drives_rendering() {
    let config = FormatConfig::from_toml_str(
        r#"
limit_first_n = 2
limit_to_unit = "days"
"#,
    )
    .unwrap();
    let d = Durafmt::from_config(Interval::from_millis(1_275_723_240), &config).unwrap();
    assert_eq!(d.to_string(), "14 days 18 hours");
}

#[test]
fn localized_config() {
    let config = FormatConfig::from_toml_str(&format!("units = \"{}\"\n", PORTUGUESE)).unwrap();
    let d = Durafmt::parse("0m")
        .unwrap()
        .with_options(config.render_options().unwrap());
    assert_eq!(d.to_string(), "0 minutos");
}

#[test]
fn bad_vocabulary_fails_instead_of_falling_back() {
    let config = FormatConfig::from_toml_str(r#"units = "ano,semana""#).unwrap();
    let err = Durafmt::from_config(Interval::from_secs(60), &config).unwrap_err();
    assert!(matches!(err, Error::Units(_)));
    assert_eq!(
        err.to_string(),
        "invalid unit vocabulary: bad parts length: expected 8 units, found 2"
    );
}

#[test]
fn unknown_keys_are_rejected() {
    let err = FormatConfig::from_toml_str("limit_first = 2").unwrap_err();
    assert!(matches!(err, Error::Config(_)));
}
