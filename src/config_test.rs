use super::*;

fn write_temp(name: &str, contents: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("daybreak-test-{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn defaults_match_documented_values() {
    let config = Config::default();
    assert_eq!(config.seed, 0);
    assert_eq!(config.scale, 1.0);
    assert_eq!(config.day_color, "#6EBFF7");
    assert_eq!(config.night_color, "#1a1c29");
    assert_eq!(config.initial_mode(), Mode::Day);
    assert!(config.sound);
}

#[test]
fn missing_keys_fall_back_to_defaults() {
    let path = write_temp("partial.json", r#"{ "seed": 999, "startNight": true }"#);
    let config = read_config(&path).unwrap();
    assert_eq!(config.seed, 999);
    assert_eq!(config.initial_mode(), Mode::Night);
    assert_eq!(config.scale, 1.0);
    assert_eq!(config.night_color, DEFAULT_NIGHT_COLOR);
}

#[test]
fn colours_are_not_validated() {
    let path = write_temp(
        "colours.json",
        r#"{ "dayColor": "papayawhip", "nightColor": "???" }"#,
    );
    let palette = read_config(&path).unwrap().palette();
    assert_eq!(palette.background(Mode::Day), "papayawhip");
    assert_eq!(palette.background(Mode::Night), "???");
}

#[test]
fn non_positive_scale_is_replaced() {
    for raw in ["0", "-2.5"] {
        let path = write_temp("scale.json", &format!(r#"{{ "scale": {raw} }}"#));
        assert_eq!(read_config(&path).unwrap().scale, 1.0, "scale {raw}");
    }
    let path = write_temp("scale-ok.json", r#"{ "scale": 1.5 }"#);
    assert_eq!(read_config(&path).unwrap().scale, 1.5);
}

#[test]
fn malformed_json_is_a_parse_error() {
    let path = write_temp("broken.json", "{ seed: ");
    assert!(matches!(read_config(&path), Err(ConfigError::Parse { .. })));
}

#[test]
fn missing_file_is_a_read_error() {
    let path = std::env::temp_dir().join("daybreak-definitely-missing.json");
    assert!(matches!(read_config(&path), Err(ConfigError::Read { .. })));
}

#[test]
fn negative_seeds_are_accepted() {
    let path = write_temp("negative.json", r#"{ "seed": -12345 }"#);
    assert_eq!(read_config(&path).unwrap().seed, -12345);
}
