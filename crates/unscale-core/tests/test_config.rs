use unscale_core::compare::Comparator;
use unscale_core::error::UnscaleError;
use unscale_core::unscale::{CompareMode, UnscaleConfig};

#[test]
fn test_default_config() {
    let config = UnscaleConfig::default();
    assert_eq!(config.mode, CompareMode::Exact);
    assert_eq!(config.fuzziness, 10);
    assert_eq!(config.max_variation, 1);
}

#[test]
fn test_compare_mode_display() {
    assert_eq!(format!("{}", CompareMode::Exact), "Exact");
    assert_eq!(format!("{}", CompareMode::Fuzzy), "Fuzzy");
}

#[test]
fn test_exact_comparator() {
    let config = UnscaleConfig::default();
    assert_eq!(config.comparator().unwrap(), Comparator::Exact);
}

#[test]
fn test_fuzzy_comparator_uses_fuzziness() {
    let config = UnscaleConfig {
        mode: CompareMode::Fuzzy,
        fuzziness: 255,
        ..UnscaleConfig::default()
    };
    assert_eq!(
        config.comparator().unwrap(),
        Comparator::Fuzzy { fuzziness: 255 }
    );
}

#[test]
fn test_fuzziness_out_of_range() {
    let config = UnscaleConfig {
        fuzziness: 300,
        ..UnscaleConfig::default()
    };
    assert!(matches!(
        config.validate(),
        Err(UnscaleError::InvalidConfig(_))
    ));
    assert!(config.comparator().is_err());
}

#[test]
fn test_partial_toml_fills_defaults() {
    let config: UnscaleConfig = toml::from_str("mode = \"Fuzzy\"\n").unwrap();
    assert_eq!(config.mode, CompareMode::Fuzzy);
    assert_eq!(config.fuzziness, 10);
    assert_eq!(config.max_variation, 1);
}

#[test]
fn test_toml_roundtrip() {
    let config = UnscaleConfig {
        mode: CompareMode::Fuzzy,
        fuzziness: 4,
        max_variation: 2,
    };
    let text = toml::to_string_pretty(&config).unwrap();
    let parsed: UnscaleConfig = toml::from_str(&text).unwrap();
    assert_eq!(parsed, config);
}

#[test]
fn test_negative_variation_is_rejected_by_parser() {
    assert!(toml::from_str::<UnscaleConfig>("max_variation = -1\n").is_err());
}
