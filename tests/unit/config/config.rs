use super::*;

#[test]
fn defaults_fill_missing_fields() {
    let cfg = RenderConfig::from_json_str(r#"{ "frame_count": 12 }"#).unwrap();
    assert_eq!(cfg, RenderConfig::new(12));
    assert_eq!(cfg.frame_duration_secs, 0.5);
    assert_eq!(cfg.source, DEFAULT_SOURCE_DIMS);
    assert_eq!(cfg.output, DEFAULT_OUTPUT_DIMS);
    assert_eq!(cfg.interpolation, Interpolation::Nearest);
}

#[test]
fn full_json_round_trips() {
    let json = r#"{
        "frame_count": 64,
        "frame_duration_secs": 0.25,
        "source": { "width": 64, "height": 64 },
        "output": { "width": 512, "height": 256 },
        "interpolation": "smooth"
    }"#;
    let cfg = RenderConfig::from_json_str(json).unwrap();
    assert_eq!(cfg.output.height, 256);
    assert_eq!(cfg.interpolation, Interpolation::Smooth);

    let back = RenderConfig::from_json_str(&serde_json::to_string(&cfg).unwrap()).unwrap();
    assert_eq!(back, cfg);
}

#[test]
fn validation_is_fail_fast() {
    let mut cfg = RenderConfig::new(0);
    assert!(matches!(
        cfg.validate().unwrap_err(),
        PascalError::InvalidArgument(_)
    ));

    cfg.frame_count = 3;
    cfg.frame_duration_secs = -1.0;
    assert!(cfg.validate().is_err());
    cfg.frame_duration_secs = f64::NAN;
    assert!(cfg.validate().is_err());

    cfg.frame_duration_secs = 0.1;
    cfg.source.width = 0;
    assert!(cfg.validate().unwrap_err().to_string().contains("source"));

    cfg.source.width = 10;
    cfg.output.height = 0;
    assert!(cfg.validate().unwrap_err().to_string().contains("output"));
}

#[test]
fn malformed_json_is_a_serde_error() {
    let err = RenderConfig::from_json_str("{ not json").unwrap_err();
    assert!(matches!(err, PascalError::Serde(_)));

    let err = RenderConfig::from_json_str(r#"{ "frame_count": 2, "fps": 30 }"#).unwrap_err();
    assert!(matches!(err, PascalError::Serde(_)));
}

#[test]
fn invalid_values_in_json_are_rejected() {
    let err = RenderConfig::from_json_str(r#"{ "frame_count": 0 }"#).unwrap_err();
    assert!(matches!(err, PascalError::InvalidArgument(_)));
}

#[test]
fn missing_file_is_reported_with_path() {
    let err = RenderConfig::from_path("target/does/not/exist.json").unwrap_err();
    assert!(err.to_string().contains("exist.json"));
}

#[test]
fn default_file_name_embeds_row_count() {
    assert_eq!(
        RenderConfig::new(120).default_file_name(),
        "pascals_triangle_120.gif"
    );
}
