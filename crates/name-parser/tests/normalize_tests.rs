//! Normalization integration tests

use name_parser::{
    normalize_citation, normalize_term, preprocess_name, replace_unicode_entities,
    split_pro_parte_ids, trim_to_null, Normalizer, NormalizerConfig,
};
use rstest::rstest;

// === Citations ===

#[test]
fn test_normalize_citation_trims_edges_only() {
    let citation = "Benois, R. 1964. Contribution a la connaissance des Halictus malgaches (Hym. Apidae). Revue Française d'Entomologie 31: 45 60. ";
    assert_eq!(
        normalize_citation(Some(citation)).as_deref(),
        Some("Benois, R. 1964. Contribution a la connaissance des Halictus malgaches (Hym. Apidae). Revue Française d'Entomologie 31: 45 60.")
    );
}

#[test]
fn test_normalize_citation_keeps_internal_spacing() {
    assert_eq!(
        normalize_citation(Some("\t Mill.   1768 \n")).as_deref(),
        Some("Mill.   1768")
    );
}

// === Null tokens ===

#[rstest]
#[case("aCcepTed ", Some("aCcepTed"))]
#[case("nuller ", Some("nuller"))]
#[case("NuLL ", None)]
#[case(" ", None)]
#[case(" NULL ", None)]
#[case("       ", None)]
#[case("\\N ", None)]
#[case("", None)]
#[case("\t\n", None)]
#[case("N", Some("N"))]
#[case("\\", Some("\\"))]
fn test_trim_to_null(#[case] input: &str, #[case] expected: Option<&str>) {
    assert_eq!(trim_to_null(Some(input)).as_deref(), expected);
}

#[rstest]
#[case("aCcepTed ", Some("accepted"))]
#[case("accepted", Some("accepted"))]
#[case(" Provisionally Accepted", Some("provisionally accepted"))]
#[case(" null", None)]
#[case("", None)]
fn test_normalize_term(#[case] input: &str, #[case] expected: Option<&str>) {
    assert_eq!(normalize_term(Some(input)).as_deref(), expected);
}

#[test]
fn test_absent_input_stays_absent() {
    assert_eq!(normalize_citation(None), None);
    assert_eq!(trim_to_null(None), None);
    assert_eq!(normalize_term(None), None);
    assert_eq!(replace_unicode_entities(None), None);
}

#[test]
fn test_normalizer_from_loaded_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("normalizer.toml");
    std::fs::write(&path, "null_tokens = [\"NULL\", \"\\\\N\", \"unknown\"]\n").unwrap();

    let config = NormalizerConfig::load(&path).unwrap();
    let normalizer = Normalizer::new(&config);

    assert_eq!(normalizer.trim_to_null(Some(" Unknown ")), None);
    assert_eq!(normalizer.trim_to_null(Some("\\N")), None);
    assert_eq!(normalizer.normalize_term(Some("Doubtful")).as_deref(), Some("doubtful"));
}

#[test]
fn test_load_missing_config_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = NormalizerConfig::load(dir.path().join("missing.toml")).unwrap_err();
    assert!(matches!(err, name_parser::NormalizeError::Io(_)));
}

// === Numeric entities ===

#[rstest]
#[case("Markus&Pia")]
#[case("Markus&Pia;")]
#[case("Markus & Pia ; ")]
#[case("&#pia;")]
#[case("&#12pia;")]
#[case("&amp;&lt;&gt;")]
#[case("\\u43b\\u43e\\u431\\u430\\u43d")]
#[case("&#;")]
#[case("&#x;")]
#[case("&#xD800;")]
#[case("&#1114112;")]
fn test_entities_pass_through(#[case] input: &str) {
    assert_eq!(replace_unicode_entities(Some(input)).as_deref(), Some(input));
}

#[rstest]
#[case("&#1083;&#1086;&#1073;&#1072;&#1085;")]
#[case("&#x43b;&#x43e;&#x431;&#x430;&#x43d;")]
#[case("&#x43B;&#x043e;&#x0431;&#x430;&#x43D;")]
#[case("&#X43B;&#X43E;&#x431;&#1072;&#x43d;")]
fn test_entities_decode_swan(#[case] input: &str) {
    assert_eq!(replace_unicode_entities(Some(input)).as_deref(), Some("лобан"));
}

#[test]
fn test_entities_keep_surrounding_text() {
    assert_eq!(
        replace_unicode_entities(Some("Abies alba Mill. &amp; L&#246;ve, 19&#x35;3")).as_deref(),
        Some("Abies alba Mill. &amp; Löve, 1953")
    );
}

// === Name preprocessing ===

#[rstest]
#[case(" Abies &#x61;lba ", Some("Abies alba"))]
#[case("L&#246;ve", Some("Löve"))]
#[case("&#32;&#x20;", None)]
#[case("&#78;uLL", None)]
#[case("&#x5C;N ", None)]
#[case("&#12pia; ", Some("&#12pia;"))]
fn test_preprocess_name(#[case] input: &str, #[case] expected: Option<&str>) {
    assert_eq!(preprocess_name(Some(input)).as_deref(), expected);
}

#[test]
fn test_preprocess_name_uses_configured_tokens() {
    let normalizer = Normalizer::new(&NormalizerConfig {
        null_tokens: vec!["unknown".to_string()],
    });
    assert_eq!(normalizer.preprocess_name(Some("&#x55;nknown")), None);
    assert_eq!(normalizer.preprocess_name(Some("NULL")).as_deref(), Some("NULL"));
}

// === Pro parte ids ===

#[rstest]
#[case("123|456|783942|1|", vec!["123", "456", "783942", "1"])]
#[case("42", vec!["42"])]
#[case("|| 12 |||34| ", vec!["12", "34"])]
#[case("", vec![])]
#[case("|||", vec![])]
fn test_split_pro_parte_ids(#[case] input: &str, #[case] expected: Vec<&str>) {
    assert_eq!(split_pro_parte_ids(input), expected);
}

// === Config serialization ===

#[test]
fn test_config_json_roundtrip() {
    let config = NormalizerConfig {
        null_tokens: vec!["NULL".to_string(), "N/A".to_string()],
    };
    let json = serde_json::to_string(&config).unwrap();
    assert_eq!(json, r#"{"null_tokens":["NULL","N/A"]}"#);
    assert_eq!(serde_json::from_str::<NormalizerConfig>(&json).unwrap(), config);
}

#[test]
fn test_config_json_missing_field_uses_defaults() {
    let config: NormalizerConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(config, NormalizerConfig::default());
}
