use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        PostError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(PostError::decode("x").to_string().contains("decode error:"));
    assert!(PostError::render("x").to_string().contains("render error:"));
    assert!(PostError::export("x").to_string().contains("export error:"));
    assert!(
        PostError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = PostError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn json_errors_map_to_serde_variant() {
    let err: PostError = serde_json::from_str::<serde_json::Value>("{")
        .unwrap_err()
        .into();
    assert!(matches!(err, PostError::Serde(_)));
}
