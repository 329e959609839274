use super::*;

#[test]
fn display_prefix_is_stable() {
    assert!(
        PanegridError::validation("x")
            .to_string()
            .contains("validation error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = PanegridError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
