pub(super) const SCROLL_TO_TOP_SCRIPT: &str = r#"window.scrollTo({ top: 0, behavior: "smooth" });"#;
