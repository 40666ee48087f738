use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_default_prompt() {
    assert_eq!(ReplConfig::default().prompt, "➜ ");
}

#[test]
fn test_prompt_override() {
    assert_eq!(
        ReplConfig::with_prompt_override(Some(">> ".to_string())).prompt,
        ">> "
    );
    assert_eq!(
        ReplConfig::with_prompt_override(None),
        ReplConfig::default()
    );
}

#[test]
fn test_empty_override_is_kept() {
    assert_eq!(
        ReplConfig::with_prompt_override(Some(String::new())).prompt,
        ""
    );
}
