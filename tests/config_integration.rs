use std::path::PathBuf;

use mdnotes::config::{ConfigFlags, ModifierKey, load_config_flags, parse_flag_tokens};

#[test]
fn test_config_file_parsing_ignores_comments_and_blank_lines() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(".mdnotesrc");
    let content = r#"
# comment
--modifier ctrl

--max-notes 40

--log-file=mdnotes.log
"#;
    std::fs::write(&path, content).unwrap();

    let flags = load_config_flags(&path).unwrap();
    assert_eq!(flags.modifier, Some(ModifierKey::Control));
    assert_eq!(flags.max_notes, Some(40));
    assert_eq!(flags.log_file, Some(PathBuf::from("mdnotes.log")));
}

#[test]
fn test_cli_flags_override_file_flags() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(".mdnotesrc");
    let content = "--modifier ctrl\n--max-note-bytes 1024\n--log-file file.log\n";
    std::fs::write(&path, content).unwrap();

    let file_flags = load_config_flags(&path).unwrap();
    let cli_args = vec![
        "mdnotes".to_string(),
        "--modifier".to_string(),
        "super".to_string(),
        "--max-notes".to_string(),
        "5".to_string(),
    ];
    let cli_flags = parse_flag_tokens(&cli_args);

    let effective = file_flags.union(&cli_flags);
    assert_eq!(effective.modifier, Some(ModifierKey::Super), "cli should override modifier");
    assert_eq!(effective.max_notes, Some(5), "cli flags should be applied");
    assert_eq!(effective.max_note_bytes, Some(1024), "file flags should remain");
    assert_eq!(
        effective.log_file,
        Some(PathBuf::from("file.log")),
        "file config should be preserved when CLI does not override"
    );
}

#[test]
fn test_local_overrides_global() {
    let global = ConfigFlags {
        modifier: Some(ModifierKey::Super),
        max_notes: Some(10),
        ..ConfigFlags::default()
    };
    let local = ConfigFlags {
        max_notes: Some(30),
        ..ConfigFlags::default()
    };
    let merged = global.union(&local);
    assert_eq!(merged.modifier, Some(ModifierKey::Super));
    assert_eq!(merged.max_notes, Some(30));
}

#[test]
fn test_missing_config_file_is_empty() {
    let dir = tempfile::tempdir().unwrap();
    let flags = load_config_flags(&dir.path().join("absent")).unwrap();
    assert_eq!(flags, ConfigFlags::default());
}
