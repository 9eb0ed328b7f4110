use std::path::PathBuf;

use spudpad::config::{ConfigFlags, load_config_flags, parse_flag_tokens};

#[test]
fn test_config_file_parsing_ignores_comments_and_blank_lines() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(".spudpadrc");
    let content = r#"
# comment
--wrap


--log-file=spud.log
"#;
    std::fs::write(&path, content).unwrap();

    let flags = load_config_flags(&path).unwrap();
    assert!(flags.wrap);
    assert!(!flags.internal_clipboard);
    assert_eq!(flags.log_file, Some(PathBuf::from("spud.log")));
}

#[test]
fn test_cli_flags_override_file_flags() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(".spudpadrc");
    let content = "--wrap\n--log-file file.log\n";
    std::fs::write(&path, content).unwrap();

    let file_flags = load_config_flags(&path).unwrap();
    let cli_args = vec![
        "spudpad".to_string(),
        "--log-file".to_string(),
        "cli.log".to_string(),
        "--internal-clipboard".to_string(),
    ];
    let cli_flags = parse_flag_tokens(&cli_args);

    let effective = file_flags.union(&cli_flags);
    assert!(effective.wrap, "file flags should remain enabled");
    assert!(effective.internal_clipboard, "cli flags should be applied");
    assert_eq!(
        effective.log_file,
        Some(PathBuf::from("cli.log")),
        "cli should override the log file"
    );
}

#[test]
fn test_file_log_path_kept_when_cli_is_silent() {
    let file = ConfigFlags {
        log_file: Some(PathBuf::from("file.log")),
        ..ConfigFlags::default()
    };
    let cli = ConfigFlags {
        wrap: true,
        ..ConfigFlags::default()
    };
    let merged = file.union(&cli);
    assert!(merged.wrap);
    assert_eq!(merged.log_file, Some(PathBuf::from("file.log")));
}
