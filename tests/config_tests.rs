use std::io::Write;
use std::time::Duration;

use carousel::config::Configuration;

#[test]
fn parse_kebab_case_config() {
    let yaml = r#"
slide-count: 4
keyboard-control: true
auto-scroll: true
auto-scroll-interval: 1500ms
"#;
    let cfg: Configuration = serde_yaml::from_str(yaml).unwrap();
    assert_eq!(cfg.slide_count, 4);
    assert!(cfg.keyboard_control);
    assert!(cfg.auto_scroll);
    assert_eq!(cfg.auto_scroll_interval, Duration::from_millis(1500));
}

#[test]
fn omitted_fields_take_defaults() {
    let cfg: Configuration = serde_yaml::from_str("slide-count: 7\n").unwrap();
    assert_eq!(cfg.slide_count, 7);
    assert!(!cfg.keyboard_control);
    assert!(!cfg.auto_scroll);
    assert_eq!(cfg.auto_scroll_interval, Duration::from_millis(3000));
}

#[test]
fn interval_accepts_humantime_seconds() {
    let yaml = "auto-scroll-interval: 3s\n";
    let cfg: Configuration = serde_yaml::from_str(yaml).unwrap();
    assert_eq!(cfg.auto_scroll_interval, Duration::from_secs(3));
}

#[test]
fn validation_rejects_zero_slides() {
    let cfg: Configuration = serde_yaml::from_str("slide-count: 0\n").unwrap();
    let err = cfg.validated().unwrap_err();
    assert!(err.to_string().contains("slide-count"));
}

#[test]
fn validation_rejects_zero_interval() {
    let yaml = "slide-count: 3\nauto-scroll-interval: 0s\n";
    let cfg: Configuration = serde_yaml::from_str(yaml).unwrap();
    let err = cfg.validated().unwrap_err();
    assert!(err.to_string().contains("auto-scroll-interval"));
}

#[test]
fn load_from_yaml_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "slide-count: 5").unwrap();
    writeln!(file, "keyboard-control: true").unwrap();

    let cfg = Configuration::from_yaml_file(file.path())
        .unwrap()
        .validated()
        .unwrap();
    assert_eq!(cfg.slide_count, 5);
    assert!(cfg.keyboard_control);
}
