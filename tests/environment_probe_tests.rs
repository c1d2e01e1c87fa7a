use std::path::PathBuf;

use litechart::render::{
    DisplayTarget, EVCXR_RUNTIME_ENV, EnvProbe, EnvironmentProbe, FixedProbe, LIBRARY_PATH_ENV,
    LibrarySource, OUTPUT_DIR_ENV, RenderConfig, TARGET_ENV,
};

fn plain_shell(_: &str) -> Option<String> {
    None
}

fn evcxr_kernel(key: &str) -> Option<String> {
    (key == EVCXR_RUNTIME_ENV).then(|| "1".to_owned())
}

fn forced_browser_in_kernel(key: &str) -> Option<String> {
    match key {
        TARGET_ENV => Some("Browser".to_owned()),
        EVCXR_RUNTIME_ENV => Some("1".to_owned()),
        _ => None,
    }
}

fn bogus_override_in_kernel(key: &str) -> Option<String> {
    match key {
        TARGET_ENV => Some("hologram".to_owned()),
        EVCXR_RUNTIME_ENV => Some("1".to_owned()),
        _ => None,
    }
}

#[test]
fn plain_process_renders_standalone() {
    assert_eq!(
        EnvProbe::with_lookup(plain_shell).detect(),
        DisplayTarget::Standalone
    );
}

#[test]
fn evcxr_kernel_renders_inline() {
    assert_eq!(
        EnvProbe::with_lookup(evcxr_kernel).detect(),
        DisplayTarget::Notebook
    );
}

#[test]
fn target_override_wins_over_detection() {
    assert_eq!(
        EnvProbe::with_lookup(forced_browser_in_kernel).detect(),
        DisplayTarget::Standalone
    );
}

#[test]
fn unknown_override_falls_back_to_detection() {
    assert_eq!(
        EnvProbe::with_lookup(bogus_override_in_kernel).detect(),
        DisplayTarget::Notebook
    );
}

#[test]
fn fixed_probe_is_a_drop_in_strategy() {
    let probes: Vec<Box<dyn EnvironmentProbe>> = vec![
        Box::new(FixedProbe(DisplayTarget::Notebook)),
        Box::new(EnvProbe::with_lookup(plain_shell)),
    ];
    let targets: Vec<DisplayTarget> = probes.iter().map(|probe| probe.detect()).collect();
    assert_eq!(
        targets,
        vec![DisplayTarget::Notebook, DisplayTarget::Standalone]
    );
}

#[test]
fn display_target_parses_aliases() {
    assert_eq!("jupyter".parse::<DisplayTarget>().ok(), Some(DisplayTarget::Notebook));
    assert_eq!(" HTML ".parse::<DisplayTarget>().ok(), Some(DisplayTarget::Standalone));
    assert!("tv".parse::<DisplayTarget>().is_err());
    assert_eq!(DisplayTarget::Notebook.to_string(), "notebook");
}

#[test]
fn render_config_env_overrides() {
    let config = RenderConfig::default().with_overrides_from(|key| match key {
        LIBRARY_PATH_ENV => Some("/opt/lwc/lightweight-charts.js".to_owned()),
        OUTPUT_DIR_ENV => Some("/tmp/litechart-out".to_owned()),
        _ => None,
    });
    assert_eq!(
        config.library,
        Some(LibrarySource::File(PathBuf::from(
            "/opt/lwc/lightweight-charts.js"
        )))
    );
    assert_eq!(config.output_dir_or_temp(), PathBuf::from("/tmp/litechart-out"));
}

#[test]
fn render_config_loads_from_json() {
    let config = RenderConfig::from_json_str(
        r#"{"title":"Report","padding_px":0,"library":{"url":"https://example.com/lwc.js"},"open_browser":false}"#,
    )
    .expect("config");
    assert_eq!(config.title, "Report");
    assert_eq!(config.padding_px, 0);
    assert_eq!(config.page_background, "#1e1e1e");
    assert_eq!(
        config.library,
        Some(LibrarySource::Url("https://example.com/lwc.js".to_owned()))
    );
    assert!(!config.open_browser);
    assert!(RenderConfig::from_json_str("[1, 2]").is_err());
}
