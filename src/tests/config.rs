use super::Config;
use crate::heading::HeadingLevel;

#[test]
fn test_empty_file_gives_defaults() {
    let config = Config::from_toml("");

    assert_eq!(config.panel_title, "On This Page");
    assert_eq!(config.link_class, "page-nav-link");
    assert_eq!(config.file_extensions, vec!["md".to_string()]);
    assert_eq!(config.root_level(), None);
}

#[test]
fn test_settings_override_defaults() {
    let config = Config::from_toml(
        "panel_title = \"Contents\"\nroot_level = 1\nfile_extensions = [\"md\", \"markdown\"]\n",
    );

    assert_eq!(config.panel_title, "Contents");
    assert_eq!(config.root_level(), Some(HeadingLevel::H1));
    assert_eq!(config.file_extensions.len(), 2);
    assert_eq!(config.link_class, "page-nav-link");
}

#[test]
fn test_out_of_range_root_level_is_unpinned() {
    let config = Config::from_toml("root_level = 5\n");

    assert_eq!(config.root_level(), None);
}

#[test]
fn test_invalid_toml_falls_back_to_defaults() {
    let config = Config::from_toml("panel_title = [");

    assert_eq!(config.panel_title, "On This Page");
}
