use anyhow::Result;
use clap::{crate_version, App as Cli, Arg};
use folio_tui::app::App;
use folio_tui::config::{Config, FilePreferenceStore, PreferenceStore, THEME_KEY};
use folio_tui::content::Content;
use folio_tui::state::ThemePreference;
use std::path::PathBuf;

#[tokio::main]
async fn main() -> Result<()> {
    let matches = Cli::new("folio-tui")
        .version(crate_version!())
        .about("A personal portfolio page for the terminal")
        .arg(
            Arg::with_name("config")
                .short("c")
                .long("config")
                .value_name("DIR")
                .help("Use a custom configuration directory")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("content")
                .long("content")
                .value_name("FILE")
                .help("Load page content from a YAML file")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("reset-theme")
                .long("reset-theme")
                .help("Forget the saved theme and start in light mode"),
        )
        .get_matches();

    let mut config = Config::new();
    config.load(matches.value_of("config"))?;
    if let Some(path) = matches.value_of("content") {
        config.content_path = Some(PathBuf::from(path));
    }

    if matches.is_present("reset-theme") {
        let mut store = FilePreferenceStore::new(config.preferences_path()?);
        store.write(THEME_KEY, ThemePreference::Light.as_str())?;
    }

    let content = match &config.content_path {
        Some(path) => Content::load(path)?,
        None => Content::default(),
    };

    App::start(config, content).await
}
