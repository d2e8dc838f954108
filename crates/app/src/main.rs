use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context as _;
use cards_config::{ConfigFile, SettingsSource};
use cards_core::CardDeck;
use cards_ui::Ui;
use directories::ProjectDirs;

mod logging;

fn main() {
    if let Err(err) = run() {
        eprintln!("{err:?}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let project_dirs =
        ProjectDirs::from("org", "awareness", "story-cards").context("resolve project dirs")?;

    let data_dir = project_dirs.data_dir();
    fs::create_dir_all(data_dir)
        .with_context(|| format!("create data dir {}", data_dir.display()))?;
    logging::init_logging(&data_dir.join("cards.log"))?;

    let config = ConfigFile::new(project_dirs.config_dir().join("settings.json"));
    let loaded = config.load_with_env()?;
    let mut settings = loaded.settings;
    tracing::info!(
        path = %config.path().display(),
        from_file = loaded.source == SettingsSource::File,
        direction = %settings.direction,
        "settings loaded"
    );

    let cwd = std::env::current_dir().context("get cwd")?;
    settings.asset_root = resolve_asset_root(&settings.asset_root, &cwd)
        .to_string_lossy()
        .to_string();

    let deck = CardDeck::builtin().context("load built-in cards")?;
    tracing::info!(cards = deck.len(), asset_root = %settings.asset_root, "starting");

    let mut ui = Ui::new(deck, settings);
    ui.run()
}

fn resolve_asset_root(root: &str, cwd: &Path) -> PathBuf {
    let root = PathBuf::from(root);
    if root.is_absolute() {
        root
    } else {
        cwd.join(root)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_asset_root_joins_cwd() {
        let cwd = Path::new("/srv/app");
        assert_eq!(resolve_asset_root("public", cwd), cwd.join("public"));
    }

    #[test]
    fn absolute_asset_root_is_kept() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let root = dir.path().to_string_lossy().to_string();
        assert_eq!(
            resolve_asset_root(&root, Path::new("/elsewhere")),
            dir.path()
        );
        Ok(())
    }
}
