//! Config subcommands handler

use anyhow::{Context, Result};

use blocklog::theme::current_theme;
use blocklog::Config;

/// Show the effective configuration as TOML.
#[cfg(not(tarpaulin_include))]
pub fn handle_show() -> Result<()> {
    let config = Config::load()?;
    let theme = current_theme();
    println!(
        "{}",
        theme.secondary_text(&format!("# {}", Config::config_path()?.display()))
    );
    println!("{}", theme.primary_text(&render(&config)?));
    Ok(())
}

/// Open configuration file in the default editor.
///
/// Uses $EDITOR environment variable (defaults to 'vi').
#[cfg(not(tarpaulin_include))]
pub fn handle_edit() -> Result<()> {
    let config_path = Config::config_path()?;
    let theme = current_theme();

    if !config_path.exists() {
        Config::default().save()?;
    }

    let editor = std::env::var("EDITOR").unwrap_or_else(|_| "vi".to_string());

    println!(
        "{}",
        theme.primary_text(&format!(
            "Opening {} with {}",
            config_path.display(),
            editor
        ))
    );

    let status = std::process::Command::new(&editor)
        .arg(&config_path)
        .status()
        .with_context(|| format!("Failed to open editor: {}", editor))?;
    if !status.success() {
        anyhow::bail!("Editor exited with {}", status);
    }

    // Catch mistakes now rather than on the next run.
    Config::load_from(&config_path)?;
    Ok(())
}

/// Serialize a config the way `config show` prints it.
pub fn render(config: &Config) -> Result<String> {
    toml::to_string_pretty(config).context("Failed to serialize config")
}
