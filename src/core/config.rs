use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{error, success, warning};
use std::path::Path;
use std::process::Command;

pub struct ConfigLogic;

impl ConfigLogic {
    /// Print the effective configuration (file values plus CLI overrides).
    pub fn print(cfg: &Config) -> AppResult<()> {
        let yaml = serde_yaml::to_string(cfg).map_err(|e| AppError::Config(e.to_string()))?;
        println!("📄 Current configuration ({}):\n", Config::config_file().display());
        println!("{}", yaml);
        Ok(())
    }

    fn default_editor() -> String {
        std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| {
                if cfg!(target_os = "windows") {
                    "notepad".to_string()
                } else {
                    "nano".to_string()
                }
            })
    }

    fn run_editor(editor: &str, path: &Path) -> bool {
        matches!(Command::new(editor).arg(path).status(), Ok(s) if s.success())
    }

    /// Open the configuration file in `editor`, falling back to the default
    /// editor when the requested one fails.
    pub fn edit(path: &Path, editor: &Option<String>) -> AppResult<()> {
        let default_editor = Self::default_editor();
        let editor_to_use = editor.clone().unwrap_or_else(|| default_editor.clone());

        if Self::run_editor(&editor_to_use, path) {
            success(format!(
                "Configuration file edited successfully using '{}'",
                editor_to_use
            ));
            return Ok(());
        }

        warning(format!(
            "Editor '{}' not available, falling back to '{}'",
            editor_to_use, default_editor
        ));

        if Self::run_editor(&default_editor, path) {
            success(format!(
                "Configuration file edited successfully using fallback '{}'",
                default_editor
            ));
            Ok(())
        } else {
            error(format!(
                "Failed to edit configuration file using fallback '{}'",
                default_editor
            ));
            Err(AppError::Config(format!("no usable editor for {}", path.display())))
        }
    }
}
