use crate::commands::{CmdMessage, CmdResult, RosterPaths};
use crate::config::RosterConfig;
use crate::error::Result;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(paths: &RosterPaths, action: ConfigAction) -> Result<CmdResult> {
    let dir = &paths.config_dir;
    match action {
        ConfigAction::ShowAll => {
            let config = RosterConfig::load(dir)?;
            Ok(CmdResult::default().with_config(config))
        }
        ConfigAction::ShowKey(key) => {
            let config = RosterConfig::load(dir)?;
            let mut result = CmdResult::default();
            match config.get(&key) {
                Some(val) => result.add_message(CmdMessage::info(val)),
                None => {
                    result.add_message(CmdMessage::error(format!("Unknown config key: {}", key)))
                }
            }
            Ok(result)
        }
        ConfigAction::Set(key, value) => {
            let mut config = RosterConfig::load(dir)?;
            config.set(&key, &value)?;
            config.save(dir)?;
            let display_val = config.get(&key).unwrap_or_else(|| value.clone());
            let mut result = CmdResult::default().with_config(config);
            result.add_message(CmdMessage::success(format!("{} set to {}", key, display_val)));
            Ok(result)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::Format;
    use crate::commands::MessageLevel;
    use crate::error::RosterError;
    use tempfile::TempDir;

    fn paths(dir: &TempDir) -> RosterPaths {
        RosterPaths {
            config_dir: dir.path().to_path_buf(),
        }
    }

    #[test]
    fn set_persists_and_show_reads_back() {
        let dir = TempDir::new().unwrap();
        let paths = paths(&dir);

        let set = run(&paths, ConfigAction::Set("format".into(), "json".into())).unwrap();
        assert_eq!(set.messages[0].content, "format set to json");

        let shown = run(&paths, ConfigAction::ShowAll).unwrap();
        assert_eq!(shown.config.unwrap().format, Format::Json);

        let key = run(&paths, ConfigAction::ShowKey("format".into())).unwrap();
        assert_eq!(key.messages[0].content, "json");
    }

    #[test]
    fn bad_value_is_an_error_and_not_saved() {
        let dir = TempDir::new().unwrap();
        let paths = paths(&dir);

        let err = run(&paths, ConfigAction::Set("format".into(), "xml".into())).unwrap_err();
        assert!(matches!(err, RosterError::Config(_)));
        let err = run(&paths, ConfigAction::Set("colour".into(), "red".into())).unwrap_err();
        assert!(err.to_string().contains("Unknown config key: colour"));
        assert!(!dir.path().join("config.json").exists());
    }

    #[test]
    fn unknown_key_is_reported() {
        let dir = TempDir::new().unwrap();
        let result = run(&paths(&dir), ConfigAction::ShowKey("colour".into())).unwrap();
        assert_eq!(result.messages[0].level, MessageLevel::Error);
    }
}
