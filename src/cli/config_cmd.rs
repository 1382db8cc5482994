//! Config subcommand handling

use crate::application::ports::ConfigStore;
use crate::domain::config::AppConfig;
use crate::domain::error::ConfigError;
use crate::domain::format::{FileType, SampleFormat};
use crate::domain::session::SessionOptions;

use super::args::{ConfigAction, VALID_CONFIG_KEYS};
use super::presenter::Presenter;

/// Handle the `config` subcommand
pub async fn handle_config_command(
    action: ConfigAction,
    store: &impl ConfigStore,
    presenter: &Presenter,
) -> Result<(), ConfigError> {
    match action {
        ConfigAction::Init => {
            store.init().await?;
            presenter.success(&format!("Created {}", store.path().display()));
            Ok(())
        }
        ConfigAction::Set { key, value } => {
            let mut config = store.load().await?;
            set_key(&mut config, &key, &value)?;
            store.save(&config).await?;
            presenter.success(&format!("Set {} = {}", key, value));
            Ok(())
        }
        ConfigAction::Get { key } => {
            let config = store.load().await?;
            let value = get_key(&config, &key)?;
            presenter.output(&value.unwrap_or_else(|| "(not set)".to_string()));
            Ok(())
        }
        ConfigAction::List => {
            let config = store.load().await?;
            for key in VALID_CONFIG_KEYS {
                let value = get_key(&config, key)?;
                presenter.key_value(key, &value.unwrap_or_else(|| "(not set)".to_string()));
            }
            Ok(())
        }
        ConfigAction::Path => {
            presenter.output(&store.path().display().to_string());
            Ok(())
        }
    }
}

fn unknown_key(key: &str) -> ConfigError {
    ConfigError::ValidationError {
        key: key.to_string(),
        message: format!("Unknown key. Valid keys are: {}", VALID_CONFIG_KEYS.join(", ")),
    }
}

fn set_key(config: &mut AppConfig, key: &str, value: &str) -> Result<(), ConfigError> {
    match key {
        "device" => config.device = Some(value.to_string()),
        "filename" => config.filename = Some(value.to_string()),
        "file_type" => {
            let file_type: FileType = value.parse().map_err(|e: crate::domain::error::FileTypeParseError| {
                ConfigError::ValidationError {
                    key: key.to_string(),
                    message: e.to_string(),
                }
            })?;
            config.file_type = Some(file_type.as_str().to_string());
        }
        "channels" => {
            let channels = parse_number(key, value)?;
            let probe = SessionOptions {
                channels,
                ..Default::default()
            };
            probe.validate().map_err(|e| ConfigError::ValidationError {
                key: key.to_string(),
                message: e.to_string(),
            })?;
            config.channels = Some(channels);
        }
        "format" => {
            let format: SampleFormat = value.parse().map_err(
                |e: crate::domain::error::SampleFormatParseError| ConfigError::ValidationError {
                    key: key.to_string(),
                    message: e.to_string(),
                },
            )?;
            config.format = Some(format.as_str().to_string());
        }
        "rate" => {
            let rate = parse_number(key, value)?;
            let probe = SessionOptions {
                rate,
                ..Default::default()
            };
            probe.validate().map_err(|e| ConfigError::ValidationError {
                key: key.to_string(),
                message: e.to_string(),
            })?;
            config.rate = Some(rate);
        }
        _ => return Err(unknown_key(key)),
    }
    Ok(())
}

fn get_key(config: &AppConfig, key: &str) -> Result<Option<String>, ConfigError> {
    match key {
        "device" => Ok(config.device.clone()),
        "filename" => Ok(config.filename.clone()),
        "file_type" => Ok(config.file_type.clone()),
        "channels" => Ok(config.channels.map(|n| n.to_string())),
        "format" => Ok(config.format.clone()),
        "rate" => Ok(config.rate.map(|n| n.to_string())),
        _ => Err(unknown_key(key)),
    }
}

fn parse_number(key: &str, value: &str) -> Result<u32, ConfigError> {
    value.parse().map_err(|_| ConfigError::ValidationError {
        key: key.to_string(),
        message: format!("expected an integer, got {:?}", value),
    })
}
