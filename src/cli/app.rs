//! Subcommand runners for the CLI

use std::process::ExitCode;

use crate::application::{DeviceCatalog, Recorder};
use crate::domain::config::AppConfig;
use crate::domain::device::AudioDevice;
use crate::domain::duration::RecordDuration;
use crate::domain::format::{FileType, SampleFormat};
use crate::domain::session::{RecordingSession, SessionOptions};
use crate::infrastructure::{TokioProcessRunner, XdgConfigStore};

use super::args::RecordArgs;
use super::presenter::Presenter;
use crate::application::ports::ConfigStore;

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_USAGE_ERROR: u8 = 2;

/// Load the stored config and merge CLI-supplied values over it
pub async fn load_merged_config(cli_config: AppConfig, presenter: &Presenter) -> AppConfig {
    let store = XdgConfigStore::new();
    let file_config = match store.load().await {
        Ok(config) => config,
        Err(e) => {
            presenter.warn(&format!("Ignoring config file: {}", e));
            AppConfig::empty()
        }
    };
    file_config.merge(cli_config)
}

/// `alsa-rec list` - print the parsed capture device catalog
pub async fn run_list(presenter: &Presenter) -> ExitCode {
    let catalog = DeviceCatalog::new(TokioProcessRunner::new());
    match catalog.list_devices().await {
        Ok(devices) if devices.is_empty() => {
            presenter.warn("No capture devices found");
            ExitCode::from(EXIT_SUCCESS)
        }
        Ok(devices) => {
            for device in &devices {
                presenter.device_entry(
                    &device.hw_id(),
                    device.card_name(),
                    device.dev_name(),
                    device.subdevices(),
                );
            }
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => {
            presenter.error(&e.to_string());
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// `alsa-rec version` - print the arecord version banner verbatim
pub async fn run_version(presenter: &Presenter) -> ExitCode {
    let catalog = DeviceCatalog::new(TokioProcessRunner::new());
    match catalog.version().await {
        Ok(banner) => {
            presenter.output(banner.trim_end());
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => {
            presenter.error(&e.to_string());
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// `alsa-rec record` - resolve the device, build a session, and record
pub async fn run_record(args: RecordArgs, presenter: &mut Presenter) -> ExitCode {
    let cli_config = AppConfig {
        device: args.device.clone(),
        filename: args.output.clone(),
        file_type: args.file_type.clone(),
        channels: args.channels,
        format: args.format.clone(),
        rate: args.rate,
    };
    let config = load_merged_config(cli_config, presenter).await;

    // Typed fields are parsed strictly here: a junk value from the CLI or
    // the config file is a usage error, not a silent fallback.
    let file_type = match parse_or_default::<FileType>(config.file_type.as_deref()) {
        Ok(file_type) => file_type,
        Err(message) => {
            presenter.error(&message);
            return ExitCode::from(EXIT_USAGE_ERROR);
        }
    };
    let sample_format = match parse_or_default::<SampleFormat>(config.format.as_deref()) {
        Ok(format) => format,
        Err(message) => {
            presenter.error(&message);
            return ExitCode::from(EXIT_USAGE_ERROR);
        }
    };

    let options = SessionOptions {
        filename: config.filename_or_default().to_string(),
        file_type,
        channels: config.channels_or_default(),
        sample_format,
        rate: config.rate_or_default(),
        non_block: args.non_block,
        separate_channels: args.separate_channels,
        use_strftime: args.use_strftime,
        max_file_time: args.max_file_time,
    };

    // Validate ranges before touching arecord at all
    if let Err(e) = options.validate() {
        presenter.error(&e.to_string());
        return ExitCode::from(EXIT_USAGE_ERROR);
    }

    let device = match resolve_device(config.device.as_deref(), presenter).await {
        Ok(device) => device,
        Err(code) => return code,
    };

    let mut session = match RecordingSession::new(device, options) {
        Ok(session) => session,
        Err(e) => {
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_USAGE_ERROR);
        }
    };

    let duration = RecordDuration::from(args.duration);
    presenter.start_spinner(&format!(
        "Recording to {} ({})",
        session.output_file(),
        duration
    ));

    let recorder = Recorder::new(TokioProcessRunner::new());
    match recorder.record(&mut session, duration).await {
        Ok(()) => {
            presenter.spinner_success(&format!("Recorded {}", session.output_file()));
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => {
            presenter.spinner_fail(&e.to_string());
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// Pick the configured device by card name, or the first listed device
async fn resolve_device(
    name: Option<&str>,
    presenter: &Presenter,
) -> Result<AudioDevice, ExitCode> {
    let catalog = DeviceCatalog::new(TokioProcessRunner::new());
    match name {
        Some(name) => match catalog.find_device_by_name(name).await {
            Ok(Some(device)) => Ok(device),
            Ok(None) => {
                presenter.error(&format!("There is no device matching the name {}", name));
                Err(ExitCode::from(EXIT_ERROR))
            }
            Err(e) => {
                presenter.error(&e.to_string());
                Err(ExitCode::from(EXIT_ERROR))
            }
        },
        None => match catalog.list_devices().await {
            Ok(devices) => devices.into_iter().next().ok_or_else(|| {
                presenter.error("No capture devices found");
                ExitCode::from(EXIT_ERROR)
            }),
            Err(e) => {
                presenter.error(&e.to_string());
                Err(ExitCode::from(EXIT_ERROR))
            }
        },
    }
}

fn parse_or_default<T>(value: Option<&str>) -> Result<T, String>
where
    T: Default + std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match value {
        Some(s) => s.parse().map_err(|e: T::Err| e.to_string()),
        None => Ok(T::default()),
    }
}
