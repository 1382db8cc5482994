//! Recording session: validated configuration and command assembly

use crate::domain::device::AudioDevice;
use crate::domain::duration::RecordDuration;
use crate::domain::error::ValidationError;
use crate::domain::format::{FileType, SampleFormat};

/// Name the external recorder is invoked by
pub const AREC_EXEC: &str = "arecord";

/// Valid channel counts
pub const CHANNELS_MIN: u32 = 1;
pub const CHANNELS_MAX: u32 = 32;

/// Initial values for a session. `Default` gives the documented defaults:
/// "test", WAV, 1 channel, S16_LE, 44100 Hz, blocking, combined channels,
/// no filename templating, no rotation.
#[derive(Debug, Clone)]
pub struct SessionOptions {
    pub filename: String,
    pub file_type: FileType,
    pub channels: u32,
    pub sample_format: SampleFormat,
    pub rate: u32,
    pub non_block: bool,
    pub separate_channels: bool,
    pub use_strftime: bool,
    pub max_file_time: Option<u32>,
}

impl SessionOptions {
    /// Check the range-constrained fields without building a session
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_channels(self.channels)?;
        validate_rate(self.rate)
    }
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            filename: "test".to_string(),
            file_type: FileType::Wav,
            channels: 1,
            sample_format: SampleFormat::S16_LE,
            rate: 44100,
            non_block: false,
            separate_channels: false,
            use_strftime: false,
            max_file_time: None,
        }
    }
}

/// Mutable recording configuration bound to one capture device.
///
/// Every range-constrained setter validates its domain and leaves the
/// session unchanged on violation. [`command`](Self::command) is a pure
/// view over the current fields; each `record` run through
/// [`Recorder`](crate::application::Recorder) re-reads them, so mutating
/// the session between runs changes the next invocation.
#[derive(Debug, Clone)]
pub struct RecordingSession {
    filename: String,
    file_type: FileType,
    channels: u32,
    sample_format: SampleFormat,
    rate: u32,
    device: AudioDevice,
    non_block: bool,
    separate_channels: bool,
    use_strftime: bool,
    max_file_time: Option<u32>,
    duration: Option<RecordDuration>,
}

impl RecordingSession {
    /// Create a session for `device` with the given initial options.
    /// Channels and rate are validated here, the rest is enforced by type.
    pub fn new(device: AudioDevice, options: SessionOptions) -> Result<Self, ValidationError> {
        options.validate()?;

        Ok(Self {
            filename: options.filename,
            file_type: options.file_type,
            channels: options.channels,
            sample_format: options.sample_format,
            rate: options.rate,
            device,
            non_block: options.non_block,
            separate_channels: options.separate_channels,
            use_strftime: options.use_strftime,
            max_file_time: options.max_file_time,
            duration: None,
        })
    }

    /// Create a session for `device` with all defaults
    pub fn with_defaults(device: AudioDevice) -> Self {
        // defaults are in-range, so this cannot fail
        Self {
            filename: "test".to_string(),
            file_type: FileType::Wav,
            channels: 1,
            sample_format: SampleFormat::S16_LE,
            rate: 44100,
            device,
            non_block: false,
            separate_channels: false,
            use_strftime: false,
            max_file_time: None,
            duration: None,
        }
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn set_filename(&mut self, filename: impl Into<String>) {
        self.filename = filename.into();
    }

    pub fn file_type(&self) -> FileType {
        self.file_type
    }

    pub fn set_file_type(&mut self, file_type: FileType) {
        self.file_type = file_type;
    }

    pub fn channels(&self) -> u32 {
        self.channels
    }

    /// Valid values are 1 through 32
    pub fn set_channels(&mut self, channels: u32) -> Result<(), ValidationError> {
        validate_channels(channels)?;
        self.channels = channels;
        Ok(())
    }

    pub fn sample_format(&self) -> SampleFormat {
        self.sample_format
    }

    pub fn set_sample_format(&mut self, format: SampleFormat) {
        self.sample_format = format;
    }

    pub fn rate(&self) -> u32 {
        self.rate
    }

    /// Valid values are 2000 through 192000 Hz; values below 300 are taken
    /// as the rate in kilohertz
    pub fn set_rate(&mut self, rate: u32) -> Result<(), ValidationError> {
        validate_rate(rate)?;
        self.rate = rate;
        Ok(())
    }

    pub fn device(&self) -> &AudioDevice {
        &self.device
    }

    pub fn set_device(&mut self, device: AudioDevice) {
        self.device = device;
    }

    pub fn non_block(&self) -> bool {
        self.non_block
    }

    pub fn set_non_block(&mut self, non_block: bool) {
        self.non_block = non_block;
    }

    pub fn separate_channels(&self) -> bool {
        self.separate_channels
    }

    pub fn set_separate_channels(&mut self, separate_channels: bool) {
        self.separate_channels = separate_channels;
    }

    pub fn use_strftime(&self) -> bool {
        self.use_strftime
    }

    pub fn set_use_strftime(&mut self, use_strftime: bool) {
        self.use_strftime = use_strftime;
    }

    pub fn max_file_time(&self) -> Option<u32> {
        self.max_file_time
    }

    pub fn set_max_file_time(&mut self, secs: Option<u32>) {
        self.max_file_time = secs;
    }

    /// The duration requested by the most recent `record` call, if any
    pub fn duration(&self) -> Option<RecordDuration> {
        self.duration
    }

    pub fn set_duration(&mut self, duration: RecordDuration) {
        self.duration = Some(duration);
    }

    /// The output file name the next recording will write to
    pub fn output_file(&self) -> String {
        format!("{}.{}", self.filename, self.file_type.extension())
    }

    /// Assemble the full argv for the current configuration.
    ///
    /// Flag order is fixed: `-t -c -f -r -D [-N] [-I] [--use-strftime]
    /// [--max-file-time] [-d]`, then the output filename. Boolean flags
    /// emit the bare token; unset options emit nothing. Given unchanged
    /// configuration the result is identical across calls.
    pub fn command(&self) -> Vec<String> {
        let mut argv = vec![
            AREC_EXEC.to_string(),
            "-t".to_string(),
            self.file_type.as_str().to_string(),
            "-c".to_string(),
            self.channels.to_string(),
            "-f".to_string(),
            self.sample_format.as_str().to_string(),
            "-r".to_string(),
            self.rate.to_string(),
            "-D".to_string(),
            self.device.hw_id(),
        ];

        if self.non_block {
            argv.push("-N".to_string());
        }
        if self.separate_channels {
            argv.push("-I".to_string());
        }
        if self.use_strftime {
            argv.push("--use-strftime".to_string());
        }
        if let Some(secs) = self.max_file_time {
            argv.push("--max-file-time".to_string());
            argv.push(secs.to_string());
        }
        if let Some(value) = self.duration.as_ref().and_then(RecordDuration::flag_value) {
            argv.push("-d".to_string());
            argv.push(value);
        }

        argv.push(self.output_file());
        argv
    }
}

fn validate_channels(channels: u32) -> Result<(), ValidationError> {
    if (CHANNELS_MIN..=CHANNELS_MAX).contains(&channels) {
        Ok(())
    } else {
        Err(ValidationError::Channels(channels))
    }
}

fn validate_rate(rate: u32) -> Result<(), ValidationError> {
    if (1..300).contains(&rate) || (2000..=192000).contains(&rate) {
        Ok(())
    } else {
        Err(ValidationError::Rate(rate))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::device::AudioDevice;

    fn test_device() -> AudioDevice {
        AudioDevice::parse(
            "card 0: PCH [HDA Intel PCH], device 0: ALC3246 Analog [ALC3246 Analog]",
            Vec::new(),
        )
        .unwrap()
    }

    fn usb_device() -> AudioDevice {
        AudioDevice::parse(
            "card 1: USB [USB Audio], device 0: USB Audio [USB Audio]",
            Vec::new(),
        )
        .unwrap()
    }

    #[test]
    fn default_command_is_stable_and_ordered() {
        let session = RecordingSession::with_defaults(test_device());
        let expected: Vec<String> = [
            "arecord", "-t", "wav", "-c", "1", "-f", "S16_LE", "-r", "44100", "-D", "hw:0,0",
            "test.wav",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect();
        assert_eq!(session.command(), expected);
        // deterministic across calls
        assert_eq!(session.command(), expected);
    }

    #[test]
    fn all_valid_channel_counts_are_accepted() {
        let mut session = RecordingSession::with_defaults(test_device());
        for channels in 1..=32 {
            session.set_channels(channels).unwrap();
            let argv = session.command();
            let at = argv.iter().position(|a| a == "-c").unwrap();
            assert_eq!(argv[at + 1], channels.to_string());
        }
    }

    #[test]
    fn out_of_range_channels_leave_state_unchanged() {
        let mut session = RecordingSession::with_defaults(test_device());
        session.set_channels(2).unwrap();
        assert_eq!(session.set_channels(0), Err(ValidationError::Channels(0)));
        assert_eq!(session.set_channels(33), Err(ValidationError::Channels(33)));
        assert_eq!(session.channels(), 2);
    }

    #[test]
    fn rate_domain_boundaries() {
        let mut session = RecordingSession::with_defaults(test_device());
        for rate in [1, 44, 299, 2000, 48000, 192000] {
            session.set_rate(rate).unwrap();
            assert_eq!(session.rate(), rate);
        }
        for rate in [0, 300, 1999, 192001, 500_000] {
            assert_eq!(session.set_rate(rate), Err(ValidationError::Rate(rate)));
        }
        // last accepted value survives the rejections
        assert_eq!(session.rate(), 192000);
    }

    #[test]
    fn voc_session_command_shape() {
        let device = test_device();
        let mut session = RecordingSession::new(
            device,
            SessionOptions {
                filename: "example".to_string(),
                file_type: FileType::Voc,
                channels: 2,
                ..Default::default()
            },
        )
        .unwrap();
        session.set_duration(RecordDuration::Secs(3));

        let argv = session.command();
        assert_eq!(argv.last().unwrap(), "example.voc");
        let at = argv.iter().position(|a| a == "-c").unwrap();
        assert_eq!(argv[at + 1], "2");
        let at = argv.iter().position(|a| a == "-d").unwrap();
        assert_eq!(argv[at + 1], "3");
    }

    #[test]
    fn boolean_flags_emit_bare_tokens() {
        let mut session = RecordingSession::with_defaults(test_device());
        session.set_non_block(true);
        session.set_separate_channels(true);
        session.set_use_strftime(true);
        session.set_max_file_time(Some(3600));

        let argv = session.command();
        let tail: Vec<&str> = argv.iter().map(String::as_str).collect();
        assert_eq!(
            &tail[11..],
            &["-N", "-I", "--use-strftime", "--max-file-time", "3600", "test.wav"]
        );
    }

    #[test]
    fn no_limit_duration_omits_flag() {
        let mut session = RecordingSession::with_defaults(test_device());
        session.set_duration(RecordDuration::NoLimit);
        assert!(!session.command().contains(&"-d".to_string()));
    }

    #[test]
    fn filename_change_only_moves_trailing_argument() {
        let mut session = RecordingSession::with_defaults(test_device());
        session.set_duration(RecordDuration::Secs(3));
        let first = session.command();

        session.set_filename("another_example");
        let second = session.command();

        assert_eq!(first.len(), second.len());
        assert_eq!(&first[..first.len() - 1], &second[..second.len() - 1]);
        assert_eq!(first.last().unwrap(), "test.wav");
        assert_eq!(second.last().unwrap(), "another_example.wav");
    }

    #[test]
    fn every_field_round_trips() {
        let mut session = RecordingSession::with_defaults(test_device());

        session.set_filename("take1");
        session.set_file_type(FileType::Au);
        session.set_channels(8).unwrap();
        session.set_sample_format(SampleFormat::FLOAT_LE);
        session.set_rate(96000).unwrap();
        session.set_device(usb_device());
        session.set_non_block(true);
        session.set_separate_channels(true);
        session.set_use_strftime(true);
        session.set_max_file_time(Some(120));

        assert_eq!(session.filename(), "take1");
        assert_eq!(session.file_type(), FileType::Au);
        assert_eq!(session.channels(), 8);
        assert_eq!(session.sample_format(), SampleFormat::FLOAT_LE);
        assert_eq!(session.rate(), 96000);
        assert_eq!(session.device().hw_id(), "hw:1,0");
        assert!(session.non_block());
        assert!(session.separate_channels());
        assert!(session.use_strftime());
        assert_eq!(session.max_file_time(), Some(120));
    }

    #[test]
    fn construction_rejects_invalid_options() {
        let options = SessionOptions {
            channels: 40,
            ..Default::default()
        };
        assert!(matches!(
            RecordingSession::new(test_device(), options),
            Err(ValidationError::Channels(40))
        ));
    }

    #[test]
    fn device_selection_flag_uses_derived_hw_id() {
        let mut session = RecordingSession::with_defaults(test_device());
        session.set_device(usb_device());
        let argv = session.command();
        let at = argv.iter().position(|a| a == "-D").unwrap();
        assert_eq!(argv[at + 1], "hw:1,0");
    }
}
