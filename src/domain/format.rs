//! Sample format and file type value objects

use std::fmt;
use std::str::FromStr;

use crate::domain::error::{FileTypeParseError, SampleFormatParseError};

macro_rules! sample_formats {
    ($($variant:ident => $code:literal),+ $(,)?) => {
        /// PCM sample encodings accepted by arecord's `-f` flag.
        ///
        /// Some of these may not be available on selected hardware; arecord
        /// itself reports that case.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[allow(non_camel_case_types)]
        pub enum SampleFormat {
            $($variant,)+
        }

        impl SampleFormat {
            /// All recognized formats, in arecord's documented order
            pub const ALL: &'static [SampleFormat] = &[$(Self::$variant,)+];

            /// The format code as passed to `arecord -f`
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $code,)+
                }
            }
        }

        impl FromStr for SampleFormat {
            type Err = SampleFormatParseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let code = s.trim().to_ascii_uppercase();
                match code.as_str() {
                    $($code => Ok(Self::$variant),)+
                    _ => Err(SampleFormatParseError { input: s.to_string() }),
                }
            }
        }
    };
}

sample_formats! {
    S8 => "S8",
    U8 => "U8",
    S16_LE => "S16_LE",
    S16_BE => "S16_BE",
    U16_LE => "U16_LE",
    U16_BE => "U16_BE",
    S24_LE => "S24_LE",
    S24_BE => "S24_BE",
    U24_LE => "U24_LE",
    U24_BE => "U24_BE",
    S32_LE => "S32_LE",
    S32_BE => "S32_BE",
    U32_LE => "U32_LE",
    U32_BE => "U32_BE",
    FLOAT_LE => "FLOAT_LE",
    FLOAT_BE => "FLOAT_BE",
    FLOAT64_LE => "FLOAT64_LE",
    FLOAT64_BE => "FLOAT64_BE",
    IEC958_SUBFRAME_LE => "IEC958_SUBFRAME_LE",
    IEC958_SUBFRAME_BE => "IEC958_SUBFRAME_BE",
    MU_LAW => "MU_LAW",
    A_LAW => "A_LAW",
    IMA_ADPCM => "IMA_ADPCM",
    MPEG => "MPEG",
    GSM => "GSM",
    SPECIAL => "SPECIAL",
    S24_3LE => "S24_3LE",
    S24_3BE => "S24_3BE",
    U24_3LE => "U24_3LE",
    U24_3BE => "U24_3BE",
    S20_3LE => "S20_3LE",
    S20_3BE => "S20_3BE",
    U20_3LE => "U20_3LE",
    U20_3BE => "U20_3BE",
    S18_3LE => "S18_3LE",
    S18_3BE => "S18_3BE",
    U18_3LE => "U18_3LE",
}

impl fmt::Display for SampleFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Default for SampleFormat {
    /// 16-bit little-endian signed, the wrapper's documented default
    fn default() -> Self {
        Self::S16_LE
    }
}

/// Container formats accepted by arecord's `-t` flag.
/// The code doubles as the output file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileType {
    Voc,
    Wav,
    Raw,
    Au,
}

impl FileType {
    /// The type code as passed to `arecord -t`
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Voc => "voc",
            Self::Wav => "wav",
            Self::Raw => "raw",
            Self::Au => "au",
        }
    }

    /// The output file extension (same as the type code)
    pub const fn extension(&self) -> &'static str {
        self.as_str()
    }
}

impl FromStr for FileType {
    type Err = FileTypeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "voc" => Ok(Self::Voc),
            "wav" => Ok(Self::Wav),
            "raw" => Ok(Self::Raw),
            "au" => Ok(Self::Au),
            _ => Err(FileTypeParseError { input: s.to_string() }),
        }
    }
}

impl fmt::Display for FileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Default for FileType {
    fn default() -> Self {
        Self::Wav
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_format_codes() {
        assert_eq!(SampleFormat::S16_LE.as_str(), "S16_LE");
        assert_eq!(SampleFormat::FLOAT64_BE.as_str(), "FLOAT64_BE");
        assert_eq!(SampleFormat::S24_3LE.as_str(), "S24_3LE");
        assert_eq!(SampleFormat::MU_LAW.as_str(), "MU_LAW");
    }

    #[test]
    fn sample_format_parses_case_insensitive() {
        assert_eq!("s16_le".parse::<SampleFormat>().unwrap(), SampleFormat::S16_LE);
        assert_eq!("  U8 ".parse::<SampleFormat>().unwrap(), SampleFormat::U8);
        assert_eq!(
            "iec958_subframe_be".parse::<SampleFormat>().unwrap(),
            SampleFormat::IEC958_SUBFRAME_BE
        );
    }

    #[test]
    fn sample_format_rejects_unknown() {
        assert!("S16".parse::<SampleFormat>().is_err());
        assert!("".parse::<SampleFormat>().is_err());
        assert!("pcm".parse::<SampleFormat>().is_err());
    }

    #[test]
    fn sample_format_round_trips_all_codes() {
        for format in SampleFormat::ALL {
            assert_eq!(format.as_str().parse::<SampleFormat>().unwrap(), *format);
        }
    }

    #[test]
    fn sample_format_default_is_s16_le() {
        assert_eq!(SampleFormat::default(), SampleFormat::S16_LE);
    }

    #[test]
    fn file_type_codes_are_extensions() {
        assert_eq!(FileType::Voc.as_str(), "voc");
        assert_eq!(FileType::Wav.extension(), "wav");
        assert_eq!(FileType::Raw.extension(), "raw");
        assert_eq!(FileType::Au.as_str(), "au");
    }

    #[test]
    fn file_type_parses() {
        assert_eq!("wav".parse::<FileType>().unwrap(), FileType::Wav);
        assert_eq!("VOC".parse::<FileType>().unwrap(), FileType::Voc);
        assert!("mp3".parse::<FileType>().is_err());
    }

    #[test]
    fn file_type_default_is_wav() {
        assert_eq!(FileType::default(), FileType::Wav);
    }
}
