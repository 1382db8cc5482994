//! Capture device value object and listing parser

use std::fmt;

use crate::domain::error::FormatError;

/// One capture device entry from an `arecord -l` listing.
///
/// Immutable once parsed. The addressable `hw:<card>,<device>` identifier
/// is always derived from the numeric ids, never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioDevice {
    full_name: String,
    card_id: u32,
    card_name: String,
    dev_id: u32,
    dev_name: String,
    subdevices: Vec<String>,
}

impl AudioDevice {
    /// Parse one header line of the form
    /// `card 0: PCH [HDA Intel PCH], device 0: ALC3246 Analog [ALC3246 Analog]`
    /// together with the subdevice lines that followed it.
    pub fn parse(header: &str, subdevices: Vec<String>) -> Result<Self, FormatError> {
        let (card_info, dev_info) = header
            .split_once(", ")
            .ok_or_else(|| FormatError::MalformedHeader(header.to_string()))?;

        let (_, card_id, card_name) = split_segment(card_info)
            .ok_or_else(|| FormatError::MalformedHeader(header.to_string()))?;
        let (_, dev_id, dev_name) = split_segment(dev_info)
            .ok_or_else(|| FormatError::MalformedHeader(header.to_string()))?;

        let card_id = card_id
            .parse()
            .map_err(|_| FormatError::NonNumericId(header.to_string()))?;
        let dev_id = dev_id
            .parse()
            .map_err(|_| FormatError::NonNumericId(header.to_string()))?;

        Ok(Self {
            full_name: header.to_string(),
            card_id,
            card_name: card_name.to_string(),
            dev_id,
            dev_name: dev_name.to_string(),
            subdevices,
        })
    }

    /// The card name; this is what [`name`](Self::name)-based lookup matches on
    pub fn card_name(&self) -> &str {
        &self.card_name
    }

    /// Alias for the card name
    pub fn name(&self) -> &str {
        &self.card_name
    }

    pub fn dev_name(&self) -> &str {
        &self.dev_name
    }

    pub fn card_id(&self) -> u32 {
        self.card_id
    }

    pub fn dev_id(&self) -> u32 {
        self.dev_id
    }

    /// The addressable identifier passed to `arecord -D`, derived from the
    /// card and device ids
    pub fn hw_id(&self) -> String {
        format!("hw:{},{}", self.card_id, self.dev_id)
    }

    /// The raw header line this record was parsed from
    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    /// Raw subdevice description lines, in listing order
    pub fn subdevices(&self) -> &[String] {
        &self.subdevices
    }
}

impl fmt::Display for AudioDevice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "AudioDevice(name:{}, id:{}, subdevices:{:?})",
            self.card_name,
            self.hw_id(),
            self.subdevices
        )
    }
}

/// Split a header segment like `card 0: PCH [HDA Intel PCH]` into its
/// keyword, id and name tokens. The split happens at the first `": "` or
/// `" "` boundary, twice, so names containing spaces survive intact.
fn split_segment(segment: &str) -> Option<(&str, &str, &str)> {
    let (keyword, rest) = split_field(segment)?;
    let (id, name) = split_field(rest)?;
    Some((keyword, id, name))
}

/// Split at the earliest `": "` or `" "`, whichever comes first
fn split_field(s: &str) -> Option<(&str, &str)> {
    let colon = s.find(": ");
    let space = s.find(' ');
    match (colon, space) {
        (Some(c), Some(sp)) if c < sp => Some((&s[..c], &s[c + 2..])),
        (_, Some(sp)) => Some((&s[..sp], &s[sp + 1..])),
        (Some(c), None) => Some((&s[..c], &s[c + 2..])),
        (None, None) => None,
    }
}

/// Parse a full `arecord -l` listing into device records.
///
/// Everything before the first line containing `card` is banner text and
/// skipped. A `card` line opens a new group; each following line up to the
/// next `card` line is trimmed and kept as a subdevice description. A
/// listing with no `card` line parses to an empty vec.
pub fn parse_listing(output: &str) -> Result<Vec<AudioDevice>, FormatError> {
    let mut devices = Vec::new();
    let mut current: Option<(String, Vec<String>)> = None;

    for line in output.lines() {
        if line.contains("card") {
            if let Some((header, subdevices)) = current.take() {
                devices.push(AudioDevice::parse(&header, subdevices)?);
            }
            current = Some((line.to_string(), Vec::new()));
        } else if let Some((_, subdevices)) = current.as_mut() {
            subdevices.push(line.trim().to_string());
        }
    }

    if let Some((header, subdevices)) = current {
        devices.push(AudioDevice::parse(&header, subdevices)?);
    }

    Ok(devices)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_DEVICE_LISTING: &str = "\
**** List of CAPTURE Hardware Devices ****
card 0: PCH [HDA Intel PCH], device 0: ALC3246 Analog [ALC3246 Analog]
  Subdevices: 1/1
  Subdevice #0: subdevice #0
card 1: USB [USB Audio], device 0: USB Audio [USB Audio]
  Subdevices: 1/1
  Subdevice #0: subdevice #0
";

    #[test]
    fn parses_two_device_listing() {
        let devices = parse_listing(TWO_DEVICE_LISTING).unwrap();
        assert_eq!(devices.len(), 2);

        assert_eq!(devices[0].hw_id(), "hw:0,0");
        assert_eq!(devices[0].card_name(), "PCH [HDA Intel PCH]");
        assert_eq!(devices[0].dev_name(), "ALC3246 Analog [ALC3246 Analog]");
        assert_eq!(devices[0].card_id(), 0);
        assert_eq!(devices[0].dev_id(), 0);

        assert_eq!(devices[1].hw_id(), "hw:1,0");
        assert_eq!(devices[1].card_name(), "USB [USB Audio]");
    }

    #[test]
    fn subdevice_lines_are_trimmed_and_ordered() {
        let devices = parse_listing(TWO_DEVICE_LISTING).unwrap();
        assert_eq!(
            devices[0].subdevices(),
            &["Subdevices: 1/1".to_string(), "Subdevice #0: subdevice #0".to_string()]
        );
    }

    #[test]
    fn banner_only_listing_is_empty() {
        let devices = parse_listing("**** List of CAPTURE Hardware Devices ****\n").unwrap();
        assert!(devices.is_empty());
    }

    #[test]
    fn empty_output_is_empty() {
        assert_eq!(parse_listing("").unwrap(), Vec::new());
    }

    #[test]
    fn preserves_names_containing_spaces() {
        let device = AudioDevice::parse(
            "card 2: Gen [HD-Audio Generic], device 1: ALC887-VD Alt Analog [ALC887-VD Alt Analog]",
            Vec::new(),
        )
        .unwrap();
        assert_eq!(device.card_name(), "Gen [HD-Audio Generic]");
        assert_eq!(device.dev_name(), "ALC887-VD Alt Analog [ALC887-VD Alt Analog]");
        assert_eq!(device.hw_id(), "hw:2,1");
    }

    #[test]
    fn header_without_device_segment_fails() {
        let err = AudioDevice::parse("card 0: PCH [HDA Intel PCH]", Vec::new()).unwrap_err();
        assert!(matches!(err, FormatError::MalformedHeader(_)));
    }

    #[test]
    fn header_with_non_numeric_id_fails() {
        let err = AudioDevice::parse(
            "card x: PCH [HDA Intel PCH], device 0: Analog [Analog]",
            Vec::new(),
        )
        .unwrap_err();
        assert!(matches!(err, FormatError::NonNumericId(_)));
    }

    #[test]
    fn full_name_keeps_raw_header() {
        let header = "card 0: PCH [HDA Intel PCH], device 0: ALC3246 Analog [ALC3246 Analog]";
        let device = AudioDevice::parse(header, Vec::new()).unwrap();
        assert_eq!(device.full_name(), header);
    }

    #[test]
    fn display_includes_name_and_hw_id() {
        let device = AudioDevice::parse(
            "card 1: USB [USB Audio], device 0: USB Audio [USB Audio]",
            Vec::new(),
        )
        .unwrap();
        let shown = device.to_string();
        assert!(shown.contains("USB [USB Audio]"));
        assert!(shown.contains("hw:1,0"));
    }
}
