//! IMSC sidecar caption settings.

use serde::{Deserialize, Serialize};

use crate::wire::enums::wire_enum;
use crate::wire::{FromWire, ToWire};

wire_enum! {
    /// Whether the caption track is flagged as accessibility in the HLS/CMAF
    /// parent manifest.
    pub enum ImscAccessibilitySubs {
        Disabled => "DISABLED",
        Enabled => "ENABLED",
    }
}

wire_enum! {
    /// Whether to keep font style and position from the captions source.
    pub enum ImscStylePassthrough {
        Enabled => "ENABLED",
        Disabled => "DISABLED",
    }
}

/// Settings for IMSC captions, a sidecar format kept in a file separate
/// from the video container.
///
/// Include this object when the caption destination type is `IMSC`.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImscDestinationSettings {
    accessibility: Option<ImscAccessibilitySubs>,
    style_passthrough: Option<ImscStylePassthrough>,
}

impl ImscDestinationSettings {
    pub fn new() -> Self {
        Self::default()
    }

    /// With `ENABLED` the manifest entry carries the accessibility
    /// characteristics and `AUTOSELECT="YES"`; `DISABLED` leaves them out.
    pub fn accessibility(&self) -> ImscAccessibilitySubs {
        self.accessibility.unwrap_or_default()
    }

    pub fn accessibility_has_been_set(&self) -> bool {
        self.accessibility.is_some()
    }

    pub fn set_accessibility(&mut self, value: ImscAccessibilitySubs) {
        self.accessibility = Some(value);
    }

    pub fn with_accessibility(mut self, value: ImscAccessibilitySubs) -> Self {
        self.set_accessibility(value);
        self
    }

    /// Only honored when the input captions are IMSC, SMPTE-TT or TTML.
    pub fn style_passthrough(&self) -> ImscStylePassthrough {
        self.style_passthrough.unwrap_or_default()
    }

    pub fn style_passthrough_has_been_set(&self) -> bool {
        self.style_passthrough.is_some()
    }

    pub fn set_style_passthrough(&mut self, value: ImscStylePassthrough) {
        self.style_passthrough = Some(value);
    }

    pub fn with_style_passthrough(mut self, value: ImscStylePassthrough) -> Self {
        self.set_style_passthrough(value);
        self
    }
}

impl ToWire for ImscDestinationSettings {}

impl FromWire for ImscDestinationSettings {
    const SHAPE: &'static str = "ImscDestinationSettings";
}
