//! Caption destination settings and the destination type selector.

use serde::{Deserialize, Serialize};

use super::imsc::ImscDestinationSettings;
use crate::wire::enums::wire_enum;
use crate::wire::{FromWire, ToWire};

wire_enum! {
    /// Caption format written for an output.
    pub enum CaptionDestinationType {
        BurnIn => "BURN_IN",
        DvbSub => "DVB_SUB",
        Embedded => "EMBEDDED",
        EmbeddedPlusScte20 => "EMBEDDED_PLUS_SCTE20",
        Imsc => "IMSC",
        Scte20PlusEmbedded => "SCTE20_PLUS_EMBEDDED",
        Scc => "SCC",
        Srt => "SRT",
        Smi => "SMI",
        Teletext => "TELETEXT",
        Ttml => "TTML",
        Webvtt => "WEBVTT",
    }
}

/// Destination settings for one caption output.
///
/// Only the settings object matching `destinationType` is read by the
/// service; the others are ignored.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptionDestinationSettings {
    destination_type: Option<CaptionDestinationType>,
    imsc_destination_settings: Option<ImscDestinationSettings>,
}

impl CaptionDestinationSettings {
    pub fn new() -> Self {
        Self::default()
    }

    /// The caption format written to the output. `Unknown` when unset.
    pub fn destination_type(&self) -> CaptionDestinationType {
        self.destination_type.unwrap_or_default()
    }

    pub fn destination_type_has_been_set(&self) -> bool {
        self.destination_type.is_some()
    }

    pub fn set_destination_type(&mut self, value: CaptionDestinationType) {
        self.destination_type = Some(value);
    }

    pub fn with_destination_type(mut self, value: CaptionDestinationType) -> Self {
        self.set_destination_type(value);
        self
    }

    /// IMSC-specific settings, used when the destination type is `IMSC`.
    pub fn imsc_destination_settings(&self) -> Option<&ImscDestinationSettings> {
        self.imsc_destination_settings.as_ref()
    }

    pub fn imsc_destination_settings_has_been_set(&self) -> bool {
        self.imsc_destination_settings.is_some()
    }

    pub fn set_imsc_destination_settings(&mut self, value: ImscDestinationSettings) {
        self.imsc_destination_settings = Some(value);
    }

    pub fn with_imsc_destination_settings(mut self, value: ImscDestinationSettings) -> Self {
        self.set_imsc_destination_settings(value);
        self
    }
}

impl ToWire for CaptionDestinationSettings {}

impl FromWire for CaptionDestinationSettings {
    const SHAPE: &'static str = "CaptionDestinationSettings";
}
