//! MediaConvert caption models.
//!
//! These are nested settings shapes rather than operation requests; they
//! appear inside job specifications and are both built and parsed.

pub mod caption_destination;
pub mod imsc;

pub use caption_destination::{CaptionDestinationSettings, CaptionDestinationType};
pub use imsc::{ImscAccessibilitySubs, ImscDestinationSettings, ImscStylePassthrough};
