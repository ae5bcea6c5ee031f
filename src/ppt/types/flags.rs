//! Flag words.
//!
//! Reserved bits are kept as read (`from_bits_retain`) and never validated.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Which parts of the master a slide or notes page follows
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct SlideFlags: u16 {
        /// Master shapes are shown
        const MASTER_OBJECTS = 0x0001;
        /// Colour scheme comes from the master
        const MASTER_SCHEME = 0x0002;
        /// Background comes from the master
        const MASTER_BACKGROUND = 0x0004;
    }
}

bitflags! {
    /// Flags of a `SlidePersistAtom`
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct SlidePersistFlags: u32 {
        /// Slide is collapsed in outline view
        const SHOULD_COLLAPSE = 0x0000_0002;
        /// Slide carries text outside placeholders
        const NON_OUTLINE_DATA = 0x0000_0004;
    }
}

bitflags! {
    /// Which header and footer elements are visible
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct HeadersFootersFlags: u16 {
        const HAS_DATE = 0x0001;
        /// Date is the current date
        const HAS_TODAY_DATE = 0x0002;
        /// Date is the user supplied string
        const HAS_USER_DATE = 0x0004;
        const HAS_SLIDE_NUMBER = 0x0008;
        const HAS_HEADER = 0x0010;
        const HAS_FOOTER = 0x0020;
    }
}
