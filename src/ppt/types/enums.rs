//! Closed enumerations stored as integer codes.
//!
//! A code outside the enumeration is corrupt input.

use crate::common::error::{PptError, Result};
use crate::ppt::records::RecordReader;

trait ReadCode: Sized {
    fn read_code(reader: &mut RecordReader<'_>) -> Result<Self>;
}

impl ReadCode for u8 {
    fn read_code(reader: &mut RecordReader<'_>) -> Result<Self> {
        reader.read_u8()
    }
}

impl ReadCode for u16 {
    fn read_code(reader: &mut RecordReader<'_>) -> Result<Self> {
        reader.read_u16()
    }
}

impl ReadCode for u32 {
    fn read_code(reader: &mut RecordReader<'_>) -> Result<Self> {
        reader.read_u32()
    }
}

macro_rules! code_enum {
    (
        $(#[$meta:meta])*
        $name:ident: $repr:ident {
            $( $(#[$vmeta:meta])* $variant:ident = $code:literal, )*
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[repr($repr)]
        pub enum $name {
            $( $(#[$vmeta])* $variant = $code, )*
        }

        impl $name {
            /// Map a raw code; `offset` locates it for error reporting.
            pub fn from_code(code: $repr, offset: usize) -> Result<Self> {
                match code {
                    $( $code => Ok(Self::$variant), )*
                    _ => Err(PptError::corrupted(
                        offset,
                        format!(concat!(stringify!($name), " value {:#x} is out of range"), code),
                    )),
                }
            }

            /// Read and map one code.
            pub fn decode(reader: &mut RecordReader<'_>) -> Result<Self> {
                let offset = reader.position();
                Self::from_code(<$repr as ReadCode>::read_code(reader)?, offset)
            }

            #[inline]
            pub const fn code(self) -> $repr {
                self as $repr
            }
        }
    };
}

code_enum! {
    /// Intended output medium of the slides.
    SlideSize: u16 {
        OnScreen = 0x0000,
        LetterSizedPaper = 0x0001,
        A4Paper = 0x0002,
        Slide35mm = 0x0003,
        Overhead = 0x0004,
        Banner = 0x0005,
        Custom = 0x0006,
    }
}

code_enum! {
    /// Role of a text body.
    TextType: u32 {
        Title = 0x0000_0000,
        Body = 0x0000_0001,
        Notes = 0x0000_0002,
        Other = 0x0000_0004,
        CenterBody = 0x0000_0005,
        CenterTitle = 0x0000_0006,
        HalfBody = 0x0000_0007,
        QuarterBody = 0x0000_0008,
    }
}

code_enum! {
    /// Slide layout hint.
    SlideLayout: u32 {
        TitleSlide = 0x0000_0000,
        TitleBody = 0x0000_0001,
        MasterTitle = 0x0000_0002,
        TitleOnly = 0x0000_0007,
        TwoColumns = 0x0000_0008,
        TwoRows = 0x0000_0009,
        ColumnTwoRows = 0x0000_000A,
        TwoRowsColumn = 0x0000_000B,
        TwoColumnsRow = 0x0000_000D,
        FourObjects = 0x0000_000E,
        BigObject = 0x0000_000F,
        Blank = 0x0000_0010,
        VerticalTitleBody = 0x0000_0011,
        VerticalTwoRows = 0x0000_0012,
    }
}

code_enum! {
    /// Placeholder kind in a slide layout.
    Placeholder: u8 {
        None = 0x00,
        MasterTitle = 0x01,
        MasterBody = 0x02,
        MasterCenterTitle = 0x03,
        MasterSubTitle = 0x04,
        MasterNotesSlideImage = 0x05,
        MasterNotesBody = 0x06,
        MasterDate = 0x07,
        MasterSlideNumber = 0x08,
        MasterFooter = 0x09,
        MasterHeader = 0x0A,
        NotesSlideImage = 0x0B,
        NotesBody = 0x0C,
        Title = 0x0D,
        Body = 0x0E,
        CenterTitle = 0x0F,
        SubTitle = 0x10,
        VerticalTextTitle = 0x11,
        VerticalTextBody = 0x12,
        Object = 0x13,
        Graph = 0x14,
        Table = 0x15,
        ClipArt = 0x16,
        OrganizationChart = 0x17,
        MediaClip = 0x18,
        VerticalObject = 0x19,
        Picture = 0x1A,
    }
}

code_enum! {
    /// What happens when an interactive element is triggered.
    InteractiveInfoAction: u8 {
        NoAction = 0x00,
        Macro = 0x01,
        RunProgram = 0x02,
        Jump = 0x03,
        Hyperlink = 0x04,
        Ole = 0x05,
        Media = 0x06,
        CustomShow = 0x07,
    }
}

code_enum! {
    /// Target of a jump action.
    InteractiveInfoJump: u8 {
        NoJump = 0x00,
        NextSlide = 0x01,
        PreviousSlide = 0x02,
        FirstSlide = 0x03,
        LastSlide = 0x04,
        LastSlideViewed = 0x05,
        EndShow = 0x06,
    }
}

code_enum! {
    /// Kind of hyperlink target.
    LinkTo: u8 {
        NextSlide = 0x00,
        PreviousSlide = 0x01,
        FirstSlide = 0x02,
        LastSlide = 0x03,
        CustomShow = 0x04,
        SlideNumber = 0x05,
        Url = 0x06,
        OtherPresentation = 0x07,
        OtherFile = 0x08,
        Null = 0xFF,
    }
}
