use super::breakpoint::{Breakpoint, BreakpointValue};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ViewportSizeClass {
    Narrow,
    Wide,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct LogoSize {
    pub size: u32,
    pub icon_size: u32,
}

impl ViewportSizeClass {
    pub fn breakpoints() -> BreakpointValue<ViewportSizeClass> {
        BreakpointValue::new(ViewportSizeClass::Narrow).at(Breakpoint::Sm, ViewportSizeClass::Wide)
    }

    pub fn from_width(width: f64) -> Self {
        *Self::breakpoints().resolve(width)
    }

    pub fn is_narrow(&self) -> bool {
        *self == ViewportSizeClass::Narrow
    }

    pub const fn logo_size(&self) -> LogoSize {
        match self {
            ViewportSizeClass::Narrow => LogoSize {
                size: 48,
                icon_size: 20,
            },
            ViewportSizeClass::Wide => LogoSize {
                size: 56,
                icon_size: 28,
            },
        }
    }

    /// Visual padding added below the measured content top.
    pub const fn bg_padding(&self) -> f64 {
        match self {
            ViewportSizeClass::Narrow => 32.0,
            ViewportSizeClass::Wide => 36.0,
        }
    }
}
