use strum::{AsRefStr, Display, EnumIter, EnumString, IntoEnumIterator};

/// Named viewport-width thresholds, smallest first.
///
/// Values are CSS pixels for the usual 30/48/62/80/96em scale at a 16px root font size.
#[derive(
    Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Display, AsRefStr, EnumString, EnumIter,
)]
#[strum(serialize_all = "lowercase")]
pub enum Breakpoint {
    Base,
    Sm,
    Md,
    Lg,
    Xl,
    #[strum(serialize = "2xl")]
    Xxl,
}

impl Breakpoint {
    pub const fn min_width(&self) -> f64 {
        match self {
            Breakpoint::Base => 0.0,
            Breakpoint::Sm => 480.0,
            Breakpoint::Md => 768.0,
            Breakpoint::Lg => 992.0,
            Breakpoint::Xl => 1280.0,
            Breakpoint::Xxl => 1536.0,
        }
    }

    /// Largest breakpoint whose threshold is reached by `width`.
    pub fn from_width(width: f64) -> Self {
        Breakpoint::iter()
            .filter(|breakpoint| width >= breakpoint.min_width())
            .last()
            .unwrap_or(Breakpoint::Base)
    }
}

/// A value that changes at breakpoints, mobile first.
///
/// ```
/// use flavor_state::misc::breakpoint::{Breakpoint, BreakpointValue};
///
/// let padding = BreakpointValue::new(4).at(Breakpoint::Sm, 6).at(Breakpoint::Lg, 10);
/// assert_eq!(*padding.resolve(320.0), 4);
/// assert_eq!(*padding.resolve(800.0), 6);
/// assert_eq!(*padding.resolve(1200.0), 10);
/// ```
#[derive(Clone, PartialEq, Debug)]
pub struct BreakpointValue<T> {
    base: T,
    overrides: Vec<(Breakpoint, T)>,
}

impl<T> BreakpointValue<T> {
    pub fn new(base: T) -> Self {
        Self {
            base,
            overrides: Vec::new(),
        }
    }

    pub fn at(mut self, breakpoint: Breakpoint, value: T) -> Self {
        if breakpoint == Breakpoint::Base {
            self.base = value;
            return self;
        }
        match self.overrides.binary_search_by(|(b, _)| b.cmp(&breakpoint)) {
            Ok(i) => self.overrides[i].1 = value,
            Err(i) => self.overrides.insert(i, (breakpoint, value)),
        }
        self
    }

    pub fn resolve(&self, width: f64) -> &T {
        self.resolve_breakpoint(Breakpoint::from_width(width))
    }

    pub fn resolve_breakpoint(&self, current: Breakpoint) -> &T {
        self.overrides
            .iter()
            .rev()
            .find(|(breakpoint, _)| *breakpoint <= current)
            .map(|(_, value)| value)
            .unwrap_or(&self.base)
    }
}
