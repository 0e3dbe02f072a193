use std::fmt::{Display, Formatter};

use tracing::trace;

use super::viewport_size::ViewportSizeClass;

/// Pixel offset used as the height of the decorative page background.
#[derive(Clone, PartialEq, Debug)]
pub struct BgHeight(String);

impl Default for BgHeight {
    fn default() -> Self {
        Self(String::from("0"))
    }
}

impl BgHeight {
    /// `"{top + padding}px"`. Whole values print without a fraction (`136px`), the same
    /// string a JS template literal gives for layout-sized numbers.
    pub fn from_container_top(top: f64, size_class: ViewportSizeClass) -> Self {
        Self(format!("{}px", top + size_class.bg_padding()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for BgHeight {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Clone, PartialEq, Debug, Default)]
pub struct Backdrop {
    pub color: Option<String>,
    pub image: Option<String>,
}

impl Backdrop {
    pub fn new(color: Option<String>, image: Option<String>) -> Self {
        Self { color, image }
    }

    pub fn is_configured(&self) -> bool {
        let set = |v: &Option<String>| v.as_deref().map(|v| !v.is_empty()).unwrap_or(false);
        set(&self.color) || set(&self.image)
    }
}

/// Identity of an injected action element. Two renders of the same element share an id.
pub type ActionId = usize;

/// Values whose change re-runs the height measurement.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct LayoutDeps {
    pub title: String,
    pub description: Option<String>,
    pub action: Option<ActionId>,
}

#[derive(Clone, Debug, Default)]
pub struct BgHeightState {
    height: BgHeight,
    committed: Option<(LayoutDeps, bool)>,
    recomputations: u64,
}

impl BgHeightState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn height(&self) -> &BgHeight {
        &self.height
    }

    pub fn recomputations(&self) -> u64 {
        self.recomputations
    }

    /// Called once per committed layout pass.
    ///
    /// Returns the new height when it was recomputed. The size class is only read,
    /// a size class change alone never re-runs the measurement.
    pub fn on_layout(
        &mut self,
        deps: LayoutDeps,
        backdrop: &Backdrop,
        container_top: Option<f64>,
        size_class: ViewportSizeClass,
    ) -> Option<&BgHeight> {
        let attached = container_top.is_some();
        let unchanged = self
            .committed
            .as_ref()
            .map(|(prev_deps, prev_attached)| *prev_deps == deps && *prev_attached == attached)
            .unwrap_or(false);
        if unchanged {
            return None;
        }
        self.committed = Some((deps, attached));

        if !backdrop.is_configured() {
            return None;
        }
        let top = container_top?;

        self.height = BgHeight::from_container_top(top, size_class);
        self.recomputations += 1;
        trace!("bg height: recomputed {} ({:?})", self.height, size_class);

        Some(&self.height)
    }
}
