/// Layout category recomputed from the terminal width on every frame.
/// Keeping this a pure function of width means a resize simply takes
/// effect on the next draw, with no listener state to manage.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LayoutMode {
    Mobile,
    Tablet,
    #[default]
    Desktop,
}

const TABLET_MIN_COLS: u16 = 80;
const DESKTOP_MIN_COLS: u16 = 120;

pub fn layout_mode(width: u16) -> LayoutMode {
    if width < TABLET_MIN_COLS {
        LayoutMode::Mobile
    } else if width < DESKTOP_MIN_COLS {
        LayoutMode::Tablet
    } else {
        LayoutMode::Desktop
    }
}

impl LayoutMode {
    pub fn is_mobile(self) -> bool {
        self == LayoutMode::Mobile
    }
}
