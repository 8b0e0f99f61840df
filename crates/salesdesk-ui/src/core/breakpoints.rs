//! Responsive breakpoints for the console layout.

/// Named width band with an inclusive minimum and optional maximum.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Breakpoint {
    /// Short name used in CSS class names.
    pub name: &'static str,
    /// Inclusive lower bound in CSS pixels.
    pub min_width: u16,
    /// Inclusive upper bound in CSS pixels.
    pub max_width: Option<u16>,
}

/// Phones.
pub const XS: Breakpoint = Breakpoint {
    name: "xs",
    min_width: 0,
    max_width: Some(599),
};
/// Small tablets.
pub const SM: Breakpoint = Breakpoint {
    name: "sm",
    min_width: 600,
    max_width: Some(899),
};
/// Tablets in landscape and small laptops.
pub const MD: Breakpoint = Breakpoint {
    name: "md",
    min_width: 900,
    max_width: Some(1199),
};
/// Desktops.
pub const LG: Breakpoint = Breakpoint {
    name: "lg",
    min_width: 1200,
    max_width: Some(1535),
};
/// Wide screens.
pub const XL: Breakpoint = Breakpoint {
    name: "xl",
    min_width: 1536,
    max_width: None,
};

/// Ordered breakpoints, narrowest first.
pub const BREAKPOINTS: [Breakpoint; 5] = [XS, SM, MD, LG, XL];

/// Find the breakpoint containing `width`.
#[must_use]
pub fn for_width(width: u16) -> Breakpoint {
    BREAKPOINTS
        .iter()
        .copied()
        .find(|bp| width >= bp.min_width && bp.max_width.is_none_or(|max| width <= max))
        .unwrap_or(XL)
}

/// Below `md` the navigation drawer overlays content instead of docking.
#[must_use]
pub const fn is_mobile(bp: Breakpoint) -> bool {
    bp.min_width < MD.min_width
}

/// Initial drawer state for a viewport width: docked open on desktop, closed on mobile.
#[must_use]
pub fn drawer_open_by_default(width: u16) -> bool {
    !is_mobile(for_width(width))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn widths_map_to_bands() {
        assert_eq!(for_width(0).name, XS.name);
        assert_eq!(for_width(600).name, SM.name);
        assert_eq!(for_width(1199).name, MD.name);
        assert_eq!(for_width(4000).name, XL.name);
    }

    #[test]
    fn drawer_starts_open_from_md() {
        assert!(!drawer_open_by_default(375));
        assert!(!drawer_open_by_default(899));
        assert!(drawer_open_by_default(900));
        assert!(drawer_open_by_default(1440));
    }
}
