/// Gap between a tooltip's bottom edge and its anchor's top edge.
pub const TOOLTIP_GAP: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

/// Position for a tooltip hovering above its anchor: horizontally centered,
/// bottom edge `TOOLTIP_GAP` above the anchor's top.
pub fn tooltip_position(anchor: Rect, tip: Size) -> (f64, f64) {
    let left = anchor.left + anchor.width / 2.0 - tip.width / 2.0;
    let top = anchor.top - tip.height - TOOLTIP_GAP;
    (left, top)
}
