//! Horizontal popup placement.
//!
//! A popup normally sits flush with its trigger's left edge. When that would
//! run past the right edge of the document body, the popup is shifted left
//! by the overflow amount so it stays inside the container.

/// Assumed footprint used instead of the measured width when a popup is
/// wider than this. Tunable via `TooltipConfig::popup.clamp_width`.
pub const DEFAULT_CLAMP_WIDTH: f64 = 200.0;

/// Compute the left offset for a popup.
///
/// `trigger_left` is the trigger's offset from the document's left edge,
/// `popup_width` the popup's measured width (post-insertion), and
/// `container_width` the document body's total width. Popups wider than
/// `clamp_width` are clamped as if they were exactly `clamp_width` wide.
///
/// The result can go negative when the container is narrower than the
/// effective footprint; callers get that value as-is.
#[must_use]
pub fn clamp_left(
    trigger_left: f64,
    popup_width: f64,
    container_width: f64,
    clamp_width: f64,
) -> f64 {
    let footprint = if popup_width > clamp_width {
        clamp_width
    } else {
        popup_width
    };
    if trigger_left + footprint > container_width {
        trigger_left - ((trigger_left + footprint) - container_width)
    } else {
        trigger_left
    }
}
