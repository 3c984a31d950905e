// Inline styles and CSS class mapping for the page-level elements.
// Kept free of web-sys so it can be exercised from host tests.

use burst_core::{PressSignal, CLASS_LONG_PRESS, CLASS_PRESSED, SURFACE_Z_INDEX};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClassOp {
    Add(&'static str),
    Remove(&'static str),
}

/// Body class change for a press signal.
#[inline]
pub fn class_op(signal: PressSignal) -> ClassOp {
    match signal {
        PressSignal::Pressed => ClassOp::Add(CLASS_PRESSED),
        PressSignal::LongPressStarted => ClassOp::Add(CLASS_LONG_PRESS),
        PressSignal::LongPressEnded => ClassOp::Remove(CLASS_LONG_PRESS),
        PressSignal::Released => ClassOp::Remove(CLASS_PRESSED),
    }
}

/// Full-viewport overlay that lets clicks fall through to the page.
pub fn surface_style() -> String {
    format!(
        "width: 100%; height: 100%; top: 0; left: 0; z-index: {}; position: fixed; pointer-events: none;",
        SURFACE_Z_INDEX
    )
}

#[inline]
pub fn px(v: f64) -> String {
    format!("{}px", v)
}
