//! Fixed plot geometry for the rendered workflow canvas.
//!
//! The rendering layer treats these as abstract canvas units; the engine
//! makes no assumption about pixels beyond emitting two coordinates per node.

/// Horizontal distance between consecutive topological levels.
pub const COLUMN_WIDTH: u32 = 280;

/// Vertical distance between consecutive rows inside one stage band.
pub const ROW_HEIGHT: u32 = 120;

/// Vertical gap separating consecutive stage bands.
pub const GROUP_GAP: u32 = 80;
