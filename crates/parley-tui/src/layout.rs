//! Screen layout definitions.
//!
//! The shell splits the screen into an optional menu rail on the left,
//! a content area, and a one-row status bar at the bottom.

use ratatui::layout::{Constraint, Layout, Rect};

/// Width of the menu rail when it is shown
const MENU_WIDTH: u16 = 22;

/// Screen areas for the shell layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Menu rail, present only for authenticated sessions
    pub menu: Option<Rect>,
    /// Route content area
    pub content: Rect,
    /// Status bar (location, theme, connectivity)
    pub status: Rect,
}

/// Create the shell layout.
///
/// `with_menu` reserves the left rail; without it the content spans the
/// full width.
pub fn create(area: Rect, with_menu: bool) -> ScreenAreas {
    let rows = Layout::vertical([Constraint::Min(3), Constraint::Length(1)]).split(area);

    if with_menu {
        let cols =
            Layout::horizontal([Constraint::Length(MENU_WIDTH), Constraint::Min(10)]).split(rows[0]);
        ScreenAreas {
            menu: Some(cols[0]),
            content: cols[1],
            status: rows[1],
        }
    } else {
        ScreenAreas {
            menu: None,
            content: rows[0],
            status: rows[1],
        }
    }
}

/// Centered overlay rect, used for the offline banner and the loading box
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width.saturating_sub(width)) / 2,
        area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    )
}
