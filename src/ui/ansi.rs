// ANSI styling shared by the grid and list views.

/// Reset terminal styling to defaults.
pub const STYLE_RESET: &str = crate::csi!("0m");
/// Dark gray foreground, used for continuation markers.
pub const FG_DARK_GRAY: &str = crate::csi!("90m");
