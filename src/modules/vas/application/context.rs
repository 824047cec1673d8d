use serde::Serialize;

/// Toolbar actions the host shell renders for the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PageAction {
    Save,
    Delete,
}

impl PageAction {
    pub fn title_key(&self) -> &'static str {
        match self {
            PageAction::Save => "button.save",
            PageAction::Delete => "button.delete",
        }
    }
}

/// How the grid lays out rows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum GridMode {
    Grid,
    List,
}

impl GridMode {
    pub fn for_device(is_mobile: bool) -> Self {
        if is_mobile {
            GridMode::List
        } else {
            GridMode::Grid
        }
    }
}

/// What the page offers to the surrounding shell
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageContext {
    pub title_key: &'static str,
    pub actions: Vec<PageAction>,
    /// Sheet name used when exporting
    pub exportable: &'static str,
    pub importable: bool,
    pub grid_mode: GridMode,
}
