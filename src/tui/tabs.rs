/// The dashboard's content panels, in tab-bar order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tab {
    Tasks,
    Notes,
    Calendar,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Tasks, Tab::Notes, Tab::Calendar];

    pub fn label(self) -> &'static str {
        match self {
            Tab::Tasks => "Tasks",
            Tab::Notes => "Notes",
            Tab::Calendar => "Calendar",
        }
    }

    /// Stable identifier ("tasks", "notes", "calendar")
    pub fn key(self) -> &'static str {
        match self {
            Tab::Tasks => "tasks",
            Tab::Notes => "notes",
            Tab::Calendar => "calendar",
        }
    }

    pub fn from_key(key: &str) -> Option<Tab> {
        Tab::ALL.into_iter().find(|t| t.key() == key)
    }
}

/// Visibility of one panel and the active state of its button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabPanel {
    pub tab: Tab,
    pub visible: bool,
    pub button_active: bool,
}

/// Keeps exactly one panel visible
#[derive(Debug, Clone)]
pub struct TabController {
    panels: Vec<TabPanel>,
}

impl Default for TabController {
    fn default() -> Self {
        TabController::new()
    }
}

impl TabController {
    /// All panels start hidden, then the task list is activated
    pub fn new() -> Self {
        let mut tabs = TabController {
            panels: Tab::ALL
                .into_iter()
                .map(|tab| TabPanel {
                    tab,
                    visible: false,
                    button_active: false,
                })
                .collect(),
        };
        tabs.activate(Tab::Tasks);
        tabs
    }

    /// Hide every panel and reset every button, then show `tab`
    pub fn activate(&mut self, tab: Tab) {
        for panel in &mut self.panels {
            panel.visible = false;
            panel.button_active = false;
        }
        if let Some(panel) = self.panels.iter_mut().find(|p| p.tab == tab) {
            panel.visible = true;
            panel.button_active = true;
        }
    }

    pub fn active(&self) -> Tab {
        self.panels
            .iter()
            .find(|p| p.visible)
            .map_or(Tab::Tasks, |p| p.tab)
    }

    pub fn panels(&self) -> &[TabPanel] {
        &self.panels
    }

    pub fn is_visible(&self, tab: Tab) -> bool {
        self.panels.iter().any(|p| p.tab == tab && p.visible)
    }

    pub fn next(&mut self) {
        let idx = self.active_index();
        self.activate(Tab::ALL[(idx + 1) % Tab::ALL.len()]);
    }

    pub fn prev(&mut self) {
        let idx = self.active_index();
        self.activate(Tab::ALL[(idx + Tab::ALL.len() - 1) % Tab::ALL.len()]);
    }

    fn active_index(&self) -> usize {
        let active = self.active();
        Tab::ALL.iter().position(|t| *t == active).unwrap_or(0)
    }
}
