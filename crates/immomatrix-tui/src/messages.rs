//! TUI message types (Elm Messages).

/// The three top-level views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Dashboard,
    Vacancy,
    Roi,
}

impl View {
    /// All views in tab order.
    pub const ALL: [View; 3] = [View::Dashboard, View::Vacancy, View::Roi];

    /// Tab title.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            View::Dashboard => "Dashboard",
            View::Vacancy => "Cost-of-Vacancy",
            View::Roi => "ROI & Funnel",
        }
    }

    /// Position in tab order.
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            View::Dashboard => 0,
            View::Vacancy => 1,
            View::Roi => 2,
        }
    }

    /// Next view, wrapping around.
    #[must_use]
    pub fn next(self) -> View {
        View::ALL[(self.index() + 1) % View::ALL.len()]
    }

    /// Previous view, wrapping around.
    #[must_use]
    pub fn prev(self) -> View {
        View::ALL[(self.index() + View::ALL.len() - 1) % View::ALL.len()]
    }
}

/// Messages that drive the TUI update cycle.
#[derive(Debug, Clone)]
pub enum TuiMessage {
    /// Log line.
    Log(String),
    /// Draft text arrived; `fallback` marks a substituted message.
    DraftReady { text: String, fallback: bool },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_cycle() {
        assert_eq!(View::Dashboard.next(), View::Vacancy);
        assert_eq!(View::Roi.next(), View::Dashboard);
        assert_eq!(View::Dashboard.prev(), View::Roi);
        assert_eq!(View::default(), View::Dashboard);
    }

    #[test]
    fn view_index_matches_order() {
        for (i, view) in View::ALL.iter().enumerate() {
            assert_eq!(view.index(), i);
        }
    }
}
