//! Dashboard State
//!
//! Static figures shown on the home dashboard. This is a UI mock-up: the
//! numbers are fixed at construction and there is no ticket backend to
//! refresh them from.

/// Ticket counters shown on the stat cards
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TicketStats {
    pub open: u32,
    pub resolved: u32,
    pub pending: u32,
}

/// A recent-activity entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecentTicket {
    pub summary: String,
}

/// State backing the home dashboard
#[derive(Debug, Clone)]
pub struct DashboardState {
    stats: TicketStats,
    recent: Vec<RecentTicket>,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self {
            stats: TicketStats {
                open: 8,
                resolved: 23,
                pending: 5,
            },
            recent: Vec::new(),
        }
    }
}

impl DashboardState {
    pub fn stats(&self) -> TicketStats {
        self.stats
    }

    pub fn recent(&self) -> &[RecentTicket] {
        &self.recent
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dashboard_literals() {
        let state = DashboardState::default();
        assert_eq!(state.stats().open, 8);
        assert_eq!(state.stats().resolved, 23);
        assert_eq!(state.stats().pending, 5);
    }

    #[test]
    fn test_recent_activity_starts_empty() {
        let state = DashboardState::default();
        assert!(state.recent().is_empty());
    }
}
