//! Root layout computation for the dashboard.

use ratatui::layout::{Constraint, Layout, Rect};

/// Header bar (bordered, one row of content).
pub const HEADER_HEIGHT: u16 = 3;
/// Account cards row.
pub const ACCOUNTS_HEIGHT: u16 = 4;
/// Total portfolio value card.
pub const TOTAL_HEIGHT: u16 = 4;
/// Footer with technology badges.
pub const FOOTER_HEIGHT: u16 = 2;
/// Side-by-side columns at or above this terminal width.
pub const WIDE_THRESHOLD: u16 = 100;

/// Computed layout regions for a single frame.
#[derive(Debug, Clone, Copy)]
pub struct DashboardLayout {
    pub header: Rect,
    pub accounts: Rect,
    pub total: Rect,
    pub transactions: Rect,
    pub spending: Rect,
    pub advisor: Rect,
    pub footer: Rect,
    /// Status bar (bottom row).
    pub status: Rect,
}

/// Whether the body is split into columns or stacked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyArrangement {
    /// Transactions and spending on the left two thirds, advisor on the right.
    Columns,
    /// Everything stacked top to bottom.
    Stacked,
}

impl DashboardLayout {
    /// Compute layout regions from the terminal area.
    pub fn compute(area: Rect) -> (Self, BodyArrangement) {
        let rows = Layout::vertical([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Length(ACCOUNTS_HEIGHT),
            Constraint::Length(TOTAL_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(FOOTER_HEIGHT),
            Constraint::Length(1),
        ])
        .split(area);

        let body = rows[3];
        let arrangement = if area.width >= WIDE_THRESHOLD {
            BodyArrangement::Columns
        } else {
            BodyArrangement::Stacked
        };

        let (transactions, spending, advisor) = match arrangement {
            BodyArrangement::Columns => {
                let cols = Layout::horizontal([Constraint::Ratio(2, 3), Constraint::Ratio(1, 3)])
                    .split(body);
                let left = Layout::vertical([Constraint::Percentage(60), Constraint::Percentage(40)])
                    .split(cols[0]);
                (left[0], left[1], cols[1])
            }
            BodyArrangement::Stacked => {
                let stacked = Layout::vertical([
                    Constraint::Percentage(40),
                    Constraint::Percentage(25),
                    Constraint::Percentage(35),
                ])
                .split(body);
                (stacked[0], stacked[1], stacked[2])
            }
        };

        (
            DashboardLayout {
                header: rows[0],
                accounts: rows[1],
                total: rows[2],
                transactions,
                spending,
                advisor,
                footer: rows[4],
                status: rows[5],
            },
            arrangement,
        )
    }
}
