//! Pages reachable through the route table
//!
//! Each page owns its own drawing; the shell only decides which one is
//! active and hands it the theme and an area.

pub mod driver_analytics;
pub mod live;
pub mod not_found;
pub mod replay;

use crate::ui::theme::Theme;
use ratatui::{layout::Rect, Frame};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageId {
    Live,
    Replay,
    DriverAnalytics,
}

impl PageId {
    /// Navigation order
    pub const ALL: [PageId; 3] = [PageId::Live, PageId::Replay, PageId::DriverAnalytics];

    pub const fn path(&self) -> &'static str {
        match self {
            PageId::Live => "/live",
            PageId::Replay => "/replay",
            PageId::DriverAnalytics => "/driver-analytics",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PageId::Live => "Live",
            PageId::Replay => "Replay",
            PageId::DriverAnalytics => "Driver Analytics",
        }
    }

    /// Keybind hint shown in the navigation bar
    pub fn key_hint(&self) -> char {
        match self {
            PageId::Live => '1',
            PageId::Replay => '2',
            PageId::DriverAnalytics => '3',
        }
    }

    pub fn from_key(key: char) -> Option<Self> {
        Self::ALL.into_iter().find(|page| page.key_hint() == key)
    }

    pub fn index(&self) -> usize {
        match self {
            PageId::Live => 0,
            PageId::Replay => 1,
            PageId::DriverAnalytics => 2,
        }
    }

    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> Self {
        let idx = if self.index() == 0 {
            Self::ALL.len() - 1
        } else {
            self.index() - 1
        };
        Self::ALL[idx]
    }
}

/// Draw a page into `area`
pub fn render(frame: &mut Frame, page: PageId, theme: &Theme, area: Rect) {
    match page {
        PageId::Live => live::render(frame, theme, area),
        PageId::Replay => replay::render(frame, theme, area),
        PageId::DriverAnalytics => driver_analytics::render(frame, theme, area),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_cycle() {
        assert_eq!(PageId::Live.next(), PageId::Replay);
        assert_eq!(PageId::DriverAnalytics.next(), PageId::Live);
        assert_eq!(PageId::Live.prev(), PageId::DriverAnalytics);
        for page in PageId::ALL {
            assert_eq!(page.next().prev(), page);
        }
    }

    #[test]
    fn test_key_hints_are_unique() {
        for page in PageId::ALL {
            assert_eq!(PageId::from_key(page.key_hint()), Some(page));
        }
        assert_eq!(PageId::from_key('9'), None);
    }
}
