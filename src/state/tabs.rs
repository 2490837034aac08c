//! Tab bar state: the list of tab captions and which one is selected.

use crate::error::{AppError, Result};
use log::{debug, warn};

/// Direction for keyboard stepping through tabs.
#[derive(Debug, Clone, Copy)]
enum Direction {
    Next,
    Previous,
}

/// Selected tab within a fixed tab bar. Tab 0 is the home page.
#[derive(Debug, Default)]
pub struct TabState {
    labels: Vec<String>,
    selected: usize,
}

impl TabState {
    pub fn new(labels: Vec<String>) -> Self {
        Self {
            labels,
            selected: 0,
        }
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn selected_label(&self) -> Option<&str> {
        self.labels.get(self.selected).map(String::as_str)
    }

    /// Whether clicking `index` would leave the page as it is.
    pub fn is_selected(&self, index: usize) -> bool {
        index == self.selected && index < self.labels.len()
    }

    /// Selects a tab by index.
    pub fn select(&mut self, index: usize) -> Result<usize> {
        if index >= self.labels.len() {
            return Err(AppError::UnknownTab {
                index,
                count: self.labels.len(),
            });
        }
        debug!("Selecting tab {} ({})", index, self.labels[index]);
        self.selected = index;
        Ok(index)
    }

    /// Steps one tab in the given direction; the bar does not wrap.
    fn step(&mut self, direction: Direction) -> Option<usize> {
        if self.labels.is_empty() {
            warn!("No tabs available for navigation");
            return None;
        }

        let new_index = match direction {
            Direction::Next => {
                if self.selected + 1 < self.labels.len() {
                    self.selected + 1
                } else {
                    warn!("No next tab available");
                    return None;
                }
            }
            Direction::Previous => {
                if self.selected > 0 {
                    self.selected - 1
                } else {
                    warn!("No previous tab available");
                    return None;
                }
            }
        };

        self.selected = new_index;
        Some(new_index)
    }

    pub fn next_tab(&mut self) -> Option<usize> {
        self.step(Direction::Next)
    }

    pub fn previous_tab(&mut self) -> Option<usize> {
        self.step(Direction::Previous)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn week() -> TabState {
        TabState::new(
            ["Inicio", "Lunes", "Martes"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        )
    }

    #[test]
    fn starts_on_home() {
        let tabs = week();
        assert_eq!(tabs.selected(), 0);
        assert_eq!(tabs.selected_label(), Some("Inicio"));
    }

    #[test]
    fn select_rejects_unknown_tab() {
        let mut tabs = week();
        assert_eq!(tabs.select(2).unwrap(), 2);
        assert!(matches!(
            tabs.select(3),
            Err(AppError::UnknownTab { index: 3, count: 3 })
        ));
        assert_eq!(tabs.selected(), 2);
    }

    #[test]
    fn reselecting_is_detected() {
        let mut tabs = week();
        assert!(tabs.is_selected(0));
        assert!(!tabs.is_selected(1));
        tabs.select(1).unwrap();
        assert!(tabs.is_selected(1));
        assert!(!tabs.is_selected(0));

        let empty = TabState::default();
        assert!(!empty.is_selected(0));
    }

    #[test]
    fn stepping_stops_at_the_ends() {
        let mut tabs = week();
        assert_eq!(tabs.previous_tab(), None);
        assert_eq!(tabs.next_tab(), Some(1));
        assert_eq!(tabs.next_tab(), Some(2));
        assert_eq!(tabs.next_tab(), None);
        assert_eq!(tabs.selected(), 2);
        assert_eq!(tabs.previous_tab(), Some(1));
    }

    #[test]
    fn empty_bar_never_moves() {
        let mut tabs = TabState::default();
        assert_eq!(tabs.next_tab(), None);
        assert_eq!(tabs.selected_label(), None);
    }
}
