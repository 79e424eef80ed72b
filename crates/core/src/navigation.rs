//! In-place traversal of the menu tree.
//!
//! The navigator owns the forest for the duration of the menu session and
//! keeps one cursor per nesting level. Entering a section pushes a cursor,
//! going back pops one. The cursors double as the path from the root to the
//! sequence currently shown: every cursor except the last points at the
//! section that was entered.

use crate::menu_definitions::MenuNode;

/// Discrete input understood by the navigator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavEvent {
    MoveUp,
    MoveDown,
    /// Toggle a checkbox or enter a non-empty section.
    Activate,
    /// Leave the current section, or finish when already at the root.
    Back,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavStatus {
    Continue,
    Finished,
}

/// Everything a renderer needs to draw one frame.
#[derive(Debug)]
pub struct MenuView<'a> {
    pub nodes: &'a [MenuNode],
    pub cursor: usize,
    /// Labels of the sections entered to reach `nodes`, outermost first.
    pub breadcrumb: Vec<&'a str>,
}

#[derive(Debug)]
pub struct Navigator {
    forest: Vec<MenuNode>,
    cursors: Vec<usize>,
}

impl Navigator {
    pub fn new(forest: Vec<MenuNode>) -> Self {
        Self {
            forest,
            cursors: vec![0],
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursors.last().copied().unwrap_or_default()
    }

    /// Zero at the root.
    pub fn depth(&self) -> usize {
        self.cursors.len() - 1
    }

    pub fn forest(&self) -> &[MenuNode] {
        &self.forest
    }

    pub fn into_forest(self) -> Vec<MenuNode> {
        self.forest
    }

    pub fn view(&self) -> MenuView<'_> {
        let mut nodes: &[MenuNode] = &self.forest;
        let mut breadcrumb = Vec::with_capacity(self.depth());

        for &cursor in self.parent_cursors() {
            let section = &nodes[cursor];
            breadcrumb.push(section.label.as_str());
            nodes = section.children();
        }

        MenuView {
            nodes,
            cursor: self.cursor(),
            breadcrumb,
        }
    }

    /// Applies one event. Returns [`NavStatus::Finished`] once `Back` is
    /// received at the root.
    pub fn handle(&mut self, event: NavEvent) -> NavStatus {
        match event {
            NavEvent::MoveUp => {
                let cursor = self.cursor().saturating_sub(1);
                self.set_cursor(cursor);
            }
            NavEvent::MoveDown => {
                let last = self.view().nodes.len().saturating_sub(1);
                let cursor = (self.cursor() + 1).min(last);
                self.set_cursor(cursor);
            }
            NavEvent::Activate => self.activate(),
            NavEvent::Back => {
                if self.cursors.len() == 1 {
                    return NavStatus::Finished;
                }
                self.cursors.pop();
            }
            NavEvent::Other => {}
        }

        NavStatus::Continue
    }

    /// Feeds events until the navigator finishes or the events run out.
    pub fn run<I: IntoIterator<Item = NavEvent>>(&mut self, events: I) -> NavStatus {
        for event in events {
            if self.handle(event) == NavStatus::Finished {
                return NavStatus::Finished;
            }
        }

        NavStatus::Continue
    }

    fn activate(&mut self) {
        let cursor = self.cursor();
        let Some(node) = self
            .current_nodes_mut()
            .and_then(|nodes| nodes.get_mut(cursor))
        else {
            return;
        };

        let descend = if node.is_section() {
            !node.children().is_empty()
        } else {
            node.toggle();
            false
        };

        if descend {
            self.cursors.push(0);
        }
    }

    fn parent_cursors(&self) -> &[usize] {
        &self.cursors[..self.cursors.len() - 1]
    }

    fn set_cursor(&mut self, cursor: usize) {
        if let Some(current) = self.cursors.last_mut() {
            *current = cursor;
        }
    }

    fn current_nodes_mut(&mut self) -> Option<&mut Vec<MenuNode>> {
        let (_, parents) = self.cursors.split_last()?;
        let mut nodes = &mut self.forest;

        for &cursor in parents {
            nodes = nodes.get_mut(cursor)?.children_mut()?;
        }

        Some(nodes)
    }
}
