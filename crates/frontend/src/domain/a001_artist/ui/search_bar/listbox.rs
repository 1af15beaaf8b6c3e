//! Keyboard and pointer state of the autocomplete dropdown

/// What a key press asks the search bar to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListboxAction {
    /// State changed (or nothing to do); no side effect required
    None,
    /// Choose the option at this index
    Select(usize),
    /// Drop the current artist selection
    ClearSelection,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ListboxState {
    pub open: bool,
    pub highlighted: Option<usize>,
    /// Input has keyboard focus; the list only pops open while it does
    pub focused: bool,
}

impl ListboxState {
    /// Options changed: open when there is something to show and the input
    /// is focused, keeping the first option highlighted unless the current
    /// highlight is still valid.
    pub fn sync(&mut self, len: usize) {
        if len == 0 {
            self.open = false;
            self.highlighted = None;
            return;
        }
        if !matches!(self.highlighted, Some(idx) if idx < len) {
            self.highlighted = Some(0);
        }
        if self.focused {
            self.open = true;
        }
    }

    /// Input gained focus: show whatever options are already loaded
    pub fn focus(&mut self, len: usize) {
        self.focused = true;
        self.sync(len);
    }

    /// Input lost focus: hide the list until focus comes back
    pub fn blur(&mut self) {
        self.focused = false;
        self.close();
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn hover(&mut self, index: usize) {
        self.highlighted = Some(index);
    }

    fn step(&mut self, len: usize, forward: bool) {
        if len == 0 {
            return;
        }
        if !self.open {
            self.open = true;
            self.highlighted.get_or_insert(0);
            return;
        }
        self.highlighted = Some(match self.highlighted {
            Some(idx) if forward => (idx + 1) % len,
            Some(idx) => (idx + len - 1) % len,
            None if forward => 0,
            None => len - 1,
        });
    }

    /// Handle a `KeyboardEvent::key()` value. Returns whether the key was
    /// consumed (so the caller can `prevent_default`) and the resulting action.
    pub fn on_key(&mut self, key: &str, len: usize, input_empty: bool) -> (bool, ListboxAction) {
        match key {
            "ArrowDown" => {
                self.step(len, true);
                (len > 0, ListboxAction::None)
            }
            "ArrowUp" => {
                self.step(len, false);
                (len > 0, ListboxAction::None)
            }
            "Enter" => match self.highlighted {
                Some(idx) if self.open && idx < len => (true, ListboxAction::Select(idx)),
                _ => (false, ListboxAction::None),
            },
            "Escape" => {
                if self.open && len > 0 {
                    self.close();
                    (true, ListboxAction::None)
                } else if input_empty {
                    (true, ListboxAction::ClearSelection)
                } else {
                    (false, ListboxAction::None)
                }
            }
            _ => (false, ListboxAction::None),
        }
    }

    pub fn is_highlighted(&self, index: usize) -> bool {
        self.open && self.highlighted == Some(index)
    }
}

pub fn option_dom_id(index: usize) -> String {
    format!("searchBarOption-{}", index)
}
