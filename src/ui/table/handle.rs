use dioxus::prelude::*;

/// The two operations a hosting screen may trigger from outside.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableCommand {
    Reload { reset_page: bool },
    Reset,
}

impl TableCommand {
    /// Page the command asks for, given the currently applied page.
    pub fn target_page(&self, current_page: u64) -> u64 {
        match self {
            TableCommand::Reload { reset_page: false } => current_page,
            TableCommand::Reload { reset_page: true } | TableCommand::Reset => 1,
        }
    }
}

/// Imperative controller for one table instance. Created by the hosting
/// screen with `use_table_handle` and passed into the table's props; the
/// table drains queued commands through an effect.
#[derive(Clone, Copy, PartialEq)]
pub struct TableHandle {
    command: Signal<Option<TableCommand>>,
}

pub fn use_table_handle() -> TableHandle {
    TableHandle {
        command: use_signal(|| None),
    }
}

impl TableHandle {
    pub fn reload(&self, reset_page: bool) {
        let mut command = self.command;
        command.set(Some(TableCommand::Reload { reset_page }));
    }

    pub fn reset(&self) {
        let mut command = self.command;
        command.set(Some(TableCommand::Reset));
    }

    pub(super) fn command_signal(&self) -> Signal<Option<TableCommand>> {
        self.command
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reload_with_reset_always_targets_the_first_page() {
        let command = TableCommand::Reload { reset_page: true };
        assert_eq!(command.target_page(1), 1);
        assert_eq!(command.target_page(7), 1);
    }

    #[test]
    fn reload_without_reset_keeps_the_current_page() {
        let command = TableCommand::Reload { reset_page: false };
        assert_eq!(command.target_page(1), 1);
        assert_eq!(command.target_page(7), 7);
    }

    #[test]
    fn reset_targets_the_first_page() {
        assert_eq!(TableCommand::Reset.target_page(5), 1);
    }
}
