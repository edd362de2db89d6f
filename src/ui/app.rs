use chrono::Local;

use crate::models::{totals, BudgetRecord, BudgetTotals};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Screen {
    Overview,
    Budgets,
}

impl Screen {
    pub(crate) fn all() -> &'static [Screen] {
        &[Self::Overview, Self::Budgets]
    }
}

impl std::fmt::Display for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Overview => write!(f, "Overview"),
            Self::Budgets => write!(f, "Budgets"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InputMode {
    Normal,
    Command,
}

impl std::fmt::Display for InputMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Normal => write!(f, "NORMAL"),
            Self::Command => write!(f, "COMMAND"),
        }
    }
}

pub(crate) struct App {
    pub(crate) running: bool,
    pub(crate) screen: Screen,
    pub(crate) input_mode: InputMode,
    pub(crate) command_input: String,
    pub(crate) status_message: String,
    pub(crate) show_help: bool,
    pub(crate) today: String,

    // Budgets
    pub(crate) budgets: Vec<BudgetRecord>,
    pub(crate) budget_index: usize,
    pub(crate) budget_scroll: usize,

    // Receipt preview. The modal never owns this state; it only gets
    // mutable references to these two fields.
    pub(crate) show_preview: bool,
    pub(crate) receipt_image: String,

    // Layout (updated each render frame)
    pub(crate) visible_rows: usize,
}

impl App {
    pub(crate) fn new(budgets: Vec<BudgetRecord>) -> Self {
        let today = Local::now().format("%Y-%m-%d").to_string();

        Self {
            running: true,
            screen: Screen::Overview,
            input_mode: InputMode::Normal,
            command_input: String::new(),
            status_message: String::new(),
            show_help: false,
            today,

            budgets,
            budget_index: 0,
            budget_scroll: 0,

            show_preview: false,
            receipt_image: String::new(),

            visible_rows: 20,
        }
    }

    pub(crate) fn totals(&self) -> BudgetTotals {
        totals(&self.budgets)
    }

    pub(crate) fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = msg.into();
    }
}
