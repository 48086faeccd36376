use chrono::{DateTime, Utc};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use ratatui::widgets::ListState;
use tracing::{debug, info};

use crate::config::Config;
use crate::forms::{EntryForm, FormField, GoalForm, RecordForm};
use crate::models::{
    category::{CategorySet, ExpenseCategory, IncomeCategory},
    dashboard::DashboardSummary,
    notification::Notification,
    settings::Settings,
};
use crate::store::RecordList;
use crate::utils::sample_data;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Dashboard,
    Expenses,
    Income,
    Goals,
    Notifications,
    Settings,
}

impl Tab {
    pub fn title(&self) -> &'static str {
        match self {
            Tab::Dashboard => "Dashboard",
            Tab::Expenses => "Despesas",
            Tab::Income => "Receitas",
            Tab::Goals => "Metas",
            Tab::Notifications => "Alertas",
            Tab::Settings => "Ajustes",
        }
    }

    pub fn all() -> &'static [Tab] {
        &[
            Tab::Dashboard,
            Tab::Expenses,
            Tab::Income,
            Tab::Goals,
            Tab::Notifications,
            Tab::Settings,
        ]
    }

    pub fn index(&self) -> usize {
        Tab::all().iter().position(|t| t == self).unwrap_or(0)
    }

    pub fn next(&self) -> Tab {
        let all = Tab::all();
        all[(self.index() + 1) % all.len()]
    }

    pub fn previous(&self) -> Tab {
        let all = Tab::all();
        all[(self.index() + all.len() - 1) % all.len()]
    }
}

#[derive(Debug, PartialEq)]
pub enum InputMode {
    Normal,
    Editing,
}

/// One record screen: its list, its add form and the cursor state that goes
/// with them.
pub struct Screen<F: RecordForm> {
    pub form: F,
    pub records: RecordList<F::Record>,
    pub focus: usize,
    pub category_cursor: usize,
    pub list_state: ListState,
}

impl<F: RecordForm> Screen<F> {
    pub fn new(form: F, records: RecordList<F::Record>) -> Self {
        let mut list_state = ListState::default();
        if !records.is_empty() {
            list_state.select(Some(0));
        }
        Self {
            form,
            records,
            focus: 0,
            category_cursor: 0,
            list_state,
        }
    }

    pub fn focused_field(&self) -> FormField {
        let fields = self.form.fields();
        fields[self.focus % fields.len()]
    }

    pub fn toggle_form(&mut self) {
        self.form.toggle();
        if self.form.is_visible() {
            self.focus = 0;
            self.category_cursor = self.form.selected_category_index().unwrap_or(0);
        }
    }

    pub fn next(&mut self) {
        let i = match self.list_state.selected() {
            Some(i) => {
                if i >= self.records.len().saturating_sub(1) {
                    0
                } else {
                    i + 1
                }
            }
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    pub fn previous(&mut self) {
        let i = match self.list_state.selected() {
            Some(i) => {
                if i == 0 {
                    self.records.len().saturating_sub(1)
                } else {
                    i - 1
                }
            }
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    /// Handles a key while the form is open.
    pub fn handle_form_key(&mut self, key: KeyCode, now: DateTime<Utc>) {
        let fields = self.form.fields().len();
        let focused = self.focused_field();
        let categories = F::Category::all().len();

        match key {
            KeyCode::Esc => self.form.hide(),
            KeyCode::Enter => {
                if self.form.submit(&mut self.records, now) {
                    self.focus = 0;
                    self.category_cursor = 0;
                    self.list_state.select(Some(0));
                }
            }
            KeyCode::Tab => self.focus = (self.focus + 1) % fields,
            KeyCode::BackTab => self.focus = (self.focus + fields - 1) % fields,
            KeyCode::Left if focused == FormField::Category => {
                self.category_cursor = (self.category_cursor + categories - 1) % categories;
            }
            KeyCode::Right if focused == FormField::Category => {
                self.category_cursor = (self.category_cursor + 1) % categories;
            }
            KeyCode::Char(' ') if focused == FormField::Category => {
                self.form.select_category_at(self.category_cursor);
            }
            KeyCode::Char(c) => {
                if let Some(text) = self.form.text_mut(focused) {
                    text.push(c);
                }
            }
            KeyCode::Backspace => {
                if let Some(text) = self.form.text_mut(focused) {
                    text.pop();
                }
            }
            _ => {}
        }
    }
}

pub type ExpenseScreen = Screen<EntryForm<ExpenseCategory>>;
pub type IncomeScreen = Screen<EntryForm<IncomeCategory>>;
pub type GoalScreen = Screen<GoalForm>;

pub struct App {
    pub currency: String,
    pub active_tab: Tab,
    pub dashboard: DashboardSummary,
    pub expenses: ExpenseScreen,
    pub incomes: IncomeScreen,
    pub goals: GoalScreen,
    pub notifications: Vec<Notification>,
    pub settings: Settings,
    pub settings_cursor: usize,
    pub should_quit: bool,
    clock: fn() -> DateTime<Utc>,
}

impl App {
    pub fn new(config: &Config) -> Self {
        Self {
            currency: config.currency_symbol.clone(),
            active_tab: Tab::Dashboard,
            dashboard: sample_data::dashboard(),
            expenses: Screen::new(EntryForm::new(), sample_data::expenses()),
            incomes: Screen::new(EntryForm::new(), sample_data::incomes()),
            goals: Screen::new(GoalForm::new(), sample_data::goals()),
            notifications: sample_data::notifications(),
            settings: Settings::new(config.notifications_enabled, config.dark_mode),
            settings_cursor: 0,
            should_quit: false,
            clock: Utc::now,
        }
    }

    /// Replaces the time source used to stamp new records.
    pub fn with_clock(mut self, clock: fn() -> DateTime<Utc>) -> Self {
        self.clock = clock;
        self
    }

    pub fn input_mode(&self) -> InputMode {
        let editing = match self.active_tab {
            Tab::Expenses => self.expenses.form.is_visible(),
            Tab::Income => self.incomes.form.is_visible(),
            Tab::Goals => self.goals.form.is_visible(),
            _ => false,
        };
        if editing { InputMode::Editing } else { InputMode::Normal }
    }

    pub fn select_tab(&mut self, tab: Tab) {
        if tab != self.active_tab {
            debug!(from = self.active_tab.title(), to = tab.title(), "tab switched");
            self.active_tab = tab;
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        match self.input_mode() {
            InputMode::Editing => self.handle_form_key(key.code),
            InputMode::Normal => self.handle_normal_key(key.code),
        }
    }

    fn handle_form_key(&mut self, key: KeyCode) {
        let now = (self.clock)();
        match self.active_tab {
            Tab::Expenses => self.expenses.handle_form_key(key, now),
            Tab::Income => self.incomes.handle_form_key(key, now),
            Tab::Goals => self.goals.handle_form_key(key, now),
            _ => {}
        }
    }

    fn handle_normal_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') => {
                info!("quit requested");
                self.should_quit = true;
            }
            KeyCode::Tab | KeyCode::Right => self.select_tab(self.active_tab.next()),
            KeyCode::BackTab | KeyCode::Left => self.select_tab(self.active_tab.previous()),
            KeyCode::Char(c @ '1'..='6') => {
                let index = c as usize - '1' as usize;
                self.select_tab(Tab::all()[index]);
            }
            KeyCode::Char('a') => match self.active_tab {
                Tab::Expenses => self.expenses.toggle_form(),
                Tab::Income => self.incomes.toggle_form(),
                Tab::Goals => self.goals.toggle_form(),
                _ => {}
            },
            KeyCode::Up => self.move_cursor(false),
            KeyCode::Down => self.move_cursor(true),
            KeyCode::Enter | KeyCode::Char(' ') if self.active_tab == Tab::Settings => {
                self.settings.activate(self.settings_cursor);
            }
            _ => {}
        }
    }

    fn move_cursor(&mut self, down: bool) {
        match self.active_tab {
            Tab::Expenses if down => self.expenses.next(),
            Tab::Expenses => self.expenses.previous(),
            Tab::Income if down => self.incomes.next(),
            Tab::Income => self.incomes.previous(),
            Tab::Goals if down => self.goals.next(),
            Tab::Goals => self.goals.previous(),
            Tab::Settings => {
                let count = self.settings.item_count();
                self.settings_cursor = if down {
                    (self.settings_cursor + 1) % count
                } else {
                    (self.settings_cursor + count - 1) % count
                };
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use crossterm::event::KeyModifiers;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 2, 20, 8, 30, 0).unwrap()
    }

    fn app() -> App {
        App::new(&Config::default()).with_clock(fixed_now)
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn tabs_wrap_around() {
        assert_eq!(Tab::Settings.next(), Tab::Dashboard);
        assert_eq!(Tab::Dashboard.previous(), Tab::Settings);
        assert_eq!(Tab::Goals.index(), 3);
    }

    #[test]
    fn number_keys_jump_to_tabs() {
        let mut app = app();
        press(&mut app, KeyCode::Char('4'));
        assert_eq!(app.active_tab, Tab::Goals);
        press(&mut app, KeyCode::Char('6'));
        assert_eq!(app.active_tab, Tab::Settings);
    }

    #[test]
    fn form_captures_keys_until_hidden() {
        let mut app = app();
        press(&mut app, KeyCode::Char('2'));
        press(&mut app, KeyCode::Char('a'));
        assert_eq!(app.input_mode(), InputMode::Editing);

        type_text(&mut app, "q1");
        assert!(!app.should_quit);
        assert_eq!(app.active_tab, Tab::Expenses);
        assert_eq!(app.expenses.form.text(FormField::Description), "q1");

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.input_mode(), InputMode::Normal);
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn full_expense_entry_from_keys() {
        let mut app = app();
        press(&mut app, KeyCode::Char('2'));
        press(&mut app, KeyCode::Char('a'));
        type_text(&mut app, "Coffee");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "10");
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Char(' '));
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.expenses.records.len(), 3);
        let first = app.expenses.records.first().unwrap();
        assert_eq!(first.description, "Coffee");
        assert_eq!(first.category, ExpenseCategory::Food);
        assert_eq!(first.date, fixed_now().date_naive());
        assert_eq!(app.input_mode(), InputMode::Normal);
    }

    #[test]
    fn category_cursor_wraps_and_space_selects() {
        let mut app = app();
        press(&mut app, KeyCode::Char('3'));
        press(&mut app, KeyCode::Char('a'));
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.incomes.focused_field(), FormField::Category);
        press(&mut app, KeyCode::Left);
        press(&mut app, KeyCode::Char(' '));
        assert_eq!(app.incomes.form.selected_category(), Some(IncomeCategory::Other));
    }

    #[test]
    fn enter_with_missing_fields_keeps_form_open() {
        let mut app = app();
        press(&mut app, KeyCode::Char('4'));
        press(&mut app, KeyCode::Char('a'));
        type_text(&mut app, "Casa própria");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.goals.records.len(), 2);
        assert_eq!(app.input_mode(), InputMode::Editing);
    }

    #[test]
    fn settings_cursor_toggles_switches() {
        let mut app = app();
        press(&mut app, KeyCode::Char('6'));
        for _ in 0..4 {
            press(&mut app, KeyCode::Down);
        }
        press(&mut app, KeyCode::Enter);
        assert!(app.settings.dark_mode);
        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Char(' '));
        assert!(!app.settings.notifications_enabled);
    }

    #[test]
    fn release_events_are_ignored() {
        let mut app = app();
        let mut key = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        app.handle_key(key);
        assert!(!app.should_quit);
    }
}
