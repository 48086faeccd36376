use chrono::{DateTime, TimeZone, Utc};
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
use finance_tracker::{App, Config, run_app, ui::app::Tab};
use ratatui::{Terminal, backend::TestBackend};

fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 2, 20, 12, 0, 0).unwrap()
}

struct Fixture {
    terminal: Terminal<TestBackend>,
    app: App,
}

impl Fixture {
    fn new() -> Self {
        let backend = TestBackend::new(100, 40);
        Fixture {
            terminal: Terminal::new(backend).expect("terminal created"),
            app: App::new(&Config::default()).with_clock(fixed_now),
        }
    }

    fn run(&mut self, events: impl IntoIterator<Item = Vec<Event>>) -> String {
        run_app(&mut self.terminal, &mut self.app, events.into_iter().flatten())
            .expect("event loop finished");
        self.screen()
    }

    fn screen(&self) -> String {
        let buffer = self.terminal.backend().buffer();
        let width = buffer.area.width as usize;
        buffer
            .content
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn key_event(code: KeyCode) -> Event {
    Event::Key(KeyEvent {
        code,
        modifiers: KeyModifiers::empty(),
        kind: KeyEventKind::Press,
        state: KeyEventState::empty(),
    })
}

fn press(code: KeyCode) -> Vec<Event> {
    vec![key_event(code)]
}

fn type_text(s: &str) -> Vec<Event> {
    s.chars().map(|ch| key_event(KeyCode::Char(ch))).collect()
}

#[test]
fn starts_on_dashboard() {
    let mut fixture = Fixture::new();
    let screen = fixture.run(vec![]);
    assert!(screen.contains("Olá, Usuário!"));
    assert!(screen.contains("R$ 3.400,00"));
    assert!(screen.contains("+2.5% este mês"));
    assert!(screen.contains("Adicionar Despesa"));
}

#[test]
fn expense_tab_lists_seed_records() {
    let mut fixture = Fixture::new();
    let screen = fixture.run(vec![press(KeyCode::Tab)]);
    assert_eq!(fixture.app.active_tab, Tab::Expenses);
    assert!(screen.contains("Despesas (2)"));
    assert!(screen.contains("Supermercado"));
    assert!(screen.contains("R$ 350.50"));
    assert!(screen.contains("2024-02-14"));
}

#[test]
fn adding_an_expense_shows_it_and_leaves_dashboard_alone() {
    let mut fixture = Fixture::new();
    let screen = fixture.run(vec![
        press(KeyCode::Char('2')),
        press(KeyCode::Char('a')),
        type_text("Coffee"),
        press(KeyCode::Tab),
        type_text("10"),
        press(KeyCode::Tab),
        press(KeyCode::Char(' ')),
        press(KeyCode::Enter),
    ]);
    assert!(screen.contains("Despesas (3)"));
    assert!(screen.contains("Coffee"));
    assert!(screen.contains("R$ 10.00"));
    assert!(screen.contains("2024-02-20"));

    let dashboard = fixture.run(vec![press(KeyCode::Char('1'))]);
    assert!(dashboard.contains("R$ 3.400,00"));
}

#[test]
fn open_form_shows_placeholders() {
    let mut fixture = Fixture::new();
    let screen = fixture.run(vec![press(KeyCode::Char('4')), press(KeyCode::Char('a'))]);
    assert!(screen.contains("Título da Meta"));
    assert!(screen.contains("Data Limite (AAAA-MM-DD)"));
    assert!(screen.contains("Emergência"));
}

#[test]
fn goals_show_progress_text() {
    let mut fixture = Fixture::new();
    let screen = fixture.run(vec![press(KeyCode::Char('4'))]);
    assert!(screen.contains("Viagem para Europa"));
    assert!(screen.contains("33% concluído"));
    assert!(screen.contains("75% concluído"));
    assert!(screen.contains("R$ 15000.00"));
}

#[test]
fn free_text_deadline_is_shown_as_typed() {
    let mut fixture = Fixture::new();
    let screen = fixture.run(vec![
        press(KeyCode::Char('4')),
        press(KeyCode::Char('a')),
        type_text("Carro"),
        press(KeyCode::Tab),
        type_text("30000"),
        press(KeyCode::Tab),
        type_text("31/12/2025"),
        press(KeyCode::Tab),
        press(KeyCode::Char(' ')),
        press(KeyCode::Enter),
    ]);
    assert_eq!(fixture.app.goals.records.len(), 3);
    assert!(screen.contains("Carro"));
    assert!(screen.contains("Prazo 31/12/2025"));
    assert!(screen.contains("0% concluído"));
}

#[test]
fn notifications_are_untouched_by_keys() {
    let mut fixture = Fixture::new();
    let before = fixture.app.notifications.clone();
    let screen = fixture.run(vec![
        press(KeyCode::Char('5')),
        press(KeyCode::Enter),
        press(KeyCode::Char(' ')),
        press(KeyCode::Down),
        press(KeyCode::Char('a')),
    ]);
    assert!(screen.contains("Alerta de Orçamento"));
    assert!(screen.contains("2024-02-13 16:45"));
    assert_eq!(fixture.app.notifications, before);
}

#[test]
fn settings_switch_renders_new_state() {
    let mut fixture = Fixture::new();
    let screen = fixture.run(vec![
        press(KeyCode::Char('6')),
        press(KeyCode::Down),
        press(KeyCode::Down),
        press(KeyCode::Down),
        press(KeyCode::Enter),
    ]);
    assert!(!fixture.app.settings.notifications_enabled);
    assert!(screen.contains("[off]"));
    assert!(!screen.contains("[on]"));
    assert!(screen.contains("Sair"));
}

#[test]
fn quit_stops_the_loop() {
    let mut fixture = Fixture::new();
    fixture.run(vec![press(KeyCode::Char('q')), press(KeyCode::Tab)]);
    assert!(fixture.app.should_quit);
    assert_eq!(fixture.app.active_tab, Tab::Dashboard);
}
