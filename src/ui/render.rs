use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{BarChart, Block, Borders, List, ListItem, Paragraph, Tabs, Wrap},
};

use super::app::{App, InputMode, Screen, Tab};
use crate::forms::{EntryForm, RecordForm};
use crate::models::category::CategorySet;
use crate::models::goal::Goal;
use crate::models::settings::{LOGOUT_LABEL, SettingAction};
use crate::utils::format::{
    format_change, format_money, format_money_grouped, format_timestamp,
};

const ACCENT: Color = Color::Rgb(0x25, 0x63, 0xeb);
const MUTED: Color = Color::DarkGray;
const PROGRESS_WIDTH: u16 = 30;

pub fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(3),
        ])
        .split(f.size());

    render_tabs(f, app, chunks[0]);

    match app.active_tab {
        Tab::Dashboard => render_dashboard(f, app, chunks[1]),
        Tab::Expenses => render_entry_screen(
            f,
            &app.expenses,
            &app.currency,
            "Despesas",
            Color::Red,
            chunks[1],
        ),
        Tab::Income => render_entry_screen(
            f,
            &app.incomes,
            &app.currency,
            "Receitas",
            Color::Green,
            chunks[1],
        ),
        Tab::Goals => render_goal_screen(f, app, chunks[1]),
        Tab::Notifications => render_notifications(f, app, chunks[1]),
        Tab::Settings => render_settings(f, app, chunks[1]),
    }

    render_help_panel(f, app, chunks[2]);
}

fn render_tabs(f: &mut Frame, app: &App, area: Rect) {
    let titles: Vec<Line> = Tab::all()
        .iter()
        .enumerate()
        .map(|(i, tab)| Line::from(format!("{} {}", i + 1, tab.title())))
        .collect();

    let tabs = Tabs::new(titles)
        .block(Block::default().borders(Borders::ALL).title(" Finanças "))
        .select(app.active_tab.index())
        .highlight_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD));

    f.render_widget(tabs, area);
}

fn render_dashboard(f: &mut Frame, app: &App, area: Rect) {
    let summary = &app.dashboard;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Length(5),
            Constraint::Min(6),
            Constraint::Length(3),
        ])
        .split(area);

    let header = Paragraph::new(vec![
        Line::from(Span::styled(
            summary.greeting.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(summary.subtitle.clone(), Style::default().fg(MUTED))),
    ])
    .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(ACCENT)));
    f.render_widget(header, chunks[0]);

    let balance = Paragraph::new(vec![
        Line::from(Span::styled("Saldo Total", Style::default().fg(MUTED))),
        Line::from(Span::styled(
            format_money_grouped(&app.currency, summary.balance),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("{} este mês", format_change(summary.monthly_change_percent)),
            Style::default().fg(Color::Green),
        )),
    ])
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(balance, chunks[1]);

    let bars = summary.spending_bars();
    let chart = BarChart::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Gastos nos últimos 6 meses"),
        )
        .data(bars.as_slice())
        .max(summary.peak_spending())
        .bar_width(6)
        .bar_gap(2)
        .bar_style(Style::default().fg(ACCENT))
        .value_style(Style::default().fg(Color::White).bg(ACCENT));
    f.render_widget(chart, chunks[2]);

    let mut actions = Vec::new();
    for (i, label) in summary.quick_actions.iter().enumerate() {
        if i > 0 {
            actions.push(Span::raw("   "));
        }
        actions.push(Span::styled(format!("[ {} ]", label), Style::default().fg(ACCENT)));
    }
    let quick = Paragraph::new(Line::from(actions))
        .block(Block::default().borders(Borders::ALL).title("Ações Rápidas"))
        .alignment(Alignment::Center);
    f.render_widget(quick, chunks[3]);
}

/// Splits `area` into the form (when open) and the list below it.
fn form_and_list_areas<F: RecordForm>(screen: &Screen<F>, area: Rect) -> (Option<Rect>, Rect) {
    if !screen.form.is_visible() {
        return (None, area);
    }
    let form_height = screen.form.fields().len() as u16 * 3 + 2;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(form_height), Constraint::Min(3)])
        .split(area);
    (Some(chunks[0]), chunks[1])
}

fn render_form<F: RecordForm>(f: &mut Frame, screen: &Screen<F>, title: &str, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", title))
        .border_style(Style::default().fg(Color::Yellow));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let fields = screen.form.fields();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(fields.iter().map(|_| Constraint::Length(3)).collect::<Vec<_>>())
        .split(inner);

    let focused = screen.focused_field();
    for (field, row) in fields.iter().zip(rows.iter()) {
        let border = if *field == focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border)
            .title(field.placeholder());

        let line = if field.is_text() {
            let text = screen.form.text(*field);
            if text.is_empty() {
                Line::from(Span::styled(field.placeholder(), Style::default().fg(MUTED)))
            } else {
                Line::from(text.to_string())
            }
        } else {
            category_line(screen, *field == focused)
        };
        f.render_widget(Paragraph::new(line).block(block), *row);
    }
}

fn category_line<F: RecordForm>(screen: &Screen<F>, focused: bool) -> Line<'static> {
    let selected = screen.form.selected_category_index();
    let mut spans = Vec::new();
    for (i, category) in F::Category::all().iter().enumerate() {
        let mut style = if Some(i) == selected {
            Style::default().fg(Color::White).bg(ACCENT)
        } else {
            Style::default()
        };
        if focused && i == screen.category_cursor {
            style = style.add_modifier(Modifier::UNDERLINED | Modifier::BOLD);
        }
        spans.push(Span::styled(format!(" {} ", category.as_str()), style));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

fn render_entry_screen<C: CategorySet>(
    f: &mut Frame,
    screen: &Screen<EntryForm<C>>,
    currency: &str,
    title: &str,
    amount_color: Color,
    area: Rect,
) {
    let (form_area, list_area) = form_and_list_areas(screen, area);
    if let Some(form_area) = form_area {
        render_form(f, screen, "Novo lançamento", form_area);
    }

    let items: Vec<ListItem> = screen
        .records
        .iter()
        .map(|entry| entry.to_list_item(currency, amount_color))
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("{} ({})", title, screen.records.len())),
        )
        .highlight_style(Style::default().add_modifier(Modifier::BOLD))
        .highlight_symbol("➤ ");

    f.render_stateful_widget(list, list_area, &mut screen.list_state.clone());
}

fn goal_item(goal: &Goal, currency: &str) -> ListItem<'static> {
    let progress = goal.progress();
    let filled = progress.filled_cells(PROGRESS_WIDTH);
    let bar = format!(
        "{}{}",
        "█".repeat(filled as usize),
        "░".repeat((PROGRESS_WIDTH - filled) as usize)
    );

    ListItem::new(vec![
        Line::from(vec![
            Span::styled(
                format!("{:<32} ", goal.title),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(goal.category.as_str(), Style::default().fg(MUTED)),
        ]),
        Line::from(vec![
            Span::styled(bar, Style::default().fg(ACCENT)),
            Span::raw(format!(" {} concluído", progress)),
        ]),
        Line::from(vec![
            Span::styled("Atual ", Style::default().fg(MUTED)),
            Span::styled(
                format_money(currency, &goal.current_amount),
                Style::default().fg(Color::Green),
            ),
            Span::styled("   Meta ", Style::default().fg(MUTED)),
            Span::raw(format_money(currency, &goal.target_amount)),
            Span::styled("   Prazo ", Style::default().fg(MUTED)),
            Span::raw(goal.deadline.to_string()),
        ]),
        Line::from(""),
    ])
}

fn render_goal_screen(f: &mut Frame, app: &App, area: Rect) {
    let screen = &app.goals;
    let (form_area, list_area) = form_and_list_areas(screen, area);
    if let Some(form_area) = form_area {
        render_form(f, screen, "Nova meta", form_area);
    }

    let items: Vec<ListItem> = screen
        .records
        .iter()
        .map(|goal| goal_item(goal, &app.currency))
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("Metas Financeiras ({})", screen.records.len())),
        )
        .highlight_symbol("➤ ");

    f.render_stateful_widget(list, list_area, &mut screen.list_state.clone());
}

fn render_notifications(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .notifications
        .iter()
        .map(|n| {
            let text_style = if n.read {
                Style::default().fg(MUTED)
            } else {
                Style::default()
            };
            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(
                        format!("{} ", n.kind.glyph()),
                        Style::default().fg(n.kind.color()),
                    ),
                    Span::styled(n.title.clone(), text_style.add_modifier(Modifier::BOLD)),
                ]),
                Line::from(Span::styled(format!("  {}", n.message), text_style)),
                Line::from(Span::styled(
                    format!("  {}", format_timestamp(n.timestamp)),
                    Style::default().fg(MUTED),
                )),
                Line::from(""),
            ])
        })
        .collect();

    let list =
        List::new(items).block(Block::default().borders(Borders::ALL).title("Notificações"));
    f.render_widget(list, area);
}

fn render_settings(f: &mut Frame, app: &App, area: Rect) {
    let mut lines = Vec::new();
    let mut index = 0;

    for section in &app.settings.sections {
        lines.push(Line::from(Span::styled(
            section.title,
            Style::default().fg(MUTED).add_modifier(Modifier::BOLD),
        )));
        for item in &section.items {
            let marker = match item.action {
                SettingAction::Navigate => "›",
                SettingAction::Toggle(switch) if app.settings.switch_value(switch) => "[on]",
                SettingAction::Toggle(_) => "[off]",
            };
            let style = if index == app.settings_cursor {
                Style::default().add_modifier(Modifier::REVERSED)
            } else {
                Style::default()
            };
            lines.push(Line::from(vec![
                Span::styled(format!("  {:<24}", item.title), style),
                Span::styled(format!("{:<32}", item.subtitle), Style::default().fg(MUTED)),
                Span::raw(marker),
            ]));
            index += 1;
        }
        lines.push(Line::from(""));
    }
    lines.push(Line::from(Span::styled(
        format!("  {}", LOGOUT_LABEL),
        Style::default().fg(Color::Red),
    )));

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title("Configurações"))
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn render_help_panel(f: &mut Frame, app: &App, area: Rect) {
    let key = |k: &'static str| Span::styled(k, Style::default().fg(Color::Yellow));

    let spans = match (app.input_mode(), app.active_tab) {
        (InputMode::Editing, _) => vec![
            key("Tab"),
            Span::raw(" Field • "),
            key("←/→"),
            Span::raw(" Category • "),
            key("Space"),
            Span::raw(" Select • "),
            key("Enter"),
            Span::raw(" Add • "),
            key("Esc"),
            Span::raw(" Close"),
        ],
        (InputMode::Normal, Tab::Expenses | Tab::Income | Tab::Goals) => vec![
            key("Tab"),
            Span::raw(" Screen • "),
            key("a"),
            Span::raw(" Add • "),
            key("↑/↓"),
            Span::raw(" Move • "),
            key("q"),
            Span::raw(" Quit"),
        ],
        (InputMode::Normal, Tab::Settings) => vec![
            key("Tab"),
            Span::raw(" Screen • "),
            key("↑/↓"),
            Span::raw(" Move • "),
            key("Enter"),
            Span::raw(" Toggle • "),
            key("q"),
            Span::raw(" Quit"),
        ],
        (InputMode::Normal, _) => vec![
            key("Tab"),
            Span::raw(" Screen • "),
            key("1-6"),
            Span::raw(" Jump • "),
            key("q"),
            Span::raw(" Quit"),
        ],
    };

    let help = Paragraph::new(Line::from(spans))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(" Help "),
        )
        .alignment(Alignment::Center);

    f.render_widget(help, area);
}
