//! Records every screen starts with.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;

use crate::models::{
    amount::Amount,
    category::{ExpenseCategory, GoalCategory, IncomeCategory},
    dashboard::{DashboardSummary, MonthlySpending},
    entry::{Expense, Income, RecordId},
    goal::Goal,
    notification::{Notification, NotificationKind},
};
use crate::store::RecordList;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn timestamp(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    date(y, m, d).and_hms_opt(h, min, 0).unwrap_or_default()
}

/// Builds an amount from an integer number of cents.
fn cents(value: i64) -> Amount {
    Amount::new(Decimal::new(value, 2))
}

pub fn expenses() -> RecordList<Expense> {
    RecordList::seeded([
        Expense::new(
            RecordId::new("1"),
            "Supermercado",
            cents(35050),
            ExpenseCategory::Food,
            date(2024, 2, 15),
        ),
        Expense::new(
            RecordId::new("2"),
            "Uber",
            cents(2590),
            ExpenseCategory::Transport,
            date(2024, 2, 14),
        ),
    ])
}

pub fn incomes() -> RecordList<Income> {
    RecordList::seeded([
        Income::new(
            RecordId::new("1"),
            "Salário Mensal",
            cents(500000),
            IncomeCategory::Salary,
            date(2024, 2, 5),
        ),
        Income::new(
            RecordId::new("2"),
            "Projeto Freelance",
            cents(250000),
            IncomeCategory::Freelance,
            date(2024, 2, 10),
        ),
    ])
}

pub fn goals() -> RecordList<Goal> {
    RecordList::seeded([
        Goal {
            id: RecordId::new("1"),
            title: "Viagem para Europa".to_string(),
            target_amount: cents(1_500_000),
            current_amount: cents(500_000),
            deadline: date(2024, 12, 31).into(),
            category: GoalCategory::Travel,
        },
        Goal {
            id: RecordId::new("2"),
            title: "Fundo de Emergência".to_string(),
            target_amount: cents(1_000_000),
            current_amount: cents(750_000),
            deadline: date(2024, 6, 30).into(),
            category: GoalCategory::Emergency,
        },
    ])
}

pub fn notifications() -> Vec<Notification> {
    vec![
        Notification {
            id: RecordId::new("1"),
            title: "Meta Próxima de Conclusão".to_string(),
            message: "Sua meta \"Viagem para Europa\" está 80% concluída! Continue assim!"
                .to_string(),
            kind: NotificationKind::Success,
            timestamp: timestamp(2024, 2, 15, 14, 30),
            read: false,
        },
        Notification {
            id: RecordId::new("2"),
            title: "Alerta de Orçamento".to_string(),
            message: "Você atingiu 90% do limite de gastos em \"Alimentação\" este mês."
                .to_string(),
            kind: NotificationKind::Warning,
            timestamp: timestamp(2024, 2, 14, 9, 15),
            read: false,
        },
        Notification {
            id: RecordId::new("3"),
            title: "Dica Financeira".to_string(),
            message: "Que tal revisar suas assinaturas mensais? Você pode economizar cancelando serviços não utilizados."
                .to_string(),
            kind: NotificationKind::Info,
            timestamp: timestamp(2024, 2, 13, 16, 45),
            read: true,
        },
    ]
}

pub fn dashboard() -> DashboardSummary {
    let series = [
        ("Jan", 3500),
        ("Fev", 3200),
        ("Mar", 3800),
        ("Abr", 3100),
        ("Mai", 3600),
        ("Jun", 3400),
    ];

    DashboardSummary {
        greeting: "Olá, Usuário!".to_string(),
        subtitle: "Seu resumo financeiro".to_string(),
        balance: Decimal::new(340000, 2),
        monthly_change_percent: Decimal::new(25, 1),
        spending: series
            .into_iter()
            .map(|(month, amount)| MonthlySpending { month, amount })
            .collect(),
        quick_actions: vec!["Adicionar Despesa", "Nova Meta"],
    }
}
