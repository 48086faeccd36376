use std::fmt;

/// A closed set of labels used to classify one kind of record.
pub trait CategorySet: Copy + PartialEq + fmt::Debug + 'static {
    fn as_str(&self) -> &'static str;

    /// Every category in display order.
    fn all() -> &'static [Self];

    fn from_label(label: &str) -> Option<Self> {
        Self::all().iter().copied().find(|c| c.as_str() == label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExpenseCategory {
    Food,
    Transport,
    Housing,
    Health,
    Education,
    Leisure,
    Other,
}

impl CategorySet for ExpenseCategory {
    fn as_str(&self) -> &'static str {
        match self {
            ExpenseCategory::Food => "Alimentação",
            ExpenseCategory::Transport => "Transporte",
            ExpenseCategory::Housing => "Moradia",
            ExpenseCategory::Health => "Saúde",
            ExpenseCategory::Education => "Educação",
            ExpenseCategory::Leisure => "Lazer",
            ExpenseCategory::Other => "Outros",
        }
    }

    fn all() -> &'static [Self] {
        &[
            ExpenseCategory::Food,
            ExpenseCategory::Transport,
            ExpenseCategory::Housing,
            ExpenseCategory::Health,
            ExpenseCategory::Education,
            ExpenseCategory::Leisure,
            ExpenseCategory::Other,
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IncomeCategory {
    Salary,
    Freelance,
    Investments,
    Rent,
    Other,
}

impl CategorySet for IncomeCategory {
    fn as_str(&self) -> &'static str {
        match self {
            IncomeCategory::Salary => "Salário",
            IncomeCategory::Freelance => "Freelance",
            IncomeCategory::Investments => "Investimentos",
            IncomeCategory::Rent => "Aluguel",
            IncomeCategory::Other => "Outros",
        }
    }

    fn all() -> &'static [Self] {
        &[
            IncomeCategory::Salary,
            IncomeCategory::Freelance,
            IncomeCategory::Investments,
            IncomeCategory::Rent,
            IncomeCategory::Other,
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GoalCategory {
    Emergency,
    Travel,
    Education,
    Investment,
    Home,
    Car,
    Other,
}

impl CategorySet for GoalCategory {
    fn as_str(&self) -> &'static str {
        match self {
            GoalCategory::Emergency => "Emergência",
            GoalCategory::Travel => "Viagem",
            GoalCategory::Education => "Educação",
            GoalCategory::Investment => "Investimento",
            GoalCategory::Home => "Casa",
            GoalCategory::Car => "Carro",
            GoalCategory::Other => "Outros",
        }
    }

    fn all() -> &'static [Self] {
        &[
            GoalCategory::Emergency,
            GoalCategory::Travel,
            GoalCategory::Education,
            GoalCategory::Investment,
            GoalCategory::Home,
            GoalCategory::Car,
            GoalCategory::Other,
        ]
    }
}

macro_rules! impl_display {
    ($($ty:ty),*) => {
        $(impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        })*
    };
}

impl_display!(ExpenseCategory, IncomeCategory, GoalCategory);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expense_categories_keep_display_order() {
        let labels: Vec<_> = ExpenseCategory::all().iter().map(|c| c.as_str()).collect();
        assert_eq!(
            labels,
            ["Alimentação", "Transporte", "Moradia", "Saúde", "Educação", "Lazer", "Outros"]
        );
    }

    #[test]
    fn lookup_by_label_is_per_domain() {
        assert_eq!(IncomeCategory::from_label("Aluguel"), Some(IncomeCategory::Rent));
        assert_eq!(GoalCategory::from_label("Aluguel"), None);
        assert_eq!(GoalCategory::from_label("Educação"), Some(GoalCategory::Education));
        assert_eq!(ExpenseCategory::from_label("Educação"), Some(ExpenseCategory::Education));
    }

    #[test]
    fn display_uses_label() {
        assert_eq!(GoalCategory::Car.to_string(), "Carro");
    }
}
