use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Switch {
    Notifications,
    DarkMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingAction {
    /// Opens a sub-screen. None exist yet, so selecting it does nothing.
    Navigate,
    Toggle(Switch),
}

#[derive(Debug, Clone, PartialEq)]
pub struct SettingItem {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub action: SettingAction,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SettingSection {
    pub title: &'static str,
    pub items: Vec<SettingItem>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub sections: Vec<SettingSection>,
    pub notifications_enabled: bool,
    pub dark_mode: bool,
}

pub const LOGOUT_LABEL: &str = "Sair";

impl Settings {
    pub fn new(notifications_enabled: bool, dark_mode: bool) -> Self {
        let item =
            |title: &'static str, subtitle: &'static str, action: SettingAction| SettingItem {
                title,
                subtitle,
                action,
            };
        let sections = vec![
            SettingSection {
                title: "Conta",
                items: vec![
                    item("Perfil", "Editar informações pessoais", SettingAction::Navigate),
                    item(
                        "Métodos de Pagamento",
                        "Gerenciar cartões e contas",
                        SettingAction::Navigate,
                    ),
                    item("Categorias", "Personalizar categorias", SettingAction::Navigate),
                ],
            },
            SettingSection {
                title: "Preferências",
                items: vec![
                    item(
                        "Notificações",
                        "Gerenciar alertas",
                        SettingAction::Toggle(Switch::Notifications),
                    ),
                    item(
                        "Modo Escuro",
                        "Alterar tema do aplicativo",
                        SettingAction::Toggle(Switch::DarkMode),
                    ),
                ],
            },
            SettingSection {
                title: "Segurança",
                items: vec![item(
                    "Privacidade",
                    "Configurações de segurança",
                    SettingAction::Navigate,
                )],
            },
            SettingSection {
                title: "Suporte",
                items: vec![item("Ajuda", "Perguntas frequentes", SettingAction::Navigate)],
            },
        ];

        Self {
            sections,
            notifications_enabled,
            dark_mode,
        }
    }

    /// Items across all sections, in display order.
    pub fn items(&self) -> impl Iterator<Item = &SettingItem> {
        self.sections.iter().flat_map(|s| s.items.iter())
    }

    pub fn item_count(&self) -> usize {
        self.sections.iter().map(|s| s.items.len()).sum()
    }

    pub fn switch_value(&self, switch: Switch) -> bool {
        match switch {
            Switch::Notifications => self.notifications_enabled,
            Switch::DarkMode => self.dark_mode,
        }
    }

    /// Runs the action of the item at `index`. Returns the new switch value
    /// when the item is a switch.
    pub fn activate(&mut self, index: usize) -> Option<bool> {
        let action = self.items().nth(index)?.action;
        match action {
            SettingAction::Navigate => None,
            SettingAction::Toggle(switch) => {
                let value = match switch {
                    Switch::Notifications => &mut self.notifications_enabled,
                    Switch::DarkMode => &mut self.dark_mode,
                };
                *value = !*value;
                debug!(?switch, enabled = *value, "setting toggled");
                Some(*value)
            }
        }
    }
}
