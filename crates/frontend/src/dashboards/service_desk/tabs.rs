//! Tabs of the service-desk dashboard.

/// Fixed tabs, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum DashboardTab {
    #[default]
    Orders,
    Employees,
    Situations,
    Withdrawal,
}

/// What a tab renders
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TabPanel {
    ServiceOrderTable,
    Placeholder(&'static str),
}

impl DashboardTab {
    pub fn all() -> [DashboardTab; 4] {
        [
            DashboardTab::Orders,
            DashboardTab::Employees,
            DashboardTab::Situations,
            DashboardTab::Withdrawal,
        ]
    }

    /// Value used by the tab list
    pub fn code(&self) -> &'static str {
        match self {
            DashboardTab::Orders => "orders",
            DashboardTab::Employees => "employees",
            DashboardTab::Situations => "situations",
            DashboardTab::Withdrawal => "withdrawal",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|t| t.code() == code)
    }

    pub fn label(&self) -> &'static str {
        match self {
            DashboardTab::Orders => "Ordens de Serviço",
            DashboardTab::Employees => "Funcionários",
            DashboardTab::Situations => "Situações",
            DashboardTab::Withdrawal => "Retirada",
        }
    }

    pub fn panel(&self) -> TabPanel {
        match self {
            DashboardTab::Orders => TabPanel::ServiceOrderTable,
            DashboardTab::Employees => TabPanel::Placeholder("Cadastro de funcionários em breve."),
            DashboardTab::Situations => TabPanel::Placeholder("Configuração de situações em breve."),
            DashboardTab::Withdrawal => {
                TabPanel::Placeholder("Controle de retirada de equipamentos em breve.")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_orders_renders_table() {
        assert_eq!(DashboardTab::default(), DashboardTab::Orders);
        assert_eq!(DashboardTab::Orders.panel(), TabPanel::ServiceOrderTable);

        for tab in [DashboardTab::Employees, DashboardTab::Situations, DashboardTab::Withdrawal] {
            match tab.panel() {
                TabPanel::Placeholder(text) => assert!(!text.is_empty()),
                TabPanel::ServiceOrderTable => panic!("{:?} must not render the table", tab),
            }
        }
    }

    #[test]
    fn test_placeholder_texts() {
        assert_eq!(
            DashboardTab::Employees.panel(),
            TabPanel::Placeholder("Cadastro de funcionários em breve.")
        );
        assert_eq!(
            DashboardTab::Withdrawal.panel(),
            TabPanel::Placeholder("Controle de retirada de equipamentos em breve.")
        );
    }

    #[test]
    fn test_codes() {
        for tab in DashboardTab::all() {
            assert_eq!(DashboardTab::from_code(tab.code()), Some(tab));
        }
        assert_eq!(DashboardTab::from_code("reports"), None);
    }
}
