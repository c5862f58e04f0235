//! Side menu entries and route matching.

use contracts::enums::Sector;

/// Static descriptor of one side-menu entry.
#[derive(Clone, Copy, Debug)]
pub struct NavItem {
    pub id: &'static str,
    pub label: &'static str,
    pub path: &'static str,
    pub icon: &'static str,
    /// `None` means visible in every sector
    pub visible_in: Option<fn(Sector) -> bool>,
}

impl NavItem {
    pub fn is_visible(&self, sector: Sector) -> bool {
        self.visible_in.map_or(true, |visible| visible(sector))
    }
}

fn informatica_only(sector: Sector) -> bool {
    sector == Sector::Informatica
}

pub const SETTINGS_LABEL: &str = "Configurações";
pub const EQUIPMENT_LOCATION_LABEL: &str = "Local Equipamento";

/// Every entry in display order: the four base items, the sector-scoped
/// equipment location, then settings.
const MENU_ITEMS: [NavItem; 6] = [
    NavItem { id: "home", label: "Início", path: "/", icon: "home", visible_in: None },
    NavItem { id: "service_orders", label: "Ordens de Serviço", path: "/ordens", icon: "clipboard", visible_in: None },
    NavItem { id: "employees", label: "Funcionários", path: "/funcionarios", icon: "users", visible_in: None },
    NavItem { id: "situations", label: "Situações", path: "/situacoes", icon: "tag", visible_in: None },
    NavItem {
        id: "equipment_location",
        label: EQUIPMENT_LOCATION_LABEL,
        path: "/local-equipamento",
        icon: "map-pin",
        visible_in: Some(informatica_only),
    },
    NavItem { id: "settings", label: SETTINGS_LABEL, path: "/configuracoes", icon: "settings", visible_in: None },
];

/// Ordered side-menu entries visible in `sector`.
pub fn visible_nav_items(sector: Sector) -> Vec<NavItem> {
    MENU_ITEMS
        .iter()
        .copied()
        .filter(|item| item.is_visible(sector))
        .collect()
}

/// Root matches only itself, other paths match themselves and their subpaths.
pub fn is_route_active(current: &str, target: &str) -> bool {
    if target == "/" {
        return current == "/";
    }
    match current.strip_prefix(target) {
        Some(rest) => rest.is_empty() || rest.starts_with('/'),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(sector: Sector) -> Vec<&'static str> {
        visible_nav_items(sector).iter().map(|i| i.label).collect()
    }

    #[test]
    fn test_equipment_location_iff_informatica() {
        for sector in Sector::all() {
            let has_it = labels(sector).contains(&EQUIPMENT_LOCATION_LABEL);
            assert_eq!(has_it, sector == Sector::Informatica, "sector {}", sector);
        }
    }

    #[test]
    fn test_switch_to_informatica_inserts_before_settings() {
        let before = labels(Sector::Celulares);
        let after = labels(Sector::Informatica);
        assert_eq!(after.len(), before.len() + 1);

        let pos = after.iter().position(|l| *l == EQUIPMENT_LOCATION_LABEL).unwrap();
        assert_eq!(after[pos + 1], SETTINGS_LABEL);
        assert_eq!(pos, 4);
    }

    #[test]
    fn test_order_is_sector_independent() {
        let expected = ["Início", "Ordens de Serviço", "Funcionários", "Situações", SETTINGS_LABEL];
        assert_eq!(labels(Sector::Celulares), expected);

        let mut informatica = labels(Sector::Informatica);
        informatica.retain(|l| *l != EQUIPMENT_LOCATION_LABEL);
        assert_eq!(informatica, expected);
        assert_eq!(labels(Sector::Celulares).last(), Some(&SETTINGS_LABEL));
    }

    #[test]
    fn test_ids_and_paths_unique() {
        let items = visible_nav_items(Sector::Informatica);
        for (i, a) in items.iter().enumerate() {
            for b in &items[i + 1..] {
                assert_ne!(a.id, b.id);
                assert_ne!(a.path, b.path);
            }
        }
    }

    #[test]
    fn test_root_is_exact_match() {
        assert!(is_route_active("/", "/"));
        assert!(!is_route_active("/ordens", "/"));
    }

    #[test]
    fn test_prefix_match_on_segment_boundary() {
        assert!(is_route_active("/ordens", "/ordens"));
        assert!(is_route_active("/ordens/42", "/ordens"));
        assert!(is_route_active("/ordens/", "/ordens"));
        assert!(!is_route_active("/ordens-antigas", "/ordens"));
        assert!(!is_route_active("/", "/ordens"));
    }
}
