//! Sidebar menu model.
//!
//! # Design
//! - Groups expand and collapse independently and start collapsed on every mount.
//! - Highlighting compares the full path string; a child route never lights up its group.

/// Expandable sidebar section.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MenuGroup {
    /// Customers, invoices, vouchers.
    Sales,
    /// Products, price lists, discount schedules.
    Inventory,
    /// Chart of accounts.
    Finance,
}

impl MenuGroup {
    /// Groups in display order.
    pub const ALL: [Self; 3] = [Self::Sales, Self::Inventory, Self::Finance];

    /// Translation key and default label.
    #[must_use]
    pub const fn label(self) -> (&'static str, &'static str) {
        match self {
            Self::Sales => ("nav.sales", "Bán hàng"),
            Self::Inventory => ("nav.inventory", "Kho hàng"),
            Self::Finance => ("nav.finance", "Tài chính"),
        }
    }

    /// Leaf entries under the group.
    #[must_use]
    pub const fn items(self) -> &'static [MenuItem] {
        match self {
            Self::Sales => &SALES_ITEMS,
            Self::Inventory => &INVENTORY_ITEMS,
            Self::Finance => &FINANCE_ITEMS,
        }
    }

    const fn index(self) -> usize {
        match self {
            Self::Sales => 0,
            Self::Inventory => 1,
            Self::Finance => 2,
        }
    }
}

/// One navigable sidebar entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuItem {
    /// Translation key.
    pub key: &'static str,
    /// Default label.
    pub label: &'static str,
    /// Route path.
    pub path: &'static str,
}

/// Dashboard entry above the groups.
pub const DASHBOARD_ITEM: MenuItem = MenuItem {
    key: "nav.dashboard",
    label: "Dashboard",
    path: "/dashboard",
};

/// Settings entry below the groups.
pub const SETTINGS_ITEM: MenuItem = MenuItem {
    key: "nav.settings",
    label: "Quản trị",
    path: "/settings",
};

const SALES_ITEMS: [MenuItem; 3] = [
    MenuItem {
        key: "nav.customers",
        label: "Khách hàng",
        path: "/khachhang",
    },
    MenuItem {
        key: "nav.invoices",
        label: "Hóa đơn",
        path: "/hoadon",
    },
    MenuItem {
        key: "nav.vouchers",
        label: "Phiếu giảm giá",
        path: "/phieugiamgia",
    },
];

const INVENTORY_ITEMS: [MenuItem; 3] = [
    MenuItem {
        key: "nav.products",
        label: "Sản phẩm dịch vụ",
        path: "/spdv",
    },
    MenuItem {
        key: "nav.price_lists",
        label: "Bảng giá",
        path: "/banggia",
    },
    MenuItem {
        key: "nav.discounts",
        label: "Định mức chiết khấu",
        path: "/dinhmucck",
    },
];

const FINANCE_ITEMS: [MenuItem; 1] = [MenuItem {
    key: "nav.accounts",
    label: "Tài khoản kế toán",
    path: "/tkkt",
}];

/// Expanded flag per group.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    expanded: [bool; 3],
}

impl MenuState {
    /// Flip one group.
    pub const fn toggle(&mut self, group: MenuGroup) {
        let idx = group.index();
        self.expanded[idx] = !self.expanded[idx];
    }

    /// Whether a group is expanded.
    #[must_use]
    pub const fn is_expanded(&self, group: MenuGroup) -> bool {
        self.expanded[group.index()]
    }
}

/// Exact path equality.
#[must_use]
pub fn is_active(current: &str, item: &str) -> bool {
    current == item
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_start_collapsed_and_toggle_independently() {
        let mut state = MenuState::default();
        assert!(MenuGroup::ALL.iter().all(|g| !state.is_expanded(*g)));
        state.toggle(MenuGroup::Inventory);
        assert!(state.is_expanded(MenuGroup::Inventory));
        assert!(!state.is_expanded(MenuGroup::Sales));
        state.toggle(MenuGroup::Sales);
        state.toggle(MenuGroup::Inventory);
        assert!(state.is_expanded(MenuGroup::Sales));
        assert!(!state.is_expanded(MenuGroup::Inventory));
    }

    #[test]
    fn highlighting_is_exact() {
        assert!(is_active("/spdv", "/spdv"));
        assert!(!is_active("/spdv/create", "/spdv"));
        assert!(!is_active("/spdv/", "/spdv"));
    }

    #[test]
    fn groups_hold_expected_entries() {
        let paths: Vec<_> = MenuGroup::Inventory.items().iter().map(|i| i.path).collect();
        assert_eq!(paths, ["/spdv", "/banggia", "/dinhmucck"]);
        assert_eq!(MenuGroup::Finance.items().len(), 1);
        assert_eq!(MenuGroup::Sales.label().1, "Bán hàng");
    }
}
