//! # Derived Views
//!
//! Read-only views the screens render from. Each is recomputed from the
//! current collections on every call; nothing is cached, so a view can never
//! disagree with the data it was derived from.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use stockroom_core::{ComponentCounts, Employee, Money, Product, Sale};

use crate::inventory::Inventory;

/// Number of rows in each dashboard preview.
pub const DASHBOARD_PREVIEW_LEN: usize = 3;

// =============================================================================
// Employee Search
// =============================================================================

/// The employee fields the search box can target.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmployeeSearchField {
    #[default]
    Name,
    Id,
    Email,
    Contact,
}

impl EmployeeSearchField {
    /// Reads the targeted field from an employee.
    pub fn value<'a>(&self, employee: &'a Employee) -> &'a str {
        match self {
            EmployeeSearchField::Name => &employee.name,
            EmployeeSearchField::Id => &employee.id,
            EmployeeSearchField::Email => &employee.email,
            EmployeeSearchField::Contact => &employee.contact,
        }
    }
}

impl FromStr for EmployeeSearchField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "name" => Ok(EmployeeSearchField::Name),
            "id" => Ok(EmployeeSearchField::Id),
            "email" => Ok(EmployeeSearchField::Email),
            "contact" => Ok(EmployeeSearchField::Contact),
            _ => Err(format!("Unknown employee search field: {}", s)),
        }
    }
}

impl fmt::Display for EmployeeSearchField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EmployeeSearchField::Name => "name",
            EmployeeSearchField::Id => "id",
            EmployeeSearchField::Email => "email",
            EmployeeSearchField::Contact => "contact",
        };
        f.write_str(name)
    }
}

/// Case-insensitive substring test. An empty needle matches everything.
fn contains_ignore_case(haystack: &str, needle_lower: &str) -> bool {
    needle_lower.is_empty() || haystack.to_lowercase().contains(needle_lower)
}

// =============================================================================
// Dashboard
// =============================================================================

/// Everything the dashboard screen shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub total_employees: usize,
    pub total_suppliers: usize,
    pub total_products: usize,
    pub total_sales: usize,
    pub total_revenue: Money,
    /// Sum of the four component counters.
    pub total_components: u64,
    /// Sum of component-part line quantities.
    pub total_component_parts: u64,
    pub components: ComponentCounts,
    /// First rows in insertion order.
    pub recent_products: Vec<Product>,
    pub recent_sales: Vec<Sale>,
}

// =============================================================================
// Queries
// =============================================================================

impl Inventory {
    /// Employees whose `field` contains `term`, ignoring case.
    pub fn search_employees(&self, field: EmployeeSearchField, term: &str) -> Vec<&Employee> {
        let term = term.trim().to_lowercase();
        self.employees()
            .iter()
            .filter(|e| contains_ignore_case(field.value(e), &term))
            .collect()
    }

    /// Products whose name or category contains `term`, ignoring case.
    pub fn filter_products(&self, term: &str) -> Vec<&Product> {
        let term = term.trim().to_lowercase();
        self.products()
            .iter()
            .filter(|p| {
                contains_ignore_case(&p.name, &term) || contains_ignore_case(&p.category, &term)
            })
            .collect()
    }

    /// Products that can appear in the sale screen's picker.
    pub fn sellable_products(&self) -> Vec<&Product> {
        self.products().iter().filter(|p| p.is_sellable()).collect()
    }

    /// Products still carrying `category` as their category name.
    pub fn products_in_category(&self, category: &str) -> Vec<&Product> {
        self.products()
            .iter()
            .filter(|p| p.category.eq_ignore_ascii_case(category))
            .collect()
    }

    /// Products still carrying `supplier` as their supplier name.
    pub fn products_from_supplier(&self, supplier: &str) -> Vec<&Product> {
        self.products()
            .iter()
            .filter(|p| p.supplier.eq_ignore_ascii_case(supplier))
            .collect()
    }

    pub fn sales_count(&self) -> usize {
        self.sales().len()
    }

    pub fn total_revenue(&self) -> Money {
        self.sales().iter().map(|s| s.total).sum()
    }

    pub fn total_component_part_quantity(&self) -> u64 {
        self.component_parts()
            .iter()
            .map(|p| u64::from(p.quantity))
            .sum()
    }

    pub fn dashboard(&self) -> DashboardSummary {
        let components = self.components();
        DashboardSummary {
            total_employees: self.employees().len(),
            total_suppliers: self.suppliers().len(),
            total_products: self.products().len(),
            total_sales: self.sales_count(),
            total_revenue: self.total_revenue(),
            total_components: components.total(),
            total_component_parts: self.total_component_part_quantity(),
            components,
            recent_products: self.products().preview(DASHBOARD_PREVIEW_LEN).to_vec(),
            recent_sales: self.sales().preview(DASHBOARD_PREVIEW_LEN).to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use stockroom_core::{ComponentPartPatch, EmployeePatch, ProductPatch, SalePatch};

    fn record(inventory: &mut Inventory, product_id: &str, quantity: u32) {
        let id = inventory.sales_mut().next_id();
        let product = inventory.products().get(product_id).unwrap().clone();
        let date = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        inventory.record_sale(Sale::from_product(id, &product, quantity, "Ravi", date), false);
    }

    fn fresh_revenue(inventory: &Inventory) -> i64 {
        inventory.sales().iter().map(|s| s.total.minor()).sum()
    }

    #[test]
    fn test_search_employees_by_each_field() {
        let inventory = Inventory::seeded();

        let by_name = inventory.search_employees(EmployeeSearchField::Name, "meg");
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].id, "103");

        let by_id = inventory.search_employees(EmployeeSearchField::Id, "102");
        assert_eq!(by_id[0].name, "Rangesh");

        let by_email = inventory.search_employees(EmployeeSearchField::Email, "WEBCODE");
        assert_eq!(by_email.len(), 1);

        let by_contact = inventory.search_employees(EmployeeSearchField::Contact, "98765");
        assert_eq!(by_contact.len(), 2);

        assert_eq!(inventory.search_employees(EmployeeSearchField::Name, "").len(), 2);
        assert!(inventory
            .search_employees(EmployeeSearchField::Name, "nobody")
            .is_empty());
    }

    #[test]
    fn test_added_employee_is_found_by_name() {
        let mut inventory = Inventory::seeded();
        inventory.employees_mut().create(EmployeePatch {
            name: Some("Test".to_string()),
            email: Some("t@x.com".to_string()),
            ..Default::default()
        });

        assert_eq!(inventory.employees().len(), 3);
        let found = inventory.search_employees(EmployeeSearchField::Name, "Test");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].email, "t@x.com");
    }

    #[test]
    fn test_search_field_parsing() {
        assert_eq!("Email".parse::<EmployeeSearchField>(), Ok(EmployeeSearchField::Email));
        assert_eq!("id".parse::<EmployeeSearchField>(), Ok(EmployeeSearchField::Id));
        assert!("salary".parse::<EmployeeSearchField>().is_err());
        assert_eq!(EmployeeSearchField::Contact.to_string(), "contact");
    }

    #[test]
    fn test_filter_products_by_name_or_category() {
        let mut inventory = Inventory::seeded();
        inventory.products_mut().create(ProductPatch {
            name: Some("Smart TV".to_string()),
            category: Some("Electronics".to_string()),
            supplier: Some("Ajay2".to_string()),
            ..Default::default()
        });

        assert_eq!(inventory.filter_products("x3").len(), 2);
        assert_eq!(inventory.filter_products("mobile").len(), 2);
        assert_eq!(inventory.filter_products("ELECTRON").len(), 1);
        assert_eq!(inventory.filter_products("").len(), 3);
    }

    #[test]
    fn test_sellable_products_excludes_inactive_and_empty() {
        let mut inventory = Inventory::seeded();
        assert_eq!(inventory.sellable_products().len(), 1);

        inventory.products_mut().update(
            "1",
            ProductPatch {
                qty: Some(0),
                ..Default::default()
            },
        );
        assert!(inventory.sellable_products().is_empty());
    }

    #[test]
    fn test_products_referencing_names() {
        let inventory = Inventory::seeded();
        assert_eq!(inventory.products_in_category("mobile").len(), 2);
        assert!(inventory.products_in_category("Clothes").is_empty());
        assert_eq!(inventory.products_from_supplier("Ajay").len(), 2);
        assert!(inventory.products_from_supplier("Ajay2").is_empty());
    }

    #[test]
    fn test_revenue_matches_fresh_sum_after_mutations() {
        let mut inventory = Inventory::seeded();
        assert!(inventory.total_revenue().is_zero());
        assert_eq!(inventory.sales_count(), 0);

        record(&mut inventory, "1", 2);
        record(&mut inventory, "1", 1);
        record(&mut inventory, "2", 5);
        assert_eq!(inventory.total_revenue().minor(), fresh_revenue(&inventory));
        assert_eq!(inventory.total_revenue(), Money::from_major(69_000 * 3 + 21_000 * 5));
        assert_eq!(inventory.sales_count(), 3);

        inventory.sales_mut().delete("2");
        assert_eq!(inventory.total_revenue().minor(), fresh_revenue(&inventory));

        inventory.sales_mut().update(
            "1",
            SalePatch {
                total: Some(Money::from_major(1)),
                ..Default::default()
            },
        );
        assert_eq!(inventory.total_revenue().minor(), fresh_revenue(&inventory));
        assert_eq!(inventory.total_revenue(), Money::from_major(1 + 21_000 * 5));
    }

    #[test]
    fn test_component_part_total_tracks_collection() {
        let mut inventory = Inventory::seeded();
        assert_eq!(inventory.total_component_part_quantity(), 375);

        let id = inventory
            .component_parts_mut()
            .create(ComponentPartPatch {
                name: Some("Sensors".to_string()),
                quantity: Some(25),
            })
            .id
            .clone();
        assert_eq!(inventory.total_component_part_quantity(), 400);

        inventory.component_parts_mut().delete(&id);
        inventory.component_parts_mut().delete("1");
        assert_eq!(inventory.total_component_part_quantity(), 225);
    }

    #[test]
    fn test_dashboard_summary() {
        let mut inventory = Inventory::seeded();
        record(&mut inventory, "1", 2);

        let summary = inventory.dashboard();
        assert_eq!(summary.total_employees, 2);
        assert_eq!(summary.total_suppliers, 2);
        assert_eq!(summary.total_products, 2);
        assert_eq!(summary.total_sales, 1);
        assert_eq!(summary.total_revenue, Money::from_major(138_000));
        assert_eq!(summary.total_components, 375);
        assert_eq!(summary.total_component_parts, 375);
        assert_eq!(summary.recent_products.len(), 2);
        assert_eq!(summary.recent_products[0].id, "1");
        assert_eq!(summary.recent_sales.len(), 1);
    }
}
