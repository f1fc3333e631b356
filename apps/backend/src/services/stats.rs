//! Read-only analytics over the payment ledger.

use std::collections::BTreeMap;

use sea_orm::ConnectionTrait;
use serde::Serialize;

use crate::repos::menu::{self, MenuItem};
use crate::repos::payments::{self, Payment};
use crate::repos::users;
use crate::AppError;

/// Collection cardinalities plus exact ledger revenue. Wire names follow the
/// storefront's existing dashboard contract.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryStats {
    pub user: u64,
    #[serde(rename = "menuItems")]
    pub menu_items: u64,
    pub orders: u64,
    pub revenue: f64,
}

/// Per-category sales derived from the ledger joined against the current
/// catalog. `category` serializes as `_id` to match the dashboard contract.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorySales {
    #[serde(rename = "_id")]
    pub category: String,
    pub quantity: u64,
    pub revenue: f64,
}

/// Counts are plain cardinalities (staleness is acceptable); revenue is the
/// exact SUM over the ledger, 0 for an empty one.
pub async fn summary_stats<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<SummaryStats, AppError> {
    let user = users::count(conn).await?;
    let menu_items = menu::count(conn).await?;
    let orders = payments::count(conn).await?;
    let revenue = payments::revenue_total(conn).await?;

    Ok(SummaryStats {
        user,
        menu_items,
        orders,
        revenue,
    })
}

/// Expand every ledger row's menu_item_ids into purchase events, join each
/// against the current catalog, and group by current category.
///
/// Revenue uses the current menu price, not the price charged at purchase:
/// a later price or category change retroactively shifts historical
/// breakdowns. Ids whose menu item has since been deleted drop out of the
/// result, like the inner join they replace.
pub async fn category_breakdown<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<CategorySales>, AppError> {
    let ledger = payments::list_all(conn).await?;

    let mut ids: Vec<i64> = ledger
        .iter()
        .flat_map(|p| p.menu_item_ids.iter().copied())
        .collect();
    ids.sort_unstable();
    ids.dedup();

    let catalog = menu::find_by_ids(conn, &ids).await?;

    Ok(breakdown_from(&ledger, &catalog))
}

/// Pure grouping pass, separated from storage so it can be tested directly.
fn breakdown_from(ledger: &[Payment], catalog: &[MenuItem]) -> Vec<CategorySales> {
    let by_id: BTreeMap<i64, &MenuItem> = catalog.iter().map(|m| (m.id, m)).collect();

    let mut groups: BTreeMap<&str, (u64, f64)> = BTreeMap::new();
    for payment in ledger {
        for id in &payment.menu_item_ids {
            if let Some(item) = by_id.get(id) {
                let entry = groups.entry(item.category.as_str()).or_insert((0, 0.0));
                entry.0 += 1;
                entry.1 += item.price;
            }
        }
    }

    groups
        .into_iter()
        .map(|(category, (quantity, revenue))| CategorySales {
            category: category.to_string(),
            quantity,
            revenue,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use time::OffsetDateTime;

    use super::{breakdown_from, CategorySales};
    use crate::repos::menu::MenuItem;
    use crate::repos::payments::Payment;

    fn menu_item(id: i64, category: &str, price: f64) -> MenuItem {
        MenuItem {
            id,
            name: format!("item-{id}"),
            price,
            category: category.to_string(),
            recipe: None,
            image: None,
        }
    }

    fn payment(id: i64, menu_item_ids: Vec<i64>, total: f64) -> Payment {
        Payment {
            id,
            email: "ada@example.com".to_string(),
            total,
            cart_ids: Vec::new(),
            menu_item_ids,
            created_at: OffsetDateTime::now_utc(),
        }
    }

    #[test]
    fn empty_ledger_yields_empty_breakdown() {
        assert_eq!(breakdown_from(&[], &[]), Vec::<CategorySales>::new());
    }

    #[test]
    fn events_group_by_current_category() {
        let catalog = vec![
            menu_item(1, "dessert", 4.5),
            menu_item(2, "dessert", 6.0),
            menu_item(3, "pizza", 12.0),
        ];
        let ledger = vec![
            payment(1, vec![1, 3], 16.5),
            payment(2, vec![2, 3, 3], 30.0),
        ];

        let breakdown = breakdown_from(&ledger, &catalog);

        assert_eq!(
            breakdown,
            vec![
                CategorySales {
                    category: "dessert".to_string(),
                    quantity: 2,
                    revenue: 10.5,
                },
                CategorySales {
                    category: "pizza".to_string(),
                    quantity: 3,
                    revenue: 36.0,
                },
            ]
        );
    }

    #[test]
    fn revenue_tracks_current_price_not_charged_price() {
        // Sold at 10.0 (payment total), repriced to 15.0 afterwards
        let catalog = vec![menu_item(1, "salad", 15.0)];
        let ledger = vec![payment(1, vec![1], 10.0)];

        let breakdown = breakdown_from(&ledger, &catalog);

        assert_eq!(breakdown.len(), 1);
        assert_eq!(breakdown[0].revenue, 15.0);
    }

    #[test]
    fn deleted_menu_items_drop_out() {
        // Item 2 no longer exists in the catalog
        let catalog = vec![menu_item(1, "drinks", 3.0)];
        let ledger = vec![payment(1, vec![1, 2], 8.0)];

        let breakdown = breakdown_from(&ledger, &catalog);

        assert_eq!(breakdown.len(), 1);
        assert_eq!(breakdown[0].quantity, 1);
        assert_eq!(breakdown[0].revenue, 3.0);
    }
}
