//! Menu assembly
//!
//! Joins visible products with their promotions for a given local day and
//! time, then groups and orders the result. No I/O, no clock reads: the same
//! inputs always produce the same menu.

use chrono::NaiveTime;
use shared::models::{
    MenuEntry, MenuSection, Product, ProductCategory, Promotion, PromotionSummary, Weekday,
};
use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};

use super::CategoryOrder;
use crate::promotions::is_promotion_active;

/// Builds menu sections from products and promotions
#[derive(Debug, Clone, Default)]
pub struct MenuAssembler {
    order: CategoryOrder,
}

/// How one promotion stands against its product right now
struct Candidate<'a> {
    promotion: &'a Promotion,
    applies: bool,
}

impl MenuAssembler {
    pub fn new(order: CategoryOrder) -> Self {
        Self { order }
    }

    pub fn category_order(&self) -> &CategoryOrder {
        &self.order
    }

    /// Build the menu for `day` at `now` (local wall clock).
    ///
    /// Hidden products are dropped. Promotions referencing unknown products
    /// are ignored.
    pub fn assemble(
        &self,
        products: &[Product],
        promotions: &[Promotion],
        day: Weekday,
        now: NaiveTime,
    ) -> Vec<MenuSection> {
        let mut by_product: HashMap<i64, Vec<&Promotion>> = HashMap::new();
        for promotion in promotions {
            by_product
                .entry(promotion.product_id)
                .or_default()
                .push(promotion);
        }

        let mut sections: BTreeMap<(usize, usize), (ProductCategory, Vec<MenuEntry>)> =
            BTreeMap::new();

        for product in products.iter().filter(|p| p.visible) {
            let candidates = by_product
                .get(&product.id)
                .map(Vec::as_slice)
                .unwrap_or_default();
            let entry = self.entry(product, candidates, day, now);

            sections
                .entry(self.order.rank(product.category))
                .or_insert_with(|| (product.category, Vec::new()))
                .1
                .push(entry);
        }

        sections
            .into_values()
            .map(|(category, mut entries)| {
                entries.sort_by(compare_entries);
                MenuSection {
                    category,
                    products: entries,
                }
            })
            .collect()
    }

    /// Menu line for one product given all promotions referencing it
    pub fn entry(
        &self,
        product: &Product,
        promotions: &[&Promotion],
        day: Weekday,
        now: NaiveTime,
    ) -> MenuEntry {
        let chosen = promotions
            .iter()
            .map(|&promotion| Candidate {
                promotion,
                applies: applies(product, promotion, day, now),
            })
            .max_by(compare_candidates);

        let (promotional_price, promotion) = match chosen {
            Some(Candidate {
                promotion,
                applies: true,
            }) => (
                Some(promotion.promotional_price),
                Some(PromotionSummary {
                    description: promotion.description.clone(),
                    active: true,
                }),
            ),
            Some(Candidate {
                promotion,
                applies: false,
            }) => (
                None,
                Some(PromotionSummary {
                    description: promotion.description.clone(),
                    active: false,
                }),
            ),
            None => (None, None),
        };

        MenuEntry {
            id: product.id,
            name: product.name.clone(),
            price: product.price,
            promotional_price,
            category: product.category,
            order: product.order,
            promotion,
        }
    }
}

/// Active window and still cheaper than the product
fn applies(product: &Product, promotion: &Promotion, day: Weekday, now: NaiveTime) -> bool {
    if !is_promotion_active(promotion, day, now) {
        return false;
    }
    if promotion.promotional_price >= product.price {
        tracing::warn!(
            product_id = product.id,
            promotion_id = promotion.id,
            product_price = %product.price,
            promotional_price = %promotion.promotional_price,
            "Stale promotion: promotional price is not below product price, ignoring"
        );
        return false;
    }
    true
}

/// Applying beats not applying, then newest `created_at`, then highest id
fn compare_candidates(a: &Candidate<'_>, b: &Candidate<'_>) -> Ordering {
    a.applies
        .cmp(&b.applies)
        .then(a.promotion.created_at.cmp(&b.promotion.created_at))
        .then(a.promotion.id.cmp(&b.promotion.id))
}

/// `order` ascending, then name, then id
fn compare_entries(a: &MenuEntry, b: &MenuEntry) -> Ordering {
    a.order
        .cmp(&b.order)
        .then_with(|| a.name.cmp(&b.name))
        .then(a.id.cmp(&b.id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use shared::models::{ProductCreate, TimeOfDay};
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn at(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn product(id: i64, name: &str, category: ProductCategory, order: i32) -> Product {
        Product::new(
            id,
            ProductCreate {
                name: name.to_string(),
                price: dec("20.00"),
                category,
                visible: true,
                order: Some(order),
            },
            0,
        )
    }

    fn promotion(id: i64, product_id: i64, price: &str, start: &str, end: &str) -> Promotion {
        Promotion {
            id,
            product_id,
            description: format!("Promo {id}"),
            promotional_price: dec(price),
            days: [Weekday::Monday].into_iter().collect(),
            start_time: TimeOfDay::parse(start).unwrap(),
            end_time: TimeOfDay::parse(end).unwrap(),
            created_at: id,
            updated_at: id,
        }
    }

    fn names(section: &MenuSection) -> Vec<&str> {
        section.products.iter().map(|e| e.name.as_str()).collect()
    }

    #[test]
    fn test_category_order_and_skipped_sections() {
        let products = vec![
            product(1, "Suco", ProductCategory::Bebidas, 0),
            product(2, "Moqueca", ProductCategory::PratosPrincipais, 0),
        ];
        let menu = MenuAssembler::default().assemble(&products, &[], Weekday::Monday, at(12, 0));

        let categories: Vec<_> = menu.iter().map(|s| s.category).collect();
        assert_eq!(
            categories,
            vec![ProductCategory::PratosPrincipais, ProductCategory::Bebidas]
        );
    }

    #[test]
    fn test_injected_category_order() {
        let products = vec![
            product(1, "Suco", ProductCategory::Bebidas, 0),
            product(2, "Bolinho", ProductCategory::Entradas, 0),
            product(3, "Pudim", ProductCategory::Sobremesas, 0),
        ];
        let assembler = MenuAssembler::new(CategoryOrder::from_labels("Bebidas").unwrap());
        let menu = assembler.assemble(&products, &[], Weekday::Monday, at(12, 0));

        let categories: Vec<_> = menu.iter().map(|s| s.category).collect();
        assert_eq!(
            categories,
            vec![
                ProductCategory::Bebidas,
                ProductCategory::Entradas,
                ProductCategory::Sobremesas
            ]
        );
    }

    #[test]
    fn test_items_sorted_by_order_then_name() {
        let products = vec![
            product(1, "Suco de uva", ProductCategory::Bebidas, 2),
            product(2, "Limonada", ProductCategory::Bebidas, 1),
            product(3, "Refrigerante", ProductCategory::Bebidas, 0),
            product(4, "Cerveja", ProductCategory::Bebidas, 1),
        ];
        let menu = MenuAssembler::default().assemble(&products, &[], Weekday::Monday, at(12, 0));

        assert_eq!(menu.len(), 1);
        assert_eq!(
            names(&menu[0]),
            vec!["Refrigerante", "Cerveja", "Limonada", "Suco de uva"]
        );
    }

    #[test]
    fn test_invisible_products_are_dropped() {
        let mut hidden = product(1, "Secreto", ProductCategory::Entradas, 0);
        hidden.visible = false;
        let products = vec![hidden, product(2, "Pastel", ProductCategory::Entradas, 0)];
        let promotions = vec![promotion(10, 1, "5.00", "00:00", "23:45")];

        let menu =
            MenuAssembler::default().assemble(&products, &promotions, Weekday::Monday, at(12, 0));
        assert_eq!(menu.len(), 1);
        assert_eq!(names(&menu[0]), vec!["Pastel"]);
    }

    #[test]
    fn test_active_inactive_and_absent_promotions() {
        let products = vec![
            product(1, "A", ProductCategory::Entradas, 0),
            product(2, "B", ProductCategory::Entradas, 1),
            product(3, "C", ProductCategory::Entradas, 2),
        ];
        let promotions = vec![
            promotion(10, 1, "15.00", "11:00", "14:00"),
            promotion(11, 2, "15.00", "18:00", "20:00"),
        ];

        let menu =
            MenuAssembler::default().assemble(&products, &promotions, Weekday::Monday, at(12, 0));
        let entries = &menu[0].products;

        assert_eq!(entries[0].promotional_price, Some(dec("15.00")));
        assert_eq!(
            entries[0].promotion,
            Some(PromotionSummary {
                description: "Promo 10".into(),
                active: true
            })
        );

        assert_eq!(entries[1].promotional_price, None);
        assert_eq!(entries[1].promotion.as_ref().map(|p| p.active), Some(false));

        assert_eq!(entries[2].promotional_price, None);
        assert_eq!(entries[2].promotion, None);
    }

    #[test]
    fn test_active_promotion_beats_newer_inactive_one() {
        let products = vec![product(1, "A", ProductCategory::Entradas, 0)];
        let promotions = vec![
            promotion(10, 1, "15.00", "11:00", "14:00"),
            promotion(20, 1, "12.00", "18:00", "20:00"),
        ];

        let menu =
            MenuAssembler::default().assemble(&products, &promotions, Weekday::Monday, at(12, 0));
        let entry = &menu[0].products[0];
        assert_eq!(entry.promotional_price, Some(dec("15.00")));
        assert_eq!(entry.promotion.as_ref().unwrap().description, "Promo 10");
    }

    #[test]
    fn test_newest_wins_among_active_promotions() {
        let products = vec![product(1, "A", ProductCategory::Entradas, 0)];
        let promotions = vec![
            promotion(20, 1, "12.00", "11:00", "14:00"),
            promotion(10, 1, "15.00", "10:00", "13:00"),
        ];

        for reversed in [false, true] {
            let mut input = promotions.clone();
            if reversed {
                input.reverse();
            }
            let menu =
                MenuAssembler::default().assemble(&products, &input, Weekday::Monday, at(12, 0));
            assert_eq!(menu[0].products[0].promotional_price, Some(dec("12.00")));
        }
    }

    #[test]
    fn test_stale_promotion_reported_inactive() {
        let mut p = product(1, "A", ProductCategory::Entradas, 0);
        p.price = dec("10.00");
        let promotions = vec![promotion(10, 1, "12.00", "11:00", "14:00")];

        let menu = MenuAssembler::default().assemble(&[p], &promotions, Weekday::Monday, at(12, 0));
        let entry = &menu[0].products[0];
        assert_eq!(entry.promotional_price, None);
        assert_eq!(entry.promotion.as_ref().map(|p| p.active), Some(false));
        assert_eq!(entry.effective_price(), dec("10.00"));
    }

    #[test]
    fn test_wraparound_promotion_on_menu() {
        let products = vec![product(1, "Chopp", ProductCategory::Bebidas, 0)];
        let promotions = vec![promotion(10, 1, "9.00", "23:00", "02:00")];
        let assembler = MenuAssembler::default();

        let late = assembler.assemble(&products, &promotions, Weekday::Monday, at(1, 30));
        assert_eq!(late[0].products[0].promotional_price, Some(dec("9.00")));

        let afternoon = assembler.assemble(&products, &promotions, Weekday::Monday, at(15, 0));
        assert_eq!(afternoon[0].products[0].promotional_price, None);
    }

    #[test]
    fn test_orphan_promotions_ignored() {
        let products = vec![product(1, "A", ProductCategory::Entradas, 0)];
        let promotions = vec![promotion(10, 99, "1.00", "00:00", "23:45")];

        let menu =
            MenuAssembler::default().assemble(&products, &promotions, Weekday::Monday, at(12, 0));
        assert_eq!(menu[0].products[0].promotion, None);
    }

    #[test]
    fn test_assembly_is_idempotent() {
        let products = vec![
            product(1, "A", ProductCategory::Sobremesas, 1),
            product(2, "B", ProductCategory::Entradas, 0),
            product(3, "C", ProductCategory::Sobremesas, 0),
        ];
        let promotions = vec![
            promotion(10, 1, "15.00", "11:00", "14:00"),
            promotion(11, 3, "15.00", "18:00", "20:00"),
        ];
        let assembler = MenuAssembler::default();

        let first = assembler.assemble(&products, &promotions, Weekday::Monday, at(12, 0));
        let second = assembler.assemble(&products, &promotions, Weekday::Monday, at(12, 0));
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_inputs() {
        let menu = MenuAssembler::default().assemble(&[], &[], Weekday::Sunday, at(0, 0));
        assert!(menu.is_empty());
    }
}
