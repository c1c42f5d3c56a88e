//! Menu Service - renders the current menu
//!
//! Reads visible products and all promotions, resolves "now" in the
//! requested zone and hands everything to the [`MenuAssembler`].

use shared::models::{MenuMetadata, MenuView};
use std::sync::Arc;

use crate::clock::{DateTimeProvider, SupportedTimezone};
use crate::db::repository::{ProductStore, PromotionStore};
use crate::menu::MenuAssembler;
use crate::utils::AppResult;

#[derive(Clone)]
pub struct MenuService {
    products: Arc<dyn ProductStore>,
    promotions: Arc<dyn PromotionStore>,
    clock: Arc<dyn DateTimeProvider>,
    assembler: MenuAssembler,
    default_timezone: SupportedTimezone,
}

impl MenuService {
    pub fn new(
        products: Arc<dyn ProductStore>,
        promotions: Arc<dyn PromotionStore>,
        clock: Arc<dyn DateTimeProvider>,
        assembler: MenuAssembler,
        default_timezone: SupportedTimezone,
    ) -> Self {
        Self {
            products,
            promotions,
            clock,
            assembler,
            default_timezone,
        }
    }

    /// Menu as of now in `timezone` (falls back to the default zone)
    pub async fn current_menu(&self, timezone: Option<&str>) -> AppResult<MenuView> {
        let tz = SupportedTimezone::resolve(timezone, self.default_timezone);

        let products = self.products.find_visible().await?;
        let promotions = self.promotions.find_all().await?;

        let (day, now) = self.clock.current_day_and_time(tz);

        let menu = self.assembler.assemble(&products, &promotions, day, now);

        tracing::debug!(
            timezone = %tz,
            day = %day,
            time = %now.format("%H:%M"),
            sections = menu.len(),
            "Menu assembled"
        );

        Ok(MenuView {
            menu,
            metadata: MenuMetadata {
                timezone: tz.name().to_string(),
                current_day: day,
                current_time: now.format("%H:%M").to_string(),
            },
        })
    }
}
