use std::sync::Arc;

use crate::clock::{DateTimeProvider, SystemClock};
use crate::core::Config;
use crate::db::repository::{
    InMemoryProductStore, InMemoryPromotionStore, ProductStore, PromotionStore,
};
use crate::menu::MenuAssembler;
use crate::services::{CatalogService, MenuService, PromotionService};

/// 服务器状态 - 持有所有服务的共享引用
///
/// 使用 Arc 实现浅拷贝，克隆成本极低。
///
/// # 服务组件
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Config | 配置项 (不可变) |
/// | catalog | CatalogService | 商品用例 |
/// | promotions | PromotionService | 促销用例 |
/// | menu | MenuService | 当前菜单 |
#[derive(Clone)]
pub struct ServerState {
    /// 服务器配置
    pub config: Config,
    /// 商品服务
    pub catalog: CatalogService,
    /// 促销服务
    pub promotions: PromotionService,
    /// 菜单服务
    pub menu: MenuService,
}

impl ServerState {
    /// 创建服务器状态 (手动注入存储与时钟)
    pub fn new(
        config: Config,
        products: Arc<dyn ProductStore>,
        promotions: Arc<dyn PromotionStore>,
        clock: Arc<dyn DateTimeProvider>,
    ) -> Self {
        let assembler = MenuAssembler::new(config.category_order.clone());
        let menu = MenuService::new(
            products.clone(),
            promotions.clone(),
            clock,
            assembler,
            config.default_timezone,
        );

        Self {
            catalog: CatalogService::new(products.clone(), promotions.clone()),
            promotions: PromotionService::new(products, promotions),
            menu,
            config,
        }
    }

    /// 内存存储 + 指定时钟 (测试常用)
    pub fn with_clock(config: Config, clock: Arc<dyn DateTimeProvider>) -> Self {
        Self::new(
            config,
            Arc::new(InMemoryProductStore::new()),
            Arc::new(InMemoryPromotionStore::new()),
            clock,
        )
    }

    /// 初始化服务器状态: 内存存储 + 系统时钟
    pub fn initialize(config: &Config) -> Self {
        tracing::info!(
            timezone = %config.default_timezone,
            categories = ?config.category_order.categories(),
            "Initializing server state"
        );
        Self::with_clock(config.clone(), Arc::new(SystemClock))
    }
}
