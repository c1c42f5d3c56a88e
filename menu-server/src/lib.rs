//! Menu Server - 餐厅菜单与促销后端
//!
//! # 架构概述
//!
//! - **促销** (`promotions`): 时间窗口判定 (支持跨午夜) 与写入校验
//! - **菜单** (`menu`): 商品 + 促销 → 按分类排序的当前菜单
//! - **时钟** (`clock`): 可注入的当前时间与巴西时区
//! - **存储** (`db`): 商品/促销存储 trait 与内存实现
//! - **HTTP API** (`api`): RESTful API 接口
//!
//! # 模块结构
//!
//! ```text
//! menu-server/src/
//! ├── core/          # 配置、状态、错误、服务器
//! ├── clock/         # DateTimeProvider、SupportedTimezone
//! ├── promotions/    # PromotionWindow、校验
//! ├── menu/          # MenuAssembler、CategoryOrder
//! ├── db/            # ProductStore、PromotionStore
//! ├── services/      # 用例 + 路由构建
//! ├── api/           # HTTP 路由和处理器
//! └── utils/         # 日志、校验
//! ```

pub mod api;
pub mod clock;
pub mod core;
pub mod db;
pub mod menu;
pub mod promotions;
pub mod services;
pub mod utils;

// Re-export 公共类型
pub use clock::{DateTimeProvider, FixedClock, SupportedTimezone, SystemClock};
pub use core::{Config, Server, ServerState};
pub use menu::{CategoryOrder, MenuAssembler};
pub use promotions::{PromotionWindow, is_promotion_active};
pub use services::build_router;
pub use utils::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};

// Re-export logger functions
pub use utils::logger::init_logger_with_file;

/// dotenv + 日志初始化
pub fn setup_environment() -> Config {
    if let Err(e) = dotenv::dotenv() {
        // .env is optional
        eprintln!("No .env loaded: {}", e);
    }

    let config = Config::from_env();
    init_logger_with_file(
        Some(&config.log_level),
        config.log_json,
        config.log_dir.as_deref(),
    );
    config
}

pub fn print_banner() {
    println!(
        r#"
  __  __                    
 |  \/  | ___ _ __  _   _   
 | |\/| |/ _ \ '_ \| | | |  
 | |  | |  __/ | | | |_| |  
 |_|  |_|\___|_| |_|\__,_|  
    "#
    );
}
