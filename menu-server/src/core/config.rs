use crate::clock::SupportedTimezone;
use crate::menu::CategoryOrder;

/// 服务器配置 - 菜单服务的所有配置项
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量覆盖：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | HTTP_PORT | 3000 | HTTP 服务端口 |
/// | ENVIRONMENT | development | 运行环境 |
/// | LOG_LEVEL | info | 日志级别 (RUST_LOG 优先) |
/// | LOG_JSON | false | JSON 格式日志 |
/// | LOG_DIR | (无) | 按天滚动的日志目录 |
/// | DEFAULT_TIMEZONE | America/Sao_Paulo | 默认时区 |
/// | MENU_CATEGORY_ORDER | Entradas,Pratos principais,Sobremesas,Bebidas | 菜单分类顺序 |
/// | REQUEST_TIMEOUT_MS | 30000 | 请求超时(毫秒) |
/// | SHUTDOWN_TIMEOUT_MS | 10000 | 关闭超时(毫秒) |
///
/// # 示例
///
/// ```ignore
/// HTTP_PORT=8080 DEFAULT_TIMEZONE=America/Manaus cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP API 服务端口
    pub http_port: u16,
    /// 运行环境: development | staging | production
    pub environment: String,
    /// 日志级别
    pub log_level: String,
    /// 是否输出 JSON 日志
    pub log_json: bool,
    /// 日志目录
    pub log_dir: Option<String>,
    /// 请求未指定或指定了不支持的时区时使用
    pub default_timezone: SupportedTimezone,
    /// 菜单分类顺序
    pub category_order: CategoryOrder,
    /// 请求超时时间 (毫秒)
    pub request_timeout_ms: u64,
    /// 关闭超时时间 (毫秒)
    pub shutdown_timeout_ms: u64,
}

fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置或无法解析，使用默认值
    pub fn from_env() -> Self {
        let default_timezone = match std::env::var("DEFAULT_TIMEZONE") {
            Ok(name) => name.parse().unwrap_or_else(|e| {
                tracing::warn!(error = %e, "DEFAULT_TIMEZONE not supported, using America/Sao_Paulo");
                SupportedTimezone::default()
            }),
            Err(_) => SupportedTimezone::default(),
        };

        let category_order = match std::env::var("MENU_CATEGORY_ORDER") {
            Ok(labels) => CategoryOrder::from_labels(&labels).unwrap_or_else(|e| {
                tracing::warn!(error = %e, "Invalid MENU_CATEGORY_ORDER, using default order");
                CategoryOrder::default()
            }),
            Err(_) => CategoryOrder::default(),
        };

        Self {
            http_port: env_or("HTTP_PORT", 3000),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_json: env_or("LOG_JSON", false),
            log_dir: std::env::var("LOG_DIR").ok().filter(|d| !d.is_empty()),
            default_timezone,
            category_order,
            request_timeout_ms: env_or("REQUEST_TIMEOUT_MS", 30000),
            shutdown_timeout_ms: env_or("SHUTDOWN_TIMEOUT_MS", 10000),
        }
    }

    /// 使用自定义值覆盖部分配置
    ///
    /// 常用于测试场景
    pub fn with_overrides(http_port: u16, default_timezone: SupportedTimezone) -> Self {
        let mut config = Self::from_env();
        config.http_port = http_port;
        config.default_timezone = default_timezone;
        config
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
