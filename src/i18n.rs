// ==========================================
// 印刷车间管理 - 界面文案 (i18n)
// ==========================================
// 文案文件: locales/en.yml, locales/zh-CN.yml
// 配置中的语言代码先归一化; 不支持的语言回退为英文并记录警告
// 注意: rust_i18n::i18n! 宏已在 lib.rs 中初始化
// ==========================================

/// 默认语言
pub const DEFAULT_LOCALE: &str = "en";

/// 已提供文案的语言
pub const SUPPORTED_LOCALES: [&str; 2] = ["en", "zh-CN"];

/// 将配置中的语言代码归一化为受支持的语言
///
/// 接受大小写与分隔符变体: "zh", "zh_cn", "ZH-cn", "en-US"
pub fn resolve_locale(raw: &str) -> Option<&'static str> {
    let normalized = raw.trim().replace('_', "-").to_ascii_lowercase();
    let primary = normalized.split('-').next().unwrap_or_default();

    match primary {
        "en" => Some("en"),
        "zh" => Some("zh-CN"),
        _ => None,
    }
}

/// 获取当前语言
pub fn current_locale() -> String {
    rust_i18n::locale().to_string()
}

/// 设置界面语言
///
/// # 返回
/// - true: 语言受支持并已切换
/// - false: 不支持,已回退为默认语言
pub fn set_locale(locale: &str) -> bool {
    match resolve_locale(locale) {
        Some(resolved) => {
            rust_i18n::set_locale(resolved);
            tracing::debug!("界面语言: {}", resolved);
            true
        }
        None => {
            tracing::warn!(
                "不支持的语言: {:?}, 使用默认语言 {} (可选: {})",
                locale,
                DEFAULT_LOCALE,
                SUPPORTED_LOCALES.join(", ")
            );
            rust_i18n::set_locale(DEFAULT_LOCALE);
            false
        }
    }
}

/// 翻译消息
///
/// # 示例
/// ```no_run
/// use printy_shop::i18n::t;
/// let msg = t("picker.empty");
/// ```
pub fn t(key: &str) -> String {
    rust_i18n::t!(key).to_string()
}

/// 翻译消息并替换 `%{name}` 占位符
pub fn t_with_args(key: &str, args: &[(&str, &str)]) -> String {
    args.iter().fold(t(key), |message, (name, value)| {
        message.replace(&format!("%{{{}}}", name), value)
    })
}
