use crate::variable::types::VariableContext;
use regex::{Captures, Regex};
use std::sync::OnceLock;

fn placeholder_regex() -> &'static Regex {
    static VAR_REGEX: OnceLock<Regex> = OnceLock::new();
    VAR_REGEX.get_or_init(|| Regex::new(r"\{\{([a-zA-Z_][a-zA-Z0-9_]*)\}\}").unwrap())
}

/// 集合占位符 `{{name}}` 的扫描与替换
pub struct VariableResolver;

impl VariableResolver {
    /// 替换文本中的 {{variable}} 占位符，上下文中没有的保持原样
    pub fn substitute(text: &str, context: &VariableContext) -> String {
        placeholder_regex()
            .replace_all(text, |caps: &Captures| {
                let var_name = &caps[1];
                context.get(var_name).unwrap_or(&caps[0]).to_string()
            })
            .to_string()
    }

    /// 解析并替换系统环境变量 ${VAR}
    pub fn resolve_env_vars(text: &str) -> String {
        static ENV_REGEX: OnceLock<Regex> = OnceLock::new();
        let re = ENV_REGEX.get_or_init(|| Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}").unwrap());

        re.replace_all(text, |caps: &Captures| {
            let env_name = &caps[1];
            std::env::var(env_name).unwrap_or_else(|_| caps[0].to_string())
        })
        .to_string()
    }

    /// 文本中引用的变量名，按首次出现顺序去重
    pub fn placeholders(text: &str) -> Vec<String> {
        let mut names: Vec<String> = Vec::new();
        for caps in placeholder_regex().captures_iter(text) {
            let name = &caps[1];
            if !names.iter().any(|n| n == name) {
                names.push(name.to_string());
            }
        }
        names
    }

    pub fn has_placeholders(text: &str) -> bool {
        placeholder_regex().is_match(text)
    }
}
