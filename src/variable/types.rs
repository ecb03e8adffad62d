use serde::Deserialize;
use std::collections::HashMap;

/// 变量上下文，存储变量覆盖值（配置文件 + CLI `--var`）
#[derive(Debug, Clone, Default)]
pub struct VariableContext {
    /// 变量映射表
    variables: HashMap<String, String>,
}

impl VariableContext {
    /// 创建新的空变量上下文
    pub fn new() -> Self {
        Self::default()
    }

    /// 插入变量，已存在时覆盖
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.variables.insert(key.into(), value.into());
    }

    /// 获取变量值
    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(|s| s.as_str())
    }

    /// 按 key 排序的变量列表，保证日志和报错顺序稳定
    pub fn sorted(&self) -> Vec<(&str, &str)> {
        let mut entries: Vec<(&str, &str)> = self
            .variables
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        entries.sort_unstable();
        entries
    }

    /// 变量数量
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    /// 是否为空
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }
}

/// 单个环境：集合变量名 → 初始值
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Environment {
    #[serde(flatten)]
    pub variables: HashMap<String, String>,
}

/// `postgen.toml` 的完整内容
#[derive(Debug, Clone, Deserialize, Default)]
pub struct VariableConfig {
    #[serde(default)]
    pub environments: HashMap<String, Environment>,
}

impl VariableConfig {
    /// 获取指定环境的变量
    pub fn get_environment(&self, env_name: &str) -> Option<&Environment> {
        self.environments.get(env_name)
    }
}
