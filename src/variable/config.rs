use crate::collection::Collection;
use crate::variable::resolver::VariableResolver;
use crate::variable::types::{VariableConfig, VariableContext};
use crate::{PostgenError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// 配置文件加载器
pub struct ConfigLoader;

impl ConfigLoader {
    /// 配置文件名
    pub const CONFIG_FILE: &'static str = "postgen.toml";

    /// 从指定路径加载配置文件
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<VariableConfig> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            PostgenError::Config(format!(
                "Failed to read config file {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;

        Ok(toml::from_str(&content)?)
    }

    /// 查找配置文件
    /// 查找顺序：
    /// 1. 当前目录及父目录
    /// 2. 用户配置目录 ~/.config/postgen/
    pub fn find() -> Option<PathBuf> {
        let cwd = std::env::current_dir().ok();
        Self::find_from(cwd.as_deref(), Self::user_config_dir().as_deref())
    }

    /// 从 `start` 向上逐级查找，找不到再看 `user_dir`
    pub fn find_from(start: Option<&Path>, user_dir: Option<&Path>) -> Option<PathBuf> {
        start
            .and_then(Self::find_in_ancestors)
            .or_else(|| user_dir.and_then(Self::find_in_dir))
    }

    fn find_in_ancestors(start: &Path) -> Option<PathBuf> {
        start.ancestors().find_map(Self::find_in_dir)
    }

    fn find_in_dir(dir: &Path) -> Option<PathBuf> {
        let config_path = dir.join(Self::CONFIG_FILE);
        config_path.exists().then_some(config_path)
    }

    fn user_config_dir() -> Option<PathBuf> {
        Some(dirs::home_dir()?.join(".config").join("postgen"))
    }

    /// 构建变量覆盖上下文
    /// env_name: 环境名称（如 "local", "staging"），指定后必须存在
    /// cli_vars: CLI 传入的变量覆盖（--var key=value），优先级最高
    pub fn build_context(
        config: &VariableConfig,
        env_name: Option<&str>,
        cli_vars: &[(String, String)],
    ) -> Result<VariableContext> {
        let mut context = VariableContext::new();

        if let Some(name) = env_name {
            let env = config.get_environment(name).ok_or_else(|| {
                PostgenError::Config(format!("Environment '{}' not found in config", name))
            })?;
            for (key, value) in &env.variables {
                context.insert(key.clone(), VariableResolver::resolve_env_vars(value));
            }
        }

        for (key, value) in cli_vars {
            context.insert(key.clone(), value.clone());
        }

        Ok(context)
    }

    /// 解析 CLI 变量参数 "key=value"
    pub fn parse_cli_var(s: &str) -> Result<(String, String)> {
        s.split_once('=')
            .map(|(k, v)| (k.trim().to_string(), v.trim().to_string()))
            .filter(|(k, _)| !k.is_empty())
            .ok_or_else(|| {
                PostgenError::InvalidVariable(format!("expected KEY=VALUE, got '{}'", s))
            })
    }
}

/// 用覆盖值替换集合变量的初始值，返回实际生效的个数
///
/// 集合中未声明的 key 默认记录警告后跳过；`strict` 时报 `InvalidVariable`。
pub fn apply_overrides(
    collection: &mut Collection,
    context: &VariableContext,
    strict: bool,
) -> Result<usize> {
    if strict
        && let Some((key, _)) = context
            .sorted()
            .into_iter()
            .find(|(key, _)| collection.variable(key).is_none())
    {
        return Err(PostgenError::InvalidVariable(format!(
            "'{}' is not a collection variable",
            key
        )));
    }

    let mut applied = 0;

    for (key, value) in context.sorted() {
        if key == "baseUrl" && !VariableResolver::has_placeholders(value) {
            url::Url::parse(value)
                .map_err(|e| PostgenError::InvalidUrl(format!("{} ({})", value, e)))?;
        }

        match collection.variable_mut(key) {
            Some(variable) => {
                tracing::debug!(key, value, "Overriding collection variable");
                variable.value = value.to_string();
                applied += 1;
            }
            None => {
                tracing::warn!(key, "Ignoring override for undeclared variable");
            }
        }
    }

    Ok(applied)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collection::{Info, Variable};
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    fn sample_collection() -> Collection {
        Collection::new(
            Info {
                postman_id: "test".to_string(),
                name: "Test".to_string(),
                description: String::new(),
                schema: crate::collection::SCHEMA_URL.to_string(),
                version: "1.0.0".to_string(),
            },
            vec![
                Variable::new("baseUrl", "http://localhost:5000/api/v1"),
                Variable::new("accessToken", ""),
            ],
        )
    }

    #[test]
    fn test_load_from_path() {
        let config_content = r#"
[environments.local]
baseUrl = "http://localhost:5000/api/v1"
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(config_content.as_bytes()).unwrap();
        temp_file.flush().unwrap();

        let config = ConfigLoader::load_from_path(temp_file.path()).unwrap();
        assert_eq!(config.environments.len(), 1);
        assert!(config.get_environment("local").is_some());
    }

    #[test]
    fn test_load_invalid_toml() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"[environments.local\nbaseUrl = ").unwrap();
        temp_file.flush().unwrap();

        let result = ConfigLoader::load_from_path(temp_file.path());
        assert!(matches!(result, Err(PostgenError::TomlError(_))));
    }

    #[test]
    fn test_load_missing_file() {
        let result = ConfigLoader::load_from_path("/definitely/not/here/postgen.toml");
        assert!(matches!(result, Err(PostgenError::Config(_))));
    }

    #[test]
    fn test_build_context_cli_wins() {
        let config: VariableConfig = toml::from_str(
            r#"
[environments.staging]
baseUrl = "https://staging.example.com/api/v1"
accessToken = "file-token"
"#,
        )
        .unwrap();

        let cli_vars = vec![("accessToken".to_string(), "cli-token".to_string())];
        let context = ConfigLoader::build_context(&config, Some("staging"), &cli_vars).unwrap();
        assert_eq!(context.get("baseUrl"), Some("https://staging.example.com/api/v1"));
        assert_eq!(context.get("accessToken"), Some("cli-token"));
    }

    #[test]
    fn test_build_context_unknown_environment() {
        let config = VariableConfig::default();
        let result = ConfigLoader::build_context(&config, Some("prod"), &[]);
        assert!(matches!(result, Err(PostgenError::Config(_))));

        let context = ConfigLoader::build_context(&config, None, &[]).unwrap();
        assert!(context.is_empty());
    }

    #[test]
    fn test_parse_cli_var() {
        assert_eq!(
            ConfigLoader::parse_cli_var("baseUrl=https://example.com/api").unwrap(),
            ("baseUrl".to_string(), "https://example.com/api".to_string())
        );
        assert_eq!(
            ConfigLoader::parse_cli_var("userId=").unwrap(),
            ("userId".to_string(), String::new())
        );
        assert!(ConfigLoader::parse_cli_var("invalid").is_err());
        assert!(ConfigLoader::parse_cli_var("=value").is_err());
    }

    #[test]
    fn test_apply_overrides() {
        let mut collection = sample_collection();
        let mut context = VariableContext::new();
        context.insert("baseUrl", "https://staging.example.com/api/v1");
        context.insert("accessToken", "abc");
        context.insert("tenantId", "ignored");

        let applied = apply_overrides(&mut collection, &context, false).unwrap();
        assert_eq!(applied, 2);
        assert_eq!(
            collection.variable("baseUrl").unwrap().value,
            "https://staging.example.com/api/v1"
        );
        assert_eq!(collection.variable("accessToken").unwrap().value, "abc");
        assert!(collection.variable("tenantId").is_none());
    }

    #[test]
    fn test_apply_overrides_rejects_bad_base_url() {
        let mut collection = sample_collection();
        let mut context = VariableContext::new();
        context.insert("baseUrl", "not a url");

        let result = apply_overrides(&mut collection, &context, false);
        assert!(matches!(result, Err(PostgenError::InvalidUrl(_))));
        assert_eq!(
            collection.variable("baseUrl").unwrap().value,
            "http://localhost:5000/api/v1"
        );
    }

    #[test]
    fn test_apply_overrides_allows_placeholder_base_url() {
        let mut collection = sample_collection();
        let mut context = VariableContext::new();
        context.insert("baseUrl", "{{host}}/api/v1");

        assert_eq!(apply_overrides(&mut collection, &context, false).unwrap(), 1);
    }

    #[test]
    fn test_apply_overrides_strict_rejects_undeclared_key() {
        let mut collection = sample_collection();
        let mut context = VariableContext::new();
        context.insert("accessToken", "abc");
        context.insert("tenantId", "x");

        let result = apply_overrides(&mut collection, &context, true);
        assert!(matches!(result, Err(PostgenError::InvalidVariable(msg)) if msg.contains("tenantId")));
        // 校验失败时不做任何修改
        assert_eq!(collection.variable("accessToken").unwrap().value, "");

        context = VariableContext::new();
        context.insert("accessToken", "abc");
        assert_eq!(apply_overrides(&mut collection, &context, true).unwrap(), 1);
    }

    #[test]
    fn test_find_from_walks_up_ancestors() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("a").join("b");
        fs::create_dir_all(&nested).unwrap();
        let config_path = temp_dir.path().join(ConfigLoader::CONFIG_FILE);
        fs::write(&config_path, "").unwrap();

        assert_eq!(ConfigLoader::find_from(Some(&nested), None), Some(config_path));
    }

    #[test]
    fn test_find_from_prefers_ancestors_over_user_dir() {
        let project = TempDir::new().unwrap();
        let user_dir = TempDir::new().unwrap();
        let user_config = user_dir.path().join(ConfigLoader::CONFIG_FILE);
        fs::write(&user_config, "").unwrap();

        // 项目中没有配置文件时回退到用户目录
        assert_eq!(
            ConfigLoader::find_from(Some(project.path()), Some(user_dir.path())),
            Some(user_config.clone())
        );

        let project_config = project.path().join(ConfigLoader::CONFIG_FILE);
        fs::write(&project_config, "").unwrap();
        assert_eq!(
            ConfigLoader::find_from(Some(project.path()), Some(user_dir.path())),
            Some(project_config)
        );
    }

    #[test]
    fn test_find_from_nothing_found() {
        let project = TempDir::new().unwrap();
        let user_dir = TempDir::new().unwrap();
        assert_eq!(
            ConfigLoader::find_from(Some(project.path()), Some(user_dir.path())),
            None
        );
        assert_eq!(ConfigLoader::find_from(None, None), None);
    }
}
