use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

/// 变量捕获来源
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CaptureSource {
    /// 响应 Body 中的字段路径
    /// 示例: data._id, data.user._id
    Body(String),
}

impl fmt::Display for CaptureSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaptureSource::Body(path) => write!(f, "body.{}", path),
        }
    }
}

/// 一次变量捕获：响应后脚本把某个字段写入集合变量
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VariableCapture {
    /// 变量名称
    pub name: String,

    /// 捕获来源
    pub source: CaptureSource,
}

impl VariableCapture {
    /// 从 Body 提取变量
    pub fn from_body(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            source: CaptureSource::Body(path.into()),
        }
    }

    /// `.http` 文件中的元数据行
    pub fn to_metadata_line(&self) -> String {
        format!("@capture {} from {}", self.name, self.source)
    }

    /// 从响应后脚本中识别变量捕获
    ///
    /// 识别的语句形式:
    /// - `pm.collectionVariables.set('productId', pm.response.json().data._id)`
    /// - `pm.collectionVariables.set('userId', response.data.user._id)`
    ///
    /// 其它语句忽略；同名变量只保留第一次捕获。
    pub fn extract_all(script: &[String]) -> Vec<VariableCapture> {
        static SET_REGEX: OnceLock<Regex> = OnceLock::new();
        let re = SET_REGEX.get_or_init(|| {
            Regex::new(
                r#"pm\.collectionVariables\.set\(\s*['"]([A-Za-z_][A-Za-z0-9_]*)['"]\s*,\s*(?:pm\.response\.json\(\)|response)\.([A-Za-z0-9_$.]+)\s*\)"#,
            )
            .unwrap()
        });

        let mut captures: Vec<VariableCapture> = Vec::new();
        for line in script {
            for caps in re.captures_iter(line) {
                let name = &caps[1];
                if captures.iter().any(|c| c.name == name) {
                    continue;
                }
                captures.push(VariableCapture::from_body(name, &caps[2]));
            }
        }
        captures
    }
}
