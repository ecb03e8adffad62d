use std::fmt;
use std::str::FromStr;

use crate::{PostgenError, Result};
use serde::{Deserialize, Serialize};

/// Postman collection schema v2.1.0
pub const SCHEMA_URL: &str = "https://schema.getpostman.com/json/collection/v2.1.0/collection.json";

/// 所有请求共享的 host 占位符
pub const BASE_URL_PLACEHOLDER: &str = "{{baseUrl}}";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
    Patch,
    Head,
    Options,
}

impl FromStr for Method {
    type Err = PostgenError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "GET" => Ok(Method::Get),
            "POST" => Ok(Method::Post),
            "PUT" => Ok(Method::Put),
            "DELETE" => Ok(Method::Delete),
            "PATCH" => Ok(Method::Patch),
            "HEAD" => Ok(Method::Head),
            "OPTIONS" => Ok(Method::Options),
            _ => Err(PostgenError::ParseError(format!(
                "Invalid HTTP method: {}",
                s
            ))),
        }
    }
}

impl Method {
    pub fn parse(s: &str) -> Result<Self> {
        s.parse()
    }

    pub fn as_str(&self) -> &str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
            Method::Patch => "PATCH",
            Method::Head => "HEAD",
            Method::Options => "OPTIONS",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 整个集合文档：`{info, variable, item}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Collection {
    pub info: Info,
    pub variable: Vec<Variable>,
    pub item: Vec<Folder>,
}

impl Collection {
    pub fn new(info: Info, variable: Vec<Variable>) -> Self {
        Self {
            info,
            variable,
            item: Vec::new(),
        }
    }

    /// 追加一个文件夹
    pub fn add_folder(&mut self, folder: Folder) {
        self.item.push(folder);
    }

    /// 端点总数：每个顶层文件夹直接包含的条目数之和
    pub fn endpoint_count(&self) -> usize {
        self.item.iter().map(|folder| folder.item.len()).sum()
    }

    /// 按文档顺序遍历所有请求（包括嵌套文件夹中的请求）
    pub fn requests(&self) -> Vec<(&Folder, &RequestItem)> {
        self.item
            .iter()
            .flat_map(|folder| folder.requests().into_iter().map(move |request| (folder, request)))
            .collect()
    }

    pub fn variable(&self, key: &str) -> Option<&Variable> {
        self.variable.iter().find(|v| v.key == key)
    }

    pub fn variable_mut(&mut self, key: &str) -> Option<&mut Variable> {
        self.variable.iter_mut().find(|v| v.key == key)
    }
}

/// 集合元数据
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Info {
    #[serde(rename = "_postman_id")]
    pub postman_id: String,
    pub name: String,
    pub description: String,
    pub schema: String,
    pub version: String,
}

/// 集合变量（占位符及其初始值）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Variable {
    pub key: String,
    pub value: String,
}

impl Variable {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// 初始值为空的变量需要由某个请求的脚本填充
    pub fn is_dynamic(&self) -> bool {
        self.value.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Folder {
    pub name: String,
    pub item: Vec<Item>,
}

impl Folder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            item: Vec::new(),
        }
    }

    pub fn with_request(mut self, request: RequestItem) -> Self {
        self.item.push(Item::Request(Box::new(request)));
        self
    }

    pub fn with_requests(mut self, requests: impl IntoIterator<Item = RequestItem>) -> Self {
        self.item
            .extend(requests.into_iter().map(|r| Item::Request(Box::new(r))));
        self
    }

    pub fn with_folder(mut self, folder: Folder) -> Self {
        self.item.push(Item::Folder(folder));
        self
    }

    /// 深度优先收集该文件夹下的所有请求
    pub fn requests(&self) -> Vec<&RequestItem> {
        let mut out = Vec::new();
        for item in &self.item {
            match item {
                Item::Request(request) => out.push(request.as_ref()),
                Item::Folder(folder) => out.extend(folder.requests()),
            }
        }
        out
    }
}

/// 文件夹中的条目：请求或嵌套文件夹
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Item {
    Folder(Folder),
    Request(Box<RequestItem>),
}

/// 带名字的请求，以及可选的响应后脚本
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestItem {
    pub name: String,
    pub request: Request,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub event: Vec<Event>,
}

impl RequestItem {
    /// 响应后 (`test`) 脚本的语句列表
    pub fn test_script(&self) -> Option<&[String]> {
        self.event
            .iter()
            .find(|e| e.listen == "test")
            .map(|e| e.script.exec.as_slice())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Request {
    pub method: Method,
    pub header: Vec<Header>,
    pub url: Url,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth: Option<Auth>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<Body>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Header {
    pub key: String,
    pub value: String,
}

impl Header {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Url {
    pub raw: String,
    pub host: Vec<String>,
    pub path: Vec<String>,
}

impl Url {
    /// `{{baseUrl}}` 加上路径；path 段去掉所有空段
    pub fn from_path(path: &str) -> Self {
        Self {
            raw: format!("{}{}", BASE_URL_PLACEHOLDER, path),
            host: vec![BASE_URL_PLACEHOLDER.to_string()],
            path: path
                .split('/')
                .filter(|segment| !segment.is_empty())
                .map(str::to_string)
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Auth {
    #[serde(rename = "type")]
    pub kind: String,
    pub bearer: Vec<AuthAttribute>,
}

impl Auth {
    /// Bearer 认证，token 引用集合变量 `variable`
    pub fn bearer(variable: &str) -> Self {
        Self {
            kind: "bearer".to_string(),
            bearer: vec![AuthAttribute {
                key: "token".to_string(),
                value: format!("{{{{{}}}}}", variable),
                kind: "string".to_string(),
            }],
        }
    }

    /// bearer token 的取值（可能是占位符）
    pub fn token(&self) -> Option<&str> {
        self.bearer
            .iter()
            .find(|attr| attr.key == "token")
            .map(|attr| attr.value.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthAttribute {
    pub key: String,
    pub value: String,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub mode: String,
    pub raw: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub listen: String,
    pub script: Script,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Script {
    pub exec: Vec<String>,
    #[serde(rename = "type")]
    pub kind: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_serializes_uppercase() {
        assert_eq!(serde_json::to_string(&Method::Delete).unwrap(), "\"DELETE\"");
        let method: Method = serde_json::from_str("\"PATCH\"").unwrap();
        assert_eq!(method, Method::Patch);
    }

    #[test]
    fn test_method_parse() {
        assert_eq!(Method::parse("get").unwrap(), Method::Get);
        assert_eq!(Method::parse("Options").unwrap(), Method::Options);
        assert!(Method::parse("FETCH").is_err());
    }

    #[test]
    fn test_url_from_path() {
        let url = Url::from_path("/users/stats");
        assert_eq!(url.raw, "{{baseUrl}}/users/stats");
        assert_eq!(url.host, vec!["{{baseUrl}}"]);
        assert_eq!(url.path, vec!["users", "stats"]);
    }

    #[test]
    fn test_url_keeps_query_on_last_segment() {
        let url = Url::from_path("/users?page=1&limit=10");
        assert_eq!(url.raw, "{{baseUrl}}/users?page=1&limit=10");
        assert_eq!(url.path, vec!["users?page=1&limit=10"]);
    }

    #[test]
    fn test_url_drops_empty_segments() {
        let url = Url::from_path("//carts//items/");
        assert_eq!(url.path, vec!["carts", "items"]);

        let root = Url::from_path("/");
        assert!(root.path.is_empty());
    }

    #[test]
    fn test_bearer_auth() {
        let auth = Auth::bearer("accessToken");
        assert_eq!(auth.kind, "bearer");
        assert_eq!(auth.token(), Some("{{accessToken}}"));

        let json = serde_json::to_value(&auth).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "type": "bearer",
                "bearer": [{"key": "token", "value": "{{accessToken}}", "type": "string"}]
            })
        );
    }

    #[test]
    fn test_nested_folder_requests() {
        let leaf = RequestItem {
            name: "Leaf".to_string(),
            request: Request {
                method: Method::Get,
                header: Vec::new(),
                url: Url::from_path("/leaf"),
                description: None,
                auth: None,
                body: None,
            },
            event: Vec::new(),
        };
        let folder = Folder::new("Outer")
            .with_request(leaf.clone())
            .with_folder(Folder::new("Inner").with_request(leaf.clone()));

        assert_eq!(folder.item.len(), 2);
        assert_eq!(folder.requests().len(), 2);
    }

    #[test]
    fn test_item_untagged_deserialize() {
        let json = serde_json::json!({
            "name": "Outer",
            "item": [
                {"name": "Inner", "item": []},
                {
                    "name": "Ping",
                    "request": {
                        "method": "GET",
                        "header": [],
                        "url": {"raw": "{{baseUrl}}/ping", "host": ["{{baseUrl}}"], "path": ["ping"]}
                    }
                }
            ]
        });
        let folder: Folder = serde_json::from_value(json).unwrap();
        assert!(matches!(folder.item[0], Item::Folder(_)));
        assert!(matches!(folder.item[1], Item::Request(_)));
    }
}
