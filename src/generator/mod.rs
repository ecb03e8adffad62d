pub mod http;
pub mod summary;
pub mod writer;

use std::fmt;
use std::path::PathBuf;

use crate::catalog;
use crate::collection::{Collection, analyze};
use crate::variable::{VariableContext, apply_overrides};
use crate::Result;

pub use http::HttpGenerator;
pub use writer::write_output;

/// 输出格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Postman collection v2.1 JSON
    #[default]
    Json,
    /// `.http` request file
    Http,
}

impl OutputFormat {
    pub fn default_file_name(&self) -> &'static str {
        match self {
            OutputFormat::Json => catalog::OUTPUT_FILE,
            OutputFormat::Http => "postman_collection.http",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Http => "http",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 生成选项；默认值即无参数运行时的行为
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    /// 输出路径，缺省为格式对应的固定文件名（工作目录下）
    pub output: Option<PathBuf>,
    pub format: OutputFormat,
    /// 集合变量初始值覆盖
    pub overrides: VariableContext,
}

impl GenerateOptions {
    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| PathBuf::from(self.format.default_file_name()))
    }
}

/// 一次生成的结果摘要
#[derive(Debug, Clone, PartialEq)]
pub struct GenerateReport {
    pub path: PathBuf,
    pub format: OutputFormat,
    pub endpoint_count: usize,
    /// (文件夹名, 请求数)
    pub folders: Vec<(String, usize)>,
}

/// 把集合渲染为指定格式的文本
pub fn render(collection: &Collection, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(collection)?),
        OutputFormat::Http => Ok(HttpGenerator::generate(collection)),
    }
}

/// 完整流程：构建目录 → 应用覆盖 → 渲染 → 写文件
pub fn generate(options: &GenerateOptions) -> Result<GenerateReport> {
    let mut collection = catalog::build_collection();

    if !options.overrides.is_empty() {
        let applied = apply_overrides(&mut collection, &options.overrides, false)?;
        tracing::debug!(applied, "Variable overrides applied");
    }

    let dependencies = analyze(&collection);
    for issue in &dependencies.issues {
        tracing::debug!(
            variable = %issue.variable,
            request = %issue.request,
            kind = %issue.kind,
            "Variable used before any request captures it"
        );
    }

    let contents = render(&collection, options.format)?;
    let path = options.output_path();
    write_output(&path, &contents)?;

    let report = GenerateReport {
        path,
        format: options.format,
        endpoint_count: collection.endpoint_count(),
        folders: collection
            .item
            .iter()
            .map(|folder| (folder.name.clone(), folder.item.len()))
            .collect(),
    };

    tracing::info!(
        path = %report.path.display(),
        format = %report.format,
        endpoints = report.endpoint_count,
        "Collection generated"
    );

    Ok(report)
}
