use crate::collection::{DependencyReport, IssueKind};
use crate::generator::{GenerateReport, OutputFormat};
use colored::Colorize;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, Table};

/// 生成完成后的三行摘要
pub fn summary_lines(report: &GenerateReport) -> [String; 3] {
    let headline = match report.format {
        OutputFormat::Json => "✅ Postman collection generated successfully!",
        OutputFormat::Http => "✅ HTTP request file generated successfully!",
    };
    [
        headline.to_string(),
        format!("📁 File: {}", report.path.display()),
        format!("📊 Total endpoints: {}", report.endpoint_count),
    ]
}

pub fn print_summary(report: &GenerateReport) {
    let [headline, file, total] = summary_lines(report);
    println!("{}", headline.green());
    println!("{}", file);
    println!("{}", total.bold());
}

/// 每个文件夹的请求数
pub fn folder_table(report: &GenerateReport) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(vec!["Folder", "Requests"]);

    for (name, count) in &report.folders {
        table.add_row(vec![
            Cell::new(name),
            Cell::new(count).set_alignment(CellAlignment::Right),
        ]);
    }
    table.add_row(vec![
        Cell::new("Total").add_attribute(Attribute::Bold),
        Cell::new(report.endpoint_count)
            .add_attribute(Attribute::Bold)
            .set_alignment(CellAlignment::Right),
    ]);

    table
}

/// 变量依赖问题列表
pub fn issues_table(report: &DependencyReport) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_header(vec!["Variable", "Issue", "Folder", "Request", "Captured by"]);

    for issue in &report.issues {
        let color = match issue.kind {
            IssueKind::Undeclared => Color::Red,
            IssueKind::NotYetCaptured => Color::Yellow,
        };
        table.add_row(vec![
            Cell::new(&issue.variable),
            Cell::new(issue.kind).fg(color),
            Cell::new(&issue.folder),
            Cell::new(&issue.request),
            Cell::new(issue.captured_by.as_deref().unwrap_or("-")).add_attribute(Attribute::Dim),
        ]);
    }

    table
}
