use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use postgen::catalog;
use postgen::collection::analyze;
use postgen::generator::{self, GenerateOptions, OutputFormat, summary};
use postgen::variable::{ConfigLoader, VariableConfig, VariableContext, apply_overrides};
use postgen::PostgenError;

pub type Result<T> = std::result::Result<T, anyhow::Error>;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// 输出调试日志，并打印每个文件夹的请求数
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 生成集合文件（默认命令）
    Generate(GenerateArgs),
    /// 检查变量是否在被引用前由某个请求捕获
    Check {
        /// 任何依赖问题都视为失败
        #[arg(long)]
        strict: bool,

        #[command(flatten)]
        variables: VariableArgs,
    },
}

#[derive(Args, Default)]
pub struct GenerateArgs {
    /// 输出路径，默认 postman_collection.<format>
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// 输出格式
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    #[command(flatten)]
    pub variables: VariableArgs,
}

/// 变量覆盖参数；都不指定时不读取任何配置文件
#[derive(Args, Default)]
pub struct VariableArgs {
    /// 使用 postgen.toml 中的环境覆盖变量初始值
    #[arg(short, long)]
    pub env: Option<String>,

    /// 指定配置文件路径（需要同时指定 --env）
    #[arg(short, long, requires = "env")]
    pub config: Option<PathBuf>,

    /// 覆盖单个变量: --var baseUrl=https://api.example.com
    #[arg(long = "var", value_name = "KEY=VALUE")]
    pub vars: Vec<String>,
}

impl VariableArgs {
    fn load_overrides(&self) -> postgen::Result<VariableContext> {
        self.load_overrides_with(ConfigLoader::find)
    }

    /// `find` 只在指定了 --env 而没有 --config 时调用
    fn load_overrides_with(
        &self,
        find: impl FnOnce() -> Option<PathBuf>,
    ) -> postgen::Result<VariableContext> {
        let cli_vars = self
            .vars
            .iter()
            .map(|s| ConfigLoader::parse_cli_var(s))
            .collect::<postgen::Result<Vec<_>>>()?;

        let Some(env_name) = self.env.as_deref() else {
            return ConfigLoader::build_context(&VariableConfig::default(), None, &cli_vars);
        };

        let config_path = match &self.config {
            Some(path) => path.clone(),
            None => find().ok_or_else(|| {
                PostgenError::Config(format!(
                    "No {} found for environment '{}'",
                    ConfigLoader::CONFIG_FILE,
                    env_name
                ))
            })?,
        };
        tracing::debug!(path = %config_path.display(), env = env_name, "Loading config");

        let config = ConfigLoader::load_from_path(&config_path)?;
        ConfigLoader::build_context(&config, Some(env_name), &cli_vars)
    }
}

pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        None => run_generate(GenerateArgs::default(), cli.verbose),
        Some(Commands::Generate(args)) => run_generate(args, cli.verbose),
        Some(Commands::Check { strict, variables }) => run_check(strict, &variables),
    }
}

fn run_generate(args: GenerateArgs, verbose: bool) -> Result<()> {
    let options = GenerateOptions {
        output: args.output,
        format: args.format,
        overrides: args.variables.load_overrides()?,
    };

    let report = generator::generate(&options)?;

    summary::print_summary(&report);
    if verbose {
        println!("{}", summary::folder_table(&report));
    }

    Ok(())
}

fn run_check(strict: bool, variables: &VariableArgs) -> Result<()> {
    let mut collection = catalog::build_collection();
    let overrides = variables.load_overrides()?;
    if !overrides.is_empty() {
        apply_overrides(&mut collection, &overrides, strict)?;
    }

    let report = analyze(&collection);
    if !report.is_clean() {
        println!("{}", summary::issues_table(&report));
    }
    println!(
        "{} requests checked, {} captures, {} issues",
        collection.requests().len(),
        report.captures.len(),
        report.issues.len()
    );

    let failing = if strict {
        report.issues.len()
    } else {
        report.undeclared().count()
    };
    if failing > 0 {
        return Err(PostgenError::UnresolvedDependencies(failing).into());
    }

    Ok(())
}
