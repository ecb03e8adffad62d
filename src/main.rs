mod cli;

use anyhow::Result;
use clap::Parser;
use cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // 初始化日志系统
    postgen::logger::init_logger(cli.verbose);

    cli::run(cli)
}
