use anyhow::Result;
use clap::Parser;
use fraud_check_submit::cli::Cli;
use fraud_check_submit::utils::logging;
use fraud_check_submit::{App, Config};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // 加载配置
    let config = Config::from_env();

    // 初始化日志
    logging::init(config.verbose_logging);

    App::initialize(config)?.run(cli.command).await
}
