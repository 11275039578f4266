use anyhow::Result;
use tracing::info;

use crate::cli::Commands;
use crate::clients::FraudApiClient;
use crate::config::Config;
use crate::models::load_transaction_form;
use crate::orchestrator::HomeView;
use crate::services::ConsoleNotifier;
use crate::utils::logging;
use crate::workflow::SubmissionOrchestrator;

/// 应用主结构
pub struct App {
    client: FraudApiClient,
}

impl App {
    /// 初始化应用
    pub fn initialize(config: Config) -> Result<Self> {
        logging::log_startup(&config);
        let client = FraudApiClient::new(&config)?;
        Ok(Self { client })
    }

    /// 执行一次提交
    ///
    /// 提交失败只通知用户，不作为程序错误返回
    pub async fn run(self, command: Commands) -> Result<()> {
        let orchestrator = SubmissionOrchestrator::new(self.client, ConsoleNotifier);

        match command {
            Commands::Manual { form, set } => {
                let initial = match form {
                    Some(path) => load_transaction_form(&path).await?,
                    None => Default::default(),
                };

                let mut view = HomeView::with_form(orchestrator, initial);
                for (field, value) in set {
                    view.set_field(&field, value)?;
                }

                if let Some(Ok(verdict)) = view.submit_manual().await {
                    info!("结论: {:?}", verdict);
                }
            }
            Commands::Photo { path } => {
                let mut view = HomeView::new(orchestrator);
                if let Some(path) = path {
                    view.select_photo(&path).await?;
                }

                if let Ok(verdict) = view.submit_photo().await {
                    info!("结论: {:?}", verdict);
                }
            }
        }

        Ok(())
    }
}
