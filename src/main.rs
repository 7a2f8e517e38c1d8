use clap::Parser;
use researcher_client::config::cli::AccountWriter;
use researcher_client::core::ConfigProvider;
use researcher_client::utils::logger;
use researcher_client::{AccountPager, CliConfig, ClientError, Session};

async fn run(cli: &CliConfig) -> Result<(), ClientError> {
    let config = cli.resolve()?;
    let page_size = cli.page_size.unwrap_or_else(|| config.default_page_size());

    let session = Session::new(&config)?;
    let client = session.researcher_client();

    let stdout = std::io::stdout();
    let mut writer = AccountWriter::new(stdout.lock(), cli.format);

    if cli.all {
        let accounts = AccountPager::new(&client, cli.offset, page_size)?
            .with_email_filter(cli.email_filter.as_deref())
            .collect_all(cli.max_items)
            .await?;
        tracing::info!("✅ Retrieved {} accounts", accounts.len());
        writer.write_accounts(&accounts)?;
    } else {
        let page = client
            .list_accounts_filtered(cli.offset, page_size, cli.email_filter.as_deref())
            .await?;
        writer.write_page(&page)?;
    }

    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.json_logs {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting researcher-accounts");
    if cli.verbose {
        // session token 不寫入日誌
        tracing::debug!(
            "endpoint={:?} config={:?} offset={} page_size={:?} all={}",
            cli.endpoint,
            cli.config,
            cli.offset,
            cli.page_size,
            cli.all
        );
    }

    if let Err(e) = run(&cli).await {
        tracing::error!("❌ Request failed: {} (Severity: {:?})", e, e.severity());
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        // 根據錯誤嚴重程度決定退出碼
        std::process::exit(e.severity().exit_code());
    }

    Ok(())
}
