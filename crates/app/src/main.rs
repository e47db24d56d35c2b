mod form;
mod settings;

use std::sync::Arc;

use candela_core::config::LogConfig;
use candela_feed::yahoo::YahooProvider;
use candela_surface::svg::SvgSurface;
use candela_view::{ChartView, RefreshOutcome};
use form::{FormInput, FormState};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// # Summary
/// 初始化全局日志。
///
/// # Logic
/// 1. `RUST_LOG` 优先，否则使用配置中的级别。
/// 2. 配置了日志目录时按天滚动写文件（非阻塞），否则写 stderr，stdout 留给表单。
///
/// # Returns
/// 写文件时返回需要持有到进程结束的 WorkerGuard。
fn init_tracing(log: &LogConfig) -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.level));
    match &log.dir {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, "candela.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(writer)
                .with_ansi(false)
                .init();
            Some(guard)
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
            None
        }
    }
}

/// # Summary
/// 应用启动入口，纯粹的 DI 容器加表单循环。
///
/// # Logic
/// 1. 加载配置并初始化全局日志。
/// 2. 实例化基础设施层（Yahoo 数据源、SVG 展示面）。
/// 3. 构造图表视图（注入 Core Trait 抽象）。
/// 4. 循环读取表单并刷新，直到用户退出或输入结束。
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. 配置与日志
    let config = settings::load()?;
    let _log_guard = init_tracing(&config.log);
    info!("Candela starting...");

    // 2. 实例化基础设施层
    let source = Arc::new(YahooProvider::new(&config.feed)?);
    let surface = SvgSurface::new(&config.surface)?;

    // 3. 构造视图
    let mut view = ChartView::new(source, surface);

    // 4. 表单循环，一次只处理一个刷新
    let mut form = FormState::from(&config.view);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();

    loop {
        let request = match form::read_request(
            &mut lines,
            &mut stdout,
            &mut form,
            &config.view.suggested_symbols,
        )
        .await?
        {
            FormInput::Submit(request) => request,
            FormInput::Quit => break,
        };

        let message = match view.refresh(request).await {
            Ok(RefreshOutcome::Rendered { title, bars, .. }) => format!(
                "{} with {} bars written to {}\n",
                title,
                bars,
                view.surface().path().display()
            ),
            // 空结果与失败都已转换为状态文字
            Ok(RefreshOutcome::Empty) | Err(_) => {
                format!("{}\n", view.status().unwrap_or_default())
            }
        };
        stdout.write_all(message.as_bytes()).await?;
    }

    info!("Input closed. Exiting...");
    Ok(())
}
