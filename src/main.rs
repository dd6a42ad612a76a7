use submission_deadline::*;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use config::{Args, Config};
use log::info;

use clock::{Clock, FixedClock, SystemClock};
use domain::CountdownSnapshot;
use logging::log_override;
use monitor::CountdownMonitor;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    let args = Args::parse();
    let config = Config::load(&args.config)?.apply_args(&args)?;

    info!("🚀 Submission deadline: {}", domain::time::DEADLINE_LABEL);

    match args.fixed_now()? {
        Some(now) => {
            log_override(&now.to_rfc3339());
            run(FixedClock(now), &config, args.max_ticks()).await
        }
        None => run(SystemClock, &config, args.max_ticks()).await,
    }
}

// ===============================
// DISPLAY LOOP
// ===============================
async fn run<C: Clock>(clock: C, config: &Config, max_ticks: Option<u64>) -> Result<()> {
    let mut monitor = CountdownMonitor::new(clock, config.display.tick_interval_ms);
    if let Some(n) = max_ticks {
        monitor = monitor.with_max_ticks(n);
    }

    let json = config.display.json;
    monitor
        .start_monitoring(move |snapshot| async move {
            if let Err(e) = print_snapshot(&snapshot, json) {
                log::warn!("⚠️ Failed to render snapshot: {}", e);
            }
        })
        .await;

    Ok(())
}

fn print_snapshot(snapshot: &CountdownSnapshot, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string(snapshot)?);
        return Ok(());
    }

    let countdown = if snapshot.past_deadline {
        snapshot.countdown.red().bold()
    } else {
        snapshot.countdown.green()
    };
    println!("截止时间: {} | 剩余: {}", snapshot.deadline_label, countdown);
    Ok(())
}
