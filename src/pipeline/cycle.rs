// src/pipeline/cycle.rs

//! One poll cycle: fetch, validate, format, deliver.

use chrono::Utc;
use serde_json::Value;

use crate::error::Result;
use crate::pipeline::{check_response, parse_status};
use crate::services::{Notifier, ReviewApiClient};

/// Deliver one notification per record, in upstream order.
///
/// Fail-fast: the first bad record or failed delivery aborts the rest
/// of the batch. Returns the number of notifications delivered.
pub async fn dispatch(records: &[Value], notifier: &dyn Notifier) -> Result<usize> {
    let mut delivered = 0;
    for record in records {
        let text = parse_status(record)?;
        notifier.deliver(&text).await?;
        delivered += 1;
    }
    Ok(delivered)
}

/// Run one full poll cycle.
///
/// On success, returns the next watermark: the instant captured at cycle
/// start, so records arriving mid-cycle fall into the next window.
pub async fn run_cycle(
    api: &ReviewApiClient,
    notifier: &dyn Notifier,
    watermark: i64,
) -> Result<i64> {
    let cycle_start = Utc::now().timestamp();

    let response = api.fetch(watermark).await?;
    let records = check_response(&response)?;
    log::info!("Poll window from {watermark}: {} record(s)", records.len());

    let delivered = dispatch(&records, notifier).await?;
    if delivered > 0 {
        log::info!("Delivered {delivered} status notification(s)");
    }

    Ok(cycle_start)
}
