use std::fs;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use anyhow::{Context, Result};
use log::{info, Level, LevelFilter, log};
use truckload::io::ext_repr::ExtPlan;

use crate::EPOCH;

pub mod cli;

pub fn write_json_plan(plan: &ExtPlan, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("could not create plan file: {}", path.display()))?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, plan)
        .with_context(|| format!("could not write plan file: {}", path.display()))?;
    info!("json plan written to {:?}", fs::canonicalize(path)?);
    Ok(())
}

pub fn init_logger(level_filter: LevelFilter) -> Result<()> {
    fern::Dispatch::new()
        // Perform allocation-free log formatting
        .format(|out, message, record| {
            let handle = std::thread::current();
            let thread_name = handle.name().unwrap_or("-");

            let duration = EPOCH.elapsed();
            let sec = duration.as_secs() % 60;
            let min = (duration.as_secs() / 60) % 60;
            let hours = (duration.as_secs() / 60) / 60;

            let prefix = format!(
                "[{}] [{:0>2}:{:0>2}:{:0>2}] <{}>",
                record.level(),
                hours,
                min,
                sec,
                thread_name,
            );

            out.finish(format_args!("{:<27}{}", prefix, message))
        })
        .level(level_filter)
        .chain(std::io::stdout())
        .apply()
        .context("could not initialize logger")?;
    log!(
        Level::Info,
        "time: {}",
        humantime::format_rfc3339_seconds(std::time::SystemTime::now())
    );
    Ok(())
}
