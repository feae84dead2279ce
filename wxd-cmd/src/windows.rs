//! Listing of the pageable 7-day windows.

use crate::ApiArgs;
use chrono::Local;
use log::info;
use wxd_core::date_window::WindowPager;
use wxd_utils::dates::parse_date;

/// One line per offset, the initial one marked with `*`.
pub fn render_windows(pager: &WindowPager) -> Vec<String> {
    let initial = pager.initial_offset();
    pager
        .windows()
        .map(|(offset, window)| {
            let marker = if offset == initial { "*" } else { " " };
            format!("{} {:>3}  {}", marker, offset, window)
        })
        .collect()
}

pub fn run_windows(api: &ApiArgs, today: Option<&str>) -> anyhow::Result<()> {
    let today = match today {
        Some(day) => parse_date(day).map_err(|e| anyhow::anyhow!("Invalid --today '{}': {}", day, e))?,
        None => Local::now().date_naive(),
    };
    let pager = api
        .config()
        .pager(today)
        .map_err(|e| anyhow::anyhow!("Invalid paging configuration: {}", e))?;

    info!(
        "Windows from {} to {} (today {})",
        pager.earliest(),
        pager.latest(),
        pager.today()
    );
    for line in render_windows(&pager) {
        println!("{}", line);
    }
    Ok(())
}
