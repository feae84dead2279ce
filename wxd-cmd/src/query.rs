//! Commands that call the weather API.

use crate::ApiArgs;
use chrono::Local;
use log::info;
use wxd_core::coordinate::Coordinate;
use wxd_core::date_window::WindowPager;
use wxd_core::validation::{validate_form, validate_latitude, validate_longitude, FormInput};
use wxd_core::weather::WeekSnapshot;
use wxd_data::solar::format_kwh;
use wxd_data::table::{build_rows, solar_total, weekly_summary, DayRow, SummaryLine};

/// Arguments of the `week` command, still unvalidated.
#[derive(Debug, Clone, Copy)]
pub struct WeekInput<'a> {
    pub latitude: &'a str,
    pub longitude: &'a str,
    pub installed_kw: &'a str,
    pub efficiency: &'a str,
    pub offset: Option<u32>,
    pub json: bool,
}

pub async fn run_hello(api: &ApiArgs) -> anyhow::Result<()> {
    let client = api.client()?;
    let msg = client
        .hello()
        .await
        .map_err(|e| anyhow::anyhow!("Hello request failed: {}", e))?;
    println!("{}", msg);
    Ok(())
}

pub async fn run_current(api: &ApiArgs, latitude: &str, longitude: &str) -> anyhow::Result<()> {
    let latitude = validate_latitude(latitude).map_err(|e| anyhow::anyhow!("Latitude {}", e))?;
    let longitude = validate_longitude(longitude).map_err(|e| anyhow::anyhow!("Longitude {}", e))?;
    let coordinate = Coordinate::new(latitude, longitude)?;

    let client = api.client()?;
    let payload = client
        .current(&coordinate)
        .await
        .map_err(|e| anyhow::anyhow!("Current weather request failed: {}", e))?;
    println!("{}", serde_json::to_string_pretty(&payload)?);
    Ok(())
}

pub async fn run_week(api: &ApiArgs, input: WeekInput<'_>) -> anyhow::Result<()> {
    let report = validate_form(FormInput {
        latitude: input.latitude,
        longitude: input.longitude,
        installed_kw: input.installed_kw,
        efficiency: input.efficiency,
    });
    let (Some(coordinate), Some(params)) = (report.coordinate(), report.solar_params()) else {
        anyhow::bail!("Invalid input: {}", report.messages().join("; "));
    };

    let config = api.config();
    let pager = config
        .pager(Local::now().date_naive())
        .map_err(|e| anyhow::anyhow!("Invalid paging configuration: {}", e))?;
    let offset = match input.offset {
        Some(offset) => pager.clamp_offset(offset as i64),
        None => pager.initial_offset(),
    };
    let window = pager.window_for_offset(offset);
    info!("Offset {} of {}: {}", offset, pager.max_offset(), window);

    let client = api.client()?;
    let snapshot = client
        .fetch_week(&coordinate, &window)
        .await
        .map_err(|e| anyhow::anyhow!("Weather request failed: {}", e))?;

    let rows = build_rows(&snapshot.daily, Some(&params));
    let summary = weekly_summary(&snapshot.weekly);
    let total = solar_total(&rows);
    if input.json {
        let body = serde_json::json!({
            "offset": offset,
            "window": snapshot.window,
            "coordinate": coordinate,
            "days": rows,
            "summary": summary,
            "solar_total_kwh": total,
        });
        println!("{}", serde_json::to_string_pretty(&body)?);
    } else {
        print!("{}", render_week(&pager, offset, &coordinate, &snapshot, &rows, &summary));
    }
    Ok(())
}

/// Plain-text table and summary for one window.
pub fn render_week(
    pager: &WindowPager,
    offset: u32,
    coordinate: &Coordinate,
    snapshot: &WeekSnapshot,
    rows: &[DayRow],
    summary: &[SummaryLine],
) -> String {
    let mut out = format!(
        "Week {} of {}: {} ({})\n\n",
        offset + 1,
        pager.max_offset() + 1,
        snapshot.window,
        coordinate
    );
    out.push_str(&format!(
        "{:<12}{:<16}{:>10}{:>10}{:>10}{:>12}\n",
        "Day", "Condition", "Sunshine", "Max", "Min", "Solar"
    ));
    for row in rows {
        out.push_str(&format!(
            "{:<12}{:<16}{:>10}{:>10}{:>10}{:>12}\n",
            row.label,
            row.icon.label(),
            row.sunshine,
            row.temperature_max,
            row.temperature_min,
            row.solar
        ));
    }
    out.push_str("\nWeekly summary\n");
    for line in summary {
        out.push_str(&format!("  {}: {}\n", line.label, line.value));
    }
    out.push_str(&format!("  Estimated solar yield: {}\n", format_kwh(solar_total(rows))));
    out
}
