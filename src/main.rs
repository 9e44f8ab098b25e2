use anyhow::Result;

fn main() -> Result<()> {
    skycast_core::init()?;

    let mut app = skycast_core::App::new()?;

    let forecast = &app.config().forecast;
    tracing::info!(
        "skycast started with {:?} {:?} forecasts in {}",
        forecast.variant,
        forecast.data_set,
        forecast.locale
    );

    let screen = app.screen();
    println!("Forecast for {}", screen.selected_place().display_name);
    for row in screen.rows() {
        let marker = if row.expanded { "v" } else { ">" };
        println!(
            "{} {} {} {}  {:>6.2}º / {:>6.2}º  {}",
            marker,
            row.labels.day_of_week,
            row.labels.day_of_month,
            row.labels.month,
            row.max,
            row.min,
            row.condition
        );
        if let (true, Some(metrics)) = (row.expanded, &row.metrics) {
            println!(
                "    rain {}  wind {}  humidity {}  pressure {}  uv {}",
                metrics.chance_of_rain,
                metrics.wind_speed,
                metrics.humidity,
                metrics.pressure,
                metrics.uv_index
            );
        }
    }

    if std::env::var_os("SKYCAST_JSON").is_some() {
        println!("{}", serde_json::to_string_pretty(&screen.snapshot())?);
    }

    app.shutdown();

    Ok(())
}
