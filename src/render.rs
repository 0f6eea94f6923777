use std::fmt::Write as _;
use std::fs;
use std::path::Path;
use html_escape::{encode_double_quoted_attribute, encode_text};
use log::debug;
use crate::config::Files;
use crate::errors::RenderError;
use crate::models::report::{HourlySample, NewsItem, WeatherReport};

/// Horizontal pixels per hourly sample in the chart viewBox
const CHART_COLUMN_WIDTH: usize = 40;
/// Height of the chart viewBox, matches the coordinate scale of the samples
const CHART_VIEW_HEIGHT: usize = 100;

/// Renders the report into the output directory: index.html plus the copied
/// stylesheet, ready to be served as static files.
///
/// # Arguments
///
/// * 'report' - the assembled dashboard content
/// * 'files' - output directory and stylesheet source path
pub fn write_dashboard(report: &WeatherReport, files: &Files) -> Result<String, RenderError> {
    let html = render_html(report)?;

    fs::create_dir_all(&files.output_dir)?;
    let output_path = Path::new(&files.output_dir).join("index.html");
    fs::write(&output_path, &html)?;
    debug!("wrote {} bytes of html", html.len());

    copy_stylesheet(files)?;

    Ok(output_path.display().to_string())
}

fn copy_stylesheet(files: &Files) -> Result<(), RenderError> {
    let styles_dir = Path::new(&files.output_dir).join("styles");
    fs::create_dir_all(&styles_dir)?;

    let css = fs::read(&files.css_file)?;
    fs::write(styles_dir.join("kindle.css"), css)?;

    Ok(())
}

fn render_html(report: &WeatherReport) -> Result<String, RenderError> {
    let mut page = String::new();

    writeln!(page, "<!DOCTYPE html>")?;
    writeln!(page, "<html lang=\"ja\">")?;
    writeln!(page, "<head>")?;
    writeln!(page, "<meta charset=\"utf-8\">")?;
    writeln!(page, "<title>天気ダッシュボード</title>")?;
    writeln!(page, "<link rel=\"stylesheet\" href=\"styles/kindle.css\">")?;
    writeln!(page, "</head>")?;
    writeln!(page, "<body>")?;

    writeln!(page, "<header>")?;
    writeln!(page, "<h1>{}の天気</h1>", encode_text(&report.location))?;
    writeln!(page, "<p class=\"update-time\">更新: {}</p>", report.update_time)?;
    if report.is_using_fallback_data {
        writeln!(page, "<p class=\"fallback-notice\">※ サンプルデータを表示しています</p>")?;
    }
    writeln!(page, "</header>")?;

    render_current(&mut page, report)?;
    render_hourly(&mut page, &report.hourly_forecast)?;
    render_daily(&mut page, report)?;
    render_news(&mut page, "主要ニュース", &report.news)?;
    render_news(&mut page, "経済ニュース", &report.economy_news)?;

    writeln!(page, "</body>")?;
    writeln!(page, "</html>")?;

    Ok(page)
}

fn render_current(page: &mut String, report: &WeatherReport) -> Result<(), RenderError> {
    writeln!(page, "<section class=\"current\">")?;
    writeln!(
        page,
        "<p class=\"current-main\"><span class=\"current-icon\">{}</span><span class=\"current-temp\">{}℃</span></p>",
        report.weather_icon, report.temperature
    )?;
    writeln!(page, "<p class=\"current-desc\">{}</p>", encode_text(&report.description))?;

    // An untrustworthy minimum is suppressed rather than shown as a fake zero
    let min_temp = if report.has_min_temp {
        report.min_temp.to_string()
    } else {
        "--".to_string()
    };
    writeln!(
        page,
        "<p class=\"current-range\">最高 {}℃ / 最低 {}℃ / 体感 {}℃</p>",
        report.max_temp, min_temp, report.feels_like
    )?;

    if !report.wind.is_empty() {
        writeln!(page, "<p class=\"current-wind\">{}</p>", encode_text(&report.wind))?;
    }

    writeln!(page, "<table class=\"rain-table\">")?;
    writeln!(page, "<tr><th>06-12</th><th>12-18</th><th>18-24</th></tr>")?;
    writeln!(
        page,
        "<tr><td>{}</td><td>{}</td><td>{}</td></tr>",
        encode_text(&report.chance_of_rain[0]),
        encode_text(&report.chance_of_rain[1]),
        encode_text(&report.chance_of_rain[2])
    )?;
    writeln!(page, "</table>")?;
    writeln!(page, "</section>")?;

    Ok(())
}

fn render_hourly(page: &mut String, samples: &[HourlySample]) -> Result<(), RenderError> {
    if samples.is_empty() {
        return Ok(());
    }

    writeln!(page, "<section class=\"hourly\">")?;
    writeln!(page, "<h2>時間別予報</h2>")?;

    let width = samples.len() * CHART_COLUMN_WIDTH;
    writeln!(
        page,
        "<svg class=\"temp-chart\" viewBox=\"0 0 {} {}\" preserveAspectRatio=\"none\">",
        width, CHART_VIEW_HEIGHT
    )?;
    let points = samples
        .iter()
        .enumerate()
        .map(|(i, s)| format!("{},{}", i * CHART_COLUMN_WIDTH + CHART_COLUMN_WIDTH / 2, s.chart_coord))
        .collect::<Vec<String>>()
        .join(" ");
    writeln!(page, "<polyline class=\"temp-line\" points=\"{}\"/>", points)?;
    for (i, sample) in samples.iter().enumerate() {
        writeln!(
            page,
            "<circle class=\"temp-dot\" cx=\"{}\" cy=\"{}\" r=\"3\"/>",
            i * CHART_COLUMN_WIDTH + CHART_COLUMN_WIDTH / 2,
            sample.chart_coord
        )?;
    }
    writeln!(page, "</svg>")?;

    writeln!(page, "<table class=\"hourly-table\">")?;
    write!(page, "<tr>")?;
    for sample in samples {
        write!(page, "<th>{}</th>", sample.time)?;
    }
    writeln!(page, "</tr>")?;
    write!(page, "<tr>")?;
    for sample in samples {
        write!(page, "<td>{}</td>", sample.icon)?;
    }
    writeln!(page, "</tr>")?;
    write!(page, "<tr>")?;
    for sample in samples {
        write!(page, "<td>{}℃</td>", sample.temp)?;
    }
    writeln!(page, "</tr>")?;
    write!(page, "<tr>")?;
    for sample in samples {
        write!(page, "<td>{}</td>", encode_text(&sample.rain_chance))?;
    }
    writeln!(page, "</tr>")?;
    writeln!(page, "</table>")?;
    writeln!(page, "</section>")?;

    Ok(())
}

fn render_daily(page: &mut String, report: &WeatherReport) -> Result<(), RenderError> {
    if report.daily_forecasts.is_empty() {
        return Ok(());
    }

    writeln!(page, "<section class=\"daily\">")?;
    writeln!(page, "<h2>3日間の予報</h2>")?;
    writeln!(page, "<table class=\"daily-table\">")?;
    writeln!(page, "<tr><th>日付</th><th></th><th>天気</th><th>最高</th><th>最低</th><th>降水</th></tr>")?;
    for summary in &report.daily_forecasts {
        writeln!(
            page,
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}℃</td><td>{}℃</td><td>{}</td></tr>",
            summary.date,
            summary.icon,
            encode_text(&summary.description),
            summary.max_temp,
            summary.min_temp,
            encode_text(&summary.rain_chance)
        )?;
    }
    writeln!(page, "</table>")?;
    writeln!(page, "</section>")?;

    Ok(())
}

fn render_news(page: &mut String, heading: &str, items: &[NewsItem]) -> Result<(), RenderError> {
    if items.is_empty() {
        return Ok(());
    }

    writeln!(page, "<section class=\"news\">")?;
    writeln!(page, "<h2>{}</h2>", heading)?;
    writeln!(page, "<ul>")?;
    for item in items {
        writeln!(
            page,
            "<li><a href=\"{}\">{}</a><span class=\"news-date\">{}</span></li>",
            encode_double_quoted_attribute(&item.link),
            encode_text(&item.title),
            encode_text(&item.pub_date)
        )?;
    }
    writeln!(page, "</ul>")?;
    writeln!(page, "</section>")?;

    Ok(())
}
