//! HTML fragment rendering for search results
//!
//! Two payload shapes: a distinct no-matches paragraph for empty result
//! sets, and a Country/City/Temperature table otherwise. Temperature cell
//! values are stable and asserted by tests:
//!
//! - success: the numeric reading suffixed with `°C`, e.g. `21.5°C`
//! - not-found and unconfigured: `N/A`
//! - provider-error: `Error`

use crate::models::{CityRow, FetchOutcome, WeatherReading};

/// Message rendered when a term matches no locations
const NO_MATCHES: &str = "<p>No countries or cities found.</p>";

/// Serialize enriched rows into the display fragment
#[must_use]
pub fn render_rows(rows: &[CityRow]) -> String {
    if rows.is_empty() {
        return NO_MATCHES.to_string();
    }

    let mut html = String::from(
        "<table>\n<thead>\n<tr><th>Country</th><th>City</th><th>Temperature</th></tr>\n</thead>\n<tbody>\n",
    );

    for row in rows {
        let country = row.country.as_deref().unwrap_or("");
        html.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td></tr>\n",
            escape_html(country),
            escape_html(&row.name),
            temperature_cell(&row.reading),
        ));
    }

    html.push_str("</tbody>\n</table>");
    html
}

/// Temperature column value for one reading
fn temperature_cell(reading: &WeatherReading) -> String {
    match reading.outcome {
        FetchOutcome::Success => match reading.temperature {
            Some(temperature) => format!("{temperature}°C"),
            // A success reading always carries a temperature; render the
            // neutral sentinel rather than a misleading value if not
            None => "N/A".to_string(),
        },
        FetchOutcome::NotFound | FetchOutcome::Unconfigured => "N/A".to_string(),
        FetchOutcome::ProviderError => "Error".to_string(),
    }
}

/// Escape user-influenced text for the HTML output context
fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
