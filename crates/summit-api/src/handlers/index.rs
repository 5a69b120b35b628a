//! Trip list page

use std::fmt::Write;

use axum::extract::State;
use axum::response::Html;
use summit_core::decode::ACCEPTED_EXTENSIONS;
use summit_core::Trip;

use crate::state::AppState;

/// GET /
/// Render the trip list page
pub async fn index(State(state): State<AppState>) -> Html<String> {
    Html(render_trip_list(state.trips()))
}

/// Render every trip, in order, plus the track upload form
pub fn render_trip_list(trips: &[Trip]) -> String {
    let mut html = String::from(concat!(
        "<!DOCTYPE html>\n",
        "<html lang=\"en\">\n",
        "<head>\n",
        "<meta charset=\"utf-8\">\n",
        "<title>Past Trips</title>\n",
        "</head>\n",
        "<body>\n",
        "<h1>Past Trips</h1>\n",
        "<section id=\"trips\">\n",
    ));

    for trip in trips {
        // Writing to a String cannot fail
        let _ = write!(
            html,
            concat!(
                "<article class=\"trip\" data-id=\"{id}\">\n",
                "<img src=\"{image}\" alt=\"{name}\">\n",
                "<h2>{name}</h2>\n",
                "<p class=\"meta\">{date} &middot; {location} &middot; {elevation}</p>\n",
                "<p>{description}</p>\n",
                "<ul class=\"stats\">",
                "<li>{duration}</li><li>{distance}</li><li>{gain}</li>",
                "</ul>\n",
                "</article>\n",
            ),
            id = escape_html(&trip.id),
            image = escape_html(&trip.image),
            name = escape_html(&trip.name),
            date = escape_html(&trip.date),
            location = escape_html(&trip.location),
            elevation = escape_html(&trip.elevation),
            description = escape_html(&trip.description),
            duration = escape_html(&trip.stats.duration),
            distance = escape_html(&trip.stats.distance),
            gain = escape_html(&trip.stats.gain),
        );
    }

    let accept = ACCEPTED_EXTENSIONS
        .iter()
        .map(|ext| format!(".{}", ext))
        .collect::<Vec<_>>()
        .join(",");
    let _ = write!(
        html,
        concat!(
            "</section>\n",
            "<form id=\"upload\" action=\"/api/parse-gpx\" method=\"post\" enctype=\"multipart/form-data\">\n",
            "<input type=\"file\" name=\"file\" accept=\"{accept}\">\n",
        ),
        accept = accept,
    );
    html.push_str(concat!(
        "<button type=\"submit\">Show route</button>\n",
        "</form>\n",
        "</body>\n",
        "</html>\n",
    ));

    html
}

/// Escape text for use in HTML content and quoted attributes
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
