use super::fmt_coord;
use crate::types::activity::TrackPoint;

const INITIAL_ZOOM: u32 = 10;
const MAX_ZOOM: u32 = 19;
const LEAFLET_VERSION: &str = "1.9.4";

fn js_latlng(point: &TrackPoint) -> String {
    format!("[{}, {}]", fmt_coord(point.lat), fmt_coord(point.lon))
}

/// Self-contained Leaflet map: view centered on the first raw point, start
/// and end markers on the display endpoints, one polyline through the
/// display list in order.
pub fn render(center: &TrackPoint, display: &[TrackPoint]) -> String {
    let route = display
        .iter()
        .map(js_latlng)
        .collect::<Vec<_>>()
        .join(", ");
    let start = js_latlng(&display[0]);
    let end = js_latlng(&display[display.len() - 1]);

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8"/>
  <meta name="viewport" content="width=device-width, initial-scale=1.0"/>
  <title>Route Map</title>
  <link rel="stylesheet" href="https://unpkg.com/leaflet@{version}/dist/leaflet.css"/>
  <script src="https://unpkg.com/leaflet@{version}/dist/leaflet.js"></script>
  <style>
    html, body {{ margin: 0; height: 100%; }}
    #map {{ height: 100%; }}
  </style>
</head>
<body>
  <div id="map"></div>
  <script>
    var map = L.map('map').setView({center}, {initial_zoom});
    L.tileLayer('https://tile.openstreetmap.org/{{z}}/{{x}}/{{y}}.png', {{
      maxZoom: {max_zoom},
      attribution: '&copy; OpenStreetMap contributors'
    }}).addTo(map);
    L.marker({start}).addTo(map).bindPopup('Start Location');
    L.marker({end}).addTo(map).bindPopup('End Location');
    L.polyline([{route}], {{ color: 'red', weight: 2.5, opacity: 1 }}).addTo(map);
  </script>
</body>
</html>
"#,
        version = LEAFLET_VERSION,
        center = js_latlng(center),
        initial_zoom = INITIAL_ZOOM,
        max_zoom = MAX_ZOOM,
        start = start,
        end = end,
        route = route,
    )
}
