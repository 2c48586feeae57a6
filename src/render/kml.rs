use serde::Serialize;

use super::fmt_coord;
use crate::error::RenderError;
use crate::types::activity::TrackPoint;

const KML_NAMESPACE: &str = "http://www.opengis.net/kml/2.2";
const LINE_STYLE_ID: &str = "yellowLineGreenPoly";

#[derive(Serialize)]
#[serde(rename = "kml")]
struct KmlRoot {
    #[serde(rename = "@xmlns")]
    xmlns: &'static str,
    #[serde(rename = "Document")]
    document: Document,
}

#[derive(Serialize)]
struct Document {
    name: &'static str,
    description: &'static str,
    #[serde(rename = "Style")]
    style: Style,
    #[serde(rename = "Placemark")]
    placemark: Placemark,
}

#[derive(Serialize)]
struct Style {
    #[serde(rename = "@id")]
    id: &'static str,
    #[serde(rename = "LineStyle")]
    line_style: LineStyle,
    #[serde(rename = "PolyStyle")]
    poly_style: PolyStyle,
}

#[derive(Serialize)]
struct LineStyle {
    color: &'static str,
    width: u32,
}

#[derive(Serialize)]
struct PolyStyle {
    color: &'static str,
}

#[derive(Serialize)]
struct Placemark {
    name: &'static str,
    description: &'static str,
    #[serde(rename = "styleUrl")]
    style_url: String,
    #[serde(rename = "LineString")]
    line_string: LineString,
}

#[derive(Serialize)]
struct LineString {
    extrude: u8,
    tessellate: u8,
    #[serde(rename = "altitudeMode")]
    altitude_mode: &'static str,
    coordinates: String,
}

/// One closed document with a single line-string through every raw track
/// point, `lon,lat,0` order, one triple per line, clamped to ground.
pub fn render(points: &[TrackPoint]) -> Result<String, RenderError> {
    let coordinates = points
        .iter()
        .map(|p| format!("{},{},0", fmt_coord(p.lon), fmt_coord(p.lat)))
        .collect::<Vec<_>>()
        .join("\n");

    let root = KmlRoot {
        xmlns: KML_NAMESPACE,
        document: Document {
            name: "Coordinates",
            description: "Coordinates",
            style: Style {
                id: LINE_STYLE_ID,
                line_style: LineStyle {
                    color: "7f00ffff",
                    width: 4,
                },
                poly_style: PolyStyle { color: "7f00ff00" },
            },
            placemark: Placemark {
                name: "Route",
                description: "Activity track",
                style_url: format!("#{LINE_STYLE_ID}"),
                line_string: LineString {
                    extrude: 1,
                    tessellate: 1,
                    altitude_mode: "clampedToGround",
                    coordinates,
                },
            },
        },
    };

    let mut out = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    let mut serializer = quick_xml::se::Serializer::new(&mut out);
    serializer.indent(' ', 2);
    root.serialize(serializer)?;
    out.push('\n');
    Ok(out)
}
