#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("Invalid FIT: {0}")]
    InvalidFit(String),
    #[error("No track points found in file")]
    EmptyFile,
}

#[derive(Debug, thiserror::Error)]
pub enum GeocodeError {
    #[error("Geocoder request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Geocoder returned {status}: {body}")]
    UnexpectedStatus {
        status: reqwest::StatusCode,
        body: String,
    },
    #[error("Geocode cache error: {0}")]
    Cache(#[from] rusqlite::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("KML serialization failed: {0}")]
    Xml(#[from] quick_xml::DeError),
    #[error("Spreadsheet write failed: {0}")]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Geocode(#[from] GeocodeError),
    #[error(transparent)]
    Render(#[from] RenderError),
    #[error("Invalid input: {0}")]
    BadRequest(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
