use thiserror::Error;

#[derive(Error, Debug)]
pub enum PromoError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Workbook error: {0}")]
    Workbook(String),

    #[error("Excel write error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("no sheet contained valid promo rows")]
    NoValidData,
}

pub type Result<T> = std::result::Result<T, PromoError>;
