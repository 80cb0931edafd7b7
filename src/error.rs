use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogueError {
    #[error("failed to read catalogue file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid catalogue JSON from {origin}: {source}")]
    Deserialize {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("duplicate property id \"{0}\" in catalogue")]
    DuplicateId(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

#[derive(Debug, Error, PartialEq)]
pub enum MortgageError {
    #[error("down payment {down_payment} exceeds price {price}")]
    DownPaymentExceedsPrice { down_payment: f64, price: f64 },

    #[error("down payment must not be negative")]
    NegativeDownPayment,

    #[error("interest rate {0}% is outside 1-20%")]
    RateOutOfRange(f64),

    #[error("loan term of {0} years is outside 5-30 years")]
    TermOutOfRange(u32),
}
