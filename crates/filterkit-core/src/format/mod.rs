pub mod number;
pub mod phone;
pub mod seconds;
pub mod trust;
pub mod truncate;

pub use number::{format_number, percentage, MAX_DECIMALS};
pub use phone::{format_phone, parse_phone, PhoneParts};
pub use seconds::{format_duration_clock, seconds_to_date, seconds_to_epoch_millis};
pub use trust::{
    escape_html, trust_as_html, trust_as_resource_url, TrustedHtml, TrustedResourceUrl,
};
pub use truncate::{truncate, DEFAULT_TRUNCATE_END, DEFAULT_TRUNCATE_LENGTH};
