//! GPMF container level: FourCC, decoded payloads, records, and raw KLV decoding.

pub mod fourcc;
pub mod gpmf;
pub mod klv;
pub mod record;
pub mod value;

pub use fourcc::FourCC;
pub use gpmf::Gpmf;
pub use record::{Record, TaggedRecord};
pub use value::{Value, parse_gps_datetime};
