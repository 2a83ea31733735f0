mod record;
mod record_type;

pub use record::{RecordData, ResourceRecord, SoaData};
pub use record_type::RecordType;
