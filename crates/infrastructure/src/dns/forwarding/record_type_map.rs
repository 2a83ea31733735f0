//! Mapping from `nslookup_domain::RecordType` onto `hickory_proto::rr::RecordType`

use hickory_proto::rr::RecordType as HickoryRecordType;
use nslookup_domain::RecordType;

pub struct RecordTypeMapper;

impl RecordTypeMapper {
    pub fn to_hickory(record_type: &RecordType) -> HickoryRecordType {
        match record_type {
            RecordType::A => HickoryRecordType::A,
            RecordType::AAAA => HickoryRecordType::AAAA,
            RecordType::SOA => HickoryRecordType::SOA,
        }
    }
}
