use nslookup_domain::{RecordData, ResourceRecord, SoaData};

pub fn a_record(name: &str, ip: &str) -> ResourceRecord {
    ResourceRecord::new(
        format!("{} 300 IN A {}", name, ip),
        RecordData::Address(ip.parse().unwrap()),
    )
}

pub fn aaaa_record(name: &str, ip: &str) -> ResourceRecord {
    ResourceRecord::new(
        format!("{} 300 IN AAAA {}", name, ip),
        RecordData::Address(ip.parse().unwrap()),
    )
}

pub fn cname_record(name: &str, target: &str) -> ResourceRecord {
    ResourceRecord::new(
        format!("{} 300 IN CNAME {}", name, target),
        RecordData::Alias(target.to_string()),
    )
}

pub fn soa_record(zone: &str, mname: &str) -> ResourceRecord {
    let soa = SoaData {
        mname: mname.to_string(),
        rname: format!("hostmaster.{}", zone),
        serial: 2024010101,
        refresh: 7200,
        retry: 3600,
        expire: 1209600,
        minimum: 3600,
    };
    ResourceRecord::new(
        format!("{} 3600 IN SOA {}", zone, soa),
        RecordData::Soa(soa),
    )
}
