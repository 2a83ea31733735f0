mod lookup;

pub use lookup::DnsLookupUseCase;
