//! The public, read-only view of a `Url`'s authority host: which grammar
//! shape it matched and, for the address forms, its decoded value.

use crate::parts::HostType;
use std::net::{Ipv4Addr, Ipv6Addr};

/// A decoded view of the `host` component. Borrowed from a `Url`, never
/// owned: re-derive it whenever the host is read rather than caching it
/// across a mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Host<'a> {
    /// A `reg-name`: the raw percent-encoded bytes, in case the caller
    /// needs them un-decoded (e.g. to preserve an uncommon escaping).
    Name(&'a str),
    Ipv4(Ipv4Addr),
    Ipv6(Ipv6Addr),
    /// An `IPvFuture` literal (`vHEX.rest`), kept as its raw bytes since
    /// this crate does not know how to interpret any particular version.
    IpvFuture(&'a str),
}

pub(crate) fn describe<'a>(host_type: HostType, raw: &'a [u8], raw_str: &'a str) -> Host<'a> {
    match host_type {
        HostType::Name => Host::Name(raw_str),
        HostType::Ipv4 => {
            let (addr, _) = crate::grammar::host::ipv4address(raw, 0).expect("stored Ipv4 host must re-parse");
            Host::Ipv4(Ipv4Addr::from(addr))
        }
        HostType::Ipv6 => {
            // The stored bytes are the bracketed literal; strip the
            // "[...]" and re-run the address grammar on its interior.
            let inner = &raw[1..raw.len() - 1];
            let (addr, _) =
                crate::grammar::host::ipv6address(inner, 0).expect("stored Ipv6 host must re-parse");
            Host::Ipv6(Ipv6Addr::from(addr))
        }
        HostType::IpvFuture => Host::IpvFuture(raw_str),
    }
}
