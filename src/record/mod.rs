//! The resource-record catalog: the tagged [`Record`] variant, the
//! [`ResourceRecord`] envelope it travels in, and the dispatch logic that
//! picks a per-type decoder by RTYPE.

mod a;
mod aaaa;
mod afsdb;
mod caa;
mod cert;
mod cname;
mod dnskey;
mod ds;
mod hinfo;
mod mb;
mod mg;
mod minfo;
mod mr;
mod mx;
mod naptr;
mod ns;
mod nsec;
mod nsec3;
mod nsec3param;
mod null;
mod opt;
mod ptr;
mod rp;
mod rrsig;
mod soa;
mod spf;
mod srv;
mod sshfp;
mod tlsa;
mod txt;
mod unknown;
mod uri;
mod wks;

pub use self::a::ARecord;
pub use self::aaaa::AaaaRecord;
pub use self::afsdb::AfsdbRecord;
pub use self::caa::CaaRecord;
pub use self::cert::CertRecord;
pub use self::cname::CnameRecord;
pub use self::dnskey::DnskeyRecord;
pub use self::ds::DsRecord;
pub use self::hinfo::HinfoRecord;
pub use self::mb::MbRecord;
pub use self::mg::MgRecord;
pub use self::minfo::MinfoRecord;
pub use self::mr::MrRecord;
pub use self::mx::MxRecord;
pub use self::naptr::NaptrRecord;
pub use self::ns::NsRecord;
pub use self::nsec::NsecRecord;
pub use self::nsec3::Nsec3Record;
pub use self::nsec3param::Nsec3paramRecord;
pub use self::null::NullRecord;
pub use self::opt::{EdeCode, EdnsOption, OptRecord};
pub use self::ptr::PtrRecord;
pub use self::rp::RpRecord;
pub use self::rrsig::RrsigRecord;
pub use self::soa::SoaRecord;
pub use self::spf::SpfRecord;
pub use self::srv::SrvRecord;
pub use self::sshfp::SshfpRecord;
pub use self::tlsa::TlsaRecord;
pub use self::txt::{TxtRecord, TxtString};
pub use self::unknown::UnknownRecord;
pub use self::uri::UriRecord;
pub use self::wks::WksRecord;

use std::fmt;

use crate::error::DecodeError;
use crate::message::DecodeMode;
use crate::name::DomainName;
use crate::reader::DatagramReader;
use crate::util::Opaque;

/// The per-type contract every ordinary (non-OPT) record decoder
/// implements: given a reader positioned at the start of RDATA and the
/// RDLENGTH claimed by the preamble, produce a value or a [`DecodeError`].
///
/// Implementors read exactly `rdlength` octets; [`ResourceRecord::read`]
/// checks that afterwards via [`DatagramReader::sanitize`] rather than
/// trusting each decoder to self-report.
pub(crate) trait RecordData: Sized {
    const NAME: &'static str;
    const RTYPE: u16;

    fn read(reader: &mut DatagramReader<'_>, rdlength: u16) -> Result<Self, DecodeError>;
}

/// A parsed resource record's RDATA, tagged by type.
#[derive(Debug, Clone, PartialEq)]
pub enum Record {
    A(ARecord),
    Ns(NsRecord),
    Cname(CnameRecord),
    Soa(SoaRecord),
    Mb(MbRecord),
    Mg(MgRecord),
    Mr(MrRecord),
    Null(NullRecord),
    Wks(WksRecord),
    Ptr(PtrRecord),
    Hinfo(HinfoRecord),
    Minfo(MinfoRecord),
    Mx(MxRecord),
    Txt(TxtRecord),
    Rp(RpRecord),
    Afsdb(AfsdbRecord),
    Aaaa(AaaaRecord),
    Srv(SrvRecord),
    Naptr(NaptrRecord),
    Cert(CertRecord),
    Opt(OptRecord),
    Ds(DsRecord),
    Sshfp(SshfpRecord),
    Rrsig(RrsigRecord),
    Nsec(NsecRecord),
    Dnskey(DnskeyRecord),
    Nsec3(Nsec3Record),
    Nsec3param(Nsec3paramRecord),
    Tlsa(TlsaRecord),
    Spf(SpfRecord),
    Uri(UriRecord),
    Caa(CaaRecord),
    Unknown(UnknownRecord),
}

impl Record {
    /// Dispatches on `rtype`, reading exactly `rdlength` octets of RDATA.
    ///
    /// `rclass`/`ttl` are only meaningful to OPT (rtype 41), whose
    /// preamble fields are overloaded (see [`OptRecord`]); every other
    /// decoder ignores them.
    fn decode(
        reader: &mut DatagramReader<'_>,
        rtype: u16,
        rclass: u16,
        ttl: u32,
        rdlength: u16,
    ) -> Result<Self, DecodeError> {
        macro_rules! try_record {
            ($record:ty, $variant:ident) => {
                if <$record>::RTYPE == rtype {
                    log::info!("parsing {} record (type {}, rdlength {})", <$record>::NAME, rtype, rdlength);
                    return <$record>::read(reader, rdlength).map(Self::$variant);
                }
            };
        }

        try_record!(ARecord, A);
        try_record!(NsRecord, Ns);
        try_record!(CnameRecord, Cname);
        try_record!(SoaRecord, Soa);
        try_record!(MbRecord, Mb);
        try_record!(MgRecord, Mg);
        try_record!(MrRecord, Mr);
        try_record!(NullRecord, Null);
        try_record!(WksRecord, Wks);
        try_record!(PtrRecord, Ptr);
        try_record!(HinfoRecord, Hinfo);
        try_record!(MinfoRecord, Minfo);
        try_record!(MxRecord, Mx);
        try_record!(TxtRecord, Txt);
        try_record!(RpRecord, Rp);
        try_record!(AfsdbRecord, Afsdb);
        try_record!(AaaaRecord, Aaaa);
        try_record!(SrvRecord, Srv);
        try_record!(NaptrRecord, Naptr);
        try_record!(CertRecord, Cert);
        try_record!(DsRecord, Ds);
        try_record!(SshfpRecord, Sshfp);
        try_record!(RrsigRecord, Rrsig);
        try_record!(NsecRecord, Nsec);
        try_record!(DnskeyRecord, Dnskey);
        try_record!(Nsec3Record, Nsec3);
        try_record!(Nsec3paramRecord, Nsec3param);
        try_record!(TlsaRecord, Tlsa);
        try_record!(SpfRecord, Spf);
        try_record!(UriRecord, Uri);
        try_record!(CaaRecord, Caa);

        if rtype == OptRecord::RTYPE {
            log::info!("parsing OPT record (rdlength {rdlength})");
            return OptRecord::read(reader, rdlength, rclass, ttl).map(Self::Opt);
        }

        log::debug!("unrecognized rtype {rtype}, keeping {rdlength} raw octets");
        let raw = reader.read_bytes(usize::from(rdlength))?.to_vec();
        Ok(Self::Unknown(UnknownRecord { rtype, raw: Opaque(raw) }))
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::A(r) => write!(f, "{r}"),
            Self::Ns(r) => write!(f, "{r}"),
            Self::Cname(r) => write!(f, "{r}"),
            Self::Soa(r) => write!(f, "{r}"),
            Self::Mb(r) => write!(f, "{r}"),
            Self::Mg(r) => write!(f, "{r}"),
            Self::Mr(r) => write!(f, "{r}"),
            Self::Null(r) => write!(f, "{r}"),
            Self::Wks(r) => write!(f, "{r}"),
            Self::Ptr(r) => write!(f, "{r}"),
            Self::Hinfo(r) => write!(f, "{r}"),
            Self::Minfo(r) => write!(f, "{r}"),
            Self::Mx(r) => write!(f, "{r}"),
            Self::Txt(r) => write!(f, "{r}"),
            Self::Rp(r) => write!(f, "{r}"),
            Self::Afsdb(r) => write!(f, "{r}"),
            Self::Aaaa(r) => write!(f, "{r}"),
            Self::Srv(r) => write!(f, "{r}"),
            Self::Naptr(r) => write!(f, "{r}"),
            Self::Cert(r) => write!(f, "{r}"),
            Self::Opt(r) => write!(f, "{r}"),
            Self::Ds(r) => write!(f, "{r}"),
            Self::Sshfp(r) => write!(f, "{r}"),
            Self::Rrsig(r) => write!(f, "{r}"),
            Self::Nsec(r) => write!(f, "{r}"),
            Self::Dnskey(r) => write!(f, "{r}"),
            Self::Nsec3(r) => write!(f, "{r}"),
            Self::Nsec3param(r) => write!(f, "{r}"),
            Self::Tlsa(r) => write!(f, "{r}"),
            Self::Spf(r) => write!(f, "{r}"),
            Self::Uri(r) => write!(f, "{r}"),
            Self::Caa(r) => write!(f, "{r}"),
            Self::Unknown(r) => write!(f, "{r}"),
        }
    }
}

/// The fixed preamble following NAME in every resource record.
///
/// For OPT records `rclass` and `ttl` don't mean "class" and "TTL" at all
/// (see [`OptRecord`]); they're kept here as the raw wire values regardless.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceRecordInfo {
    pub rtype: u16,
    pub rclass: u16,
    pub ttl: u32,
    pub rdlength: u16,
}

/// A complete resource record: name, preamble, and parsed RDATA.
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceRecord {
    pub name: DomainName,
    pub info: ResourceRecordInfo,
    pub data: Record,
}

impl ResourceRecord {
    /// Reads one resource record. In [`DecodeMode::Strict`], any RDATA
    /// decode failure or RDLENGTH mismatch aborts with that error. In
    /// [`DecodeMode::Lenient`], the same failures downgrade this record to
    /// [`Record::Unknown`] and the cursor is force-advanced past the
    /// record's declared RDATA, so the rest of the message can still be
    /// parsed.
    pub fn read(reader: &mut DatagramReader<'_>, mode: DecodeMode) -> Result<Self, DecodeError> {
        let name = DomainName::read(reader)?;
        let rtype = reader.read_u16_be()?;
        let rclass = reader.read_u16_be()?;
        let ttl = reader.read_u32_be()?;
        let rdlength = reader.read_u16_be()?;
        let info = ResourceRecordInfo { rtype, rclass, ttl, rdlength };

        let rdata_start = reader.position();
        let peek_len = usize::from(rdlength).min(reader.remaining());
        let raw_rdata = reader.peek_bytes(peek_len).unwrap_or_default().to_vec();

        let outcome = Record::decode(reader, rtype, rclass, ttl, rdlength)
            .and_then(|data| {
                reader.sanitize(rdata_start.saturating_add(rdlength), rdlength)?;
                Ok(data)
            });

        match (outcome, mode) {
            (Ok(data), _) => Ok(Self { name, info, data }),
            (Err(e), DecodeMode::Strict) => Err(e),
            (Err(e), DecodeMode::Lenient) => {
                log::warn!("lenient mode: downgrading rtype {rtype} record to Unknown after {e}");
                reader.force_advance_to(rdata_start.saturating_add(rdlength));
                let data = Record::Unknown(UnknownRecord { rtype, raw: Opaque(raw_rdata) });
                Ok(Self { name, info, data })
            }
        }
    }
}

impl fmt::Display for ResourceRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} IN TYPE{} {}", self.name, self.info.ttl, self.info.rtype, self.data)
    }
}
