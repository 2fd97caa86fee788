#![warn(deprecated_in_future)]
#![warn(future_incompatible)]
#![warn(missing_copy_implementations)]
#![warn(missing_docs)]
#![warn(nonstandard_style)]
#![warn(rust_2018_compatibility)]
#![warn(rust_2018_idioms)]
#![warn(single_use_lifetimes)]
#![warn(trivial_casts, trivial_numeric_casts)]
#![warn(unused)]

#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::len_without_is_empty)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::non_ascii_literal)]
#![allow(clippy::redundant_else)]
#![allow(clippy::struct_excessive_bools)]
#![allow(clippy::upper_case_acronyms)]
#![allow(clippy::wildcard_imports)]

#![deny(clippy::cast_possible_truncation)]
#![deny(clippy::cast_lossless)]
#![deny(clippy::cast_possible_wrap)]
#![deny(clippy::cast_sign_loss)]
#![deny(unsafe_code)]


//! A DNS wire-format codec: parses inbound response datagrams into a
//! structured [`DnsMessage`], and encodes outbound queries back into
//! bytes. Socket I/O, resolver policy (retry, fallback, caching), and
//! DNSSEC signature validation all live outside this crate — it is a
//! pure function from bytes to a message and back.


mod error;
pub use self::error::DecodeError;

mod reader;
pub use self::reader::DatagramReader;

mod writer;
pub use self::writer::DatagramWriter;

mod string_escape;

mod util;
pub use self::util::Opaque;

mod name;
pub use self::name::DomainName;

mod header;
pub use self::header::{Header, Opcode, Rcode};

mod question;
pub use self::question::Question;

pub mod record;

mod message;
pub use self::message::{decode_message, encode_query, DecodeMode, DnsMessage, EdnsRequest};
