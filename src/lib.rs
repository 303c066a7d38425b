// Copyright 2023 Matthew Ingwersen.
//
// Licensed under the Apache License, Version 2.0 (the "License"); you
// may not use this file except in compliance with the License. You may
// obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or
// implied. See the License for the specific language governing
// permissions and limitations under the License.

//! A codec for the domain name compression scheme of [RFC 1035 § 4.1.4].
//!
//! Compressed data is a sequence of domain name records. Each record is
//! a series of labels, each written as a length octet (at most 63, since
//! the top two bits of the octet are reserved) followed by that many
//! octets of content. A record ends with either the null label or a
//! two-octet pointer whose leading octet has its top two bits set; the
//! remaining 14 bits give the offset of an earlier record whose labels
//! complete the name. The leading-bit patterns `10` and `01` are
//! reserved and never valid. Pointers must point backward, to data
//! before the record in which they appear.
//!
//! [`decode()`] walks a buffer of untrusted compressed data from the
//! beginning and produces one textual domain name per record, rejecting
//! the whole buffer on the first structural violation. [`decode_record`]
//! does the same for a single record at a given offset, for use when the
//! surrounding data is framed by some other format (such as a full DNS
//! message). [`encode()`] performs the reverse transformation, writing
//! every name out in full; it never emits pointers, so its output is
//! always valid input for the decoder.
//!
//! The worked example from the RFC:
//!
//! ```
//! let octets = b"\x01F\x03ISI\x04ARPA\x00\x03FOO\xc0\x00\xc0\x06\x00";
//! let names = dncomp::decode(octets)?;
//! assert_eq!(names, ["F.ISI.ARPA", "FOO.F.ISI.ARPA", "ARPA", ""]);
//! # Ok::<(), dncomp::MalformedDataError>(())
//! ```
//!
//! The root name is rendered as the empty string, and decoded names do
//! not carry a trailing dot.
//!
//! [RFC 1035 § 4.1.4]: https://datatracker.ietf.org/doc/html/rfc1035#section-4.1.4

mod decode;
mod encode;
mod error;

pub use decode::{decode, decode_record};
pub use encode::encode;
pub use error::{LabelTooLongError, MalformedDataError};

/// The maximum length of a label (not including the octet that provides
/// the length).
const MAX_LABEL_LEN: usize = 63;
