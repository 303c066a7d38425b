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

//! Implementation of the error types reported by the decoder and the
//! encoder.

use std::fmt;

use crate::MAX_LABEL_LEN;

/// An error type used to report malformed compressed data while
/// decoding.
///
/// Decoding is all-or-nothing: the first violation anywhere in the
/// buffer aborts the whole call, and this value is all that is
/// returned. The variants record the reason for diagnostic purposes;
/// callers that do not care can treat the type as opaque.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum MalformedDataError {
    /// The data ended where a label, a pointer octet, or a record
    /// terminator was required.
    UnexpectedEnd,

    /// A label octet carried one of the reserved leading-bit patterns
    /// `10` or `01`.
    ReservedLabelType,

    /// A pointer did not reference an offset strictly before the start
    /// of the record being decoded.
    InvalidPointer,

    /// A pointer chain took more hops than the buffer has octets, which
    /// only a cycle can do.
    PointerLoop,

    /// A label's content cannot be represented in the decoded string
    /// because it is not valid UTF-8.
    LabelNotUtf8,
}

impl fmt::Display for MalformedDataError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Self::UnexpectedEnd => f.write_str("unexpected end of compressed data"),
            Self::ReservedLabelType => f.write_str("reserved label type"),
            Self::InvalidPointer => f.write_str("pointer does not point to a prior record"),
            Self::PointerLoop => f.write_str("pointer chain does not terminate"),
            Self::LabelNotUtf8 => f.write_str("label content is not valid UTF-8"),
        }
    }
}

impl std::error::Error for MalformedDataError {}

/// An error type used to report a label that does not fit in the 6-bit
/// length field while encoding.
///
/// The offending label is carried along so that callers can report
/// which part of which name was rejected.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct LabelTooLongError {
    label: String,
}

impl LabelTooLongError {
    pub(crate) fn new(label: &str) -> Self {
        Self {
            label: label.to_owned(),
        }
    }

    /// Returns the label that was too long to encode.
    pub fn label(&self) -> &str {
        &self.label
    }
}

impl fmt::Display for LabelTooLongError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "label \"{}\" is longer than {} octets",
            self.label, MAX_LABEL_LEN,
        )
    }
}

impl std::error::Error for LabelTooLongError {}
