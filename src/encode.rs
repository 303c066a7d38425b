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

//! Implementation of encoding of domain name lists.

use crate::error::LabelTooLongError;
use crate::MAX_LABEL_LEN;

////////////////////////////////////////////////////////////////////////
// ENCODING OF DOMAIN NAME LISTS                                      //
////////////////////////////////////////////////////////////////////////

/// Encodes a list of domain names into one buffer of records.
///
/// Each name is split on `.` and written as length-prefixed labels
/// followed by a terminator octet; the empty name is the root and
/// emits the terminator alone. Iteration over a name's labels stops at
/// the first empty label, so a trailing dot is equivalent to none.
/// Every name is written out in full, in input order; no pointers are
/// emitted, so the output is always valid input for
/// [`decode`](crate::decode()).
///
/// A label longer than 63 octets cannot be represented in the 6-bit
/// length field, and fails the whole call with an error naming the
/// label.
pub fn encode<S>(names: &[S]) -> Result<Vec<u8>, LabelTooLongError>
where
    S: AsRef<str>,
{
    let mut octets =
        Vec::with_capacity(names.iter().map(|name| name.as_ref().len() + 2).sum());
    for name in names {
        encode_name(&mut octets, name.as_ref())?;
    }
    Ok(octets)
}

/// Appends the record for a single name to `octets`.
fn encode_name(octets: &mut Vec<u8>, name: &str) -> Result<(), LabelTooLongError> {
    for label in name.split('.') {
        if label.is_empty() {
            break;
        }
        if label.len() > MAX_LABEL_LEN {
            return Err(LabelTooLongError::new(label));
        }
        octets.push(label.len() as u8);
        octets.extend_from_slice(label.as_bytes());
    }
    octets.push(0);
    Ok(())
}

////////////////////////////////////////////////////////////////////////
// TESTS                                                              //
////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::decode;

    #[test]
    fn encode_accepts_a_single_name() {
        assert_eq!(encode(&["A"]).unwrap(), b"\x01A\x00");
    }

    #[test]
    fn encode_writes_labels_in_order() {
        assert_eq!(
            encode(&["A.B.CITS.BR"]).unwrap(),
            b"\x01A\x01B\x04CITS\x02BR\x00",
        );
    }

    #[test]
    fn encode_accepts_the_root() {
        assert_eq!(encode(&[""]).unwrap(), b"\x00");
    }

    #[test]
    fn encode_concatenates_names() {
        assert_eq!(
            encode(&["A.B", "C.D"]).unwrap(),
            b"\x01A\x01B\x00\x01C\x01D\x00",
        );
    }

    #[test]
    fn encode_treats_a_trailing_dot_as_the_terminator() {
        assert_eq!(encode(&["A."]).unwrap(), encode(&["A"]).unwrap());
    }

    #[test]
    fn encode_accepts_a_longest_label() {
        let label = "x".repeat(MAX_LABEL_LEN);
        let octets = encode(&[&label]).unwrap();
        assert_eq!(octets[0], MAX_LABEL_LEN as u8);
        assert_eq!(decode(&octets).unwrap(), [label]);
    }

    #[test]
    fn encode_rejects_a_long_label() {
        let label = "x".repeat(MAX_LABEL_LEN + 1);
        let name = format!("a.{}.test", label);
        let err = encode(&[name]).unwrap_err();
        assert_eq!(err.label(), label);
    }

    #[test]
    fn round_trip_reproduces_the_rfc_names() {
        let names = ["F.ISI.ARPA", "FOO.F.ISI.ARPA", "ARPA", ""];
        let octets = encode(&names).unwrap();
        assert_eq!(decode(&octets).unwrap(), names);
    }

    #[test]
    fn round_trip_survives_random_names() {
        fastrand::seed(0x1035_4141);
        for _ in 0..256 {
            let names: Vec<String> = (0..fastrand::usize(0..8))
                .map(|_| {
                    (0..fastrand::usize(0..5))
                        .map(|_| random_label())
                        .collect::<Vec<_>>()
                        .join(".")
                })
                .collect();
            let octets = encode(&names).unwrap();
            assert_eq!(decode(&octets).unwrap(), names);
        }
    }

    fn random_label() -> String {
        (0..fastrand::usize(1..=MAX_LABEL_LEN))
            .map(|_| fastrand::alphanumeric())
            .collect()
    }
}
