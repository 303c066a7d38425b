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

//! Implementation of decoding of compressed domain name records.

use std::str;

use log::debug;

use crate::error::MalformedDataError;

////////////////////////////////////////////////////////////////////////
// DECODING OF COMPRESSED RECORDS                                     //
////////////////////////////////////////////////////////////////////////

/// Decodes a buffer of compressed domain name records.
///
/// The buffer is scanned left to right from offset 0. Each record
/// encountered contributes one decoded name, in order, until the buffer
/// is exhausted; an empty buffer yields an empty list. Decoding is
/// all-or-nothing: the first structural violation anywhere in the
/// buffer fails the whole call, and no partial list is returned.
pub fn decode(octets: &[u8]) -> Result<Vec<String>, MalformedDataError> {
    let mut names = Vec::new();
    let mut cursor = 0;
    while cursor < octets.len() {
        match decode_record(octets, cursor) {
            Ok((name, len)) => {
                names.push(name);
                cursor += len;
            }
            Err(err) => {
                debug!("rejecting compressed data at offset {}: {}", cursor, err);
                return Err(err);
            }
        }
    }
    Ok(names)
}

/// Decodes the single compressed record starting at index `start` of
/// `octets`. Pointers are followed; offsets given in pointers are
/// treated as indices of `octets`, so the intention is for the entire
/// enclosing buffer to be passed in `octets`. Two things are returned
/// on success:
///
/// * the decoded name; and
/// * the number of contiguous octets the record occupies at `start`.
///   Equivalently, the number of octets to skip after `start` to reach
///   the next record. For a record ending in a pointer, this counts up
///   to and including the two pointer octets, regardless of how much
///   prior data the pointer chain traverses.
pub fn decode_record(
    octets: &[u8],
    start: usize,
) -> Result<(String, usize), MalformedDataError> {
    let mut name = String::new();
    let mut index = start;
    let mut resume = None;
    let mut hops = 0;

    loop {
        let octet = *octets
            .get(index)
            .ok_or(MalformedDataError::UnexpectedEnd)?;
        match octet & 0xc0 {
            0x00 => {
                if octet == 0 {
                    index += 1;
                    break;
                }
                let end = index + 1 + octet as usize;
                // The content must fit, and at minimum a terminator
                // must follow it.
                let next = *octets.get(end).ok_or(MalformedDataError::UnexpectedEnd)?;
                let content = str::from_utf8(&octets[index + 1..end])
                    .map_err(|_| MalformedDataError::LabelNotUtf8)?;
                name.push_str(content);
                if next != 0 {
                    name.push('.');
                }
                index = end;
            }
            0xc0 => {
                let low = *octets
                    .get(index + 1)
                    .ok_or(MalformedDataError::UnexpectedEnd)?;
                let pointer = usize::from(octet & 0x3f) << 8 | usize::from(low);
                if pointer >= start {
                    // According to RFC 1035 § 4.1.4, pointers point to
                    // a *prior* occurrence of a name, so every hop must
                    // land before the record being decoded began.
                    return Err(MalformedDataError::InvalidPointer);
                }
                hops += 1;
                if hops > octets.len() {
                    // Hops may still move forward and backward within
                    // the region before `start`, so a chain can revisit
                    // an offset and never terminate. A terminating
                    // chain cannot take more hops than the buffer has
                    // octets.
                    return Err(MalformedDataError::PointerLoop);
                }
                resume.get_or_insert(index + 2);
                index = pointer;
            }
            _ => return Err(MalformedDataError::ReservedLabelType),
        }
    }

    Ok((name, resume.unwrap_or(index) - start))
}

////////////////////////////////////////////////////////////////////////
// TESTS                                                              //
////////////////////////////////////////////////////////////////////////
