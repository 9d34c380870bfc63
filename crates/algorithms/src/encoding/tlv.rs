//! BER-TLV parsing and DER-style serialization
//!
//! Tags are kept as the big-endian integer of their identifier octets, so
//! `7F 49` is the tag `0x7F49`. Bit 6 of the first identifier octet marks a
//! constructed element whose value is itself a sequence of TLVs.

use eccard_params::tags;

use super::ObjectIdentifier;
use crate::error::{Error, Result};

/// Maximum nesting depth accepted by the parser
pub const MAX_DEPTH: usize = 32;

const CONSTRUCTED_BIT: u8 = 0x20;
const HIGH_TAG_NUMBER: u8 = 0x1F;

/// A single tag-length-value element
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tlv {
    tag: u32,
    value: Value,
}

/// The value of a TLV element
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Value {
    /// Raw value octets
    Primitive(Vec<u8>),
    /// Nested elements, in encounter order
    Constructed(Vec<Tlv>),
}

impl Tlv {
    /// A primitive element carrying `value`
    pub fn primitive(tag: u32, value: impl Into<Vec<u8>>) -> Self {
        Tlv {
            tag,
            value: Value::Primitive(value.into()),
        }
    }

    /// A constructed element wrapping `children`
    pub fn constructed(tag: u32, children: Vec<Tlv>) -> Self {
        Tlv {
            tag,
            value: Value::Constructed(children),
        }
    }

    /// The tag of this element
    pub fn tag(&self) -> u32 {
        self.tag
    }

    /// The value of this element
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// A universal OBJECT IDENTIFIER element
    pub fn object_identifier(oid: &ObjectIdentifier) -> Self {
        Tlv::primitive(tags::OBJECT_IDENTIFIER, oid.as_bytes())
    }

    /// Fail unless this element carries `tag`
    pub fn expect_tag(&self, tag: u32, context: &'static str) -> Result<&Self> {
        if self.tag != tag {
            return Err(Error::encoding(
                context,
                format!("unexpected tag {:02X}, expected {:02X}", self.tag, tag),
            ));
        }
        Ok(self)
    }

    /// Decode an OBJECT IDENTIFIER element
    pub fn to_object_identifier(&self) -> Result<ObjectIdentifier> {
        let bytes = self
            .expect_tag(tags::OBJECT_IDENTIFIER, "object identifier")?
            .bytes()?;
        Ok(ObjectIdentifier::from_bytes(bytes)?)
    }

    /// Value octets of a primitive element
    pub fn bytes(&self) -> Result<&[u8]> {
        match &self.value {
            Value::Primitive(bytes) => Ok(bytes),
            Value::Constructed(_) => Err(Error::encoding("TLV", "expected primitive element")),
        }
    }

    /// Children of a constructed element
    pub fn children(&self) -> Result<&[Tlv]> {
        match &self.value {
            Value::Constructed(children) => Ok(children),
            Value::Primitive(_) => Err(Error::encoding("TLV", "expected constructed element")),
        }
    }

    /// First direct child carrying `tag`
    pub fn find(&self, tag: u32) -> Option<&Tlv> {
        match &self.value {
            Value::Constructed(children) => children.iter().find(|child| child.tag == tag),
            Value::Primitive(_) => None,
        }
    }

    /// First direct child carrying `tag`, or a `NoSuchElement` error
    pub fn require(&self, tag: u32) -> Result<&Tlv> {
        self.find(tag)
            .ok_or_else(|| Error::missing("TLV", format!("tag {:02X} not found", tag)))
    }

    /// Parse exactly one element spanning the whole input
    pub fn from_bytes(input: &[u8]) -> Result<Self> {
        let (tlv, rest) = parse_element(input, 0)?;
        if !rest.is_empty() {
            return Err(Error::encoding("TLV", "trailing data after element"));
        }
        Ok(tlv)
    }

    /// Serialize with definite, minimal lengths
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::new();
        self.encode_into(&mut out);
        out
    }

    /// Append the serialization of this element to `out`
    pub fn encode_into(&self, out: &mut Vec<u8>) {
        encode_tag(self.tag, out);
        match &self.value {
            Value::Primitive(bytes) => {
                encode_length(bytes.len(), out);
                out.extend_from_slice(bytes);
            }
            Value::Constructed(children) => {
                let mut body = Vec::new();
                for child in children {
                    child.encode_into(&mut body);
                }
                encode_length(body.len(), out);
                out.extend_from_slice(&body);
            }
        }
    }
}

fn parse_sequence(mut input: &[u8], depth: usize) -> Result<Vec<Tlv>> {
    let mut items = Vec::new();
    while !input.is_empty() {
        let (tlv, rest) = parse_element(input, depth)?;
        items.push(tlv);
        input = rest;
    }
    Ok(items)
}

fn parse_element(input: &[u8], depth: usize) -> Result<(Tlv, &[u8])> {
    if depth >= MAX_DEPTH {
        return Err(Error::encoding("TLV", "nesting too deep"));
    }

    let (tag, constructed, rest) = parse_tag(input)?;
    let (len, rest) = parse_length(rest)?;
    if rest.len() < len {
        return Err(Error::encoding("TLV", "value extends past end of input"));
    }
    let (body, rest) = rest.split_at(len);

    let value = if constructed {
        Value::Constructed(parse_sequence(body, depth + 1)?)
    } else {
        Value::Primitive(body.to_vec())
    };
    Ok((Tlv { tag, value }, rest))
}

fn parse_tag(input: &[u8]) -> Result<(u32, bool, &[u8])> {
    let (&first, mut rest) = input
        .split_first()
        .ok_or_else(|| Error::encoding("TLV", "missing tag"))?;
    let constructed = first & CONSTRUCTED_BIT != 0;
    let mut tag = u32::from(first);

    if first & HIGH_TAG_NUMBER == HIGH_TAG_NUMBER {
        let mut octets = 1;
        loop {
            let (&next, tail) = rest
                .split_first()
                .ok_or_else(|| Error::encoding("TLV", "truncated tag"))?;
            octets += 1;
            if octets > 4 {
                return Err(Error::encoding("TLV", "tag too long"));
            }
            tag = (tag << 8) | u32::from(next);
            rest = tail;
            if next & 0x80 == 0 {
                break;
            }
        }
    }
    Ok((tag, constructed, rest))
}

fn parse_length(input: &[u8]) -> Result<(usize, &[u8])> {
    let (&first, rest) = input
        .split_first()
        .ok_or_else(|| Error::encoding("TLV", "missing length"))?;
    if first < 0x80 {
        return Ok((usize::from(first), rest));
    }

    let count = usize::from(first & 0x7f);
    if count == 0 {
        return Err(Error::encoding("TLV", "indefinite length not supported"));
    }
    if count > 4 {
        return Err(Error::encoding("TLV", "length field too long"));
    }
    if rest.len() < count {
        return Err(Error::encoding("TLV", "truncated length"));
    }
    let (octets, rest) = rest.split_at(count);
    let len = octets
        .iter()
        .fold(0usize, |acc, &b| (acc << 8) | usize::from(b));
    Ok((len, rest))
}

fn encode_tag(tag: u32, out: &mut Vec<u8>) {
    let bytes = tag.to_be_bytes();
    let skip = bytes.iter().take(3).take_while(|&&b| b == 0).count();
    out.extend_from_slice(&bytes[skip..]);
}

fn encode_length(len: usize, out: &mut Vec<u8>) {
    if len < 0x80 {
        out.push(len as u8);
        return;
    }
    let bytes = len.to_be_bytes();
    let skip = bytes.iter().take_while(|&&b| b == 0).count();
    out.push(0x80 | (bytes.len() - skip) as u8);
    out.extend_from_slice(&bytes[skip..]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_byte_tag() {
        let tlv = Tlv::from_bytes(&hex::decode("7f4903860100").unwrap()).unwrap();
        assert_eq!(tlv.tag(), 0x7F49);
        assert!(matches!(tlv.value(), Value::Constructed(_)));
        assert_eq!(tlv.require(0x86).unwrap().bytes().unwrap(), &[0x00]);
        assert!(tlv.find(0x92).is_none());
    }

    #[test]
    fn test_long_form_length() {
        let value = vec![0xab; 300];
        let tlv = Tlv::primitive(0x04, value.clone());
        let bytes = tlv.to_bytes();
        assert_eq!(&bytes[..4], &[0x04, 0x82, 0x01, 0x2c]);
        assert_eq!(Tlv::from_bytes(&bytes).unwrap().bytes().unwrap(), &value[..]);

        let short = Tlv::primitive(0x04, vec![0u8; 0x80]).to_bytes();
        assert_eq!(&short[..3], &[0x04, 0x81, 0x80]);
    }

    #[test]
    fn test_non_minimal_length_accepted() {
        // BER allows 81 03 where DER would use 03
        let tlv = Tlv::from_bytes(&[0x04, 0x81, 0x03, 1, 2, 3]).unwrap();
        assert_eq!(tlv.bytes().unwrap(), &[1, 2, 3]);
    }

    #[test]
    fn test_nested_roundtrip_preserves_order() {
        let tlv = Tlv::constructed(
            0xA6,
            vec![
                Tlv::primitive(0x8E, vec![9; 8]),
                Tlv::constructed(0x7F49, vec![Tlv::primitive(0x86, vec![4, 1, 2])]),
                Tlv::primitive(0x86, vec![1]),
            ],
        );
        let parsed = Tlv::from_bytes(&tlv.to_bytes()).unwrap();
        assert_eq!(parsed, tlv);
        let tags: Vec<u32> = parsed.children().unwrap().iter().map(Tlv::tag).collect();
        assert_eq!(tags, vec![0x8E, 0x7F49, 0x86]);
    }

    #[test]
    fn test_object_identifier_element() {
        let p256 = ObjectIdentifier::new_unwrap("1.2.840.10045.3.1.7");
        let tlv = Tlv::object_identifier(&p256);
        assert_eq!(hex::encode(tlv.to_bytes()), "06082a8648ce3d030107");
        assert_eq!(tlv.to_object_identifier().unwrap(), p256);

        let brainpool = Tlv::from_bytes(&hex::decode("06092b2403030208010107").unwrap()).unwrap();
        assert_eq!(
            brainpool.to_object_identifier().unwrap().to_string(),
            "1.3.36.3.3.2.8.1.1.7"
        );
    }

    #[test]
    fn test_object_identifier_rejects_bad_elements() {
        let wrong_tag = Tlv::primitive(0x04, vec![0x2a, 0x86, 0x48]);
        let err = wrong_tag.to_object_identifier().unwrap_err();
        assert_eq!(err.message(), "unexpected tag 04, expected 06");

        // truncated base-128 arc
        assert!(Tlv::primitive(0x06, vec![0x2a, 0x86]).to_object_identifier().is_err());
        assert!(Tlv::primitive(0x06, vec![]).to_object_identifier().is_err());
    }

    #[test]
    fn test_malformed_inputs() {
        assert!(Tlv::from_bytes(&[]).is_err());
        assert!(Tlv::from_bytes(&[0x04]).is_err());
        assert!(Tlv::from_bytes(&[0x04, 0x05, 1, 2]).is_err());
        assert!(Tlv::from_bytes(&[0x04, 0x80]).is_err());
        assert!(Tlv::from_bytes(&[0x04, 0x85, 0, 0, 0, 0, 1]).is_err());
        assert!(Tlv::from_bytes(&[0x7f]).is_err());
        assert!(Tlv::from_bytes(&[0x04, 0x01, 0x00, 0x00]).is_err());
        // constructed element whose content is not a TLV sequence
        assert!(Tlv::from_bytes(&[0x30, 0x01, 0x04]).is_err());
    }

    #[test]
    fn test_depth_limit() {
        let mut bytes = vec![0x04, 0x00];
        for _ in 0..MAX_DEPTH {
            let mut outer = vec![0x30, bytes.len() as u8];
            outer.extend_from_slice(&bytes);
            bytes = outer;
        }
        let err = Tlv::from_bytes(&bytes).unwrap_err();
        assert_eq!(err.message(), "nesting too deep");
    }

    #[test]
    fn test_primitive_accessors() {
        let tlv = Tlv::primitive(0x04, vec![1]);
        assert!(tlv.children().is_err());
        assert!(tlv.require(0x04).is_err());
        let seq = Tlv::constructed(0x30, vec![]);
        assert!(seq.bytes().is_err());
    }
}
