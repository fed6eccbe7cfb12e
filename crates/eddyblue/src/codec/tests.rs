//! Unit tests for the attribute value codecs

use super::*;

#[test]
fn test_byte_codec_widths() {
    let one = ByteCodec::new(ByteWidth::One);
    assert_eq!(one.encode(0x7F).unwrap(), vec![0x7F]);
    assert_eq!(one.decode(&[0xFF]).unwrap(), 0xFF);

    // Little-endian on the wire
    let two = ByteCodec::new(ByteWidth::Two);
    assert_eq!(two.encode(1000).unwrap(), vec![0xE8, 0x03]);
    assert_eq!(two.decode(&[0xE8, 0x03]).unwrap(), 1000);

    let four = ByteCodec::new(ByteWidth::Four);
    assert_eq!(four.encode(0x0102_0304).unwrap(), vec![0x04, 0x03, 0x02, 0x01]);
    assert_eq!(four.decode(&[0x04, 0x03, 0x02, 0x01]).unwrap(), 0x0102_0304);
}

#[test]
fn test_byte_codec_rejects_wrong_length() {
    let two = ByteCodec::new(ByteWidth::Two);
    assert!(matches!(
        two.decode(&[0x01]),
        Err(CodecError::InvalidLength { expected: 2, actual: 1 })
    ));
    assert!(matches!(
        two.decode(&[0x01, 0x02, 0x03]),
        Err(CodecError::InvalidLength { expected: 2, actual: 3 })
    ));
}

#[test]
fn test_byte_codec_rejects_oversized_value() {
    let one = ByteCodec::new(ByteWidth::One);
    assert!(matches!(
        one.encode(256),
        Err(CodecError::ValueOutOfRange { value: 256, width: 1 })
    ));
}

#[test]
fn test_array_codec_is_twos_complement() {
    let levels = [-100i8, -30, 0, 20];
    let bytes = ArrayCodec.encode(&levels);
    assert_eq!(bytes, vec![0x9C, 0xE2, 0x00, 0x14]);
    assert_eq!(ArrayCodec.decode(&bytes), levels.to_vec());
    assert!(ArrayCodec.decode(&[]).is_empty());
}

#[test]
fn test_url_codec_round_trip() {
    let urls = [
        "http://google.com",
        "https://example.org/path",
        "http://www.example.net/a?b=c",
        "https://www.gov.uk/",
        "https://goo.gl/S6zT6P",
        "http://physical-web.info",
    ];

    for url in urls {
        let encoded = UrlCodec.encode(url).unwrap();
        assert_eq!(UrlCodec.decode(&encoded).unwrap(), url, "round trip of {}", url);
    }
}

#[test]
fn test_codec_dispatch() {
    let codec = Codec::byte(ByteWidth::Two);
    let value = codec.decode(&[0x0A, 0x00]).unwrap();
    assert_eq!(value, AttributeValue::Unsigned(10));
    assert_eq!(codec.encode(&value).unwrap(), vec![0x0A, 0x00]);

    let codec = Codec::Url(UrlCodec);
    let value = codec.decode(&[0x02, b'a', 0x07]).unwrap();
    assert_eq!(value.as_url(), Some("http://a.com"));

    let codec = Codec::Array(ArrayCodec);
    assert!(matches!(
        codec.encode(&AttributeValue::Unsigned(1)),
        Err(CodecError::TypeMismatch(_))
    ));

    assert_eq!(
        Codec::Raw.decode(&[1, 2]).unwrap(),
        AttributeValue::Bytes(vec![1, 2])
    );
}
