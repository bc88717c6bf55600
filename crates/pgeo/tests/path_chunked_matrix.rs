use pgeo::constants::{PATH_HEADER_LEN, POINT_LEN};
use pgeo::{decode_path, encode_path, PathDecoder, PathEncoder, PgPath, PgPoint};
use pgeo_buffers::{ReadBuf, WriteBuf};

fn zigzag(closed: bool) -> PgPath {
    PgPath::new(
        vec![PgPoint::new(-3.5, 7.0), PgPoint::new(11.0, -0.25)],
        closed,
    )
}

fn read(decoder: &mut PathDecoder, buf: &mut ReadBuf) -> Option<PgPath> {
    decoder
        .read(buf)
        .unwrap_or_else(|e| panic!("decode failed: {e}"))
}

#[test]
fn path_decodes_across_uneven_feed_chunks() {
    let value = zigzag(true);
    let wire = encode_path(&value);
    assert_eq!(wire.len(), 37);

    let mut decoder = PathDecoder::new();
    decoder.prepare_read(wire.len());
    let mut buf = ReadBuf::with_capacity(64);

    let chunks = [3usize, 9, 5, 20];
    let mut offset = 0;
    let mut reads = Vec::new();
    for chunk in chunks {
        assert_eq!(buf.feed(&wire[offset..offset + chunk]), chunk);
        offset += chunk;
        reads.push(read(&mut decoder, &mut buf));
    }

    assert_eq!(reads[0], None);
    assert_eq!(reads[1], None);
    assert_eq!(reads[2], None);
    assert_eq!(reads[3], Some(value));
    assert_eq!(buf.bytes_left(), 0);
}

#[test]
fn path_header_never_splits() {
    // Four bytes cover the closed flag and most of the count, yet a read
    // must leave all of them in place: flag and count commit together.
    let wire = encode_path(&zigzag(false));

    let mut decoder = PathDecoder::new();
    decoder.prepare_read(wire.len());
    let mut buf = ReadBuf::with_capacity(64);

    for fed in 1..PATH_HEADER_LEN {
        assert_eq!(buf.feed(&wire[fed - 1..fed]), 1);
        assert_eq!(read(&mut decoder, &mut buf), None);
        assert_eq!(buf.bytes_left(), fed, "fed={fed}: header partly consumed");
    }

    assert_eq!(
        buf.feed(&wire[PATH_HEADER_LEN - 1..PATH_HEADER_LEN]),
        1
    );
    assert_eq!(read(&mut decoder, &mut buf), None);
    assert_eq!(buf.bytes_left(), 0, "whole header should be consumed at once");
}

#[test]
fn path_split_at_every_byte_boundary() {
    let value = zigzag(true);
    let wire = encode_path(&value);

    for split in 1..wire.len() {
        let mut decoder = PathDecoder::new();
        decoder.prepare_read(wire.len());
        let mut buf = ReadBuf::with_capacity(wire.len());

        assert_eq!(buf.feed(&wire[..split]), split);
        assert_eq!(
            read(&mut decoder, &mut buf),
            None,
            "split={split}: completed early"
        );

        let consumed = split - buf.bytes_left();
        if split < PATH_HEADER_LEN {
            assert_eq!(consumed, 0, "split={split}");
        } else {
            let whole_points = (split - PATH_HEADER_LEN) / POINT_LEN;
            assert_eq!(
                consumed,
                PATH_HEADER_LEN + whole_points * POINT_LEN,
                "split={split}"
            );
            assert_eq!(decoder.points_committed(), whole_points, "split={split}");
        }

        assert_eq!(buf.feed(&wire[split..]), wire.len() - split);
        assert_eq!(
            read(&mut decoder, &mut buf),
            Some(value.clone()),
            "split={split}"
        );
        assert_eq!(buf.bytes_left(), 0, "split={split}");
    }
}

#[test]
fn path_flag_survives_chunked_encode() {
    for closed in [false, true] {
        let value = zigzag(closed);
        let one_shot = encode_path(&value);

        let mut encoder = PathEncoder::new();
        encoder.prepare_write(value.clone());
        let mut buf = WriteBuf::with_capacity(PATH_HEADER_LEN + POINT_LEN);
        let mut wire = Vec::new();
        loop {
            let done = encoder.write(&mut buf);
            wire.extend_from_slice(&buf.flush());
            if done {
                break;
            }
        }

        assert_eq!(wire, one_shot, "closed={closed}");
        assert_eq!(wire[0], closed as u8, "closed={closed}");
        assert_eq!(decode_path(&wire), Ok(value), "closed={closed}");
    }
}

#[test]
fn path_consecutive_values_through_one_buffer() {
    let first = zigzag(true);
    let second = PgPath::new(vec![PgPoint::new(9.0, 9.0)], false);
    let mut stream = encode_path(&first);
    stream.extend_from_slice(&encode_path(&second));

    let mut buf = ReadBuf::from_bytes(&stream);
    let mut decoder = PathDecoder::new();

    decoder.prepare_read(PATH_HEADER_LEN + 2 * POINT_LEN);
    assert_eq!(read(&mut decoder, &mut buf), Some(first));
    assert_eq!(buf.bytes_left(), PATH_HEADER_LEN + POINT_LEN);

    decoder.prepare_read(PATH_HEADER_LEN + POINT_LEN);
    assert_eq!(read(&mut decoder, &mut buf), Some(second));
    assert_eq!(buf.bytes_left(), 0);
}
