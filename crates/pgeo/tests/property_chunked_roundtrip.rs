use pgeo::constants::{PATH_HEADER_LEN, POINT_LEN, POLYGON_HEADER_LEN};
use pgeo::{
    encode_path, encode_polygon, GeoValue, PathDecoder, PathEncoder, PgPath, PgPoint, PgPolygon,
    PolygonDecoder, PolygonEncoder,
};
use pgeo_buffers::{ReadBuf, WriteBuf};
use proptest::prelude::*;
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;

fn finite_f64() -> impl Strategy<Value = f64> {
    prop::num::f64::POSITIVE
        | prop::num::f64::NEGATIVE
        | prop::num::f64::ZERO
        | prop::num::f64::SUBNORMAL
        | prop::num::f64::NORMAL
}

fn point_vec(max: usize) -> impl Strategy<Value = Vec<PgPoint>> {
    prop::collection::vec(
        (finite_f64(), finite_f64()).prop_map(|(x, y)| PgPoint::new(x, y)),
        0..max,
    )
}

fn decode_polygon_in_chunks(wire: &[u8], chunk: usize) -> PgPolygon {
    let mut decoder = PolygonDecoder::new();
    decoder.prepare_read(wire.len());
    let mut buf = ReadBuf::with_capacity(chunk + POINT_LEN);
    let mut offset = 0;
    loop {
        if offset < wire.len() {
            let take = chunk.min(wire.len() - offset);
            assert_eq!(buf.feed(&wire[offset..offset + take]), take);
            offset += take;
        }
        match decoder
            .read(&mut buf)
            .unwrap_or_else(|e| panic!("decode failed: {e}"))
        {
            Some(value) => {
                assert_eq!(offset, wire.len(), "completed before the wire ran out");
                assert_eq!(buf.bytes_left(), 0);
                return value;
            }
            None => assert!(offset < wire.len(), "decoder stalled at offset {offset}"),
        }
    }
}

fn decode_path_in_chunks(wire: &[u8], chunk: usize) -> PgPath {
    let mut decoder = PathDecoder::new();
    decoder.prepare_read(wire.len());
    let mut buf = ReadBuf::with_capacity(chunk + POINT_LEN);
    let mut offset = 0;
    loop {
        if offset < wire.len() {
            let take = chunk.min(wire.len() - offset);
            assert_eq!(buf.feed(&wire[offset..offset + take]), take);
            offset += take;
        }
        match decoder
            .read(&mut buf)
            .unwrap_or_else(|e| panic!("decode failed: {e}"))
        {
            Some(value) => {
                assert_eq!(offset, wire.len(), "completed before the wire ran out");
                assert_eq!(buf.bytes_left(), 0);
                return value;
            }
            None => assert!(offset < wire.len(), "decoder stalled at offset {offset}"),
        }
    }
}

proptest! {
    #[test]
    fn polygon_roundtrip_any_chunking(points in point_vec(40), chunk in 1usize..=48) {
        let value = PgPolygon::new(points);
        let wire = encode_polygon(&value);
        prop_assert_eq!(wire.len(), POLYGON_HEADER_LEN + value.len() * POINT_LEN);
        prop_assert_eq!(decode_polygon_in_chunks(&wire, chunk), value);
    }

    #[test]
    fn path_roundtrip_any_chunking(
        points in point_vec(40),
        closed in any::<bool>(),
        chunk in 1usize..=48,
    ) {
        let value = PgPath::new(points, closed);
        let wire = encode_path(&value);
        prop_assert_eq!(wire.len(), PATH_HEADER_LEN + value.len() * POINT_LEN);
        prop_assert_eq!(decode_path_in_chunks(&wire, chunk), value);
    }

    #[test]
    fn polygon_roundtrip_uneven_chunk_plan(
        points in point_vec(24),
        plan in prop::collection::vec(1usize..=33, 0..12),
    ) {
        let value = PgPolygon::new(points);
        let wire = encode_polygon(&value);

        let mut decoder = PolygonDecoder::new();
        decoder.prepare_read(wire.len());
        let mut buf = ReadBuf::with_capacity(wire.len());
        let mut sizes = plan.into_iter();
        let mut offset = 0;
        let decoded = loop {
            if offset < wire.len() {
                let take = sizes.next().unwrap_or(wire.len()).min(wire.len() - offset);
                prop_assert_eq!(buf.feed(&wire[offset..offset + take]), take);
                offset += take;
            }
            if let Some(polygon) = decoder
                .read(&mut buf)
                .unwrap_or_else(|e| panic!("decode failed: {e}"))
            {
                break polygon;
            }
            prop_assert!(offset < wire.len(), "decoder stalled at offset {}", offset);
        };
        prop_assert_eq!(decoded, value);
        prop_assert_eq!(buf.bytes_left(), 0);
    }

    #[test]
    fn declared_length_matches_wire_length(points in point_vec(40)) {
        let polygon = PgPolygon::new(points.clone());
        let polygon_len = PolygonEncoder::validate_and_length(&GeoValue::from(polygon.clone()))
            .unwrap_or_else(|e| panic!("validate failed: {e}"));
        prop_assert_eq!(encode_polygon(&polygon).len(), polygon_len);

        let path = PgPath::new(points, true);
        let path_len = PathEncoder::validate_and_length(&GeoValue::from(path.clone()))
            .unwrap_or_else(|e| panic!("validate failed: {e}"));
        prop_assert_eq!(encode_path(&path).len(), path_len);
    }
}

fn seeds() -> [u64; 16] {
    [
        0x0000_5eed,
        0x00c0_ffee,
        0x0bad_f00d,
        0x1337_beef,
        0x2468_ace0,
        0x3141_5926,
        0x4242_4242,
        0x5eed_c0de,
        0x6006_0660,
        0x7fff_ffff,
        0x8000_0001,
        0x9e37_79b9,
        0xa5a5_a5a5,
        0xbeef_cafe,
        0xdead_10cc,
        0xfeed_face,
    ]
}

fn coordinate(rng: &mut Xoshiro256StarStar) -> f64 {
    (rng.gen::<f64>() - 0.5) * rng.gen_range(1e-6..1e12)
}

#[test]
fn seeded_polygon_chunking_stress() {
    for seed in seeds() {
        let mut rng = Xoshiro256StarStar::seed_from_u64(seed);
        for round in 0..6 {
            let count = rng.gen_range(0..120);
            let value = PgPolygon::new(
                (0..count)
                    .map(|_| PgPoint::new(coordinate(&mut rng), coordinate(&mut rng)))
                    .collect(),
            );
            let wire = encode_polygon(&value);

            let capacity = rng.gen_range(POINT_LEN..=96);
            let mut buf = ReadBuf::with_capacity(capacity);
            let mut decoder = PolygonDecoder::new();
            decoder.prepare_read(wire.len());

            let mut offset = 0;
            let mut reads = 0;
            let decoded = loop {
                reads += 1;
                assert!(
                    reads <= wire.len() + 2,
                    "seed={seed} round={round}: decoder stalled"
                );
                if offset < wire.len() {
                    let want = rng.gen_range(1..=48).min(wire.len() - offset);
                    offset += buf.feed(&wire[offset..offset + want]);
                }
                if let Some(polygon) = decoder
                    .read(&mut buf)
                    .unwrap_or_else(|e| panic!("seed={seed} round={round}: decode failed: {e}"))
                {
                    break polygon;
                }
            };
            assert_eq!(decoded, value, "seed={seed} round={round}");
            assert_eq!(buf.bytes_left(), 0, "seed={seed} round={round}");
        }
    }
}

#[test]
fn seeded_path_chunking_stress() {
    for seed in seeds() {
        let mut rng = Xoshiro256StarStar::seed_from_u64(seed);
        for round in 0..6 {
            let count = rng.gen_range(0..120);
            let closed = rng.gen::<bool>();
            let value = PgPath::new(
                (0..count)
                    .map(|_| PgPoint::new(coordinate(&mut rng), coordinate(&mut rng)))
                    .collect(),
                closed,
            );
            let wire = encode_path(&value);

            let capacity = rng.gen_range(POINT_LEN..=96);
            let mut buf = ReadBuf::with_capacity(capacity);
            let mut decoder = PathDecoder::new();
            decoder.prepare_read(wire.len());

            let mut offset = 0;
            let mut reads = 0;
            let decoded = loop {
                reads += 1;
                assert!(
                    reads <= wire.len() + 2,
                    "seed={seed} round={round}: decoder stalled"
                );
                if offset < wire.len() {
                    let want = rng.gen_range(1..=48).min(wire.len() - offset);
                    offset += buf.feed(&wire[offset..offset + want]);
                }
                if let Some(path) = decoder
                    .read(&mut buf)
                    .unwrap_or_else(|e| panic!("seed={seed} round={round}: decode failed: {e}"))
                {
                    break path;
                }
            };
            assert_eq!(decoded, value, "seed={seed} round={round}");
            assert_eq!(buf.bytes_left(), 0, "seed={seed} round={round}");
        }
    }
}

#[test]
fn seeded_encode_chunking_stress() {
    for seed in seeds() {
        let mut rng = Xoshiro256StarStar::seed_from_u64(seed);
        for round in 0..6 {
            let count = rng.gen_range(0..120);
            let value = PgPolygon::new(
                (0..count)
                    .map(|_| PgPoint::new(coordinate(&mut rng), coordinate(&mut rng)))
                    .collect(),
            );
            let one_shot = encode_polygon(&value);

            let capacity = rng.gen_range(POINT_LEN..=80);
            let mut encoder = PolygonEncoder::new();
            encoder.prepare_write(value.clone());
            let mut buf = WriteBuf::with_capacity(capacity);
            let mut wire = Vec::new();
            let mut writes = 0;
            loop {
                writes += 1;
                assert!(
                    writes <= one_shot.len() + 1,
                    "seed={seed} round={round}: encoder stalled"
                );
                let done = encoder.write(&mut buf);
                wire.extend_from_slice(&buf.flush());
                if done {
                    break;
                }
            }
            assert_eq!(wire, one_shot, "seed={seed} round={round}");
        }
    }
}
