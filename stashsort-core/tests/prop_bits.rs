//! Property tests for in-place bit field reads and writes.

use proptest::prelude::*;
use stashsort_core::bits::{read_bits, write_bits, BitCursor, BitError, MAX_WIDTH};

fn mask(width: usize) -> u32 {
    if width == 32 {
        u32::MAX
    } else {
        (1u32 << width) - 1
    }
}

proptest! {
    #[test]
    fn prop_written_field_reads_back(
        ref data in prop::collection::vec(any::<u8>(), 5..64),
        offset_seed in any::<usize>(),
        width in 1usize..=MAX_WIDTH,
        raw_value in any::<u32>(),
    ) {
        let len_bits = data.len() * 8;
        prop_assume!(width <= len_bits);
        let offset = offset_seed % (len_bits - width + 1);
        let value = raw_value & mask(width);

        let mut patched = data.clone();
        write_bits(&mut patched, offset, width, value).unwrap();
        prop_assert_eq!(read_bits(&patched, offset, width).unwrap(), value);
        prop_assert_eq!(patched.len(), data.len());
    }

    #[test]
    fn prop_write_leaves_other_bits_alone(
        ref data in prop::collection::vec(any::<u8>(), 5..64),
        offset_seed in any::<usize>(),
        width in 1usize..=MAX_WIDTH,
        raw_value in any::<u32>(),
    ) {
        let len_bits = data.len() * 8;
        let offset = offset_seed % (len_bits - width + 1);
        let value = raw_value & mask(width);

        let mut patched = data.clone();
        write_bits(&mut patched, offset, width, value).unwrap();
        for bit in (0..len_bits).filter(|b| *b < offset || *b >= offset + width) {
            prop_assert_eq!(
                read_bits(&patched, bit, 1).unwrap(),
                read_bits(data, bit, 1).unwrap()
            );
        }
    }

    #[test]
    fn prop_oversized_values_are_rejected(
        width in 1usize..MAX_WIDTH,
        extra in 1u32..=u32::MAX,
    ) {
        let value = mask(width).saturating_add(extra);
        prop_assume!(value > mask(width));
        let mut data = vec![0u8; 8];
        let err = write_bits(&mut data, 0, width, value).unwrap_err();
        let is_overflow = matches!(err, BitError::ValueOverflow { .. });
        prop_assert!(is_overflow);
        prop_assert_eq!(data, vec![0u8; 8]);
    }

    #[test]
    fn prop_reads_past_the_end_fail(
        ref data in prop::collection::vec(any::<u8>(), 0..16),
        width in 1usize..=MAX_WIDTH,
        past in 1usize..16,
    ) {
        let offset = (data.len() * 8 + past).saturating_sub(width);
        prop_assume!(offset + width > data.len() * 8);
        let is_out_of_range = matches!(
            read_bits(data, offset, width),
            Err(BitError::OutOfRange { .. })
        );
        prop_assert!(is_out_of_range);
    }

    #[test]
    fn prop_cursor_walks_fields_in_order(
        ref fields in prop::collection::vec((1usize..=MAX_WIDTH, any::<u32>()), 1..20),
    ) {
        let total: usize = fields.iter().map(|(w, _)| w).sum();
        let mut data = vec![0u8; (total + 7) / 8];
        let mut offset = 0;
        for (width, raw) in fields {
            write_bits(&mut data, offset, *width, raw & mask(*width)).unwrap();
            offset += width;
        }

        let mut cursor = BitCursor::new(&data);
        for (width, raw) in fields {
            prop_assert_eq!(cursor.read(*width).unwrap(), raw & mask(*width));
        }
        prop_assert_eq!(cursor.position(), total);
    }
}
