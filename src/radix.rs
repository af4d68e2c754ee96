//! LSD radix sort for native integers.
//!
//! Every pass is a stable counting sort over one group of bits, starting with the least
//! significant group. The group width decides the number of buckets (`2^width`) and the number of
//! passes (`ceil(bits / width)`, so 8, 4, 2 and 1 passes for a 32-bit integer).

use std::fmt;

use log::trace;

use crate::error::{Error, Result};

/// Bucket tables never grow beyond this many entries. A 32-bit group whose digits span more than
/// this is split into two 16-bit passes, which yields the same stable order.
const MAX_BUCKETS: usize = 1 << 16;

/// Number of bits processed per counting pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GroupWidth {
    #[default]
    Four,
    Eight,
    Sixteen,
    ThirtyTwo,
}

impl GroupWidth {
    pub const ALL: [GroupWidth; 4] = [
        GroupWidth::Four,
        GroupWidth::Eight,
        GroupWidth::Sixteen,
        GroupWidth::ThirtyTwo,
    ];

    pub const fn bits(self) -> u32 {
        match self {
            GroupWidth::Four => 4,
            GroupWidth::Eight => 8,
            GroupWidth::Sixteen => 16,
            GroupWidth::ThirtyTwo => 32,
        }
    }

    /// Number of distinct digit values of one group, `2^width`.
    pub const fn bucket_count(self) -> u64 {
        1 << self.bits()
    }

    /// Number of counting passes needed to cover a key of `key_bits` bits.
    pub const fn passes(self, key_bits: u32) -> u32 {
        key_bits.div_ceil(self.bits())
    }
}

impl TryFrom<u32> for GroupWidth {
    type Error = Error;

    fn try_from(bits: u32) -> Result<Self> {
        match bits {
            4 => Ok(GroupWidth::Four),
            8 => Ok(GroupWidth::Eight),
            16 => Ok(GroupWidth::Sixteen),
            32 => Ok(GroupWidth::ThirtyTwo),
            other => Err(Error::InvalidGroupWidth(other)),
        }
    }
}

impl fmt::Display for GroupWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.bits())
    }
}

/// Integers that can be radix sorted.
///
/// `radix_key` maps the value to an unsigned key with the same order, signed types flip their sign
/// bit so negative values sort before positive ones.
pub trait RadixKey: Copy {
    const BITS: u32;

    fn radix_key(self) -> u64;
}

macro_rules! impl_radix_key_unsigned {
    ($($t:ty),*) => {
        $(
            impl RadixKey for $t {
                const BITS: u32 = <$t>::BITS;

                #[inline(always)]
                fn radix_key(self) -> u64 {
                    self as u64
                }
            }
        )*
    };
}

macro_rules! impl_radix_key_signed {
    ($($t:ty => $u:ty),*) => {
        $(
            impl RadixKey for $t {
                const BITS: u32 = <$t>::BITS;

                #[inline(always)]
                fn radix_key(self) -> u64 {
                    ((self as $u) ^ (1 << (<$t>::BITS - 1))) as u64
                }
            }
        )*
    };
}

impl_radix_key_unsigned!(u8, u16, u32, u64, usize);
impl_radix_key_signed!(i8 => u8, i16 => u16, i32 => u32, i64 => u64, isize => usize);

/// Sorts the slice with the default group width of 4 bits.
///
/// This sort is stable, allocates a scratch buffer the size of `v` and runs in *O*(*n* \*
/// passes).
#[inline]
pub fn sort<K: RadixKey>(v: &mut [K]) {
    sort_with_width(v, GroupWidth::default());
}

/// Sorts the slice processing `width` bits per pass.
///
/// The result does not depend on `width`, only the number of passes and the bucket table size do.
pub fn sort_with_width<K: RadixKey>(v: &mut [K], width: GroupWidth) {
    if v.len() < 2 {
        return;
    }

    let bits = width.bits();
    let mut buf = v.to_vec();

    for pass in 0..width.passes(K::BITS) {
        counting_pass(v, &mut buf, pass * bits, bits);
    }
}

/// Stable counting sort of `v` on the digit `(key >> shift) & (2^bits - 1)`.
fn counting_pass<K: RadixKey>(v: &mut [K], buf: &mut [K], shift: u32, bits: u32) {
    let mask = (1u64 << bits) - 1;
    let digit = |val: K| ((val.radix_key() >> shift) & mask) as usize;

    // Only the digit range actually present needs buckets.
    let (min_digit, max_digit) = v
        .iter()
        .map(|&val| digit(val))
        .fold((usize::MAX, 0), |(min, max), d| (min.min(d), max.max(d)));

    if min_digit == max_digit {
        trace!("radix pass shift={shift} bits={bits} skipped, single digit");
        return;
    }

    let span = max_digit - min_digit + 1;
    if span > MAX_BUCKETS {
        let half = bits / 2;
        counting_pass(v, buf, shift, half);
        counting_pass(v, buf, shift + half, half);
        return;
    }

    trace!("radix pass shift={shift} bits={bits} buckets={span}");

    // Tally the occurrences of every digit.
    let mut counts = vec![0usize; span];
    for &val in v.iter() {
        counts[digit(val) - min_digit] += 1;
    }

    // Exclusive prefix sums turn counts into output positions.
    let mut pos = 0;
    for count in counts.iter_mut() {
        let bucket_len = *count;
        *count = pos;
        pos += bucket_len;
    }

    // Scatter in input order, which keeps equal digits in their relative order.
    for &val in v.iter() {
        let bucket = &mut counts[digit(val) - min_digit];
        buf[*bucket] = val;
        *bucket += 1;
    }

    v.copy_from_slice(buf);
}
