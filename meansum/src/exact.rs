//! Exact summation of finite `f64` values.
//!
//! Every finite double is an integer multiple of 2^-1074, so a wide
//! two's-complement fixed-point register can hold any sum of them with no
//! rounding at all. The register is rounded to the nearest `f64` (ties to
//! even) once, when the value is read, so the result does not depend on the
//! order the values were added in.

/// 2098 bits cover every finite double; the rest is carry headroom and sign.
const LIMBS: usize = 35;

const FRACTION_BITS: u32 = 52;
const FRACTION_MASK: u64 = (1 << FRACTION_BITS) - 1;
const MANTISSA_MASK: u64 = (1 << (FRACTION_BITS + 1)) - 1;
const EXPONENT_INFINITE: usize = 0x7ff;

/// Order-independent accumulator returning the correctly rounded sum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExactSum {
    limbs: [u64; LIMBS],
}

impl Default for ExactSum {
    fn default() -> Self {
        Self { limbs: [0; LIMBS] }
    }
}

impl ExactSum {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `value` exactly. Non-finite values must be filtered by the caller.
    pub fn add(&mut self, value: f64) {
        debug_assert!(value.is_finite());

        let bits = value.to_bits();
        let exponent = ((bits >> FRACTION_BITS) & 0x7ff) as usize;
        let fraction = bits & FRACTION_MASK;

        // value = mantissa * 2^shift * 2^-1074
        let (mantissa, shift) = if exponent == 0 {
            (fraction, 0)
        } else {
            (fraction | (1 << FRACTION_BITS), exponent - 1)
        };
        if mantissa == 0 {
            return;
        }

        let wide = u128::from(mantissa) << (shift % 64);
        let parts = [wide as u64, (wide >> 64) as u64];
        let index = shift / 64;

        if bits >> 63 == 1 {
            sub_at(&mut self.limbs, index, parts);
        } else {
            add_at(&mut self.limbs, index, parts);
        }
    }

    /// The accumulated sum rounded to nearest, ties to even.
    ///
    /// Returns an infinity when the exact sum is beyond the `f64` range.
    pub fn value(&self) -> f64 {
        let negative = self.limbs[LIMBS - 1] >> 63 == 1;
        if negative {
            let mut magnitude = self.limbs.map(|limb| !limb);
            add_at(&mut magnitude, 0, [1, 0]);
            -round_magnitude(&magnitude)
        } else {
            round_magnitude(&self.limbs)
        }
    }
}

impl FromIterator<f64> for ExactSum {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        let mut sum = Self::new();
        for value in iter {
            sum.add(value);
        }
        sum
    }
}

fn add_at(limbs: &mut [u64; LIMBS], index: usize, parts: [u64; 2]) {
    let mut carry = false;
    for (offset, limb) in limbs[index..].iter_mut().enumerate() {
        let part = parts.get(offset).copied().unwrap_or(0);
        if offset >= parts.len() && !carry {
            break;
        }
        let (partial, c1) = limb.overflowing_add(part);
        let (total, c2) = partial.overflowing_add(u64::from(carry));
        *limb = total;
        carry = c1 || c2;
    }
}

fn sub_at(limbs: &mut [u64; LIMBS], index: usize, parts: [u64; 2]) {
    let mut borrow = false;
    for (offset, limb) in limbs[index..].iter_mut().enumerate() {
        let part = parts.get(offset).copied().unwrap_or(0);
        if offset >= parts.len() && !borrow {
            break;
        }
        let (partial, b1) = limb.overflowing_sub(part);
        let (total, b2) = partial.overflowing_sub(u64::from(borrow));
        *limb = total;
        borrow = b1 || b2;
    }
}

fn bit(limbs: &[u64; LIMBS], position: usize) -> bool {
    limbs[position / 64] >> (position % 64) & 1 == 1
}

/// Reads the 53 bits starting at `low`.
fn mantissa_at(limbs: &[u64; LIMBS], low: usize) -> u64 {
    let index = low / 64;
    let offset = low % 64;
    let mut bits = limbs[index] >> offset;
    if offset != 0 && index + 1 < LIMBS {
        bits |= limbs[index + 1] << (64 - offset);
    }
    bits & MANTISSA_MASK
}

/// True when any bit strictly below `position` is set.
fn any_below(limbs: &[u64; LIMBS], position: usize) -> bool {
    let index = position / 64;
    let partial = limbs[index] & ((1u64 << (position % 64)) - 1);
    partial != 0 || limbs[..index].iter().any(|&limb| limb != 0)
}

fn round_magnitude(limbs: &[u64; LIMBS]) -> f64 {
    let Some(top_index) = limbs.iter().rposition(|&limb| limb != 0) else {
        return 0.0;
    };
    let mut top = top_index * 64 + 63 - limbs[top_index].leading_zeros() as usize;

    // Fits in 53 bits: exact multiple of the smallest subnormal.
    if top <= FRACTION_BITS as usize {
        return limbs[0] as f64 * f64::from_bits(1);
    }

    let low = top - FRACTION_BITS as usize;
    let mut mantissa = mantissa_at(limbs, low);
    let round = bit(limbs, low - 1);
    let sticky = any_below(limbs, low - 1);

    if round && (sticky || mantissa & 1 == 1) {
        mantissa += 1;
        if mantissa > MANTISSA_MASK {
            mantissa >>= 1;
            top += 1;
        }
    }

    let exponent = top - 51;
    if exponent >= EXPONENT_INFINITE {
        return f64::INFINITY;
    }
    f64::from_bits(((exponent as u64) << FRACTION_BITS) | (mantissa & FRACTION_MASK))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exact(values: &[f64]) -> f64 {
        values.iter().copied().collect::<ExactSum>().value()
    }

    #[test]
    fn test_empty_is_zero() {
        assert_eq!(ExactSum::new().value(), 0.0);
        assert_eq!(exact(&[0.0, -0.0]), 0.0);
    }

    #[test]
    fn test_single_values_round_trip() {
        for v in [
            1.0,
            -2.5,
            0.1,
            f64::MAX,
            -f64::MAX,
            f64::MIN_POSITIVE,
            f64::from_bits(1),
            -f64::from_bits(0x000f_ffff_ffff_ffff),
            1e-300,
            123456789.125,
        ] {
            assert_eq!(exact(&[v]), v, "value {v:e}");
        }
    }

    #[test]
    fn test_correctly_rounded_decimal_fractions() {
        assert_eq!(exact(&[0.1, 0.2, 0.3]), 0.6);
        assert_eq!(exact(&[0.3, 0.2, 0.1]), 0.6);
        assert_eq!(exact(&[0.2, 0.3, 0.1]), 0.6);
    }

    #[test]
    fn test_cancellation_keeps_small_terms() {
        assert_eq!(exact(&[1e100, 1.0, -1e100]), 1.0);
        assert_eq!(exact(&[1e308, 1e-308, -1e308]), 1e-308);
    }

    #[test]
    fn test_intermediate_overflow_cancels() {
        assert_eq!(exact(&[f64::MAX, f64::MAX, -f64::MAX]), f64::MAX);
        assert_eq!(exact(&[-f64::MAX, -f64::MAX, f64::MAX]), -f64::MAX);
    }

    #[test]
    fn test_overflow_is_infinite() {
        assert_eq!(exact(&[f64::MAX, f64::MAX]), f64::INFINITY);
        assert_eq!(exact(&[-f64::MAX, -f64::MAX]), f64::NEG_INFINITY);
    }

    #[test]
    fn test_ties_round_to_even() {
        let half_ulp = 2f64.powi(-53);
        assert_eq!(exact(&[1.0, half_ulp]), 1.0);
        assert_eq!(exact(&[1.0, half_ulp, 2f64.powi(-105)]), 1.0 + 2f64.powi(-52));
        assert_eq!(exact(&[1.0 + 2f64.powi(-52), half_ulp]), 1.0 + 2f64.powi(-51));
    }

    #[test]
    fn test_subnormal_sums() {
        let tiny = f64::from_bits(1);
        assert_eq!(exact(&[tiny, tiny, tiny]), f64::from_bits(3));
        assert_eq!(exact(&[f64::MIN_POSITIVE, -tiny]), f64::from_bits(0x000f_ffff_ffff_ffff));
    }

    #[test]
    fn test_negative_result() {
        assert_eq!(exact(&[1.5, -4.0]), -2.5);
        assert_eq!(exact(&[-0.1, -0.2]), -0.1 - 0.2);
    }
}
