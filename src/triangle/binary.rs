use std::fmt;

/// One triangle entry: an unsigned integer of arbitrary width.
///
/// Stored as little-endian `u64` limbs with no trailing zero limbs, so equality is structural.
/// [`fmt::Display`] renders the value in binary without prefix or leading zeros.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BinaryEntry {
    limbs: Vec<u64>,
}

impl BinaryEntry {
    /// The value one.
    pub fn one() -> Self {
        Self { limbs: vec![1] }
    }

    /// Build an entry from a native integer.
    pub fn from_u128(v: u128) -> Self {
        let mut out = Self {
            limbs: vec![v as u64, (v >> 64) as u64],
        };
        out.trim();
        out
    }

    /// Unsigned sum of `self` and `other`, carrying across limbs.
    pub fn plus(&self, other: &Self) -> Self {
        let (long, short) = if self.limbs.len() >= other.limbs.len() {
            (&self.limbs, &other.limbs)
        } else {
            (&other.limbs, &self.limbs)
        };

        let mut limbs = Vec::with_capacity(long.len() + 1);
        let mut carry = false;
        for (i, &a) in long.iter().enumerate() {
            let b = short.get(i).copied().unwrap_or(0);
            let (s1, c1) = a.overflowing_add(b);
            let (s2, c2) = s1.overflowing_add(u64::from(carry));
            limbs.push(s2);
            carry = c1 || c2;
        }
        if carry {
            limbs.push(1);
        }
        Self { limbs }
    }

    /// Whether the value is zero.
    pub fn is_zero(&self) -> bool {
        self.limbs.is_empty()
    }

    /// Number of significant binary digits (`0` for zero).
    pub fn bit_len(&self) -> usize {
        match self.limbs.last() {
            Some(&top) => (self.limbs.len() - 1) * 64 + (64 - top.leading_zeros() as usize),
            None => 0,
        }
    }

    /// Native value when it fits in 128 bits.
    pub fn to_u128(&self) -> Option<u128> {
        match self.limbs.as_slice() {
            [] => Some(0),
            [lo] => Some(u128::from(*lo)),
            [lo, hi] => Some(u128::from(*lo) | (u128::from(*hi) << 64)),
            _ => None,
        }
    }

    /// Binary digits, most significant first, without leading zeros (`"0"` for zero).
    pub fn to_binary_string(&self) -> String {
        self.to_string()
    }

    fn trim(&mut self) {
        while self.limbs.last() == Some(&0) {
            self.limbs.pop();
        }
    }
}

impl fmt::Display for BinaryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some((top, rest)) = self.limbs.split_last() else {
            return f.write_str("0");
        };
        write!(f, "{top:b}")?;
        for limb in rest.iter().rev() {
            write!(f, "{limb:064b}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/triangle/binary.rs"]
mod tests;
