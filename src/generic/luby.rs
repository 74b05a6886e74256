/*!
An iterator over the Luby sequence.

See <https://oeis.org/A182105> for details on the sequence.

The iterator keeps a pair `(u, v)`, following the 'reluctant doubling' formulation:
when `u & -u == v` the next pair is `(u + 1, 1)`, and otherwise it is `(u, 2v)`.
The sequence is the sequence of `v` values.
*/

/// Representation used for numbers in a Luby sequence.
pub type LubyRepresentation = u32;

/// Foundation of the iterator.
pub struct Luby {
    u: LubyRepresentation,
    v: LubyRepresentation,
}

impl Default for Luby {
    fn default() -> Self {
        Luby { u: 0, v: 0 }
    }
}

impl Iterator for Luby {
    type Item = LubyRepresentation;

    fn next(&mut self) -> Option<Self::Item> {
        if self.u & self.u.wrapping_neg() == self.v {
            self.u = self.u.checked_add(1)?;
            self.v = 1;
        } else {
            self.v = self.v.checked_add(self.v)?;
        }

        Some(self.v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // https://oeis.org/A182105
    const LUBY_SLICE: &[LubyRepresentation] = &[
        1, 1, 2, 1, 1, 2, 4, 1, 1, 2, 1, 1, 2, 4, 8, 1, 1, 2, 1, 1, 2, 4, 1, 1, 2, 1, 1, 2, 4, 8,
        16, 1, 1, 2, 1, 1, 2, 4, 1, 1, 2, 1, 1, 2, 4, 8, 1, 1, 2, 1, 1, 2, 4, 1, 1, 2, 1, 1, 2, 4,
        8, 16, 32, 1, 1, 2, 1, 1, 2, 4, 1, 1, 2, 1, 1, 2, 4, 8,
    ];

    #[test]
    fn luby() {
        let luby = Luby::default();
        for (found, known) in luby.zip(LUBY_SLICE) {
            assert_eq!(found, *known)
        }
    }
}
