use crate::structures::{
    atom::Atom,
    literal::{IntLiteral, Literal},
};

impl Literal for IntLiteral {
    fn new(atom: Atom, polarity: bool) -> Self {
        match polarity {
            true => atom as IntLiteral,
            false => -(atom as IntLiteral),
        }
    }

    fn negate(&self) -> Self {
        -self
    }

    fn atom(&self) -> Atom {
        self.unsigned_abs()
    }

    fn polarity(&self) -> bool {
        self.is_positive()
    }

    fn as_int(&self) -> isize {
        *self as isize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negation() {
        for atom in [1, 2, 79, 1_000_000] {
            for polarity in [true, false] {
                let literal = IntLiteral::new(atom, polarity);
                assert_eq!(literal.atom(), atom);
                assert_eq!(literal.polarity(), polarity);
                assert_eq!(literal.negate().atom(), atom);
                assert_eq!(literal.negate().polarity(), !polarity);
                assert_eq!(literal.negate().negate(), literal);
            }
        }
    }

    #[test]
    fn indices_are_distinct() {
        let mut indices = Vec::new();
        for atom in 1..10 {
            indices.push(IntLiteral::new(atom, true).index());
            indices.push(IntLiteral::new(atom, false).index());
        }
        let count = indices.len();
        indices.sort_unstable();
        indices.dedup();
        assert_eq!(indices.len(), count);
        assert_eq!(IntLiteral::new(3, true).index(), 7);
        assert_eq!(IntLiteral::new(3, false).index(), 6);
    }
}
