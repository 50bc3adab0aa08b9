use arbitrary::{Arbitrary, Unstructured};

use crate::Mode;

impl<'a> Arbitrary<'a> for Mode {
    fn arbitrary(u: &mut Unstructured<'a>) -> arbitrary::Result<Self> {
        bool::arbitrary(u).map(Mode::from_optimize_positive)
    }

    fn size_hint(depth: usize) -> (usize, Option<usize>) {
        bool::size_hint(depth)
    }
}
