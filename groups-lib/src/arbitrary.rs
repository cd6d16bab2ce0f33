use crate::Groups;
use proptest::collection::{btree_set, vec};
use proptest::prelude::*;

impl Arbitrary for Groups {
    type Parameters = ();
    type Strategy = BoxedStrategy<Groups>;

    fn arbitrary_with(_args: Self::Parameters) -> Self::Strategy {
        // a small pool of voters, so that overlaps and identical groups show up often
        vec(btree_set(0..12usize, 0..5), 0..6)
            .prop_map(|groups| {
                let groups = groups
                    .into_iter()
                    .map(|members| members.into_iter().collect::<Vec<_>>())
                    .collect::<Vec<_>>();
                Groups::from_indexed(&groups)
            })
            .boxed()
    }
}
