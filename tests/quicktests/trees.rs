//! The same properties, checked for every tree variant against a `BTreeSet`.

macro_rules! tree_quicktests {
    ($name:ident, $tree:ty) => {
        mod $name {
            use std::collections::{BTreeSet, HashSet};

            use bstkit::{Direction, Error};

            use crate::Op;

            type Tree = $tree;

            /// Applies a set of operations to a tree and a set.
            /// This way we can ensure that after a random smattering of inserts
            /// and deletes we have the same values in both.
            fn do_ops(ops: &[Op<i8>], mut tree: Tree, model: &mut BTreeSet<i32>) -> Tree {
                for op in ops {
                    match *op {
                        Op::Insert(x) => {
                            tree = tree.insert(x.into());
                            model.insert(x.into());
                        }
                        Op::Remove(x) => {
                            tree = tree.delete(x.into());
                            model.remove(&i32::from(x));
                        }
                        Op::Iter => {
                            assert!(tree.iter().eq(model.iter().copied()));
                        }
                    }
                }

                tree
            }

            #[quickcheck]
            fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
                let mut model = BTreeSet::new();
                let tree = do_ops(&ops, Tree::new(), &mut model);

                tree.node_count() == model.len()
                    && tree.dump(Direction::Ascending).eq(model.iter().copied())
                    && tree.dump(Direction::Descending).eq(model.iter().rev().copied())
                    && tree.min_value() == model.iter().next().copied().ok_or(Error::Empty)
            }

            #[quickcheck]
            fn dump_is_strictly_ordered(xs: Vec<i32>) -> bool {
                let tree: Tree = xs.into_iter().collect();
                let ascending: Vec<_> = tree.dump(Direction::Ascending).collect();
                let descending: Vec<_> = tree.dump(Direction::Descending).collect();

                ascending.windows(2).all(|pair| pair[0] < pair[1])
                    && descending.windows(2).all(|pair| pair[0] > pair[1])
            }

            #[quickcheck]
            fn contains(xs: Vec<i8>) -> bool {
                let tree: Tree = xs.iter().map(|&x| i32::from(x)).collect();

                xs.iter().all(|&x| tree.find(x.into()))
            }

            #[quickcheck]
            fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
                let tree: Tree = xs.iter().map(|&x| i32::from(x)).collect();
                let added: HashSet<_> = xs.into_iter().collect();
                let nots: HashSet<_> = nots.into_iter().collect();
                let mut nots = nots.difference(&added);

                nots.all(|&x| !tree.find(x.into()))
            }

            #[quickcheck]
            fn insert_then_delete_round_trip(xs: Vec<i8>, x: i8) -> bool {
                let tree: Tree = xs.iter().map(|&x| i32::from(x)).collect();

                let tree = tree.insert(x.into());
                let found = tree.find(x.into());
                let tree = tree.delete(x.into());

                found && !tree.find(x.into())
            }

            #[quickcheck]
            fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
                let mut tree: Tree = xs.iter().map(|&x| i32::from(x)).collect();
                for delete in &deletes {
                    tree = tree.delete((*delete).into());
                }

                let mut still_present = xs;
                for delete in &deletes {
                    // We may have inserted the same value multiple times - delete each one.
                    while let Some(pos) = still_present.iter().position(|x| x == delete) {
                        still_present.swap_remove(pos);
                    }
                }

                deletes.iter().all(|&x| !tree.find(x.into()))
                    && still_present.iter().all(|&x| tree.find(x.into()))
            }

            #[quickcheck]
            fn deleting_absent_value_is_a_no_op(xs: Vec<i8>, absent: i8) -> bool {
                let tree: Tree = xs
                    .iter()
                    .filter(|&&x| x != absent)
                    .map(|&x| i32::from(x))
                    .collect();
                let count = tree.node_count();
                let before: Vec<_> = tree.iter().collect();

                let tree = tree.delete(absent.into());

                tree.node_count() == count && tree.iter().eq(before)
            }
        }
    };
}

tree_quicktests!(simple, bstkit::simple::Tree);
tree_quicktests!(avl, bstkit::avl::Tree);
tree_quicktests!(redblack, bstkit::redblack::Tree);

mod balance {
    use bstkit::{avl, redblack};

    /// Height bound shared by both balanced variants: an AVL tree is within ~1.44 lg N and a
    /// red-black tree within 2 lg N.
    fn within_bound(height: i32, len: usize) -> bool {
        let bound = 2.0 * ((len + 1) as f64).log2();
        f64::from(height + 1) <= bound
    }

    #[quickcheck]
    fn balanced_trees_stay_shallow(xs: Vec<i32>, deletes: Vec<i32>) -> bool {
        let mut avl_tree: avl::Tree = xs.iter().copied().collect();
        let mut rb_tree: redblack::Tree = xs.iter().copied().collect();
        for &x in deletes.iter().chain(xs.iter().step_by(3)) {
            avl_tree = avl_tree.delete(x);
            rb_tree = rb_tree.delete(x);
        }

        within_bound(avl_tree.height(), avl_tree.node_count())
            && within_bound(rb_tree.height(), rb_tree.node_count())
    }
}
