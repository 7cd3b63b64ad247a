use std::collections::BinaryHeap;

use bstkit::heap::{self, Heap};
use bstkit::Error;

use crate::Op;

#[quickcheck]
fn peek_is_always_the_maximum(ops: Vec<Op<i16>>) -> bool {
    let mut heap = Heap::with_capacity(64);
    let mut model = BinaryHeap::new();

    for op in ops {
        match op {
            Op::Insert(x) => {
                let added = heap.add(x.into());
                if model.len() == 64 {
                    assert_eq!(added, Err(Error::Full { capacity: 64 }));
                } else {
                    assert_eq!(added, Ok(()));
                    model.push(i32::from(x));
                }
            }
            Op::Remove(_) => {
                assert_eq!(heap.remove().ok(), model.pop());
            }
            Op::Iter => {}
        }

        if heap.peek().ok() != model.peek().copied() || heap.len() != model.len() {
            return false;
        }
    }

    true
}

#[quickcheck]
fn sort_orders_any_slice(xs: Vec<i32>) -> bool {
    let mut sorted = xs.clone();
    heap::sort(&mut sorted);

    let mut expected = xs;
    expected.sort();
    sorted == expected
}
