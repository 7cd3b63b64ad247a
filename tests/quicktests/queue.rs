use std::collections::BTreeSet;

use bstkit::queue::PriorityQueue;
use bstkit::Error;

use crate::Op;

#[quickcheck]
fn dequeues_in_ascending_order(ops: Vec<Op<i8>>) -> bool {
    let mut queue = PriorityQueue::new();
    let mut model = BTreeSet::new();

    for op in ops {
        match op {
            Op::Insert(x) => {
                queue.enqueue(x.into());
                model.insert(i32::from(x));
            }
            Op::Remove(_) => {
                let expected = model.iter().next().copied();
                if let Some(front) = expected {
                    model.remove(&front);
                }
                assert_eq!(queue.dequeue(), expected.ok_or(Error::Empty));
            }
            Op::Iter => {
                assert!(queue.iter().eq(model.iter().copied()));
            }
        }

        if queue.peek().ok() != model.iter().next().copied() {
            return false;
        }
    }

    queue.len() == model.len()
}
