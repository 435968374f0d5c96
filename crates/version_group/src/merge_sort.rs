// The tiered version order is not transitive when only some versions carry a
// release time or suffix. `slice::sort_by` may panic on an order like that, so
// groups are sorted with this stable merge sort, which only ever asks "is the
// right side strictly less" and never checks consistency.

use std::cmp::Ordering;

const INSERTION_LEN: usize = 16;

pub fn merge_sort_by<T, F>(v: &mut [T], mut cmp: F)
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    sort_slice(v, &mut cmp);
}

fn sort_slice<T, F>(v: &mut [T], cmp: &mut F)
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    let len = v.len();
    if len <= INSERTION_LEN {
        insertion_sort(v, cmp);
        return;
    }

    let mid = len / 2;
    sort_slice(&mut v[..mid], cmp);
    sort_slice(&mut v[mid..], cmp);

    // already in order
    if cmp(&v[mid - 1], &v[mid]) != Ordering::Greater {
        return;
    }

    let left = v[..mid].to_vec();
    let (mut i, mut j, mut k) = (0, mid, 0);

    // k never passes j, so the right half is read before it is overwritten
    while i < left.len() && j < len {
        if cmp(&v[j], &left[i]) == Ordering::Less {
            v[k] = v[j].clone();
            j += 1;
        } else {
            v[k] = left[i].clone();
            i += 1;
        }
        k += 1;
    }

    while i < left.len() {
        v[k] = left[i].clone();
        i += 1;
        k += 1;
    }
}

fn insertion_sort<T, F>(v: &mut [T], cmp: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    for i in 1..v.len() {
        let mut j = i;
        while j > 0 && cmp(&v[j - 1], &v[j]) == Ordering::Greater {
            v.swap(j - 1, j);
            j -= 1;
        }
    }
}
