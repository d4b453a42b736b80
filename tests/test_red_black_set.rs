use rand::{thread_rng, Rng};
use red_black_set::comparator::ThreeWay;
use red_black_set::red_black_tree::{Direction, RedBlackSet};
use simplelog::{Config, LevelFilter, SimpleLogger};
use std::collections::BTreeSet;
use std::vec::Vec;

fn init_logger() {
    // only the first test to run installs the logger
    let _ = SimpleLogger::init(LevelFilter::Warn, Config::default());
}

fn forward(set: &RedBlackSet<u32>) -> Vec<u32> {
    let mut ret = Vec::new();
    let mut cursor = set.begin();
    while let Some(key) = cursor.value() {
        ret.push(*key);
        cursor.move_next();
    }
    ret
}

fn reverse(set: &RedBlackSet<u32>) -> Vec<u32> {
    let mut ret = Vec::new();
    let mut cursor = set.rbegin();
    while let Some(key) = cursor.value() {
        ret.push(*key);
        cursor.move_next();
    }
    ret
}

#[test]
fn int_test_red_black_set() {
    init_logger();
    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
    let mut set = RedBlackSet::new();
    let mut expected = BTreeSet::new();
    for _ in 0..100_000 {
        let key = rng.gen::<u32>();
        assert_eq!(set.insert(key), expected.insert(key));
    }

    assert_eq!(set.len(), expected.len());
    assert_eq!(set.verify(), Ok(()));
    assert_eq!(set.first(), expected.iter().next());
    assert_eq!(set.last(), expected.iter().next_back());

    for key in &expected {
        assert!(set.contains(key));
    }

    let sorted = expected.iter().cloned().collect::<Vec<u32>>();
    assert_eq!(forward(&set), sorted);
    assert_eq!(set.iter().cloned().collect::<Vec<u32>>(), sorted);

    let mut keys = sorted;
    thread_rng().shuffle(&mut keys);

    let mut expected_len = keys.len();
    for key in keys {
        assert!(set.remove(&key));
        assert!(!set.remove(&key));
        expected_len -= 1;
        assert_eq!(set.len(), expected_len);
    }
    assert!(set.is_empty());
    assert_eq!(set.verify(), Ok(()));
}

#[test]
fn int_test_red_black_set_invariants_every_step() {
    init_logger();
    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([2, 3, 5, 7]);
    let mut keys = (0..2_000).collect::<Vec<u32>>();
    rng.shuffle(&mut keys);

    let mut set = RedBlackSet::with_chunk_size(64);
    for (index, key) in keys.iter().enumerate() {
        assert!(set.insert(*key));
        assert_eq!(set.len(), index + 1);
        assert_eq!(set.verify(), Ok(()));
    }

    rng.shuffle(&mut keys);
    for (index, key) in keys.iter().enumerate() {
        assert!(set.remove(key));
        assert!(!set.contains(key));
        assert_eq!(set.len(), keys.len() - index - 1);
        assert_eq!(set.verify(), Ok(()));
    }
    assert!(set.is_empty());
}

#[test]
fn int_test_red_black_set_sequential_orders() {
    init_logger();
    let ascending = (0..1_000).collect::<Vec<u32>>();
    let descending = ascending.iter().rev().cloned().collect::<Vec<u32>>();

    for insert_order in &[&ascending, &descending] {
        for remove_order in &[&ascending, &descending] {
            let mut set = RedBlackSet::new();
            for key in insert_order.iter() {
                assert!(set.insert(*key));
                assert_eq!(set.verify(), Ok(()));
            }
            for key in remove_order.iter() {
                assert!(set.remove(key));
                assert_eq!(set.verify(), Ok(()));
            }
            assert!(set.is_empty());
        }
    }
}

#[test]
fn int_test_red_black_set_mixed_operations() {
    init_logger();
    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([4, 4, 4, 4]);
    let mut set = RedBlackSet::new();
    let mut expected = BTreeSet::new();
    for _ in 0..20_000 {
        let key = rng.gen_range(0, 512);
        match rng.gen_range(0, 3) {
            0 => assert_eq!(set.insert(key), expected.insert(key)),
            1 => assert_eq!(set.remove(&key), expected.remove(&key)),
            _ => assert_eq!(set.contains(&key), expected.contains(&key)),
        }
        assert_eq!(set.len(), expected.len());
    }
    assert_eq!(set.verify(), Ok(()));
    assert_eq!(forward(&set), expected.iter().cloned().collect::<Vec<u32>>());
}

#[test]
fn int_test_red_black_set_cursor_round_trip() {
    init_logger();
    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([9, 8, 7, 6]);
    let mut set = RedBlackSet::new();
    for _ in 0..1_000 {
        set.insert(rng.gen::<u32>());
    }

    let ascending = forward(&set);
    let mut descending = reverse(&set);
    descending.reverse();
    assert_eq!(ascending, descending);
    assert!(ascending.windows(2).all(|pair| pair[0] < pair[1]));

    // walking backwards from the end sentinel visits the same keys in reverse
    let mut cursor = set.end();
    let mut backwards = Vec::new();
    while cursor.move_prev() {
        backwards.push(*cursor.value().unwrap());
    }
    backwards.reverse();
    assert_eq!(backwards, ascending);
    assert_eq!(cursor, set.end());

    let mut cursor = set.rend();
    assert_eq!(cursor.direction(), Direction::Reverse);
    assert!(cursor.move_prev());
    assert_eq!(cursor.value(), set.first());
}

#[test]
fn int_test_red_black_set_clear() {
    init_logger();
    let mut set: RedBlackSet<u32> = (0..100).collect();
    set.clear();
    set.clear();
    assert_eq!(set.len(), 0);
    assert!(set.is_empty());
    assert_eq!(set.begin(), set.end());
    assert_eq!(set.verify(), Ok(()));

    set.extend(vec![3, 1, 2]);
    assert_eq!(forward(&set), vec![1, 2, 3]);
}

#[test]
fn int_test_red_black_set_three_way_comparator() {
    init_logger();
    let by_len = |a: &String, b: &String| {
        if a.len() != b.len() {
            a.len() as i32 - b.len() as i32
        } else {
            match a.cmp(b) {
                std::cmp::Ordering::Less => -1,
                std::cmp::Ordering::Equal => 0,
                std::cmp::Ordering::Greater => 1,
            }
        }
    };
    let mut set = RedBlackSet::with_comparator(ThreeWay(by_len));
    for word in &["pear", "fig", "banana", "kiwi", "apple", "fig"] {
        set.insert(word.to_string());
    }

    assert_eq!(set.len(), 5);
    assert_eq!(set.verify(), Ok(()));
    assert_eq!(
        set.into_iter().collect::<Vec<String>>(),
        vec!["fig", "kiwi", "pear", "apple", "banana"],
    );
}
