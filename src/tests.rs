use super::{query, AvlTree};

const N: i32 = 1_000;
const LARGE_N: i32 = 1_000_000;

fn root_key(tree: &AvlTree<i32>) -> Option<i32> {
    tree.root().map(|root| *root.key())
}

#[test]
fn test_new() {
    let tree_i32 = AvlTree::<i32>::new();
    assert!(tree_i32.is_empty());
    assert_eq!(tree_i32.height(), 0);
    tree_i32.check_consistency();

    let tree_i8 = AvlTree::<i8>::new();
    assert!(tree_i8.is_empty());
    tree_i8.check_consistency();

    let tree_string = AvlTree::<String>::new();
    assert!(tree_string.is_empty());
    tree_string.check_consistency();
}

#[test]
fn test_rebalance() {
    {
        // 10 ->    20
        //   \     /  \
        //    20  10   30
        //      \
        //       30
        let tree: AvlTree<i32> = [10, 20, 30].into_iter().collect();
        tree.check_consistency();
        assert_eq!(root_key(&tree), Some(20));
        assert_eq!(tree.height(), 2);
        assert_eq!(tree.in_order(), vec![&10, &20, &30]);
    }
    {
        //       30 ->   20
        //      /       /  \
        //     20      10   30
        //    /
        //   10
        let tree: AvlTree<i32> = [30, 20, 10].into_iter().collect();
        tree.check_consistency();
        assert_eq!(root_key(&tree), Some(20));
        assert_eq!(tree.height(), 2);
        assert_eq!(tree.in_order(), vec![&10, &20, &30]);
    }
    {
        //   30   ->   20
        //  /         /  \
        // 10        10   30
        //   \
        //    20
        let tree: AvlTree<i32> = [30, 10, 20].into_iter().collect();
        tree.check_consistency();
        assert_eq!(root_key(&tree), Some(20));
        assert_eq!(tree.height(), 2);
        assert_eq!(tree.in_order(), vec![&10, &20, &30]);
    }
    {
        // 10     ->   20
        //   \        /  \
        //    30     10   30
        //   /
        //  20
        let tree: AvlTree<i32> = [10, 30, 20].into_iter().collect();
        tree.check_consistency();
        assert_eq!(root_key(&tree), Some(20));
        assert_eq!(tree.height(), 2);
        assert_eq!(tree.in_order(), vec![&10, &20, &30]);
    }
    {
        // Rotation below the root, root itself stays
        //       3   ->     3
        //      / \        / \
        //     2   4      1   4
        //    /          / \
        //   1          0   2
        //  /
        // 0
        let tree: AvlTree<i32> = [3, 2, 4, 1, 0].into_iter().collect();
        tree.check_consistency();
        assert_eq!(root_key(&tree), Some(3));
        assert_eq!(tree.pre_order(), vec![&3, &1, &0, &2, &4]);
        assert_eq!(tree.height(), 3);
    }
}

#[test]
fn test_duplicates() {
    let mut tree = AvlTree::new();
    assert!(tree.insert(5));
    assert!(!tree.insert(5));
    assert!(!tree.insert(5));
    tree.check_consistency();

    assert_eq!(tree.len(), 1);
    assert_eq!(tree.height(), 1);
    assert_eq!(root_key(&tree), Some(5));
    assert_eq!(tree.sum_values(), 5);

    let root = tree.root().unwrap();
    assert!(root.left().is_none());
    assert!(root.right().is_none());
}

#[test]
fn test_insert() {
    use rand::{rngs::StdRng, Rng, SeedableRng};

    let mut rng = StdRng::seed_from_u64(0);
    let mut values: Vec<i32> = (0..N).map(|_| rng.gen()).collect();
    values.sort();
    values.dedup();

    let mut tree = AvlTree::new();
    for value in &values {
        assert!(tree.insert(*value));
        tree.check_consistency();
    }
    assert!(tree.len() == values.len());

    for value in &values {
        assert!(!tree.insert(*value));
    }
    assert!(tree.len() == values.len());
    tree.check_consistency();
}

#[test]
#[ignore]
fn test_insert_large() {
    use rand::{rngs::StdRng, Rng, SeedableRng};

    let mut rng = StdRng::seed_from_u64(0);

    let mut tree = AvlTree::new();
    for value in (0..LARGE_N).map(|_| rng.gen::<i32>()) {
        tree.insert(value);
    }
    tree.check_consistency();
}

#[test]
fn test_insert_sorted_range() {
    let mut tree = AvlTree::new();
    for value in 0..N {
        assert!(tree.insert(value));
        tree.check_consistency();
    }
    assert!(tree.len() == N as usize);
    assert!(tree.height() > 0);
    // AVL height bound is about 1.44 * log2(n)
    assert!(tree.height() <= 15);
    assert!(tree.get(&-42).is_none());
}

#[test]
fn test_insert_shuffled_range() {
    use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

    let mut values: Vec<i32> = (0..N).collect();
    let mut rng = StdRng::seed_from_u64(0);
    values.shuffle(&mut rng);

    let mut tree = AvlTree::new();
    for value in &values {
        assert!(tree.insert(*value));
        tree.check_consistency();
    }
    assert!(tree.len() == values.len());

    for value in &values {
        assert!(!tree.insert(*value));
    }
    assert!(tree.len() == values.len());

    let expected: Vec<i32> = (0..N).collect();
    assert_eq!(tree.in_order(), expected.iter().collect::<Vec<_>>());
}

#[test]
fn test_get() {
    use rand::{rngs::StdRng, Rng, SeedableRng};

    let mut rng = StdRng::seed_from_u64(0);
    let values: Vec<i32> = (0..N).map(|_| rng.gen_range(0..N * 10)).collect();

    let mut tree = AvlTree::new();
    assert!(tree.get(&42).is_none());
    for value in &values {
        tree.insert(*value);
    }

    for value in &values {
        assert_eq!(tree.get(value), Some(value));
        assert!(tree.contains(value));
    }
    assert!(tree.get(&-42).is_none());
    assert!(!tree.contains(&(N * 10)));
}

#[test]
fn test_clear() {
    use rand::{rngs::StdRng, Rng, SeedableRng};

    let mut rng = StdRng::seed_from_u64(0);
    let mut values: Vec<i32> = (0..N).map(|_| rng.gen()).collect();
    values.sort();
    values.dedup();

    let mut tree: AvlTree<i32> = values.iter().copied().collect();
    assert!(!tree.is_empty());
    assert!(tree.len() == values.len());

    tree.clear();
    assert!(tree.is_empty());
    assert!(tree.len() == 0);
    assert!(tree.find_min().is_none());

    for value in &values {
        assert!(tree.insert(*value));
    }
    assert!(!tree.is_empty());
    assert!(tree.len() == values.len());
    tree.check_consistency();
}

#[test]
fn test_traversals() {
    //      4
    //    /   \
    //   2     6
    //  / \   / \
    // 1   3 5   7
    let tree: AvlTree<i32> = (1..=7).collect();
    tree.check_consistency();
    assert_eq!(tree.pre_order(), vec![&4, &2, &1, &3, &6, &5, &7]);
    assert_eq!(tree.in_order(), vec![&1, &2, &3, &4, &5, &6, &7]);
    assert_eq!(tree.post_order(), vec![&1, &3, &2, &5, &7, &6, &4]);
    assert_eq!(tree.level_order(), vec![&4, &2, &6, &1, &3, &5, &7]);

    let empty = AvlTree::<i32>::new();
    assert!(empty.pre_order().is_empty());
    assert!(empty.in_order().is_empty());
    assert!(empty.post_order().is_empty());
    assert!(empty.level_order().is_empty());
}

#[test]
fn test_min_max_sum() {
    use rand::{rngs::StdRng, Rng, SeedableRng};

    let empty = AvlTree::<i64>::new();
    assert_eq!(empty.find_min(), None);
    assert_eq!(empty.find_max(), None);
    assert_eq!(empty.sum_values(), 0);

    let mut rng = StdRng::seed_from_u64(0);
    let mut values: Vec<i64> = (0..N).map(|_| rng.gen_range(-1_000..=1_000)).collect();
    let tree: AvlTree<i64> = values.iter().copied().collect();
    values.sort();
    values.dedup();

    assert_eq!(tree.find_min(), values.first());
    assert_eq!(tree.find_max(), values.last());
    assert_eq!(tree.sum_values(), values.iter().map(|&v| v as i128).sum::<i128>());
}

#[test]
fn test_sum_does_not_overflow() {
    let tree: AvlTree<i64> = [i64::MAX, i64::MAX - 1, i64::MAX - 2].into_iter().collect();
    assert_eq!(tree.sum_values(), 3 * i64::MAX as i128 - 3);
}

#[test]
fn test_subtree_queries() {
    let tree: AvlTree<i32> = (1..=7).collect();
    let root = tree.root().unwrap();
    let left = root.left();
    let right = root.right();

    assert_eq!(query::find_min(left), Some(&1));
    assert_eq!(query::find_max(left), Some(&3));
    assert_eq!(query::find_min(right), Some(&5));
    assert_eq!(query::find_max(right), Some(&7));
    assert_eq!(query::sum_values(left), 6);
    assert_eq!(query::in_order(right), vec![&5, &6, &7]);
    assert_eq!(query::height(left), 2);
    assert_eq!(query::balance_factor(left), 0);
    assert_eq!(query::height::<i32>(None), 0);
    assert_eq!(query::balance_factor::<i32>(None), 0);
    assert_eq!(query::find_max::<i32>(None), None);
}

#[test]
fn test_iter() {
    use rand::{rngs::StdRng, Rng, SeedableRng};

    let mut rng = StdRng::seed_from_u64(0);
    let mut values: Vec<i32> = (0..N).map(|_| rng.gen()).collect();

    let tree: AvlTree<i32> = values.iter().copied().collect();

    values.sort();
    values.dedup();

    let mut tree_iter = tree.iter();
    assert_eq!(tree_iter.len(), values.len());
    for value in &values {
        assert_eq!(tree_iter.next(), Some(value));
    }
    assert!(tree_iter.next().is_none());

    let mut value_iter = values.iter();
    for key in &tree {
        assert_eq!(Some(key), value_iter.next());
    }
    assert!(value_iter.next().is_none());
}

#[test]
fn test_debug() {
    let tree: AvlTree<i32> = [3, 1, 2].into_iter().collect();
    assert_eq!(format!("{:?}", tree), "{1, 2, 3}");
}
