use space_survivor::geometry::*;

fn boxes() -> Vec<Aabb> {
    vec![
        Aabb::new(0.0, 0.0, 10.0, 10.0),
        Aabb::new(5.0, 5.0, 10.0, 10.0),
        Aabb::new(10.0, 0.0, 10.0, 10.0),
        Aabb::new(-3.0, 8.0, 2.0, 40.0),
        Aabb::new(100.0, 100.0, 1.0, 1.0),
        Aabb::new(2.0, 2.0, 3.0, 3.0),
    ]
}

#[test]
fn overlap_is_symmetric() {
    let all = boxes();
    for a in &all {
        for b in &all {
            assert_eq!(overlaps(a, b), overlaps(b, a), "{:?} vs {:?}", a, b);
        }
    }
}

#[test]
fn identical_boxes_overlap() {
    let a = Aabb::new(3.0, 4.0, 5.0, 6.0);
    assert!(a.overlaps(&a));
}

#[test]
fn partial_overlap_counts() {
    let a = Aabb::new(0.0, 0.0, 10.0, 10.0);
    let b = Aabb::new(5.0, 5.0, 10.0, 10.0);
    assert!(overlaps(&a, &b));
}

#[test]
fn containment_counts() {
    let outer = Aabb::new(0.0, 0.0, 10.0, 10.0);
    let inner = Aabb::new(2.0, 2.0, 3.0, 3.0);
    assert!(overlaps(&outer, &inner));
}

#[test]
fn touching_edges_do_not_overlap() {
    let a = Aabb::new(0.0, 0.0, 10.0, 10.0);
    let right = Aabb::new(10.0, 0.0, 10.0, 10.0);
    let above = Aabb::new(0.0, 10.0, 10.0, 10.0);
    let corner = Aabb::new(10.0, 10.0, 10.0, 10.0);
    assert!(!overlaps(&a, &right));
    assert!(!overlaps(&a, &above));
    assert!(!overlaps(&a, &corner));
}

#[test]
fn separation_on_one_axis_is_enough() {
    let a = Aabb::new(0.0, 0.0, 10.0, 10.0);
    // overlapping in x, apart in y
    let b = Aabb::new(5.0, 30.0, 10.0, 10.0);
    // overlapping in y, apart in x
    let c = Aabb::new(-30.0, 5.0, 10.0, 10.0);
    assert!(!overlaps(&a, &b));
    assert!(!overlaps(&a, &c));
}
