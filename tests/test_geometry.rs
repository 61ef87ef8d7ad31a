use yolo_post::common::DetBox;

#[test]
fn iou_is_symmetric() {
    let pairs = [
        (DetBox::new(0., 0., 100., 100.), DetBox::new(50., 50., 150., 150.)),
        (DetBox::new(0., 0., 10., 10.), DetBox::new(200., 200., 250., 260.)),
        (DetBox::new(10., 10., 90., 40.), DetBox::new(10., 10., 90., 40.)),
        (DetBox::new(0., 0., 60., 60.), DetBox::new(20., 20., 40., 40.)),
    ];

    for (a, b) in pairs {
        assert_eq!(a.iou(&b), b.iou(&a));
    }
}

#[test]
fn iou_of_box_with_itself_is_one() {
    let a = DetBox::new(12., 34., 56., 78.);
    assert_eq!(a.iou(&a), 1.0);
}

#[test]
fn iou_stays_within_unit_interval() {
    let boxes = [
        DetBox::new(0., 0., 100., 100.),
        DetBox::new(50., 50., 150., 150.),
        DetBox::new(200., 200., 250., 260.),
        DetBox::new(20., 20., 40., 40.),
        DetBox::new(0., 90., 100., 190.),
    ];

    for a in &boxes {
        for b in &boxes {
            let iou = a.iou(b);
            assert!((0.0..=1.0).contains(&iou), "iou out of range: {}", iou);
        }
    }
}

#[test]
fn zero_area_boxes_count_as_fully_overlapping() {
    let point = DetBox::new(5., 5., 5., 5.);
    let line = DetBox::new(0., 9., 10., 9.);

    assert_eq!(point.union(&line), 0.0);
    assert_eq!(point.iou(&line), 1.0);
    assert_eq!(point.iou(&point), 1.0);
}

#[test]
fn disjoint_boxes_do_not_intersect() {
    let a = DetBox::new(0., 0., 10., 10.);
    let b = DetBox::new(20., 20., 30., 30.);

    assert_eq!(a.intersect(&b), 0.0);
    assert_eq!(a.union(&b), a.area() + b.area());
    assert_eq!(a.iou(&b), 0.0);
}

#[test]
fn overlap_arithmetic_matches_hand_computation() {
    // [0,0,100,100] vs [0,12,100,100]: 8800 shared out of 10000 combined.
    let a = DetBox::new(0., 0., 100., 100.);
    let b = DetBox::new(0., 12., 100., 100.);

    assert_eq!(a.intersect(&b), 8800.0);
    assert_eq!(a.union(&b), 10000.0);
    assert_eq!(a.iou(&b), 0.88);
}

#[test]
fn box_accessors() {
    let a = DetBox::new(10., 20., 40., 80.);

    assert_eq!(a.width(), 30.0);
    assert_eq!(a.height(), 60.0);
    assert_eq!(a.cx(), 25.0);
    assert_eq!(a.cy(), 50.0);
    assert_eq!(a.area(), 1800.0);
    assert_eq!(a.as_x1y1_x2y2_i32(), (10, 20, 40, 80));
}
