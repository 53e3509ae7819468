use super::*;

#[test]
fn next_and_prev_wrap() {
    let mut c = Carousel::new(3);
    c.prev();
    assert_eq!(c.index, 2);
    c.next();
    assert_eq!(c.index, 0);
    c.go_to(1);
    assert_eq!(c.index, 1);
    c.go_to(7);
    assert_eq!(c.index, 1);
}

#[test]
fn empty_carousel_stays_put() {
    let mut c = Carousel::new(0);
    c.next();
    c.prev();
    assert_eq!(c.index, 0);
}
