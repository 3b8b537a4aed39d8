use tessera_space::{Bucket, EdgeMode, Offset, SpaceError, SquareLattice};

#[test]
fn moore_corner_no_check_keeps_three() {
    let s = SquareLattice::new(4, EdgeMode::NoCheck).unwrap();
    let n = s.neighbours(0, 0, &Bucket::moore());
    assert_eq!(n.as_slice(), &[4, 1, 5]);
}

#[test]
fn moore_corner_wrap_keeps_eight() {
    let s = SquareLattice::new(4, EdgeMode::Wrap).unwrap();
    let mut n = s.neighbours(0, 0, &Bucket::moore()).into_vec();
    n.sort_unstable();
    assert_eq!(n, vec![1, 3, 4, 5, 7, 12, 13, 15]);
}

#[test]
fn von_neumann_interior() {
    let s = SquareLattice::new(3, EdgeMode::NoCheck).unwrap();
    let n = s.neighbours(1, 1, &Bucket::von_neumann());
    assert_eq!(n.as_slice(), &[1, 3, 5, 7]);
}

#[test]
fn single_cell_wraps_onto_itself() {
    let s = SquareLattice::new(1, EdgeMode::Wrap).unwrap();
    let n = s.neighbours(0, 0, &Bucket::moore());
    assert_eq!(n.as_slice(), &[0; 8]);
    assert_eq!(s.resolve(0, 0, Offset::new(-100, 37)), Some((0, 0)));
}

#[test]
fn far_offsets_skip_without_wrap() {
    let bucket = Bucket::new([(0, 5), (-5, 0), (1, 1)]);
    let open = SquareLattice::new(5, EdgeMode::NoCheck).unwrap();
    assert_eq!(open.neighbours(2, 2, &bucket).as_slice(), &[18]);

    let torus = SquareLattice::new(5, EdgeMode::Wrap).unwrap();
    assert_eq!(torus.neighbours(2, 2, &bucket).as_slice(), &[12, 12, 18]);
}

#[test]
fn empty_lattice_rejected() {
    assert_eq!(
        SquareLattice::new(0, EdgeMode::Wrap),
        Err(SpaceError::EmptySpace)
    );
}
