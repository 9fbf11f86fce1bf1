//! Window copy/paste at lattice edges must stay inside the lattice and
//! synthesise Empty for everything outside it.

use proptest::prelude::*;
use sprawl_core::{Cell, CellType, Dims};
use sprawl_lattice::{Lattice, PasteBounds, Window};

fn grass_lattice(dims: Dims) -> Lattice {
    let mut l = Lattice::new(dims).unwrap();
    l.fill(CellType::Grass);
    l
}

fn assert_window_matches(l: &Lattice, w: &Window, x: i32, y: i32, z: i32) {
    for (dx, dy, dz) in w.offsets() {
        let (ax, ay, az) = (x + dx, y + dy, z + dz);
        let expected = if l.is_in_bounds(ax, ay, az) {
            *l.cell_at(ax, ay, az)
        } else {
            Cell::EMPTY
        };
        assert_eq!(
            *w.at(dx, dy, dz),
            expected,
            "offset ({dx}, {dy}, {dz}) around ({x}, {y}, {z})"
        );
    }
}

#[test]
fn every_cell_of_4x4x1_with_radius_2() {
    let dims = Dims::flat(4, 4);
    for y in 0..4 {
        for x in 0..4 {
            let mut l = grass_lattice(dims);
            let mut w = l.copy_window(x, y, 0, 2);
            assert_window_matches(&l, &w, x, y, 0);

            w.fill(Cell::new(CellType::RoadNS));
            l.paste_window(&w, x, y, 0, PasteBounds::Inclusive);
            assert_eq!(l.len(), 16);
            for cy in 0..4 {
                for cx in 0..4 {
                    let inside = (cx - x).abs() <= 2 && (cy - y).abs() <= 2;
                    let want = if inside { CellType::RoadNS } else { CellType::Grass };
                    assert_eq!(*l.cell_at(cx, cy, 0), want, "paste at ({x}, {y}) cell ({cx}, {cy})");
                }
            }
        }
    }
}

#[test]
fn legacy_paste_at_corner_keeps_far_face_untouched() {
    let mut l = grass_lattice(Dims::flat(4, 4));
    let mut w = l.copy_window(0, 0, 0, 2);
    w.fill(Cell::new(CellType::RoadEW));
    l.paste_window(&w, 0, 0, 0, PasteBounds::LegacyExclusive);
    // Offsets -2..=1 written, +2 dropped.
    assert_eq!(*l.cell_at(1, 1, 0), CellType::RoadEW);
    assert_eq!(*l.cell_at(2, 0, 0), CellType::Grass);
    assert_eq!(*l.cell_at(0, 2, 0), CellType::Grass);
}

proptest! {
    #[test]
    fn copy_and_paste_never_leave_the_lattice(
        w in 1u32..6,
        h in 1u32..6,
        d in 1u32..3,
        radius in 0u32..4,
        px in 0i32..6,
        py in 0i32..6,
        pz in 0i32..3,
    ) {
        let dims = Dims::new(w, h, d);
        let (x, y, z) = (px % w as i32, py % h as i32, pz % d as i32);
        let mut l = grass_lattice(dims);
        let before = l.clone();

        let window = l.copy_window(x, y, z, radius);
        for (dx, dy, dz) in window.offsets() {
            let inside = l.is_in_bounds(x + dx, y + dy, z + dz);
            let expected = if inside { CellType::Grass } else { CellType::Empty };
            prop_assert_eq!(window.at(dx, dy, dz).cell_type, expected);
        }

        l.paste_window(&window, x, y, z, PasteBounds::Inclusive);
        prop_assert_eq!(l.cells(), before.cells());
        l.paste_window(&window, x, y, z, PasteBounds::LegacyExclusive);
        prop_assert_eq!(l.cells(), before.cells());
    }
}
