//! The fixed per-type growth rule table.
//!
//! A rule reads nothing but its own randomness and writes only the four
//! axis neighbours of the window centre in the `z = 0` plane, always
//! through claim-if-empty. North is `y − 1`, south `y + 1`, west `x − 1`,
//! east `x + 1`.
//!
//! Straight and diagonal rules flip a coin to pick one of two neighbours,
//! then roll the intersection chance:
//!
//! | rule        | neighbours       | on branch               | otherwise     |
//! |-------------|------------------|-------------------------|---------------|
//! | `RoadNS`    | N / S            | pick from branch set    | `RoadNS`      |
//! | `RoadEW`    | W / E            | pick from branch set    | `RoadEW`      |
//! | `RoadDiagBL`| S / W            | `RoadNS` / `RoadEW`     | `RoadDiagTR`  |
//! | `RoadDiagBR`| S / E            | `RoadNS` / `RoadEW`     | `RoadDiagTL`  |
//! | `RoadDiagTR`| N / E            | `RoadNS` / `RoadEW`     | `RoadDiagBL`  |
//! | `RoadDiagTL`| N / W            | `RoadNS` / `RoadEW`     | `RoadDiagBR`  |
//!
//! Junctions claim every open side unconditionally.

use sprawl_core::CellType::{self, *};
use sprawl_lattice::Window;

use crate::rng::GrowthRng;

/// A planar step from the window centre.
type Step = (i32, i32);

const NORTH: Step = (0, -1);
const SOUTH: Step = (0, 1);
const WEST: Step = (-1, 0);
const EAST: Step = (1, 0);

// ── Candidate sets ─────────────────────────────────────────────────

/// Pieces that can sit north of a north–south road: each opens to the south.
pub const NS_NORTH_BRANCHES: [CellType; 6] =
    [RoadDiagBL, RoadDiagBR, Road4Way, RoadEWS, RoadNSE, RoadNSW];
/// Pieces that can sit south of a north–south road: each opens to the north.
pub const NS_SOUTH_BRANCHES: [CellType; 6] =
    [RoadDiagTL, RoadDiagTR, Road4Way, RoadEWN, RoadNSE, RoadNSW];
/// Pieces that can sit west of an east–west road: each opens to the east.
pub const EW_WEST_BRANCHES: [CellType; 6] =
    [RoadDiagBR, RoadDiagTR, Road4Way, RoadEWN, RoadEWS, RoadNSE];
/// Pieces that can sit east of an east–west road: each opens to the west.
pub const EW_EAST_BRANCHES: [CellType; 6] =
    [RoadDiagBL, RoadDiagTL, Road4Way, RoadEWN, RoadEWS, RoadNSW];

// ── Dispatch ───────────────────────────────────────────────────────

/// Everything a rule may touch during one evaluation.
pub struct RuleContext<'a> {
    /// Snapshot around the target; the centre holds the target cell.
    pub window: &'a mut Window,
    /// The engine's random stream.
    pub rng: &'a mut GrowthRng,
    /// Branch probability in percent.
    pub intersection_chance: u8,
}

impl RuleContext<'_> {
    #[inline]
    fn claim(&mut self, (dx, dy): Step, cell_type: CellType) -> u32 {
        u32::from(self.window.claim(dx, dy, 0, cell_type))
    }

    #[inline]
    fn claim_from(&mut self, (dx, dy): Step, candidates: &[CellType]) -> u32 {
        let claimed = self
            .window
            .at_mut(dx, dy, 0)
            .claim_from(candidates, &mut *self.rng);
        u32::from(claimed)
    }

    #[inline]
    fn branches(&mut self) -> bool {
        self.rng.roll_percent(self.intersection_chance)
    }
}

/// A rule body. Returns the number of claims that took effect.
pub type RuleFn = fn(&mut RuleContext<'_>) -> u32;

/// The rule for a cell type.
pub fn rule_for(cell_type: CellType) -> RuleFn {
    match cell_type {
        Empty | Grass => inert,
        RoadNS => road_ns,
        RoadEW => road_ew,
        RoadDiagBL => diag_bl,
        RoadDiagBR => diag_br,
        RoadDiagTR => diag_tr,
        RoadDiagTL => diag_tl,
        Road4Way => four_way,
        RoadEWN => junction_ewn,
        RoadEWS => junction_ews,
        RoadNSE => junction_nse,
        RoadNSW => junction_nsw,
    }
}

// ── Rule bodies ────────────────────────────────────────────────────

fn inert(_: &mut RuleContext<'_>) -> u32 {
    0
}

fn straight(ctx: &mut RuleContext<'_>, ends: [(Step, &[CellType]); 2], same: CellType) -> u32 {
    let (step, branch_set) = if ctx.rng.coin() { ends[0] } else { ends[1] };
    if ctx.branches() {
        ctx.claim_from(step, branch_set)
    } else {
        ctx.claim(step, same)
    }
}

fn road_ns(ctx: &mut RuleContext<'_>) -> u32 {
    straight(
        ctx,
        [(NORTH, &NS_NORTH_BRANCHES[..]), (SOUTH, &NS_SOUTH_BRANCHES[..])],
        RoadNS,
    )
}

fn road_ew(ctx: &mut RuleContext<'_>) -> u32 {
    straight(
        ctx,
        [(WEST, &EW_WEST_BRANCHES[..]), (EAST, &EW_EAST_BRANCHES[..])],
        RoadEW,
    )
}

/// `vertical` continues as `RoadNS` on a branch, `horizontal` as `RoadEW`.
fn diagonal(ctx: &mut RuleContext<'_>, vertical: Step, horizontal: Step, onward: CellType) -> u32 {
    let (step, straight_type) = if ctx.rng.coin() {
        (vertical, RoadNS)
    } else {
        (horizontal, RoadEW)
    };
    if ctx.branches() {
        ctx.claim(step, straight_type)
    } else {
        ctx.claim(step, onward)
    }
}

fn diag_bl(ctx: &mut RuleContext<'_>) -> u32 {
    diagonal(ctx, SOUTH, WEST, RoadDiagTR)
}

fn diag_br(ctx: &mut RuleContext<'_>) -> u32 {
    diagonal(ctx, SOUTH, EAST, RoadDiagTL)
}

fn diag_tr(ctx: &mut RuleContext<'_>) -> u32 {
    diagonal(ctx, NORTH, EAST, RoadDiagBL)
}

fn diag_tl(ctx: &mut RuleContext<'_>) -> u32 {
    diagonal(ctx, NORTH, WEST, RoadDiagBR)
}

fn four_way(ctx: &mut RuleContext<'_>) -> u32 {
    ctx.claim(EAST, RoadEW) + ctx.claim(WEST, RoadEW) + ctx.claim(NORTH, RoadNS) + ctx.claim(SOUTH, RoadNS)
}

fn junction_ewn(ctx: &mut RuleContext<'_>) -> u32 {
    ctx.claim(EAST, RoadEW) + ctx.claim(WEST, RoadEW) + ctx.claim(NORTH, RoadNS)
}

fn junction_ews(ctx: &mut RuleContext<'_>) -> u32 {
    ctx.claim(EAST, RoadEW) + ctx.claim(WEST, RoadEW) + ctx.claim(SOUTH, RoadNS)
}

fn junction_nse(ctx: &mut RuleContext<'_>) -> u32 {
    ctx.claim(NORTH, RoadNS) + ctx.claim(SOUTH, RoadNS) + ctx.claim(EAST, RoadEW)
}

fn junction_nsw(ctx: &mut RuleContext<'_>) -> u32 {
    ctx.claim(NORTH, RoadNS) + ctx.claim(SOUTH, RoadNS) + ctx.claim(WEST, RoadEW)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sprawl_core::Cell;

    fn run(cell_type: CellType, chance: u8, seed: u64) -> Window {
        let mut window = Window::new(1);
        window.at_mut(0, 0, 0).cell_type = cell_type;
        let mut rng = GrowthRng::new(seed);
        let mut ctx = RuleContext {
            window: &mut window,
            rng: &mut rng,
            intersection_chance: chance,
        };
        rule_for(cell_type)(&mut ctx);
        window
    }

    /// Non-Empty cells other than the centre, as `(dx, dy, dz, type)`.
    fn grown(window: &Window) -> Vec<(i32, i32, i32, CellType)> {
        window
            .offsets()
            .filter(|&o| o != (0, 0, 0))
            .map(|(dx, dy, dz)| (dx, dy, dz, window.at(dx, dy, dz).cell_type))
            .filter(|&(.., t)| t != Empty)
            .collect()
    }

    #[test]
    fn inert_types_do_nothing() {
        for t in [Empty, Grass] {
            assert!(grown(&run(t, 100, 1)).is_empty());
        }
    }

    #[test]
    fn four_way_claims_all_sides() {
        let mut g = grown(&run(Road4Way, 0, 1));
        g.sort();
        assert_eq!(
            g,
            vec![(-1, 0, 0, RoadEW), (0, -1, 0, RoadNS), (0, 1, 0, RoadNS), (1, 0, 0, RoadEW)]
        );
    }

    #[test]
    fn junctions_skip_their_missing_side() {
        let cases = [
            (RoadEWN, (0, 1)),
            (RoadEWS, (0, -1)),
            (RoadNSE, (-1, 0)),
            (RoadNSW, (1, 0)),
        ];
        for (t, (mx, my)) in cases {
            let w = run(t, 0, 1);
            let g = grown(&w);
            assert_eq!(g.len(), 3, "{t:?}");
            assert_eq!(*w.at(mx, my, 0), Empty, "{t:?} filled its missing side");
            for (dx, dy, _, grown_type) in g {
                let want = if dx == 0 { RoadNS } else { RoadEW };
                assert_eq!(grown_type, want, "{t:?} at ({dx}, {dy})");
            }
        }
    }

    #[test]
    fn straight_without_branching_extends_itself() {
        for seed in 0..50 {
            let g = grown(&run(RoadNS, 0, seed));
            assert_eq!(g.len(), 1);
            let (dx, dy, dz, t) = g[0];
            assert!(dx == 0 && dz == 0 && dy.abs() == 1);
            assert_eq!(t, RoadNS);

            let g = grown(&run(RoadEW, 0, seed));
            let (dx, dy, _, t) = g[0];
            assert!(dy == 0 && dx.abs() == 1);
            assert_eq!(t, RoadEW);
        }
    }

    #[test]
    fn straight_branch_matches_the_end_grown() {
        for seed in 0..200 {
            let g = grown(&run(RoadNS, 100, seed));
            let (_, dy, _, t) = g[0];
            let set: &[CellType] = if dy < 0 { &NS_NORTH_BRANCHES } else { &NS_SOUTH_BRANCHES };
            assert!(set.contains(&t), "{t:?} north of NS? {}", dy < 0);

            let g = grown(&run(RoadEW, 100, seed));
            let (dx, _, _, t) = g[0];
            let set: &[CellType] = if dx < 0 { &EW_WEST_BRANCHES } else { &EW_EAST_BRANCHES };
            assert!(set.contains(&t));
        }
    }

    #[test]
    fn diagonals_follow_their_geometry() {
        let cases = [
            (RoadDiagBL, (0, 1), (-1, 0), RoadDiagTR),
            (RoadDiagBR, (0, 1), (1, 0), RoadDiagTL),
            (RoadDiagTR, (0, -1), (1, 0), RoadDiagBL),
            (RoadDiagTL, (0, -1), (-1, 0), RoadDiagBR),
        ];
        for (t, vertical, horizontal, onward) in cases {
            for seed in 0..50 {
                let (dx, dy, _, got) = grown(&run(t, 0, seed))[0];
                assert!((dx, dy) == vertical || (dx, dy) == horizontal, "{t:?}");
                assert_eq!(got, onward);

                let (dx, dy, _, got) = grown(&run(t, 100, seed))[0];
                let want = if (dx, dy) == vertical { RoadNS } else { RoadEW };
                assert_eq!(got, want, "{t:?} toward ({dx}, {dy})");
            }
        }
    }

    #[test]
    fn occupied_neighbours_are_never_overwritten() {
        for t in CellType::ALL {
            let mut window = Window::new(1);
            window.fill(Cell::new(Grass));
            window.at_mut(0, 0, 0).cell_type = t;
            let mut rng = GrowthRng::new(5);
            let mut ctx = RuleContext {
                window: &mut window,
                rng: &mut rng,
                intersection_chance: 50,
            };
            assert_eq!(rule_for(t)(&mut ctx), 0);
            assert_eq!(*window.center(), t);
            for (dx, dy, dz) in window.offsets().filter(|&o| o != (0, 0, 0)) {
                assert_eq!(*window.at(dx, dy, dz), Grass, "{t:?} wrote ({dx}, {dy}, {dz})");
            }
        }
    }

    #[test]
    fn branch_sets_hold_no_straights() {
        for set in [NS_NORTH_BRANCHES, NS_SOUTH_BRANCHES, EW_WEST_BRANCHES, EW_EAST_BRANCHES] {
            assert!(set.iter().all(|t| t.is_diagonal() || t.is_junction()));
        }
    }

    #[test]
    fn branch_fraction_tracks_the_chance() {
        let mut window = Window::new(1);
        let mut rng = GrowthRng::new(2024);
        let trials = 100_000;
        let mut branched = 0;
        for _ in 0..trials {
            window.fill(Cell::EMPTY);
            window.at_mut(0, 0, 0).cell_type = RoadNS;
            let mut ctx = RuleContext {
                window: &mut window,
                rng: &mut rng,
                intersection_chance: 50,
            };
            road_ns(&mut ctx);
            let grew = if window.at(0, -1, 0).is_occupied() {
                *window.at(0, -1, 0)
            } else {
                *window.at(0, 1, 0)
            };
            if grew != RoadNS {
                branched += 1;
            }
        }
        let frac = branched as f64 / trials as f64;
        assert!((frac - 0.5).abs() < 0.02, "branch fraction {frac}");
    }
}
