//! Randomized operation sequences checked against the registry invariants.

use std::collections::HashSet;

use casement_common::{Point, Size, WindowId};
use casement_tiling::{ArrangeMode, OpenWindow, WindowRegistry, MAX_VISIBLE_WINDOWS};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Open(u8),
    Close(u32),
    Minimize(u32),
    Maximize(u32),
    Focus(u32),
    Resize(u32, f64, f64),
    Move(u32, f64, f64),
    Arrange(bool),
    MinimizeAll,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => (0u8..8).prop_map(Op::Open),
        1 => (1u32..12).prop_map(Op::Close),
        2 => (1u32..12).prop_map(Op::Minimize),
        1 => (1u32..12).prop_map(Op::Maximize),
        2 => (1u32..12).prop_map(Op::Focus),
        1 => (1u32..12, -50.0f64..900.0, -50.0f64..900.0)
            .prop_map(|(id, w, h)| Op::Resize(id, w, h)),
        1 => (1u32..12, -50.0f64..900.0, -50.0f64..900.0)
            .prop_map(|(id, x, y)| Op::Move(id, x, y)),
        1 => any::<bool>().prop_map(Op::Arrange),
        1 => Just(Op::MinimizeAll),
    ]
}

fn apply(reg: &mut WindowRegistry<()>, op: &Op) -> Option<WindowId> {
    match *op {
        Op::Open(key) => {
            let key = format!("k{key}");
            Some(reg.open_window(
                OpenWindow::new(key.clone(), key, ()).with_min_size(Size::new(120.0, 80.0)),
            ))
        }
        Op::Close(id) => {
            reg.close_window(WindowId(id));
            None
        }
        Op::Minimize(id) => {
            reg.minimize_window(WindowId(id));
            None
        }
        Op::Maximize(id) => {
            reg.maximize_window(WindowId(id));
            None
        }
        Op::Focus(id) => {
            reg.focus_window(WindowId(id));
            reg.get(WindowId(id)).map(|w| w.id)
        }
        Op::Resize(id, w, h) => {
            reg.update_size(WindowId(id), Size::new(w, h));
            None
        }
        Op::Move(id, x, y) => {
            reg.update_position(WindowId(id), Point::new(x, y));
            None
        }
        Op::Arrange(tile) => {
            reg.arrange_windows(if tile {
                ArrangeMode::Tile
            } else {
                ArrangeMode::Cascade
            });
            None
        }
        Op::MinimizeAll => {
            reg.minimize_all_windows();
            None
        }
    }
}

proptest! {
    #[test]
    fn invariants_hold_after_every_operation(ops in prop::collection::vec(op(), 1..60)) {
        let mut reg: WindowRegistry<()> = WindowRegistry::new();
        let mut seen_ids: HashSet<WindowId> = HashSet::new();
        let mut max_z_seen = 0u32;

        for op in &ops {
            let before: HashSet<WindowId> = reg.windows().iter().map(|w| w.id).collect();
            let touched = apply(&mut reg, op);
            let windows = reg.windows();

            // Visible cap.
            prop_assert!(reg.visible_count() <= MAX_VISIBLE_WINDOWS);

            // One visible entry per content key.
            let mut keys = HashSet::new();
            for w in windows.iter().filter(|w| !w.is_minimized) {
                prop_assert!(keys.insert(w.content_key.clone()), "duplicate visible key {}", w.content_key);
            }

            // Size floor.
            for w in windows.iter() {
                prop_assert!(w.size.width >= w.min_size.width);
                prop_assert!(w.size.height >= w.min_size.height);
            }

            // Distinct z-indices.
            let zs: HashSet<u32> = windows.iter().map(|w| w.z_index).collect();
            prop_assert_eq!(zs.len(), windows.len());

            // Ids are never reused.
            for w in windows.iter() {
                if !before.contains(&w.id) {
                    prop_assert!(seen_ids.insert(w.id), "id {} reused", w.id);
                }
            }

            // Focused, created, or restored windows end up on top.
            if let Some(id) = touched {
                prop_assert_eq!(reg.topmost(), Some(id));
                let z = reg.get(id).unwrap().z_index;
                prop_assert!(z > max_z_seen);
            }
            max_z_seen = max_z_seen.max(windows.iter().map(|w| w.z_index).max().unwrap_or(0));
        }
    }

    #[test]
    fn minimize_twice_restores_flag(opens in 1usize..=4, target in 0usize..4) {
        let mut reg: WindowRegistry<()> = WindowRegistry::new();
        let ids: Vec<WindowId> = (0..opens)
            .map(|i| reg.open_window(OpenWindow::new("w", format!("k{i}"), ())))
            .collect();
        let id = ids[target % opens];

        reg.minimize_window(id);
        prop_assert!(reg.get(id).unwrap().is_minimized);
        prop_assert_eq!(reg.visible_count(), opens - 1);

        reg.minimize_window(id);
        prop_assert!(!reg.get(id).unwrap().is_minimized);
        prop_assert_eq!(reg.visible_count(), opens);

        // Visible tiles are pairwise disjoint after the round trip.
        let rects: Vec<_> = reg.visible().map(|w| w.rect()).collect();
        for (i, a) in rects.iter().enumerate() {
            for b in rects.iter().skip(i + 1) {
                prop_assert!(!a.intersects(b));
            }
        }
    }
}
