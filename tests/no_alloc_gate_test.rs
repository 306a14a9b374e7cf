use std::alloc::{GlobalAlloc, Layout, System};
use std::cell::Cell;

use gridhop::core::{GameSnapshot, GameState, StatsTracker};
use gridhop::types::{GameInput, GridSize, PointerButton};

// Counting is per thread so tests running in parallel do not see each
// other's allocations.
thread_local! {
    static TRACKING: Cell<bool> = const { Cell::new(false) };
    static ALLOCATIONS: Cell<usize> = const { Cell::new(0) };
}

struct TrackingAllocator;

#[global_allocator]
static ALLOCATOR: TrackingAllocator = TrackingAllocator;

fn note_allocation() {
    let tracking = TRACKING.try_with(Cell::get).unwrap_or(false);
    if tracking {
        let _ = ALLOCATIONS.try_with(|n| n.set(n.get() + 1));
    }
}

unsafe impl GlobalAlloc for TrackingAllocator {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        note_allocation();
        System.alloc(layout)
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout)
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        note_allocation();
        System.realloc(ptr, layout, new_size)
    }
}

/// Run `f` and return how many allocations it made on this thread.
fn allocations_during(f: impl FnOnce()) -> usize {
    ALLOCATIONS.with(|n| n.set(0));
    TRACKING.with(|t| t.set(true));
    f();
    TRACKING.with(|t| t.set(false));
    ALLOCATIONS.with(Cell::get)
}

#[test]
fn stats_recording_does_not_allocate() {
    let mut stats = StatsTracker::new();

    let allocs = allocations_during(|| {
        // Enough hits to cycle both rolling windows several times.
        for t in 0..100u64 {
            for _ in 0..20 {
                stats.record_hop();
            }
            stats.record_hit(t * 250);
            let _ = stats.display();
        }
        stats.reset();
    });

    assert_eq!(allocs, 0);
}

#[test]
fn session_hot_paths_do_not_allocate() {
    // Setup (outside counting) builds the grid, which does allocate.
    let mut gs = GameState::new(1);
    gs.start(GridSize::new(2).unwrap());
    let mut snap = GameSnapshot::default();

    let allocs = allocations_during(|| {
        for t in 0..200u64 {
            let _ = gs.apply(GameInput::Hop, t, |_, _| false);
            let _ = gs.apply(
                GameInput::Activate {
                    column: 1,
                    row: 1,
                    button: if t % 2 == 0 {
                        PointerButton::Primary
                    } else {
                        PointerButton::Secondary
                    },
                },
                t * 10,
                |_, _| true,
            );
            gs.snapshot_into(&mut snap);
            let _ = snap.fingerprint();
        }
    });

    assert_eq!(allocs, 0);
}
