//! Sand element: falls straight down, otherwise tries one random diagonal.

use crate::api::SandApi;

pub fn update_sand(api: &mut SandApi) {
    if api.is_empty(0, 1) {
        api.move_to(0, 1);
        return;
    }

    // One fresh coin per cell per tick. A blocked pick is not retried on the
    // other side; the grain re-rolls next tick.
    let dx = if api.coin_flip() { 1 } else { -1 };
    if api.is_empty(dx, 1) {
        api.move_to(dx, 1);
    }
}
